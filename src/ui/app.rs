use std::time::Duration;

use eframe::egui;
use tokio::sync::mpsc;

use crate::common::{ConsoleCommand, ConsoleEvent};

use super::components::{
    activity_panel, alert, files_panel, header, messages_panel, peers_panel, private_panel,
    send_form,
};
use super::state::AppState;

/// Upper bound between repaints, so events from the network task show up.
const REPAINT_INTERVAL: Duration = Duration::from_millis(250);

pub struct ConsoleApp {
    state: AppState,
    command_sender: mpsc::Sender<ConsoleCommand>,
    event_receiver: mpsc::Receiver<ConsoleEvent>,
}

impl ConsoleApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        command_sender: mpsc::Sender<ConsoleCommand>,
        event_receiver: mpsc::Receiver<ConsoleEvent>,
        activity_limit: usize,
    ) -> Self {
        Self {
            state: AppState::new(activity_limit),
            command_sender,
            event_receiver,
        }
    }

    fn handle_console_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.state.apply(event);
        }
    }

    fn send_command(&mut self, command: ConsoleCommand) {
        if let Err(err) = self.command_sender.try_send(command) {
            log::warn!("Failed to send command to network: {err}");
            self.state
                .add_activity(None, format!("Request not sent: {err}"), true);
        }
    }

    fn choose_peer(&mut self, name: &str) {
        if self.state.choose_peer(name) {
            self.send_command(ConsoleCommand::RefreshPrivate);
        }
    }
}

impl eframe::App for ConsoleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_console_events();

        if alert::render(ctx, &self.state) {
            self.state.dismiss_alert();
        }
        let interactive = self.state.alert().is_none();

        egui::TopBottomPanel::top("identity_bar").show(ctx, |ui| {
            header::render(ui, &self.state);
        });

        let peers_actions = egui::SidePanel::left("peers_panel")
            .resizable(true)
            .default_width(240.0)
            .show(ctx, |ui| {
                ui.add_enabled_ui(interactive, |ui| peers_panel::render(ui, &mut self.state))
                    .inner
            })
            .inner;

        let files_actions = egui::SidePanel::right("files_panel")
            .resizable(true)
            .default_width(320.0)
            .show(ctx, |ui| {
                let actions = ui
                    .add_enabled_ui(interactive, |ui| files_panel::render(ui, &mut self.state))
                    .inner;
                ui.separator();
                activity_panel::render(ui, &self.state);
                actions
            })
            .inner;

        let (conversation_choice, send_actions) = egui::CentralPanel::default()
            .show(ctx, |ui| {
                messages_panel::render(ui, &self.state.rumors);
                ui.separator();
                ui.add_enabled_ui(interactive, |ui| {
                    let chosen = private_panel::render(ui, &self.state);
                    ui.separator();
                    (chosen, send_form::render(ui, &mut self.state))
                })
                .inner
            })
            .inner;

        if peers_actions.add_peer {
            if let Some(command) = self.state.submit_peer() {
                self.send_command(command);
            }
        }
        if files_actions.index_file {
            if let Some(command) = self.state.submit_index() {
                self.send_command(command);
            }
        }
        if let Some(name) = conversation_choice.or(send_actions.chosen_peer) {
            self.choose_peer(&name);
        }
        if send_actions.submit {
            if let Some(command) = self.state.submit_send() {
                self.send_command(command);
            }
        }

        ctx.request_repaint_after(REPAINT_INTERVAL);
    }
}
