use std::collections::{BTreeMap, VecDeque};
use std::fmt;

use chrono::{DateTime, Utc};

use crate::common::{
    ConsoleCommand, ConsoleEvent, Conversations, IndexedFile, Name, NodeIdentity,
    PrivateMessage, Resource, RumorMessage,
};

use super::forms::{Field, IndexForm, InputError, PeerForm, SendForm};
use super::selection::SelectionState;

pub const DEFAULT_ACTIVITY_LIMIT: usize = 100;

/// Entry of the activity log shown next to the indexed files.
#[derive(Debug, Clone)]
pub struct ActivityEntry {
    pub timestamp: DateTime<Utc>,
    pub resource: Option<Resource>,
    pub message: String,
    pub is_error: bool,
}

/// Blocking notification; `focus` receives keyboard focus once dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub message: String,
    pub focus: Option<Field>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Speaker {
    Peer(Name),
    Me,
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Speaker::Peer(name) => f.write_str(name),
            Speaker::Me => f.write_str("Me"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationLine {
    pub speaker: Speaker,
    pub text: String,
}

/// The private conversation currently on screen and the peer it belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationView {
    peer: Option<Name>,
    lines: Vec<ConversationLine>,
}

impl ConversationView {
    /// Messages whose origin is `peer` are theirs, every other one is ours.
    pub fn build(peer: &str, messages: &[PrivateMessage]) -> Self {
        let lines = messages
            .iter()
            .map(|message| ConversationLine {
                speaker: if message.origin == peer {
                    Speaker::Peer(message.origin.clone())
                } else {
                    Speaker::Me
                },
                text: message.text.clone(),
            })
            .collect();
        Self {
            peer: Some(peer.to_string()),
            lines,
        }
    }

    pub fn peer(&self) -> Option<&Name> {
        self.peer.as_ref()
    }

    pub fn lines(&self) -> &[ConversationLine] {
        &self.lines
    }

    pub fn clear(&mut self) {
        self.peer = None;
        self.lines.clear();
    }

    pub fn transcript(&self) -> String {
        self.lines
            .iter()
            .map(|line| format!("{} :\n{}\n", line.speaker, line.text))
            .collect()
    }
}

pub fn rumor_transcript(rumors: &[RumorMessage]) -> String {
    rumors
        .iter()
        .map(|rumor| format!("{} says :\n{}\n", rumor.origin, rumor.text))
        .collect()
}

/// Client state owned by the UI thread.
///
/// Every resource view is replaced wholesale by the matching event; the node
/// stays the only source of truth.
pub struct AppState {
    pub identity: Option<NodeIdentity>,
    pub rumors: Vec<RumorMessage>,
    pub conversation: ConversationView,
    pub peers: Vec<String>,
    pub names: Vec<Name>,
    pub files: Vec<IndexedFile>,
    pub selection: SelectionState,
    pub send_form: SendForm,
    pub peer_form: PeerForm,
    pub index_form: IndexForm,
    /// Blocking notifications, shown one at a time in arrival order.
    alerts: VecDeque<Alert>,
    pub pending_focus: Option<Field>,
    /// Last error per resource; absent or `None` when healthy.
    pub status: BTreeMap<Resource, Option<String>>,
    pub activity: Vec<ActivityEntry>,
    activity_limit: usize,
}

impl AppState {
    pub fn new(activity_limit: usize) -> Self {
        Self {
            identity: None,
            rumors: Vec::new(),
            conversation: ConversationView::default(),
            peers: Vec::new(),
            names: Vec::new(),
            files: Vec::new(),
            selection: SelectionState::default(),
            send_form: SendForm::default(),
            peer_form: PeerForm::default(),
            index_form: IndexForm::default(),
            alerts: VecDeque::new(),
            pending_focus: None,
            status: BTreeMap::new(),
            activity: Vec::new(),
            activity_limit: activity_limit.max(1),
        }
    }

    pub fn apply(&mut self, event: ConsoleEvent) {
        match event {
            ConsoleEvent::Identity(identity) => self.identity = Some(identity),
            ConsoleEvent::Messages(rumors) => self.rumors = rumors,
            ConsoleEvent::Private(conversations) => self.apply_private(&conversations),
            ConsoleEvent::Peers(peers) => self.peers = peers,
            ConsoleEvent::Names(names) => self.apply_names(names),
            ConsoleEvent::Files(files) => self.files = files,
            ConsoleEvent::Notice(message) => {
                self.add_activity(None, message.clone(), false);
                self.raise_alert(message, None);
            }
            ConsoleEvent::Status { resource, error } => self.apply_status(resource, error),
        }
    }

    /// Rebuilds both selectors and drops a conversation whose peer lost its selection.
    fn apply_names(&mut self, names: Vec<Name>) {
        self.selection.reconcile(&names);
        if self.conversation.peer() != self.selection.conversation_peer() {
            self.conversation.clear();
        }
        self.names = names;
    }

    /// Shows the selected peer's conversation; without one, the view is left as is.
    fn apply_private(&mut self, conversations: &Conversations) {
        let Some(peer) = self.selection.conversation_peer() else {
            return;
        };
        let Some(messages) = conversations.get(peer) else {
            return;
        };
        self.conversation = ConversationView::build(peer, messages);
    }

    fn apply_status(&mut self, resource: Resource, error: Option<String>) {
        let previous = self.status.insert(resource, error.clone()).flatten();
        match (previous, error) {
            (_, Some(error)) => self.add_activity(Some(resource), error, true),
            (Some(_), None) => {
                self.add_activity(Some(resource), format!("{resource} reachable again"), false)
            }
            (None, None) => {}
        }
    }

    /// Selects `name` in both selectors. Returns whether private messages should be re-fetched.
    pub fn choose_peer(&mut self, name: &str) -> bool {
        if !self.selection.choose(name) {
            return false;
        }
        if self.conversation.peer().map(String::as_str) != Some(name) {
            self.conversation.clear();
        }
        true
    }

    pub fn submit_send(&mut self) -> Option<ConsoleCommand> {
        let result = self.send_form.submit(&self.selection);
        self.accept(result).inspect(|_| {
            self.send_form.reset();
            self.pending_focus = Some(Field::MessageText);
        })
    }

    pub fn submit_peer(&mut self) -> Option<ConsoleCommand> {
        let result = self.peer_form.submit();
        self.accept(result).inspect(|_| self.peer_form.reset())
    }

    pub fn submit_index(&mut self) -> Option<ConsoleCommand> {
        let result = self.index_form.submit();
        self.accept(result).inspect(|_| self.index_form.reset())
    }

    fn accept(&mut self, result: Result<ConsoleCommand, InputError>) -> Option<ConsoleCommand> {
        match result {
            Ok(command) => Some(command),
            Err(err) => {
                log::debug!("Submission refused: {err}");
                self.raise_alert(err.to_string(), Some(err.field));
                None
            }
        }
    }

    /// The notification currently on screen.
    pub fn alert(&self) -> Option<&Alert> {
        self.alerts.front()
    }

    pub fn raise_alert(&mut self, message: String, focus: Option<Field>) {
        self.alerts.push_back(Alert { message, focus });
    }

    /// Closes the visible notification and remembers the field it points at.
    pub fn dismiss_alert(&mut self) {
        if let Some(alert) = self.alerts.pop_front() {
            if alert.focus.is_some() {
                self.pending_focus = alert.focus;
            }
        }
    }

    /// True once for the field that should grab focus next, after every alert is closed.
    pub fn take_focus(&mut self, field: Field) -> bool {
        if self.alerts.is_empty() && self.pending_focus == Some(field) {
            self.pending_focus = None;
            true
        } else {
            false
        }
    }

    pub fn add_activity(&mut self, resource: Option<Resource>, message: String, is_error: bool) {
        self.activity.push(ActivityEntry {
            timestamp: Utc::now(),
            resource,
            message,
            is_error,
        });

        if self.activity.len() > self.activity_limit {
            let excess = self.activity.len() - self.activity_limit;
            self.activity.drain(..excess);
        }
    }

    pub fn failing_resources(&self) -> impl Iterator<Item = (Resource, &str)> {
        self.status
            .iter()
            .filter_map(|(resource, error)| error.as_deref().map(|error| (*resource, error)))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_ACTIVITY_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::forms::SendMode;

    fn names(list: &[&str]) -> Vec<Name> {
        list.iter().map(|name| name.to_string()).collect()
    }

    fn private(origin: &str, text: &str) -> PrivateMessage {
        PrivateMessage {
            origin: origin.into(),
            text: text.into(),
        }
    }

    fn conversations(peer: &str, messages: Vec<PrivateMessage>) -> Conversations {
        let mut map = Conversations::new();
        map.insert(peer.into(), messages);
        map
    }

    #[test]
    fn rumors_render_in_backend_order() {
        let rumors = vec![
            RumorMessage {
                origin: "bob".into(),
                text: "second?".into(),
            },
            RumorMessage {
                origin: "alice".into(),
                text: "first?".into(),
            },
        ];
        assert_eq!(
            rumor_transcript(&rumors),
            "bob says :\nsecond?\nalice says :\nfirst?\n"
        );
    }

    #[test]
    fn conversation_marks_local_messages_as_me() {
        let view = ConversationView::build(
            "bob",
            &[private("bob", "hi"), private("nodeA", "hello bob")],
        );
        assert_eq!(view.transcript(), "bob :\nhi\nMe :\nhello bob\n");
    }

    #[test]
    fn private_refresh_shows_only_the_selected_peer() {
        let mut state = AppState::default();
        state.apply(ConsoleEvent::Names(names(&["alice", "bob"])));
        assert!(state.choose_peer("bob"));

        let mut map = conversations("bob", vec![private("bob", "yo")]);
        map.insert("alice".into(), vec![private("alice", "not for view")]);
        state.apply(ConsoleEvent::Private(map));

        assert_eq!(state.conversation.peer().map(String::as_str), Some("bob"));
        assert_eq!(state.conversation.transcript(), "bob :\nyo\n");
    }

    #[test]
    fn private_refresh_without_key_leaves_view_untouched() {
        let mut state = AppState::default();
        state.apply(ConsoleEvent::Names(names(&["bob"])));
        state.choose_peer("bob");
        state.apply(ConsoleEvent::Private(conversations(
            "bob",
            vec![private("bob", "yo")],
        )));

        state.apply(ConsoleEvent::Private(Conversations::new()));

        assert_eq!(state.conversation.transcript(), "bob :\nyo\n");
    }

    #[test]
    fn private_refresh_without_selection_is_ignored() {
        let mut state = AppState::default();
        state.apply(ConsoleEvent::Names(names(&["bob"])));
        state.apply(ConsoleEvent::Private(conversations(
            "bob",
            vec![private("bob", "yo")],
        )));
        assert!(state.conversation.lines().is_empty());
    }

    #[test]
    fn switching_peer_clears_the_previous_conversation() {
        let mut state = AppState::default();
        state.apply(ConsoleEvent::Names(names(&["alice", "bob"])));
        state.choose_peer("bob");
        state.apply(ConsoleEvent::Private(conversations(
            "bob",
            vec![private("bob", "yo")],
        )));

        assert!(state.choose_peer("alice"));

        assert!(state.conversation.lines().is_empty());
        assert_eq!(
            state.selection.destination_peer().map(String::as_str),
            Some("alice")
        );
    }

    #[test]
    fn names_refresh_keeps_selection_and_conversation() {
        let mut state = AppState::default();
        state.apply(ConsoleEvent::Names(names(&["alice", "bob"])));
        state.choose_peer("bob");
        state.apply(ConsoleEvent::Private(conversations(
            "bob",
            vec![private("bob", "yo")],
        )));

        state.apply(ConsoleEvent::Names(names(&["alice", "bob", "carol"])));
        assert_eq!(state.selection.conversation_peer().map(String::as_str), Some("bob"));
        assert_eq!(state.conversation.transcript(), "bob :\nyo\n");

        state.apply(ConsoleEvent::Names(names(&["alice", "carol"])));
        assert_eq!(state.selection.conversation_peer(), None);
        assert!(state.conversation.lines().is_empty());
        assert_eq!(state.names, names(&["alice", "carol"]));
    }

    #[test]
    fn refused_submission_raises_alert_and_keeps_input() {
        let mut state = AppState::default();
        state.send_form.mode = SendMode::Private;
        state.send_form.text = "secret".into();

        assert_eq!(state.submit_send(), None);

        assert_eq!(state.send_form.text, "secret");
        let alert = state.alert().cloned().unwrap();
        assert_eq!(alert.focus, Some(Field::Destination));
        assert_eq!(
            alert.message,
            "You have to select a peer to send a private message"
        );

        state.dismiss_alert();
        assert!(state.alert().is_none());
        assert!(state.take_focus(Field::Destination));
        assert!(!state.take_focus(Field::Destination));
    }

    #[test]
    fn accepted_submission_resets_the_form() {
        let mut state = AppState::default();
        state.send_form.text = "hello all".into();

        assert_eq!(
            state.submit_send(),
            Some(ConsoleCommand::SendPublic {
                text: "hello all".into()
            })
        );
        assert!(state.send_form.text.is_empty());
        assert_eq!(state.pending_focus, Some(Field::MessageText));

        state.peer_form.ip = "10.1.1.1".into();
        state.peer_form.port = "5005".into();
        assert!(state.submit_peer().is_some());
        assert!(state.peer_form.ip.is_empty());
        assert!(state.peer_form.port.is_empty());
    }

    #[test]
    fn notice_is_a_blocking_alert_without_focus() {
        let mut state = AppState::default();
        state.apply(ConsoleEvent::Notice("Your file was correctly downloaded !".into()));
        assert_eq!(
            state.alert(),
            Some(&Alert {
                message: "Your file was correctly downloaded !".into(),
                focus: None
            })
        );
    }

    #[test]
    fn notice_queues_behind_an_open_input_alert() {
        let mut state = AppState::default();
        state.send_form.mode = SendMode::Private;
        state.send_form.text = "secret".into();
        assert_eq!(state.submit_send(), None);

        state.apply(ConsoleEvent::Notice("Your file was correctly downloaded !".into()));

        assert_eq!(state.alert().map(|alert| alert.focus), Some(Some(Field::Destination)));
        state.dismiss_alert();
        assert_eq!(
            state.alert().map(|alert| alert.message.as_str()),
            Some("Your file was correctly downloaded !")
        );
        assert!(!state.take_focus(Field::Destination));
        state.dismiss_alert();
        assert!(state.alert().is_none());
        assert!(state.take_focus(Field::Destination));
    }

    #[test]
    fn backend_errors_are_surfaced_until_the_next_success() {
        let mut state = AppState::default();
        state.apply(ConsoleEvent::Peers(vec!["10.0.0.1:5000".into()]));
        state.apply(ConsoleEvent::Status {
            resource: Resource::Peers,
            error: Some("connection refused".into()),
        });

        assert_eq!(state.peers, vec!["10.0.0.1:5000".to_string()]);
        assert_eq!(
            state.failing_resources().collect::<Vec<_>>(),
            vec![(Resource::Peers, "connection refused")]
        );

        state.apply(ConsoleEvent::Status {
            resource: Resource::Peers,
            error: None,
        });
        assert_eq!(state.failing_resources().count(), 0);
        assert_eq!(state.activity.len(), 2);
        assert!(state.activity[0].is_error);
        assert!(!state.activity[1].is_error);
    }

    #[test]
    fn activity_log_is_bounded() {
        let mut state = AppState::new(3);
        for i in 0..5 {
            state.add_activity(None, format!("event {i}"), false);
        }
        let messages: Vec<_> = state.activity.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["event 2", "event 3", "event 4"]);
    }
}
