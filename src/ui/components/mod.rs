pub mod activity_panel;
pub mod alert;
pub mod files_panel;
pub mod header;
pub mod messages_panel;
pub mod peers_panel;
pub mod private_panel;
pub mod send_form;
