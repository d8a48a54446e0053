//! The two peer selectors and how they survive a refreshed name list.

use crate::common::Name;

pub const CONVERSATION_PLACEHOLDER: &str = "Choose a conversation";
pub const DESTINATION_PLACEHOLDER: &str = "Choose a peer to interact with";

/// A peer-choice control: a disabled placeholder followed by the known names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeerSelector {
    placeholder: &'static str,
    options: Vec<Name>,
    selected: Option<Name>,
}

impl PeerSelector {
    pub fn new(placeholder: &'static str) -> Self {
        Self {
            placeholder,
            options: Vec::new(),
            selected: None,
        }
    }

    pub fn options(&self) -> &[Name] {
        &self.options
    }

    /// `None` while the placeholder is showing.
    pub fn selected(&self) -> Option<&Name> {
        self.selected.as_ref()
    }

    pub fn selected_text(&self) -> &str {
        self.selected.as_deref().unwrap_or(self.placeholder)
    }

    /// Selects `name` when it is one of the options; the placeholder cannot be chosen.
    pub fn select(&mut self, name: &str) -> bool {
        if self.options.iter().any(|option| option == name) {
            self.selected = Some(name.to_string());
            true
        } else {
            false
        }
    }

    /// Replaces the options, keeping the current choice only if it is still listed.
    pub fn rebuild(&mut self, names: &[Name]) {
        let previous = self.selected.take();
        self.options = names.to_vec();
        self.selected = previous.filter(|name| self.options.contains(name));
    }
}

/// Selector 1 picks the conversation to view, selector 2 the peer to address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    pub conversation: PeerSelector,
    pub destination: PeerSelector,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            conversation: PeerSelector::new(CONVERSATION_PLACEHOLDER),
            destination: PeerSelector::new(DESTINATION_PLACEHOLDER),
        }
    }
}

impl SelectionState {
    /// Rebuilds both selectors from a freshly fetched name list in one step.
    pub fn reconcile(&mut self, names: &[Name]) {
        self.conversation.rebuild(names);
        self.destination.rebuild(names);
    }

    /// A choice made in either selector is mirrored into the other one.
    pub fn choose(&mut self, name: &str) -> bool {
        let in_conversation = self.conversation.select(name);
        let in_destination = self.destination.select(name);
        in_conversation && in_destination
    }

    pub fn conversation_peer(&self) -> Option<&Name> {
        self.conversation.selected()
    }

    pub fn destination_peer(&self) -> Option<&Name> {
        self.destination.selected()
    }
}
