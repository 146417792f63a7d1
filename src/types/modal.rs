use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One identifier per dialog purpose.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum ModalId {
    WifiPassword,
    WifiConfirmation,
    DeletePrinter,
    Hostname,
    Update,
    Reboot,
}

/// Modals the Escape key is allowed to dismiss.
pub const ESCAPE_DISMISSIBLE: &[ModalId] = &[ModalId::Reboot, ModalId::Hostname, ModalId::Update];

/// Visibility of a dialog overlay, driven by show/hide requests and
/// transition-end reports from the shell.
///
/// ```text
/// Hidden ──show──▶ Opening ──transition end──▶ Visible
///    ▲                │                           │
///    │              hide│       ┌──────hide───────┘
///    │                ▼        ▼
///    └──transition end── Closing ──show──▶ Opening   (reopen mid-close)
/// ```
///
/// The element only stops being interactable once `Closing` completes;
/// callers must not assume immediate invisibility after a hide request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum ModalVisibility {
    #[default]
    Hidden,
    Opening,
    Visible,
    Closing,
}

impl ModalVisibility {
    fn on_show(self) -> Self {
        match self {
            Self::Hidden | Self::Closing => Self::Opening,
            open => open,
        }
    }

    fn on_hide(self) -> Self {
        match self {
            Self::Opening | Self::Visible => Self::Closing,
            closed => closed,
        }
    }

    fn on_transition_end(self) -> Self {
        match self {
            Self::Opening => Self::Visible,
            Self::Closing => Self::Hidden,
            stable => stable,
        }
    }
}

/// Visibility of every dialog overlay on the page.
///
/// Generic open/close lifecycle shared by all workflows. At most one
/// modal is expected to be open at a time in normal flow; overlapping
/// opens are not guarded against.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Modals {
    states: HashMap<ModalId, ModalVisibility>,
}

impl Modals {
    pub fn visibility(&self, id: ModalId) -> ModalVisibility {
        self.states.get(&id).copied().unwrap_or_default()
    }

    /// Begin showing a modal. Idempotent when already opening or visible.
    /// Returns whether the visibility changed.
    pub fn show(&mut self, id: ModalId) -> bool {
        self.transition(id, ModalVisibility::on_show)
    }

    /// Begin hiding a modal. Idempotent when already closing or hidden.
    /// Returns whether the visibility changed.
    pub fn hide(&mut self, id: ModalId) -> bool {
        self.transition(id, ModalVisibility::on_hide)
    }

    /// A transition reported complete by the shell (CSS `transitionend`,
    /// or its fixed-delay fallback). Ignored in stable states.
    pub fn transition_end(&mut self, id: ModalId) -> bool {
        self.transition(id, ModalVisibility::on_transition_end)
    }

    /// Opening or fully visible.
    pub fn is_open(&self, id: ModalId) -> bool {
        matches!(
            self.visibility(id),
            ModalVisibility::Opening | ModalVisibility::Visible
        )
    }

    fn transition(&mut self, id: ModalId, step: fn(ModalVisibility) -> ModalVisibility) -> bool {
        let current = self.visibility(id);
        let next = step(current);
        if next != current {
            self.states.insert(id, next);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_then_transition_end_reaches_visible() {
        let mut modals = Modals::default();
        assert_eq!(
            modals.visibility(ModalId::Hostname),
            ModalVisibility::Hidden
        );

        assert!(modals.show(ModalId::Hostname));
        assert_eq!(
            modals.visibility(ModalId::Hostname),
            ModalVisibility::Opening
        );

        assert!(modals.transition_end(ModalId::Hostname));
        assert_eq!(
            modals.visibility(ModalId::Hostname),
            ModalVisibility::Visible
        );
    }

    #[test]
    fn show_is_idempotent_while_open() {
        let mut modals = Modals::default();
        modals.show(ModalId::Reboot);
        assert!(!modals.show(ModalId::Reboot));

        modals.transition_end(ModalId::Reboot);
        assert!(!modals.show(ModalId::Reboot));
        assert_eq!(modals.visibility(ModalId::Reboot), ModalVisibility::Visible);
    }

    #[test]
    fn hide_closes_only_after_transition_end() {
        let mut modals = Modals::default();
        modals.show(ModalId::Update);
        modals.transition_end(ModalId::Update);

        assert!(modals.hide(ModalId::Update));
        // Still on screen until the closing transition finishes.
        assert_eq!(modals.visibility(ModalId::Update), ModalVisibility::Closing);

        assert!(modals.transition_end(ModalId::Update));
        assert_eq!(modals.visibility(ModalId::Update), ModalVisibility::Hidden);
    }

    #[test]
    fn reopen_during_close_goes_back_to_opening() {
        let mut modals = Modals::default();
        modals.show(ModalId::WifiPassword);
        modals.transition_end(ModalId::WifiPassword);
        modals.hide(ModalId::WifiPassword);

        assert!(modals.show(ModalId::WifiPassword));
        assert_eq!(
            modals.visibility(ModalId::WifiPassword),
            ModalVisibility::Opening
        );
    }

    #[test]
    fn transition_end_in_stable_state_is_a_no_op() {
        let mut modals = Modals::default();
        assert!(!modals.transition_end(ModalId::DeletePrinter));

        modals.show(ModalId::DeletePrinter);
        modals.transition_end(ModalId::DeletePrinter);
        assert!(!modals.transition_end(ModalId::DeletePrinter));
        assert_eq!(
            modals.visibility(ModalId::DeletePrinter),
            ModalVisibility::Visible
        );
    }

    #[test]
    fn modals_are_tracked_independently() {
        let mut modals = Modals::default();
        modals.show(ModalId::Hostname);
        assert!(modals.is_open(ModalId::Hostname));
        assert!(!modals.is_open(ModalId::Reboot));
    }
}
