use crux_core::{render::render, Command};

use crate::events::{Event, UiEvent};
use crate::model::Model;
use crate::types::{ModalId, WifiConnectState, ESCAPE_DISMISSIBLE};
use crate::update_field;
use crate::Effect;

/// Handle dialog lifecycle and message-clearing events
pub fn handle(event: UiEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        UiEvent::ShowModal { id } => {
            model.modals.show(id);
            render()
        }

        UiEvent::HideModal { id } | UiEvent::OverlayClicked { id } => dismiss(id, model),

        UiEvent::ModalTransitionEnd { id } => {
            if model.modals.transition_end(id) {
                render()
            } else {
                Command::done()
            }
        }

        UiEvent::EscapePressed => {
            // Escape only dismisses the modals in the fixed allow-list,
            // and closes every one of them that is currently open.
            let mut changed = false;
            for id in ESCAPE_DISMISSIBLE {
                if model.modals.is_open(*id) {
                    changed |= model.modals.hide(*id);
                }
            }
            if changed {
                render()
            } else {
                Command::done()
            }
        }

        UiEvent::ClearError => update_field!(model.error_message, None),
        UiEvent::ClearSuccess => update_field!(model.success_message, None),
        UiEvent::ClearAlert => update_field!(model.alert_message, None),
    }
}

/// Hide a modal and release whatever workflow state it was holding.
fn dismiss(id: ModalId, model: &mut Model) -> Command<Effect, Event> {
    model.modals.hide(id);

    match id {
        ModalId::WifiPassword => {
            // The selection lives until the dialog is dismissed. An attempt
            // in flight cannot be cancelled; the response handler decides
            // what happens when it settles.
            if matches!(
                model.wifi_connect,
                WifiConnectState::PasswordPrompt { .. } | WifiConnectState::Failed { .. }
            ) {
                model.wifi_connect = WifiConnectState::Idle;
            }
        }
        ModalId::WifiConfirmation => {
            if matches!(model.wifi_connect, WifiConnectState::Connected { .. }) {
                model.wifi_connect = WifiConnectState::Idle;
            }
        }
        ModalId::DeletePrinter => {
            model.printer_to_delete = None;
        }
        _ => {}
    }

    render()
}
