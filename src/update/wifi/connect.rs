use crux_core::{render::render, Command};

use crate::events::{Event, WifiEvent};
use crate::form_post;
use crate::model::Model;
use crate::types::{ConnectRequest, ConnectResponse, ModalId, WifiConnectState};
use crate::Effect;

/// Handle a click on a network entry.
///
/// Known networks have cached credentials on the device, so they bypass
/// the password prompt entirely and connect right away.
pub fn handle_select_network(
    ssid: String,
    has_connected: bool,
    model: &mut Model,
) -> Command<Effect, Event> {
    if has_connected {
        return start_connect(ssid, None, true, model);
    }

    model.wifi_connect = WifiConnectState::PasswordPrompt {
        ssid,
        password: String::new(),
    };
    model.modals.show(ModalId::WifiPassword);
    render()
}

/// Track password keystrokes in the prompt or the retry form.
pub fn handle_password_changed(password: String, model: &mut Model) -> Command<Effect, Event> {
    match &mut model.wifi_connect {
        WifiConnectState::PasswordPrompt { password: field, .. }
        | WifiConnectState::Failed { password: field, .. } => {
            *field = password;
            render()
        }
        _ => Command::done(),
    }
}

/// Submit the manual-password connect form.
pub fn handle_submit_connect(model: &mut Model) -> Command<Effect, Event> {
    let (ssid, password) = match &model.wifi_connect {
        WifiConnectState::PasswordPrompt { ssid, password }
        | WifiConnectState::Failed { ssid, password, .. } => (ssid.clone(), password.clone()),
        _ => return Command::done(),
    };

    if password.is_empty() {
        return model.alert_and_render("Please enter a password");
    }

    start_connect(ssid, Some(password), false, model)
}

fn start_connect(
    ssid: String,
    password: Option<String>,
    known_network: bool,
    model: &mut Model,
) -> Command<Effect, Event> {
    let endpoint = if known_network {
        "/setup_wifi_connected"
    } else {
        "/setup_wifi"
    };
    model.wifi_connect = WifiConnectState::Connecting {
        ssid: ssid.clone(),
        known_network,
    };

    let request = ConnectRequest { ssid, password };
    form_post!(Wifi, WifiEvent, model, endpoint, ConnectResponse, "Wi-Fi connect",
        form: &request,
        expect_json: ConnectResponse
    )
}

/// Reconcile the connect outcome with the dialog state.
///
/// The workflow state is re-read here rather than captured at request
/// time; a response that arrives when no attempt is in progress (the
/// dialog was dismissed and reset) is dropped.
pub fn handle_connect_response(
    result: Result<ConnectResponse, String>,
    model: &mut Model,
) -> Command<Effect, Event> {
    model.stop_loading();

    let ssid = match &model.wifi_connect {
        WifiConnectState::Connecting { ssid, .. } => ssid.clone(),
        _ => {
            log::debug!("Ignoring connect response with no attempt in progress");
            return Command::done();
        }
    };

    match result {
        Ok(response) if response.success => {
            model.wifi_connect = WifiConnectState::Connected {
                ssid,
                requires_reboot: response.requires_reboot,
            };
            model.modals.hide(ModalId::WifiPassword);
            model.modals.show(ModalId::WifiConfirmation);
        }
        Ok(response) => {
            // Logical failure: the server message goes to the dialog verbatim,
            // with a regenerated password field carrying the attempted SSID.
            model.wifi_connect = WifiConnectState::Failed {
                ssid,
                message: response.message_or("Unknown error"),
                password: String::new(),
            };
        }
        Err(message) => {
            log::error!("Wi-Fi connect failed: {message}");
            model.wifi_connect = WifiConnectState::Failed {
                ssid,
                message,
                password: String::new(),
            };
        }
    }
    render()
}
