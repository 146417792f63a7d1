mod connect;
mod discovery;

pub use connect::{
    handle_connect_response, handle_password_changed, handle_select_network, handle_submit_connect,
};
pub use discovery::{handle_discover, handle_discover_response};

use crux_core::Command;

use crate::events::{Event, WifiEvent};
use crate::model::Model;
use crate::Effect;

/// Handle Wi-Fi discovery and connection workflow events
pub fn handle(event: WifiEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        WifiEvent::Discover => handle_discover(model),
        WifiEvent::DiscoverResponse { seq, result } => {
            handle_discover_response(seq, result, model)
        }

        WifiEvent::SelectNetwork {
            ssid,
            has_connected,
        } => handle_select_network(ssid, has_connected, model),
        WifiEvent::PasswordChanged { password } => handle_password_changed(password, model),
        WifiEvent::SubmitConnect => handle_submit_connect(model),
        WifiEvent::ConnectResponse(result) => handle_connect_response(result, model),
    }
}
