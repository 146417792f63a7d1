use serde::{Deserialize, Serialize};

use crate::types::*;

/// Trait for types that can handle error messages
///
/// This allows HTTP helper functions to work with Model without directly depending on it.
pub trait ModelErrorHandler {
    fn set_error(&mut self, error: String);
}

/// Application Model - the complete state
/// Also serves as the ViewModel when serialized
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct Model {
    // Wi-Fi workflow state
    pub network_list: NetworkListState,
    pub connection_status: Option<ConnectionStatus>,
    pub wifi_connect: WifiConnectState,
    /// Sequence number of the most recent discovery request; responses
    /// carrying an older number are stale and get discarded.
    pub discovery_seq: u64,

    // System stats (refreshed by the poll tick)
    pub system_stats: Option<SystemStats>,

    // Printer management state
    /// Name of the printer whose context menu is open, if any.
    pub open_printer_menu: Option<String>,
    /// Printer awaiting delete confirmation in the dialog.
    pub printer_to_delete: Option<String>,

    // Dialog overlays
    pub modals: Modals,

    // UI state
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub success_message: Option<String>,
    /// Blocking alert the shell must present before anything else
    /// (validation failures, printer action results).
    pub alert_message: Option<String>,
}

impl Model {
    /// Start a loading operation (sets is_loading=true, clears error)
    pub fn start_loading(&mut self) {
        self.is_loading = true;
        self.error_message = None;
    }

    /// Stop loading and clear error
    pub fn stop_loading(&mut self) {
        self.is_loading = false;
        self.error_message = None;
    }

    /// Set an error message and stop loading
    pub fn set_error(&mut self, error: String) {
        self.is_loading = false;
        self.error_message = Some(error);
    }

    /// Set an error message, stop loading, and return a render command
    pub fn set_error_and_render(
        &mut self,
        error: String,
    ) -> crux_core::Command<crate::Effect, crate::events::Event> {
        self.set_error(error);
        crux_core::render::render()
    }

    /// Raise a blocking alert and return a render command
    pub fn alert_and_render(
        &mut self,
        alert: impl Into<String>,
    ) -> crux_core::Command<crate::Effect, crate::events::Event> {
        self.alert_message = Some(alert.into());
        crux_core::render::render()
    }

    /// Clear the error message without affecting the loading state.
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

impl ModelErrorHandler for Model {
    fn set_error(&mut self, error: String) {
        Model::set_error(self, error)
    }
}
