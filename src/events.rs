use serde::{Deserialize, Serialize};

use crate::types::*;

/// Events that can happen in the app, wrapped by domain
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum Event {
    Wifi(WifiEvent),
    Printer(PrinterEvent),
    System(SystemEvent),
    Ui(UiEvent),
}

/// Wi-Fi discovery and connection workflow events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum WifiEvent {
    /// Fetch the network list and current connection status.
    Discover,
    /// The user clicked a network entry.
    SelectNetwork { ssid: String, has_connected: bool },
    /// Keystroke in the password field of the prompt or retry form.
    PasswordChanged { password: String },
    /// Submit the manual-password connect form.
    SubmitConnect,

    // HTTP responses (internal events, skipped from serialization)
    #[serde(skip)]
    DiscoverResponse {
        seq: u64,
        result: Result<WifiScan, String>,
    },
    #[serde(skip)]
    ConnectResponse(Result<ConnectResponse, String>),
}

/// Printer management events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum PrinterEvent {
    /// Toggle the context menu of one printer (closes any other).
    ToggleMenu { name: String },
    /// Click landed outside any printer menu.
    CloseMenus,
    /// Open the delete confirmation dialog for a printer.
    RequestDelete { name: String },
    /// Confirm button of the delete dialog.
    ConfirmDelete,
    TestPrint { name: String },

    #[serde(skip)]
    DeleteResponse(Result<ApiResponse, String>),
    #[serde(skip)]
    TestPrintResponse(Result<ApiResponse, String>),
}

/// System stats polling and device maintenance events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum SystemEvent {
    /// Shell timer tick; fires every `STATS_POLL_INTERVAL_SECONDS`.
    StatsTick,
    SubmitHostname { hostname: String },
    Reboot,
    RunSystemUpdate,

    #[serde(skip)]
    StatsResponse(Result<SystemStats, String>),
    #[serde(skip)]
    HostnameResponse(Result<(), String>),
    #[serde(skip)]
    RebootResponse(Result<(), String>),
    #[serde(skip)]
    SystemUpdateResponse(Result<(), String>),
}

/// Dialog lifecycle and message-clearing events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum UiEvent {
    ShowModal { id: ModalId },
    HideModal { id: ModalId },
    /// Shell-reported CSS transition completion for a modal.
    ModalTransitionEnd { id: ModalId },
    /// Escape key; dismisses the modals in the fixed allow-list.
    EscapePressed,
    /// Click directly on a modal's overlay background.
    OverlayClicked { id: ModalId },
    ClearError,
    ClearSuccess,
    ClearAlert,
}
