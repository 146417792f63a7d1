use serde::{Deserialize, Serialize};

/// A visible Wi-Fi network as reported by a discovery scan.
///
/// Wire names follow the device API: snake_case throughout except
/// `hasConnected`, which the endpoint emits in camelCase.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WifiNetwork {
    pub ssid: String,
    /// Signal level in dBm (typically -30 strong to -90 weak).
    pub signal_level: i32,
    /// Signal level mapped to 0-100 for the proportional bar.
    pub signal_percent: u8,
    pub encrypted: bool,
    /// The device has connected to this network before and holds cached
    /// credentials, so no password prompt is needed.
    #[serde(rename = "hasConnected", default)]
    pub has_connected: bool,
}

impl WifiNetwork {
    /// Whether this entry matches the currently connected network.
    ///
    /// Exact string comparison on the SSID, no case-folding or trimming.
    pub fn is_current(&self, status: &ConnectionStatus) -> bool {
        status.connected && status.ssid.as_deref() == Some(self.ssid.as_str())
    }

    /// SSID with embedded quotes and backslashes escaped, safe for
    /// inclusion in generated markup attributes and inline handlers.
    pub fn escaped_ssid(&self) -> String {
        escape_ssid(&self.ssid)
    }
}

/// Escape backslashes and quote characters in an SSID for embedding in
/// generated markup.
pub fn escape_ssid(ssid: &str) -> String {
    let mut escaped = String::with_capacity(ssid.len());
    for c in ssid.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '"' => escaped.push_str("\\\""),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Icon class for a given signal strength.
///
/// One icon for all strengths for now.
/// TODO: map tiers to distinct icons once the tiered icon set is bought.
pub fn signal_icon_class(_signal_percent: u8) -> &'static str {
    "fa-solid fa-wifi"
}

/// The device's current network attachment.
///
/// `ssid` and `ip_address` are only present when `connected` is true.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConnectionStatus {
    pub connected: bool,
    #[serde(default)]
    pub ssid: Option<String>,
    #[serde(default)]
    pub ip_address: Option<String>,
}

/// Payload of the discovery endpoint: visible networks plus the current
/// connection status, in one response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WifiScan {
    pub networks: Vec<WifiNetwork>,
    pub current_status: ConnectionStatus,
}

/// Form payload for the connect endpoints.
///
/// The known-network endpoint takes `ssid` only; the password field is
/// omitted from the encoded form when absent.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ConnectRequest {
    pub ssid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Response of the connect endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConnectResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    /// Set when the device restarts its services after the change, so the
    /// confirmation dialog can announce it.
    #[serde(default)]
    pub requires_reboot: bool,
}

impl ConnectResponse {
    /// The server message, or `fallback` when the payload carried none.
    pub fn message_or(&self, fallback: &str) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// State of the network list area.
///
/// `Loaded` with an empty vector ("no networks found") and `Error` are
/// distinct variants; the two renderings must never be conflated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum NetworkListState {
    #[default]
    Idle,
    /// A scan is in flight; the refresh affordance renders busy.
    Loading,
    /// Networks exactly as received: order preserved, no client-side sorting.
    Loaded(Vec<WifiNetwork>),
    Error(String),
}

impl NetworkListState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// State machine for one connection attempt.
///
/// ```text
/// Idle ──select (new network)──▶ PasswordPrompt ──submit──▶ Connecting
///   │                                  ▲                        │
///   └──select (known network)──────────┼────────────────────────┤
///                                      │ retry                  │
///                                 Failed ◀──────failure─────────┤
///                                                               │
///                                 Connected ◀─────success───────┘
/// ```
///
/// `Failed` keeps the attempted SSID and a fresh password field so the
/// user can retry inside the same dialog. `Connected` is terminal for the
/// attempt; dismissing the confirmation returns to `Idle`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum WifiConnectState {
    #[default]
    Idle,
    /// Waiting for the user to type a password for the selected network.
    PasswordPrompt { ssid: String, password: String },
    /// A connect request is in flight; dialog buttons are disabled and the
    /// attempt cannot be cancelled.
    Connecting { ssid: String, known_network: bool },
    /// The attempt failed; `message` is the server-supplied or transport
    /// error text, verbatim.
    Failed {
        ssid: String,
        message: String,
        password: String,
    },
    Connected { ssid: String, requires_reboot: bool },
}

impl WifiConnectState {
    /// SSID of the attempt this state belongs to, if any.
    pub fn ssid(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::PasswordPrompt { ssid, .. }
            | Self::Connecting { ssid, .. }
            | Self::Failed { ssid, .. }
            | Self::Connected { ssid, .. } => Some(ssid),
        }
    }

    /// Whether dialog action buttons should be disabled.
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Connecting { .. })
    }
}
