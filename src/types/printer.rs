use serde::{Deserialize, Serialize};

/// Icon descriptor the stats endpoint attaches to each printer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusIcon {
    pub class: String,
    pub color: String,
}

/// One printer entry from the stats payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PrinterStatus {
    pub name: String,
    /// Raw CUPS status code.
    #[serde(default)]
    pub status: i64,
    pub status_text: String,
    pub status_icon: StatusIcon,
}

/// Standard `{success, message}` payload of the action endpoints
/// (printer deletion, test print, Wi-Fi connect without the reboot flag).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiResponse {
    /// The server message, or `fallback` when the payload carried none.
    pub fn message_or(&self, fallback: &str) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| fallback.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_printer_entry() {
        let json = r##"{
            "name": "EPSON_TM-T20III",
            "status": 3,
            "status_text": "Ready",
            "status_icon": {"class": "fas fa-check-circle", "color": "#2ecc71"}
        }"##;

        let printer: PrinterStatus = serde_json::from_str(json).unwrap();
        assert_eq!(printer.name, "EPSON_TM-T20III");
        assert_eq!(printer.status, 3);
        assert_eq!(printer.status_icon.class, "fas fa-check-circle");
    }

    #[test]
    fn message_or_falls_back_when_absent() {
        let response: ApiResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert_eq!(response.message_or("done"), "done");

        let response: ApiResponse =
            serde_json::from_str(r#"{"success": false, "message": "no such printer"}"#).unwrap();
        assert_eq!(response.message_or("done"), "no such printer");
    }
}
