use crux_core::{render::render, Command};

use crate::events::{Event, WifiEvent};
use crate::http_helpers::{build_url, process_json_response};
use crate::model::Model;
use crate::types::{NetworkListState, WifiScan};
use crate::{Effect, HttpCmd};

/// Start a network scan.
///
/// Each scan gets a fresh sequence number; the response event carries it
/// back so responses overtaken by a newer refresh can be discarded
/// instead of overwriting newer data.
pub fn handle_discover(model: &mut Model) -> Command<Effect, Event> {
    model.discovery_seq = model.discovery_seq.wrapping_add(1);
    let seq = model.discovery_seq;
    model.network_list = NetworkListState::Loading;

    Command::all([
        render(),
        HttpCmd::get(build_url("/api/wifi_networks"))
            .build()
            .then_send(move |result| {
                let result = process_json_response("Network scan", result);
                Event::Wifi(WifiEvent::DiscoverResponse { seq, result })
            }),
    ])
}

/// Handle the scan response.
///
/// Failures are logged and shown as the list error state; there is no
/// automatic retry, the user refreshes manually.
pub fn handle_discover_response(
    seq: u64,
    result: Result<WifiScan, String>,
    model: &mut Model,
) -> Command<Effect, Event> {
    if seq != model.discovery_seq {
        log::debug!("Discarding stale network scan response (seq {seq})");
        return Command::done();
    }

    match result {
        Ok(scan) => {
            // Status first, then the list: entries are marked as "current"
            // against the connection panel rendered above them.
            model.connection_status = Some(scan.current_status);
            model.network_list = NetworkListState::Loaded(scan.networks);
        }
        Err(e) => {
            log::error!("Network scan failed: {e}");
            model.network_list = NetworkListState::Error(e);
        }
    }
    render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ConnectionStatus, WifiNetwork};

    fn scan_with(networks: Vec<WifiNetwork>) -> WifiScan {
        WifiScan {
            networks,
            current_status: ConnectionStatus::default(),
        }
    }

    #[test]
    fn discover_enters_loading_and_bumps_sequence() {
        let mut model = Model::default();

        let _ = handle_discover(&mut model);

        assert!(model.network_list.is_loading());
        assert_eq!(model.discovery_seq, 1);

        let _ = handle_discover(&mut model);
        assert_eq!(model.discovery_seq, 2);
    }

    #[test]
    fn response_preserves_order_and_length() {
        let mut model = Model::default();
        let _ = handle_discover(&mut model);

        let networks: Vec<WifiNetwork> = ["Zeta", "Alpha", "Mid"]
            .iter()
            .map(|ssid| WifiNetwork {
                ssid: ssid.to_string(),
                ..Default::default()
            })
            .collect();

        let _ = handle_discover_response(1, Ok(scan_with(networks.clone())), &mut model);

        match &model.network_list {
            NetworkListState::Loaded(listed) => {
                assert_eq!(listed.len(), 3);
                let order: Vec<&str> = listed.iter().map(|n| n.ssid.as_str()).collect();
                assert_eq!(order, vec!["Zeta", "Alpha", "Mid"]);
            }
            other => panic!("expected Loaded, got {other:?}"),
        }
    }

    #[test]
    fn empty_scan_is_loaded_not_error() {
        let mut model = Model::default();
        let _ = handle_discover(&mut model);

        let _ = handle_discover_response(1, Ok(scan_with(vec![])), &mut model);

        assert_eq!(model.network_list, NetworkListState::Loaded(vec![]));
    }

    #[test]
    fn failed_scan_is_error_not_empty() {
        let mut model = Model::default();
        let _ = handle_discover(&mut model);

        let _ = handle_discover_response(
            1,
            Err("Network scan failed: HTTP 500".to_string()),
            &mut model,
        );

        assert!(matches!(model.network_list, NetworkListState::Error(_)));
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut model = Model::default();
        let _ = handle_discover(&mut model); // seq 1
        let _ = handle_discover(&mut model); // seq 2

        // The first response arrives late, after the second refresh.
        let stale = vec![WifiNetwork {
            ssid: "Stale".to_string(),
            ..Default::default()
        }];
        let _ = handle_discover_response(1, Ok(scan_with(stale)), &mut model);

        // Still waiting for the response to the second scan.
        assert!(model.network_list.is_loading());

        let fresh = vec![WifiNetwork {
            ssid: "Fresh".to_string(),
            ..Default::default()
        }];
        let _ = handle_discover_response(2, Ok(scan_with(fresh)), &mut model);

        match &model.network_list {
            NetworkListState::Loaded(listed) => assert_eq!(listed[0].ssid, "Fresh"),
            other => panic!("expected Loaded, got {other:?}"),
        }
    }

    #[test]
    fn status_is_stored_alongside_the_list() {
        let mut model = Model::default();
        let _ = handle_discover(&mut model);

        let scan = WifiScan {
            networks: vec![],
            current_status: ConnectionStatus {
                connected: true,
                ssid: Some("HomeNet".to_string()),
                ip_address: Some("192.168.1.42".to_string()),
            },
        };
        let _ = handle_discover_response(1, Ok(scan), &mut model);

        let status = model.connection_status.as_ref().unwrap();
        assert!(status.connected);
        assert_eq!(status.ssid.as_deref(), Some("HomeNet"));
        assert_eq!(status.ip_address.as_deref(), Some("192.168.1.42"));
    }
}
