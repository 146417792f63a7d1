use crux_core::Command;

use crate::events::{Event, SystemEvent};
use crate::http_helpers::build_url;
use crate::model::Model;
use crate::types::{validate_hostname, HostnameRequest, ModalId, SystemStats};
use crate::Effect;
use crate::{api_post, form_post, handle_response, http_get, update_field};

/// Build the stats poll request.
///
/// Also used after a printer deletion to refresh the printer list without
/// waiting for the next tick.
pub fn fetch_stats() -> Command<Effect, Event> {
    http_get!(
        System,
        SystemEvent,
        build_url("/stats"),
        StatsResponse,
        SystemStats
    )
}

/// Handle stats polling and device maintenance events
pub fn handle(event: SystemEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        // Shell timer; fires for the lifetime of the page.
        SystemEvent::StatsTick => fetch_stats(),

        SystemEvent::StatsResponse(result) => match result {
            Ok(stats) => update_field!(model.system_stats, Some(stats)),
            Err(e) => {
                // Background poll: log and skip, previous values stay up.
                log::warn!("Stats poll failed: {e}");
                Command::done()
            }
        },

        SystemEvent::SubmitHostname { hostname } => {
            let hostname = match validate_hostname(&hostname) {
                Ok(hostname) => hostname,
                Err(alert) => return model.alert_and_render(alert),
            };
            let request = HostnameRequest { hostname };
            form_post!(System, SystemEvent, model, "/change_hostname", HostnameResponse, "Change hostname",
                form: &request
            )
        }

        SystemEvent::HostnameResponse(result) => handle_response!(model, result, {
            on_success: |model, _| {
                model.modals.hide(ModalId::Hostname);
            },
            success_message: "Hostname changed, the device is rebooting",
        }),

        SystemEvent::Reboot => {
            api_post!(System, SystemEvent, model, "/reboot", RebootResponse, "Reboot")
        }

        SystemEvent::RebootResponse(result) => handle_response!(model, result, {
            on_success: |model, _| {
                model.modals.hide(ModalId::Reboot);
            },
            success_message: "Reboot initiated",
        }),

        SystemEvent::RunSystemUpdate => {
            api_post!(System, SystemEvent, model, "/update", SystemUpdateResponse, "System update")
        }

        SystemEvent::SystemUpdateResponse(result) => handle_response!(model, result, {
            on_success: |model, _| {
                model.modals.hide(ModalId::Update);
            },
            success_message: "Update started, the device will reboot when done",
        }),
    }
}
