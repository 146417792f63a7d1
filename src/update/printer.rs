use crux_core::{render::render, Command};

use crate::api_post;
use crate::events::{Event, PrinterEvent};
use crate::model::Model;
use crate::types::{ApiResponse, ModalId};
use crate::update_field;
use crate::Effect;

use super::system::fetch_stats;

/// Handle printer management events (context menus, deletion, test print)
pub fn handle(event: PrinterEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        PrinterEvent::ToggleMenu { name } => {
            // At most one context menu open; toggling another closes it.
            let next = if model.open_printer_menu.as_deref() == Some(name.as_str()) {
                None
            } else {
                Some(name)
            };
            update_field!(model.open_printer_menu, next)
        }

        PrinterEvent::CloseMenus => update_field!(model.open_printer_menu, None),

        PrinterEvent::RequestDelete { name } => {
            model.printer_to_delete = Some(name);
            model.open_printer_menu = None;
            model.modals.show(ModalId::DeletePrinter);
            render()
        }

        PrinterEvent::ConfirmDelete => {
            let Some(name) = model.printer_to_delete.clone() else {
                return Command::done();
            };
            let endpoint = format!("/delete_printer/{name}");
            api_post!(Printer, PrinterEvent, model, &endpoint, DeleteResponse, "Delete printer",
                expect_json: ApiResponse
            )
        }

        PrinterEvent::DeleteResponse(result) => {
            model.stop_loading();
            // Whatever the outcome, the confirmation dialog goes away and the
            // pending selection is cleared.
            model.modals.hide(ModalId::DeletePrinter);
            model.printer_to_delete = None;

            match result {
                Ok(response) if response.success => {
                    model.success_message = Some(response.message_or("Printer removed"));
                    // The printer list lives in the stats payload; refresh it
                    // now instead of waiting for the next poll tick.
                    Command::all([render(), fetch_stats()])
                }
                Ok(response) => model.alert_and_render(format!(
                    "Failed to delete printer: {}",
                    response.message_or("unknown error")
                )),
                Err(e) => {
                    log::error!("Delete printer failed: {e}");
                    model.alert_and_render("Failed to delete printer")
                }
            }
        }

        PrinterEvent::TestPrint { name } => {
            model.open_printer_menu = None;
            let endpoint = format!("/test_print/{name}");
            api_post!(Printer, PrinterEvent, model, &endpoint, TestPrintResponse, "Test print",
                expect_json: ApiResponse
            )
        }

        PrinterEvent::TestPrintResponse(result) => {
            model.stop_loading();
            match result {
                Ok(response) if response.success => {
                    model.alert_and_render(response.message_or("Test print started"))
                }
                Ok(response) => model.alert_and_render(format!(
                    "Test print failed: {}",
                    response.message_or("unknown error")
                )),
                Err(e) => {
                    log::error!("Test print failed: {e}");
                    model.alert_and_render("Test print failed")
                }
            }
        }
    }
}
