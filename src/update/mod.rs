mod printer;
mod system;
mod ui;
mod wifi;

use crux_core::Command;

use crate::events::Event;
use crate::model::Model;
use crate::Effect;

/// Main update dispatcher - routes events to domain-specific handlers
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::Wifi(event) => wifi::handle(event, model),
        Event::Printer(event) => printer::handle(event, model),
        Event::System(event) => system::handle(event, model),
        Event::Ui(event) => ui::handle(event, model),
    }
}
