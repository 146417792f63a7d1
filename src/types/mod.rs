//! Domain-based type organization
//!
//! Types are organized by domain to match the structure in `update/`:
//! - wifi: discovery and connection workflow types
//! - modal: dialog overlay lifecycle
//! - printer: printer entries and action payloads
//! - system: stats polling and hostname types

pub mod modal;
pub mod printer;
pub mod system;
pub mod wifi;

pub use modal::*;
pub use printer::*;
pub use system::*;
pub use wifi::*;
