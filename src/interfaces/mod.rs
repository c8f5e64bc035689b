// ============================================================================
// Interfaces Module
// ============================================================================

pub mod event_handler;
pub mod numeral_source;

pub use event_handler::{EventHandler, FormatEvent, LoggingEventHandler, NoOpEventHandler};
pub use numeral_source::IntoNumeral;
