mod error;
mod event;
pub mod record;
mod types;

pub use error::*;
pub use event::*;
pub use record::{parse_event_row, parse_event_rows};
pub use types::*;
