//! Core types: calendar dates, holidays, tracing setup

pub mod date;
pub mod holiday;
pub mod tracing;

pub use date::{CalendarDate, normalize_date};
pub use holiday::Holiday;
pub use self::tracing::{TracingConfig, TracingError, TracingOutputFormat, init_tracing};
