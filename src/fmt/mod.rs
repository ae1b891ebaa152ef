//! Record rendering: caller names, the hex dump table, and the record layout.

pub mod caller;
pub mod hexdump;
pub mod record;

pub use caller::{Caller, FunctionStyle, basename, qualify};
pub use record::{ANSIC_FORMAT, CallerFormat, LogRecord};
