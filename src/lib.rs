//! Test support for windowing example programs
//!
//! Two independent utilities: a scanner for the flags every example program
//! accepts, and a describer that pretty-prints incoming window events to
//! stderr for visual testing.

pub mod describe;
pub mod event;
pub mod options;

pub use describe::{describe_event, write_event};
pub use event::{Event, Mods};
pub use options::{parse_args, print_usage, Options, Toggle};
