//! Loader, reporter and command implementations behind `boggletool`.

pub mod commands;
pub mod puzzle;
pub mod report;
#[cfg(feature = "trace")]
pub mod trace_init;
