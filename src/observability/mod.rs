//! Structured logging to a rotating file.
//!
//! Zellij plugins have no usable stderr, so `tracing` events are formatted by
//! `tracing-subscriber` and appended to
//! `~/.local/share/zellij/langorder/langorder.log`. The file rotates at 10MB
//! and keeps three backups.
//!
//! The level comes from the `trace_level` plugin option and accepts any
//! `EnvFilter` directive (`"debug"`, `"langorder=trace"`). Default: `"info"`.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - `file_writer`: Rotating file writer

mod file_writer;
pub mod init;

pub use file_writer::FileWriter;
pub use init::init_tracing;
