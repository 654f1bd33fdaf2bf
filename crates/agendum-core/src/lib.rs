//! # Agendum Core Library
//!
//! Core business logic for Agendum, a meeting-agenda drafting assistant.
//! The CLI binary and the HTTP server are thin layers over this library.
//!
//! ## Architecture
//!
//! - **Slots**: the deterministic time-slot scheduler -- a pure function
//!   from a (start, end) timestamp pair to a typed schedule of work
//!   blocks, breaks, and social events
//! - **Generator**: client for an OpenAI-compatible endpoint that fills
//!   the precomputed slots with agenda content
//! - **ICS**: calendar invite export with agenda text in the description
//! - **Config**: TOML-based configuration at `~/.config/agendum/`
//!
//! ## Key Components
//!
//! - [`compute_schedule`]: the scheduler entry point
//! - [`AgendaGenerator`]: content generation client
//! - [`export_invite`]: calendar invite builder
//! - [`Config`]: application configuration

pub mod config;
pub mod error;
pub mod generator;
pub mod ics;
pub mod research;
pub mod slots;

pub use config::Config;
pub use error::{ConfigError, CoreError, ParseError, ValidationError};
pub use generator::{AgendaGenerator, AgendaRequest, Language};
pub use ics::{export_invite, IcsExport};
pub use slots::{compute_schedule, DaySchedule, Schedule, ScheduleKind, Slot, SlotKind};
