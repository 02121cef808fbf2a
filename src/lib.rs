pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;
#[cfg(feature = "web")]
pub mod web;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::storage::LocalStorage;
pub use config::Settings;
pub use crate::core::sequencer::{order, Sequencer};
pub use domain::model::{BoardingDetail, BoardingReport, Booking, SequenceEntry};
pub use domain::seat::{booking_priority, parse_seat_distance};
pub use utils::error::{BoardingError, Result};
