pub mod sequencer;

pub use crate::domain::model::{BoardingDetail, BoardingReport, Booking, SequenceEntry};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
