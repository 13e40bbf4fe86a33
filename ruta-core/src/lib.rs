pub mod draft;
pub mod fare;
pub mod seat_map;
pub mod selection;

pub use draft::{BookingDraft, SessionContext};
pub use fare::{total_fare, FareSummary};
pub use seat_map::{SeatGrid, SeatId};
pub use selection::{SeatSelection, SeatStatus};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid seat configuration: {0}")]
    Configuration(String),
    #[error("Validation failed: {0}")]
    Validation(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
