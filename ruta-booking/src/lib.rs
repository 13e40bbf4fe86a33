pub mod admin;
pub mod history;
pub mod session;
pub mod submitter;

pub use admin::{AdminConsole, NewBus};
pub use history::BookingHistory;
pub use session::BookingSession;
pub use submitter::{BookingSubmitter, SubmissionOutcome};

use ruta_shared::BookingStatus;

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("Invalid booking input: {0}")]
    Core(#[from] ruta_core::CoreError),

    #[error("Backend call failed: {0}")]
    Backend(#[from] ruta_client::ClientError),

    #[error("Booking cannot be cancelled in status {status:?}")]
    NotCancellable { status: BookingStatus },
}

pub type BookingResult<T> = Result<T, BookingError>;
