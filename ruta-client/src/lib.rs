pub mod api;
pub mod error;
pub mod http;
pub mod mock;
pub mod requests;

pub use api::BookingApi;
pub use error::{ClientError, ClientResult};
pub use http::HttpBookingApi;
pub use mock::MockBookingApi;
pub use requests::{CreateBookingRequest, CreatedBooking, PaymentOutcome, PaymentRequest};
