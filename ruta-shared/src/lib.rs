pub mod models;
pub mod pii;

pub use models::booking::{Booking, BookingStatus, PaymentStatus};
pub use models::bus::{Bus, SeatLayout};
pub use models::passenger::{Gender, PassengerDetails};
pub use models::route::Route;
