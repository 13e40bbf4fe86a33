use crate::{BookingError, BookingResult};
use ruta_client::BookingApi;
use ruta_shared::{Booking, BookingStatus};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Read layer over a user's bookings.
pub struct BookingHistory {
    api: Arc<dyn BookingApi>,
}

impl BookingHistory {
    pub fn new(api: Arc<dyn BookingApi>) -> Self {
        Self { api }
    }

    /// The user's bookings, newest first.
    pub async fn for_user(&self, user_id: &str) -> BookingResult<Vec<Booking>> {
        let mut bookings = self.api.fetch_user_bookings(user_id).await?;
        bookings.sort_by(|a, b| b.booking_date.cmp(&a.booking_date));
        Ok(bookings)
    }

    /// Fetch a single booking for a confirmation view.
    pub async fn confirmation(&self, booking_id: Uuid) -> BookingResult<Booking> {
        Ok(self.api.fetch_booking(booking_id).await?)
    }

    /// Look a booking up by its human-facing booking number.
    pub async fn by_number(&self, booking_number: &str) -> BookingResult<Booking> {
        Ok(self.api.fetch_booking_by_number(booking_number).await?)
    }

    /// Cancel a confirmed booking. Only CONFIRMED bookings are
    /// cancellable; refunds are the backend's concern.
    pub async fn cancel(&self, booking_id: Uuid) -> BookingResult<()> {
        let booking = self.api.fetch_booking(booking_id).await?;
        if booking.status != BookingStatus::Confirmed {
            return Err(BookingError::NotCancellable {
                status: booking.status,
            });
        }
        self.api.cancel_booking(booking_id).await?;
        info!(%booking_id, "booking cancelled");
        Ok(())
    }
}
