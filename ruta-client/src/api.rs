use crate::error::ClientResult;
use crate::requests::{CreateBookingRequest, CreatedBooking, PaymentOutcome, PaymentRequest};
use async_trait::async_trait;
use chrono::NaiveDate;
use ruta_core::SeatId;
use ruta_shared::{Booking, Bus, Route};
use uuid::Uuid;

/// Contract against the external booking backend.
///
/// The backend owns all persistence; this client holds no state between
/// calls. There is no seat lock on the server side: the booked set a
/// session reads can go stale, and conflict resolution is the backend's
/// problem at commit time.
#[async_trait]
pub trait BookingApi: Send + Sync {
    /// Seats already committed for a (bus, route, journey date) triple.
    async fn fetch_booked_seats(
        &self,
        bus_id: Uuid,
        route_id: Uuid,
        journey_date: NaiveDate,
    ) -> ClientResult<Vec<SeatId>>;

    async fn create_booking(&self, request: &CreateBookingRequest) -> ClientResult<CreatedBooking>;

    /// Runs the payment for an existing booking. A declined payment is a
    /// successful call with `success == false`.
    async fn process_payment(&self, request: &PaymentRequest) -> ClientResult<PaymentOutcome>;

    async fn fetch_booking(&self, booking_id: Uuid) -> ClientResult<Booking>;

    async fn fetch_booking_by_number(&self, booking_number: &str) -> ClientResult<Booking>;

    async fn fetch_user_bookings(&self, user_id: &str) -> ClientResult<Vec<Booking>>;

    async fn list_bookings(&self) -> ClientResult<Vec<Booking>>;

    async fn cancel_booking(&self, booking_id: Uuid) -> ClientResult<()>;

    async fn search_routes(&self, from_city: &str, to_city: &str) -> ClientResult<Vec<Route>>;

    async fn fetch_route(&self, route_id: Uuid) -> ClientResult<Route>;

    async fn list_routes(&self) -> ClientResult<Vec<Route>>;

    async fn create_route(&self, route: &Route) -> ClientResult<Route>;

    async fn fetch_bus(&self, bus_id: Uuid) -> ClientResult<Bus>;

    async fn list_buses(&self) -> ClientResult<Vec<Bus>>;

    async fn list_active_buses(&self) -> ClientResult<Vec<Bus>>;

    async fn create_bus(&self, bus: &Bus) -> ClientResult<Bus>;

    async fn update_bus(&self, bus_id: Uuid, bus: &Bus) -> ClientResult<Bus>;

    async fn delete_bus(&self, bus_id: Uuid) -> ClientResult<()>;
}
