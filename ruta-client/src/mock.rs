use crate::api::BookingApi;
use crate::error::{ClientError, ClientResult};
use crate::requests::{CreateBookingRequest, CreatedBooking, PaymentOutcome, PaymentRequest};
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use ruta_core::SeatId;
use ruta_shared::{Booking, BookingStatus, Bus, PaymentStatus, Route};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use uuid::Uuid;

/// In-memory stand-in for the booking backend.
///
/// Tests seed it with buses, routes and committed seats, then flip the
/// failure switches to simulate a dead backend or a declining payment
/// provider. Every call is recorded so tests can assert ordering, e.g.
/// that payment never runs before booking creation.
#[derive(Default)]
pub struct MockBookingApi {
    state: Mutex<MockState>,
}

#[derive(Default)]
struct MockState {
    buses: HashMap<Uuid, Bus>,
    routes: HashMap<Uuid, Route>,
    bookings: HashMap<Uuid, Booking>,
    booked_seats: HashMap<(Uuid, Uuid, NaiveDate), Vec<SeatId>>,
    fail_create_booking: bool,
    fail_payment: bool,
    decline_payment: bool,
    calls: Vec<&'static str>,
}

impl MockBookingApi {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().expect("mock state lock")
    }

    pub fn seed_bus(&self, bus: Bus) {
        self.state().buses.insert(bus.id, bus);
    }

    pub fn seed_route(&self, route: Route) {
        self.state().routes.insert(route.id, route);
    }

    pub fn seed_booked_seats(
        &self,
        bus_id: Uuid,
        route_id: Uuid,
        journey_date: NaiveDate,
        seats: Vec<SeatId>,
    ) {
        self.state()
            .booked_seats
            .insert((bus_id, route_id, journey_date), seats);
    }

    /// Make `create_booking` fail with a backend error.
    pub fn fail_create_booking(&self, fail: bool) {
        self.state().fail_create_booking = fail;
    }

    /// Make `process_payment` fail with a backend error.
    pub fn fail_payment(&self, fail: bool) {
        self.state().fail_payment = fail;
    }

    /// Make the payment provider answer with an explicit decline.
    pub fn decline_payment(&self, decline: bool) {
        self.state().decline_payment = decline;
    }

    /// Names of the trait methods invoked so far, in order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.state().calls.clone()
    }

    pub fn booking(&self, booking_id: Uuid) -> Option<Booking> {
        self.state().bookings.get(&booking_id).cloned()
    }

    fn booking_number(id: Uuid) -> String {
        let short = id.simple().to_string()[..8].to_uppercase();
        format!("RUTA-{}-{}", Utc::now().timestamp(), short)
    }

    fn not_found(what: &str) -> ClientError {
        ClientError::Api {
            status: 404,
            message: format!("{what} not found"),
        }
    }

    fn unavailable(what: &str) -> ClientError {
        ClientError::Api {
            status: 503,
            message: format!("{what} unavailable"),
        }
    }
}

#[async_trait]
impl BookingApi for MockBookingApi {
    async fn fetch_booked_seats(
        &self,
        bus_id: Uuid,
        route_id: Uuid,
        journey_date: NaiveDate,
    ) -> ClientResult<Vec<SeatId>> {
        let mut state = self.state();
        state.calls.push("fetch_booked_seats");
        Ok(state
            .booked_seats
            .get(&(bus_id, route_id, journey_date))
            .cloned()
            .unwrap_or_default())
    }

    async fn create_booking(&self, request: &CreateBookingRequest) -> ClientResult<CreatedBooking> {
        let mut state = self.state();
        state.calls.push("create_booking");
        if state.fail_create_booking {
            return Err(Self::unavailable("booking service"));
        }

        let id = Uuid::new_v4();
        let booking = Booking {
            id,
            booking_number: Self::booking_number(id),
            user_id: request.user_id.clone(),
            bus_id: request.bus_id,
            route_id: request.route_id,
            passenger_details: request.passenger_details.clone(),
            journey_date: request.journey_date,
            from_city: request.from_city.clone(),
            to_city: request.to_city.clone(),
            boarding_point: request.boarding_point.clone(),
            dropping_point: request.dropping_point.clone(),
            seat_numbers: request.seat_numbers.clone(),
            number_of_seats: request.number_of_seats,
            total_fare: request.total_fare,
            status: BookingStatus::Pending,
            payment_status: PaymentStatus::Pending,
            booking_date: Utc::now(),
        };
        state.bookings.insert(id, booking);
        Ok(CreatedBooking { id })
    }

    async fn process_payment(&self, request: &PaymentRequest) -> ClientResult<PaymentOutcome> {
        let mut state = self.state();
        state.calls.push("process_payment");
        if state.fail_payment {
            return Err(Self::unavailable("payment gateway"));
        }
        let declined = state.decline_payment;

        let booking = state
            .bookings
            .get_mut(&request.booking_id)
            .ok_or_else(|| Self::not_found("booking"))?;

        if declined {
            // The booking stays PENDING; only the payment leg records the
            // failure.
            booking.payment_status = PaymentStatus::Failed;
            return Ok(PaymentOutcome { success: false });
        }

        booking.payment_status = PaymentStatus::Paid;
        booking.status = BookingStatus::Confirmed;
        let key = (booking.bus_id, booking.route_id, booking.journey_date);
        let mut committed: Vec<SeatId> = Vec::new();
        for seat in &booking.seat_numbers {
            if let Ok(seat) = seat.parse() {
                committed.push(seat);
            }
        }
        state.booked_seats.entry(key).or_default().extend(committed);
        Ok(PaymentOutcome { success: true })
    }

    async fn fetch_booking(&self, booking_id: Uuid) -> ClientResult<Booking> {
        let mut state = self.state();
        state.calls.push("fetch_booking");
        state
            .bookings
            .get(&booking_id)
            .cloned()
            .ok_or_else(|| Self::not_found("booking"))
    }

    async fn fetch_booking_by_number(&self, booking_number: &str) -> ClientResult<Booking> {
        let mut state = self.state();
        state.calls.push("fetch_booking_by_number");
        state
            .bookings
            .values()
            .find(|b| b.booking_number == booking_number)
            .cloned()
            .ok_or_else(|| Self::not_found("booking"))
    }

    async fn fetch_user_bookings(&self, user_id: &str) -> ClientResult<Vec<Booking>> {
        let mut state = self.state();
        state.calls.push("fetch_user_bookings");
        Ok(state
            .bookings
            .values()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn list_bookings(&self) -> ClientResult<Vec<Booking>> {
        let mut state = self.state();
        state.calls.push("list_bookings");
        Ok(state.bookings.values().cloned().collect())
    }

    async fn cancel_booking(&self, booking_id: Uuid) -> ClientResult<()> {
        let mut state = self.state();
        state.calls.push("cancel_booking");
        let booking = state
            .bookings
            .get_mut(&booking_id)
            .ok_or_else(|| Self::not_found("booking"))?;
        booking.status = BookingStatus::Cancelled;
        Ok(())
    }

    async fn search_routes(&self, from_city: &str, to_city: &str) -> ClientResult<Vec<Route>> {
        let mut state = self.state();
        state.calls.push("search_routes");
        Ok(state
            .routes
            .values()
            .filter(|r| {
                r.is_active
                    && r.from_city.eq_ignore_ascii_case(from_city)
                    && r.to_city.eq_ignore_ascii_case(to_city)
            })
            .cloned()
            .collect())
    }

    async fn fetch_route(&self, route_id: Uuid) -> ClientResult<Route> {
        let mut state = self.state();
        state.calls.push("fetch_route");
        state
            .routes
            .get(&route_id)
            .cloned()
            .ok_or_else(|| Self::not_found("route"))
    }

    async fn list_routes(&self) -> ClientResult<Vec<Route>> {
        let mut state = self.state();
        state.calls.push("list_routes");
        Ok(state.routes.values().cloned().collect())
    }

    async fn create_route(&self, route: &Route) -> ClientResult<Route> {
        let mut state = self.state();
        state.calls.push("create_route");
        state.routes.insert(route.id, route.clone());
        Ok(route.clone())
    }

    async fn fetch_bus(&self, bus_id: Uuid) -> ClientResult<Bus> {
        let mut state = self.state();
        state.calls.push("fetch_bus");
        state
            .buses
            .get(&bus_id)
            .cloned()
            .ok_or_else(|| Self::not_found("bus"))
    }

    async fn list_buses(&self) -> ClientResult<Vec<Bus>> {
        let mut state = self.state();
        state.calls.push("list_buses");
        Ok(state.buses.values().cloned().collect())
    }

    async fn list_active_buses(&self) -> ClientResult<Vec<Bus>> {
        let mut state = self.state();
        state.calls.push("list_active_buses");
        Ok(state.buses.values().filter(|b| b.is_active).cloned().collect())
    }

    async fn create_bus(&self, bus: &Bus) -> ClientResult<Bus> {
        let mut state = self.state();
        state.calls.push("create_bus");
        state.buses.insert(bus.id, bus.clone());
        Ok(bus.clone())
    }

    async fn update_bus(&self, bus_id: Uuid, bus: &Bus) -> ClientResult<Bus> {
        let mut state = self.state();
        state.calls.push("update_bus");
        if !state.buses.contains_key(&bus_id) {
            return Err(Self::not_found("bus"));
        }
        let mut updated = bus.clone();
        updated.id = bus_id;
        state.buses.insert(bus_id, updated.clone());
        Ok(updated)
    }

    async fn delete_bus(&self, bus_id: Uuid) -> ClientResult<()> {
        let mut state = self.state();
        state.calls.push("delete_bus");
        state
            .buses
            .remove(&bus_id)
            .map(|_| ())
            .ok_or_else(|| Self::not_found("bus"))
    }
}
