use crate::submitter::{BookingSubmitter, SubmissionOutcome};
use crate::BookingResult;
use chrono::NaiveDate;
use ruta_client::BookingApi;
use ruta_core::{
    BookingDraft, FareSummary, SeatGrid, SeatId, SeatSelection, SeatStatus, SessionContext,
};
use ruta_shared::{Bus, PassengerDetails, Route};
use std::sync::Arc;
use tracing::debug;

/// One user's in-progress booking for a specific bus, route and journey
/// date.
///
/// The session owns the seat selection. The booked set is fetched exactly
/// once at open and never refreshed, so it can go stale; the backend is
/// the authority at commit time. Selection state is discarded after any
/// terminal submission outcome.
pub struct BookingSession {
    ctx: SessionContext,
    bus: Bus,
    route: Route,
    journey_date: NaiveDate,
    grid: SeatGrid,
    selection: SeatSelection,
    api: Arc<dyn BookingApi>,
}

impl BookingSession {
    pub async fn open(
        api: Arc<dyn BookingApi>,
        ctx: SessionContext,
        bus: Bus,
        route: Route,
        journey_date: NaiveDate,
    ) -> BookingResult<Self> {
        let grid = SeatGrid::for_bus(&bus)?;
        let booked = api
            .fetch_booked_seats(bus.id, route.id, journey_date)
            .await?;
        debug!(
            bus = %bus.bus_name,
            booked = booked.len(),
            "seat selection session opened"
        );
        Ok(Self {
            ctx,
            grid,
            selection: SeatSelection::new(booked),
            bus,
            route,
            journey_date,
            api,
        })
    }

    /// Every seat on the coach with its current classification, row-major.
    pub fn seat_map(&self) -> Vec<(SeatId, SeatStatus)> {
        self.grid
            .seat_ids()
            .map(|seat| (seat, self.selection.status(seat)))
            .collect()
    }

    pub fn grid(&self) -> SeatGrid {
        self.grid
    }

    pub fn toggle(&mut self, seat: SeatId) {
        self.selection.toggle(seat);
    }

    pub fn status(&self, seat: SeatId) -> SeatStatus {
        self.selection.status(seat)
    }

    pub fn selected(&self) -> &[SeatId] {
        self.selection.selected()
    }

    pub fn fare_summary(&self) -> FareSummary {
        FareSummary::for_selection(self.route.base_fare, self.selection.selected())
    }

    /// Snapshot the session into a submittable draft.
    pub fn draft(&self, passenger: PassengerDetails) -> BookingDraft {
        BookingDraft {
            bus: self.bus.clone(),
            route: self.route.clone(),
            journey_date: self.journey_date,
            seats: self.selection.selected().to_vec(),
            passenger,
        }
    }

    /// Submit the current selection. Any terminal outcome (confirmed,
    /// declined or failed in transit) clears the selection so the session
    /// cannot be resubmitted. A validation error is not terminal: the user
    /// can fix the draft and try again with the selection intact.
    pub async fn submit(
        &mut self,
        passenger: PassengerDetails,
    ) -> BookingResult<SubmissionOutcome> {
        let draft = self.draft(passenger);
        let submitter = BookingSubmitter::new(Arc::clone(&self.api));
        let outcome = submitter.submit(&self.ctx, &draft).await?;
        self.selection.clear();
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ruta_client::MockBookingApi;
    use ruta_shared::{Gender, SeatLayout};
    use uuid::Uuid;

    fn seat(s: &str) -> SeatId {
        s.parse().unwrap()
    }

    fn fixtures() -> (Arc<MockBookingApi>, Bus, Route, NaiveDate) {
        let bus = Bus {
            id: Uuid::new_v4(),
            bus_number: "MH12AB1234".to_string(),
            bus_name: "Shivneri Express".to_string(),
            operator_name: "MSRTC".to_string(),
            bus_type: "AC Seater".to_string(),
            total_seats: 4,
            rows: 2,
            seats_per_row: 2,
            amenities: vec![],
            seat_layout: SeatLayout::default(),
            image_url: None,
            is_active: true,
        };
        let route = Route {
            id: Uuid::new_v4(),
            bus_id: bus.id,
            from_city: "Mumbai".to_string(),
            to_city: "Pune".to_string(),
            departure_time: "21:30".to_string(),
            arrival_time: "05:30".to_string(),
            duration: "8h".to_string(),
            base_fare: 500,
            boarding_points: vec!["Dadar".to_string()],
            dropping_points: vec!["Swargate".to_string()],
            is_active: true,
        };
        let date = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let api = Arc::new(MockBookingApi::new());
        api.seed_bus(bus.clone());
        api.seed_route(route.clone());
        (api, bus, route, date)
    }

    fn passenger() -> PassengerDetails {
        PassengerDetails::new("Asha", "asha@example.com", "9876543210", Some(29), Gender::Female)
    }

    #[tokio::test]
    async fn test_session_overlays_booked_seats() {
        let (api, bus, route, date) = fixtures();
        api.seed_booked_seats(bus.id, route.id, date, vec![seat("1A")]);

        let mut session = BookingSession::open(api, SessionContext::new("user123"), bus, route, date)
            .await
            .unwrap();

        assert_eq!(session.status(seat("1A")), SeatStatus::Booked);
        session.toggle(seat("1A"));
        assert!(session.selected().is_empty());

        session.toggle(seat("2A"));
        assert_eq!(session.status(seat("2A")), SeatStatus::Selected);

        let map = session.seat_map();
        assert_eq!(map.len(), 4);
        assert_eq!(map[0], (seat("1A"), SeatStatus::Booked));
        assert_eq!(map[2], (seat("2A"), SeatStatus::Selected));
    }

    #[tokio::test]
    async fn test_fare_tracks_selection() {
        let (api, bus, route, date) = fixtures();
        let mut session = BookingSession::open(api, SessionContext::new("user123"), bus, route, date)
            .await
            .unwrap();

        assert_eq!(session.fare_summary().total_fare, 0);
        session.toggle(seat("1B"));
        session.toggle(seat("2B"));
        let summary = session.fare_summary();
        assert_eq!(summary.seat_numbers, vec!["1B", "2B"]);
        assert_eq!(summary.total_fare, 1000);
    }

    #[tokio::test]
    async fn test_submit_clears_selection_on_terminal_outcome() {
        let (api, bus, route, date) = fixtures();
        let mut session =
            BookingSession::open(api.clone(), SessionContext::new("user123"), bus, route, date)
                .await
                .unwrap();

        session.toggle(seat("1B"));
        let outcome = session.submit(passenger()).await.unwrap();
        assert!(matches!(outcome, SubmissionOutcome::Confirmed { .. }));
        assert!(session.selected().is_empty());
    }

    #[tokio::test]
    async fn test_validation_error_keeps_selection() {
        let (api, bus, route, date) = fixtures();
        let mut session =
            BookingSession::open(api, SessionContext::new("user123"), bus, route, date)
                .await
                .unwrap();

        session.toggle(seat("1B"));
        let missing_phone = PassengerDetails::new("Asha", "asha@example.com", "", None, Gender::Female);
        assert!(session.submit(missing_phone).await.is_err());
        assert_eq!(session.selected(), &[seat("1B")]);
    }

    #[tokio::test]
    async fn test_failed_submission_still_clears_selection() {
        let (api, bus, route, date) = fixtures();
        api.decline_payment(true);
        let mut session =
            BookingSession::open(api, SessionContext::new("user123"), bus, route, date)
                .await
                .unwrap();

        session.toggle(seat("1B"));
        let outcome = session.submit(passenger()).await.unwrap();
        assert!(matches!(outcome, SubmissionOutcome::PaymentDeclined { .. }));
        assert!(session.selected().is_empty());
    }
}
