use chrono::NaiveDate;
use ruta_booking::{BookingHistory, BookingSession, SubmissionOutcome};
use ruta_client::{BookingApi, MockBookingApi};
use ruta_core::{SeatId, SeatStatus, SessionContext};
use ruta_shared::{
    BookingStatus, Bus, Gender, PassengerDetails, PaymentStatus, Route, SeatLayout,
};
use std::sync::Arc;
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
        amenities: vec!["WiFi".to_string()],
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
        boarding_points: vec!["Dadar".to_string(), "Sion".to_string()],
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

async fn open_session(
    api: &Arc<MockBookingApi>,
    bus: &Bus,
    route: &Route,
    date: NaiveDate,
) -> BookingSession {
    BookingSession::open(
        api.clone() as Arc<dyn BookingApi>,
        SessionContext::new("user123"),
        bus.clone(),
        route.clone(),
        date,
    )
    .await
    .unwrap()
}

#[tokio::test]
async fn test_booked_seats_are_untouchable_and_fare_follows_selection() {
    let (api, bus, route, date) = fixtures();
    api.seed_booked_seats(bus.id, route.id, date, vec![seat("1A")]);

    let mut session = open_session(&api, &bus, &route, date).await;

    let map: Vec<String> = session.seat_map().iter().map(|(s, _)| s.to_string()).collect();
    assert_eq!(map, vec!["1A", "1B", "2A", "2B"]);

    session.toggle(seat("1A"));
    assert!(session.selected().is_empty());
    assert_eq!(session.status(seat("1A")), SeatStatus::Booked);

    session.toggle(seat("2A"));
    assert_eq!(session.selected(), &[seat("2A")]);
    assert_eq!(session.status(seat("2A")), SeatStatus::Selected);

    session.toggle(seat("2A"));
    assert!(session.selected().is_empty());

    session.toggle(seat("1B"));
    session.toggle(seat("2B"));
    assert_eq!(session.fare_summary().total_fare, 1000);
}

#[tokio::test]
async fn test_full_booking_flow_confirms_and_commits_seats() {
    let (api, bus, route, date) = fixtures();
    let mut session = open_session(&api, &bus, &route, date).await;

    session.toggle(seat("1B"));
    session.toggle(seat("2B"));
    let outcome = session.submit(passenger()).await.unwrap();

    let booking_id = match outcome {
        SubmissionOutcome::Confirmed { booking_id } => booking_id,
        other => panic!("expected Confirmed, got {other:?}"),
    };

    // Strict step ordering: booked set once, then create, then pay.
    assert_eq!(
        api.calls(),
        vec!["fetch_booked_seats", "create_booking", "process_payment"]
    );

    let booking = api.booking(booking_id).unwrap();
    assert_eq!(booking.status, BookingStatus::Confirmed);
    assert_eq!(booking.payment_status, PaymentStatus::Paid);
    assert_eq!(booking.total_fare, 1000);
    assert_eq!(booking.boarding_point, "Dadar");
    assert_eq!(booking.dropping_point, "Swargate");

    // A later session for the same journey sees those seats as booked.
    let next = open_session(&api, &bus, &route, date).await;
    assert_eq!(next.status(seat("1B")), SeatStatus::Booked);
    assert_eq!(next.status(seat("2B")), SeatStatus::Booked);
    assert_eq!(next.status(seat("1A")), SeatStatus::Available);

    // And the confirmation view can read it back, by id or by number.
    let history = BookingHistory::new(api.clone() as Arc<dyn BookingApi>);
    let fetched = history.confirmation(booking_id).await.unwrap();
    assert_eq!(fetched.id, booking_id);
    assert!(fetched.booking_number.starts_with("RUTA-"));
    let by_number = history.by_number(&fetched.booking_number).await.unwrap();
    assert_eq!(by_number.id, booking_id);
}

#[tokio::test]
async fn test_declined_payment_leaves_booking_pending() {
    let (api, bus, route, date) = fixtures();
    api.decline_payment(true);

    let mut session = open_session(&api, &bus, &route, date).await;
    session.toggle(seat("1B"));
    let outcome = session.submit(passenger()).await.unwrap();

    let booking_id = match outcome {
        SubmissionOutcome::PaymentDeclined { booking_id } => booking_id,
        other => panic!("expected PaymentDeclined, got {other:?}"),
    };

    let booking = api.booking(booking_id).unwrap();
    assert_eq!(booking.status, BookingStatus::Pending);
    assert_eq!(booking.payment_status, PaymentStatus::Failed);

    // The declined seat was never committed.
    let next = open_session(&api, &bus, &route, date).await;
    assert_eq!(next.status(seat("1B")), SeatStatus::Available);
}

#[tokio::test]
async fn test_transport_failure_never_reaches_payment() {
    let (api, bus, route, date) = fixtures();
    api.fail_create_booking(true);

    let mut session = open_session(&api, &bus, &route, date).await;
    session.toggle(seat("1B"));
    let outcome = session.submit(passenger()).await.unwrap();

    assert!(matches!(outcome, SubmissionOutcome::SubmissionFailed { .. }));
    assert_eq!(api.calls(), vec!["fetch_booked_seats", "create_booking"]);

    // The user starts over with a fresh submission; nothing resumes.
    assert!(session.selected().is_empty());
}

#[tokio::test]
async fn test_missing_passenger_details_block_submission_locally() {
    let (api, bus, route, date) = fixtures();
    let mut session = open_session(&api, &bus, &route, date).await;
    session.toggle(seat("1B"));

    let no_email = PassengerDetails::new("Asha", "", "9876543210", None, Gender::Female);
    assert!(session.submit(no_email).await.is_err());

    // Only the initial seat fetch went out; selection survives for a retry.
    assert_eq!(api.calls(), vec!["fetch_booked_seats"]);
    assert_eq!(session.selected(), &[seat("1B")]);

    let outcome = session.submit(passenger()).await.unwrap();
    assert!(matches!(outcome, SubmissionOutcome::Confirmed { .. }));
}

#[tokio::test]
async fn test_search_then_book_round_trip() {
    let (api, bus, route, date) = fixtures();

    let found = api.search_routes("mumbai", "PUNE").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, route.id);
    let found_bus = api.fetch_bus(found[0].bus_id).await.unwrap();
    assert_eq!(found_bus.id, bus.id);

    let mut session = open_session(&api, &bus, &route, date).await;
    session.toggle(seat("2A"));
    let outcome = session.submit(passenger()).await.unwrap();
    assert!(matches!(outcome, SubmissionOutcome::Confirmed { .. }));

    let history = BookingHistory::new(api.clone() as Arc<dyn BookingApi>);
    let bookings = history.for_user("user123").await.unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].seat_numbers, vec!["2A"]);
}
