use chrono::NaiveDate;
use ruta_shared::{PassengerDetails, PaymentStatus};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Booking-creation payload, fields in the order the backend expects them.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub user_id: String,
    pub bus_id: Uuid,
    pub route_id: Uuid,
    pub passenger_details: PassengerDetails,
    pub journey_date: NaiveDate,
    pub from_city: String,
    pub to_city: String,
    pub boarding_point: String,
    pub dropping_point: String,
    pub seat_numbers: Vec<String>,
    pub number_of_seats: u32,
    pub total_fare: i64,
    /// Always PENDING at creation; the payment step moves it along.
    pub payment_status: PaymentStatus,
    pub payment_method: String,
}

/// The backend's answer to a booking creation.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedBooking {
    pub id: Uuid,
}

/// Payment-processing payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub booking_id: Uuid,
    /// Minor currency units, same figure the booking carried.
    pub amount: i64,
    pub payment_method: String,
    pub email: String,
}

/// Payment result. Success is this explicit flag, never inferred from a
/// call merely completing.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentOutcome {
    pub success: bool,
}
