use crate::models::passenger::PassengerDetails;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Booking lifecycle status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

/// Payment leg of a booking; a payment either succeeds or fails, never
/// partially.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Failed,
}

/// A committed reservation as the backend stores it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    pub booking_number: String,
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
    /// Minor currency units.
    pub total_fare: i64,
    pub status: BookingStatus,
    pub payment_status: PaymentStatus,
    pub booking_date: DateTime<Utc>,
}
