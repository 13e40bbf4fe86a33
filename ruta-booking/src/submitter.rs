use crate::{BookingError, BookingResult};
use ruta_client::{BookingApi, CreateBookingRequest, PaymentRequest};
use ruta_core::{BookingDraft, SessionContext};
use ruta_shared::PaymentStatus;
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

/// Payment method tag the booking record carries.
pub const BOOKING_PAYMENT_METHOD: &str = "STRIPE";
/// Payment method tag the payment processor expects.
pub const PAYMENT_METHOD_TAG: &str = "stripe";

/// Terminal result of a booking attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SubmissionOutcome {
    /// Booking created and payment captured.
    Confirmed { booking_id: Uuid },
    /// The provider declined the payment. The booking stays PENDING on the
    /// backend; nothing rolls it back.
    PaymentDeclined { booking_id: Uuid },
    /// A call failed in transit. No retry happens here; the user starts a
    /// fresh submission, which can leave a duplicate PENDING booking behind
    /// (no idempotency key on the wire).
    SubmissionFailed { reason: String },
}

/// Drives the two-phase commit against the backend: create the booking,
/// then capture payment. The steps are strictly ordered; payment is never
/// attempted before a booking id exists.
pub struct BookingSubmitter {
    api: Arc<dyn BookingApi>,
}

impl BookingSubmitter {
    pub fn new(api: Arc<dyn BookingApi>) -> Self {
        Self { api }
    }

    pub async fn submit(
        &self,
        ctx: &SessionContext,
        draft: &BookingDraft,
    ) -> BookingResult<SubmissionOutcome> {
        draft.validate().map_err(BookingError::Core)?;

        let request = build_booking_request(ctx, draft);
        let created = match self.api.create_booking(&request).await {
            Ok(created) => created,
            Err(err) => {
                warn!("booking creation failed: {err}");
                return Ok(SubmissionOutcome::SubmissionFailed {
                    reason: err.to_string(),
                });
            }
        };

        let payment = PaymentRequest {
            booking_id: created.id,
            amount: draft.total_fare(),
            payment_method: PAYMENT_METHOD_TAG.to_string(),
            email: draft.passenger.email.0.clone(),
        };

        match self.api.process_payment(&payment).await {
            Ok(outcome) if outcome.success => {
                info!(booking_id = %created.id, "booking confirmed");
                Ok(SubmissionOutcome::Confirmed {
                    booking_id: created.id,
                })
            }
            Ok(_) => {
                warn!(booking_id = %created.id, "payment declined");
                Ok(SubmissionOutcome::PaymentDeclined {
                    booking_id: created.id,
                })
            }
            Err(err) => {
                warn!(booking_id = %created.id, "payment call failed: {err}");
                Ok(SubmissionOutcome::SubmissionFailed {
                    reason: err.to_string(),
                })
            }
        }
    }
}

fn build_booking_request(ctx: &SessionContext, draft: &BookingDraft) -> CreateBookingRequest {
    // validate() has run: the draft has seats and the route has points.
    CreateBookingRequest {
        user_id: ctx.user_id.clone(),
        bus_id: draft.bus.id,
        route_id: draft.route.id,
        passenger_details: draft.passenger.clone(),
        journey_date: draft.journey_date,
        from_city: draft.route.from_city.clone(),
        to_city: draft.route.to_city.clone(),
        boarding_point: draft.route.boarding_points[0].clone(),
        dropping_point: draft.route.dropping_points[0].clone(),
        seat_numbers: draft.seat_numbers(),
        number_of_seats: draft.seat_count(),
        total_fare: draft.total_fare(),
        payment_status: PaymentStatus::Pending,
        payment_method: BOOKING_PAYMENT_METHOD.to_string(),
    }
}
