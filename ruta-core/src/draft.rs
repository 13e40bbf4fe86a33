use crate::fare::total_fare;
use crate::seat_map::SeatId;
use crate::{CoreError, CoreResult};
use chrono::NaiveDate;
use ruta_shared::{Bus, PassengerDetails, Route};

/// Identity of the person driving this session.
///
/// Passed explicitly into every component that needs it; there is no
/// process-wide logged-in-user value.
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub user_id: String,
}

impl SessionContext {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}

/// Everything one booking submission needs, gathered into a single value
/// and validated wholesale before anything goes over the wire.
#[derive(Debug, Clone)]
pub struct BookingDraft {
    pub bus: Bus,
    pub route: Route,
    pub journey_date: NaiveDate,
    pub seats: Vec<SeatId>,
    pub passenger: PassengerDetails,
}

impl BookingDraft {
    /// Checks every precondition at once. Runs before any network call, so
    /// a rejected draft leaves no partial state anywhere.
    pub fn validate(&self) -> CoreResult<()> {
        if self.seats.is_empty() {
            return Err(CoreError::Validation("select at least one seat".to_string()));
        }
        if self.passenger.name.trim().is_empty() {
            return Err(CoreError::Validation("passenger name is required".to_string()));
        }
        if self.passenger.email.0.trim().is_empty() {
            return Err(CoreError::Validation("passenger email is required".to_string()));
        }
        if self.passenger.phone.0.trim().is_empty() {
            return Err(CoreError::Validation("passenger phone is required".to_string()));
        }
        if self.route.boarding_points.is_empty() {
            return Err(CoreError::Validation(
                "route has no boarding points".to_string(),
            ));
        }
        if self.route.dropping_points.is_empty() {
            return Err(CoreError::Validation(
                "route has no dropping points".to_string(),
            ));
        }
        Ok(())
    }

    pub fn seat_numbers(&self) -> Vec<String> {
        self.seats.iter().map(ToString::to_string).collect()
    }

    pub fn seat_count(&self) -> u32 {
        self.seats.len() as u32
    }

    pub fn total_fare(&self) -> i64 {
        total_fare(self.route.base_fare, self.seat_count())
    }
}
