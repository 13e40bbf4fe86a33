use crate::seat_map::SeatId;
use serde::Serialize;
use std::collections::HashSet;

/// Classification of a seat within a selection session.
///
/// Booked takes precedence over Selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SeatStatus {
    Booked,
    Selected,
    Available,
}

/// One session's view of a coach: seats already committed by earlier
/// bookings, and the seats this user has picked so far.
///
/// The booked set is loaded once when the session opens and never refreshed;
/// `selected` and `booked` stay disjoint because `toggle` refuses booked
/// seats.
#[derive(Debug, Default)]
pub struct SeatSelection {
    booked: HashSet<SeatId>,
    selected: Vec<SeatId>,
}

impl SeatSelection {
    pub fn new(booked: impl IntoIterator<Item = SeatId>) -> Self {
        Self {
            booked: booked.into_iter().collect(),
            selected: Vec::new(),
        }
    }

    /// Flip a seat in or out of the selection. Booked seats are never
    /// selectable; toggling one is a no-op.
    pub fn toggle(&mut self, seat: SeatId) {
        if self.booked.contains(&seat) {
            tracing::debug!(%seat, "toggle ignored, seat already booked");
            return;
        }
        if let Some(pos) = self.selected.iter().position(|s| *s == seat) {
            self.selected.remove(pos);
        } else {
            self.selected.push(seat);
        }
    }

    pub fn status(&self, seat: SeatId) -> SeatStatus {
        if self.booked.contains(&seat) {
            SeatStatus::Booked
        } else if self.selected.contains(&seat) {
            SeatStatus::Selected
        } else {
            SeatStatus::Available
        }
    }

    /// Drop the whole selection; called after a terminal submission outcome
    /// so a finished session cannot be resubmitted.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Seats picked so far, in the order they were chosen.
    pub fn selected(&self) -> &[SeatId] {
        &self.selected
    }

    pub fn selected_count(&self) -> u32 {
        self.selected.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}
