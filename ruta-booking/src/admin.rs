use crate::BookingResult;
use ruta_client::BookingApi;
use ruta_shared::{Booking, Bus, Route, SeatLayout};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Operator console: fleet and route management plus a view over all
/// bookings.
pub struct AdminConsole {
    api: Arc<dyn BookingApi>,
}

/// Operator input for registering a bus. Defaults mirror the booking
/// form: new buses start active with a 2x2 layout unless told otherwise.
#[derive(Debug, Clone)]
pub struct NewBus {
    pub bus_number: String,
    pub bus_name: String,
    pub operator_name: String,
    pub bus_type: String,
    pub total_seats: u32,
    pub rows: u32,
    pub seats_per_row: u32,
    pub amenities: Vec<String>,
    pub image_url: Option<String>,
    pub seat_layout: Option<SeatLayout>,
}

impl AdminConsole {
    pub fn new(api: Arc<dyn BookingApi>) -> Self {
        Self { api }
    }

    pub async fn buses(&self) -> BookingResult<Vec<Bus>> {
        Ok(self.api.list_buses().await?)
    }

    pub async fn active_buses(&self) -> BookingResult<Vec<Bus>> {
        Ok(self.api.list_active_buses().await?)
    }

    pub async fn routes(&self) -> BookingResult<Vec<Route>> {
        Ok(self.api.list_routes().await?)
    }

    pub async fn bookings(&self) -> BookingResult<Vec<Booking>> {
        Ok(self.api.list_bookings().await?)
    }

    /// Register a bus. `total_seats` is stored as supplied; keeping it
    /// consistent with `rows * seats_per_row` is the operator's job.
    pub async fn add_bus(&self, new_bus: NewBus) -> BookingResult<Bus> {
        let bus = Bus {
            id: Uuid::new_v4(),
            bus_number: new_bus.bus_number,
            bus_name: new_bus.bus_name,
            operator_name: new_bus.operator_name,
            bus_type: new_bus.bus_type,
            total_seats: new_bus.total_seats,
            rows: new_bus.rows,
            seats_per_row: new_bus.seats_per_row,
            amenities: new_bus.amenities,
            seat_layout: new_bus.seat_layout.unwrap_or_default(),
            image_url: new_bus.image_url,
            is_active: true,
        };
        let created = self.api.create_bus(&bus).await?;
        info!(bus = %created.bus_name, "bus registered");
        Ok(created)
    }

    pub async fn update_bus(&self, bus_id: Uuid, bus: &Bus) -> BookingResult<Bus> {
        Ok(self.api.update_bus(bus_id, bus).await?)
    }

    pub async fn remove_bus(&self, bus_id: Uuid) -> BookingResult<()> {
        self.api.delete_bus(bus_id).await?;
        info!(%bus_id, "bus removed");
        Ok(())
    }

    pub async fn add_route(&self, route: &Route) -> BookingResult<Route> {
        Ok(self.api.create_route(route).await?)
    }
}
