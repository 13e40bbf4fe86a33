use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Seat layout descriptor supplied by the operator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatLayout {
    /// Layout kind as advertised, e.g. "2x2".
    #[serde(rename = "type")]
    pub kind: String,
    pub unavailable_seats: Vec<String>,
}

impl Default for SeatLayout {
    fn default() -> Self {
        Self {
            kind: "2x2".to_string(),
            unavailable_seats: Vec::new(),
        }
    }
}

/// A coach as the backend describes it.
///
/// `total_seats == rows * seats_per_row` is the operator's responsibility;
/// nothing here enforces it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bus {
    pub id: Uuid,
    pub bus_number: String,
    pub bus_name: String,
    pub operator_name: String,
    pub bus_type: String,
    pub total_seats: u32,
    pub rows: u32,
    pub seats_per_row: u32,
    pub amenities: Vec<String>,
    pub seat_layout: SeatLayout,
    #[serde(default)]
    pub image_url: Option<String>,
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bus_wire_names_are_camel_case() {
        let json = r#"
            {
                "id": "7b7f7de4-3a52-4f58-8c9e-27e142a0f9a1",
                "busNumber": "MH12AB1234",
                "busName": "Shivneri Express",
                "operatorName": "MSRTC",
                "busType": "AC Sleeper",
                "totalSeats": 4,
                "rows": 2,
                "seatsPerRow": 2,
                "amenities": ["WiFi", "Water Bottle"],
                "seatLayout": {"type": "2x2", "unavailableSeats": []},
                "isActive": true
            }
        "#;
        let bus: Bus = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(bus.bus_name, "Shivneri Express");
        assert_eq!(bus.seats_per_row, 2);
        assert_eq!(bus.seat_layout.kind, "2x2");
        assert!(bus.image_url.is_none());
    }
}
