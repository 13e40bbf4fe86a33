use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A scheduled service between two cities, operated by a single bus.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub id: Uuid,
    pub bus_id: Uuid,
    pub from_city: String,
    pub to_city: String,
    /// Clock times as the backend renders them, e.g. "21:30".
    pub departure_time: String,
    pub arrival_time: String,
    pub duration: String,
    /// Per-seat price in minor currency units.
    pub base_fare: i64,
    /// A bookable route carries at least one of each.
    pub boarding_points: Vec<String>,
    pub dropping_points: Vec<String>,
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_deserialization() {
        let json = r#"
            {
                "id": "a07a35b8-20c5-4b96-9c5a-8be2f1b6e2a4",
                "busId": "7b7f7de4-3a52-4f58-8c9e-27e142a0f9a1",
                "fromCity": "Mumbai",
                "toCity": "Pune",
                "departureTime": "21:30",
                "arrivalTime": "05:30",
                "duration": "8h",
                "baseFare": 500,
                "boardingPoints": ["Dadar"],
                "droppingPoints": ["Swargate"],
                "isActive": true
            }
        "#;
        let route: Route = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(route.from_city, "Mumbai");
        assert_eq!(route.base_fare, 500);
        assert_eq!(route.boarding_points, vec!["Dadar".to_string()]);
    }
}
