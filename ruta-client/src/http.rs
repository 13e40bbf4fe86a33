use crate::api::BookingApi;
use crate::error::{ClientError, ClientResult};
use crate::requests::{CreateBookingRequest, CreatedBooking, PaymentOutcome, PaymentRequest};
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, Response};
use ruta_core::SeatId;
use ruta_shared::{Booking, Bus, Route};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;
use uuid::Uuid;

/// Backend mount point used by the development stack.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// reqwest-backed implementation of [`BookingApi`].
pub struct HttpBookingApi {
    client: Client,
    base_url: String,
}

impl HttpBookingApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn checked(response: Response) -> ClientResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        response
            .json::<T>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).query(query).send().await?;
        Self::decode(Self::checked(response).await?).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::decode(Self::checked(response).await?).await
    }

    async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        Self::decode(Self::checked(response).await?).await
    }
}

#[async_trait]
impl BookingApi for HttpBookingApi {
    async fn fetch_booked_seats(
        &self,
        bus_id: Uuid,
        route_id: Uuid,
        journey_date: NaiveDate,
    ) -> ClientResult<Vec<SeatId>> {
        let raw: Vec<String> = self
            .get_json(
                "/bookings/booked-seats",
                &[
                    ("busId", bus_id.to_string()),
                    ("routeId", route_id.to_string()),
                    ("journeyDate", journey_date.to_string()),
                ],
            )
            .await?;

        // The backend stores seat numbers as opaque strings; skip any entry
        // that does not parse rather than failing the whole seat map.
        let mut seats = Vec::with_capacity(raw.len());
        for entry in raw {
            match entry.parse::<SeatId>() {
                Ok(seat) => seats.push(seat),
                Err(_) => warn!(%entry, "skipping unparseable booked seat"),
            }
        }
        Ok(seats)
    }

    async fn create_booking(&self, request: &CreateBookingRequest) -> ClientResult<CreatedBooking> {
        self.post_json("/bookings", request).await
    }

    async fn process_payment(&self, request: &PaymentRequest) -> ClientResult<PaymentOutcome> {
        self.post_json("/payments/process", request).await
    }

    async fn fetch_booking(&self, booking_id: Uuid) -> ClientResult<Booking> {
        self.get_json(&format!("/bookings/{booking_id}"), &[]).await
    }

    async fn fetch_booking_by_number(&self, booking_number: &str) -> ClientResult<Booking> {
        self.get_json(&format!("/bookings/number/{booking_number}"), &[])
            .await
    }

    async fn fetch_user_bookings(&self, user_id: &str) -> ClientResult<Vec<Booking>> {
        self.get_json(&format!("/bookings/user/{user_id}"), &[]).await
    }

    async fn list_bookings(&self) -> ClientResult<Vec<Booking>> {
        self.get_json("/bookings", &[]).await
    }

    async fn cancel_booking(&self, booking_id: Uuid) -> ClientResult<()> {
        let response = self
            .client
            .put(self.url(&format!("/bookings/{booking_id}/cancel")))
            .send()
            .await?;
        Self::checked(response).await?;
        Ok(())
    }

    async fn search_routes(&self, from_city: &str, to_city: &str) -> ClientResult<Vec<Route>> {
        self.get_json(
            "/routes/search",
            &[
                ("fromCity", from_city.to_string()),
                ("toCity", to_city.to_string()),
            ],
        )
        .await
    }

    async fn fetch_route(&self, route_id: Uuid) -> ClientResult<Route> {
        self.get_json(&format!("/routes/{route_id}"), &[]).await
    }

    async fn list_routes(&self) -> ClientResult<Vec<Route>> {
        self.get_json("/routes", &[]).await
    }

    async fn create_route(&self, route: &Route) -> ClientResult<Route> {
        self.post_json("/routes", route).await
    }

    async fn fetch_bus(&self, bus_id: Uuid) -> ClientResult<Bus> {
        self.get_json(&format!("/buses/{bus_id}"), &[]).await
    }

    async fn list_buses(&self) -> ClientResult<Vec<Bus>> {
        self.get_json("/buses", &[]).await
    }

    async fn list_active_buses(&self) -> ClientResult<Vec<Bus>> {
        self.get_json("/buses/active", &[]).await
    }

    async fn create_bus(&self, bus: &Bus) -> ClientResult<Bus> {
        self.post_json("/buses", bus).await
    }

    async fn update_bus(&self, bus_id: Uuid, bus: &Bus) -> ClientResult<Bus> {
        self.put_json(&format!("/buses/{bus_id}"), bus).await
    }

    async fn delete_bus(&self, bus_id: Uuid) -> ClientResult<()> {
        let response = self
            .client
            .delete(self.url(&format!("/buses/{bus_id}")))
            .send()
            .await?;
        Self::checked(response).await?;
        Ok(())
    }
}
