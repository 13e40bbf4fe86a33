mod app_config;

use anyhow::{bail, Context};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use ruta_booking::{AdminConsole, BookingHistory, BookingSession, SubmissionOutcome};
use ruta_client::{BookingApi, HttpBookingApi};
use ruta_core::{SeatId, SeatStatus, SessionContext};
use ruta_shared::{Gender, PassengerDetails};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "ruta")]
#[command(about = "Bus ticket booking console")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search routes between two cities
    Search {
        from_city: String,
        to_city: String,
    },
    /// Show the seat map for a bus on a route and date
    Seats {
        bus_id: Uuid,
        route_id: Uuid,
        #[arg(long)]
        date: NaiveDate,
    },
    /// Book seats and pay
    Book {
        bus_id: Uuid,
        route_id: Uuid,
        #[arg(long)]
        date: NaiveDate,
        /// Comma-separated seat numbers, e.g. 1B,2B
        #[arg(long, value_delimiter = ',')]
        seats: Vec<String>,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        age: Option<u8>,
        #[arg(long, default_value = "other")]
        gender: Gender,
    },
    /// List your bookings, newest first
    History,
    /// Cancel a confirmed booking
    Cancel { booking_id: Uuid },
    /// Operator console
    Admin {
        #[command(subcommand)]
        command: AdminCommands,
    },
}

#[derive(Subcommand)]
enum AdminCommands {
    /// List every bus in the fleet
    ListBuses {
        /// Only buses currently in service
        #[arg(long)]
        active: bool,
    },
    /// List every route
    ListRoutes,
    /// List every booking in the system
    ListBookings,
}

fn fmt_money(minor: i64) -> String {
    format!("{}.{:02}", minor / 100, (minor % 100).abs())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ruta=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = app_config::Config::load().context("Failed to load config")?;
    tracing::info!("Using backend at {}", config.backend.base_url);

    let api: Arc<dyn BookingApi> = Arc::new(HttpBookingApi::new(config.backend.base_url.as_str()));
    let ctx = SessionContext::new(config.user.id.clone());

    match cli.command {
        Commands::Search { from_city, to_city } => {
            let routes = api.search_routes(&from_city, &to_city).await?;
            if routes.is_empty() {
                println!("No buses found from {from_city} to {to_city}");
                return Ok(());
            }
            for route in routes {
                let bus = api.fetch_bus(route.bus_id).await?;
                println!(
                    "{}  {} -> {}  dep {} arr {} ({})  fare {}  bus {} [{}]  route {}",
                    bus.bus_name,
                    route.from_city,
                    route.to_city,
                    route.departure_time,
                    route.arrival_time,
                    route.duration,
                    fmt_money(route.base_fare),
                    bus.id,
                    bus.bus_type,
                    route.id,
                );
            }
        }
        Commands::Seats {
            bus_id,
            route_id,
            date,
        } => {
            let bus = api.fetch_bus(bus_id).await?;
            let route = api.fetch_route(route_id).await?;
            let session = BookingSession::open(api, ctx, bus, route, date).await?;
            print_seat_map(&session);
        }
        Commands::Book {
            bus_id,
            route_id,
            date,
            seats,
            name,
            email,
            phone,
            age,
            gender,
        } => {
            let bus = api.fetch_bus(bus_id).await?;
            let route = api.fetch_route(route_id).await?;
            let mut session = BookingSession::open(api.clone(), ctx, bus, route, date).await?;

            for raw in &seats {
                let seat: SeatId = raw.parse()?;
                if session.status(seat) == SeatStatus::Booked {
                    bail!("seat {seat} is already booked, pick another");
                }
                session.toggle(seat);
            }

            let summary = session.fare_summary();
            println!(
                "Seats {}  x{}  total {}",
                summary.seat_numbers.join(", "),
                summary.seat_count,
                fmt_money(summary.total_fare),
            );

            let passenger = PassengerDetails::new(name, email, phone, age, gender);
            match session.submit(passenger).await? {
                SubmissionOutcome::Confirmed { booking_id } => {
                    let history = BookingHistory::new(api);
                    let booking = history.confirmation(booking_id).await?;
                    println!(
                        "Confirmed: {} ({} seats, {})",
                        booking.booking_number,
                        booking.number_of_seats,
                        fmt_money(booking.total_fare),
                    );
                }
                SubmissionOutcome::PaymentDeclined { .. } => {
                    println!("Payment failed. Please try again.");
                }
                SubmissionOutcome::SubmissionFailed { reason } => {
                    println!("Booking failed: {reason}. Please try again.");
                }
            }
        }
        Commands::History => {
            let history = BookingHistory::new(api);
            let bookings = history.for_user(&ctx.user_id).await?;
            if bookings.is_empty() {
                println!("No bookings yet");
                return Ok(());
            }
            for booking in bookings {
                println!(
                    "{}  {:?}  {} -> {}  {}  seats {}  {}",
                    booking.booking_number,
                    booking.status,
                    booking.from_city,
                    booking.to_city,
                    booking.journey_date,
                    booking.seat_numbers.join(","),
                    fmt_money(booking.total_fare),
                );
            }
        }
        Commands::Cancel { booking_id } => {
            let history = BookingHistory::new(api);
            history.cancel(booking_id).await?;
            println!("Booking cancelled");
        }
        Commands::Admin { command } => {
            let console = AdminConsole::new(api);
            match command {
                AdminCommands::ListBuses { active } => {
                    let buses = if active {
                        console.active_buses().await?
                    } else {
                        console.buses().await?
                    };
                    for bus in buses {
                        println!(
                            "{}  {}  {} ({})  {} seats  active={}",
                            bus.id, bus.bus_number, bus.bus_name, bus.operator_name,
                            bus.total_seats, bus.is_active,
                        );
                    }
                }
                AdminCommands::ListRoutes => {
                    for route in console.routes().await? {
                        println!(
                            "{}  {} -> {}  dep {}  fare {}",
                            route.id,
                            route.from_city,
                            route.to_city,
                            route.departure_time,
                            fmt_money(route.base_fare),
                        );
                    }
                }
                AdminCommands::ListBookings => {
                    for booking in console.bookings().await? {
                        println!(
                            "{}  {}  {:?}/{:?}  {}",
                            booking.booking_number,
                            booking.user_id,
                            booking.status,
                            booking.payment_status,
                            fmt_money(booking.total_fare),
                        );
                    }
                }
            }
        }
    }

    Ok(())
}

fn print_seat_map(session: &BookingSession) {
    let per_row = session.grid().seats_per_row();
    let mut col = 0;
    for (seat, status) in session.seat_map() {
        let marker = match status {
            SeatStatus::Booked => 'x',
            SeatStatus::Selected => '*',
            SeatStatus::Available => ' ',
        };
        print!("[{seat}{marker}] ");
        col += 1;
        if col == per_row {
            println!();
            col = 0;
        }
    }
    println!("x = booked");
}
