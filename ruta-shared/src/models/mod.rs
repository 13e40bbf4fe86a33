pub mod booking;
pub mod bus;
pub mod passenger;
pub mod route;
