//! Domain models for ticket reservations.
//!
//! This module contains the flight catalog, the airline that owns it, and the
//! reservation system that books tickets against it.

/// Flight catalog entries and category pricing.
pub mod flight;
pub use flight::{Flight, FlightCategory, Price};

mod airline;
pub use airline::Airline;

/// Reservation records and their identifiers.
pub mod reservation;
pub use reservation::{Reservation, ReservationId, ReservationView};

mod system;
pub use system::{Confirmation, ReservationError, ReservationSystem};
