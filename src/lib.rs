//! In-memory airline ticket reservations
//!
//! An airline owns a catalog of flights; a reservation system books and
//! cancels tickets against that catalog.

pub mod domain;
pub use domain::{
    Airline, Confirmation, Flight, FlightCategory, Price, Reservation, ReservationError,
    ReservationId, ReservationSystem, ReservationView,
};

/// Startup catalog and seed reservations.
pub mod fixture;
pub use fixture::{Fixture, FixtureError};
