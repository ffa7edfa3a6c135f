use std::path::Path;

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::domain::{Airline, Flight, FlightCategory, ReservationSystem};

/// The data a reservation system is started with.
///
/// A fixture names an airline, its flight catalog, and any reservations to
/// book before the system is handed to the user. The built-in fixture
/// ([`Fixture::default`]) describes `WizzAir` with three flights and six
/// bookings; others can be loaded from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Fixture {
    /// Name of the airline.
    pub airline: String,
    /// Flight catalog, in listing order.
    pub flights: Vec<FlightSpec>,
    /// Reservations booked at startup, in booking order.
    pub reservations: Vec<SeedReservation>,
}

/// A catalog entry in a fixture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightSpec {
    /// The flight number.
    pub number: String,
    /// Where the flight goes.
    pub destination: String,
    /// Base ticket price, before the category multiplier is applied.
    pub price: f64,
    /// The flight's category.
    pub category: FlightCategory,
}

/// A reservation booked at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedReservation {
    /// Number of the flight to book.
    pub flight: String,
    /// The passenger's name.
    pub passenger: String,
    /// Travel date, `YYYY-MM-DD`.
    pub date: String,
}

/// Errors that can occur when reading or writing a fixture file.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    /// The file could not be read.
    #[error("Failed to read fixture file: {0}")]
    Read(#[from] std::io::Error),
    /// The file is not a valid fixture.
    #[error("Failed to parse fixture file: {0}")]
    Parse(#[from] toml::de::Error),
    /// The fixture could not be rendered as TOML.
    #[error("Failed to serialize fixture: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl Default for Fixture {
    fn default() -> Self {
        let flights = vec![
            FlightSpec::new("M001", "Bristol", 10000.0, FlightCategory::Domestic),
            FlightSpec::new("M002", "Luton", 12000.0, FlightCategory::Domestic),
            FlightSpec::new("H001", "Amsterdam", 20000.0, FlightCategory::International),
        ];

        let reservations = [
            ("M001", "Korbin Parker", "2030-06-01"),
            ("M001", "Boyce Ayers", "2030-06-01"),
            ("M002", "Averie Gregory", "2030-06-10"),
            ("M002", "Claire Walton", "2030-06-10"),
            ("H001", "Marion White", "2030-07-15"),
            ("H001", "Daphne Fabian", "2030-07-15"),
        ]
        .into_iter()
        .map(|(flight, passenger, date)| SeedReservation {
            flight: flight.to_string(),
            passenger: passenger.to_string(),
            date: date.to_string(),
        })
        .collect();

        Self {
            airline: "WizzAir".to_string(),
            flights,
            reservations,
        }
    }
}

impl FlightSpec {
    /// Creates a catalog entry.
    #[must_use]
    pub fn new(
        number: impl Into<String>,
        destination: impl Into<String>,
        price: f64,
        category: FlightCategory,
    ) -> Self {
        Self {
            number: number.into(),
            destination: destination.into(),
            price,
            category,
        }
    }
}

impl Fixture {
    /// Loads a fixture from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid fixture.
    pub fn load(path: &Path) -> Result<Self, FixtureError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Renders the fixture as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if the fixture cannot be serialized.
    pub fn to_toml(&self) -> Result<String, FixtureError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Drops the seed reservations, keeping only the catalog.
    #[must_use]
    pub fn without_reservations(mut self) -> Self {
        self.reservations.clear();
        self
    }

    /// Builds the airline described by this fixture.
    #[must_use]
    pub fn airline(&self) -> Airline {
        let mut airline = Airline::new(&self.airline);
        for entry in &self.flights {
            airline.add_flight(Flight::new(
                &entry.number,
                &entry.destination,
                entry.price,
                entry.category,
            ));
        }
        airline
    }

    /// Builds a reservation system and books the seed reservations.
    ///
    /// Seeds that cannot be booked, for instance because their date has
    /// passed, are logged and skipped.
    #[must_use]
    pub fn build(&self) -> ReservationSystem {
        self.build_at(Local::now().naive_local())
    }

    /// As [`Self::build`], judging seed dates relative to `now`.
    #[instrument(level = "debug", skip(self), fields(airline = %self.airline))]
    #[must_use]
    pub fn build_at(&self, now: NaiveDateTime) -> ReservationSystem {
        let mut system = ReservationSystem::new(self.airline());

        for seed in &self.reservations {
            if let Err(e) = system.reserve_ticket_at(&seed.flight, &seed.passenger, &seed.date, now)
            {
                tracing::warn!(
                    "Skipping seed reservation for {} on {} ({}): {e}",
                    seed.passenger,
                    seed.flight,
                    seed.date
                );
            }
        }

        tracing::debug!(
            "Started with {} flights and {} reservations",
            system.airline().len(),
            system.len()
        );
        system
    }
}

/// The serialized versions of a fixture.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        airline: String,

        #[serde(default)]
        flights: Vec<FlightSpec>,

        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        reservations: Vec<SeedReservation>,
    },
}

impl From<Versions> for Fixture {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                airline,
                flights,
                reservations,
            } => Self {
                airline,
                flights,
                reservations,
            },
        }
    }
}

impl From<Fixture> for Versions {
    fn from(fixture: Fixture) -> Self {
        Self::V1 {
            airline: fixture.airline,
            flights: fixture.flights,
            reservations: fixture.reservations,
        }
    }
}
