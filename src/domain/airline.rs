use tracing::instrument;

use crate::domain::Flight;

/// An airline and its catalog of flights.
///
/// Flights are kept in insertion order and are never removed, so the position
/// of a flight in the catalog is stable for the lifetime of the airline.
#[derive(Debug, Clone, PartialEq)]
pub struct Airline {
    name: String,
    flights: Vec<Flight>,
}

impl Airline {
    /// Creates an airline with an empty catalog.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            flights: Vec::new(),
        }
    }

    /// The airline's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends a flight to the catalog.
    ///
    /// Flight numbers are not checked for duplicates; lookups return the
    /// earliest match.
    pub fn add_flight(&mut self, flight: Flight) {
        tracing::debug!("Adding flight {} to {}", flight.number(), self.name);
        self.flights.push(flight);
    }

    /// Finds the first flight with the given number.
    #[must_use]
    pub fn get_flight(&self, number: &str) -> Option<&Flight> {
        self.flights.iter().find(|flight| flight.number() == number)
    }

    /// Descriptions of every flight, in catalog order.
    pub fn list_flights(&self) -> impl Iterator<Item = String> + '_ {
        self.flights.iter().map(Flight::description)
    }

    /// Iterates over the flights in catalog order.
    pub fn flights(&self) -> impl Iterator<Item = &Flight> {
        self.flights.iter()
    }

    /// The number of flights in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.flights.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    /// The catalog position of the first flight with the given number.
    #[instrument(level = "trace", skip(self))]
    pub(crate) fn position(&self, number: &str) -> Option<usize> {
        self.flights.iter().position(|flight| flight.number() == number)
    }

    /// The flight at a catalog position previously returned by
    /// [`Self::position`].
    ///
    /// # Panics
    ///
    /// Panics if the position is out of range, which cannot happen for
    /// positions handed out by this airline since flights are never removed.
    pub(crate) fn flight_at(&self, index: usize) -> &Flight {
        &self.flights[index]
    }
}
