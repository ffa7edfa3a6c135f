//! Booking and cancelling tickets against an airline's catalog.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;
use tracing::instrument;

use crate::domain::{Airline, Price, Reservation, ReservationId, ReservationView};

/// The date format accepted when reserving a ticket.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` travel date.
///
/// The year must be four digits; month and day may drop their leading zero.
/// Anything else, including surrounding whitespace or a signed year, is
/// rejected before chrono sees it.
fn parse_date(date: &str) -> Option<NaiveDate> {
    let mut fields = date.split('-');
    let shaped = [4..=4, 1..=2, 1..=2].into_iter().all(|width| {
        fields.next().is_some_and(|field| {
            width.contains(&field.len()) && field.bytes().all(|b| b.is_ascii_digit())
        })
    }) && fields.next().is_none();

    if !shaped {
        return None;
    }
    NaiveDate::parse_from_str(date, DATE_FORMAT).ok()
}

/// Errors that can occur when reserving or cancelling a ticket.
///
/// None of these are fatal; the caller reports them and carries on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReservationError {
    /// The requested flight is not in the airline's catalog.
    #[error("Flight no. doesn't exist.")]
    FlightNotFound(String),
    /// The travel date is not a valid `YYYY-MM-DD` date.
    #[error("Invalid date format. Use YYYY-MM-DD.")]
    InvalidDateFormat(String),
    /// The travel date is not in the future.
    #[error("Only future dates are allowed.")]
    PastDateNotAllowed(NaiveDate),
    /// No reservation has the given identifier.
    #[error("The specified reservation doesn't exist.")]
    ReservationNotFound(String),
}

/// Result of a successful reservation.
#[derive(Debug, Clone, PartialEq)]
pub struct Confirmation {
    /// Identifier of the new reservation, needed to cancel it.
    pub id: ReservationId,
    /// The ticket price charged.
    pub price: Price,
}

/// Books and cancels tickets for a single airline.
///
/// Reservations are kept in the order they were made.
#[derive(Debug, Clone)]
pub struct ReservationSystem {
    airline: Airline,
    reservations: Vec<Reservation>,
}

impl ReservationSystem {
    /// Creates a reservation system with no reservations.
    #[must_use]
    pub const fn new(airline: Airline) -> Self {
        Self {
            airline,
            reservations: Vec::new(),
        }
    }

    /// The airline whose flights are booked.
    #[must_use]
    pub const fn airline(&self) -> &Airline {
        &self.airline
    }

    /// Reserves a ticket on `flight` for `passenger`, travelling on `date`.
    ///
    /// `date` must be a `YYYY-MM-DD` date that has not yet started in local
    /// time.
    ///
    /// # Errors
    ///
    /// See [`Self::reserve_ticket_at`].
    pub fn reserve_ticket(
        &mut self,
        flight: &str,
        passenger: &str,
        date: &str,
    ) -> Result<Confirmation, ReservationError> {
        self.reserve_ticket_at(flight, passenger, date, Local::now().naive_local())
    }

    /// Reserves a ticket, judging whether `date` is in the future relative to
    /// `now`.
    ///
    /// Checks run in order and the first failure wins. Nothing is recorded
    /// unless every check passes.
    ///
    /// # Errors
    ///
    /// - [`ReservationError::FlightNotFound`] if the flight is not in the
    ///   catalog
    /// - [`ReservationError::InvalidDateFormat`] if `date` is not a valid
    ///   `YYYY-MM-DD` date
    /// - [`ReservationError::PastDateNotAllowed`] if midnight on `date` is
    ///   before `now`
    #[instrument(level = "debug", skip(self))]
    pub fn reserve_ticket_at(
        &mut self,
        flight: &str,
        passenger: &str,
        date: &str,
        now: NaiveDateTime,
    ) -> Result<Confirmation, ReservationError> {
        let index = self
            .airline
            .position(flight)
            .ok_or_else(|| ReservationError::FlightNotFound(flight.to_string()))?;

        let date = parse_date(date)
            .ok_or_else(|| ReservationError::InvalidDateFormat(date.to_string()))?;

        if date.and_time(NaiveTime::MIN) < now {
            return Err(ReservationError::PastDateNotAllowed(date));
        }

        let id = self.unused_id();
        let price = self.airline.flight_at(index).price();
        self.reservations.push(Reservation::new(
            id.clone(),
            index,
            passenger.to_string(),
            date,
        ));

        tracing::info!("Reserved {id} on {flight} for {passenger}");
        Ok(Confirmation { id, price })
    }

    /// Cancels the reservation with the given identifier, returning it.
    ///
    /// # Errors
    ///
    /// Returns [`ReservationError::ReservationNotFound`] if no reservation has
    /// that identifier. The remaining reservations are left untouched.
    #[instrument(level = "debug", skip(self))]
    pub fn cancel_reservation(&mut self, id: &str) -> Result<Reservation, ReservationError> {
        let position = self
            .reservations
            .iter()
            .position(|reservation| reservation.id.as_str() == id)
            .ok_or_else(|| ReservationError::ReservationNotFound(id.to_string()))?;

        let reservation = self.reservations.remove(position);
        tracing::info!("Cancelled reservation {id}");
        Ok(reservation)
    }

    /// Iterates over reservations in the order they were made.
    pub fn reservations(&self) -> impl Iterator<Item = ReservationView<'_>> {
        self.reservations
            .iter()
            .map(|reservation| self.view(reservation))
    }

    /// Finds a reservation by identifier.
    #[must_use]
    pub fn find_reservation(&self, id: &str) -> Option<ReservationView<'_>> {
        self.reservations
            .iter()
            .find(|reservation| reservation.id.as_str() == id)
            .map(|reservation| self.view(reservation))
    }

    /// The number of reservations held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    /// Whether there are no reservations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }

    fn view<'a>(&'a self, reservation: &'a Reservation) -> ReservationView<'a> {
        ReservationView {
            id: &reservation.id,
            passenger: &reservation.passenger,
            date: reservation.date,
            flight: self.airline.flight_at(reservation.flight),
        }
    }

    /// Generates identifiers until one is found that no reservation uses.
    fn unused_id(&self) -> ReservationId {
        loop {
            let id = ReservationId::generate();
            if self.find_reservation(&id).is_none() {
                return id;
            }
            tracing::debug!("Reservation id {id} already in use, generating another");
        }
    }
}
