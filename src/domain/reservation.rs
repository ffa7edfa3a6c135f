use std::{fmt, ops::Deref};

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::Flight;

/// Number of characters in a reservation identifier.
const ID_LEN: usize = 8;

/// A short, random reservation identifier.
///
/// Identifiers are the first eight hex characters of a v4 UUID. They are not
/// globally unique; the reservation system rejects collisions at insertion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReservationId(String);

impl ReservationId {
    /// Generates a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        let mut id = Uuid::new_v4().simple().to_string();
        id.truncate(ID_LEN);
        Self(id)
    }

    /// Returns the string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for ReservationId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for ReservationId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A booked ticket.
///
/// The reservation refers to its flight by catalog position rather than owning
/// it; the airline outlives every reservation made against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub(crate) id: ReservationId,
    pub(crate) flight: usize,
    pub(crate) passenger: String,
    pub(crate) date: NaiveDate,
}

impl Reservation {
    pub(crate) const fn new(
        id: ReservationId,
        flight: usize,
        passenger: String,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            flight,
            passenger,
            date,
        }
    }

    /// The reservation's identifier.
    #[must_use]
    pub const fn id(&self) -> &ReservationId {
        &self.id
    }

    /// The passenger's name.
    #[must_use]
    pub fn passenger(&self) -> &str {
        &self.passenger
    }

    /// The date of travel.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }
}

/// A borrowed view of a reservation joined with its flight.
///
/// Renders as `[id] passenger - number (destination) YYYY-MM-DD - Price: £ price`.
#[derive(Debug, Clone, Copy)]
pub struct ReservationView<'a> {
    /// The reservation's identifier.
    pub id: &'a ReservationId,
    /// The passenger's name.
    pub passenger: &'a str,
    /// The date of travel.
    pub date: NaiveDate,
    /// The booked flight.
    pub flight: &'a Flight,
}

impl fmt::Display for ReservationView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} - {} ({}) {} - Price: £ {}",
            self.id,
            self.passenger,
            self.flight.number(),
            self.flight.destination(),
            self.date.format("%Y-%m-%d"),
            self.flight.price()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_eight_hex_chars() {
        for _ in 0..100 {
            let id = ReservationId::generate();
            assert_eq!(id.len(), ID_LEN);
            assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn generated_ids_differ() {
        assert_ne!(ReservationId::generate(), ReservationId::generate());
    }

    #[test]
    fn view_display() {
        let flight = Flight::domestic("M001", "Bristol", 10000.0);
        let id = ReservationId("deadbeef".to_string());
        let view = ReservationView {
            id: &id,
            passenger: "Alice",
            date: NaiveDate::from_ymd_opt(2099, 1, 1).unwrap(),
            flight: &flight,
        };

        assert_eq!(
            view.to_string(),
            "[deadbeef] Alice - M001 (Bristol) 2099-01-01 - Price: £ 5000.0"
        );
    }
}
