use std::fmt;

use serde::{Deserialize, Serialize};

/// The category of a flight.
///
/// Each category carries the fixed multiplier applied to the base ticket
/// price when the flight is added to the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlightCategory {
    /// A flight within the home country. Tickets are sold at half price.
    Domestic,
    /// A flight abroad. Tickets carry a 50% surcharge.
    International,
}

impl FlightCategory {
    /// The multiplier applied to the base price of flights in this category.
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Domestic => 0.5,
            Self::International => 1.5,
        }
    }
}

impl fmt::Display for FlightCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domestic => f.write_str("Domestic"),
            Self::International => f.write_str("International"),
        }
    }
}

/// A ticket price in pounds.
///
/// Whole amounts render with a single decimal place (`5000.0`), anything else
/// in its shortest exact form (`499.5`).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Price(f64);

impl Price {
    /// Wraps a raw amount.
    #[must_use]
    pub const fn new(amount: f64) -> Self {
        Self(amount)
    }

    /// The raw amount.
    #[must_use]
    pub const fn amount(self) -> f64 {
        self.0
    }
}

impl From<f64> for Price {
    fn from(amount: f64) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_finite() && self.0.fract() == 0.0 {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// A bookable route in an airline's catalog.
///
/// The ticket price is adjusted for the flight's category once, at
/// construction, and never recomputed.
#[derive(Debug, Clone, PartialEq)]
pub struct Flight {
    number: String,
    destination: String,
    price: Price,
    category: FlightCategory,
}

impl Flight {
    /// Creates a flight, applying the category multiplier to `base_price`.
    #[must_use]
    pub fn new(
        number: impl Into<String>,
        destination: impl Into<String>,
        base_price: f64,
        category: FlightCategory,
    ) -> Self {
        Self {
            number: number.into(),
            destination: destination.into(),
            price: Price(base_price * category.multiplier()),
            category,
        }
    }

    /// Creates a [`FlightCategory::Domestic`] flight.
    #[must_use]
    pub fn domestic(
        number: impl Into<String>,
        destination: impl Into<String>,
        base_price: f64,
    ) -> Self {
        Self::new(number, destination, base_price, FlightCategory::Domestic)
    }

    /// Creates a [`FlightCategory::International`] flight.
    #[must_use]
    pub fn international(
        number: impl Into<String>,
        destination: impl Into<String>,
        base_price: f64,
    ) -> Self {
        Self::new(number, destination, base_price, FlightCategory::International)
    }

    /// The flight number, e.g. `M001`.
    #[must_use]
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Where the flight goes.
    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// The category-adjusted ticket price.
    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    /// The flight's category.
    #[must_use]
    pub const fn category(&self) -> FlightCategory {
        self.category
    }

    /// A one-line, human-readable summary of the flight.
    #[must_use]
    pub fn description(&self) -> String {
        format!(
            "{} flight {} -> {}, Ticket price: £ {}",
            self.category, self.number, self.destination, self.price
        )
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(FlightCategory::Domestic, 10000.0, 5000.0; "domestic halves")]
    #[test_case(FlightCategory::Domestic, 12000.0, 6000.0; "domestic halves again")]
    #[test_case(FlightCategory::International, 20000.0, 30000.0; "international surcharge")]
    #[test_case(FlightCategory::International, 0.0, 0.0; "free stays free")]
    fn price_is_adjusted_by_category(category: FlightCategory, base: f64, expected: f64) {
        let flight = Flight::new("X001", "Nowhere", base, category);
        assert_eq!(flight.price(), Price::new(expected));
    }

    #[test]
    fn domestic_description() {
        let flight = Flight::domestic("M001", "Bristol", 10000.0);
        assert_eq!(
            flight.description(),
            "Domestic flight M001 -> Bristol, Ticket price: £ 5000.0"
        );
    }

    #[test]
    fn international_description() {
        let flight = Flight::international("H001", "Amsterdam", 20000.0);
        assert_eq!(
            flight.description(),
            "International flight H001 -> Amsterdam, Ticket price: £ 30000.0"
        );
    }

    #[test_case(5000.0, "5000.0")]
    #[test_case(499.5, "499.5")]
    #[test_case(0.0, "0.0")]
    #[test_case(0.25, "0.25")]
    fn price_display(amount: f64, expected: &str) {
        assert_eq!(Price::new(amount).to_string(), expected);
    }

    #[test]
    fn category_parses_from_lowercase_name() {
        #[derive(Deserialize)]
        struct Wrapper {
            category: FlightCategory,
        }

        let parsed: Wrapper = toml::from_str(r#"category = "international""#).unwrap();
        assert_eq!(parsed.category, FlightCategory::International);
    }
}
