//! The interactive text menu.

use std::{
    fmt,
    io::{self, BufRead, Write},
    str::FromStr,
};

use reservations::ReservationSystem;
use tracing::instrument;

use super::terminal::Colorize;

/// An option on the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Reserve,
    Cancel,
    ListReservations,
    ListFlights,
    Exit,
}

/// Returned when the input matches none of the menu options.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Invalid option. Please try again.")]
pub struct InvalidMenuChoice(String);

impl FromStr for MenuChoice {
    type Err = InvalidMenuChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::Reserve),
            "2" => Ok(Self::Cancel),
            "3" => Ok(Self::ListReservations),
            "4" => Ok(Self::ListFlights),
            "0" => Ok(Self::Exit),
            other => Err(InvalidMenuChoice(other.to_string())),
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (key, label) = match self {
            Self::Reserve => ("1", "Ticket reservation"),
            Self::Cancel => ("2", "Cancel reservation"),
            Self::ListReservations => ("3", "List reservations"),
            Self::ListFlights => ("4", "List flights"),
            Self::Exit => ("0", "Exit"),
        };
        write!(f, "{key}. {label}")
    }
}

const OPTIONS: [MenuChoice; 5] = [
    MenuChoice::Reserve,
    MenuChoice::Cancel,
    MenuChoice::ListReservations,
    MenuChoice::ListFlights,
    MenuChoice::Exit,
];

/// Reads menu choices from `input` and writes results to `output`.
pub struct Menu<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    #[must_use]
    pub const fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            color: false,
        }
    }

    #[must_use]
    pub const fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Runs until the user exits or the input ends.
    ///
    /// Domain errors are reported and the menu is shown again; only I/O
    /// errors on the terminal streams are returned.
    ///
    /// # Errors
    ///
    /// Returns an error if reading the input or writing the output fails.
    #[instrument(level = "debug", skip_all)]
    pub fn run(&mut self, system: &mut ReservationSystem) -> io::Result<()> {
        loop {
            self.show_menu()?;
            let Some(line) = self.prompt("Choose an option: ")? else {
                tracing::debug!("Input closed, leaving menu");
                break;
            };

            match line.parse::<MenuChoice>() {
                Ok(MenuChoice::Reserve) => {
                    if !self.reserve(system)? {
                        break;
                    }
                }
                Ok(MenuChoice::Cancel) => {
                    if !self.cancel(system)? {
                        break;
                    }
                }
                Ok(MenuChoice::ListReservations) => self.list_reservations(system)?,
                Ok(MenuChoice::ListFlights) => self.list_flights(system)?,
                Ok(MenuChoice::Exit) => {
                    writeln!(self.output, "Exit...")?;
                    break;
                }
                Err(e) => {
                    tracing::debug!("Rejected menu input {:?}", e.0);
                    self.report_error(&e.to_string())?;
                }
            }
        }
        self.output.flush()
    }

    fn show_menu(&mut self) -> io::Result<()> {
        let header = self.paint("--- Ticket reservation system ---", <str as Colorize>::info);
        writeln!(self.output, "\n{header}")?;
        for option in OPTIONS {
            writeln!(self.output, "{option}")?;
        }
        Ok(())
    }

    /// Returns `false` if the input ended before all fields were read.
    fn reserve(&mut self, system: &mut ReservationSystem) -> io::Result<bool> {
        let Some(flight) = self.prompt("Flight no.: ")? else {
            return Ok(false);
        };
        let Some(passenger) = self.prompt("Passenger name: ")? else {
            return Ok(false);
        };
        let Some(date) = self.prompt("Flight date (YYYY-MM-DD): ")? else {
            return Ok(false);
        };

        match system.reserve_ticket(&flight, &passenger, &date) {
            Ok(confirmation) => {
                let message = format!("Successful reservation! Identifier: {}", confirmation.id);
                let message = self.paint(&message, <str as Colorize>::success);
                writeln!(self.output, "{message}")?;
            }
            Err(e) => self.report_error(&format!("Error: {e}"))?,
        }
        Ok(true)
    }

    /// Returns `false` if the input ended before the identifier was read.
    fn cancel(&mut self, system: &mut ReservationSystem) -> io::Result<bool> {
        let Some(id) = self.prompt("Reservation identifier: ")? else {
            return Ok(false);
        };

        match system.cancel_reservation(&id) {
            Ok(_) => {
                let message = self.paint("Successful cancellation.", <str as Colorize>::success);
                writeln!(self.output, "{message}")?;
            }
            Err(e) => self.report_error(&format!("Error: {e}"))?,
        }
        Ok(true)
    }

    fn list_reservations(&mut self, system: &ReservationSystem) -> io::Result<()> {
        if system.is_empty() {
            writeln!(self.output, "No reservations found.")?;
        }
        for reservation in system.reservations() {
            writeln!(self.output, "{reservation}")?;
        }
        Ok(())
    }

    fn list_flights(&mut self, system: &ReservationSystem) -> io::Result<()> {
        for description in system.airline().list_flights() {
            writeln!(self.output, "{description}")?;
        }
        Ok(())
    }

    fn report_error(&mut self, message: &str) -> io::Result<()> {
        let message = self.paint(message, <str as Colorize>::warning);
        writeln!(self.output, "{message}")
    }

    /// Writes `label` and reads one line, without its line ending.
    ///
    /// Returns `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn paint(&self, text: &str, style: fn(&str) -> String) -> String {
        if self.color {
            style(text)
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use reservations::{Airline, Flight, ReservationSystem};
    use test_case::test_case;

    use super::*;

    fn system() -> ReservationSystem {
        let mut airline = Airline::new("WizzAir");
        airline.add_flight(Flight::domestic("M001", "Bristol", 10000.0));
        airline.add_flight(Flight::international("H001", "Amsterdam", 20000.0));
        ReservationSystem::new(airline)
    }

    fn run(system: &mut ReservationSystem, script: &str) -> String {
        let mut output = Vec::new();
        Menu::new(Cursor::new(script.as_bytes()), &mut output)
            .run(system)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    fn identifier(output: &str) -> String {
        let marker = "Successful reservation! Identifier: ";
        let start = output.find(marker).expect("no reservation made") + marker.len();
        output[start..start + 8].to_string()
    }

    #[test_case("1", MenuChoice::Reserve)]
    #[test_case("2", MenuChoice::Cancel)]
    #[test_case("3", MenuChoice::ListReservations)]
    #[test_case("4", MenuChoice::ListFlights)]
    #[test_case("0", MenuChoice::Exit)]
    #[test_case(" 3 ", MenuChoice::ListReservations; "surrounding whitespace")]
    fn parses_choice(input: &str, expected: MenuChoice) {
        assert_eq!(input.parse::<MenuChoice>().unwrap(), expected);
    }

    #[test_case("5")]
    #[test_case("")]
    #[test_case("reserve")]
    #[test_case("01")]
    fn rejects_choice(input: &str) {
        assert!(input.parse::<MenuChoice>().is_err());
    }

    #[test]
    fn shows_menu_and_exits() {
        let output = run(&mut system(), "0\n");
        assert!(output.contains("--- Ticket reservation system ---"));
        assert!(output.contains("1. Ticket reservation\n"));
        assert!(output.contains("0. Exit\n"));
        assert!(output.ends_with("Exit...\n"));
    }

    #[test]
    fn end_of_input_exits() {
        let output = run(&mut system(), "");
        assert!(output.ends_with("Choose an option: "));
    }

    #[test]
    fn invalid_option_redisplays_menu() {
        let output = run(&mut system(), "9\n0\n");
        assert!(output.contains("Invalid option. Please try again.\n"));
        assert_eq!(output.matches("--- Ticket reservation system ---").count(), 2);
    }

    #[test]
    fn reserve_then_list() {
        let mut system = system();
        let output = run(&mut system, "1\nM001\nAlice\n2099-01-01\n3\n0\n");

        let id = identifier(&output);
        assert!(output.contains(&format!(
            "[{id}] Alice - M001 (Bristol) 2099-01-01 - Price: £ 5000.0\n"
        )));
        assert_eq!(system.len(), 1);
    }

    #[test]
    fn reserve_errors_are_reported() {
        let mut system = system();
        let output = run(
            &mut system,
            "1\nZ999\nCarl\n2099-01-01\n1\nH001\nBob\n2020-01-01\n1\nH001\nBob\nsoon\n0\n",
        );

        assert!(output.contains("Error: Flight no. doesn't exist.\n"));
        assert!(output.contains("Error: Only future dates are allowed.\n"));
        assert!(output.contains("Error: Invalid date format. Use YYYY-MM-DD.\n"));
        assert!(system.is_empty());
    }

    #[test]
    fn reserve_then_cancel() {
        let mut system = system();
        let output = run(&mut system, "1\nH001\nDana\n2099-05-05\n0\n");
        let id = identifier(&output);

        let output = run(&mut system, &format!("2\n{id}\n3\n0\n"));
        assert!(output.contains("Successful cancellation.\n"));
        assert!(output.contains("No reservations found.\n"));
        assert!(system.is_empty());
    }

    #[test]
    fn cancel_unknown_reservation() {
        let output = run(&mut system(), "2\nnope\n0\n");
        assert!(output.contains("Error: The specified reservation doesn't exist.\n"));
    }

    #[test]
    fn lists_flights() {
        let output = run(&mut system(), "4\n0\n");
        assert!(output.contains("Domestic flight M001 -> Bristol, Ticket price: £ 5000.0\n"));
        assert!(
            output.contains("International flight H001 -> Amsterdam, Ticket price: £ 30000.0\n")
        );
    }

    #[test]
    fn crlf_line_endings_are_accepted() {
        let mut system = system();
        let output = run(&mut system, "1\r\nM001\r\nAlice\r\n2099-01-01\r\n0\r\n");
        assert!(output.contains("Successful reservation!"));
        assert_eq!(system.reservations().next().unwrap().passenger, "Alice");
    }

    #[test]
    fn input_ending_mid_reservation_stops() {
        let mut system = system();
        let output = run(&mut system, "1\nM001\n");
        assert!(output.ends_with("Passenger name: "));
        assert!(system.is_empty());
    }

    #[test]
    fn color_is_off_by_default() {
        let output = run(&mut system(), "7\n0\n");
        assert!(!output.contains('\u{1b}'));
    }
}
