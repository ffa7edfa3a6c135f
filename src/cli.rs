use std::{io, path::PathBuf};

mod menu;
mod terminal;

use clap::ArgAction;
use menu::Menu;
use reservations::Fixture;
use tracing::instrument;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Load the airline, its flights, and seed reservations from a TOML file
    #[arg(long, value_name = "PATH")]
    fixture: Option<PathBuf>,

    /// Start with the flight catalog only, without seed reservations
    #[arg(long)]
    no_seed: bool,

    /// Print the built-in fixture as TOML and exit
    #[arg(long, conflicts_with_all = ["fixture", "no_seed"])]
    dump_fixture: bool,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        if self.dump_fixture {
            print!("{}", Fixture::default().to_toml()?);
            return Ok(());
        }

        let mut system = self.fixture()?.build();

        let stdin = io::stdin();
        let stdout = io::stdout();
        Menu::new(stdin.lock(), stdout.lock())
            .with_color(terminal::supports_color())
            .run(&mut system)?;

        Ok(())
    }

    #[instrument(level = "debug", skip(self))]
    fn fixture(&self) -> anyhow::Result<Fixture> {
        let fixture = match &self.fixture {
            Some(path) => {
                tracing::info!("Loading fixture from {}", path.display());
                Fixture::load(path)
                    .map_err(|e| anyhow::anyhow!("{}: {e}", path.display()))?
            }
            None => Fixture::default(),
        };

        Ok(if self.no_seed {
            fixture.without_reservations()
        } else {
            fixture
        })
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        // stdout belongs to the menu
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}
