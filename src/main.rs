use std::{fs::File, path::PathBuf, time::Instant};

use balance_dropdown::{
    Balance, NumberLocale,
    app::{App, ConfigOverrides, StartupOptions},
    constants::{DEFAULT_CURRENCY, FRAME_RATE, IDLE_POLL},
    format_balance,
    handler::handle_event,
    tui::{Tui, TuiSession},
    ui,
};
use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use simplelog::{Config, LevelFilter, WriteLogger};

/// Balance summary with a click-to-open menu, in the terminal
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (defaults to the user config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Balance override, number or decimal string
    #[arg(long, allow_hyphen_values = true)]
    balance: Option<String>,

    /// Currency code override
    #[arg(long, global = true)]
    currency: Option<String>,

    /// Account name override
    #[arg(long, global = true)]
    account: Option<String>,

    /// Number locale tag such as `de-DE` (defaults to LC_ALL, LC_NUMERIC, LANG)
    #[arg(long, global = true)]
    locale: Option<String>,

    /// Write debug logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a formatted balance
    Format {
        /// Number or decimal string
        #[arg(allow_hyphen_values = true)]
        balance: String,
    },
    /// Print the effective configuration as JSON
    Config {
        /// Also write it to the config file
        #[arg(short, long)]
        write: bool,
    },
}

impl Cli {
    fn locale(&self) -> NumberLocale {
        self.locale
            .as_deref()
            .map_or_else(NumberLocale::from_env, NumberLocale::from_tag)
    }

    fn startup_options(&self) -> StartupOptions {
        StartupOptions {
            config_path: self.config.clone(),
            overrides: ConfigOverrides {
                balance: self.balance.clone(),
                currency: self.currency.clone(),
                account: self.account.clone(),
            },
            locale: self.locale(),
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        WriteLogger::init(LevelFilter::Debug, Config::default(), File::create(path)?)?;
    }

    let options = cli.startup_options();
    if handle_cli_commands(&cli, &options)? {
        return Ok(());
    }

    let mut app = App::new(options);
    let mut session = TuiSession::start()?;
    run_app(session.terminal_mut(), &mut app)
}

/// Handle subcommands. Returns true if one ran and the TUI should not start.
fn handle_cli_commands(cli: &Cli, options: &StartupOptions) -> Result<bool> {
    match &cli.command {
        Some(Commands::Format { balance }) => {
            let currency = cli.currency.as_deref().unwrap_or(DEFAULT_CURRENCY);
            let text = format_balance(&Balance::from(balance.as_str()), currency, options.locale);
            println!("{text}");
            Ok(true)
        }
        Some(Commands::Config { write }) => {
            let config = options.load_config();
            println!("{}", serde_json::to_string_pretty(&config)?);
            if *write {
                options.save_config(&config)?;
            }
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Main application loop.
fn run_app(terminal: &mut Tui, app: &mut App) -> Result<()> {
    while !app.exit {
        terminal.draw(|frame| ui::render(app, frame))?;

        // Redraw at frame rate only while the panel is moving.
        let timeout = if app.is_animating(Instant::now()) {
            FRAME_RATE
        } else {
            IDLE_POLL
        };
        if crossterm::event::poll(timeout)? {
            if let Some(action) = handle_event(crossterm::event::read()?) {
                app.update(action);
            }
        }
    }
    Ok(())
}
