//! Binary entrypoint for the fortunecast CLI.
//!
//! Commands:
//! - `cast -n <name> -b <birth> --height <cm> --weight <kg>` - print a body reading card
//! - `goal -n <name> -b <birth> -g <goal>` - print a goal reading card
//! - `demo` - cast a random sample profile
//! - `interactive` - reading form plus a prompt loop; type `help` there for commands
//! - `theme [show|light|dark|toggle]` - read or change the saved theme
//! - `init` - create a starter `config.toml`
//!
//! See the library crate docs for module-level details: `fortunecast::`.
use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use std::path::Path;

// Use the published library crate modules instead of redefining them here.
use fortunecast::app::{App, CardCommand};
use fortunecast::card;
use fortunecast::config::Config;
use fortunecast::export;
use fortunecast::fortune::FortuneResult;
use fortunecast::theme::{self, Theme};

#[derive(Parser)]
#[command(name = "fortunecast")]
#[command(about = "Deterministic 2026 fortune cards from a name, birth date and body or goal")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Cast a body reading and print the card
    Cast {
        /// Display name
        #[arg(short, long)]
        name: String,
        /// Birth date, YYYY-MM-DD
        #[arg(short, long)]
        birth: String,
        /// Height in cm (50-250)
        #[arg(long)]
        height: String,
        /// Weight in kg (10-250)
        #[arg(long)]
        weight: String,
        /// Print the share JSON payload instead of the card
        #[arg(long)]
        json: bool,
        /// Also print the share blurb after the card
        #[arg(long)]
        share: bool,
        /// Save the card, optionally to FILE (default: under the data directory)
        #[arg(long, value_name = "FILE")]
        save: Option<Option<String>>,
        /// Append the seed footer to the card
        #[arg(long)]
        debug: bool,
    },
    /// Cast a goal reading and print the card
    Goal {
        /// Display name
        #[arg(short, long)]
        name: String,
        /// Birth date, YYYY-MM-DD
        #[arg(short, long)]
        birth: String,
        /// The goal for the year
        #[arg(short, long)]
        goal: String,
        /// Print the share JSON payload instead of the card
        #[arg(long)]
        json: bool,
        /// Also print the share blurb after the card
        #[arg(long)]
        share: bool,
        /// Save the card, optionally to FILE (default: under the data directory)
        #[arg(long, value_name = "FILE")]
        save: Option<Option<String>>,
        /// Append the seed footer to the card
        #[arg(long)]
        debug: bool,
    },
    /// Cast a random sample profile
    Demo,
    /// Reading form plus a command loop over the result
    Interactive,
    /// Read or change the saved dark/light theme
    Theme {
        #[arg(value_enum)]
        action: Option<ThemeAction>,
    },
    /// Create a starter configuration file
    Init,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ThemeAction {
    /// Print the active theme
    Show,
    /// Switch to the light palette
    Light,
    /// Switch to the dark palette
    Dark,
    /// Flip between dark and light
    Toggle,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config early to configure logging (except for Init which writes it)
    let (pre_config, config_err) = match cli.command {
        Commands::Init => (None, None),
        _ => match Config::load(&cli.config) {
            Ok(c) => (Some(c), None),
            Err(e) => (None, Some(e)),
        },
    };
    init_logging(&pre_config, cli.verbose);
    if let Some(e) = config_err {
        if Path::new(&cli.config).exists() {
            log::warn!("Failed to load config {}: {}", cli.config, e);
        } else {
            log::debug!("No config file at {}; using defaults", cli.config);
        }
    }

    match cli.command {
        Commands::Cast {
            name,
            birth,
            height,
            weight,
            json,
            share,
            save,
            debug,
        } => {
            let config = pre_config.unwrap_or_default();
            let data_dir = config.storage.data_dir.clone();
            let mut app = App::new(config);
            app.set_debug(debug);
            match app.cast_body(&name, &birth, &height, &weight) {
                Ok(result) => emit(&app, &result, &data_dir, json, share, save)?,
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Goal {
            name,
            birth,
            goal,
            json,
            share,
            save,
            debug,
        } => {
            let config = pre_config.unwrap_or_default();
            let data_dir = config.storage.data_dir.clone();
            let mut app = App::new(config);
            app.set_debug(debug);
            match app.cast_goal(&name, &birth, &goal) {
                Ok(result) => emit(&app, &result, &data_dir, json, share, save)?,
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Demo => {
            let config = pre_config.unwrap_or_default();
            let mut app = App::new(config);
            if let Some(out) = app.dispatch(CardCommand::Demo) {
                print!("{}", out);
            }
        }
        Commands::Interactive => {
            let config = pre_config.unwrap_or_default();
            info!("Starting fortunecast v{}", env!("CARGO_PKG_VERSION"));
            let mut app = App::new(config);
            app.run_interactive()?;
        }
        Commands::Theme { action } => {
            let config = pre_config.unwrap_or_default();
            let base = config.storage.data_dir.clone();
            match action.unwrap_or(ThemeAction::Show) {
                ThemeAction::Show => println!("{}", theme::resolve(&base, &config)),
                ThemeAction::Light => {
                    theme::set(&base, Theme::Light);
                    println!("Theme is now light.");
                }
                ThemeAction::Dark => {
                    theme::set(&base, Theme::Dark);
                    println!("Theme is now dark.");
                }
                ThemeAction::Toggle => {
                    println!("Theme is now {}.", theme::toggle(&base, &config));
                }
            }
        }
        Commands::Init => {
            info!("Initializing fortunecast configuration");
            Config::create_default(&cli.config)?;
            info!("Configuration file created at {}", cli.config);
            println!("Created {}", cli.config);
        }
    }

    Ok(())
}

/// Print the chosen output surfaces for a finished reading.
fn emit(
    app: &App,
    result: &FortuneResult,
    data_dir: &str,
    json: bool,
    share: bool,
    save: Option<Option<String>>,
) -> Result<()> {
    if json {
        println!("{}", export::share_json(result)?);
    } else {
        print!("{}", card::render(result, &app.render_options()));
        if share {
            println!("\n{}", export::share_text(result));
        }
    }
    if let Some(file) = save {
        let target = file.as_deref().map(Path::new);
        let path = export::save_card(result, target, data_dir)?;
        println!("Saved card to {}", path.display());
    }
    Ok(())
}

fn init_logging(config: &Option<Config>, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // Base level from CLI verbosity; the config level applies when no -v given
    let base_level = match verbosity {
        0 => config
            .as_ref()
            .and_then(|c| c.logging.level.parse().ok())
            .unwrap_or(log::LevelFilter::Info),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);
    if let Some(file) = config.as_ref().and_then(|c| c.logging.file.clone()) {
        if let Ok(f) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&file)
        {
            let mutex = std::sync::Arc::new(std::sync::Mutex::new(f));
            let write_mutex = mutex.clone();

            // If stdout is a terminal, mirror log lines to the console too
            let is_tty = atty::is(atty::Stream::Stdout);

            builder.format(move |fmt, record| {
                let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
                let line = format!("{} [{}] {}", ts, record.level(), record.args());

                // Always write to log file
                if let Ok(mut guard) = write_mutex.lock() {
                    let _ = writeln!(guard, "{}", line);
                }

                if is_tty {
                    writeln!(fmt, "{}", line)
                } else {
                    Ok(())
                }
            });
        } else {
            builder.format(|fmt, record| {
                writeln!(
                    fmt,
                    "{} [{}] {}",
                    chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
                    record.level(),
                    record.args()
                )
            });
        }
    } else {
        builder.format(|fmt, record| {
            writeln!(
                fmt,
                "{} [{}] {}",
                chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
                record.level(),
                record.args()
            )
        });
    }
    let _ = builder.try_init();
}
