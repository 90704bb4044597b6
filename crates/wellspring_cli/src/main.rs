mod commands;
mod output;

use clap::{Parser, Subcommand};
use miette::Result;
use std::path::PathBuf;
use tracing::info;
use wellspring_core::{
    Clock, FixedClock, Gender, SystemClock,
    config::{self, WellspringConfig},
    date_math::parse_date,
};

use crate::commands::Context;

#[derive(Parser)]
#[command(name = "wellspring")]
#[command(about = "Wellness and study tracker: water, cycle, exams and quotes")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    /// Data file path (overrides config)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(long, global = true)]
    today: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Daily overview: water, cycle, exams and quote
    Status {
        /// Print the overview as JSON
        #[arg(long)]
        json: bool,
    },
    /// Water intake
    Water {
        #[command(subcommand)]
        cmd: WaterCommands,
    },
    /// Cycle tracking
    Cycle {
        #[command(subcommand)]
        cmd: CycleCommands,
    },
    /// Exam countdowns
    Exam {
        #[command(subcommand)]
        cmd: ExamCommands,
    },
    /// Profile management
    Profile {
        #[command(subcommand)]
        cmd: ProfileCommands,
    },
    /// Show the quote of the day
    Quote {
        /// Pick a random quote instead
        #[arg(long)]
        random: bool,
    },
    /// Age in whole years for a birth date
    Age { dob: String },
    /// Calendar days from today until a date
    DaysUntil { date: String },
    /// Configuration management
    Config {
        #[command(subcommand)]
        cmd: ConfigCommands,
    },
    /// Delete all recorded data
    Reset {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum WaterCommands {
    /// Show intake for a day
    Show {
        /// Day to show (defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Log glasses of water
    Add {
        #[arg(default_value = "1")]
        count: u32,
    },
    /// Undo logged glasses
    Remove {
        #[arg(default_value = "1")]
        count: u32,
    },
    /// Show past days
    History {
        #[arg(long, default_value = "7")]
        limit: usize,
    },
}

#[derive(Subcommand)]
enum CycleCommands {
    /// Record the start of the most recent period
    Set {
        /// Start date (YYYY-MM-DD)
        start: String,
        /// Cycle length in days (21-35)
        #[arg(long)]
        length: Option<i64>,
    },
    /// Show the current phase
    Show,
}

#[derive(Subcommand)]
enum ExamCommands {
    /// Add an exam
    Add {
        subject: String,
        /// Exam date (YYYY-MM-DD)
        date: String,
    },
    /// Remove an exam by id
    Remove { id: String },
    /// List exams
    List {
        /// Include exams that have already happened
        #[arg(long)]
        all: bool,
    },
}

#[derive(Subcommand)]
enum ProfileCommands {
    /// Create or update the profile
    Set {
        #[arg(long)]
        name: Option<String>,
        /// male, female or other
        #[arg(long)]
        gender: Option<Gender>,
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        dob: Option<String>,
        /// Height in centimetres
        #[arg(long)]
        height: Option<f64>,
        /// Weight in kilograms
        #[arg(long)]
        weight: Option<f64>,
    },
    /// Show the profile
    Show,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Save current configuration to file
    Save {
        /// Path to save configuration
        #[arg(default_value = "wellspring.toml")]
        path: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Filter directives when RUST_LOG is not set.
///
/// A bare level applies to the wellspring crates only; anything containing a
/// directive separator is used verbatim.
fn log_directives(debug: bool, level: &str) -> String {
    if debug {
        return "wellspring_core=debug,wellspring_cli=debug,warn".to_string();
    }
    let level = level.trim();
    if level.contains('=') || level.contains(',') {
        level.to_string()
    } else {
        format!("wellspring_core={level},wellspring_cli={level},warn")
    }
}

fn load_config(cli: &Cli) -> Result<(WellspringConfig, String)> {
    let (mut config, source) = if let Some(config_path) = &cli.config {
        (
            config::load_config(config_path)?,
            config_path.display().to_string(),
        )
    } else {
        // Same search order as load_config_from_standard_locations, but keep
        // the path that matched for `config show`
        match config::config_paths().into_iter().find(|path| path.exists()) {
            Some(path) => (config::load_config(&path)?, path.display().to_string()),
            None => (
                config::load_config_from_standard_locations()?,
                "built-in defaults".to_string(),
            ),
        }
    };

    // Apply CLI overrides
    if let Some(data_path) = &cli.data {
        config.data.path = data_path.clone();
    }

    Ok((config, source))
}

fn main() -> Result<()> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .rgb_colors(miette::RgbColors::Preferred)
                .with_cause_chain()
                .with_syntax_highlighting(miette::highlighters::SyntectHighlighter::default())
                .color(true)
                .context_lines(5)
                .tab_width(2)
                .break_words(true)
                .build(),
        )
    }))?;
    miette::set_panic_hook();
    let cli = Cli::parse();

    // Config comes first so its logging level can seed the filter
    let (config, source) = load_config(&cli)?;

    // Initialize tracing
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_directives(cli.debug, &config.logging.level)));

    fmt()
        .with_env_filter(filter)
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_timer(tracing_subscriber::fmt::time::LocalTime::rfc_3339())
        .compact()
        .init();

    info!("Loaded config from {}", source);
    tracing::debug!("Using data file: {}", config.data.path.display());

    let clock: Box<dyn Clock> = match &cli.today {
        Some(input) => {
            let day = parse_date(input)?;
            info!("Pretending today is {}", day);
            Box::new(FixedClock(day))
        }
        None => Box::new(SystemClock),
    };

    let ctx = Context {
        store: config.store(),
        config,
        config_source: source,
        clock,
    };

    match cli.command {
        Commands::Status { json } => commands::status::show(&ctx, json)?,
        Commands::Water { cmd } => match cmd {
            WaterCommands::Show { date } => commands::water::show(&ctx, date.as_deref())?,
            WaterCommands::Add { count } => commands::water::add(&ctx, count)?,
            WaterCommands::Remove { count } => commands::water::remove(&ctx, count)?,
            WaterCommands::History { limit } => commands::water::history(&ctx, limit)?,
        },
        Commands::Cycle { cmd } => match cmd {
            CycleCommands::Set { start, length } => commands::cycle::set(&ctx, &start, length)?,
            CycleCommands::Show => commands::cycle::show(&ctx)?,
        },
        Commands::Exam { cmd } => match cmd {
            ExamCommands::Add { subject, date } => commands::exam::add(&ctx, &subject, &date)?,
            ExamCommands::Remove { id } => commands::exam::remove(&ctx, &id)?,
            ExamCommands::List { all } => commands::exam::list(&ctx, all)?,
        },
        Commands::Profile { cmd } => match cmd {
            ProfileCommands::Set {
                name,
                gender,
                dob,
                height,
                weight,
            } => commands::profile::set(
                &ctx,
                commands::profile::ProfileUpdate {
                    name,
                    gender,
                    dob,
                    height_cm: height,
                    weight_kg: weight,
                },
            )?,
            ProfileCommands::Show => commands::profile::show(&ctx)?,
        },
        Commands::Quote { random } => commands::quote::show(&ctx, random)?,
        Commands::Age { dob } => commands::dates::age(&ctx, &dob)?,
        Commands::DaysUntil { date } => commands::dates::days_until(&ctx, &date)?,
        Commands::Config { cmd } => match cmd {
            ConfigCommands::Show => commands::config::show(&ctx)?,
            ConfigCommands::Save { path, force } => {
                commands::config::save(&ctx, &path, force)?;
            }
        },
        Commands::Reset { yes } => {
            commands::reset::run(&ctx, yes)?;
        }
    }

    Ok(())
}
