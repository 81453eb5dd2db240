//! wfarm CLI - charge-aware pixel farming
//!
//! Usage:
//!   wfarm init      Write a default wfarm.toml to the current directory
//!   wfarm status    One-shot account status and stats summary
//!   wfarm run       Run the paint loop until ctrl-c

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use wfarm_client::{detect_language, get_session_cookie, refresh_charges, BackendClient, Http};
use wfarm_core::{ChargeBudget, FarmConfig, Language, SessionState};
use wfarm_engine::{render_stats, PaintLoop, StatusKind, StatusSink};

#[derive(Parser)]
#[command(name = "wfarm")]
#[command(author, version, about = "Charge-aware pixel farming for a remote drawing surface")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default wfarm.toml
    Init {
        /// Directory to write the config into (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Fetch account status once and print the stats summary
    Status {
        /// Display language (en, pt); skips geolocation when set
        #[arg(short, long)]
        language: Option<Language>,
    },

    /// Run the paint loop until interrupted
    Run {
        /// Override the tile origin x
        #[arg(long)]
        start_x: Option<u32>,

        /// Override the tile origin y
        #[arg(long)]
        start_y: Option<u32>,

        /// Override the delay between paint attempts, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Display language (en, pt); skips geolocation when set
        #[arg(short, long)]
        language: Option<Language>,
    },
}

/// Console frontend for the loop's status sink
struct ConsoleSink;

impl StatusSink for ConsoleSink {
    fn status(&self, message: &str, kind: StatusKind) {
        match kind {
            StatusKind::Error => eprintln!("{}", message),
            _ => println!("{}", message),
        }
    }

    fn pulse(&self) {
        // Console stand-in for the original's panel pulse animation
        println!("✨");
    }

    fn stats(&self, summary: &str) {
        println!("----------------------------------------");
        println!("{}", summary);
        println!("----------------------------------------");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Init { path } => cmd_init(path),
        Commands::Status { language } => cmd_status(language).await,
        Commands::Run {
            start_x,
            start_y,
            delay_ms,
            language,
        } => cmd_run(start_x, start_y, delay_ms, language).await,
    }
}

fn cmd_init(path: PathBuf) -> Result<()> {
    FarmConfig::write_default(&path)?;
    println!("Wrote default config to {:?}", path.join("wfarm.toml"));
    Ok(())
}

fn load_config() -> Result<FarmConfig> {
    let cwd = std::env::current_dir()?;
    Ok(FarmConfig::load_or_default(&cwd)?)
}

fn initial_state(config: &FarmConfig, language: Language) -> SessionState {
    SessionState {
        charges: ChargeBudget {
            count: 0,
            max: config.max_charges,
            cooldown_ms: 30_000,
        },
        language,
        ..Default::default()
    }
}

async fn pick_language(http: &Http, override_language: Option<Language>) -> Language {
    match override_language {
        Some(language) => language,
        None => detect_language(http).await,
    }
}

async fn cmd_status(language: Option<Language>) -> Result<()> {
    let config = load_config()?;
    let http = Http::new(get_session_cookie());
    let language = pick_language(&http, language).await;
    let client = BackendClient::new(http, &config);

    let mut state = initial_state(&config, language);
    refresh_charges(&client, &mut state).await;

    println!("{}", render_stats(&state));
    Ok(())
}

async fn cmd_run(
    start_x: Option<u32>,
    start_y: Option<u32>,
    delay_ms: Option<u64>,
    language: Option<Language>,
) -> Result<()> {
    let mut config = load_config()?;
    if let Some(x) = start_x {
        config.start_x = x;
    }
    if let Some(y) = start_y {
        config.start_y = y;
    }
    if let Some(delay) = delay_ms {
        config.delay_ms = delay;
    }

    let http = Http::new(get_session_cookie());
    let language = pick_language(&http, language).await;
    info!("Display language: {}", language);

    let client = BackendClient::new(http, &config);
    let mut state = initial_state(&config, language);

    // Startup sequence: initial charge fetch, then a first stats render
    refresh_charges(&client, &mut state).await;
    println!("{}", render_stats(&state));

    let run_flag = Arc::new(AtomicBool::new(true));
    let signal_flag = run_flag.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            eprintln!("\nStopping at the next iteration boundary...");
            signal_flag.store(false, Ordering::SeqCst);
        }
    });

    let mut paint_loop = PaintLoop::new(client, config, state, run_flag, ConsoleSink);
    let result = paint_loop.run().await;

    println!(
        "Stopped after {} iterations, {} pixels painted.",
        result.iterations, result.painted
    );
    Ok(())
}
