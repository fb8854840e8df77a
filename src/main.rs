//! Idle Face CLI
//!
//! Animated face for 16x2 character displays.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Stdout;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use idle_face::{
    acquire, AnimatorStats, Backend, Behavior, Config, Display, EyeDirection, Face, IdleAnimator,
    MemoryDisplay, MouthState, Profile, RandomSampler, Sampler, TerminalDisplay, VERSION,
};

#[derive(Parser)]
#[command(name = "idle-face")]
#[command(version = VERSION)]
#[command(about = "Animated idle face for 16x2 character displays", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Animate the face until interrupted
    Run {
        /// Built-in idle profile (overrides configured triggers)
        #[arg(long, value_enum)]
        profile: Option<ProfileArg>,

        /// Display backend
        #[arg(long, value_enum)]
        backend: Option<BackendArg>,

        /// Milliseconds between ticks
        #[arg(long)]
        period_ms: Option<u64>,

        /// Stop after this many ticks
        #[arg(long)]
        ticks: Option<u64>,

        /// Seed for reproducible idle behavior
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Render a single expression and exit
    Preview {
        #[arg(long, value_enum, default_value = "forward")]
        eyes: EyesArg,

        /// Which eyelids are closed
        #[arg(long, value_enum, default_value = "none")]
        closed: ClosedArg,

        #[arg(long, value_enum, default_value = "neutral")]
        mouth: MouthArg,
    },

    /// List the built-in idle profiles
    Profiles,

    /// Show configuration
    Config {
        /// Replace the configured triggers with a built-in profile
        #[arg(long, value_enum)]
        profile: Option<ProfileArg>,

        /// Write the configuration to disk
        #[arg(long)]
        save: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ProfileArg {
    Calm,
    Lively,
}

impl From<ProfileArg> for Profile {
    fn from(arg: ProfileArg) -> Self {
        match arg {
            ProfileArg::Calm => Profile::Calm,
            ProfileArg::Lively => Profile::Lively,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum BackendArg {
    Terminal,
    Headless,
}

impl From<BackendArg> for Backend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Terminal => Backend::Terminal,
            BackendArg::Headless => Backend::Headless,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum EyesArg {
    Forward,
    Left,
    Right,
}

impl From<EyesArg> for EyeDirection {
    fn from(arg: EyesArg) -> Self {
        match arg {
            EyesArg::Forward => EyeDirection::Forward,
            EyesArg::Left => EyeDirection::Left,
            EyesArg::Right => EyeDirection::Right,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ClosedArg {
    #[value(name = "none")]
    Neither,
    /// Wink
    Right,
    Both,
}

#[derive(Clone, Copy, ValueEnum)]
enum MouthArg {
    Neutral,
    Smiling,
    Frowning,
    Agape,
    Small,
}

impl From<MouthArg> for MouthState {
    fn from(arg: MouthArg) -> Self {
        match arg {
            MouthArg::Neutral => MouthState::Neutral,
            MouthArg::Smiling => MouthState::Smiling,
            MouthArg::Frowning => MouthState::Frowning,
            MouthArg::Agape => MouthState::Agape,
            MouthArg::Small => MouthState::Small,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            profile,
            backend,
            period_ms,
            ticks,
            seed,
        } => cmd_run(profile, backend, period_ms, ticks, seed),
        Commands::Preview {
            eyes,
            closed,
            mouth,
        } => cmd_preview(eyes, closed, mouth),
        Commands::Profiles => {
            cmd_profiles();
            Ok(())
        }
        Commands::Config { profile, save } => cmd_config(profile, save),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn cmd_run(
    profile: Option<ProfileArg>,
    backend: Option<BackendArg>,
    period_ms: Option<u64>,
    ticks: Option<u64>,
    seed: Option<u64>,
) -> Result<()> {
    let mut config = load_config();
    if let Some(profile) = profile {
        config.apply_profile(profile.into());
    }
    if let Some(backend) = backend {
        config.backend = backend.into();
    }
    if let Some(ms) = period_ms {
        config.tick_period = Duration::from_millis(ms);
    }
    if seed.is_some() {
        config.seed = seed;
    }
    config.validate().context("Invalid configuration")?;

    init_logging(config.backend);

    let behavior = config.behavior()?;
    let sampler = match config.seed {
        Some(seed) => RandomSampler::with_seed(seed),
        None => RandomSampler::new(),
    };

    // Set up Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    ctrlc_handler(running.clone())?;

    let stats = match config.backend {
        Backend::Terminal => {
            let (_, display) = acquire(&config.addresses, TerminalDisplay::<Stdout>::open)
                .context("Could not open display (try --backend headless)")?;
            animate(display, sampler, behavior, config.tick_period, &running, ticks)?
        }
        Backend::Headless => {
            let (_, display) = acquire(&config.addresses, |_| Ok(MemoryDisplay::new()))
                .context("Could not open display")?;
            animate(display, sampler, behavior, config.tick_period, &running, ticks)?
        }
    };

    println!();
    println!("{}", stats.summary());
    Ok(())
}

fn animate<D: Display, S: Sampler>(
    display: D,
    sampler: S,
    behavior: Behavior,
    period: Duration,
    running: &AtomicBool,
    ticks: Option<u64>,
) -> Result<AnimatorStats> {
    let mut animator = IdleAnimator::new(display, sampler, behavior).with_period(period);
    animator.run(running, ticks).context("Display failed")?;
    Ok(animator.stats().clone())
}

fn cmd_preview(eyes: EyesArg, closed: ClosedArg, mouth: MouthArg) -> Result<()> {
    let mut face = Face::new();
    let direction: EyeDirection = eyes.into();
    match direction {
        EyeDirection::Forward => face.look_forward(),
        EyeDirection::Left => face.look_left(),
        EyeDirection::Right => face.look_right(),
    }
    match closed {
        ClosedArg::Neither => {}
        ClosedArg::Right => face.wink(),
        ClosedArg::Both => face.close_eyes(),
    }
    face.set_mouth(mouth.into());

    let mut display = MemoryDisplay::new();
    face.render(&mut display)?;

    let width = display.lines().first().map(|l| l.chars().count()).unwrap_or(0);
    println!("+{}+", "-".repeat(width));
    for line in display.lines() {
        println!("|{line}|");
    }
    println!("+{}+", "-".repeat(width));
    Ok(())
}

fn cmd_profiles() {
    for profile in Profile::ALL {
        println!("{}:", profile.as_str());
        for trigger in profile.behavior().triggers() {
            println!(
                "  {:<14} threshold {:.2}  ({:.0}% per tick)",
                trigger.action.as_str(),
                trigger.threshold,
                trigger.probability() * 100.0
            );
        }
        println!();
    }
}

fn cmd_config(profile: Option<ProfileArg>, save: bool) -> Result<()> {
    let mut config = load_config();
    if let Some(profile) = profile {
        config.apply_profile(profile.into());
    }

    println!("Configuration");
    println!("=============");
    println!();
    println!("Config file: {:?}", Config::config_path());
    println!();
    println!("{}", serde_json::to_string_pretty(&config)?);

    if save {
        config.save().context("Could not save configuration")?;
        println!();
        println!("Saved.");
    }
    Ok(())
}

fn load_config() -> Config {
    Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config, using defaults: {e}");
        Config::default()
    })
}

/// Log to stderr; quieter on the terminal backend so the panel stays readable.
fn init_logging(backend: Backend) {
    let default_level = match backend {
        Backend::Terminal => "warn",
        Backend::Headless => "info",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Set up Ctrl+C handler.
fn ctrlc_handler(running: Arc<AtomicBool>) -> Result<()> {
    ctrlc::set_handler(move || {
        running.store(false, Ordering::SeqCst);
    })
    .context("Error setting Ctrl+C handler")
}
