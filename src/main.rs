use anyhow::Result;
use clap::{Parser, Subcommand};
use lesson_registry::{LessonError, LessonLoader, LessonRegistry};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, Level};
use tracing_subscriber::{fmt, EnvFilter};

/// Inspect and validate quiz lesson configurations
#[derive(Parser, Debug)]
#[command(name = "lesson-registry")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn", global = true)]
    log_level: String,

    /// Lesson pack to load after the bundled lessons (repeatable)
    ///
    /// When given, the user pack locations are not searched.
    #[arg(short = 'p', long = "pack", global = true)]
    packs: Vec<PathBuf>,

    /// Skip the user lesson pack and use bundled lessons only
    #[arg(long, global = true)]
    no_user_config: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List lesson keys in presentation order
    List,

    /// Print one lesson as JSON
    Show {
        /// Lesson key
        key: String,
    },

    /// Check that lesson packs are valid alongside the bundled lessons
    Validate {
        /// Lesson pack files
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn setup_logging(log_level: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    // RUST_LOG wins over --log-level when set
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn load_registry(args: &Args) -> Result<LessonRegistry> {
    let loader = if !args.packs.is_empty() {
        LessonLoader::from_paths(args.packs.as_slice())?
    } else if args.no_user_config {
        LessonLoader::bundled_only()?
    } else {
        LessonLoader::new()?
    };

    for source in loader.sources() {
        info!("Using lesson pack: {}", source.display());
    }

    Ok(loader.into_registry())
}

fn run(args: Args) -> Result<ExitCode> {
    match &args.command {
        Command::List => {
            let registry = load_registry(&args)?;
            for lesson in &registry {
                println!("{:<24} {}", lesson.key, lesson.title);
            }
        }
        Command::Show { key } => {
            let registry = load_registry(&args)?;
            match registry.get(key) {
                Ok(lesson) => println!("{}", serde_json::to_string_pretty(lesson)?),
                Err(e @ LessonError::LessonNotFound(_)) => {
                    eprintln!("Lesson unavailable: {}", e);
                    return Ok(ExitCode::FAILURE);
                }
                Err(e) => return Err(e.into()),
            }
        }
        Command::Validate { files } => match LessonLoader::from_paths(files.as_slice()) {
            Ok(loader) => {
                println!(
                    "OK: {} lessons ({} from packs)",
                    loader.registry().len(),
                    loader.registry().len() - LessonRegistry::builtin()?.len()
                );
            }
            Err(e) => {
                eprintln!("Invalid lessons: {}", e);
                return Ok(ExitCode::FAILURE);
            }
        },
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    setup_logging(&args.log_level);
    info!("Starting lesson-registry v{}", env!("CARGO_PKG_VERSION"));

    run(args)
}
