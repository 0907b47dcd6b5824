//! # bdcave Command Line
//!
//! Renders cave object lists to text pictures and checks object files for
//! problems.

use bdcave::config::{DEFAULT_CAVE_HEIGHT, DEFAULT_CAVE_WIDTH, LEVEL_COUNT};
use bdcave::{read_objects, Cave, CaveError, CaveResult, Element, ObjectRegistry};
use clap::{Parser, Subcommand};
use log::{info, warn};
use std::path::{Path, PathBuf};

/// Command line arguments for bdcave.
#[derive(Parser, Debug)]
#[command(name = "bdcave")]
#[command(about = "Render and check Boulder Dash cave object lists")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Materialize one level of a cave and print it
    Render {
        /// A cave as JSON, or a BDCFF object list
        file: PathBuf,

        /// Difficulty level, 1 to 5
        #[arg(short, long, default_value_t = 1)]
        level: usize,

        /// Render seed; a random one is used when omitted
        #[arg(short, long)]
        seed: Option<u32>,

        /// Cave width for object lists
        #[arg(long)]
        width: Option<u32>,

        /// Cave height for object lists
        #[arg(long)]
        height: Option<u32>,

        /// Element every cell starts with
        #[arg(long)]
        initial_fill: Option<String>,

        /// Print the rendered grid as JSON instead of a picture
        #[arg(long)]
        json: bool,
    },

    /// Parse a file and list its objects
    Check {
        /// A cave as JSON, or a BDCFF object list
        file: PathBuf,
    },
}

fn main() -> CaveResult<()> {
    let args = Args::parse();

    initialize_logging(&args.log_level);

    info!("bdcave v{}", bdcave::VERSION);

    let registry = ObjectRegistry::new();
    match args.command {
        Command::Render {
            file,
            level,
            seed,
            width,
            height,
            initial_fill,
            json,
        } => {
            let mut cave = load_cave(&file, &registry)?;
            if let Some(width) = width {
                cave.width = width;
            }
            if let Some(height) = height {
                cave.height = height;
            }
            if let Some(name) = initial_fill {
                cave.initial_fill = name.parse::<Element>()?;
            }
            cave.seed = match seed {
                Some(seed) => seed,
                None if is_json(&file) => cave.seed,
                None => {
                    let seed = rand::random::<u32>();
                    info!("using random seed {seed}");
                    seed
                }
            };
            cave.validate()?;

            if !(1..=LEVEL_COUNT).contains(&level) {
                return Err(CaveError::InvalidCave(format!(
                    "level must be between 1 and {LEVEL_COUNT}, got {level}"
                )));
            }

            let grid = cave.render(level - 1);
            if json {
                println!("{}", serde_json::to_string(&grid)?);
            } else {
                print!("{}", cave.picture(&grid));
            }
        }
        Command::Check { file } => {
            let cave = load_cave(&file, &registry)?;
            check_cave(&cave);
        }
    }

    Ok(())
}

/// Initializes env_logger; `RUST_LOG` overrides the given level.
fn initialize_logging(log_level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("json"))
}

/// Loads a JSON cave, or wraps an object list in a default sized cave.
fn load_cave(path: &Path, registry: &ObjectRegistry) -> CaveResult<Cave> {
    if is_json(path) {
        return Cave::load(path);
    }

    let text = std::fs::read_to_string(path)?;
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Cave".to_string());
    let mut cave = Cave::new(name, DEFAULT_CAVE_WIDTH, DEFAULT_CAVE_HEIGHT);
    cave.objects = read_objects(&text, registry);
    Ok(cave)
}

fn check_cave(cave: &Cave) {
    println!(
        "{}: {}x{}, {} objects",
        cave.name,
        cave.width,
        cave.height,
        cave.objects.len()
    );
    for (index, object) in cave.objects.iter().enumerate() {
        let levels: Vec<String> = (0..LEVEL_COUNT)
            .filter(|&level| object.is_seen_on(level))
            .map(|level| (level + 1).to_string())
            .collect();
        println!(
            "{:3} {:<12} {:<20} [{}] {}",
            index,
            object.object_type().name(),
            object.coordinates_text(),
            levels.join(","),
            object.description()
        );
        if object.is_invisible() {
            warn!("object {index} is not visible on any level");
        }
    }
}
