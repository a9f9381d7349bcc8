use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use semantic_version::{ArgumentError, FormatError, FormatMode, Level, SemanticVersion, VersionError};
use tracing_subscriber::EnvFilter;

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Format(#[from] FormatError),

    #[error("{0}")]
    Argument(#[from] ArgumentError),

    #[error("{0}")]
    Version(#[from] VersionError),
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum, Debug)]
enum LevelArg {
    Major,
    Minor,
    Patch,
}

impl LevelArg {
    fn to_level(self) -> Level {
        match self {
            LevelArg::Major => Level::Major,
            LevelArg::Minor => Level::Minor,
            LevelArg::Patch => Level::Patch,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace). `RUST_LOG` takes
    /// precedence when set.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parses a version and prints it back, optionally with only some of its fields
    Parse {
        /// The version string to parse
        version: String,

        /// The fields to print: 0 (core), 1 (core and pre-release), 2 (core and build metadata)
        /// or 3 (everything)
        #[arg(short, long, default_value_t = FormatMode::Full)]
        format: FormatMode,
    },

    /// Prints whether a version is valid, exiting with 0 if it is and 1 otherwise
    Valid {
        /// The version string to validate
        version: String,
    },

    /// Compares two versions by precedence and prints -1, 0 or 1
    Compare {
        /// The left-hand version
        left: String,

        /// The right-hand version
        right: String,
    },

    /// Prints versions sorted by precedence, one per line
    ///
    /// Versions of equal precedence are ordered by their build metadata.
    Sort {
        /// The versions to sort
        #[arg(required = true)]
        versions: Vec<String>,

        /// Sort from greatest to least
        #[arg(short, long)]
        reverse: bool,
    },

    /// Prints the next release of a version at a level
    Bump {
        /// The version string to increment
        version: String,

        /// The level to increment. Lesser levels are reset to zero.
        #[arg(short, long, value_enum)]
        level: LevelArg,
    },
}

type Output = (String, i32);

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    tracing::debug!(?cli, "parsed arguments");

    match do_work(cli) {
        Ok((output, exit_code)) => {
            println!("{output}");
            std::process::exit(exit_code);
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

fn do_work(cli: Cli) -> Result<Output, CliError> {
    match cli.command {
        Commands::Parse { version, format } => {
            let version = SemanticVersion::parse(&version)?;
            Ok((version.render(format).to_string(), 0))
        }
        Commands::Valid { version } => Ok(match SemanticVersion::try_parse(&version) {
            Some(_) => ("true".to_string(), 0),
            None => ("false".to_string(), 1),
        }),
        Commands::Compare { left, right } => {
            let left = SemanticVersion::parse(&left)?;
            let right = SemanticVersion::parse(&right)?;
            Ok((left.compare(&right).to_string(), 0))
        }
        Commands::Sort { versions, reverse } => {
            let mut versions = versions
                .iter()
                .map(|version| SemanticVersion::parse(version))
                .collect::<Result<Vec<_>, _>>()?;
            versions.sort_by(|a, b| a.cmp_including_build(b));
            if reverse {
                versions.reverse();
            }
            let lines: Vec<String> = versions.iter().map(ToString::to_string).collect();
            Ok((lines.join("\n"), 0))
        }
        Commands::Bump { version, level } => {
            let version = SemanticVersion::parse(&version)?;
            let next = version.next(level.to_level())?;
            tracing::info!(%version, %next, "bumped version");
            Ok((next.to_string(), 0))
        }
    }
}
