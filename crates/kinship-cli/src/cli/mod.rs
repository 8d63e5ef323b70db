//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
///
/// Parsing `"-"` yields [`PathOrStdin::Stdin`]; anything else yields
/// [`PathOrStdin::Path`].
#[derive(Clone, Debug)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for CLI commands.
#[derive(Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Plain text lines (default).
    Human,
    /// A single pretty-printed JSON document.
    Json,
}

/// All top-level subcommands exposed by the `kinship` binary.
#[derive(Subcommand)]
pub enum Command {
    /// Name the relationship between two people ("A is B's ...").
    Relate {
        /// Path to a family JSON file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// Person A's id.
        #[arg(value_name = "A")]
        a: String,
        /// Person B's id (omit with `--all`).
        #[arg(value_name = "B", required_unless_present = "all")]
        b: Option<String>,
        /// Relate A to every other person in the file.
        #[arg(long, conflicts_with = "b")]
        all: bool,
    },

    /// Show the shortest chain of parent, child and spouse links between two
    /// people.
    Path {
        /// Path to a family JSON file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// Starting person id.
        #[arg(value_name = "FROM")]
        from: String,
        /// Target person id.
        #[arg(value_name = "TO")]
        to: String,
    },

    /// List a person's ancestors with their generational distance.
    Ancestors {
        /// Path to a family JSON file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// Person id.
        #[arg(value_name = "ID")]
        id: String,
    },

    /// List everyone related to a person, by blood or by marriage.
    Relatives {
        /// Path to a family JSON file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// Person id.
        #[arg(value_name = "ID")]
        id: String,
        /// Also list people with no relationship at all.
        #[arg(long)]
        include_unrelated: bool,
    },

    /// Print summary statistics and data-quality findings for a family file.
    Inspect {
        /// Path to a family JSON file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },

    /// Suggest parent rows missing for a recorded parent's spouse.
    Complete {
        /// Path to a family JSON file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },
}

/// Root CLI struct for the `kinship` binary.
#[derive(Parser)]
#[command(
    name = "kinship",
    version,
    about = "Family-tree relationship explorer",
    long_about = "Builds a kinship graph from a family JSON file and names the\n\
                  relationship between any two people (grandparent, aunt/uncle,\n\
                  2nd cousin 1x removed, ...)."
)]
pub struct Cli {
    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Only log errors.
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log debug detail, including every skipped relationship row.
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Maximum input size in bytes.
    #[arg(
        long,
        global = true,
        env = "KINSHIP_MAX_FILE_SIZE",
        default_value = "67108864"
    )]
    pub max_file_size: u64,
}
