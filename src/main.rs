use bq2moodle::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bq2moodle")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Convert BQ-tagged question banks into Moodle quiz XML", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a document (.docx or BQ plain text) to Moodle quiz XML
    Convert {
        /// Input document
        input: PathBuf,

        /// Output XML path (default: input path with .xml extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Export only these 1-based question numbers (e.g. "1,3,5")
        #[arg(short, long)]
        questions: Option<String>,
    },

    /// Parse a document and print the questions it contains
    Inspect {
        /// Input document
        input: PathBuf,

        /// Print the parsed bank as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            output,
            questions,
        } => {
            bq2moodle::cli::convert::run(&input, output.as_deref(), questions.as_deref())?;
        }

        Commands::Inspect { input, json } => {
            bq2moodle::cli::inspect::run(&input, json)?;
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "bq2moodle", &mut io::stdout());
        }
    }

    Ok(())
}
