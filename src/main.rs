use std::path::PathBuf;

use clap::Parser;
use quiz_import::{Config, ConvertError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Question file to convert [default: questions.txt next to the executable]
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Where to write the export [default: quizzes.json next to the executable]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Parse and print the summary without writing anything
    #[arg(long)]
    dry_run: bool,

    /// Validate an existing export file instead of converting
    #[arg(long, value_name = "FILE", conflicts_with_all = ["input", "output", "dry_run"])]
    check: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = match args.check {
        Some(path) => quiz_import::check(path),
        None => default_dir().and_then(|dir| {
            let mut config = Config::in_dir(dir);
            if let Some(input) = args.input {
                config.input = input;
            }
            if let Some(output) = args.output {
                config.output = output;
            }
            config.dry_run = args.dry_run;
            quiz_import::convert(&config)
        }),
    };

    match result {
        Ok(summary) => print!("{}", summary),
        Err(e) => {
            eprintln!("Error: {}", e);
            if let ConvertError::InputNotFound(_) = e {
                eprintln!("   Create the file with your questions and run again.");
            }
            std::process::exit(1);
        }
    }
}

/// Directory holding the executable, where the default files live.
fn default_dir() -> Result<PathBuf, ConvertError> {
    let exe = std::env::current_exe().map_err(|source| ConvertError::Read {
        path: PathBuf::from("<current executable>"),
        source,
    })?;
    Ok(exe
        .parent()
        .map(|dir| dir.to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".")))
}
