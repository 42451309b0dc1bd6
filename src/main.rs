//! EmpDept - command-line entry point.
//!
//! Lists and runs the named reports against the reference dataset or a JSON
//! dataset file.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use empdept::reports::{Report, ReportOutput};
use empdept::session::{Session, SessionConfig};

/// Query the EMP/DEPT sample schema
#[derive(Parser)]
#[command(name = "empdept")]
#[command(about = "In-memory queries over the EMP/DEPT sample schema", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON dataset file (defaults to the built-in reference dataset)
    #[arg(short, long, env = "EMPDEPT_DATASET")]
    dataset: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available reports
    List,

    /// Run a report
    Run {
        /// Report name (see `list`)
        report: String,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Run every report
    All,

    /// Print the dataset as JSON
    Dump,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = SessionConfig::new().verbose(cli.verbose);
    if let Some(path) = cli.dataset {
        config = config.dataset_path(path);
    }
    init_logging(&config);

    match execute(config, cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(config: &SessionConfig) {
    let default = if config.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn execute(config: SessionConfig, command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    if let Commands::List = command {
        for report in Report::ALL {
            println!("{:<30} {}", report.name(), report.description());
        }
        return Ok(());
    }

    let session = Session::open(config)?;
    match command {
        Commands::List => {}
        Commands::Run { report, json } => {
            let output = session.run_named(&report)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&output.to_json())?);
            } else {
                print_output(&output);
            }
        }
        Commands::All => {
            for report in Report::ALL {
                println!("== {}", report);
                print_output(&session.run(*report)?);
                println!();
            }
        }
        Commands::Dump => {
            println!("{}", session.export_json()?);
        }
    }
    Ok(())
}

fn print_output(output: &ReportOutput) {
    let rs = match output {
        ReportOutput::Scalar(value) => {
            println!("{}", cell(value));
            return;
        }
        ReportOutput::Rows(rs) => rs,
    };

    if !rs.is_empty() {
        println!("{}", rs.columns.join("\t"));
    }
    for row in rs.iter() {
        let line: Vec<String> =
            rs.columns.iter().map(|col| row.get(col).map(cell).unwrap_or_default()).collect();
        println!("{}", line.join("\t"));
    }
    println!("({} rows)", rs.len());
}

/// Table cell text: strings unquoted, nulls as `NULL`.
fn cell(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => "NULL".to_string(),
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
