//! venver CLI entry point

use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::path::PathBuf;
use std::process::ExitCode;

use repokit::cli::commands::{run_venver, VenverOptions};
use repokit::cli::Output;
use repokit::core::python::SystemFinder;
use repokit::telemetry::{init_telemetry, TelemetryConfig};
use repokit::{VenverConfig, VenverError};

#[derive(Parser)]
#[command(name = "venver")]
#[command(
    author,
    version,
    about = "A simple venv utility to rapidly reset repo venvs",
    long_about = None
)]
struct Cli {
    /// Python version: 3.6, py36, 36, 6, 8, python311, py3.8, ...
    #[arg(default_value = "3.6", env = "VENVER_PYTHON")]
    python_version: String,
    /// Where to make the venv [default: v<minor> in the repo root]
    venv_destination: Option<PathBuf>,
    /// Install with `pip install --editable` (site-packages points at the source tree)
    #[arg(long = "edit", short = 'e', short_alias = 'E')]
    edit: bool,
    /// Extra to install besides the configured ones (repeatable)
    #[arg(long = "extra", value_name = "NAME", env = "VENVER_EXTRAS", value_delimiter = ',')]
    extras: Vec<String>,
    /// Show debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
    /// Generate shell completions
    #[arg(long, value_enum, value_name = "SHELL")]
    completions: Option<Shell>,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let line = "-".repeat(50);
            eprintln!("{line}\n{}{line}", e.render());
            let _ = Cli::command().print_help();
            return ExitCode::FAILURE;
        }
        Err(e) => e.exit(),
    };

    if let Err(e) = init_telemetry(&TelemetryConfig::for_cli(cli.verbose)) {
        Output::warning(&format!("logging disabled: {}", e));
    }

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "venver", &mut std::io::stdout());
        return ExitCode::SUCCESS;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            Output::error(&format!("Failed. {} encountered: {}", e.kind(), e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), VenverError> {
    let cwd = std::env::current_dir()
        .and_then(|dir| dir.canonicalize())
        .map_err(|source| VenverError::Io {
            path: PathBuf::from("."),
            source,
        })?;

    let options = VenverOptions {
        python_version: cli.python_version,
        venv_destination: cli.venv_destination,
        editable: cli.edit,
        extras: cli.extras,
    };
    run_venver(&cwd, &options, &VenverConfig::default(), &SystemFinder)
}
