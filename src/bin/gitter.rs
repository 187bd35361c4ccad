//! gitter CLI entry point

use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::path::PathBuf;
use std::process::ExitCode;

use repokit::cli::commands::{run_gitter, GitterOptions};
use repokit::cli::Output;
use repokit::telemetry::{init_telemetry, TelemetryConfig};

#[derive(Parser)]
#[command(name = "gitter")]
#[command(
    author,
    version,
    about = "Print shell commands that re-clone every git repository under a directory",
    long_about = None
)]
struct Cli {
    /// Directory to scan for repositories
    target: Option<PathBuf>,
    /// Print repositories as JSON instead of shell commands
    #[arg(long)]
    json: bool,
    /// Warn about repositories without an origin remote instead of failing
    #[arg(long)]
    skip_invalid: bool,
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
            let _ = e.print();
            return ExitCode::FAILURE;
        }
        Err(e) => e.exit(),
    };

    if let Err(e) = init_telemetry(&TelemetryConfig::for_cli(cli.verbose)) {
        Output::warning(&format!("logging disabled: {}", e));
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            Output::error(&format!("{}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "gitter", &mut std::io::stdout());
        return Ok(());
    }

    let Some(target) = cli.target else {
        anyhow::bail!("need a folder target");
    };
    let target = match target.canonicalize() {
        Ok(path) if path.is_dir() => path,
        _ => anyhow::bail!("path needs to exist: {}", target.display()),
    };
    let cwd = std::env::current_dir()?.canonicalize()?;

    let options = GitterOptions {
        json: cli.json,
        skip_invalid: cli.skip_invalid,
    };
    let stdout = std::io::stdout();
    run_gitter(&mut stdout.lock(), &target, &cwd, options)
}
