use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use snmpttctl::{AppError, ApplyOptions, Platform};

#[derive(Parser)]
#[command(name = "snmpttctl")]
#[command(version)]
#[command(
    about = "Render and apply snmptt trap-translator daemon configuration",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum PlanFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a parameter file without producing artifacts
    Validate {
        /// Path to the TOML parameter file
        #[arg(short, long)]
        params: PathBuf,
    },
    /// Render artifacts to stdout or a staging directory
    Render {
        /// Path to the TOML parameter file
        #[arg(short, long)]
        params: PathBuf,
        /// Write present artifacts beneath this directory instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Show the artifact set an apply run would manage
    Plan {
        /// Path to the TOML parameter file
        #[arg(short, long)]
        params: PathBuf,
        #[arg(long, value_enum, default_value = "text")]
        format: PlanFormat,
    },
    /// Materialize artifacts, packages, and service state on this host
    Apply {
        /// Path to the TOML parameter file
        #[arg(short, long)]
        params: PathBuf,
        /// Target operating system: centos, debian, or ubuntu
        #[arg(long)]
        platform: Platform,
        /// Re-root the absolute target paths beneath this directory
        #[arg(long)]
        root: Option<PathBuf>,
        /// Report planned changes without touching the host
        #[arg(long)]
        dry_run: bool,
        /// Do not ensure packages
        #[arg(long)]
        skip_packages: bool,
        /// Do not restart the daemon on configuration change
        #[arg(long)]
        skip_service: bool,
    },
}

fn run(cli: Cli) -> Result<(), AppError> {
    match cli.command {
        Commands::Validate { params } => {
            snmpttctl::validate(&params)?;
            println!("✅ Parameters valid");
        }
        Commands::Render { params, out } => {
            let set = snmpttctl::render(&params, out.as_deref())?;
            match out {
                Some(dir) => println!("✅ Wrote artifacts under {}", dir.display()),
                None => {
                    for artifact in set.artifacts() {
                        if artifact.present {
                            println!("==> {} <==", artifact.path.display());
                            print!("{}", artifact.content);
                        }
                    }
                }
            }
        }
        Commands::Plan { params, format } => {
            let plan = snmpttctl::plan(&params)?;
            match format {
                PlanFormat::Text => print!("{}", snmpttctl::format_plan_text(&plan)),
                PlanFormat::Json => println!(
                    "{}",
                    serde_json::to_string_pretty(&plan).map_err(std::io::Error::other)?
                ),
            }
        }
        Commands::Apply { params, platform, root, dry_run, skip_packages, skip_service } => {
            let options = ApplyOptions { platform, root, dry_run, skip_packages, skip_service };
            let report = snmpttctl::apply(&params, &options)?;

            for file in &report.files {
                println!("{:9} {}", file.action.to_string(), file.path.display());
            }
            if report.restarted {
                println!("restarted {}", options.platform.service_name());
            }
            if report.dry_run {
                println!("dry-run: no changes applied");
            }
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
