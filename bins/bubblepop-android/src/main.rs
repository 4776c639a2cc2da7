//! Bubblepop Android CLI
//!
//! Release configuration tooling for the Bubblepop Android build.

use anyhow::Result;
use bubblepop_android::{keystore, release};
use bubblepop_cli::output::{format_size, Status};
use bubblepop_core::config::Config;
use bubblepop_core::error::exit_codes;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "bubblepop-android")]
#[command(about = "Release configuration tooling for the Bubblepop Android build")]
#[command(version)]
struct Cli {
    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Android project root
    #[arg(long, global = true, default_value = ".")]
    project_root: PathBuf,

    /// Increase output verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the release build configuration
    Resolve {
        /// Output as JSON (includes credential values, for build tooling)
        #[arg(long)]
        json: bool,
    },

    /// Check the release signing setup
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        owo_colors::set_override(false);
    }

    init_tracing(cli.verbose, cli.quiet)?;

    let config = Config::load(cli.config.as_deref().map(|p| p.to_str().unwrap()))?;

    let exit_code = match cli.command {
        Commands::Resolve { json } => run_resolve(&cli.project_root, &config, json),
        Commands::Check => run_check(&cli.project_root, &config),
    };

    std::process::exit(exit_code);
}

fn init_tracing(verbose: u8, quiet: bool) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact());

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set tracing subscriber: {}", e))
}

fn exit_code_for(error: &bubblepop_core::Error) -> i32 {
    match error.code.category() {
        "Signing" => exit_codes::SIGNING_ERROR,
        "Configuration" => exit_codes::CONFIG_ERROR,
        _ => exit_codes::FAILURE,
    }
}

fn run_resolve(project_root: &Path, config: &Config, json: bool) -> i32 {
    let release = match release::resolve(project_root, &config.schema) {
        Ok(release) => release,
        Err(e) => {
            Status::error(&format!("{}", e));
            return exit_code_for(&e);
        }
    };

    if json {
        match serde_json::to_string_pretty(&release) {
            Ok(out) => {
                println!("{}", out);
                return exit_codes::SUCCESS;
            }
            Err(e) => {
                Status::error(&format!("Serialization error: {}", e));
                return exit_codes::FAILURE;
            }
        }
    }

    Status::header("Release configuration");
    Status::detail("application id", &release.application_id);
    Status::detail(
        "version",
        &format!("{} ({})", release.version.name, release.version.code),
    );
    Status::detail("compile sdk", &release.sdk.compile_sdk.to_string());
    Status::detail("min sdk", &release.sdk.min_sdk.to_string());
    Status::detail("target sdk", &release.sdk.target_sdk.to_string());
    if let Some(ndk) = &release.sdk.ndk_version {
        Status::detail("ndk", ndk);
    }
    Status::detail("jvm target", &release.sdk.jvm_target.to_string());
    Status::detail("key alias", &release.signing.key_alias);
    Status::detail("keystore", &release.signing.store_file.display().to_string());
    println!();

    if release.signing.fully_configured() {
        Status::success(&format!(
            "Signing credentials loaded from {}",
            config.schema.signing.properties_file
        ));
    } else {
        Status::warning(&format!(
            "Using development defaults for: {}",
            release.signing.defaulted_keys().join(", ")
        ));
    }

    exit_codes::SUCCESS
}

fn run_check(project_root: &Path, config: &Config) -> i32 {
    let schema = &config.schema;
    let mut config_problem = false;
    let mut signing_problem = false;

    Status::header("Release signing check");

    match &config.path {
        Some(path) => Status::info(&format!("Tool config: {}", path)),
        None => Status::info("Tool config: built-in defaults"),
    }

    let signing = match keystore::resolve(project_root, &schema.signing) {
        Ok(params) => params,
        Err(e) => {
            Status::error(&format!("{}", e));
            return exit_code_for(&e);
        }
    };

    let props_path = project_root.join(&schema.signing.properties_file);
    if props_path.exists() {
        Status::success(&format!("{}: found", schema.signing.properties_file));
    } else {
        Status::warning(&format!(
            "{}: not found, development defaults apply",
            schema.signing.properties_file
        ));
    }

    if signing.fully_configured() {
        Status::success("All four signing values overridden");
    } else {
        Status::warning(&format!(
            "Defaulted values: {}",
            signing.defaulted_keys().join(", ")
        ));
    }

    match std::fs::metadata(&signing.store_file) {
        Ok(meta) => Status::success(&format!(
            "Keystore {}: {}",
            signing.store_file.display(),
            format_size(meta.len())
        )),
        Err(_) => {
            // A missing keystore only fails a fully-configured release.
            if signing.fully_configured() {
                Status::error(&format!(
                    "{}",
                    bubblepop_core::Error::keystore_not_found(&signing.store_file)
                ));
                signing_problem = true;
            } else {
                Status::warning(&format!(
                    "Keystore {}: missing",
                    signing.store_file.display()
                ));
            }
        }
    }

    match release::SdkVersions::from_config(&schema.android) {
        Ok(sdk) => Status::success(&format!(
            "SDK targets: compile {}, target {}, min {}",
            sdk.compile_sdk, sdk.target_sdk, sdk.min_sdk
        )),
        Err(e) => {
            Status::error(&format!("{}", e));
            config_problem = true;
        }
    }

    if config_problem {
        exit_codes::CONFIG_ERROR
    } else if signing_problem {
        exit_codes::SIGNING_ERROR
    } else {
        exit_codes::SUCCESS
    }
}
