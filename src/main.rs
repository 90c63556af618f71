//! `lumen` demo binary: opens a window running one of the camera demos.

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use lumen::{options::Options, scene::DemoKind, viewer::Viewer, LumenError};

/// Free-look camera demos.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// TOML options file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Demo to start on (`cubes` or `lighting`); overrides the config.
    #[arg(short, long)]
    demo: Option<DemoKind>,

    /// Print the options JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
}

#[allow(clippy::print_stdout)]
fn print_schema() -> Result<(), LumenError> {
    let schema = serde_json::to_string_pretty(&Options::json_schema())
        .map_err(|e| LumenError::OptionsParse(e.to_string()))?;
    println!("{schema}");
    Ok(())
}

#[allow(clippy::needless_pass_by_value)]
fn run(args: Args) -> Result<(), LumenError> {
    if args.print_schema {
        return print_schema();
    }

    let mut options = match &args.config {
        Some(path) => {
            log::info!("loading options from {}", path.display());
            Options::load(path)?
        }
        None => Options::default(),
    };
    if let Some(demo) = args.demo {
        options.demo.kind = demo;
    }

    Viewer::builder().with_options(options).build().run()
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
