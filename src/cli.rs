//! CLI argument parsing and command dispatch.
use clap::{Parser, Subcommand};
use log::*;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    config::Config, error::RouteMapperError, render::OutputFormat,
    result::Result,
};

pub mod detect;
pub mod scan;

/// Global CLI arguments.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, default_value_t = false, global = true)]
    /// Enable debug logging.
    pub debug: bool,

    #[arg(long, global = true)]
    /// Configuration file. Defaults to route-mapper.toml in the project root.
    pub config: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Analysis subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Identify the web framework(s) a Java project uses.
    Detect {
        /// Root directory of the Java project.
        project: PathBuf,

        #[arg(long, default_value_t = false)]
        /// Print the detection report as JSON.
        json: bool,
    },

    /// Extract HTTP routes from controller annotations.
    Scan {
        /// Root directory of the Java project.
        project: PathBuf,

        #[arg(short, long)]
        /// Write the output to a file instead of stdout.
        output: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        /// Output format.
        format: OutputFormat,
    },
}

/// Run the selected subcommand.
pub fn execute(args: &Args) -> Result<()> {
    match &args.command {
        Command::Detect { project, json } => {
            let config = load_config(args.config.as_deref(), project)?;
            detect::execute(project, *json, &config)
        }
        Command::Scan {
            project,
            output,
            format,
        } => {
            let config = load_config(args.config.as_deref(), project)?;
            scan::execute(project, output.as_deref(), *format, &config)
        }
    }
}

/// Fails with [`RouteMapperError::ProjectNotFound`] before any config or
/// source is read.
fn load_config(explicit: Option<&Path>, project: &Path) -> Result<Config> {
    ensure_project_exists(project)?;
    Ok(Config::load(explicit, project)?)
}

pub(crate) fn ensure_project_exists(project: &Path) -> Result<()> {
    if !project.exists() {
        return Err(RouteMapperError::project_not_found(project).into());
    }
    Ok(())
}

/// Write `content` to `output`, creating parent directories, or print it to
/// stdout when no file is given.
pub fn write_output(output: Option<&Path>, content: &str) -> Result<()> {
    if let Some(path) = output {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        info!("output saved to: {}", path.display());
    } else {
        println!("{content}");
    }
    Ok(())
}
