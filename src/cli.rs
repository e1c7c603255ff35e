//! Command-line interface for avail-wheels.
//!
//! Host defaults (architecture, loaded python) come from the environment
//! here and only here; the wheel layer receives resolved values.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use clap::builder::PossibleValuesParser;
use tracing::debug;

use crate::config::{
    AVAILABLE_ARCHITECTURES, AVAILABLE_RUNTIMES, DEFAULT_COLUMNS, DEFAULT_WHEELHOUSE,
    default_architectures_with_env, default_runtimes_with_env,
};
use crate::output::{OutputFormat, render};
use crate::wheel::{Column, WheelFilter, collect_from_dir, latest_versions};

/// List available wheels patterns from the wheelhouse.
#[derive(Parser, Debug)]
#[command(name = "avail-wheels")]
#[command(author, long_about = None)]
pub struct Cli {
    /// Specify the version to look for
    #[arg(short = 'v', long, default_value = "", conflicts_with = "all_versions")]
    pub version: String,

    /// Show all versions of each wheel
    #[arg(long, alias = "all_versions")]
    pub all_versions: bool,

    /// Specify the architectures to look for [default: generic and $RSNT_ARCH]
    #[arg(
        short,
        long,
        num_args = 1..,
        value_parser = PossibleValuesParser::new(AVAILABLE_ARCHITECTURES),
        conflicts_with = "all_archs"
    )]
    pub arch: Vec<String>,

    /// Show wheels of every architecture
    #[arg(long, alias = "all_archs")]
    pub all_archs: bool,

    /// Specify the python versions to look for [default: $EBVERSIONPYTHON, or all]
    #[arg(
        short,
        long,
        num_args = 1..,
        value_parser = PossibleValuesParser::new(AVAILABLE_RUNTIMES),
        conflicts_with = "all_pythons"
    )]
    pub python: Vec<String>,

    /// Show wheels of every python version
    #[arg(long, alias = "all_pythons")]
    pub all_pythons: bool,

    /// Specify the name to look for (case insensitive)
    #[arg(short, long, default_value = "")]
    pub name: String,

    /// Specify the directory to walk
    #[arg(long, default_value = DEFAULT_WHEELHOUSE)]
    pub house: PathBuf,

    /// Print raw files names
    #[arg(long, group = "display")]
    pub raw: bool,

    /// Print a mediawiki table
    #[arg(long, group = "display")]
    pub mediawiki: bool,

    /// Print rows as JSON
    #[arg(long, group = "display")]
    pub json: bool,

    /// Specify and order the columns to display
    #[arg(
        long,
        num_args = 1..,
        value_enum,
        default_values = DEFAULT_COLUMNS,
        group = "display"
    )]
    pub column: Vec<Column>,
}

impl Cli {
    /// Execute the listing and print it to stdout
    pub fn execute(&self) -> Result<()> {
        let filter = self.wheel_filter();
        debug!("Searching {:?} with {:?}", self.house, filter);

        let mut groups = collect_from_dir(&self.house, &filter)
            .with_context(|| format!("Failed to list wheels in {}", self.house.display()))?;

        if !self.all_versions {
            groups = latest_versions(groups);
        }

        let output = render(&groups, self.output_format(), &self.column)
            .context("Failed to render wheels")?;

        std::io::stdout()
            .lock()
            .write_all(output.as_bytes())
            .context("Failed to write to stdout")
    }

    /// Filter built from the arguments and the host environment
    pub fn wheel_filter(&self) -> WheelFilter {
        self.wheel_filter_with_env(
            std::env::var(crate::config::ARCHITECTURE_ENV).ok(),
            std::env::var(crate::config::PYTHON_VERSION_ENV).ok(),
        )
    }

    pub fn wheel_filter_with_env(
        &self,
        current_architecture: Option<String>,
        current_python: Option<String>,
    ) -> WheelFilter {
        let architectures = if self.all_archs {
            AVAILABLE_ARCHITECTURES.iter().map(|a| a.to_string()).collect()
        } else if self.arch.is_empty() {
            default_architectures_with_env(current_architecture)
        } else {
            self.arch.clone()
        };

        let runtimes = if self.all_pythons {
            AVAILABLE_RUNTIMES.iter().map(|r| r.to_string()).collect()
        } else if self.python.is_empty() {
            default_runtimes_with_env(current_python)
        } else {
            self.python.clone()
        };

        WheelFilter {
            architectures,
            name: self.name.clone(),
            version: self.version.clone(),
            runtimes,
        }
    }

    pub fn output_format(&self) -> OutputFormat {
        if self.raw {
            OutputFormat::Raw
        } else if self.mediawiki {
            OutputFormat::MediaWiki
        } else if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Simple
        }
    }
}
