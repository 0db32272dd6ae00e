//! Generation pipeline
//!
//! One invocation turns one configuration file into one feed file:
//! - Check cancellation (only here, before any work)
//! - Load and validate the configuration
//! - Build the feed
//! - Write it, honoring the overwrite setting

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{debug, info};

use crate::cancel::{CancelFlag, EXIT_CODE_CANCELLED};
use crate::config::{self, ConfigError};
use crate::feed;
use crate::output::{self, WriteError, XML_EXTENSION};

/// Pipeline errors
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("loading configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("saving XML: {0}")]
    Write(#[from] WriteError),

    #[error("cancelled")]
    Cancelled,
}

impl PipelineError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            PipelineError::Config(_) => 1,
            PipelineError::Write(_) => 2,
            PipelineError::Cancelled => EXIT_CODE_CANCELLED,
        }
    }
}

/// Result type for pipeline operations
pub type PipelineResult<T> = Result<T, PipelineError>;

/// What to generate and where
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Input configuration (`.yaml` / `.yml`)
    pub input: PathBuf,

    /// Output override; defaults to the input path with an `.xml` extension
    pub output: Option<PathBuf>,

    /// Replace an existing output file
    pub overwrite: bool,
}

impl GenerateOptions {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: None,
            overwrite: false,
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Output path before `.xml` is appended to extension-less overrides
    pub fn output_path(&self) -> PathBuf {
        resolve_output_path(&self.input, self.output.as_deref())
    }
}

/// Output path for `input`, unless `output` overrides it
pub fn resolve_output_path(input: &Path, output: Option<&Path>) -> PathBuf {
    match output {
        Some(path) => path.to_path_buf(),
        None => input.with_extension(XML_EXTENSION),
    }
}

/// Run the pipeline stamped with the current time
pub fn generate(options: &GenerateOptions, cancel: &CancelFlag) -> PipelineResult<PathBuf> {
    generate_at(options, cancel, Utc::now())
}

/// Run the pipeline with a caller-supplied timestamp.
///
/// Returns the path of the file written.
pub fn generate_at(
    options: &GenerateOptions,
    cancel: &CancelFlag,
    now: DateTime<Utc>,
) -> PipelineResult<PathBuf> {
    if cancel.is_cancelled() {
        return Err(PipelineError::Cancelled);
    }

    info!(input = %options.input.display(), "Reading YAML file");
    let config = config::load(&options.input)?;
    debug!(
        filters = config.filters.len(),
        author = %config.author.email,
        "configuration valid"
    );

    info!("Generating XML feed");
    let feed = feed::build(&config, now);
    debug!(entries = feed.entries.len(), id = %feed.id, "feed built");

    let output_path = options.output_path();
    if options.overwrite {
        info!(output = %output_path.display(), "Overwriting XML to");
    } else {
        info!(output = %output_path.display(), "Saving XML to");
    }
    let written = output::write(&output_path, &feed, options.overwrite)?;

    Ok(written)
}
