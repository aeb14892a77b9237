//! Host compiler integration.
//!
//! A host loads the plugin, checks that it was built for a compatible
//! compiler and hands over its argument list. Everything compiler specific
//! sits behind [`Host`]; [`init`] runs the shared start-up sequence.

pub mod clang;
pub mod error;
pub mod gcc;

use std::io::{self, Write};

use tracing::{debug, info};

use crate::options::Options;
use crate::text;

pub use clang::Clang;
pub use error::PluginError;
pub use gcc::Gcc;

/// What the host knows about the loaded plugin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginInfo {
    pub base_name: String,
    pub full_name: String,
    pub version: Option<String>,
}

impl PluginInfo {
    pub fn new(base_name: impl Into<String>, full_name: impl Into<String>) -> Self {
        PluginInfo {
            base_name: base_name.into(),
            full_name: full_name.into(),
            version: Some(text::VERSION.to_string()),
        }
    }

    pub fn write_to(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", text::TITLE)?;
        writeln!(out, "{}\n", "=".repeat(text::TITLE.len()))?;
        writeln!(out, "Base name: {}", self.base_name)?;
        writeln!(out, "Full name: {}", self.full_name)?;
        writeln!(out, "Canonical Author: {}", text::AUTHOR)?;
        writeln!(out, "Canonical Implementation: {}", text::REPOSITORY)?;
        if let Some(version) = &self.version {
            writeln!(out, "Version: {}", version)?;
        }
        writeln!(out)
    }
}

/// A compiler able to load the plugin
pub trait Host {
    fn name(&self) -> &str;

    fn help_text(&self) -> &'static str;

    /// Reject hosts the plugin was not built against.
    fn check_version(&self) -> Result<(), PluginError>;

    fn write_host_info(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// How plugin start-up ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Version text was printed, nothing else ran
    Version,
    /// Help and/or info was printed instead of initializing
    Informational,
    Initialized,
}

impl Outcome {
    pub fn exit_code(&self) -> u8 {
        0
    }
}

/// Run the plugin start-up sequence, writing user facing text to `out`.
pub fn init(
    host: &dyn Host,
    plugin: &PluginInfo,
    options: &Options,
    out: &mut dyn Write,
) -> Result<Outcome, PluginError> {
    host.check_version()?;
    debug!(host = host.name(), plugin = %plugin.base_name, ?options, "plugin loaded");

    if options.version {
        writeln!(out, "{}", text::VERSION_TEXT)?;
        return Ok(Outcome::Version);
    }

    let mut informational = false;

    if options.help {
        writeln!(out, "{}", host.help_text())?;
        informational = true;
    }

    if options.info {
        plugin.write_to(out)?;
        host.write_host_info(out)?;
        writeln!(out, "{}", text::LICENSE_TEXT)?;
        informational = true;
    }

    if informational {
        return Ok(Outcome::Informational);
    }

    writeln!(out, "embed: initializing...")?;
    for (index, path) in options.search_paths.iter().enumerate() {
        debug!(index, path = %path, "search path");
    }
    info!(search_paths = options.search_paths.len(), "plugin ready");
    writeln!(out, "embed: successfully initialized")?;

    Ok(Outcome::Initialized)
}
