use std::io::{self, Write};

use tracing::{debug, warn};

use super::{Host, PluginError};
use crate::text;

/// GCC release (major.minor) the plugin is built against
pub const GCC_PLUGIN_VERSION: (u32, u32) = (8, 2);

/// Prefix GCC uses for arguments addressed to a plugin
pub const PLUGIN_ARG_PREFIX: &str = "-fplugin-arg-";

/// The host's `plugin_gcc_version` record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GccVersion {
    pub basever: String,
    pub datestamp: String,
    pub devphase: String,
    pub revision: String,
    pub configuration_arguments: String,
}

impl GccVersion {
    /// Major and minor components of `basever`, if it has them.
    pub fn major_minor(&self) -> Option<(u32, u32)> {
        let mut parts = self.basever.split('.');
        let major = parts.next()?.parse().ok()?;
        let minor = parts.next()?.parse().ok()?;
        Some((major, minor))
    }
}

#[derive(Debug, Clone)]
pub struct Gcc {
    version: GccVersion,
}

impl Gcc {
    pub fn new(version: GccVersion) -> Self {
        Gcc { version }
    }
}

impl Host for Gcc {
    fn name(&self) -> &str {
        "gcc"
    }

    fn help_text(&self) -> &'static str {
        text::GCC_HELP_TEXT
    }

    fn check_version(&self) -> Result<(), PluginError> {
        let (major, minor) = GCC_PLUGIN_VERSION;
        if self.version.major_minor() == Some(GCC_PLUGIN_VERSION) {
            return Ok(());
        }
        Err(PluginError::VersionMismatch {
            expected: format!("{major}.{minor}"),
            found: self.version.basever.clone(),
        })
    }

    fn write_host_info(&self, out: &mut dyn Write) -> io::Result<()> {
        let version = &self.version;
        writeln!(out, "GCC Version info")?;
        writeln!(out, "================\n")?;
        writeln!(out, "Base version: {}", version.basever)?;
        writeln!(out, "Date stamp: {}", version.datestamp)?;
        writeln!(out, "Dev phase: {}", version.devphase)?;
        writeln!(out, "Revision: {}", version.revision)?;
        writeln!(
            out,
            "Configuration arguments: {}\n",
            version.configuration_arguments
        )
    }
}

/// One `-fplugin-arg-<plugin>-<key>[=<value>]` option
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginArgument<'a> {
    pub plugin: &'a str,
    pub key: &'a str,
    pub value: Option<&'a str>,
}

impl<'a> PluginArgument<'a> {
    /// Split a raw option. The plugin name ends at the first `-`, the key
    /// at the first `=`.
    pub fn parse(raw: &'a str) -> Option<Self> {
        let rest = raw.strip_prefix(PLUGIN_ARG_PREFIX)?;
        let (plugin, rest) = rest.split_once('-')?;
        let (key, value) = match rest.split_once('=') {
            Some((key, value)) => (key, Some(value)),
            None => (rest, None),
        };
        if plugin.is_empty() || key.is_empty() {
            return None;
        }
        Some(PluginArgument { plugin, key, value })
    }

    /// Bare flags read as `true`, so `-l` behaves like `-l=true`.
    pub fn pair(&self) -> (&'a str, &'a str) {
        (self.key, self.value.unwrap_or("true"))
    }
}

/// Collect the `(key, value)` pairs GCC would hand to `plugin_name`.
pub fn collect_arguments<'a, S>(plugin_name: &str, raw: &'a [S]) -> Vec<(&'a str, &'a str)>
where
    S: AsRef<str>,
{
    raw.iter()
        .map(|option| option.as_ref())
        .filter(|option| option.starts_with(PLUGIN_ARG_PREFIX))
        .filter_map(|option| match PluginArgument::parse(option) {
            Some(argument) if argument.plugin == plugin_name => {
                debug!(key = argument.key, value = ?argument.value, "plugin argument");
                Some(argument.pair())
            }
            Some(argument) => {
                debug!(plugin = argument.plugin, key = argument.key, "argument for another plugin");
                None
            }
            None => {
                warn!(option, "ignoring malformed plugin argument");
                None
            }
        })
        .collect()
}
