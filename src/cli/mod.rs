use clap::{Args, Parser, ValueEnum};

use crate::plugin::gcc::GccVersion;

/// Compilers the plugin knows how to talk to
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Compiler {
    Gcc,
    Clang,
}

#[derive(Parser)]
#[command(name = "embed")]
#[command(version)]
#[command(about = "Simulates loading the embed plugin into a host compiler")]
pub struct Cli {
    /// Host compiler loading the plugin
    #[arg(long, value_enum, default_value = "gcc")]
    pub compiler: Compiler,

    /// Plugin base name, as used in -fplugin-arg-<NAME>-<KEY>
    #[arg(long, default_value = "libembed_gcc")]
    pub plugin_name: String,

    /// Full path of the plugin (defaults to the plugin name)
    #[arg(long)]
    pub plugin_path: Option<String>,

    #[command(flatten)]
    pub host: HostVersion,

    /// Raw host options, e.g. -fplugin-arg-libembed_gcc-path=include
    #[arg(last = true, value_name = "HOST_ARGS")]
    pub host_args: Vec<String>,
}

/// Version record reported by the host
#[derive(Debug, Args)]
pub struct HostVersion {
    /// Host compiler base version
    #[arg(long, default_value = "8.2.0")]
    pub host_version: String,

    #[arg(long, default_value = "")]
    pub datestamp: String,

    #[arg(long, default_value = "")]
    pub devphase: String,

    #[arg(long, default_value = "")]
    pub revision: String,

    #[arg(long, default_value = "")]
    pub configuration_arguments: String,
}

impl From<HostVersion> for GccVersion {
    fn from(host: HostVersion) -> Self {
        GccVersion {
            basever: host.host_version,
            datestamp: host.datestamp,
            devphase: host.devphase,
            revision: host.revision,
            configuration_arguments: host.configuration_arguments,
        }
    }
}

impl Cli {
    pub fn parse() -> Self {
        Parser::parse()
    }

    pub fn plugin_path(&self) -> &str {
        self.plugin_path.as_deref().unwrap_or(&self.plugin_name)
    }
}
