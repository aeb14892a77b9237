use std::io::{self, Write};

use super::{Host, PluginError};
use crate::text;

/// Clang integration stub. There is no ABI to check against yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct Clang;

impl Host for Clang {
    fn name(&self) -> &str {
        "clang"
    }

    fn help_text(&self) -> &'static str {
        text::GENERIC_HELP_TEXT
    }

    fn check_version(&self) -> Result<(), PluginError> {
        Ok(())
    }

    fn write_host_info(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Clang host: no version information available\n")
    }
}
