//! Plugin option parsing.
//!
//! The host compiler hands the plugin an ordered list of `(key, value)`
//! pairs. [`parse`] turns that list into an [`Options`] record. Unknown keys
//! are ignored since other plugins may share the same argument channel.

pub mod key;

pub use key::Key;

/// Separator between entries of a `path` argument.
pub const PATH_DELIMITER: char = ';';

/// Directory searched when local search is left enabled.
pub const LOCAL_SEARCH_PATH: &str = ".";

/// Parsed plugin configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    pub info: bool,
    pub help: bool,
    pub version: bool,
    pub verbose: bool,
    pub search_paths: Vec<String>,
}

impl Options {
    fn version_only() -> Self {
        Options {
            version: true,
            ..Options::default()
        }
    }
}

/// Parse plugin arguments in declaration order.
///
/// A `version` key returns immediately with only the version flag set,
/// dropping anything collected earlier in the pass. Otherwise `"."` is put
/// in front of the search paths unless the last `local` argument had a
/// value other than `"true"`.
pub fn parse<I, K, V>(arguments: I) -> Options
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut options = Options::default();
    let mut local_search = true;

    for (key, value) in arguments {
        let value = value.as_ref();
        match Key::classify(key.as_ref()) {
            Key::Version => return Options::version_only(),
            Key::Help => options.help = true,
            Key::Info => options.info = true,
            Key::Verbose => options.verbose = true,
            Key::Local => local_search = value == "true",
            Key::Path => options.search_paths.extend(split_paths(value)),
            Key::Unknown => {}
        }
    }

    if local_search {
        options.search_paths.insert(0, LOCAL_SEARCH_PATH.to_string());
    }

    options
}

/// Split a `path` value into its non-empty segments
pub fn split_paths(value: &str) -> impl Iterator<Item = String> + '_ {
    value
        .split(PATH_DELIMITER)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
}
