/// Option names recognised by the plugin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Version,
    Help,
    Info,
    Verbose,
    Local,
    Path,
    Unknown,
}

impl Key {
    /// Keys are matched case-sensitively in long or short form.
    pub fn classify(key: &str) -> Self {
        match key {
            "version" | "v" => Key::Version,
            "help" | "h" => Key::Help,
            "info" | "i" => Key::Info,
            // "v" is documented as a verbose alias too, but version claims it first
            "verbose" => Key::Verbose,
            "local" | "l" => Key::Local,
            "path" | "p" => Key::Path,
            _ => Key::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_long_and_short() {
        let cases = [
            ("version", Key::Version),
            ("v", Key::Version),
            ("help", Key::Help),
            ("h", Key::Help),
            ("info", Key::Info),
            ("i", Key::Info),
            ("verbose", Key::Verbose),
            ("local", Key::Local),
            ("l", Key::Local),
            ("path", Key::Path),
            ("p", Key::Path),
        ];
        for (input, expected) in cases {
            assert_eq!(Key::classify(input), expected, "key {input:?}");
        }
    }

    #[test]
    fn test_classify_unknown() {
        assert_eq!(Key::classify("VERSION"), Key::Unknown);
        assert_eq!(Key::classify("paths"), Key::Unknown);
        assert_eq!(Key::classify(""), Key::Unknown);
    }
}
