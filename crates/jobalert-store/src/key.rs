use jobalert_core::JobMatch;

const DELIMITER: &str = "||";

/// Composite identity of a reported match: `company||title||url`.
///
/// All three fields keep their original case so keys written by earlier runs
/// keep matching. Line breaks become spaces so a key always fits on one line
/// of the seen file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeenKey(String);

impl SeenKey {
    #[must_use]
    pub fn for_match(m: &JobMatch) -> Self {
        let raw = format!("{}{DELIMITER}{}{DELIMITER}{}", m.company, m.title, m.url);
        Self(raw.replace(['\r', '\n'], " "))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SeenKey {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for SeenKey {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl std::fmt::Display for SeenKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
