use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

/// A normalized host key plus the text it was read from.
///
/// Equality, hashing and ordering only look at the key, so two spellings of the
/// same server are one identifier. The raw text is kept for display.
///
/// Keys are stored lowercase whatever the caller passes in.
#[derive(Debug, Clone, Serialize)]
pub struct HostIdentifier {
    key: String,
    raw: String,
}

impl HostIdentifier {
    pub fn new(key: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            key: key.into().to_lowercase(),
            raw: raw.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl PartialEq for HostIdentifier {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for HostIdentifier {}

impl Hash for HostIdentifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl PartialOrd for HostIdentifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HostIdentifier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl fmt::Display for HostIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn identity_ignores_raw_spelling() {
        let a = HostIdentifier::new("web01", "WEB01");
        let b = HostIdentifier::new("web01", "web01.corp.local");
        assert_eq!(a, b);

        let set: HashSet<HostIdentifier> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn displays_raw_text() {
        let id = HostIdentifier::new("db01", "DB01.Corp.Local");
        assert_eq!(id.to_string(), "DB01.Corp.Local");
        assert_eq!(id.key(), "db01");
    }

    #[test]
    fn keys_are_lowercased_on_construction() {
        let upper = HostIdentifier::new("APP02", "APP02");
        let lower = HostIdentifier::new("app01", "app01");
        assert_eq!(upper.key(), "app02");
        assert_eq!(upper, HostIdentifier::new("app02", "app02"));

        let mut hosts = vec![upper, lower, HostIdentifier::new("Zeta", "Zeta")];
        hosts.sort();
        let keys: Vec<&str> = hosts.iter().map(HostIdentifier::key).collect();
        assert_eq!(keys, ["app01", "app02", "zeta"]);
    }
}
