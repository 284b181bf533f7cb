//! # Identity Normalizer
//!
//! Turns a raw host token into the key used for cross-source equality.
//!
//! Rules, applied in order:
//! 1. trim surrounding whitespace, rejecting what is left if empty;
//! 2. lowercase;
//! 3. dotted-quad IPv4 tokens are kept as they are;
//! 4. a hostname whose part after the first dot is a configured internal domain
//!    collapses to its leftmost label.

use scout_common::config::NormalizerConfig;
use scout_common::error::NormalizationFailure;
use scout_common::inventory::host::HostIdentifier;
use scout_common::utils::ip;

pub fn normalize(raw: &str, cfg: &NormalizerConfig) -> Result<HostIdentifier, NormalizationFailure> {
    let trimmed: &str = raw.trim();
    if trimmed.is_empty() {
        return Err(NormalizationFailure::Empty);
    }

    let lower: String = trimmed.to_lowercase();
    if ip::is_dotted_quad(&lower) {
        return Ok(HostIdentifier::new(lower, trimmed));
    }

    let key: String = match lower.split_once('.') {
        Some((label, remainder)) if !label.is_empty() && cfg.strips(remainder) => label.to_string(),
        _ => lower,
    };

    Ok(HostIdentifier::new(key, trimmed))
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
    use scout_common::config::RawCountPolicy;

    fn corp() -> NormalizerConfig {
        NormalizerConfig::new(["corp.local"], RawCountPolicy::NonBlank)
    }

    fn key(raw: &str, cfg: &NormalizerConfig) -> String {
        normalize(raw, cfg).unwrap().key().to_string()
    }

    #[test]
    fn case_and_whitespace_do_not_matter() {
        let cfg = corp();
        assert_eq!(normalize("  Web01.Corp.local ", &cfg), normalize("web01", &cfg));
        assert_eq!(key("  Web01.Corp.local ", &cfg), "web01");
    }

    #[test]
    fn raw_text_is_preserved_trimmed() {
        let id = normalize("  Web01.Corp.local ", &corp()).unwrap();
        assert_eq!(id.raw(), "Web01.Corp.local");
    }

    #[test]
    fn blank_input_fails() {
        assert_eq!(normalize("", &corp()), Err(NormalizationFailure::Empty));
        assert_eq!(normalize(" \t\r\n", &corp()), Err(NormalizationFailure::Empty));
    }

    #[test]
    fn ipv4_is_never_domain_stripped() {
        let cfg = NormalizerConfig::new(["0.1", "1"], RawCountPolicy::NonBlank);
        assert_eq!(key(" 10.0.0.1 ", &cfg), "10.0.0.1");
    }

    #[test]
    fn unknown_domains_are_kept() {
        let cfg = corp();
        assert_eq!(key("WEB01.example.com", &cfg), "web01.example.com");
        assert_eq!(key("web01.evilcorp.local", &cfg), "web01.evilcorp.local");
        assert_eq!(key("web01", &NormalizerConfig::default()), "web01");
    }

    #[test]
    fn deeper_internal_names_collapse_to_leftmost_label() {
        assert_eq!(key("app7.dc1.CORP.local", &corp()), "app7");
    }

    #[test]
    fn leading_dot_is_not_a_hostname() {
        assert_eq!(key(".corp.local", &corp()), ".corp.local");
    }

    #[test]
    fn normalization_is_deterministic() {
        let cfg = corp();
        for raw in ["DB01.corp.local", "10.1.1.1", "x", "  Mixed.Case.Host  "] {
            assert_eq!(normalize(raw, &cfg), normalize(raw, &cfg));
        }
    }
}
