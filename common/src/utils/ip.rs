use std::net::{IpAddr, Ipv4Addr};

/// Whether `s` has the shape of a dotted-quad IPv4 address: four groups of one to three digits.
///
/// Only the shape is checked, so `999.1.1.1` qualifies. Such tokens are host keys,
/// not addresses, and must never be mistaken for a hostname with a domain.
pub fn is_dotted_quad(s: &str) -> bool {
    let mut groups: usize = 0;
    for group in s.split('.') {
        groups += 1;
        if groups > 4 || group.is_empty() || group.len() > 3 {
            return false;
        }
        if !group.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
    }
    groups == 4
}

/// Resolves an inventory address to an [`IpAddr`]. `localhost` maps to the IPv4 loopback.
pub fn parse_address(s: &str) -> Option<IpAddr> {
    let trimmed = s.trim();
    if trimmed.eq_ignore_ascii_case("localhost") {
        return Some(IpAddr::V4(Ipv4Addr::LOCALHOST));
    }
    trimmed.parse::<IpAddr>().ok()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
