//! Parsing of raw traceroute output into hop records.

use pathwatch_core::HopRecord;
use std::net::{IpAddr, Ipv4Addr};

/// Parse numeric-mode traceroute output into responsive hops
///
/// The first line is the utility's header and is skipped. Each remaining
/// line whose second field is an IPv4 literal becomes one [`HopRecord`];
/// every later token that reads as a non-negative decimal is taken as a
/// latency sample. Timeout markers and malformed lines are dropped.
#[must_use]
pub fn parse_hops(raw: &str) -> Vec<HopRecord> {
    raw.lines().skip(1).filter_map(parse_hop_line).collect()
}

/// Parse a single hop line
fn parse_hop_line(line: &str) -> Option<HopRecord> {
    let mut fields = line.split_whitespace();
    let _ttl = fields.next()?;
    let ip = parse_address(fields.next()?)?;

    let latencies = fields.filter_map(parse_latency).collect();

    Some(HopRecord::new(IpAddr::V4(ip), latencies))
}

/// Dotted quad whose four parts are each all digits and at most 255.
/// Zero-padded octets such as `010` are accepted.
fn parse_address(field: &str) -> Option<Ipv4Addr> {
    let mut octets = [0u8; 4];
    let mut parts = field.split('.');

    for octet in &mut octets {
        let part = parts.next()?;
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        *octet = part.parse().ok()?;
    }
    if parts.next().is_some() {
        return None;
    }

    let [a, b, c, d] = octets;
    Some(Ipv4Addr::new(a, b, c, d))
}

/// Accept plain decimals only (`1.123`, `5`), so that units, `!H` style
/// annotations and extra addresses on the line are ignored.
fn parse_latency(token: &str) -> Option<f64> {
    let mut dots = 0;
    let well_formed = !token.is_empty()
        && token.chars().all(|c| {
            if c == '.' {
                dots += 1;
                true
            } else {
                c.is_ascii_digit()
            }
        })
        && dots <= 1
        && token != ".";

    if well_formed {
        token.parse().ok()
    } else {
        None
    }
}

/// Address of the last responsive hop, if any
#[must_use]
pub fn last_responsive_ip(hops: &[HopRecord]) -> Option<IpAddr> {
    hops.last().map(|h| h.ip)
}
