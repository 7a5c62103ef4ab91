//! Path metrics derived from a hop sequence.

use pathwatch_core::{HopRecord, PathMetrics};
use std::collections::HashSet;

/// Compute hop count, average latency and path diversity
///
/// The average divides the sum of every latency sample by the number of
/// hops, not by the number of samples. An empty path averages to zero.
#[must_use]
pub fn compute_metrics(hops: &[HopRecord]) -> PathMetrics {
    let hop_count = hops.len();
    let total_latency: f64 = hops.iter().map(HopRecord::total_latency).sum();

    #[allow(clippy::cast_precision_loss)]
    let avg_latency_ms = if hop_count > 0 {
        total_latency / hop_count as f64
    } else {
        0.0
    };

    let unique_hop_count = hops.iter().map(|h| h.ip).collect::<HashSet<_>>().len();

    PathMetrics {
        hop_count,
        avg_latency_ms,
        unique_hop_count,
        geo_path: hops.iter().map(|h| h.ip).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_hops;

    fn hop(ip: &str, latencies: &[f64]) -> HopRecord {
        HopRecord::new(ip.parse().unwrap(), latencies.to_vec())
    }

    #[test]
    fn reference_scenario() {
        let raw = "traceroute to example.com (93.184.216.34), 30 hops max\n \
                   1  192.168.1.1  1.123 ms  1.045 ms  1.200 ms\n \
                   2  *\n \
                   3  10.0.0.5  5.5 ms 5.6 ms\n";
        let metrics = compute_metrics(&parse_hops(raw));

        assert_eq!(metrics.hop_count, 2);
        assert!((metrics.avg_latency_ms - 7.234).abs() < 1e-9);
        assert_eq!(metrics.unique_hop_count, 2);
        assert_eq!(metrics.geo_path.len(), 2);
    }

    #[test]
    fn empty_path_averages_to_zero() {
        let metrics = compute_metrics(&[]);
        assert_eq!(metrics.hop_count, 0);
        assert_eq!(metrics.unique_hop_count, 0);
        assert!(metrics.avg_latency_ms.abs() < f64::EPSILON);
        assert!(metrics.geo_path.is_empty());
    }

    #[test]
    fn denominator_is_hop_count_not_sample_count() {
        let metrics = compute_metrics(&[hop("10.0.0.1", &[2.0, 2.0, 2.0]), hop("10.0.0.2", &[4.0])]);
        assert!((metrics.avg_latency_ms - 5.0).abs() < 1e-9);
    }

    #[test]
    fn repeated_addresses_reduce_unique_count() {
        let hops = [
            hop("10.0.0.1", &[1.0]),
            hop("10.0.0.2", &[1.0]),
            hop("10.0.0.1", &[1.0]),
        ];
        let metrics = compute_metrics(&hops);
        assert_eq!(metrics.hop_count, 3);
        assert_eq!(metrics.unique_hop_count, 2);
        assert!(metrics.unique_hop_count <= metrics.hop_count);
    }

    #[test]
    fn distinct_addresses_keep_counts_equal() {
        let hops = [hop("10.0.0.1", &[]), hop("10.0.0.2", &[]), hop("10.0.0.3", &[])];
        let metrics = compute_metrics(&hops);
        assert_eq!(metrics.unique_hop_count, metrics.hop_count);
        assert!(metrics.avg_latency_ms.abs() < f64::EPSILON);
    }
}
