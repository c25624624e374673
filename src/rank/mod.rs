use fnv::FnvHashMap;
use slog::Logger;

use std::cmp::Ordering;
use std::path::Path;

use crate::error::{RankError, Result};
use crate::link_graph::LinkGraph;

mod iterate;
mod sample;
mod transition;

pub use self::iterate::iterate_rank;
pub use self::sample::sample_rank;
pub use self::transition::{transition, Distribution};

/// Page title -> rank
pub type RankMap = FnvHashMap<String,f64>;

/// Rescale `ranks` so the values sum to 1.
///
/// Fails on a map whose sum is zero (or not a finite number): there is nothing to scale.
pub fn normalize(mut ranks: RankMap) -> Result<RankMap> {
    let sum: f64 = ranks.values().sum();
    if sum == 0.0 || !sum.is_finite() {
        return Err(RankError::invalid_argument(format!(
            "cannot normalize a rank map summing to {}", sum)));
    }
    for rank in ranks.values_mut() {
        *rank /= sum;
    }
    Ok(ranks)
}

/// Attach titles to ranks stored in page-id order
pub(crate) fn label(graph: &LinkGraph, ranks: &[f64]) -> RankMap {
    debug_assert_eq!(graph.len(), ranks.len());
    graph.titles()
        .zip(ranks.iter())
        .map(|(title, &rank)| (title.to_owned(), rank))
        .collect()
}

/// Ranks sorted alphabetically by page, for display
pub fn by_title(ranks: &RankMap) -> Vec<(&str, f64)> {
    let mut sorted: Vec<(&str, f64)> = ranks.iter().map(|(t, &r)| (t.as_str(), r)).collect();
    sorted.sort_by(|a, b| a.0.cmp(b.0));
    sorted
}

/// Ranks sorted greatest-to-least; ties broken by title
pub fn by_rank(ranks: &RankMap) -> Vec<(&str, f64)> {
    let mut sorted: Vec<(&str, f64)> = ranks.iter().map(|(t, &r)| (t.as_str(), r)).collect();
    sorted.sort_by(|a, b| {
        // ranks are never NaN once normalized
        b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal).then_with(|| a.0.cmp(b.0))
    });
    sorted
}

/// Write `(page, rank)` rows, highest rank first
pub fn write_csv(ranks: &RankMap, path: &Path) -> Result<()> {
    let mut csv_w = csv::Writer::from_path(path)?;
    csv_w.write_record(&["page", "rank"])?;
    for (title, rank) in by_rank(ranks) {
        csv_w.serialize((title, rank))?;
    }
    csv_w.flush()?;
    Ok(())
}

pub fn log_summary(log: &Logger, ranks: &RankMap) {
    let rank_sum: f64 = ranks.values().sum();
    info!(log, "Number of ranks: {}", ranks.len());
    info!(log, "Sum of all ranks: {}", rank_sum);
    if let Some(&(title, rank)) = by_rank(ranks).first() {
        debug!(log, "Highest rank: {} ({})", title, rank);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranks(pairs: &[(&str, f64)]) -> RankMap {
        pairs.iter().map(|&(t, r)| (t.to_owned(), r)).collect()
    }

    #[test]
    fn normalize_sums_to_one() {
        let n = normalize(ranks(&[("a", 2.0), ("b", 6.0), ("c", 0.0)])).unwrap();
        assert!((n["a"] - 0.25).abs() < 1e-12);
        assert!((n["b"] - 0.75).abs() < 1e-12);
        assert_eq!(n["c"], 0.0);
        assert!((n.values().sum::<f64>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = normalize(ranks(&[("a", 0.3), ("b", 0.1), ("c", 0.9)])).unwrap();
        let twice = normalize(once.clone()).unwrap();
        for (title, rank) in &once {
            assert!((rank - twice[title]).abs() < 1e-12);
        }
    }

    #[test]
    fn normalize_rejects_zero_sum() {
        assert!(normalize(ranks(&[("a", 0.0), ("b", 0.0)])).unwrap_err().is_invalid_argument());
        assert!(normalize(RankMap::default()).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn orderings() {
        let r = ranks(&[("b", 0.2), ("a", 0.2), ("c", 0.6)]);
        let titles: Vec<_> = by_title(&r).into_iter().map(|(t, _)| t).collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
        let titles: Vec<_> = by_rank(&r).into_iter().map(|(t, _)| t).collect();
        assert_eq!(titles, vec!["c", "a", "b"]);
    }

    #[test]
    fn csv_rows_are_ranked() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ranks.csv");
        write_csv(&ranks(&[("1.html", 0.25), ("2.html", 0.75)]), &path).unwrap();

        let mut csv_r = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<(String, f64)> = csv_r.deserialize().map(|r| r.unwrap()).collect();
        assert_eq!(rows, vec![("2.html".to_owned(), 0.75), ("1.html".to_owned(), 0.25)]);
    }
}
