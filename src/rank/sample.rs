use rand::distributions::{Distribution as _, WeightedIndex};
use rand::Rng;
use slog::Logger;

use super::transition::fill_distribution;
use super::{label, normalize, RankMap};
use crate::error::{check_damping, RankError, Result};
use crate::link_graph::LinkGraph;

/// Estimate ranks by following a random surfer for exactly `n` steps.
///
/// The walk starts on a uniformly chosen page. Each step counts a visit to the current
/// page, then draws the next page from its transition distribution. A page's rank is
/// the share of steps spent on it. Seed `rng` to get reproducible ranks.
pub fn sample_rank<R: Rng>(graph: &LinkGraph, damping: f64, n: usize, rng: &mut R,
                           log: &Logger) -> Result<RankMap> {
    let size = graph.require_pages()?;
    check_damping(damping)?;
    if n == 0 {
        return Err(RankError::invalid_argument("sample count must be positive"));
    }
    let sample_log = log.new(o!("damping" => damping, "samples" => n));

    let mut visits = vec![0u64; size];
    let mut probs: Vec<f64> = Vec::with_capacity(size);
    let mut current = rng.gen_range(0..size) as u32;
    debug!(sample_log, "Starting walk on {}", graph.title(current));

    for _ in 0..n {
        visits[current as usize] += 1;
        fill_distribution(graph, current, damping, &mut probs);
        // cumulative weights + binary search: an exact categorical draw
        let next = WeightedIndex::new(&probs).map_err(|e| {
            RankError::invalid_argument(format!("bad transition distribution: {}", e))
        })?;
        current = next.sample(rng) as u32;
    }

    let shares: Vec<f64> = visits.iter().map(|&v| v as f64 / n as f64).collect();
    let ranks = normalize(label(graph, &shares))?;
    info!(sample_log, "Sampled {} pages over {} steps", size, n);
    Ok(ranks)
}
