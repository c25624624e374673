/*
 * Power iteration over the link graph:
 *  PR(p) = (1-d)/N + d * ( Σ PR(i)/L(i) over i linking to p  +  Σ PR(s)/N over sinks s )
 * Sinks (pages with no links) hand their rank to every page, the same way the
 * random surfer teleports off them.
 */

use slog::Logger;

use super::{label, normalize, RankMap};
use crate::config::check_epsilon;
use crate::error::{check_damping, RankError, Result};
use crate::link_graph::LinkGraph;

const REPORT_EVERY: usize = 10;    //how often to log progress

struct Solver<'a> {
    graph:    &'a LinkGraph,
    damping:  f64,
    ranks:    Vec<f64>,     // snapshot every sweep reads from
    next:     Vec<f64>,     // written during a sweep, then swapped in
    dangling: Vec<u32>,
}

impl<'a> Solver<'a> {
    fn new(graph: &'a LinkGraph, damping: f64) -> Solver<'a> {
        let size = graph.len();
        let guess = (size as f64).recip();  // start each pagerank at 1/N
        Solver {
            graph,
            damping,
            ranks:    vec![guess; size],
            next:     vec![0.0; size],
            dangling: graph.dangling(),
        }
    }

    fn sum(&self) -> f64 {
        self.ranks.iter().sum()
    }

    /// One full sweep. Returns the largest change made to any page's rank.
    fn sweep(&mut self) -> f64 {
        let graph = self.graph;
        let ranks = &self.ranks;
        let n = graph.len() as f64;
        let base = (1.0 - self.damping) / n;
        let sink: f64 = self.dangling.iter().map(|&s| ranks[s as usize]).sum::<f64>() / n;

        for (id, entry) in graph.entries().iter().enumerate() {
            //parents always have at least one child (this page)
            let inherited: f64 = entry.parents.iter()
                .map(|&p| ranks[p as usize] / graph.entry(p).children.len() as f64)
                .sum();
            self.next[id] = base + self.damping * (inherited + sink);
        }

        let max_change = self.ranks.iter()
            .zip(self.next.iter())
            .fold(0f64, |max_change, (old, new)| max_change.max((old - new).abs()));
        std::mem::swap(&mut self.ranks, &mut self.next);
        max_change
    }
}

/// Rank pages by sweeping the PageRank update until no page moves more than `epsilon`.
///
/// Every sweep is computed from the previous sweep's complete snapshot. If `max_sweeps`
/// run out first, the normalized best-effort ranks come back inside
/// `RankError::NonConvergence`.
pub fn iterate_rank(graph: &LinkGraph, damping: f64, epsilon: f64, max_sweeps: usize,
                    log: &Logger) -> Result<RankMap> {
    graph.require_pages()?;
    check_damping(damping)?;
    check_epsilon(epsilon)?;
    if max_sweeps == 0 {
        return Err(RankError::invalid_argument("sweep cap must be positive"));
    }
    let pr_log = log.new(o!("damping" => damping, "epsilon" => epsilon));

    let mut solver = Solver::new(graph, damping);
    let mut max_change = f64::MAX;
    let mut sweeps = 0;
    while max_change > epsilon {
        if sweeps == max_sweeps {
            warn!(pr_log, "Gave up after {} sweeps; max change still {}", sweeps, max_change);
            let best_effort = normalize(label(graph, &solver.ranks))?;
            return Err(RankError::non_convergence(sweeps, max_change, best_effort));
        }
        max_change = solver.sweep();
        sweeps += 1;
        if sweeps % REPORT_EVERY == 0 {
            debug!(pr_log, "{:03}: max change {}, sum {}", sweeps, max_change, solver.sum());
        }
    }

    info!(pr_log, "Computed pageranks with ε={} after {} sweeps", epsilon, sweeps);
    info!(pr_log, "Final sum is {} (should be ~1.0)", solver.sum());
    normalize(label(graph, &solver.ranks))
}
