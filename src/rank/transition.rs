use fnv::FnvHashMap;

use crate::error::{check_damping, RankError, Result};
use crate::link_graph::LinkGraph;

/// Page title -> probability of visiting it next
pub type Distribution = FnvHashMap<String,f64>;

/// Where the surfer on `page` goes next.
///
/// With probability `damping` it follows one of `page`'s links, chosen uniformly;
/// otherwise it jumps to any page of the corpus. A page without links sends the
/// surfer anywhere with equal odds. Every page of the graph gets an entry.
pub fn transition(graph: &LinkGraph, page: &str, damping: f64) -> Result<Distribution> {
    graph.require_pages()?;
    check_damping(damping)?;
    let id = graph.lookup_title(page).ok_or_else(|| {
        RankError::invalid_argument(format!("page `{}` is not in the link graph", page))
    })?;
    let mut probs = Vec::with_capacity(graph.len());
    fill_distribution(graph, id, damping, &mut probs);
    Ok(super::label(graph, &probs))
}

/// Id-indexed form of `transition`, reusing `probs` as the output buffer.
/// Callers have already checked the graph and damping factor.
pub(crate) fn fill_distribution(graph: &LinkGraph, id: u32, damping: f64, probs: &mut Vec<f64>) {
    let n = graph.len() as f64;
    let children = &graph.entry(id).children;
    probs.clear();
    if children.is_empty() {
        //equally likely to land anywhere
        probs.resize(graph.len(), n.recip());
    } else {
        probs.resize(graph.len(), (1.0 - damping) / n);
        let follow = damping / children.len() as f64;
        for &c in children {
            probs[c as usize] += follow;
        }
    }
}
