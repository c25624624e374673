use fnv::FnvHashMap;

use crate::error::{RankError, Result};

mod crawl;

pub use self::crawl::crawl;


// ------COMMON-OBJECTS------


/// A page, its predecessors, and its successors (all by id)
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub title: String,
    pub parents:  Vec<u32>,
    pub children: Vec<u32>,
}

impl Entry {
    #[inline]
    pub fn is_dangling(&self) -> bool {
        self.children.is_empty()
    }
}

/// Read-only link graph over a corpus.
///
/// Pages get dense ids in title order, so two graphs built from the same links
/// index identically no matter what order the links were supplied in.
/// Both the outgoing and incoming link lists of every page are kept, which lets
/// the solver sum over predecessors without rescanning the corpus every sweep.
#[derive(Debug, Clone)]
pub struct LinkGraph {
    entries: Vec<Entry>,
    titles:  FnvHashMap<String,u32>,
}

impl LinkGraph {
    /// Build a graph from `(page, outgoing links)` pairs.
    ///
    /// Repeated links are collapsed. Fails if a page appears twice, links to itself,
    /// or links to a page that is not in the corpus.
    pub fn new<I, S, L, T>(pages: I) -> Result<LinkGraph>
    where
        I: IntoIterator<Item = (S, L)>,
        S: Into<String>,
        L: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut raw: Vec<(String, Vec<String>)> = pages
            .into_iter()
            .map(|(page, links)| (page.into(), links.into_iter().map(Into::into).collect()))
            .collect();
        raw.sort_by(|a, b| a.0.cmp(&b.0));

        let mut titles: FnvHashMap<String,u32> =
            FnvHashMap::with_capacity_and_hasher(raw.len(), Default::default());
        for (id, &(ref title, _)) in raw.iter().enumerate() {
            if titles.insert(title.clone(), id as u32).is_some() {
                return Err(RankError::invalid_argument(format!(
                    "page `{}` appears more than once", title)));
            }
        }

        let mut entries: Vec<Entry> = raw.iter()
            .map(|&(ref title, _)| Entry {
                title:    title.clone(),
                parents:  vec![],
                children: vec![],
            })
            .collect();

        for (id, (title, links)) in raw.into_iter().enumerate() {
            let mut children = Vec::with_capacity(links.len());
            for link in links {
                let child = match titles.get(&link) {
                    Some(&c) => c,
                    None => return Err(RankError::invalid_argument(format!(
                        "page `{}` links to `{}`, which is not in the corpus", title, link))),
                };
                if child as usize == id {
                    return Err(RankError::invalid_argument(format!(
                        "page `{}` links to itself", title)));
                }
                children.push(child);
            }
            children.sort();
            children.dedup();
            for &c in &children {
                entries[c as usize].parents.push(id as u32);
            }
            entries[id].children = children;
        }

        Ok(LinkGraph { entries, titles })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn lookup_title(&self, title: &str) -> Option<u32> {
        self.titles.get(title).cloned()
    }

    /// Panics if `id` did not come from this graph.
    pub fn entry(&self, id: u32) -> &Entry {
        &self.entries[id as usize]
    }

    pub fn title(&self, id: u32) -> &str {
        &self.entries[id as usize].title
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Page titles in id order (which is alphabetical).
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.title.as_str())
    }

    /// Ids of pages without outgoing links
    pub fn dangling(&self) -> Vec<u32> {
        self.entries.iter()
            .enumerate()
            .filter(|&(_, e)| e.is_dangling())
            .map(|(id, _)| id as u32)
            .collect()
    }

    pub fn num_links(&self) -> usize {
        self.entries.iter().map(|e| e.children.len()).sum()
    }

    /// Fails with `InvalidArgument` on an empty graph; the engines need N > 0.
    pub(crate) fn require_pages(&self) -> Result<usize> {
        if self.is_empty() {
            Err(RankError::invalid_argument("link graph has no pages"))
        } else {
            Ok(self.len())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> LinkGraph {
        LinkGraph::new(vec![("c", vec![]), ("a", vec!["b"]), ("b", vec!["c"])]).unwrap()
    }

    #[test]
    fn ids_follow_title_order() {
        let g = chain();
        assert_eq!(g.titles().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(g.lookup_title("b"), Some(1));
        assert_eq!(g.lookup_title("zzz"), None);
    }

    #[test]
    fn parents_mirror_children() {
        let g = chain();
        assert_eq!(g.entry(0).children, vec![1]);
        assert_eq!(g.entry(1).parents, vec![0]);
        assert_eq!(g.entry(2).parents, vec![1]);
        assert!(g.entry(0).parents.is_empty());
        assert_eq!(g.dangling(), vec![2]);
        assert_eq!(g.num_links(), 2);
    }

    #[test]
    fn repeated_links_collapse() {
        let g = LinkGraph::new(vec![("a", vec!["b", "b", "b"]), ("b", vec![])]).unwrap();
        assert_eq!(g.entry(0).children, vec![1]);
        assert_eq!(g.entry(1).parents, vec![0]);
    }

    #[test]
    fn rejects_broken_graphs() {
        let self_link = LinkGraph::new(vec![("a", vec!["a"])]);
        assert!(self_link.unwrap_err().is_invalid_argument());

        let outside = LinkGraph::new(vec![("a", vec!["nowhere"])]);
        assert!(outside.unwrap_err().is_invalid_argument());

        let twice = LinkGraph::new(vec![("a", Vec::<&str>::new()), ("a", vec![])]);
        assert!(twice.unwrap_err().is_invalid_argument());
    }

    #[test]
    fn empty_graph_builds_but_has_no_pages() {
        let g = LinkGraph::new(Vec::<(String, Vec<String>)>::new()).unwrap();
        assert!(g.is_empty());
        assert!(g.require_pages().is_err());
    }
}
