use fnv::FnvHashSet;
use regex::Regex;
use slog::Logger;

use std::fs;
use std::path::Path;

use super::LinkGraph;
use crate::error::Result;

// NOTE: this is a regex, not an html parser.
//  It only sees double-quoted `href`s inside `<a ...>` tags, which is all the corpora use.
//  Fragment-only links and absolute urls fall out later because no page is named like them.
lazy_static! {
    static ref ANCHOR_HREF: Regex = Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).unwrap();
}

const PAGE_EXTENSION: &str = "html";

/// Hrefs of every anchor in `contents`, duplicates collapsed
pub fn extract_links(contents: &str) -> FnvHashSet<String> {
    ANCHOR_HREF.captures_iter(contents)
        .map(|cap| cap[1].to_owned())
        .collect()
}

/// Build a link graph from the `.html` files directly inside `dir`.
///
/// Each file is a page named by its file name. Links to itself and links to anything
/// that isn't another page of the corpus are dropped, so the graph always validates.
pub fn crawl(dir: &Path, log: &Logger) -> Result<LinkGraph> {
    let crawl_log = log.new(o!("corpus" => format!("{}", dir.display())));

    let mut pages: Vec<(String, FnvHashSet<String>)> = vec![];
    for dir_entry in fs::read_dir(dir)? {
        let path = dir_entry?.path();
        if !path.is_file() || path.extension().map_or(true, |e| e != PAGE_EXTENSION) {
            continue;
        }
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(n) => n.to_owned(),
            None => {
                warn!(crawl_log, "Skipping page with a non-utf8 name: {}", path.display());
                continue;
            }
        };
        let bytes = fs::read(&path)?;
        let mut links = extract_links(&String::from_utf8_lossy(&bytes));
        links.remove(&name);
        pages.push((name, links));
    }

    // only keep links to other pages in the corpus
    let corpus: FnvHashSet<String> = pages.iter().map(|&(ref name, _)| name.clone()).collect();
    let mut dropped = 0usize;
    for &mut (_, ref mut links) in &mut pages {
        let before = links.len();
        links.retain(|l| corpus.contains(l));
        dropped += before - links.len();
    }

    let graph = LinkGraph::new(pages)?;
    info!(crawl_log, "Crawled {} pages with {} links", graph.len(), graph.num_links();
          "dropped" => dropped);
    Ok(graph)
}
