// Rank the pages of a linked corpus two ways:
//  a random surfer sampled for `n` steps, and power iteration to a fixed point.
// Both engines read the same immutable `LinkGraph` and report normalized rank maps.

// LOGGING
#[macro_use] extern crate slog;
extern crate slog_term;
// SERIALIZING
#[macro_use] extern crate serde_derive;
extern crate serde_json;
extern crate csv;
// MISC
#[macro_use] extern crate lazy_static;
extern crate fnv;
extern crate rand;
extern crate regex;
extern crate thiserror;

// COMPONENTS
pub mod config;
pub mod error;
pub mod link_graph;
pub mod rank;

pub use config::RankConfig;
pub use error::{RankError, Result};
pub use link_graph::{crawl, Entry, LinkGraph};
pub use rank::{iterate_rank, normalize, sample_rank, transition, write_csv, RankMap};

use slog::{Drain, Logger};
use std::sync::Mutex;

/// Root logger writing compact records to stderr.
pub fn new_logger() -> Logger {
    let decorator = slog_term::PlainDecorator::new(std::io::stderr());
    let drain = slog_term::CompactFormat::new(decorator).build();
    Logger::root(Mutex::new(drain).fuse(), o!())
}

/// Logger that swallows everything; handy for library callers and tests.
pub fn quiet_logger() -> Logger {
    Logger::root(slog::Discard, o!())
}
