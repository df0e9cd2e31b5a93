//! `lens-tree` — project a JSON document into its node tree.
//!
//! Usage:
//!   lens-tree
//!
//! The document is read from stdin; the tree is printed to stdout as
//! JSON, one node per document value.

use json_lens::cli::project_tree;
use std::io::{self, Read, Write};
use tracing_subscriber::fmt::SubscriberBuilder;

fn main() {
    let _ = SubscriberBuilder::default()
        .with_max_level(tracing::Level::INFO)
        .try_init();

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match project_tree(buf.trim()) {
        Ok(result) => {
            io::stdout().write_all(result.as_bytes()).unwrap();
            io::stdout().write_all(b"\n").unwrap();
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
