//! `lens-delete` — delete the node at a path.
//!
//! Usage:
//!   lens-delete '<path>'
//!
//! The document is read from stdin. The path is the first argument,
//! e.g. `root.user.name` or `root.items[0]`. A path that names nothing
//! returns the document unchanged.

use json_lens::cli::delete;
use std::io::{self, Read, Write};
use tracing_subscriber::fmt::SubscriberBuilder;

fn main() {
    let _ = SubscriberBuilder::default()
        .with_max_level(tracing::Level::INFO)
        .try_init();

    let args: Vec<String> = std::env::args().collect();
    let path = match args.get(1) {
        Some(p) => p.clone(),
        None => {
            eprintln!("First argument must be a node path.");
            std::process::exit(1);
        }
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match delete(buf.trim(), &path) {
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
