//! `lens-view` — render a JSON document with a breadcrumb header.
//!
//! Usage:
//!   lens-view ['<path>']
//!
//! The document is read from stdin. The optional first argument is a
//! node path such as `root.user.name`; when it names a step sequence,
//! the output opens with its breadcrumb trail.

use json_lens::cli::view;
use std::io::{self, Read, Write};
use tracing_subscriber::fmt::SubscriberBuilder;

fn main() {
    let _ = SubscriberBuilder::default()
        .with_max_level(tracing::Level::INFO)
        .try_init();

    let args: Vec<String> = std::env::args().collect();
    let path = args.get(1).cloned();

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match view(buf.trim(), path.as_deref()) {
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
