//! `lens-rename` — rename the object key at a path.
//!
//! Usage:
//!   lens-rename '<path>' '<new-key>'
//!
//! The document is read from stdin. The path is the first argument and
//! the replacement key the second. Renaming an array element is an
//! error; a path that names nothing returns the document unchanged.

use json_lens::cli::rename;
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
    let new_key = match args.get(2) {
        Some(k) => k.clone(),
        None => {
            eprintln!("Second argument must be the new key name.");
            std::process::exit(1);
        }
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match rename(buf.trim(), &path, &new_key) {
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
