//! json-lens — path-addressable JSON exploration and light editing.
//!
//! A document is projected into an addressable tree whose node paths
//! feed structural edits (delete, rename key) and breadcrumb display.
//! Every mutation clones its input and returns a new document; sibling
//! key order is preserved throughout.

// Pure core over the shared path grammar
pub mod breadcrumb;
pub mod edit;
pub mod render;
pub mod tree;

// Stateful layer
pub mod session;
pub mod storage;

pub mod cli;
