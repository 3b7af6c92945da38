//! Render a directory subtree as an annotated text diagram.

pub mod cli;
pub mod core;
pub mod error;
pub mod fs;
pub mod logging;
pub mod models;
pub mod save;

pub use crate::core::{WalkOptions, compute_lines, render, render_tree, walk_dir};
pub use error::TreeError;
pub use models::{Node, NodeKind};
