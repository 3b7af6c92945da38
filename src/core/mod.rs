mod lines;
mod render;
mod walk;

pub use lines::{BLANK, INTERIOR_BRANCH, LAST_BRANCH, VERTICAL, compute_lines};
pub use render::{ANNOTATION, render, render_tree};
pub use walk::{ExcludePatterns, WalkOptions, root_display_name, walk_dir};
