use std::iter;

use crate::models::Node;

pub const INTERIOR_BRANCH: &str = "├─ ";
pub const LAST_BRANCH: &str = "└─ ";
pub const VERTICAL: &str = "│  ";
pub const BLANK: &str = "   ";

/// Fill `branch_tokens` for every node below and including `node`.
///
/// A directory's tokens are its name, then for each child its connector
/// followed by one continuation token per descendant of that child, so
/// the sequence covers exactly the `1 + descendant_count` rows of the
/// subtree.
pub fn compute_lines(node: &mut Node) {
    let mut tokens = Vec::with_capacity(node.descendant_count + 1);
    tokens.push(node.name.clone());

    if node.is_dir() {
        let last = node.children.len().saturating_sub(1);
        for (index, child) in node.children.iter().enumerate() {
            let (connector, continuation) = if index == last {
                (LAST_BRANCH, BLANK)
            } else {
                (INTERIOR_BRANCH, VERTICAL)
            };
            tokens.push(connector.to_owned());
            if child.is_dir() {
                tokens.extend(iter::repeat_n(continuation.to_owned(), child.descendant_count));
            }
        }
    }

    node.branch_tokens = tokens;
    for child in &mut node.children {
        compute_lines(child);
    }
}
