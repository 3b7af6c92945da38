use crate::error::{Result, TreeError};
use crate::models::Node;

use super::lines::compute_lines;

/// Trailing marker appended to every row, leaving room for a comment.
pub const ANNOTATION: &str = "  // ";

/// Lay the per-node token columns out as rows, one row per node.
///
/// Each node writes its tokens down the rows starting at its own row;
/// rows are claimed in pre-order so a subtree occupies the rows right
/// below its root. Fails when the line pass has not run.
pub fn render(root: &Node) -> Result<String> {
    let mut rows = vec![String::new(); root.descendant_count + 1];
    let mut height = 0;
    transpose(root, &mut rows, &mut height)?;

    let width = rows
        .iter()
        .map(|row| row.chars().count())
        .max()
        .unwrap_or(0);

    let lines: Vec<String> = rows
        .iter()
        .map(|row| format!("{row:<width$}{ANNOTATION}"))
        .collect();
    Ok(lines.join("\n"))
}

/// Run the line pass and render in one step.
pub fn render_tree(root: &mut Node) -> Result<String> {
    compute_lines(root);
    render(root)
}

fn transpose(node: &Node, rows: &mut [String], height: &mut usize) -> Result<()> {
    if node.branch_tokens.is_empty() {
        return Err(TreeError::InvalidArgument(format!(
            "branch lines of {} were not computed",
            node.name
        )));
    }

    for (row, token) in rows[*height..].iter_mut().zip(&node.branch_tokens) {
        row.push_str(token);
    }
    *height += 1;

    for child in &node.children {
        transpose(child, rows, height)?;
    }
    Ok(())
}
