use super::EntryKind;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NodeKind {
    File,
    Directory,
}

impl From<EntryKind> for NodeKind {
    fn from(kind: EntryKind) -> Self {
        match kind {
            EntryKind::Directory => NodeKind::Directory,
            EntryKind::File | EntryKind::Symlink | EntryKind::Other => NodeKind::File,
        }
    }
}

/// One entry of the rendered tree.
///
/// Nodes own their children; counts are accumulated bottom-up when a
/// directory is assembled, so no parent link is kept.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Node {
    pub name: String,
    pub kind: NodeKind,
    pub children: Vec<Node>,
    /// Number of nodes strictly below this one.
    pub descendant_count: usize,
    /// Own name followed by the connector and continuation tokens of the
    /// rows below it. Empty until the line pass has run.
    pub branch_tokens: Vec<String>,
}

impl Node {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::File,
            children: Vec::new(),
            descendant_count: 0,
            branch_tokens: Vec::new(),
        }
    }

    pub fn directory(name: impl Into<String>, children: Vec<Node>) -> Self {
        let descendant_count = children
            .iter()
            .map(|child| child.descendant_count + 1)
            .sum();
        Self {
            name: name.into(),
            kind: NodeKind::Directory,
            children,
            descendant_count,
            branch_tokens: Vec::new(),
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == NodeKind::Directory
    }
}
