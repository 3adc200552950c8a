//! Management hierarchy node.

use serde::Serialize;

use crate::entities::{employees, teams};

/// One employee and, nested, everyone reporting to them.
///
/// `team` is omitted when the employee is unassigned and `children` is
/// omitted for leaves (never serialized as an empty array).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    pub id: i32,
    pub name: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Leaf node for `employee`, labelled with its team name if assigned.
    pub fn leaf(employee: &employees::Model, team: Option<&teams::Model>) -> Self {
        Self {
            id: employee.id,
            name: employee.name.clone(),
            title: employee.title.clone(),
            team: team.map(|t| t.name.clone()),
            children: Vec::new(),
        }
    }

    /// Number of nodes in this subtree, root included.
    #[cfg(test)]
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(TreeNode::size).sum::<usize>()
    }

    /// Depth of this subtree; a leaf has depth 1.
    #[cfg(test)]
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(TreeNode::depth).max().unwrap_or(0)
    }
}
