//! Management hierarchy assembly.
//!
//! Walks manager references downward from a root employee, one store query
//! per node, and nests the results into a [`TreeNode`].

use std::collections::HashSet;

use sea_orm::DatabaseConnection;
use tracing::{debug, warn};

use crate::db::employee;
use crate::error::{AppError, Result};
use crate::models::TreeNode;

/// Deepest hierarchy served, counting the root as level 1.
pub const MAX_TREE_DEPTH: usize = 256;

/// Build the tree of everyone reporting, directly or not, to `root_id`.
///
/// Children keep the order of [`employee::list_subordinates`]. Reaching an
/// employee twice means the manager chain loops, which fails with
/// [`AppError::CycleDetected`] instead of recursing forever. Chains longer
/// than [`MAX_TREE_DEPTH`] fail with [`AppError::TreeTooDeep`].
pub async fn build_tree(db: &DatabaseConnection, root_id: i32) -> Result<TreeNode> {
    let (root, team) = employee::get_with_team(db, root_id)
        .await?
        .ok_or_else(|| AppError::not_found("root not found"))?;

    // Flat arena: a child's index is always greater than its parent's.
    let mut nodes = vec![TreeNode::leaf(&root, team.as_ref())];
    let mut parents: Vec<Option<usize>> = vec![None];
    let mut visited = HashSet::from([root.id]);
    let mut pending = vec![(0, 1)];

    while let Some((index, depth)) = pending.pop() {
        let manager_id = nodes[index].id;
        for (subordinate, team) in employee::list_subordinates(db, manager_id).await? {
            if !visited.insert(subordinate.id) {
                warn!(root_id, employee_id = subordinate.id, "Management cycle detected");
                return Err(AppError::CycleDetected(subordinate.id));
            }
            if depth >= MAX_TREE_DEPTH {
                warn!(root_id, employee_id = subordinate.id, "Management tree too deep");
                return Err(AppError::TreeTooDeep {
                    root_id,
                    limit: MAX_TREE_DEPTH,
                });
            }
            nodes.push(TreeNode::leaf(&subordinate, team.as_ref()));
            parents.push(Some(index));
            pending.push((nodes.len() - 1, depth + 1));
        }
    }

    debug!(root_id, nodes = nodes.len(), "Built management tree");
    Ok(assemble(nodes, parents))
}

/// Fold the arena into nested nodes, last index first.
///
/// Siblings are attached in reverse, so each node's children are flipped
/// back once all of them have been attached.
fn assemble(mut nodes: Vec<TreeNode>, mut parents: Vec<Option<usize>>) -> TreeNode {
    loop {
        let (Some(mut node), Some(parent)) = (nodes.pop(), parents.pop()) else {
            unreachable!("arena always contains the root");
        };
        node.children.reverse();
        match parent {
            Some(parent) => nodes[parent].children.push(node),
            None => return node,
        }
    }
}
