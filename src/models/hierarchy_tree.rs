//! Client-side mirror of one server hierarchy snapshot.

use compact_str::CompactString;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use slotmap::{new_key_type, SlotMap};

new_key_type! { pub struct NodeId; }

const PATH_SEPARATOR: char = '/';

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("malformed hierarchy snapshot: {0}")]
    Parse(String),
}

/// Wire shape of a hierarchy as served by the `/hierarchy` endpoint.
///
/// Only the naming skeleton is kept; graph bodies, rules and any other
/// fields the server attaches are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchySnapshot {
    pub name: CompactString,
    #[serde(default)]
    pub children: Vec<HierarchySnapshot>,
}

impl HierarchySnapshot {
    pub fn new(name: impl Into<CompactString>, children: Vec<HierarchySnapshot>) -> Self {
        Self {
            name: name.into(),
            children,
        }
    }

    pub fn leaf(name: impl Into<CompactString>) -> Self {
        Self::new(name, Vec::new())
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, TreeError> {
        let snapshot: Self =
            serde_json::from_value(value).map_err(|e| TreeError::Parse(e.to_string()))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    fn validate(&self) -> Result<(), TreeError> {
        if self.name.is_empty() {
            return Err(TreeError::Parse("root has an empty name".to_string()));
        }

        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            let mut seen = FxHashSet::default();
            for child in &node.children {
                if child.name.is_empty() {
                    return Err(TreeError::Parse(format!(
                        "child of {:?} has an empty name",
                        node.name
                    )));
                }
                if !seen.insert(child.name.as_str()) {
                    return Err(TreeError::Parse(format!(
                        "duplicate child {:?} under {:?}",
                        child.name, node.name
                    )));
                }
                stack.push(child);
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
struct Node {
    name: CompactString,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Debug, Default)]
pub struct HierarchyTree {
    arena: SlotMap<NodeId, Node>,
    root: Option<NodeId>,
}

impl HierarchyTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: &HierarchySnapshot) -> Result<Self, TreeError> {
        let mut tree = Self::new();
        tree.load_snapshot(snapshot)?;
        Ok(tree)
    }

    /// Replaces every node with the content of `value`.
    ///
    /// On error the previous snapshot is left untouched.
    pub fn load(&mut self, value: serde_json::Value) -> Result<(), TreeError> {
        let snapshot = HierarchySnapshot::from_value(value)?;
        self.rebuild(&snapshot);
        Ok(())
    }

    pub fn load_snapshot(&mut self, snapshot: &HierarchySnapshot) -> Result<(), TreeError> {
        snapshot.validate()?;
        self.rebuild(snapshot);
        Ok(())
    }

    fn rebuild(&mut self, snapshot: &HierarchySnapshot) {
        // Clearing bumps slot versions, so ids handed out for the previous
        // snapshot stop resolving.
        self.arena.clear();

        let root = self.arena.insert(Node {
            name: snapshot.name.clone(),
            parent: None,
            children: Vec::with_capacity(snapshot.children.len()),
        });

        let mut stack: Vec<(NodeId, &HierarchySnapshot)> = vec![(root, snapshot)];
        while let Some((parent, node)) = stack.pop() {
            for child in &node.children {
                let id = self.arena.insert(Node {
                    name: child.name.clone(),
                    parent: Some(parent),
                    children: Vec::with_capacity(child.children.len()),
                });
                if let Some(parent_node) = self.arena.get_mut(parent) {
                    parent_node.children.push(id);
                }
                stack.push((id, child));
            }
        }

        self.root = Some(root);
    }

    pub fn is_loaded(&self) -> bool {
        self.root.is_some()
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.arena.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.arena.get(id).map(|n| n.name.as_str())
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.arena.get(id).and_then(|n| n.parent)
    }

    /// Direct children in snapshot order; empty for leaves and unknown ids.
    pub fn sons(&self, id: NodeId) -> &[NodeId] {
        self.arena
            .get(id)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_navigable(&self, id: NodeId) -> bool {
        !self.sons(id).is_empty()
    }

    pub fn is_child_of(&self, id: NodeId, parent: NodeId) -> bool {
        self.contains(id) && self.parent(id) == Some(parent)
    }

    pub fn child_by_name(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.sons(parent)
            .iter()
            .copied()
            .find(|&child| self.name(child) == Some(name))
    }

    /// Ancestors from the root down to `id`, inclusive.
    pub fn tree_path(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut current = Some(id);
        while let Some(node_id) = current {
            let Some(node) = self.arena.get(node_id) else {
                break;
            };
            path.push(node_id);
            current = node.parent;
        }
        path.reverse();
        path
    }

    pub fn depth(&self, id: NodeId) -> usize {
        self.tree_path(id).len()
    }

    pub fn abs_path(&self, id: NodeId) -> Option<String> {
        if !self.contains(id) {
            return None;
        }

        let mut path = String::new();
        for node_id in self.tree_path(id) {
            let name = self.name(node_id).unwrap_or_default();
            if !path.is_empty() && !path.ends_with(PATH_SEPARATOR) {
                path.push(PATH_SEPARATOR);
            }
            path.push_str(name);
        }
        Some(path)
    }

    pub fn names_of(&self, ids: &[NodeId]) -> Vec<String> {
        ids.iter()
            .filter_map(|&id| self.name(id).map(str::to_string))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/hierarchy_tree.rs"]
mod tests;
