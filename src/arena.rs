use std::collections::HashMap;
use std::fmt;

use generational_arena::{Arena, Index};
use itertools::Itertools;
use tracing::instrument;

use crate::errors::{TreeError, TreeResult};

/// One row of the company relation table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
    /// Unique company identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Parent company id; the empty string means the company has no parent
    pub parent_id: String,
}

impl fmt::Display for Company {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}; {}", self.id, self.name)
    }
}

/// Tree node in the arena-based hierarchy structure.
#[derive(Debug)]
pub struct CompanyNode {
    /// Company data for this node
    pub company: Company,
    /// Index of the parent node in the arena, None for the root
    pub parent: Option<Index>,
    /// Indices of child nodes in the arena, insertion order
    pub children: Vec<Index>,
}

/// Arena-based company hierarchy with id lookup.
///
/// Uses generational arena for memory-safe node references and O(1) lookups.
/// Children are stored in insertion order; rendering and counting go through
/// `sorted_children` for ascending id order.
#[derive(Debug)]
pub struct CompanyArena {
    /// Arena storage for all nodes
    arena: Arena<CompanyNode>,
    /// Company id to arena index
    ids: HashMap<String, Index>,
    /// Index of the validated root node, None for empty graphs
    root: Option<Index>,
}

impl Default for CompanyArena {
    fn default() -> Self {
        Self::new()
    }
}

impl CompanyArena {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            ids: HashMap::new(),
            root: None,
        }
    }

    /// Insert a node, attaching it to `parent` when already known.
    pub(crate) fn insert_node(&mut self, company: Company, parent: Option<Index>) -> Index {
        let id = company.id.clone();
        let node_idx = self.arena.insert(CompanyNode {
            company,
            parent,
            children: Vec::new(),
        });

        if let Some(parent_idx) = parent {
            if let Some(parent) = self.arena.get_mut(parent_idx) {
                parent.children.push(node_idx);
            }
        }
        self.ids.insert(id, node_idx);

        node_idx
    }

    /// Link a child that arrived before its parent row.
    pub(crate) fn attach_child(&mut self, parent_idx: Index, child_idx: Index) {
        if let Some(parent) = self.arena.get_mut(parent_idx) {
            parent.children.push(child_idx);
        }
        if let Some(child) = self.arena.get_mut(child_idx) {
            child.parent = Some(parent_idx);
        }
    }

    pub(crate) fn set_root(&mut self, idx: Index) {
        self.root = Some(idx);
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn get(&self, idx: Index) -> Option<&CompanyNode> {
        self.arena.get(idx)
    }

    /// Arena index for a company id.
    pub fn lookup(&self, company_id: &str) -> Option<Index> {
        self.ids.get(company_id).copied()
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Children of a node in ascending lexicographic id order.
    ///
    /// Output order is a correctness requirement for rendering, independent
    /// of the order the rows arrived in.
    pub fn sorted_children(&self, idx: Index) -> Vec<Index> {
        let node = match self.get(idx) {
            Some(node) => node,
            None => return Vec::new(),
        };
        node.children
            .iter()
            .copied()
            .filter_map(|child| self.get(child).map(|n| (n.company.id.as_str(), child)))
            .sorted_by(|a, b| a.0.cmp(b.0))
            .map(|(_, child)| child)
            .collect()
    }

    /// Ordered root-to-target index sequence, following parent links upward.
    ///
    /// Ends at the first ancestor whose `parent_id` is the empty string. A
    /// non-empty `parent_id` without a resolved parent link surfaces the
    /// ingestion invariant violation instead of masking it.
    #[instrument(level = "debug", skip(self))]
    pub fn path_from_root(&self, target: Index) -> TreeResult<Vec<Index>> {
        let mut path = vec![target];
        loop {
            let front = path[0];
            let node = self
                .get(front)
                .ok_or_else(|| TreeError::Internal(format!("dangling node index {:?}", front)))?;
            // allow for empty string, never compared against an absent sentinel
            if node.company.parent_id.is_empty() {
                break;
            }
            let parent = node.parent.ok_or_else(|| TreeError::UnresolvedParent {
                child: node.company.id.clone(),
                parent_id: node.company.parent_id.clone(),
            })?;
            path.insert(0, parent);
        }
        Ok(path)
    }
}
