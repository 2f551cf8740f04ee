use std::collections::HashMap;
use std::io::Read;

use generational_arena::Index;
use tracing::{debug, instrument};

use crate::arena::{Company, CompanyArena};
use crate::errors::{TreeError, TreeResult};

/// Incremental company graph builder.
///
/// Consumes relation rows in arbitrary order: a child row may arrive before
/// its parent row. Children waiting on an unseen parent are queued per parent
/// id and moved into the parent node exactly once when its row arrives.
pub struct GraphBuilder {
    arena: CompanyArena,
    /// Not-yet-seen parent id to the child indices waiting on it
    pending: HashMap<String, Vec<Index>>,
    /// Nodes whose parent_id is empty
    roots: Vec<Index>,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            arena: CompanyArena::new(),
            pending: HashMap::new(),
            roots: Vec::new(),
        }
    }

    /// Build the full graph from a company relation table.
    ///
    /// Expects csv with a header row and `company_id,name,parent` columns.
    /// Field quoting is handled by the csv reader.
    #[instrument(level = "debug", skip(self, reader))]
    pub fn build_from_csv<R: Read>(mut self, reader: R) -> TreeResult<CompanyArena> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        for (row, record) in rdr.records().enumerate() {
            let record = record?;
            let company = Company {
                id: field(&record, 0, row)?.to_string(),
                name: field(&record, 1, row)?.to_string(),
                parent_id: field(&record, 2, row)?.to_string(),
            };
            self.insert(company)?;
        }

        self.finish()
    }

    /// Add one company row.
    ///
    /// Children that arrived before this row are attached now; the queued
    /// list is moved out of the pending map, never copied.
    pub fn insert(&mut self, company: Company) -> TreeResult<()> {
        if self.arena.lookup(&company.id).is_some() {
            return Err(TreeError::DuplicateCompany(company.id));
        }
        let company_id = company.id.clone();
        let parent_id = company.parent_id.clone();

        let parent_idx = if parent_id.is_empty() {
            None
        } else {
            self.arena.lookup(&parent_id)
        };
        let node_idx = self.arena.insert_node(company, parent_idx);

        if let Some(waiting) = self.pending.remove(&company_id) {
            for child in waiting {
                self.arena.attach_child(node_idx, child);
            }
        }

        if parent_id.is_empty() {
            self.roots.push(node_idx);
        } else if parent_idx.is_none() {
            // parent not yet visited in row iteration
            self.pending.entry(parent_id).or_default().push(node_idx);
        }

        Ok(())
    }

    /// Validate the finished graph: all parents resolved, exactly one root.
    #[instrument(level = "debug", skip(self))]
    pub fn finish(mut self) -> TreeResult<CompanyArena> {
        if let Some((parent_id, children)) = self.pending.iter().next() {
            let child = children
                .first()
                .and_then(|&c| self.arena.get(c))
                .map(|n| n.company.id.clone())
                .unwrap_or_default();
            return Err(TreeError::UnresolvedParent {
                child,
                parent_id: parent_id.clone(),
            });
        }

        match self.roots.as_slice() {
            [] if self.arena.is_empty() => {}
            // all parents resolved yet nobody is parentless: the rows cycle
            [] => return Err(TreeError::MissingRoot),
            [root] => {
                let root = *root;
                self.arena.set_root(root);
            }
            many => {
                let ids = many
                    .iter()
                    .filter_map(|&r| self.arena.get(r))
                    .map(|n| n.company.id.clone())
                    .collect();
                return Err(TreeError::MultipleRoots(ids));
            }
        }

        debug!(companies = self.arena.len(), "company graph built");
        Ok(self.arena)
    }
}

fn field<'r>(record: &'r csv::StringRecord, column: usize, row: usize) -> TreeResult<&'r str> {
    // header occupies line 1
    record.get(column).ok_or(TreeError::MissingColumn {
        table: "company_relations",
        column,
        row: row + 2,
    })
}
