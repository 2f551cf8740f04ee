//! Parcel ownership counts: direct per-company tallies from the ownership
//! table and memoized subtree aggregates over the company graph.

use std::collections::HashMap;
use std::io::Read;

use generational_arena::Index;
use tracing::instrument;

use crate::arena::CompanyArena;
use crate::errors::{TreeError, TreeResult};

/// Direct parcel count per company id.
///
/// Built by grouping ownership rows; company ids without rows default to 0.
#[derive(Debug, Default)]
pub struct ParcelCounts {
    direct: HashMap<String, u64>,
}

impl ParcelCounts {
    /// Tally the land ownership table.
    ///
    /// Expects csv with a header row and `land_id,company_id` columns.
    #[instrument(level = "debug", skip(reader))]
    pub fn from_csv<R: Read>(reader: R) -> TreeResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let mut direct: HashMap<String, u64> = HashMap::new();
        for (row, record) in rdr.records().enumerate() {
            let record = record?;
            let company_id = record.get(1).ok_or(TreeError::MissingColumn {
                table: "land_ownership",
                column: 1,
                row: row + 2,
            })?;
            *direct.entry(company_id.to_string()).or_insert(0) += 1;
        }

        Ok(Self { direct })
    }

    /// Parcels owned by the company itself, excluding descendants.
    pub fn direct(&self, company_id: &str) -> u64 {
        self.direct.get(company_id).copied().unwrap_or(0)
    }
}

/// Memoizing subtree aggregate counter.
///
/// The aggregate of a node is its direct count plus the sum of the
/// aggregates of all its children. Pure with respect to the graph and the
/// direct counts; the memo table lives only as long as the counter.
pub struct AggregateCounter<'a> {
    arena: &'a CompanyArena,
    counts: &'a ParcelCounts,
    memo: HashMap<Index, u64>,
}

impl<'a> AggregateCounter<'a> {
    pub fn new(arena: &'a CompanyArena, counts: &'a ParcelCounts) -> Self {
        Self {
            arena,
            counts,
            memo: HashMap::new(),
        }
    }

    /// Direct count plus the aggregate counts of all descendants.
    pub fn aggregate(&mut self, idx: Index) -> u64 {
        if let Some(&cached) = self.memo.get(&idx) {
            return cached;
        }

        let arena = self.arena;
        let node = match arena.get(idx) {
            Some(node) => node,
            None => return 0,
        };

        let mut total = self.counts.direct(&node.company.id);
        for &child in &node.children {
            total += self.aggregate(child);
        }

        self.memo.insert(idx, total);
        total
    }
}
