//! landtree: renders a company ownership hierarchy as an indented text tree
//! annotated with aggregate land parcel counts.
//!
//! The library core is I/O-agnostic: the two entry points consume already
//! open readers for the relation and ownership tables and write lines to a
//! caller-supplied writer. Opening files, resolving paths and selecting the
//! output stream belong to the CLI layer.

use std::io::{Read, Write};

pub mod arena;
pub mod builder;
pub mod cli;
pub mod config;
pub mod counts;
pub mod errors;
pub mod exitcode;
pub mod render;
pub mod util;

pub use arena::{Company, CompanyArena, CompanyNode};
pub use builder::GraphBuilder;
pub use counts::{AggregateCounter, ParcelCounts};
pub use errors::{TreeError, TreeResult};
pub use render::TreeRenderer;

/// Write the from-root view for `company_id` to `writer`.
///
/// Reads the company relation table (`company_id,name,parent`) from
/// `relations` and the land ownership table (`land_id,company_id`) from
/// `ownership`, both csv with a header row. Prints the root line, then the
/// path down to the target with one level of siblings at each step; the
/// target line is starred. An unknown company id writes nothing.
pub fn from_root<R1, R2, W>(
    company_id: &str,
    relations: R1,
    ownership: R2,
    writer: &mut W,
) -> TreeResult<()>
where
    R1: Read,
    R2: Read,
    W: Write,
{
    let arena = GraphBuilder::new().build_from_csv(relations)?;
    let counts = ParcelCounts::from_csv(ownership)?;
    TreeRenderer::new(&arena, &counts).render_from_root(company_id, writer)
}

/// Write the full subtree beneath `company_id` to `writer`.
///
/// Same input conventions as [`from_root`]. Prints every descendant in
/// depth-first pre-order without the target's own line. An unknown company
/// id is reported as [`TreeError::CompanyNotFound`].
pub fn expand<R1, R2, W>(
    company_id: &str,
    relations: R1,
    ownership: R2,
    writer: &mut W,
) -> TreeResult<()>
where
    R1: Read,
    R2: Read,
    W: Write,
{
    let arena = GraphBuilder::new().build_from_csv(relations)?;
    let counts = ParcelCounts::from_csv(ownership)?;
    TreeRenderer::new(&arena, &counts).render_expand(company_id, writer)
}
