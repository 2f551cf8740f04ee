//! Depth-first tree rendering over the company graph.
//!
//! One traversal engine drives both output modes: an explicit stack of
//! frames, each holding a cursor into a node's pre-sorted children. Expand
//! mode descends into every child; from-root mode descends only along the
//! precomputed root-to-target path, so siblings of path nodes are listed but
//! not expanded and the target itself is expanded exactly one level.

use std::io::Write;

use generational_arena::Index;
use tracing::{debug, instrument};

use crate::arena::{Company, CompanyArena};
use crate::counts::{AggregateCounter, ParcelCounts};
use crate::errors::{TreeError, TreeResult};

/// Left margin separating from-root body lines from the root line.
const FROM_ROOT_MARGIN: &str = "  ";

/// Resumable cursor into a node's sorted children, kept on the traversal
/// stack across descents.
#[derive(Debug)]
struct Frame {
    children: Vec<Index>,
    cursor: usize,
}

/// Which children the traversal descends into.
enum Descent<'a> {
    /// Every child.
    All,
    /// Only the child matching the next element of the guiding path.
    Guided(&'a [Index]),
}

pub struct TreeRenderer<'a> {
    arena: &'a CompanyArena,
    counter: AggregateCounter<'a>,
}

impl<'a> TreeRenderer<'a> {
    pub fn new(arena: &'a CompanyArena, counts: &'a ParcelCounts) -> Self {
        Self {
            arena,
            counter: AggregateCounter::new(arena, counts),
        }
    }

    /// Write the root line and the path-guided view down to `company_id`.
    ///
    /// The target line is starred; when the target is the root, the root
    /// line itself carries the star. Unknown ids write nothing.
    #[instrument(level = "debug", skip(self, writer))]
    pub fn render_from_root<W: Write>(&mut self, company_id: &str, writer: &mut W) -> TreeResult<()> {
        let target = match self.arena.lookup(company_id) {
            Some(idx) => idx,
            None => {
                debug!("unknown company {}, nothing to render", company_id);
                return Ok(());
            }
        };
        let path = self.arena.path_from_root(target)?;
        let root = path[0];

        self.write_line(writer, root, 0, "", root == target)?;
        self.run(root, Descent::Guided(&path), FROM_ROOT_MARGIN, Some(target), writer)
    }

    /// Write every descendant of `company_id`, full depth-first pre-order.
    ///
    /// The target's own line is not printed and no line is starred. Unknown
    /// ids are an error in this mode.
    #[instrument(level = "debug", skip(self, writer))]
    pub fn render_expand<W: Write>(&mut self, company_id: &str, writer: &mut W) -> TreeResult<()> {
        let target = self
            .arena
            .lookup(company_id)
            .ok_or_else(|| TreeError::CompanyNotFound(company_id.to_string()))?;
        self.run(target, Descent::All, "", None, writer)
    }

    /// Exhaust all child cursors, drilling only where `descent` allows.
    fn run<W: Write>(
        &mut self,
        start: Index,
        descent: Descent<'_>,
        margin: &str,
        starred: Option<Index>,
        writer: &mut W,
    ) -> TreeResult<()> {
        let mut frames = vec![self.frame_for(start)];

        while let Some(frame) = frames.last_mut() {
            if frame.cursor >= frame.children.len() {
                frames.pop();
                continue;
            }
            let child = frame.children[frame.cursor];
            frame.cursor += 1;

            // line depth equals the number of active frames
            self.write_line(writer, child, frames.len(), margin, starred == Some(child))?;

            let descend = match &descent {
                Descent::All => true,
                Descent::Guided(path) => path.get(frames.len()) == Some(&child),
            };
            if descend {
                let next = self.frame_for(child);
                frames.push(next);
            }
        }

        Ok(())
    }

    fn frame_for(&self, idx: Index) -> Frame {
        Frame {
            children: self.arena.sorted_children(idx),
            cursor: 0,
        }
    }

    fn write_line<W: Write>(
        &mut self,
        writer: &mut W,
        idx: Index,
        depth: usize,
        margin: &str,
        starred: bool,
    ) -> TreeResult<()> {
        let count = self.counter.aggregate(idx);
        let node = self
            .arena
            .get(idx)
            .ok_or_else(|| TreeError::Internal(format!("dangling node index {:?}", idx)))?;

        writer.write_all(margin.as_bytes())?;
        writer.write_all(company_line(depth, &node.company, count, starred).as_bytes())?;
        Ok(())
    }
}

/// One output line for a company at the given depth.
pub fn company_line(depth: usize, company: &Company, count: u64, starred: bool) -> String {
    let margin = if depth > 0 {
        format!("{}- ", "| ".repeat(depth))
    } else {
        String::new()
    };
    let plural = if count == 1 { "" } else { "s" };
    let stars = if starred { " ***" } else { "" };
    format!(
        "{}{}; {}; owner of {} land parcel{}{}\n",
        margin, company.id, company.name, count, plural, stars
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company(id: &str, name: &str) -> Company {
        Company {
            id: id.to_string(),
            name: name.to_string(),
            parent_id: String::new(),
        }
    }

    #[test]
    fn given_depth_and_count_when_formatting_line_then_matches_layout() {
        let cases = [
            (1, company("a", "comp A"), 1, "| - a; comp A; owner of 1 land parcel\n"),
            (2, company("b", "comp B"), 0, "| | - b; comp B; owner of 0 land parcels\n"),
            (0, company("c", "comp C"), 10, "c; comp C; owner of 10 land parcels\n"),
        ];
        for (depth, company, count, expected) in cases {
            assert_eq!(company_line(depth, &company, count, false), expected);
        }
    }

    #[test]
    fn given_starred_company_when_formatting_line_then_appends_stars() {
        let text = company_line(1, &company("a", "comp A"), 1, true);
        assert_eq!(text, "| - a; comp A; owner of 1 land parcel ***\n");
    }
}
