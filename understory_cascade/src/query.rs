// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Read-only queries over a computed set of sections.

use kurbo::Rect;

use crate::section::Section;
use crate::types::{ItemId, Placement};

/// Placements whose frame overlaps `rect`.
///
/// Results come in flatten order: section order, then column order, then
/// placement order within each column. They are not sorted by position.
///
/// Edges count as part of a frame, so a frame that only touches `rect` along
/// an edge is included.
pub fn attributes_intersecting(
    sections: &[Section],
    rect: Rect,
) -> impl Iterator<Item = Placement> + '_ {
    sections
        .iter()
        .flat_map(Section::placements)
        .filter(move |placement| overlaps(placement.frame, rect))
        .copied()
}

/// Placement of the item `id`.
///
/// A miss (unknown section or item, or an item that could not be placed) yields
/// [`Placement::placeholder`] rather than failing.
#[must_use]
pub fn attributes_for(sections: &[Section], id: ItemId) -> Placement {
    sections
        .get(id.section)
        .and_then(|section| section.placement_of(id.item))
        .copied()
        .unwrap_or_else(|| Placement::placeholder(id))
}

/// Bottom edge of the tallest section, or `0.0` without sections.
#[must_use]
pub fn content_height(sections: &[Section]) -> f64 {
    sections
        .iter()
        .map(Section::bottom_edge)
        .reduce(f64::max)
        .unwrap_or(0.0)
}

fn overlaps(a: Rect, b: Rect) -> bool {
    a.x0 <= b.x1 && b.x0 <= a.x1 && a.y0 <= b.y1 && b.y0 <= a.y1
}
