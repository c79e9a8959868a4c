// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single vertical lane of a section.

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Rect, Size};

use crate::types::{ItemId, Placement};

/// One fixed-width vertical strip that accumulates items top to bottom.
///
/// A column starts empty with its frame collapsed onto its starting offset.
/// Every appended item lands directly below the previous one, separated by the
/// column's inter-item spacing, so the frame only ever grows downward.
#[derive(Clone, Debug)]
pub struct Column {
    index: usize,
    width: f64,
    spacing: f64,
    frame: Rect,
    placements: Vec<Placement>,
}

impl Column {
    /// Creates an empty column whose bottom edge is `min_y`.
    #[must_use]
    pub fn new(index: usize, width: f64, min_x: f64, min_y: f64, spacing: f64) -> Self {
        Self {
            index,
            width,
            spacing,
            frame: Rect::new(min_x, min_y, min_x + width, min_y),
            placements: Vec::new(),
        }
    }

    /// Position of this column among its section's columns.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Width of the column, before rounding.
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Left edge of the column.
    #[must_use]
    pub const fn min_x(&self) -> f64 {
        self.frame.x0
    }

    /// Union of the starting strip and every placed item.
    #[must_use]
    pub const fn frame(&self) -> Rect {
        self.frame
    }

    /// Lowest occupied y-coordinate; the starting offset while empty.
    #[must_use]
    pub const fn bottom_edge(&self) -> f64 {
        self.frame.y1
    }

    /// Placements in the order they were appended.
    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Number of items placed in this column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Returns `true` if no item has been placed in this column.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Returns a copy of this column with one more item placed at its bottom.
    ///
    /// See [`Column::append`] for the geometry.
    #[must_use]
    pub fn appended(&self, natural_size: Size, id: ItemId) -> Self {
        let mut next = self.clone();
        next.append(natural_size, id);
        next
    }

    /// Places an item of the given natural size at the bottom of the column.
    ///
    /// The item keeps the aspect ratio of `natural_size` and is scaled to the
    /// column width. Both the placed width and height are floored so adjacent
    /// columns sharing fractional boundaries never overlap. The first item sits
    /// at the starting offset; later items sit one spacing below the previous
    /// bottom edge.
    ///
    /// Returns the placement that was recorded.
    pub fn append(&mut self, natural_size: Size, id: ItemId) -> Placement {
        let aspect_ratio = natural_size.height / natural_size.width;
        let y = if self.placements.is_empty() {
            self.bottom_edge()
        } else {
            self.bottom_edge() + self.spacing
        };
        let width = self.width.floor();
        let height = (self.width * aspect_ratio).floor();
        let frame = Rect::new(self.frame.x0, y, self.frame.x0 + width, y + height);

        let placement = Placement { id, frame };
        self.placements.push(placement);
        self.frame = self.frame.union(frame);
        placement
    }
}

/// Columns compare by position and bottom edge only.
///
/// This is an identity proxy for "the same lane at the same fill level", not
/// structural equality of the placed items.
impl PartialEq for Column {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.bottom_edge() == other.bottom_edge()
    }
}
