// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public value types: item identifiers, placements, and content insets.

use kurbo::Rect;

/// Identifier of an item: its section index plus its index within that section.
///
/// Ordering is section-major, which matches the order items are fed to the
/// layout pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId {
    /// Index of the section containing the item.
    pub section: usize,
    /// Index of the item within its section.
    pub item: usize,
}

impl ItemId {
    /// Creates an identifier for `item` in `section`.
    #[must_use]
    pub const fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }
}

/// The computed frame of a single item.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    /// The item this placement belongs to.
    pub id: ItemId,
    /// Frame in content coordinates.
    pub frame: Rect,
}

impl Placement {
    /// A zero-sized placement at the origin, returned for lookups that miss.
    #[must_use]
    pub const fn placeholder(id: ItemId) -> Self {
        Self {
            id,
            frame: Rect::ZERO,
        }
    }
}

/// Horizontal content insets of the host container.
///
/// Only the leading and trailing edges affect the layout; vertical insets are
/// a scrolling concern of the host.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Insets {
    /// Inset from the left edge of the container.
    pub left: f64,
    /// Inset from the right edge of the container.
    pub right: f64,
}

impl Insets {
    /// No insets.
    pub const ZERO: Self = Self {
        left: 0.0,
        right: 0.0,
    };

    /// Creates insets from the left and right edges.
    #[must_use]
    pub const fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }

    /// Sum of both edges.
    #[must_use]
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }
}
