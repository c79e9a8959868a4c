// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host-facing data source.

use kurbo::Size;

use crate::types::{Insets, ItemId};

/// Supplies section structure, per-section column counts, item sizes, and
/// container geometry to a [`CascadeLayout`](crate::CascadeLayout).
///
/// All methods are called synchronously during a layout pass. Column counts
/// and item sizes are optional; when a method returns `None` the layout falls
/// back to [`DEFAULT_COLUMN_COUNT`](crate::DEFAULT_COLUMN_COUNT) and
/// [`DEFAULT_ITEM_SIZE`](crate::DEFAULT_ITEM_SIZE).
pub trait CascadeSource {
    /// Number of sections.
    fn section_count(&self) -> usize;

    /// Number of items in `section`.
    fn item_count(&self, section: usize) -> usize;

    /// Number of columns in `section`.
    fn column_count(&self, section: usize) -> Option<usize> {
        let _ = section;
        None
    }

    /// Natural size of the item `id`. Only the aspect ratio is used.
    fn item_size(&self, id: ItemId) -> Option<Size> {
        let _ = id;
        None
    }

    /// Width of the host container, or `None` if there is no container yet.
    fn container_width(&self) -> Option<f64>;

    /// Horizontal content insets of the host container.
    fn content_insets(&self) -> Insets {
        Insets::ZERO
    }

    /// Container width minus the horizontal insets.
    fn effective_width(&self) -> Option<f64> {
        self.container_width()
            .map(|width| width - self.content_insets().horizontal())
    }
}

impl<S: CascadeSource + ?Sized> CascadeSource for &S {
    fn section_count(&self) -> usize {
        (**self).section_count()
    }

    fn item_count(&self, section: usize) -> usize {
        (**self).item_count(section)
    }

    fn column_count(&self, section: usize) -> Option<usize> {
        (**self).column_count(section)
    }

    fn item_size(&self, id: ItemId) -> Option<Size> {
        (**self).item_size(id)
    }

    fn container_width(&self) -> Option<f64> {
        (**self).container_width()
    }

    fn content_insets(&self) -> Insets {
        (**self).content_insets()
    }
}
