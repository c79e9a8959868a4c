// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared host types for the cascade demos.

use kurbo::{Rect, Size};
use understory_cascade::{CascadeSource, Insets, ItemId};

/// One titled group of photos.
#[derive(Clone, Debug)]
pub struct Album {
    /// Display title; not used by the layout.
    pub title: &'static str,
    /// Columns to lay the album out in, or `None` for the default.
    pub columns: Option<usize>,
    /// Natural pixel size of each photo.
    pub photos: Vec<Size>,
}

/// A scrolling photo feed, standing in for a host container.
#[derive(Clone, Debug)]
pub struct PhotoFeed {
    /// Albums, one per section.
    pub albums: Vec<Album>,
    /// Container bounds in window coordinates.
    pub bounds: Rect,
    /// Horizontal content insets.
    pub insets: Insets,
}

impl PhotoFeed {
    /// Builds a feed with a deterministic mix of portrait, landscape, and
    /// square photos.
    pub fn sample(width: f64, height: f64) -> Self {
        let shapes = [
            Size::new(3000.0, 4000.0),
            Size::new(4000.0, 3000.0),
            Size::new(2048.0, 2048.0),
            Size::new(1080.0, 1920.0),
            Size::new(1920.0, 1080.0),
        ];
        let album = |title, columns, count: usize, skip: usize| Album {
            title,
            columns,
            photos: shapes.iter().copied().cycle().skip(skip).take(count).collect(),
        };
        Self {
            albums: vec![
                album("Highlights", Some(2), 5, 0),
                album("Holiday", Some(3), 14, 1),
                // Uses the default column count.
                album("Scans", None, 2, 3),
            ],
            bounds: Rect::new(0.0, 0.0, width, height),
            insets: Insets::new(8.0, 8.0),
        }
    }
}

impl CascadeSource for PhotoFeed {
    fn section_count(&self) -> usize {
        self.albums.len()
    }

    fn item_count(&self, section: usize) -> usize {
        self.albums.get(section).map_or(0, |a| a.photos.len())
    }

    fn column_count(&self, section: usize) -> Option<usize> {
        self.albums.get(section)?.columns
    }

    fn item_size(&self, id: ItemId) -> Option<Size> {
        self.albums.get(id.section)?.photos.get(id.item).copied()
    }

    fn container_width(&self) -> Option<f64> {
        Some(self.bounds.width())
    }

    fn content_insets(&self) -> Insets {
        self.insets
    }
}
