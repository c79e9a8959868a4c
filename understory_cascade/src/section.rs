// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A group of columns sharing one column count, filled greedily.

use alloc::vec::Vec;

use kurbo::Size;
use smallvec::SmallVec;

use crate::column::Column;
use crate::types::{ItemId, Placement};

/// Geometry shared by every column of a section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionGeometry {
    /// Number of columns to build.
    pub column_count: usize,
    /// Width of each column.
    pub column_width: f64,
    /// Horizontal gap between adjacent columns.
    pub line_spacing: f64,
    /// Vertical gap between consecutive items in a column.
    pub inter_item_spacing: f64,
    /// Top edge shared by all columns, usually the previous section's bottom edge.
    pub top_offset: f64,
}

/// Location of an item inside a section: `(column, row within column)`.
type Slot = (usize, usize);

/// One group of items laid out in a fixed number of columns.
///
/// Sections are built once per layout pass by [`Section::build`] and never
/// modified afterwards.
#[derive(Clone, Debug)]
pub struct Section {
    index: usize,
    item_count: usize,
    columns: SmallVec<[Column; 4]>,
    slots: Vec<Option<Slot>>,
}

impl Section {
    /// Lays out `item_count` items into the columns described by `geometry`.
    ///
    /// Columns are placed left to right, column `i` starting at
    /// `i * (column_width + line_spacing)`. Items are visited in order and each
    /// goes to the column with the smallest bottom edge; ties go to the column
    /// with the lowest index.
    ///
    /// With zero columns no item can be placed: the section keeps its item
    /// count but records no placements, and `item_size` is never called.
    pub fn build(
        index: usize,
        item_count: usize,
        geometry: SectionGeometry,
        mut item_size: impl FnMut(ItemId) -> Size,
    ) -> Self {
        let SectionGeometry {
            column_count,
            column_width,
            line_spacing,
            inter_item_spacing,
            top_offset,
        } = geometry;

        let mut columns: SmallVec<[Column; 4]> = (0..column_count)
            .map(|column_index| {
                let min_x = column_index as f64 * (column_width + line_spacing);
                Column::new(
                    column_index,
                    column_width,
                    min_x,
                    top_offset,
                    inter_item_spacing,
                )
            })
            .collect();

        let mut slots = Vec::with_capacity(item_count);
        for item in 0..item_count {
            let Some(target) = shortest_column(&columns) else {
                slots.push(None);
                continue;
            };
            let id = ItemId::new(index, item);
            let column = &mut columns[target];
            let row = column.len();
            column.append(item_size(id), id);
            slots.push(Some((target, row)));
        }

        Self {
            index,
            item_count,
            columns,
            slots,
        }
    }

    /// Index of this section within the layout.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Number of items the section was built for, placed or not.
    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.item_count
    }

    /// Columns in left-to-right order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Bottom edge of the tallest column, or `0.0` without columns.
    #[must_use]
    pub fn bottom_edge(&self) -> f64 {
        tallest_column(&self.columns)
            .map(|i| self.columns[i].bottom_edge())
            .unwrap_or(0.0)
    }

    /// All placements, in column order and then placement order within each column.
    pub fn placements(&self) -> impl Iterator<Item = &Placement> + '_ {
        self.columns.iter().flat_map(|c| c.placements().iter())
    }

    /// Number of items that received a placement.
    #[must_use]
    pub fn placed_count(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }

    /// Placement of the item at `item` within this section, if it was placed.
    #[must_use]
    pub fn placement_of(&self, item: usize) -> Option<&Placement> {
        let (column, row) = (*self.slots.get(item)?)?;
        self.columns.get(column)?.placements().get(row)
    }
}

/// Index of the first column with the smallest bottom edge.
///
/// Strict comparison keeps the earliest column on ties, which is what makes
/// the layout reproducible.
pub(crate) fn shortest_column(columns: &[Column]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, column) in columns.iter().enumerate() {
        let edge = column.bottom_edge();
        match best {
            Some((_, best_edge)) if edge >= best_edge => {}
            _ => best = Some((i, edge)),
        }
    }
    best.map(|(i, _)| i)
}

/// Index of the first column with the largest bottom edge.
pub(crate) fn tallest_column(columns: &[Column]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, column) in columns.iter().enumerate() {
        let edge = column.bottom_edge();
        match best {
            Some((_, best_edge)) if edge <= best_edge => {}
            _ => best = Some((i, edge)),
        }
    }
    best.map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::{Rect, Size};

    use super::{Section, SectionGeometry, shortest_column};
    use crate::column::Column;
    use crate::types::ItemId;

    fn geometry(column_count: usize, column_width: f64) -> SectionGeometry {
        SectionGeometry {
            column_count,
            column_width,
            line_spacing: 10.0,
            inter_item_spacing: 5.0,
            top_offset: 0.0,
        }
    }

    #[test]
    fn squares_alternate_between_two_columns() {
        let section = Section::build(0, 4, geometry(2, 145.0), |_| Size::new(100.0, 100.0));

        let frames: Vec<_> = (0..4)
            .map(|i| section.placement_of(i).unwrap().frame)
            .collect();
        assert_eq!(frames[0], Rect::new(0.0, 0.0, 145.0, 145.0));
        assert_eq!(frames[1], Rect::new(155.0, 0.0, 300.0, 145.0));
        assert_eq!(frames[2], Rect::new(0.0, 150.0, 145.0, 295.0));
        assert_eq!(frames[3], Rect::new(155.0, 150.0, 300.0, 295.0));
        assert_eq!(section.bottom_edge(), 295.0);
    }

    #[test]
    fn column_count_and_item_conservation() {
        let heights = [30.0, 90.0, 10.0, 45.0, 60.0, 20.0, 75.0];
        let section = Section::build(0, heights.len(), geometry(3, 100.0), |id| {
            Size::new(100.0, heights[id.item])
        });
        assert_eq!(section.columns().len(), 3);
        assert_eq!(section.placed_count(), heights.len());
        assert_eq!(section.placements().count(), heights.len());
        for (i, column) in section.columns().iter().enumerate() {
            assert_eq!(column.index(), i);
        }
    }

    #[test]
    fn each_item_goes_to_the_first_shortest_column() {
        let heights = [30.0, 90.0, 10.0, 45.0, 60.0, 20.0, 75.0, 5.0, 5.0];
        let geometry = geometry(3, 100.0);

        // Replay the build one item at a time and check every choice.
        for n in 1..=heights.len() {
            let before =
                Section::build(0, n - 1, geometry, |id| Size::new(100.0, heights[id.item]));
            let after = Section::build(0, n, geometry, |id| Size::new(100.0, heights[id.item]));

            let edges: Vec<f64> = before.columns().iter().map(Column::bottom_edge).collect();
            let min = edges.iter().copied().fold(f64::INFINITY, f64::min);
            let expected = edges.iter().position(|e| *e == min).unwrap();

            let chosen = after
                .columns()
                .iter()
                .position(|c| {
                    c.placements()
                        .last()
                        .is_some_and(|p| p.id == ItemId::new(0, n - 1))
                })
                .unwrap();
            assert_eq!(chosen, expected, "item {} went to the wrong column", n - 1);
        }
    }

    #[test]
    fn ties_resolve_to_lowest_index() {
        let columns = [
            Column::new(0, 10.0, 0.0, 20.0, 0.0),
            Column::new(1, 10.0, 10.0, 5.0, 0.0),
            Column::new(2, 10.0, 20.0, 5.0, 0.0),
        ];
        assert_eq!(shortest_column(&columns), Some(1));
        assert_eq!(shortest_column(&[]), None);
    }

    #[test]
    fn items_in_a_column_never_overlap() {
        let heights = [33.0, 71.0, 12.0, 58.0, 90.0, 14.0, 41.0, 66.0];
        let section = Section::build(0, heights.len(), geometry(3, 97.3), |id| {
            Size::new(50.0, heights[id.item])
        });
        for column in section.columns() {
            for pair in column.placements().windows(2) {
                let (prev, next) = (pair[0].frame, pair[1].frame);
                assert!(next.y0 >= prev.y0 + prev.height() + 5.0);
            }
        }
    }

    #[test]
    fn top_offset_shifts_every_item() {
        let mut geometry = geometry(2, 50.0);
        geometry.top_offset = 200.0;
        let section = Section::build(1, 5, geometry, |_| Size::new(1.0, 1.0));
        assert!(section.placements().all(|p| p.frame.y0 >= 200.0));
        assert!(section.placements().all(|p| p.id.section == 1));
    }

    #[test]
    fn zero_columns_places_nothing() {
        let mut calls = 0;
        let section = Section::build(0, 3, geometry(0, 0.0), |_| {
            calls += 1;
            Size::new(1.0, 1.0)
        });
        assert_eq!(calls, 0);
        assert_eq!(section.item_count(), 3);
        assert!(section.columns().is_empty());
        assert_eq!(section.placements().count(), 0);
        assert_eq!(section.bottom_edge(), 0.0);
        assert!(section.placement_of(0).is_none());
    }

    #[test]
    fn empty_section_bottom_edge_is_top_offset() {
        let mut geometry = geometry(2, 50.0);
        geometry.top_offset = 42.0;
        let section = Section::build(0, 0, geometry, |_| Size::new(1.0, 1.0));
        assert_eq!(section.bottom_edge(), 42.0);
    }
}
