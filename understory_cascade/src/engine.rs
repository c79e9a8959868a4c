// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The layout pass: a fold over sections, each stacked below the previous one.

use alloc::vec::Vec;

use kurbo::Size;

use crate::error::CascadeError;
use crate::section::{Section, SectionGeometry};
use crate::types::ItemId;

/// Resolved shape of one section for a layout pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionPlan {
    /// Number of items in the section.
    pub item_count: usize,
    /// Number of columns in the section.
    pub column_count: usize,
}

/// Spacing and width shared by every section of a pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PassMetrics {
    /// Effective container width the columns must span.
    pub container_width: f64,
    /// Horizontal gap between adjacent columns.
    pub line_spacing: f64,
    /// Vertical gap between consecutive items in a column.
    pub inter_item_spacing: f64,
}

/// Width of each of `column_count` columns spanning `container_width`.
///
/// Computes `(container_width - line_spacing * (column_count - 1)) / column_count`
/// without clamping, so narrow containers yield zero or negative widths and a
/// zero column count yields a non-finite width.
#[must_use]
pub fn column_width(container_width: f64, line_spacing: f64, column_count: usize) -> f64 {
    let columns = column_count as f64;
    (container_width - line_spacing * (columns - 1.0)) / columns
}

/// Lays out every section from scratch.
///
/// Section `i` starts at the bottom edge of section `i - 1` (or `0.0` for the
/// first), so sections never overlap. The result depends only on the inputs:
/// calling this twice with the same arguments yields identical placements.
///
/// `item_size` is called once per placed item, in section-major order.
pub fn prepare_sections(
    plans: &[SectionPlan],
    metrics: PassMetrics,
    mut item_size: impl FnMut(ItemId) -> Size,
) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::with_capacity(plans.len());
    for (index, plan) in plans.iter().enumerate() {
        let top_offset = sections.last().map(Section::bottom_edge).unwrap_or(0.0);
        let geometry = SectionGeometry {
            column_count: plan.column_count,
            column_width: column_width(
                metrics.container_width,
                metrics.line_spacing,
                plan.column_count,
            ),
            line_spacing: metrics.line_spacing,
            inter_item_spacing: metrics.inter_item_spacing,
            top_offset,
        };
        sections.push(Section::build(
            index,
            plan.item_count,
            geometry,
            &mut item_size,
        ));
    }
    sections
}

/// Rejects section configurations that can only produce degenerate geometry.
///
/// A section fails if it has no columns, or if its columns would be zero or
/// negative in width.
pub fn validate_section(
    section: usize,
    plan: &SectionPlan,
    metrics: &PassMetrics,
) -> Result<(), CascadeError> {
    if plan.column_count == 0 {
        return Err(CascadeError::ZeroColumns { section });
    }
    let width = column_width(
        metrics.container_width,
        metrics.line_spacing,
        plan.column_count,
    );
    if width.is_nan() || width <= 0.0 {
        return Err(CascadeError::NonPositiveColumnWidth { section, width });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::{Rect, Size};

    use super::{PassMetrics, SectionPlan, column_width, prepare_sections, validate_section};
    use crate::{CascadeError, ItemId};

    fn metrics(container_width: f64) -> PassMetrics {
        PassMetrics {
            container_width,
            line_spacing: 10.0,
            inter_item_spacing: 5.0,
        }
    }

    fn square(_: ItemId) -> Size {
        Size::new(100.0, 100.0)
    }

    #[test]
    fn column_width_subtracts_gaps() {
        assert_eq!(column_width(300.0, 10.0, 2), 145.0);
        assert_eq!(column_width(300.0, 10.0, 1), 300.0);
        assert_eq!(column_width(20.0, 10.0, 3), 0.0);
        assert!(column_width(10.0, 10.0, 3) < 0.0);
    }

    #[test]
    fn single_section_two_columns() {
        let plans = [SectionPlan {
            item_count: 4,
            column_count: 2,
        }];
        let sections = prepare_sections(&plans, metrics(300.0), square);
        assert_eq!(sections.len(), 1);
        let frames: Vec<Rect> = (0..4)
            .map(|i| sections[0].placement_of(i).unwrap().frame)
            .collect();
        assert_eq!(
            frames,
            [
                Rect::new(0.0, 0.0, 145.0, 145.0),
                Rect::new(155.0, 0.0, 300.0, 145.0),
                Rect::new(0.0, 150.0, 145.0, 295.0),
                Rect::new(155.0, 150.0, 300.0, 295.0),
            ]
        );
        assert_eq!(sections[0].bottom_edge(), 295.0);
    }

    #[test]
    fn sections_stack_below_each_other() {
        // One column of width 200 holding a single square: bottom edge 200.
        let plans = [
            SectionPlan {
                item_count: 1,
                column_count: 1,
            },
            SectionPlan {
                item_count: 6,
                column_count: 3,
            },
        ];
        let metrics = PassMetrics {
            container_width: 200.0,
            line_spacing: 0.0,
            inter_item_spacing: 0.0,
        };
        let sections = prepare_sections(&plans, metrics, square);
        assert_eq!(sections[0].bottom_edge(), 200.0);
        assert!(sections[1].placements().all(|p| p.frame.y0 >= 200.0));
        assert_eq!(sections[1].columns().len(), 3);
        assert_eq!(sections[1].placed_count(), 6);
    }

    #[test]
    fn empty_middle_section_keeps_stacking() {
        let plans = [
            SectionPlan {
                item_count: 2,
                column_count: 1,
            },
            SectionPlan {
                item_count: 0,
                column_count: 2,
            },
            SectionPlan {
                item_count: 1,
                column_count: 1,
            },
        ];
        let sections = prepare_sections(&plans, metrics(100.0), square);
        assert_eq!(sections[0].bottom_edge(), 205.0);
        assert_eq!(sections[1].bottom_edge(), 205.0);
        assert_eq!(sections[2].placement_of(0).unwrap().frame.y0, 205.0);
    }

    #[test]
    fn zero_column_section_is_tolerated() {
        let plans = [SectionPlan {
            item_count: 3,
            column_count: 0,
        }];
        let sections = prepare_sections(&plans, metrics(300.0), square);
        assert_eq!(sections.len(), 1);
        assert!(sections[0].columns().is_empty());
        assert_eq!(sections[0].placements().count(), 0);
        assert_eq!(sections[0].item_count(), 3);
    }

    #[test]
    fn preparing_twice_is_identical() {
        let plans = [
            SectionPlan {
                item_count: 9,
                column_count: 3,
            },
            SectionPlan {
                item_count: 4,
                column_count: 2,
            },
        ];
        let size = |id: ItemId| Size::new(7.0, 3.0 + (id.item * 11 % 17) as f64);
        let a = prepare_sections(&plans, metrics(333.3), size);
        let b = prepare_sections(&plans, metrics(333.3), size);
        let a: Vec<_> = a.iter().flat_map(|s| s.placements().copied()).collect();
        let b: Vec<_> = b.iter().flat_map(|s| s.placements().copied()).collect();
        assert_eq!(a.len(), 13);
        assert_eq!(a, b);
    }

    #[test]
    fn validation_rejects_degenerate_sections() {
        let ok = SectionPlan {
            item_count: 1,
            column_count: 2,
        };
        assert_eq!(validate_section(0, &ok, &metrics(300.0)), Ok(()));

        let zero = SectionPlan {
            item_count: 1,
            column_count: 0,
        };
        assert_eq!(
            validate_section(3, &zero, &metrics(300.0)),
            Err(CascadeError::ZeroColumns { section: 3 })
        );

        let crowded = SectionPlan {
            item_count: 1,
            column_count: 3,
        };
        assert_eq!(
            validate_section(1, &crowded, &metrics(20.0)),
            Err(CascadeError::NonPositiveColumnWidth {
                section: 1,
                width: 0.0,
            })
        );
    }
}
