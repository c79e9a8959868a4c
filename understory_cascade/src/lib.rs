// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_cascade --heading-base-level=0

//! Understory Cascade: deterministic multi-column cascade (masonry) layout.
//!
//! Items are grouped into sections. Each section has a number of equally wide
//! columns, and every item has a natural size whose aspect ratio it keeps. A
//! layout pass walks the items in order and drops each one into the column
//! whose bottom edge is currently highest on screen (the shortest column),
//! producing a "waterfall" of variable-height items. Sections stack vertically:
//! each one starts at the bottom edge of the one before it.
//!
//! The core concepts are:
//!
//! - [`Column`]: one fixed-width vertical lane that accumulates placements.
//! - [`Section`]: a group of columns filled greedily by [`Section::build`].
//! - [`prepare_sections`]: the pure layout pass over a list of [`SectionPlan`]s.
//! - [`CascadeSource`]: the host-facing trait supplying section structure,
//!   column counts, item sizes, and container width.
//! - [`CascadeLayout`]: a controller that owns a source and the last computed
//!   sections, and answers content-size, viewport, and per-item queries.
//!
//! The layout is reproducible to the pixel:
//!
//! - ties between equally short columns always go to the lowest column index,
//! - placed widths and heights are floored, so adjacent columns with fractional
//!   boundaries never overlap,
//! - every pass is a full rebuild; nothing is carried over between passes.
//!
//! This crate deliberately does **not** know about widgets or scrolling. Host
//! frameworks are responsible for:
//!
//! - Implementing [`CascadeSource`] over their data and container.
//! - Calling [`CascadeLayout::invalidate_for_bounds`] when their bounds change
//!   (only width changes cause a new pass) and
//!   [`CascadeLayout::invalidate`] when their data changes.
//! - Attaching views to the frames returned by
//!   [`CascadeLayout::attributes_intersecting`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use understory_cascade::{CascadeConfig, CascadeLayout, CascadeSource, ItemId};
//!
//! struct Feed;
//!
//! impl CascadeSource for Feed {
//!     fn section_count(&self) -> usize {
//!         1
//!     }
//!     fn item_count(&self, _section: usize) -> usize {
//!         4
//!     }
//!     fn column_count(&self, _section: usize) -> Option<usize> {
//!         Some(2)
//!     }
//!     fn item_size(&self, _id: ItemId) -> Option<Size> {
//!         Some(Size::new(100.0, 100.0))
//!     }
//!     fn container_width(&self) -> Option<f64> {
//!         Some(300.0)
//!     }
//! }
//!
//! // 10 between columns, 5 between items in a column.
//! let mut layout = CascadeLayout::new(Feed, CascadeConfig::new(10.0, 5.0));
//!
//! // Two 145-wide columns, two squares each.
//! assert_eq!(layout.content_size(), Size::new(300.0, 295.0));
//! assert_eq!(
//!     layout.attributes_for(ItemId::new(0, 2)).frame,
//!     Rect::new(0.0, 150.0, 145.0, 295.0),
//! );
//!
//! // Only a width change needs a new pass.
//! assert!(!layout.should_invalidate_for_bounds(Rect::new(0.0, 0.0, 300.0, 50.0)));
//! assert!(layout.should_invalidate_for_bounds(Rect::new(0.0, 0.0, 320.0, 50.0)));
//! ```
//!
//! ## Validation
//!
//! [`CascadeLayout::prepare`] lays out whatever it is given: a section with zero
//! columns places none of its items, and a container too narrow for its columns
//! produces zero or negative widths. Both are logged through the `log` facade.
//! [`CascadeLayout::try_prepare`] runs the same pass but reports these cases as
//! a [`CascadeError`] instead.
//!
//! ## Features
//!
//! - `std` *(default)*: enables `kurbo/std`.
//! - `libm`: use `libm` for float math in `no_std` builds.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod column;
mod config;
mod engine;
mod error;
mod layout;
pub mod query;
mod section;
mod source;
mod types;

pub use column::Column;
pub use config::{
    CascadeConfig, ColumnCountPolicy, DEFAULT_COLUMN_COUNT, DEFAULT_ITEM_SIZE, ItemSizePolicy,
};
pub use engine::{PassMetrics, SectionPlan, column_width, prepare_sections, validate_section};
pub use error::CascadeError;
pub use layout::CascadeLayout;
pub use section::{Section, SectionGeometry};
pub use source::CascadeSource;
pub use types::{Insets, ItemId, Placement};
