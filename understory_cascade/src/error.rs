// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors reported by strict layout passes.

use thiserror::Error;

/// A configuration that cannot produce a meaningful layout.
///
/// Only [`CascadeLayout::try_prepare`](crate::CascadeLayout::try_prepare) and
/// [`validate_section`](crate::validate_section) report these; the lenient
/// [`CascadeLayout::prepare`](crate::CascadeLayout::prepare) lays out
/// degenerate configurations anyway.
#[derive(Error, Clone, Copy, Debug, PartialEq)]
pub enum CascadeError {
    /// The source reported no container width.
    #[error("no container width is available")]
    MissingContainer,
    /// A section was configured with zero columns.
    #[error("section {section} has zero columns")]
    ZeroColumns {
        /// The offending section.
        section: usize,
    },
    /// The computed column width of a section is zero or negative.
    #[error("section {section} has a non-positive column width of {width:.2}")]
    NonPositiveColumnWidth {
        /// The offending section.
        section: usize,
        /// The computed column width.
        width: f64,
    },
}
