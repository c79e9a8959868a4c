// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small controller that owns a [`CascadeSource`] and the current layout.

use alloc::vec::Vec;

use kurbo::{Rect, Size};

use crate::config::CascadeConfig;
use crate::engine::{PassMetrics, SectionPlan, prepare_sections, validate_section};
use crate::error::CascadeError;
use crate::query;
use crate::section::Section;
use crate::source::CascadeSource;
use crate::types::{ItemId, Placement};

/// Controller for a cascade layout over a [`CascadeSource`].
///
/// This type:
/// - owns the source and the [`CascadeConfig`],
/// - holds the sections computed by the last layout pass,
/// - remembers the container width that pass was computed for, so hosts can
///   tell whether a bounds change needs a new pass.
///
/// Every pass rebuilds all sections from scratch. Queries on an invalidated
/// layout run a new pass first, so they never observe a partial result.
#[derive(Debug)]
pub struct CascadeLayout<S: CascadeSource> {
    source: S,
    config: CascadeConfig,
    sections: Vec<Section>,
    prepared: bool,
    prepared_width: Option<f64>,
}

impl<S: CascadeSource> CascadeLayout<S> {
    /// Creates an unprepared layout over `source`.
    #[must_use]
    pub fn new(source: S, config: CascadeConfig) -> Self {
        Self {
            source,
            config,
            sections: Vec::new(),
            prepared: false,
            prepared_width: None,
        }
    }

    /// Returns a shared reference to the source.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns a mutable reference to the source, invalidating the layout.
    pub fn source_mut(&mut self) -> &mut S {
        self.invalidate();
        &mut self.source
    }

    /// Consumes the layout and returns the source.
    pub fn into_source(self) -> S {
        self.source
    }

    /// Returns the current configuration.
    #[must_use]
    pub const fn config(&self) -> &CascadeConfig {
        &self.config
    }

    /// Replaces the configuration, invalidating the layout if it changed.
    pub fn set_config(&mut self, config: CascadeConfig) {
        if config != self.config {
            self.config = config;
            self.invalidate();
        }
    }

    /// Sets the horizontal gap between columns.
    pub fn set_line_spacing(&mut self, spacing: f64) {
        self.set_config(CascadeConfig {
            line_spacing: spacing,
            ..self.config
        });
    }

    /// Sets the vertical gap between items in a column.
    pub fn set_inter_item_spacing(&mut self, spacing: f64) {
        self.set_config(CascadeConfig {
            inter_item_spacing: spacing,
            ..self.config
        });
    }

    /// Returns `true` if the held sections reflect a completed pass.
    #[must_use]
    pub const fn is_prepared(&self) -> bool {
        self.prepared
    }

    /// Sections computed by the last pass, without running a new one.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Runs a full layout pass.
    ///
    /// Without a container width the result is empty. Degenerate sections
    /// (no columns, or columns without positive width) are laid out anyway and
    /// logged; use [`CascadeLayout::try_prepare`] to reject them instead.
    pub fn prepare(&mut self) {
        let Some((plans, metrics)) = self.begin_pass() else {
            return;
        };
        for (section, plan) in plans.iter().enumerate() {
            if let Err(err) = validate_section(section, plan, &metrics) {
                log::warn!("cascade layout: {err}; laying out anyway");
            }
        }
        self.finish_pass(&plans, metrics);
    }

    /// Runs a full layout pass, rejecting degenerate configurations.
    ///
    /// On error the layout is left prepared but empty until it is invalidated.
    pub fn try_prepare(&mut self) -> Result<(), CascadeError> {
        let Some((plans, metrics)) = self.begin_pass() else {
            return Err(CascadeError::MissingContainer);
        };
        for (section, plan) in plans.iter().enumerate() {
            validate_section(section, plan, &metrics)?;
        }
        self.finish_pass(&plans, metrics);
        Ok(())
    }

    /// Drops the computed sections; the next query runs a new pass.
    pub fn invalidate(&mut self) {
        if self.prepared {
            log::trace!("cascade layout invalidated");
        }
        self.sections.clear();
        self.prepared = false;
    }

    /// Returns `true` if moving to `new_bounds` requires a new pass.
    ///
    /// Only the width matters: a height-only change keeps the layout.
    #[must_use]
    pub fn should_invalidate_for_bounds(&self, new_bounds: Rect) -> bool {
        match self.prepared_width.or_else(|| self.source.container_width()) {
            Some(width) => width != new_bounds.width(),
            None => true,
        }
    }

    /// Invalidates the layout if [`should_invalidate_for_bounds`] says so.
    ///
    /// Returns whether the layout was invalidated.
    ///
    /// [`should_invalidate_for_bounds`]: CascadeLayout::should_invalidate_for_bounds
    pub fn invalidate_for_bounds(&mut self, new_bounds: Rect) -> bool {
        let invalidate = self.should_invalidate_for_bounds(new_bounds);
        if invalidate {
            self.invalidate();
        }
        invalidate
    }

    /// Total scrollable size of the content.
    ///
    /// The width is the effective container width and the height the bottom
    /// edge of the tallest section. Without a container or without sections
    /// this is [`Size::ZERO`].
    pub fn content_size(&mut self) -> Size {
        self.ensure_prepared();
        match self.source.effective_width() {
            Some(width) if !self.sections.is_empty() => {
                Size::new(width, query::content_height(&self.sections))
            }
            _ => Size::ZERO,
        }
    }

    /// Placements whose frame overlaps `rect`, in section, column, then
    /// placement order.
    pub fn attributes_intersecting(&mut self, rect: Rect) -> impl Iterator<Item = Placement> + '_ {
        self.ensure_prepared();
        query::attributes_intersecting(&self.sections, rect)
    }

    /// Placement of the item `id`, or a zero-sized placeholder if it has none.
    pub fn attributes_for(&mut self, id: ItemId) -> Placement {
        self.ensure_prepared();
        query::attributes_for(&self.sections, id)
    }

    fn ensure_prepared(&mut self) {
        if !self.prepared {
            self.prepare();
        }
    }

    /// Clears the old result and resolves the plan for a new pass.
    ///
    /// Returns `None`, with the layout prepared and empty, when there is no
    /// container width.
    fn begin_pass(&mut self) -> Option<(Vec<SectionPlan>, PassMetrics)> {
        self.sections.clear();
        self.prepared = true;
        self.prepared_width = self.source.container_width();

        let Some(container_width) = self.source.effective_width() else {
            log::debug!("cascade layout: no container width, nothing to lay out");
            return None;
        };

        let plans = (0..self.source.section_count())
            .map(|section| SectionPlan {
                item_count: self.source.item_count(section),
                column_count: self.config.column_count.resolve(&self.source, section),
            })
            .collect();
        let metrics = PassMetrics {
            container_width,
            line_spacing: self.config.line_spacing,
            inter_item_spacing: self.config.inter_item_spacing,
        };
        Some((plans, metrics))
    }

    fn finish_pass(&mut self, plans: &[SectionPlan], metrics: PassMetrics) {
        let source = &self.source;
        let item_size = self.config.item_size;
        self.sections = prepare_sections(plans, metrics, |id| item_size.resolve(source, id));
        log::debug!(
            "cascade layout: {} sections, {} items placed, width {}, height {}",
            self.sections.len(),
            self.sections.iter().map(Section::placed_count).sum::<usize>(),
            metrics.container_width,
            query::content_height(&self.sections),
        );
    }
}
