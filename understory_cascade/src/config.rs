// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout configuration: spacing and the policies used to resolve column
//! counts and item sizes.

use kurbo::Size;

use crate::source::CascadeSource;
use crate::types::ItemId;

/// Column count used when the source does not provide one.
pub const DEFAULT_COLUMN_COUNT: usize = 1;

/// Natural item size used when the source does not provide one.
pub const DEFAULT_ITEM_SIZE: Size = Size::new(600.0, 800.0);

/// How the number of columns in each section is decided.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColumnCountPolicy {
    /// Ask [`CascadeSource::column_count`], falling back to [`DEFAULT_COLUMN_COUNT`].
    #[default]
    FromSource,
    /// Use the same column count for every section.
    Fixed(usize),
}

impl ColumnCountPolicy {
    /// Resolves the column count of `section`.
    pub fn resolve<S: CascadeSource + ?Sized>(&self, source: &S, section: usize) -> usize {
        match *self {
            Self::FromSource => source
                .column_count(section)
                .unwrap_or(DEFAULT_COLUMN_COUNT),
            Self::Fixed(count) => count,
        }
    }
}

/// How the natural size of each item is decided.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ItemSizePolicy {
    /// Ask [`CascadeSource::item_size`], falling back to [`DEFAULT_ITEM_SIZE`].
    #[default]
    FromSource,
    /// Use the same natural size for every item.
    Fixed(Size),
}

impl ItemSizePolicy {
    /// Resolves the natural size of the item `id`.
    pub fn resolve<S: CascadeSource + ?Sized>(&self, source: &S, id: ItemId) -> Size {
        match *self {
            Self::FromSource => source.item_size(id).unwrap_or(DEFAULT_ITEM_SIZE),
            Self::Fixed(size) => size,
        }
    }
}

/// Caller-settable layout parameters.
///
/// Spacing values are taken as given; negative spacing is not rejected.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CascadeConfig {
    /// Horizontal gap between adjacent columns.
    pub line_spacing: f64,
    /// Vertical gap between consecutive items in a column.
    pub inter_item_spacing: f64,
    /// Column count resolution.
    pub column_count: ColumnCountPolicy,
    /// Item size resolution.
    pub item_size: ItemSizePolicy,
}

impl CascadeConfig {
    /// Creates a configuration with the given spacing and source-driven policies.
    #[must_use]
    pub fn new(line_spacing: f64, inter_item_spacing: f64) -> Self {
        Self {
            line_spacing,
            inter_item_spacing,
            ..Self::default()
        }
    }

    /// Uses `count` columns in every section.
    #[must_use]
    pub fn with_fixed_columns(mut self, count: usize) -> Self {
        self.column_count = ColumnCountPolicy::Fixed(count);
        self
    }

    /// Uses `size` as the natural size of every item.
    #[must_use]
    pub fn with_fixed_item_size(mut self, size: Size) -> Self {
        self.item_size = ItemSizePolicy::Fixed(size);
        self
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Size;

    use super::{
        CascadeConfig, ColumnCountPolicy, DEFAULT_COLUMN_COUNT, DEFAULT_ITEM_SIZE, ItemSizePolicy,
    };
    use crate::{CascadeSource, ItemId};

    struct Bare;

    impl CascadeSource for Bare {
        fn section_count(&self) -> usize {
            1
        }

        fn item_count(&self, _section: usize) -> usize {
            1
        }

        fn container_width(&self) -> Option<f64> {
            Some(100.0)
        }
    }

    struct Explicit;

    impl CascadeSource for Explicit {
        fn section_count(&self) -> usize {
            2
        }

        fn item_count(&self, _section: usize) -> usize {
            1
        }

        fn column_count(&self, section: usize) -> Option<usize> {
            Some(section + 2)
        }

        fn item_size(&self, id: ItemId) -> Option<Size> {
            Some(Size::new(10.0, 10.0 * (id.item + 1) as f64))
        }

        fn container_width(&self) -> Option<f64> {
            Some(100.0)
        }
    }

    #[test]
    fn source_policies_fall_back_to_defaults() {
        let config = CascadeConfig::default();
        assert_eq!(config.column_count.resolve(&Bare, 0), DEFAULT_COLUMN_COUNT);
        assert_eq!(
            config.item_size.resolve(&Bare, ItemId::new(0, 0)),
            DEFAULT_ITEM_SIZE
        );
    }

    #[test]
    fn source_policies_prefer_source_values() {
        let config = CascadeConfig::default();
        assert_eq!(config.column_count.resolve(&Explicit, 1), 3);
        assert_eq!(
            config.item_size.resolve(&Explicit, ItemId::new(0, 2)),
            Size::new(10.0, 30.0)
        );
    }

    #[test]
    fn fixed_policies_ignore_the_source() {
        let config = CascadeConfig::new(4.0, 2.0)
            .with_fixed_columns(5)
            .with_fixed_item_size(Size::new(3.0, 4.0));
        assert_eq!(config.column_count, ColumnCountPolicy::Fixed(5));
        assert_eq!(config.column_count.resolve(&Explicit, 1), 5);
        assert_eq!(config.item_size, ItemSizePolicy::Fixed(Size::new(3.0, 4.0)));
        assert_eq!(
            config.item_size.resolve(&Explicit, ItemId::new(1, 0)),
            Size::new(3.0, 4.0)
        );
    }
}
