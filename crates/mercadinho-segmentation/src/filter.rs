use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use mercadinho_core::Product;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::classes::{AbcClass, MarginBand, RecommendedAction, TurnoverClass};
use crate::segment::Segmenter;

pub fn apply_filter<'a, F>(products: &'a [Product], predicate: F) -> Vec<&'a Product>
where
    F: Fn(&Product) -> bool,
{
    products.iter().filter(|product| predicate(*product)).collect()
}

/// Dashboard quick filters. Each one is a classification pinned to a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum QuickFilter {
    Abc(AbcClass),
    Turnover(TurnoverClass),
    Margin(MarginBand),
    Action(RecommendedAction),
    OutOfStock,
    BelowMinimum,
    NoSupplier,
}

impl QuickFilter {
    /// Badge order on the dashboard.
    pub fn all() -> Vec<QuickFilter> {
        let mut filters = Vec::with_capacity(16);
        filters.extend(AbcClass::ALL.map(QuickFilter::Abc));
        filters.extend(TurnoverClass::ALL.map(QuickFilter::Turnover));
        filters.extend(MarginBand::ALL.map(QuickFilter::Margin));
        filters.extend(RecommendedAction::ALL.map(QuickFilter::Action));
        filters.extend([
            QuickFilter::OutOfStock,
            QuickFilter::BelowMinimum,
            QuickFilter::NoSupplier,
        ]);
        filters
    }

    pub fn matches(self, segmenter: &Segmenter, product: &Product) -> bool {
        match self {
            QuickFilter::Abc(class) => segmenter.ranking().class_of(product.id) == class,
            QuickFilter::Turnover(class) => segmenter.segment(product).turnover == class,
            QuickFilter::Margin(band) => segmenter.segment(product).margin == band,
            QuickFilter::Action(action) => segmenter.segment(product).action == action,
            QuickFilter::OutOfStock => product.is_out_of_stock(),
            QuickFilter::BelowMinimum => {
                !product.is_out_of_stock() && product.is_at_or_below_minimum()
            }
            QuickFilter::NoSupplier => !product.has_supplier(),
        }
    }
}

impl fmt::Display for QuickFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuickFilter::Abc(class) => write!(f, "abc:{class}"),
            QuickFilter::Turnover(class) => write!(f, "turnover:{class}"),
            QuickFilter::Margin(band) => write!(f, "margin:{band}"),
            QuickFilter::Action(action) => write!(f, "action:{action}"),
            QuickFilter::OutOfStock => f.write_str("out-of-stock"),
            QuickFilter::BelowMinimum => f.write_str("below-minimum"),
            QuickFilter::NoSupplier => f.write_str("no-supplier"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown quick filter `{0}`")]
pub struct ParseQuickFilterError(pub String);

impl FromStr for QuickFilter {
    type Err = ParseQuickFilterError;

    /// Accepts the same spelling `Display` produces, case-insensitively.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase().replace('_', "-");
        QuickFilter::all()
            .into_iter()
            .find(|filter| filter.to_string().replace('_', "-") == normalized)
            .ok_or_else(|| ParseQuickFilterError(raw.to_string()))
    }
}

pub fn apply_quick_filter(
    products: &[Product],
    filter: QuickFilter,
    reference_date: DateTime<Utc>,
) -> Vec<&Product> {
    let segmenter = Segmenter::new(products, reference_date);
    apply_filter(products, |product| filter.matches(&segmenter, product))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeCount {
    pub filter: QuickFilter,
    pub count: usize,
}

pub fn badge_counts(products: &[Product], reference_date: DateTime<Utc>) -> Vec<BadgeCount> {
    let segmenter = Segmenter::new(products, reference_date);
    QuickFilter::all()
        .into_iter()
        .map(|filter| BadgeCount {
            filter,
            count: products
                .iter()
                .filter(|product| filter.matches(&segmenter, product))
                .count(),
        })
        .collect()
}
