//! Product segmentation for the store dashboards: ABC revenue classes,
//! turnover buckets, margin bands and the recommended next action per SKU.
//!
//! Every function here is pure. Classification depends only on the product
//! set and the reference date passed in, so callers can re-run it on each
//! catalog refresh without invalidating anything.

pub mod abc;
pub mod action;
pub mod classes;
pub mod filter;
pub mod margin;
pub mod segment;
pub mod stats;
pub mod turnover;

pub use abc::{AbcRanking, classify_abc, classify_all_abc, try_classify_abc};
pub use action::recommend_action;
pub use classes::{AbcClass, MarginBand, RecommendedAction, TurnoverClass};
pub use filter::{
    BadgeCount, ParseQuickFilterError, QuickFilter, apply_filter, apply_quick_filter,
    badge_counts,
};
pub use margin::classify_margin;
pub use segment::{ProductSegment, Segmenter, segment_all};
pub use stats::{
    AbcCounts, ActionCounts, MarginCounts, Statistics, TurnoverCounts, aggregate_statistics,
};
pub use turnover::{classify_turnover, days_since_last_sale};
