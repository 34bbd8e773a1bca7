use chrono::{DateTime, Utc};
use mercadinho_core::Product;

use crate::classes::TurnoverClass;

pub const FAST_MAX_DAYS: i64 = 7;
pub const NORMAL_MAX_DAYS: i64 = 30;

/// Whole days elapsed since the last sale, or `None` if the product never sold.
pub fn days_since_last_sale(product: &Product, reference_date: DateTime<Utc>) -> Option<i64> {
    product
        .last_sale_date
        .map(|sold_at| (reference_date - sold_at).num_days())
}

pub fn classify_turnover(product: &Product, reference_date: DateTime<Utc>) -> TurnoverClass {
    match days_since_last_sale(product, reference_date) {
        None => TurnoverClass::Slow,
        Some(days) if days <= FAST_MAX_DAYS => TurnoverClass::Fast,
        Some(days) if days <= NORMAL_MAX_DAYS => TurnoverClass::Normal,
        Some(_) => TurnoverClass::Slow,
    }
}
