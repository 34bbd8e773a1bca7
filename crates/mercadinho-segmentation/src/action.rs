use mercadinho_core::Product;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::classes::{RecommendedAction, TurnoverClass};

pub const REPRICE_MARGIN_CEILING: Decimal = dec!(20);
/// Slow movers holding more than this multiple of their minimum stock get promoted.
pub const OVERSTOCK_FACTOR: Decimal = dec!(2);

/// Picks the single most urgent action. The checks short-circuit in priority
/// order: restock, then promote, then reprice.
pub fn recommend_action(product: &Product, turnover: TurnoverClass) -> RecommendedAction {
    if product.is_out_of_stock() || product.is_at_or_below_minimum() {
        return RecommendedAction::RestockUrgently;
    }

    if turnover == TurnoverClass::Slow
        && product.stock_quantity
            > OVERSTOCK_FACTOR.saturating_mul(product.minimum_stock_quantity)
    {
        return RecommendedAction::Promote;
    }

    if product.margin_or_zero() < REPRICE_MARGIN_CEILING {
        return RecommendedAction::AdjustPrice;
    }

    RecommendedAction::None
}
