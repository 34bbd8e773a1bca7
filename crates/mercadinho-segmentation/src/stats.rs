use chrono::{DateTime, Utc};
use mercadinho_core::Product;
use mercadinho_finance::{potential_profit, stock_value};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classes::{AbcClass, MarginBand, RecommendedAction, TurnoverClass};
use crate::segment::Segmenter;

const AVERAGE_MARGIN_DP: u32 = 4;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbcCounts {
    pub a: usize,
    pub b: usize,
    pub c: usize,
}

impl AbcCounts {
    fn record(&mut self, class: AbcClass) {
        match class {
            AbcClass::A => self.a += 1,
            AbcClass::B => self.b += 1,
            AbcClass::C => self.c += 1,
        }
    }

    pub fn get(&self, class: AbcClass) -> usize {
        match class {
            AbcClass::A => self.a,
            AbcClass::B => self.b,
            AbcClass::C => self.c,
        }
    }

    pub fn total(&self) -> usize {
        self.a + self.b + self.c
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnoverCounts {
    pub fast: usize,
    pub normal: usize,
    pub slow: usize,
}

impl TurnoverCounts {
    fn record(&mut self, class: TurnoverClass) {
        match class {
            TurnoverClass::Fast => self.fast += 1,
            TurnoverClass::Normal => self.normal += 1,
            TurnoverClass::Slow => self.slow += 1,
        }
    }

    pub fn get(&self, class: TurnoverClass) -> usize {
        match class {
            TurnoverClass::Fast => self.fast,
            TurnoverClass::Normal => self.normal,
            TurnoverClass::Slow => self.slow,
        }
    }

    pub fn total(&self) -> usize {
        self.fast + self.normal + self.slow
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarginCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl MarginCounts {
    fn record(&mut self, band: MarginBand) {
        match band {
            MarginBand::High => self.high += 1,
            MarginBand::Medium => self.medium += 1,
            MarginBand::Low => self.low += 1,
        }
    }

    pub fn get(&self, band: MarginBand) -> usize {
        match band {
            MarginBand::High => self.high,
            MarginBand::Medium => self.medium,
            MarginBand::Low => self.low,
        }
    }

    pub fn total(&self) -> usize {
        self.high + self.medium + self.low
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionCounts {
    pub restock_urgently: usize,
    pub promote: usize,
    pub adjust_price: usize,
    pub none: usize,
}

impl ActionCounts {
    fn record(&mut self, action: RecommendedAction) {
        match action {
            RecommendedAction::RestockUrgently => self.restock_urgently += 1,
            RecommendedAction::Promote => self.promote += 1,
            RecommendedAction::AdjustPrice => self.adjust_price += 1,
            RecommendedAction::None => self.none += 1,
        }
    }

    pub fn get(&self, action: RecommendedAction) -> usize {
        match action {
            RecommendedAction::RestockUrgently => self.restock_urgently,
            RecommendedAction::Promote => self.promote,
            RecommendedAction::AdjustPrice => self.adjust_price,
            RecommendedAction::None => self.none,
        }
    }

    pub fn total(&self) -> usize {
        self.restock_urgently + self.promote + self.adjust_price + self.none
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub total_products: usize,
    pub abc: AbcCounts,
    pub turnover: TurnoverCounts,
    pub margin: MarginCounts,
    pub actions: ActionCounts,
    pub without_supplier: usize,
    pub capital_invested: Decimal,
    pub potential_profit: Decimal,
    pub average_margin: Decimal,
}

/// One ranking sort, then a single pass in input order. Money sums accumulate
/// in input order so repeated calls agree to the last digit, and clamp at the
/// representable bound instead of overflowing.
pub fn aggregate_statistics(products: &[Product], reference_date: DateTime<Utc>) -> Statistics {
    let segmenter = Segmenter::new(products, reference_date);
    let mut stats = Statistics {
        total_products: products.len(),
        ..Statistics::default()
    };
    let mut margin_sum = Decimal::ZERO;

    for product in products {
        let segment = segmenter.segment(product);
        stats.abc.record(segment.abc);
        stats.turnover.record(segment.turnover);
        stats.margin.record(segment.margin);
        stats.actions.record(segment.action);

        if !product.has_supplier() {
            stats.without_supplier += 1;
        }

        stats.capital_invested = stats
            .capital_invested
            .saturating_add(stock_value(product.cost_price, product.stock_quantity));
        stats.potential_profit = stats.potential_profit.saturating_add(potential_profit(
            product.cost_price,
            product.sale_price,
            product.stock_quantity,
        ));
        margin_sum = margin_sum.saturating_add(product.margin_or_zero());
    }

    if !products.is_empty() {
        stats.average_margin =
            (margin_sum / Decimal::from(products.len())).round_dp(AVERAGE_MARGIN_DP);
    }

    debug!(
        products = stats.total_products,
        class_a = stats.abc.a,
        restock = stats.actions.restock_urgently,
        "aggregated segmentation statistics"
    );

    stats
}
