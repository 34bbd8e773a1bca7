use chrono::{DateTime, Utc};
use mercadinho_core::{Product, ProductId};
use mercadinho_finance::{markup_percent, unit_profit};
use mercadinho_segmentation::{
    AbcClass, BadgeCount, MarginBand, ProductSegment, RecommendedAction, Statistics, TurnoverClass,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardReport {
    pub snapshot_id: Uuid,
    pub reference_date: DateTime<Utc>,
    pub statistics: Statistics,
    pub badges: Vec<BadgeCount>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BadgeReport {
    pub snapshot_id: Uuid,
    pub reference_date: DateTime<Utc>,
    pub badges: Vec<BadgeCount>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilteredProductsReport {
    pub snapshot_id: Uuid,
    pub reference_date: DateTime<Utc>,
    pub filter: String,
    pub products: Vec<ProductRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductRow {
    pub id: ProductId,
    pub name: String,
    pub revenue: Decimal,
    pub stock_quantity: Decimal,
    pub minimum_stock_quantity: Decimal,
    pub margin_percent: Option<Decimal>,
    pub markup_percent: Decimal,
    pub unit_profit: Decimal,
    pub supplier_id: Option<i64>,
    pub abc: AbcClass,
    pub turnover: TurnoverClass,
    pub margin_band: MarginBand,
    pub action: RecommendedAction,
}

impl ProductRow {
    pub fn new(product: &Product, segment: ProductSegment) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            revenue: product.revenue,
            stock_quantity: product.stock_quantity,
            minimum_stock_quantity: product.minimum_stock_quantity,
            margin_percent: product.margin_percent,
            markup_percent: markup_percent(product.cost_price, product.sale_price),
            unit_profit: unit_profit(product.cost_price, product.sale_price),
            supplier_id: product.supplier_id,
            abc: segment.abc,
            turnover: segment.turnover,
            margin_band: segment.margin,
            action: segment.action,
        }
    }
}
