use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One SKU as seen by the analytics layer. Revenue is already derived by the
/// catalog source; nothing here recomputes it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub revenue: Decimal,
    pub units_sold: Decimal,
    pub cost_price: Decimal,
    pub sale_price: Decimal,
    pub margin_percent: Option<Decimal>,
    pub stock_quantity: Decimal,
    pub minimum_stock_quantity: Decimal,
    pub last_sale_date: Option<DateTime<Utc>>,
    pub supplier_id: Option<i64>,
}

impl Product {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: ProductId(id),
            name: name.into(),
            revenue: Decimal::ZERO,
            units_sold: Decimal::ZERO,
            cost_price: Decimal::ZERO,
            sale_price: Decimal::ZERO,
            margin_percent: None,
            stock_quantity: Decimal::ZERO,
            minimum_stock_quantity: Decimal::ZERO,
            last_sale_date: None,
            supplier_id: None,
        }
    }

    pub fn margin_or_zero(&self) -> Decimal {
        self.margin_percent.unwrap_or(Decimal::ZERO)
    }

    /// Negative revenue never contributes to a ranking.
    pub fn revenue_or_zero(&self) -> Decimal {
        self.revenue.max(Decimal::ZERO)
    }

    pub fn has_supplier(&self) -> bool {
        self.supplier_id.is_some()
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.stock_quantity <= Decimal::ZERO
    }

    pub fn is_at_or_below_minimum(&self) -> bool {
        self.stock_quantity <= self.minimum_stock_quantity
    }
}

/// A point-in-time copy of the catalog. Every snapshot gets its own id so
/// derived rankings can tell which product set they were computed from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub id: Uuid,
    pub taken_at: DateTime<Utc>,
    pub products: Vec<Product>,
}

impl CatalogSnapshot {
    pub fn new(products: Vec<Product>, taken_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            taken_at,
            products,
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn missing_margin_defaults_to_zero() {
        let product = Product::new(1, "Arroz 5kg");
        assert_eq!(product.margin_or_zero(), Decimal::ZERO);

        let priced = Product {
            margin_percent: Some(dec!(32.5)),
            ..Product::new(2, "Feijao 1kg")
        };
        assert_eq!(priced.margin_or_zero(), dec!(32.5));
    }

    #[test]
    fn stock_thresholds_are_inclusive() {
        let product = Product {
            stock_quantity: dec!(5),
            minimum_stock_quantity: dec!(5),
            ..Product::new(1, "Leite")
        };
        assert!(product.is_at_or_below_minimum());
        assert!(!product.is_out_of_stock());

        let empty = Product {
            stock_quantity: dec!(-1),
            ..Product::new(2, "Cafe")
        };
        assert!(empty.is_out_of_stock());
    }

    #[test]
    fn snapshots_get_distinct_ids() {
        let now = Utc::now();
        let first = CatalogSnapshot::new(vec![Product::new(1, "Sal")], now);
        let second = CatalogSnapshot::new(first.products.clone(), now);
        assert_ne!(first.id, second.id);
        assert_eq!(first.find(ProductId(1)).map(|p| p.name.as_str()), Some("Sal"));
        assert!(first.find(ProductId(9)).is_none());
    }
}
