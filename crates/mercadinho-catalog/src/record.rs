use std::collections::HashSet;

use chrono::{DateTime, Utc};
use mercadinho_core::{Product, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Product row as the catalog backend delivers it.
///
/// Revenue is always `units_sold * sale_price`. A precomputed `total_sold`
/// column may be present on older exports; it is read but never used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub units_sold: Decimal,
    #[serde(default)]
    pub cost_price: Decimal,
    #[serde(default)]
    pub sale_price: Decimal,
    #[serde(default)]
    pub margin_percent: Option<Decimal>,
    #[serde(default)]
    pub stock_quantity: Decimal,
    #[serde(default)]
    pub minimum_stock_quantity: Decimal,
    #[serde(default)]
    pub last_sale_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub supplier_id: Option<i64>,
    #[serde(default)]
    pub total_sold: Option<Decimal>,
}

impl CatalogRecord {
    pub fn into_product(self) -> Result<Product, CatalogError> {
        let id = ProductId(self.id);
        for (field, value) in [
            ("units_sold", self.units_sold),
            ("cost_price", self.cost_price),
            ("sale_price", self.sale_price),
            ("minimum_stock_quantity", self.minimum_stock_quantity),
        ] {
            if value < Decimal::ZERO {
                return Err(CatalogError::NegativeAmount { id, field });
            }
        }

        let revenue = self
            .units_sold
            .checked_mul(self.sale_price)
            .ok_or(CatalogError::AmountOverflow {
                id,
                field: "revenue",
            })?;

        Ok(Product {
            id,
            name: self.name.trim().to_string(),
            revenue,
            units_sold: self.units_sold,
            cost_price: self.cost_price,
            sale_price: self.sale_price,
            margin_percent: self.margin_percent,
            stock_quantity: self.stock_quantity,
            minimum_stock_quantity: self.minimum_stock_quantity,
            last_sale_date: self.last_sale_date,
            supplier_id: self.supplier_id,
        })
    }
}

/// Validates a batch of records. Negative stock is accepted; it shows up as
/// out of stock downstream.
pub fn products_from_records(records: Vec<CatalogRecord>) -> Result<Vec<Product>, CatalogError> {
    let mut seen = HashSet::with_capacity(records.len());
    let mut products = Vec::with_capacity(records.len());

    for record in records {
        let product = record.into_product()?;
        if !seen.insert(product.id) {
            return Err(CatalogError::DuplicateProduct(product.id));
        }
        products.push(product);
    }

    Ok(products)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn record(id: i64) -> CatalogRecord {
        CatalogRecord {
            id,
            name: format!(" Produto {id} "),
            units_sold: dec!(12),
            cost_price: dec!(3.20),
            sale_price: dec!(4.50),
            margin_percent: Some(dec!(28.9)),
            stock_quantity: dec!(7),
            minimum_stock_quantity: dec!(2),
            last_sale_date: None,
            supplier_id: Some(3),
            total_sold: Some(dec!(999)),
        }
    }

    #[test]
    fn revenue_comes_from_units_and_price() {
        let product = record(1).into_product().unwrap();

        assert_eq!(product.revenue, dec!(54.00));
        assert_eq!(product.name, "Produto 1");
        assert_eq!(product.id, ProductId(1));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = products_from_records(vec![record(1), record(2), record(1)]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateProduct(ProductId(1))));
    }

    #[test]
    fn rejects_negative_prices() {
        let mut bad = record(4);
        bad.sale_price = dec!(-1);

        let err = products_from_records(vec![bad]).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::NegativeAmount {
                id: ProductId(4),
                field: "sale_price"
            }
        ));
    }

    #[test]
    fn revenue_overflow_is_a_catalog_error() {
        let records: Vec<CatalogRecord> = serde_json::from_str(
            r#"[{"id": 6, "name": "Atacado", "units_sold": "79228162514264337593543950335", "sale_price": "2"}]"#,
        )
        .unwrap();

        let err = products_from_records(records).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::AmountOverflow {
                id: ProductId(6),
                field: "revenue"
            }
        ));
    }

    #[test]
    fn negative_stock_is_accepted() {
        let mut oversold = record(5);
        oversold.stock_quantity = dec!(-3);

        let products = products_from_records(vec![oversold]).unwrap();
        assert!(products[0].is_out_of_stock());
    }

    #[test]
    fn optional_columns_default() {
        let records: Vec<CatalogRecord> =
            serde_json::from_str(r#"[{"id": 9, "name": "Pao de forma"}]"#).unwrap();
        let products = products_from_records(records).unwrap();

        assert_eq!(products[0].revenue, Decimal::ZERO);
        assert_eq!(products[0].margin_percent, None);
        assert_eq!(products[0].supplier_id, None);
    }
}
