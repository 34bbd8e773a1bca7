use std::collections::HashMap;

use mercadinho_core::{CatalogSnapshot, Product, ProductId};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::classes::AbcClass;

pub const CLASS_A_CEILING: Decimal = dec!(0.80);
pub const CLASS_B_CEILING: Decimal = dec!(0.95);

/// A ranking only describes the set it was computed from. Rankings built with
/// [`AbcRanking::for_snapshot`] remember the snapshot id so callers can check
/// they are not reusing it across catalog refreshes.
#[derive(Debug, Clone, Default)]
pub struct AbcRanking {
    snapshot_id: Option<Uuid>,
    total_revenue: Decimal,
    order: Vec<ProductId>,
    classes: HashMap<ProductId, AbcClass>,
}

impl AbcRanking {
    pub fn compute(products: &[Product]) -> Self {
        let total_revenue = products
            .iter()
            .map(Product::revenue_or_zero)
            .fold(Decimal::ZERO, Decimal::saturating_add);

        let mut ranked: Vec<&Product> = products.iter().collect();
        ranked.sort_by(|left, right| {
            right
                .revenue_or_zero()
                .cmp(&left.revenue_or_zero())
                .then_with(|| left.id.cmp(&right.id))
        });

        let mut classes = HashMap::with_capacity(ranked.len());
        let mut running = Decimal::ZERO;
        for product in &ranked {
            let class = if total_revenue.is_zero() {
                AbcClass::C
            } else {
                running = running.saturating_add(product.revenue_or_zero());
                class_for_share(running / total_revenue)
            };
            classes.insert(product.id, class);
        }

        debug!(
            products = ranked.len(),
            %total_revenue,
            "computed abc ranking"
        );

        Self {
            snapshot_id: None,
            total_revenue,
            order: ranked.iter().map(|product| product.id).collect(),
            classes,
        }
    }

    pub fn for_snapshot(snapshot: &CatalogSnapshot) -> Self {
        Self {
            snapshot_id: Some(snapshot.id),
            ..Self::compute(&snapshot.products)
        }
    }

    pub fn is_for(&self, snapshot: &CatalogSnapshot) -> bool {
        self.snapshot_id == Some(snapshot.id)
    }

    pub fn total_revenue(&self) -> Decimal {
        self.total_revenue
    }

    /// Product ids by revenue descending, ties by id ascending.
    pub fn order(&self) -> &[ProductId] {
        &self.order
    }

    pub fn get(&self, id: ProductId) -> Option<AbcClass> {
        self.classes.get(&id).copied()
    }

    /// Unknown ids fall back to class C.
    pub fn class_of(&self, id: ProductId) -> AbcClass {
        self.get(id).unwrap_or(AbcClass::C)
    }

    pub fn into_map(self) -> HashMap<ProductId, AbcClass> {
        self.classes
    }
}

fn class_for_share(cumulative_share: Decimal) -> AbcClass {
    if cumulative_share <= CLASS_A_CEILING {
        AbcClass::A
    } else if cumulative_share <= CLASS_B_CEILING {
        AbcClass::B
    } else {
        AbcClass::C
    }
}

pub fn classify_all_abc(products: &[Product]) -> HashMap<ProductId, AbcClass> {
    AbcRanking::compute(products).into_map()
}

/// `None` when `product` is not part of `all_products`.
pub fn try_classify_abc(product: &Product, all_products: &[Product]) -> Option<AbcClass> {
    AbcRanking::compute(all_products).get(product.id)
}

/// Classifies one product against the set it belongs to. Ranks the whole set
/// on every call; loops should build an [`AbcRanking`] once instead.
///
/// A product missing from `all_products` is reported as class C rather than
/// failing, since this runs while rendering. Debug builds outside unit tests
/// assert instead, so the caller bug surfaces during development.
pub fn classify_abc(product: &Product, all_products: &[Product]) -> AbcClass {
    #[cfg(not(test))]
    debug_assert!(
        all_products.iter().any(|candidate| candidate.id == product.id),
        "classify_abc called with product {} outside its set",
        product.id
    );

    match try_classify_abc(product, all_products) {
        Some(class) => class,
        None => {
            warn!(product_id = %product.id, "product is not part of the ranked set");
            AbcClass::C
        }
    }
}
