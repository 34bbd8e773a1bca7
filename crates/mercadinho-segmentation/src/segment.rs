use chrono::{DateTime, Utc};
use mercadinho_core::{CatalogSnapshot, Product, ProductId};
use serde::{Deserialize, Serialize};

use crate::abc::AbcRanking;
use crate::action::recommend_action;
use crate::classes::{AbcClass, MarginBand, RecommendedAction, TurnoverClass};
use crate::margin::classify_margin;
use crate::turnover::classify_turnover;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSegment {
    pub id: ProductId,
    pub abc: AbcClass,
    pub turnover: TurnoverClass,
    pub margin: MarginBand,
    pub action: RecommendedAction,
}

/// Classifies products of one set against a shared ABC ranking and a fixed
/// reference date. Build one per render cycle.
#[derive(Debug, Clone)]
pub struct Segmenter {
    ranking: AbcRanking,
    reference_date: DateTime<Utc>,
}

impl Segmenter {
    pub fn new(products: &[Product], reference_date: DateTime<Utc>) -> Self {
        Self {
            ranking: AbcRanking::compute(products),
            reference_date,
        }
    }

    pub fn for_snapshot(snapshot: &CatalogSnapshot, reference_date: DateTime<Utc>) -> Self {
        Self {
            ranking: AbcRanking::for_snapshot(snapshot),
            reference_date,
        }
    }

    pub fn ranking(&self) -> &AbcRanking {
        &self.ranking
    }

    pub fn reference_date(&self) -> DateTime<Utc> {
        self.reference_date
    }

    pub fn segment(&self, product: &Product) -> ProductSegment {
        let turnover = classify_turnover(product, self.reference_date);

        ProductSegment {
            id: product.id,
            abc: self.ranking.class_of(product.id),
            turnover,
            margin: classify_margin(product),
            action: recommend_action(product, turnover),
        }
    }
}

pub fn segment_all(products: &[Product], reference_date: DateTime<Utc>) -> Vec<ProductSegment> {
    let segmenter = Segmenter::new(products, reference_date);
    products
        .iter()
        .map(|product| segmenter.segment(product))
        .collect()
}
