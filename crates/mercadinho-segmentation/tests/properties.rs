use chrono::{DateTime, Duration, TimeZone, Utc};
use mercadinho_core::{Product, ProductId};
use mercadinho_segmentation::{
    AbcClass, AbcRanking, QuickFilter, RecommendedAction, aggregate_statistics, apply_quick_filter,
    classify_abc, classify_all_abc, segment_all,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn reference() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 1, 12, 0, 0).unwrap()
}

/// Deterministic catalog with uneven revenue, repeated revenue values and a
/// mix of missing optional fields.
fn generated_catalog(size: i64) -> Vec<Product> {
    (1..=size)
        .map(|id| {
            let revenue = Decimal::from((id * 7919) % 1000) / dec!(4);
            let days = (id * 13) % 60;
            Product {
                revenue,
                cost_price: Decimal::from(id % 9 + 1),
                sale_price: Decimal::from(id % 9 + 1) * dec!(1.35),
                margin_percent: (id % 5 != 0).then(|| Decimal::from((id * 11) % 80)),
                stock_quantity: Decimal::from((id * 3) % 40) - dec!(2),
                minimum_stock_quantity: Decimal::from(id % 8),
                last_sale_date: (id % 6 != 0).then(|| reference() - Duration::days(days)),
                supplier_id: (id % 4 != 0).then_some(id % 3),
                ..Product::new(id, format!("SKU-{id:04}"))
            }
        })
        .collect()
}

fn rank_of(class: AbcClass) -> u8 {
    match class {
        AbcClass::A => 0,
        AbcClass::B => 1,
        AbcClass::C => 2,
    }
}

#[test]
fn abc_classes_partition_the_set() {
    let products = generated_catalog(250);
    let stats = aggregate_statistics(&products, reference());

    assert_eq!(stats.abc.a + stats.abc.b + stats.abc.c, products.len());
    assert_eq!(stats.turnover.total(), products.len());
    assert_eq!(stats.margin.total(), products.len());
    assert_eq!(stats.actions.total(), products.len());

    let mut seen = 0;
    for class in AbcClass::ALL {
        let members = apply_quick_filter(&products, QuickFilter::Abc(class), reference());
        assert_eq!(members.len(), stats.abc.get(class));
        seen += members.len();
    }
    assert_eq!(seen, products.len());
}

#[test]
fn abc_class_never_improves_down_the_ranking() {
    let products = generated_catalog(250);
    let ranking = AbcRanking::compute(&products);

    let classes: Vec<u8> = ranking
        .order()
        .iter()
        .map(|id| rank_of(ranking.class_of(*id)))
        .collect();
    assert!(classes.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn class_a_revenue_stays_within_pareto_share() {
    let products = generated_catalog(250);
    let ranking = AbcRanking::compute(&products);

    let class_a_revenue: Decimal = products
        .iter()
        .filter(|product| ranking.class_of(product.id) == AbcClass::A)
        .map(|product| product.revenue)
        .sum();
    assert!(class_a_revenue <= ranking.total_revenue() * dec!(0.80));
}

#[test]
fn batch_and_single_classification_agree() {
    let products = generated_catalog(40);
    let batch = classify_all_abc(&products);

    for product in &products {
        assert_eq!(batch[&product.id], classify_abc(product, &products));
    }
}

#[test]
fn zero_revenue_catalog_is_all_class_c() {
    let products: Vec<Product> = generated_catalog(30)
        .into_iter()
        .map(|product| Product {
            revenue: Decimal::ZERO,
            ..product
        })
        .collect();

    let stats = aggregate_statistics(&products, reference());
    assert_eq!(stats.abc.c, products.len());
    assert!(
        segment_all(&products, reference())
            .iter()
            .all(|segment| segment.abc == AbcClass::C)
    );
}

#[test]
fn out_of_stock_always_restocks() {
    let products = generated_catalog(120);

    for segment in segment_all(&products, reference()) {
        let product = products
            .iter()
            .find(|product| product.id == segment.id)
            .unwrap();
        if product.stock_quantity <= Decimal::ZERO {
            assert_eq!(segment.action, RecommendedAction::RestockUrgently);
        }
    }
}

#[test]
fn statistics_are_reproducible() {
    let products = generated_catalog(500);

    let first = aggregate_statistics(&products, reference());
    let second = aggregate_statistics(&products, reference());
    assert_eq!(first, second);

    let by_reference: Vec<ProductId> = segment_all(&products, reference())
        .iter()
        .map(|segment| segment.id)
        .collect();
    let input: Vec<ProductId> = products.iter().map(|product| product.id).collect();
    assert_eq!(by_reference, input);
}
