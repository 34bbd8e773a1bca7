use chrono::{DateTime, Utc};
use mercadinho_core::CatalogSnapshot;
use mercadinho_platform::{BadgeReport, DashboardReport, FilteredProductsReport, ProductRow};
use mercadinho_segmentation::{QuickFilter, Segmenter, aggregate_statistics, badge_counts};

pub fn dashboard(snapshot: &CatalogSnapshot, reference_date: DateTime<Utc>) -> DashboardReport {
    DashboardReport {
        snapshot_id: snapshot.id,
        reference_date,
        statistics: aggregate_statistics(&snapshot.products, reference_date),
        badges: badge_counts(&snapshot.products, reference_date),
    }
}

pub fn badges(snapshot: &CatalogSnapshot, reference_date: DateTime<Utc>) -> BadgeReport {
    BadgeReport {
        snapshot_id: snapshot.id,
        reference_date,
        badges: badge_counts(&snapshot.products, reference_date),
    }
}

pub fn filtered(
    snapshot: &CatalogSnapshot,
    filter: QuickFilter,
    reference_date: DateTime<Utc>,
) -> FilteredProductsReport {
    let segmenter = Segmenter::for_snapshot(snapshot, reference_date);
    let products = snapshot
        .products
        .iter()
        .filter(|product| filter.matches(&segmenter, product))
        .map(|product| ProductRow::new(product, segmenter.segment(product)))
        .collect();

    FilteredProductsReport {
        snapshot_id: snapshot.id,
        reference_date,
        filter: filter.to_string(),
        products,
    }
}
