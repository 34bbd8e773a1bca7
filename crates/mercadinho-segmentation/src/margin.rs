use mercadinho_core::Product;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::classes::MarginBand;

pub const HIGH_MARGIN_FLOOR: Decimal = dec!(50);
pub const MEDIUM_MARGIN_FLOOR: Decimal = dec!(30);

pub fn classify_margin(product: &Product) -> MarginBand {
    band_for_margin(product.margin_or_zero())
}

pub fn band_for_margin(margin_percent: Decimal) -> MarginBand {
    if margin_percent >= HIGH_MARGIN_FLOOR {
        MarginBand::High
    } else if margin_percent >= MEDIUM_MARGIN_FLOOR {
        MarginBand::Medium
    } else {
        MarginBand::Low
    }
}
