use rust_decimal::Decimal;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;
const PERCENT_DP: u32 = 4;

/// Gross margin over the sale price, in percent. Zero when nothing is charged.
pub fn margin_percent(cost_price: Decimal, sale_price: Decimal) -> Decimal {
    if sale_price <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    percent_of(unit_profit(cost_price, sale_price), sale_price)
}

/// Markup over the cost price, in percent. Zero when the cost is unknown.
pub fn markup_percent(cost_price: Decimal, sale_price: Decimal) -> Decimal {
    if cost_price <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    percent_of(unit_profit(cost_price, sale_price), cost_price)
}

pub fn sale_price_for_markup(cost_price: Decimal, markup_percent: Decimal) -> Decimal {
    let factor = Decimal::ONE.saturating_add(markup_percent / HUNDRED);
    cost_price.saturating_mul(factor).round_dp(PERCENT_DP)
}

pub fn unit_profit(cost_price: Decimal, sale_price: Decimal) -> Decimal {
    sale_price.saturating_sub(cost_price)
}

pub fn stock_value(unit_cost: Decimal, quantity: Decimal) -> Decimal {
    unit_cost.saturating_mul(quantity)
}

pub fn potential_profit(cost_price: Decimal, sale_price: Decimal, quantity: Decimal) -> Decimal {
    unit_profit(cost_price, sale_price).saturating_mul(quantity)
}

// `base` is positive. Results out of range clamp to the representable bound.
fn percent_of(amount: Decimal, base: Decimal) -> Decimal {
    let clamped = if amount.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    };

    amount
        .checked_div(base)
        .and_then(|ratio| ratio.checked_mul(HUNDRED))
        .map(|percent| percent.round_dp(PERCENT_DP))
        .unwrap_or(clamped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn margin_is_relative_to_sale_price() {
        assert_eq!(margin_percent(dec!(6), dec!(10)), dec!(40));
        assert_eq!(margin_percent(dec!(10), dec!(10)), dec!(0));
        assert_eq!(margin_percent(dec!(12), dec!(10)), dec!(-20));
    }

    #[test]
    fn margin_without_sale_price_is_zero() {
        assert_eq!(margin_percent(dec!(5), dec!(0)), Decimal::ZERO);
        assert_eq!(margin_percent(dec!(5), dec!(-1)), Decimal::ZERO);
    }

    #[test]
    fn markup_is_relative_to_cost() {
        assert_eq!(markup_percent(dec!(8), dec!(10)), dec!(25));
        assert_eq!(markup_percent(dec!(0), dec!(10)), Decimal::ZERO);
        assert_eq!(markup_percent(dec!(3), dec!(4)), dec!(33.3333));
    }

    #[test]
    fn sale_price_inverts_markup() {
        assert_eq!(sale_price_for_markup(dec!(8), dec!(25)), dec!(10));
        assert_eq!(sale_price_for_markup(dec!(2.50), dec!(0)), dec!(2.50));
    }

    #[test]
    fn stock_valuation() {
        assert_eq!(stock_value(dec!(3.75), dec!(4)), dec!(15.00));
        assert_eq!(potential_profit(dec!(3.75), dec!(5), dec!(4)), dec!(5.00));
        assert_eq!(unit_profit(dec!(7), dec!(5)), dec!(-2));
    }

    #[test]
    fn extreme_amounts_clamp_instead_of_panicking() {
        assert_eq!(stock_value(Decimal::MAX, dec!(2)), Decimal::MAX);
        assert_eq!(potential_profit(Decimal::MAX, dec!(0), dec!(3)), Decimal::MIN);
        assert_eq!(unit_profit(Decimal::MIN, Decimal::MAX), Decimal::MAX);
        assert_eq!(markup_percent(dec!(0.0000000001), Decimal::MAX), Decimal::MAX);
        assert_eq!(sale_price_for_markup(Decimal::MAX, dec!(50)), Decimal::MAX);
    }
}
