use crate::{
    constants::{ADVANCE_PAYMENT_FACTOR, BASE_PRICE, DISCOUNT_RATE, SETUP_FEE},
    models::pricing_model::PricingQuote,
};

/// Prices a plan. The advance-payment reduction applies to the total only;
/// `your_price` and `discount_amount` stay per-unit and unadjusted.
pub fn compute_pricing(duration_months: u32, pay_in_advance: bool) -> PricingQuote {
    let your_price = BASE_PRICE * (1.0 - DISCOUNT_RATE);
    let mut total_monthly = your_price * f64::from(duration_months);

    if pay_in_advance {
        total_monthly *= ADVANCE_PAYMENT_FACTOR;
    }

    PricingQuote {
        regular_price: BASE_PRICE,
        discount_rate: DISCOUNT_RATE,
        your_price,
        discount_amount: BASE_PRICE * DISCOUNT_RATE,
        setup_fee: SETUP_FEE,
        total_monthly,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(6, false, "170.50")]
    #[case(6, true, "161.97")]
    #[case(9, false, "255.74")]
    #[case(9, true, "242.96")]
    #[case(12, false, "340.99")]
    #[case(12, true, "323.94")]
    #[case(18, false, "511.49")]
    #[case(18, true, "485.91")]
    #[case(24, false, "681.98")]
    #[case(24, true, "647.88")]
    #[case(36, false, "1022.98")]
    #[case(36, true, "971.83")]
    fn total_for_every_offered_plan(
        #[case] months: u32,
        #[case] pay_in_advance: bool,
        #[case] expected: &str,
    ) {
        let quote = compute_pricing(months, pay_in_advance);
        assert_eq!(quote.display_total_monthly(), expected);

        let factor = if pay_in_advance { 0.95 } else { 1.0 };
        let reference = 29.60 * 0.96 * f64::from(months) * factor;
        assert!((quote.total_monthly - reference).abs() < 1e-9);
    }

    #[rstest]
    #[case(6, false)]
    #[case(36, true)]
    fn unit_figures_ignore_duration_and_advance(#[case] months: u32, #[case] pay_in_advance: bool) {
        let quote = compute_pricing(months, pay_in_advance);
        assert_eq!(quote.display_regular_price(), "29.60");
        assert_eq!(quote.display_your_price(), "28.42");
        assert_eq!(quote.display_discount(), "1.18");
        assert_eq!(quote.display_setup_fee(), "0.00");
    }

    #[test]
    fn advance_discount_applies_to_unrounded_total() {
        let quote = compute_pricing(6, true);
        // 28.42 * 6 * 0.95 would give 161.99
        assert_eq!(quote.display_total_monthly(), "161.97");
    }

    #[test]
    fn accepts_durations_off_the_menu() {
        assert_eq!(compute_pricing(1, false).display_total_monthly(), "28.42");
    }
}
