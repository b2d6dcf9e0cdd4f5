use crate::{constants::DISCOUNT_RATE, models::pricing_model::PricingQuote};

pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}

pub fn format_euro(amount: f64) -> String {
    format!("{}€", format_amount(amount))
}

/// Order overview lines as shown beside the form.
pub fn render_order_overview(quote: &PricingQuote, monthly_sessions: &str) -> Vec<(String, String)> {
    vec![
        (
            "NUMBER OF SESSIONS P.M.".to_string(),
            monthly_sessions.to_string(),
        ),
        ("REGULAR PRICE".to_string(), format_euro(quote.regular_price)),
        ("YOUR PRICE".to_string(), format_euro(quote.your_price)),
        (
            format!("DISCOUNT {}%", (DISCOUNT_RATE * 100.0).round()),
            format!("-{}", format_euro(quote.discount_amount)),
        ),
        ("Setup fee".to_string(), format_euro(quote.setup_fee)),
        ("TOTAL P.M.".to_string(), format_euro(quote.total_monthly)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::pricing_service::compute_pricing;

    #[test]
    fn amounts_have_exactly_two_decimals() {
        assert_eq!(format_amount(29.6), "29.60");
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(28.416), "28.42");
        assert_eq!(format_euro(1.184), "1.18€");
    }

    #[test]
    fn overview_for_default_plan() {
        let quote = compute_pricing(6, false);
        let lines = render_order_overview(&quote, "8");

        let expected: Vec<(String, String)> = [
            ("NUMBER OF SESSIONS P.M.", "8"),
            ("REGULAR PRICE", "29.60€"),
            ("YOUR PRICE", "28.42€"),
            ("DISCOUNT 4%", "-1.18€"),
            ("Setup fee", "0.00€"),
            ("TOTAL P.M.", "170.50€"),
        ]
        .into_iter()
        .map(|(label, value)| (label.to_string(), value.to_string()))
        .collect();

        assert_eq!(lines, expected);
    }
}
