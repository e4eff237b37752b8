//! Display formatting for amounts.

/// Group thousands with `,` and keep at most three fraction digits, trailing
/// zeros dropped. Non-finite values render as a dash.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return "—".into();
    }
    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let negative = value < 0.0 && (grouped != "0" || !frac_part.is_empty());
    let sign = if negative { "-" } else { "" };
    if frac_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac_part)
    }
}

/// Payout with two decimals, used where cents matter more than grouping
pub fn format_payout(value: f64) -> String {
    if value.is_finite() { format!("{:.2}", value) } else { "—".into() }
}
