/// Round an unrounded cent amount half-up to whole cents.
///
/// Quote lines accumulate per-foot charges as fractional cents and round
/// exactly once, at the end; this is the single rounding rule for the
/// whole engine. Half-up means 0.5 rounds away from zero for the positive
/// amounts we deal in: 1149.5 -> 1150.
pub fn round_half_up_cents(unrounded_cents: f64) -> i64 {
    (unrounded_cents + 0.5).floor() as i64
}

/// Format integer cents as a dollar string, e.g. 11400 -> "$114.00".
pub fn format_usd(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.abs();
    format!("{}${}.{:02}", sign, abs / 100, abs % 100)
}
