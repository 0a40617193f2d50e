/// Renders a result for display.
///
/// The value is rounded to `precision` fractional digits so that noise such as
/// `0.1 + 0.2 = 0.30000000000000004` shows as `0.3`, then printed without
/// trailing zeros.
pub fn format_result(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rounded = format!("{:.*}", precision, value)
        .parse::<f64>()
        .unwrap_or(value);

    if rounded == 0.0 {
        "0".to_string()
    } else {
        rounded.to_string()
    }
}
