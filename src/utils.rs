pub mod date_formatter;

/// Rounds and clamps a percentage onto 0..=100. Non-finite input maps to 0.
pub fn normalize_percent(value: f64) -> u8 {
    if !value.is_finite() {
        return 0;
    }
    value.round().clamp(0.0, 100.0) as u8
}

pub fn is_valid_percent(value: f64) -> bool {
    value.is_finite() && (0.0..=100.0).contains(&value)
}

/// `value` with `precision` decimals, followed by `unit` when present.
pub fn format_value(value: f64, unit: Option<&str>, precision: usize) -> String {
    format!("{:.*}{}", precision, value, unit.unwrap_or(""))
}
