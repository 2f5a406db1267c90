// src/core/format.rs

//! Small rendering helpers shared by the handlers.

use crate::models::Location;

/// Renders a flag the way the status report wants it.
pub fn yes_no(value: bool) -> &'static str {
    if value { t!("common.yes") } else { t!("common.no") }
}

/// Formats `value` with three decimals and `,` thousands separators,
/// e.g. `-12345.5` becomes `-12,345.500`.
pub fn grouped_decimal(value: f64) -> String {
    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "000"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && fixed.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };
    format!("{}{}.{}", sign, grouped, frac_part)
}

/// Renders a location in the order the game's map tools use: Y, X, Z.
pub fn map_coordinates(location: &Location) -> String {
    format!(
        "{}, {}, {}",
        grouped_decimal(location.y),
        grouped_decimal(location.x),
        grouped_decimal(location.z)
    )
}
