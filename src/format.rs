//! Display formatting and its inverse parsing. The pairs here are the
//! contract between stored numbers and what the dashboard shows: any value
//! the formatter can emit must parse back to the same number.

/// 10000 -> "10k", 12500 -> "12.5k", 999 -> "999".
pub fn format_steps(steps: u64) -> String {
    if steps >= 1000 {
        if steps % 1000 == 0 {
            format!("{}k", steps / 1000)
        } else {
            format!("{:.1}k", steps as f64 / 1000.0)
        }
    } else {
        steps.to_string()
    }
}

/// Inverse of [`format_steps`]. The "k" form carries one decimal, so values
/// are exact to a granularity of 100; rounding keeps every multiple of 100
/// on the round-trip despite the float intermediate.
pub fn parse_steps(text: &str) -> Option<u64> {
    let trimmed = text.trim();
    if let Some(number) = trimmed.strip_suffix('k') {
        let thousands: f64 = number.parse().ok()?;
        if !thousands.is_finite() || thousands < 0.0 {
            return None;
        }
        Some((thousands * 1000.0).round() as u64)
    } else {
        trimmed.parse().ok()
    }
}

/// 2450 -> "2,450".
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// "2,450" -> 2450. Plain digits parse too.
pub fn parse_grouped(text: &str) -> Option<u64> {
    let cleaned: String = text.trim().chars().filter(|c| *c != ',').collect();
    cleaned.parse().ok()
}

pub fn format_percent(value: u32) -> String {
    format!("{value}%")
}

/// "86%" -> 86.
pub fn parse_percent(text: &str) -> Option<u32> {
    text.trim().trim_end_matches('%').parse().ok()
}
