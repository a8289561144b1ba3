//! Pure display formatting for prices, percentages and volumes.
//!
//! Every function is total: missing values render as "N/A" instead of
//! propagating an error into the page.

/// Direction of a price change, used to pick CSS class and glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeDirection {
    Up,
    Down,
    Flat,
}

impl ChangeDirection {
    pub fn css_class(&self) -> &'static str {
        match self {
            ChangeDirection::Up => "text-success",
            ChangeDirection::Down => "text-danger",
            ChangeDirection::Flat => "text-muted",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            ChangeDirection::Up => "▲",
            ChangeDirection::Down => "▼",
            ChangeDirection::Flat => "",
        }
    }
}

/// Classify a change value. `None` counts as flat.
pub fn change_direction(change: Option<f64>) -> ChangeDirection {
    match change {
        Some(value) if value > 0.0 => ChangeDirection::Up,
        Some(value) if value < 0.0 => ChangeDirection::Down,
        _ => ChangeDirection::Flat,
    }
}

/// USD currency with grouping and two decimals: `1234.5` -> `"$1,234.50"`.
pub fn format_currency(amount: Option<f64>) -> String {
    match amount {
        Some(value) => {
            let sign = if value < 0.0 { "-" } else { "" };
            format!("{}${}", sign, group_thousands(value.abs(), 2))
        }
        None => "N/A".to_string(),
    }
}

/// Percentage with a configurable number of decimals: `(3.456, 1)` -> `"3.5%"`.
pub fn format_percentage(value: Option<f64>, decimal_places: usize) -> String {
    match value {
        Some(v) => format!("{:.*}%", decimal_places, v),
        None => "N/A".to_string(),
    }
}

/// Abbreviate with K/M/B/T suffixes at powers of 1000, preserving the sign.
/// Below the first threshold the value is grouped with no decimals.
pub fn format_large_number(number: Option<f64>) -> String {
    let Some(value) = number else {
        return "N/A".to_string();
    };

    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();

    if magnitude >= 1_000_000_000_000.0 {
        format!("{}{:.2}T", sign, magnitude / 1_000_000_000_000.0)
    } else if magnitude >= 1_000_000_000.0 {
        format!("{}{:.2}B", sign, magnitude / 1_000_000_000.0)
    } else if magnitude >= 1_000_000.0 {
        format!("{}{:.2}M", sign, magnitude / 1_000_000.0)
    } else if magnitude >= 1_000.0 {
        format!("{}{:.2}K", sign, magnitude / 1_000.0)
    } else {
        format!("{}{}", sign, group_thousands(magnitude, 0))
    }
}

/// Market cap in dollars: `2.5e12` -> `"$2.50T"`. Values below one million are
/// grouped with no decimals, matching the backend's own formatter.
pub fn format_market_cap(market_cap: Option<f64>) -> String {
    let Some(value) = market_cap else {
        return "N/A".to_string();
    };

    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();

    if magnitude >= 1_000_000_000_000.0 {
        format!("{}${:.2}T", sign, magnitude / 1_000_000_000_000.0)
    } else if magnitude >= 1_000_000_000.0 {
        format!("{}${:.2}B", sign, magnitude / 1_000_000_000.0)
    } else if magnitude >= 1_000_000.0 {
        format!("{}${:.2}M", sign, magnitude / 1_000_000.0)
    } else {
        format!("{}${}", sign, group_thousands(magnitude, 0))
    }
}

/// Ticker shape check: 1-6 uppercase alphanumerics, first one a letter.
/// The input is tested as given; lowercase input fails.
pub fn is_valid_symbol(symbol: &str) -> bool {
    let mut chars = symbol.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    symbol.len() <= 6
        && first.is_ascii_uppercase()
        && chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
}

/// Percentage change between two values; `None` when the baseline is missing
/// or zero.
pub fn calculate_change_percentage(current: Option<f64>, previous: Option<f64>) -> Option<f64> {
    match (current, previous) {
        (Some(current), Some(previous)) if previous != 0.0 => {
            Some((current - previous) * 100.0 / previous)
        }
        _ => None,
    }
}

/// Clamp long labels for one-line suggestion rows.
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_length.saturating_sub(3)).collect();
    format!("{}...", kept)
}

/// Insert thousands separators into the decimal rendering of `value.abs()`.
/// Sign handling is the caller's job.
fn group_thousands(value: f64, decimal_places: usize) -> String {
    let raw = format!("{:.*}", decimal_places, value);
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((int_part, frac_part)) => (int_part.to_string(), Some(frac_part.to_string())),
        None => (raw, None),
    };

    let mut grouped = String::new();
    let digits = int_part.len();
    for (index, ch) in int_part.chars().enumerate() {
        if index > 0 && (digits - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{}.{}", grouped, frac),
        None => grouped,
    }
}
