use std::cmp::Ordering;

use crossterm::style::Stylize;
use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::NOT_AVAILABLE;

lazy_static! {
    // Matches ANSI color sequences so padding can measure visible width only.
    static ref ANSI_SEQUENCE: Regex =
        Regex::new(r"\x1b\[[0-9;]*m").expect("Invalid regex pattern");
}

/// Colors a price cell green above the previous close, red below it.
/// Cells that do not parse as prices (`N/A` in particular) pass through
/// unchanged.
pub fn colorize_price(price: &str, prev_close: &str) -> String {
    let price_value: Decimal = match price.parse() {
        Ok(value) => value,
        Err(_) => return price.to_string(),
    };
    let prev_value: Decimal = match prev_close.parse() {
        Ok(value) => value,
        Err(_) => return price.to_string(),
    };

    match price_value.cmp(&prev_value) {
        Ordering::Greater => price.green().to_string(),
        Ordering::Less => price.red().to_string(),
        Ordering::Equal => price.to_string(),
    }
}

/// Formats the move from previous close as a signed percentage rounded to
/// two decimals, colored by the sign of the raw change. Unparsable input,
/// a zero previous close, and arithmetic leaving `Decimal` range all fall
/// back to `N/A`.
pub fn colorize_change_percent(last_done: &str, prev_close: &str) -> String {
    let last_value: Decimal = match last_done.parse() {
        Ok(value) => value,
        Err(_) => return NOT_AVAILABLE.to_string(),
    };
    let prev_value: Decimal = match prev_close.parse() {
        Ok(value) => value,
        Err(_) => return NOT_AVAILABLE.to_string(),
    };

    if prev_value.is_zero() {
        return NOT_AVAILABLE.to_string();
    }

    let change = match last_value
        .checked_sub(prev_value)
        .and_then(|diff| diff.checked_div(prev_value))
        .and_then(|ratio| ratio.checked_mul(dec!(100)))
    {
        Some(value) => value,
        None => return NOT_AVAILABLE.to_string(),
    };
    let formatted = format!("{:+.2}%", change.round_dp(2));

    match change.cmp(&Decimal::ZERO) {
        Ordering::Greater => formatted.green().to_string(),
        Ordering::Less => formatted.red().to_string(),
        Ordering::Equal => formatted,
    }
}

pub fn visible_width(text: &str) -> usize {
    ANSI_SEQUENCE.replace_all(text, "").chars().count()
}

/// Pads with trailing spaces until the cell occupies `width` visible
/// columns. Color sequences do not count against the width.
pub fn pad_cell(text: &str, width: usize) -> String {
    let visible = visible_width(text);
    if visible >= width {
        return text.to_string();
    }

    format!("{}{}", text, " ".repeat(width - visible))
}
