use derive_getters::Getters;
use derive_new::new;

pub const NOT_AVAILABLE: &str = "N/A";

/// Per-symbol quote state for one render cycle. Prices stay in the exact
/// string form the upstream service reported them in; sessions the venue
/// did not report are `N/A`.
#[derive(Clone, Debug, Getters, new)]
pub struct QuoteSnapshot {
    symbol: String,
    prev_close: String,
    last_done: String,
    pre_market: String,
    post_market: String,
}

pub fn price_cell(value: Option<&str>) -> String {
    match value {
        Some(text) if !text.trim().is_empty() => text.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}
