use derive_getters::Getters;
use derive_new::new;
use serde::Deserialize;

use crate::models::{QuoteSnapshot, quote::price_cell};

#[derive(Debug, Deserialize, Getters, new)]
pub struct LongportResponseDto {
    code: i64,
    #[serde(default)]
    message: String,
    data: Option<LongportQuoteListDto>,
}

#[derive(Debug, Deserialize, Getters, new)]
pub struct LongportQuoteListDto {
    secu_quote: Vec<LongportQuoteDto>,
}

#[derive(Debug, Deserialize, Getters, new)]
pub struct LongportQuoteDto {
    symbol: String,
    last_done: String,
    prev_close: String,
    open: String,
    high: String,
    low: String,
    timestamp: i64,
    volume: i64,
    turnover: String,
    trade_status: i32,
    pre_market_quote: Option<LongportSessionQuoteDto>,
    post_market_quote: Option<LongportSessionQuoteDto>,
}

#[derive(Debug, Deserialize, Getters, new)]
pub struct LongportSessionQuoteDto {
    last_done: String,
    timestamp: i64,
    volume: i64,
    turnover: String,
    high: String,
    low: String,
    prev_close: String,
}

impl LongportQuoteDto {
    pub fn to_snapshot(&self) -> QuoteSnapshot {
        QuoteSnapshot::new(
            self.symbol.clone(),
            price_cell(Some(&self.prev_close)),
            price_cell(Some(&self.last_done)),
            price_cell(
                self.pre_market_quote
                    .as_ref()
                    .map(|quote| quote.last_done.as_str()),
            ),
            price_cell(
                self.post_market_quote
                    .as_ref()
                    .map(|quote| quote.last_done.as_str()),
            ),
        )
    }
}
