use std::io::Write;

use anyhow::Result;
use async_trait::async_trait;
use log::debug;

use crate::{
    api::QuoteSource,
    app::{poller::Task, table},
};

/// One poll cycle over a fixed watchlist: fetch every symbol's quote, then
/// render the table to `out`.
pub struct QuoteBoard<S, W> {
    source: S,
    symbols: Vec<String>,
    out: W,
}

impl<S, W> QuoteBoard<S, W> {
    pub fn new(source: S, symbols: Vec<String>, out: W) -> Self {
        Self { source, symbols, out }
    }

    pub fn out(&self) -> &W {
        &self.out
    }
}

#[async_trait]
impl<S: QuoteSource, W: Write + Send> Task for QuoteBoard<S, W> {
    async fn run_once(&mut self) -> Result<()> {
        let symbols = self.symbols.iter().map(String::as_str).collect::<Vec<_>>();
        let quotes = self.source.quote(&symbols).await?;

        debug!("rendering {} quotes", quotes.len());

        table::render(&mut self.out, &quotes)
    }
}
