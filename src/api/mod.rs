use anyhow::Result;
use async_trait::async_trait;

use crate::models::QuoteSnapshot;

pub mod longport;
pub mod longport_dto;

pub use longport::{Config, LongportApi};

/// Batch quote lookup against the upstream brokerage service.
///
/// `LongportApi` is the production implementation; tests swap in a canned
/// source.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    async fn quote(&self, symbols: &[&str]) -> Result<Vec<QuoteSnapshot>>;
}
