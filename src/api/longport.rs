use std::time::Duration;

use anyhow::{Context, Error, Result};
use async_trait::async_trait;
use chrono::Utc;
use derive_new::new;
use hmac::{Hmac, Mac};
use log::debug;
use reqwest::Client;
use sha1::{Digest, Sha1};
use sha2::Sha256;

use crate::{
    api::{QuoteSource, longport_dto::LongportResponseDto},
    models::QuoteSnapshot,
};

const DEFAULT_BASE_URL: &str = "https://openapi.longportapp.com";
const QUOTE_PATH: &str = "/v1/quote";
const SIGNED_HEADERS: &str = "authorization;x-api-key;x-timestamp";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

type HmacSha256 = Hmac<Sha256>;

#[derive(Clone, Debug, new)]
pub struct Config {
    app_key: String,
    app_secret: String,
    access_token: String,
    base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let app_key = std::env::var("LONGPORT_APP_KEY")
            .context("Missing LONGPORT_APP_KEY in environment")?;
        let app_secret = std::env::var("LONGPORT_APP_SECRET")
            .context("Missing LONGPORT_APP_SECRET in environment")?;
        let access_token = std::env::var("LONGPORT_ACCESS_TOKEN")
            .context("Missing LONGPORT_ACCESS_TOKEN in environment")?;
        let base_url =
            std::env::var("LONGPORT_HTTP_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Ok(Self::new(app_key, app_secret, access_token, base_url))
    }
}

#[derive(Clone, Debug)]
pub struct LongportApi {
    client: Client,
    config: Config,
}

impl LongportApi {
    pub fn new(config: Config) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, config }
    }

    async fn make_request(&self, path: &str, query: &str) -> Result<String> {
        let timestamp = format!("{:.3}", Utc::now().timestamp_millis() as f64 / 1000.0);
        let signature = sign_request(&self.config, "GET", path, query, &timestamp)?;
        let url = format!("{}{}?{}", self.config.base_url, path, query);

        let res = self
            .client
            .get(&url)
            .header("X-Api-Key", &self.config.app_key)
            .header("Authorization", &self.config.access_token)
            .header("X-Timestamp", &timestamp)
            .header("X-Api-Signature", signature)
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(Error::msg(format!("Request failed: {}", res.status())));
        }

        Ok(res.text().await?)
    }
}

#[async_trait]
impl QuoteSource for LongportApi {
    async fn quote(&self, symbols: &[&str]) -> Result<Vec<QuoteSnapshot>> {
        let query = symbols
            .iter()
            .map(|symbol| format!("symbol={}", symbol))
            .collect::<Vec<_>>()
            .join("&");

        debug!("requesting quotes for {} symbols", symbols.len());

        let body = self.make_request(QUOTE_PATH, &query).await?;
        parse_quote_response(&body)
    }
}

pub fn parse_quote_response(body: &str) -> Result<Vec<QuoteSnapshot>> {
    let res = serde_json::from_str::<LongportResponseDto>(body)
        .with_context(|| format!("Unexpected API response: {}", body))?;

    if *res.code() != 0 {
        return Err(Error::msg(format!(
            "LongPort error {}: {}",
            res.code(),
            res.message()
        )));
    }

    match res.data() {
        Some(data) => Ok(data
            .secu_quote()
            .iter()
            .map(|quote| quote.to_snapshot())
            .collect()),
        None => Err(Error::msg("Empty API response")),
    }
}

/// Signs one request the way the vendor's OpenAPI gateway expects it: the
/// canonical request is SHA-1 hashed, then HMAC-SHA256 signed with the app
/// secret. The timestamp must be the same value sent in `X-Timestamp`.
pub fn sign_request(
    config: &Config,
    method: &str,
    path: &str,
    query: &str,
    timestamp: &str,
) -> Result<String> {
    let canonical_request = format!(
        "{}|{}|{}|authorization:{}\nx-api-key:{}\nx-timestamp:{}\n|{}|",
        method, path, query, config.access_token, config.app_key, timestamp, SIGNED_HEADERS
    );
    let sign_str = format!(
        "HMAC-SHA256|{}",
        hex::encode(Sha1::digest(canonical_request.as_bytes()))
    );

    let mut mac = HmacSha256::new_from_slice(config.app_secret.as_bytes())
        .map_err(|e| Error::msg(format!("Invalid signing secret: {}", e)))?;
    mac.update(sign_str.as_bytes());
    let signature = hex::encode(mac.finalize().into_bytes());

    Ok(format!(
        "HMAC-SHA256 SignedHeaders={}, Signature={}",
        SIGNED_HEADERS, signature
    ))
}
