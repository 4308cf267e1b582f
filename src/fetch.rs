// 🌐 Extract Fetcher
// HTTP boundary to the public KRS registry API. The analysis engines
// never see this layer; they consume parsed CompanyExtracts.

use crate::extract::{CompanyExtract, FullExtract};
use anyhow::{Context, Result};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// ExtractFetcher - polymorphic source of company extracts
///
/// - `Ok(Some(extract))`: document fetched and parsed
/// - `Ok(None)`: the registry explicitly has nothing to serve for this
///   identifier (non-success status)
/// - `Err`: transport failure (network, malformed body)
/// Callers treat the last two identically: nothing to analyze, carry on
/// with the rest of the batch.
pub trait ExtractFetcher {
    fn fetch(&self, registry_id: &str) -> Result<Option<CompanyExtract>>;
}

// ============================================================================
// KRS API CLIENT
// ============================================================================

/// KrsApiFetcher - blocking client for the registry's full-extract endpoint
///
/// GET {base_url}/OdpisPelny/{id}?rejestr=P
///
/// The base URL is injected at construction; there is deliberately no
/// ambient/global endpoint configuration.
pub struct KrsApiFetcher {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl KrsApiFetcher {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(KrsApiFetcher {
            client,
            base_url: base_url.into(),
        })
    }

    fn extract_url(&self, registry_id: &str) -> String {
        format!(
            "{}/OdpisPelny/{}?rejestr=P",
            self.base_url.trim_end_matches('/'),
            registry_id
        )
    }
}

impl ExtractFetcher for KrsApiFetcher {
    fn fetch(&self, registry_id: &str) -> Result<Option<CompanyExtract>> {
        let url = self.extract_url(registry_id);

        let response = self
            .client
            .get(&url)
            .send()
            .with_context(|| format!("Request to {} failed", url))?;

        if !response.status().is_success() {
            return Ok(None);
        }

        let raw: FullExtract = response
            .json()
            .with_context(|| format!("Malformed extract body for KRS {}", registry_id))?;

        Ok(Some(CompanyExtract::from_raw(raw, registry_id)))
    }
}

// ============================================================================
// TESTS
// ============================================================================
