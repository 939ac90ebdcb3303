//! Read-side catalog access: fetch, cache for the configured TTL, and fall
//! back to the static datasets when the backend is unreachable.

use std::future::Future;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::api::{ApiClient, ClientError};
use crate::cache::TtlCache;
use crate::fallback::{
    fallback_auto_pricing, fallback_coverage_definitions, fallback_iac_pricing,
    fallback_moto_pricing, fallback_multirisque_packages, fallback_payment_methods,
    fallback_terms,
};
use crate::models::{
    AutoPricingEntry, CoverageDefinition, IacPricing, MotoPricingEntry, MultirisquePackage,
    PaymentMethod, TermsDocument,
};

pub struct CatalogService {
    api: ApiClient,
    cache: TtlCache<serde_json::Value>,
}

impl CatalogService {
    pub fn new(api: ApiClient, ttl: Duration) -> Self {
        Self { api, cache: TtlCache::new(ttl) }
    }

    pub fn invalidate(&self, resource: &str) {
        self.cache.invalidate(resource);
    }

    pub async fn payment_methods(&self) -> Vec<PaymentMethod> {
        self.cached("payment_methods", self.api.payment_methods(true), fallback_payment_methods)
            .await
    }

    pub async fn auto_pricing(&self) -> Vec<AutoPricingEntry> {
        self.cached("auto_pricing", self.api.auto_pricing_all(), fallback_auto_pricing).await
    }

    pub async fn moto_pricing(&self) -> Vec<MotoPricingEntry> {
        self.cached("moto_pricing", self.api.moto_pricing_all(), fallback_moto_pricing).await
    }

    pub async fn multirisque_packages(&self) -> Vec<MultirisquePackage> {
        self.cached(
            "multirisque_packages",
            self.api.multirisque_packages(),
            fallback_multirisque_packages,
        )
        .await
    }

    pub async fn iac_pricing(&self) -> IacPricing {
        self.cached("iac_pricing", self.api.iac_pricing(), fallback_iac_pricing).await
    }

    pub async fn coverage_definitions(&self) -> Vec<CoverageDefinition> {
        self.cached(
            "coverage_definitions",
            self.api.coverage_definitions(),
            fallback_coverage_definitions,
        )
        .await
    }

    pub async fn terms_conditions(&self) -> Vec<TermsDocument> {
        self.cached("terms_conditions", self.api.terms_conditions(true), fallback_terms).await
    }

    /// Cache hit wins; on miss the fetch runs and a success is cached. Any
    /// fetch failure is logged and answered with the static fallback, which
    /// is never cached.
    async fn cached<T, Fut>(&self, resource: &str, fetch: Fut, fallback: fn() -> T) -> T
    where
        T: Serialize + DeserializeOwned,
        Fut: Future<Output = Result<T, ClientError>>,
    {
        if let Some(value) = self.cache.get(resource) {
            if let Ok(decoded) = serde_json::from_value(value) {
                return decoded;
            }
            // A cached value that no longer decodes is dropped as stale.
            self.cache.invalidate(resource);
        }

        match fetch.await {
            Ok(value) => {
                if let Ok(encoded) = serde_json::to_value(&value) {
                    self.cache.insert(resource, encoded);
                }
                value
            }
            Err(error) => {
                warn!(resource, %error, "catalog fetch failed, serving static fallback");
                fallback()
            }
        }
    }
}
