//! HTTP client for the CNAR Sugu backend. Every request carries the static
//! `x-api-key` header; JSON content type is implied except for multipart
//! bodies. Timeouts come from configuration; there is no retry layer and no
//! cancellation of in-flight requests.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::multipart;
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use sugu_core::config::ApiConfig;
use sugu_core::enrollment::{SubscriptionGateway, SubscriptionReceipt, SubscriptionRequest};
use sugu_core::errors::GatewayError;
use sugu_core::payment::{PaymentGateway, PaymentReceipt, PaymentRequest};

use crate::models::{
    AutoPricingEntry, CoverageDefinition, IacPricing, MotoPricingEntry, MultirisquePackage,
    Paginated, PaymentMethod, PaymentResponse, ProductFormula, ProductQuery, ProductSummary,
    SubscriptionResponse, TermsDocument,
};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("could not build http client: {0}")]
    Build(reqwest::Error),
    #[error("invalid api key header")]
    InvalidApiKey,
    #[error("http transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend returned status {status}: {body}")]
    Status { status: u16, body: String },
}

impl From<ClientError> for GatewayError {
    fn from(error: ClientError) -> Self {
        match error {
            ClientError::Status { status, body } => Self::Rejected { status, message: body },
            other => Self::Transport(other.to_string()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        let api_key = HeaderValue::from_str(config.api_key.expose_secret())
            .map_err(|_| ClientError::InvalidApiKey)?;
        headers.insert("x-api-key", api_key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(ClientError::Build)?;

        Ok(Self { http, base_url: config.base_url.trim_end_matches('/').to_string() })
    }

    async fn get_json<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = format!("{}{path}", self.base_url);
        debug!(%url, "GET");

        let mut request = self.http.get(&url);
        if let Some(query) = query {
            request = request.query(query);
        }

        decode(request.send().await?).await
    }

    async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{path}", self.base_url);
        debug!(%url, "POST");

        decode(self.http.post(&url).json(body).send().await?).await
    }

    pub async fn list_products(
        &self,
        query: &ProductQuery,
    ) -> Result<Paginated<ProductSummary>, ClientError> {
        self.get_json("/v2/products", Some(query)).await
    }

    pub async fn get_product(&self, id: &str) -> Result<ProductSummary, ClientError> {
        self.get_json::<_, ()>(&format!("/v2/products/{id}"), None).await
    }

    pub async fn product_formulas(&self, id: &str) -> Result<Vec<ProductFormula>, ClientError> {
        self.get_json::<_, ()>(&format!("/v2/products/{id}/formulas"), None).await
    }

    /// Legacy pricing endpoint: rows matching one fiscal-horsepower value.
    pub async fn auto_pricing(&self, cv: u32) -> Result<Vec<AutoPricingEntry>, ClientError> {
        self.get_json("/pricing/auto", Some(&[("cv", cv)])).await
    }

    pub async fn auto_pricing_all(&self) -> Result<Vec<AutoPricingEntry>, ClientError> {
        self.get_json::<_, ()>("/pricing/auto/all", None).await
    }

    pub async fn moto_pricing(&self, category: &str) -> Result<Vec<MotoPricingEntry>, ClientError> {
        self.get_json("/pricing/moto", Some(&[("category", category)])).await
    }

    pub async fn moto_pricing_all(&self) -> Result<Vec<MotoPricingEntry>, ClientError> {
        self.get_json::<_, ()>("/pricing/moto/all", None).await
    }

    pub async fn multirisque_packages(&self) -> Result<Vec<MultirisquePackage>, ClientError> {
        self.get_json::<_, ()>("/pricing/multirisk-pro", None).await
    }

    pub async fn multirisque_package(
        &self,
        code: &str,
    ) -> Result<MultirisquePackage, ClientError> {
        self.get_json::<_, ()>(&format!("/pricing/multirisk-pro/{code}"), None).await
    }

    pub async fn iac_pricing(&self) -> Result<IacPricing, ClientError> {
        self.get_json::<_, ()>("/pricing/iac", None).await
    }

    pub async fn coverage_definitions(&self) -> Result<Vec<CoverageDefinition>, ClientError> {
        self.get_json::<_, ()>("/pricing/coverage-definitions", None).await
    }

    pub async fn payment_methods(
        &self,
        active_only: bool,
    ) -> Result<Vec<PaymentMethod>, ClientError> {
        self.get_json("/v2/payment-methods", Some(&[("active_only", active_only)])).await
    }

    pub async fn terms_conditions(
        &self,
        active_only: bool,
    ) -> Result<Vec<TermsDocument>, ClientError> {
        self.get_json("/v2/terms-conditions", Some(&[("active_only", active_only)])).await
    }

    pub async fn submit_subscription(
        &self,
        request: &SubscriptionRequest,
    ) -> Result<SubscriptionResponse, ClientError> {
        let url = format!("{}/v2/subscription", self.base_url);
        debug!(%url, reference = %request.reference, "POST multipart");

        let form = subscription_form(request)?;
        decode(self.http.post(&url).multipart(form).send().await?).await
    }

    pub async fn submit_payment(
        &self,
        request: &PaymentRequest,
    ) -> Result<PaymentResponse, ClientError> {
        self.post_json("/v2/payment", request).await
    }

    /// Legacy write endpoints, kept for backends that have not migrated to
    /// the v2 surface.
    pub async fn submit_subscription_legacy(
        &self,
        request: &SubscriptionRequest,
    ) -> Result<SubscriptionResponse, ClientError> {
        self.post_json("/subscriptions", request).await
    }

    pub async fn submit_payment_legacy(
        &self,
        request: &PaymentRequest,
    ) -> Result<PaymentResponse, ClientError> {
        self.post_json("/payments", request).await
    }
}

fn subscription_form(request: &SubscriptionRequest) -> Result<multipart::Form, ClientError> {
    let mut form = multipart::Form::new()
        .text("reference", request.reference.clone())
        .text("product_type", request.product_type.as_str())
        .text("product_details", request.product_details.to_string())
        .text("total_price", request.total_price.to_string())
        .text("name", request.form.name.clone())
        .text("surname", request.form.surname.clone())
        .text("phone_number", request.form.phone_number.clone());

    if let Some(email) = &request.form.email {
        form = form.text("email", email.clone());
    }
    if let Some(address) = &request.form.address {
        form = form.text("address", address.clone());
    }
    if let Some(business_name) = &request.form.business_name {
        form = form.text("business_name", business_name.clone());
    }

    for attachment in &request.form.files {
        let part = multipart::Part::bytes(attachment.data.clone())
            .file_name(attachment.file_name.clone())
            .mime_str(&attachment.content_type)?;
        form = form.part(attachment.field_name.clone(), part);
    }

    Ok(form)
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ClientError::Status { status: status.as_u16(), body });
    }

    Ok(response.json().await?)
}

#[async_trait]
impl SubscriptionGateway for ApiClient {
    async fn submit_subscription(
        &self,
        request: &SubscriptionRequest,
    ) -> Result<SubscriptionReceipt, GatewayError> {
        let response = ApiClient::submit_subscription(self, request).await?;
        Ok(SubscriptionReceipt { id: response.id, status: response.status })
    }
}

#[async_trait]
impl PaymentGateway for ApiClient {
    async fn submit_payment(&self, request: &PaymentRequest) -> Result<PaymentReceipt, GatewayError> {
        let response = ApiClient::submit_payment(self, request).await?;
        Ok(PaymentReceipt { payment_id: response.payment_id, status: response.status })
    }
}
