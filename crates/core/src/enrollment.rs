//! Merges the active product selection with user-entered identity data into
//! one submittable enrollment record.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::enrollment::{ClientType, EnrollmentFormData};
use crate::domain::product::ProductType;
use crate::errors::GatewayError;
use crate::selection::selectors::{
    current_product_details, has_product_selection, total_price, CurrentProduct,
};
use crate::selection::SelectionStore;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: &str) -> Self {
        Self { field: field.to_string(), message: message.to_string() }
    }
}

/// Decision taken when the enrollment flow is entered. Arriving without an
/// active selection is an inconsistent state handled by navigation, not by
/// an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnrollmentEntry {
    Proceed,
    RedirectToCatalog,
}

pub fn entry_decision(store: &SelectionStore) -> EnrollmentEntry {
    let standalone_iac = store.selected_product_type() == Some(ProductType::Iac);
    if has_product_selection(store) || standalone_iac {
        EnrollmentEntry::Proceed
    } else {
        EnrollmentEntry::RedirectToCatalog
    }
}

/// Submittable enrollment payload. `product_details` snapshots the active
/// slot client-side; the backend is expected to re-validate before binding
/// the policy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionRequest {
    pub reference: String,
    pub product_type: ProductType,
    pub product_details: serde_json::Value,
    pub total_price: u64,
    pub form: EnrollmentFormData,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionReceipt {
    pub id: String,
    pub status: String,
}

#[async_trait]
pub trait SubscriptionGateway: Send + Sync {
    async fn submit_subscription(
        &self,
        request: &SubscriptionRequest,
    ) -> Result<SubscriptionReceipt, GatewayError>;
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum EnrollmentError {
    #[error("no active product selection; enrollment requires one")]
    RedirectToCatalog,
    #[error("validation failed for {} field(s)", .0.len())]
    Validation(Vec<FieldError>),
    #[error("could not encode product details: {0}")]
    Encode(String),
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

#[derive(Clone, Debug, Default)]
pub struct EnrollmentAggregator {
    pub form: EnrollmentFormData,
    field_errors: Vec<FieldError>,
    flow_error: Option<String>,
    is_submitting: bool,
}

impl EnrollmentAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field_errors(&self) -> &[FieldError] {
        &self.field_errors
    }

    pub fn flow_error(&self) -> Option<&str> {
        self.flow_error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Field-scoped validation against the active product type. A field
    /// belonging to an inactive product group is not validated.
    pub fn validate(&mut self, store: &SelectionStore) -> &[FieldError] {
        let mut errors = Vec::new();

        if self.form.name.trim().is_empty() {
            errors.push(FieldError::new("name", "required"));
        }
        if self.form.surname.trim().is_empty() {
            errors.push(FieldError::new("surname", "required"));
        }
        if self.form.phone_number.trim().is_empty() {
            errors.push(FieldError::new("phone_number", "required"));
        }
        if let Some(email) = self.form.email.as_deref() {
            if !email.contains('@') {
                errors.push(FieldError::new("email", "invalid email address"));
            }
        }

        let active = store.selected_product_type();

        if matches!(active, Some(ProductType::Auto | ProductType::Moto))
            && self.form.vehicle_registration.as_deref().map(str::trim).unwrap_or("").is_empty()
        {
            errors.push(FieldError::new("vehicle_registration", "required"));
        }

        let needs_business = active == Some(ProductType::MultiriskPro)
            || self.form.client_type == ClientType::Business;
        if needs_business {
            if self.form.business_name.as_deref().map(str::trim).unwrap_or("").is_empty() {
                errors.push(FieldError::new("business_name", "required"));
            }
            if self.form.business_type.is_none() {
                errors.push(FieldError::new("business_type", "required"));
            }
        }

        if active == Some(ProductType::Iac)
            && self.form.beneficiary_name.as_deref().map(str::trim).unwrap_or("").is_empty()
        {
            errors.push(FieldError::new("beneficiary_name", "required"));
        }

        self.field_errors = errors;
        &self.field_errors
    }

    /// Builds the submittable payload from the active selection and the
    /// entered identity fields. Blocks on validation errors and on entry
    /// without a selection.
    pub fn build_submission(
        &mut self,
        store: &SelectionStore,
    ) -> Result<SubscriptionRequest, EnrollmentError> {
        if entry_decision(store) == EnrollmentEntry::RedirectToCatalog {
            return Err(EnrollmentError::RedirectToCatalog);
        }

        let errors = self.validate(store);
        if !errors.is_empty() {
            return Err(EnrollmentError::Validation(errors.to_vec()));
        }

        let (product_type, product_details) = active_product_payload(store)?;

        Ok(SubscriptionRequest {
            reference: Uuid::new_v4().to_string(),
            product_type,
            product_details,
            total_price: total_price(store),
            form: self.form.clone(),
        })
    }

    /// Submits the enrollment. A gateway failure records a flow-level error
    /// and keeps every entered field so the user can retry without
    /// re-typing; success resets the form.
    pub async fn submit<G>(
        &mut self,
        store: &SelectionStore,
        gateway: &G,
    ) -> Result<SubscriptionReceipt, EnrollmentError>
    where
        G: SubscriptionGateway,
    {
        let request = self.build_submission(store)?;

        self.is_submitting = true;
        self.flow_error = None;
        let result = gateway.submit_subscription(&request).await;
        self.is_submitting = false;

        match result {
            Ok(receipt) => {
                info!(reference = %request.reference, id = %receipt.id, "enrollment submitted");
                self.form.reset();
                self.field_errors.clear();
                Ok(receipt)
            }
            Err(error) => {
                warn!(reference = %request.reference, %error, "enrollment submission failed");
                self.flow_error = Some(error.to_string());
                Err(EnrollmentError::Gateway(error))
            }
        }
    }
}

/// The payload follows `selected_product_type` and its own slot; the
/// priority view is only a fallback for the degenerate case where the
/// active type's slot was cleared underneath it.
fn active_product_payload(
    store: &SelectionStore,
) -> Result<(ProductType, serde_json::Value), EnrollmentError> {
    let encode =
        |value: serde_json::Result<serde_json::Value>| -> Result<serde_json::Value, EnrollmentError> {
            value.map_err(|error| EnrollmentError::Encode(error.to_string()))
        };

    match store.selected_product_type() {
        Some(ProductType::Auto) => {
            if let Some(auto) = store.auto_selection() {
                return Ok((ProductType::Auto, encode(serde_json::to_value(auto))?));
            }
        }
        Some(ProductType::Moto) => {
            if let Some(moto) = store.moto_selection() {
                return Ok((ProductType::Moto, encode(serde_json::to_value(moto))?));
            }
        }
        Some(ProductType::MultiriskPro) => {
            if let Some(multirisque) = store.multirisque_selection() {
                return Ok((ProductType::MultiriskPro, encode(serde_json::to_value(multirisque))?));
            }
        }
        Some(ProductType::Iac) => {
            // Standalone IAC flow: no base product slot, the add-on is the
            // product.
            if let Some(add_on) = store.iac_add_on() {
                return Ok((ProductType::Iac, encode(serde_json::to_value(add_on))?));
            }
        }
        Some(ProductType::Legacy) | None => {}
    }

    match current_product_details(store) {
        Some(CurrentProduct::Auto(auto)) => {
            Ok((ProductType::Auto, encode(serde_json::to_value(auto))?))
        }
        Some(CurrentProduct::Moto(moto)) => {
            Ok((ProductType::Moto, encode(serde_json::to_value(moto))?))
        }
        Some(CurrentProduct::Multirisque(multirisque)) => {
            Ok((ProductType::MultiriskPro, encode(serde_json::to_value(multirisque))?))
        }
        None => Err(EnrollmentError::RedirectToCatalog),
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use std::sync::Mutex;

    use super::{
        entry_decision, EnrollmentAggregator, EnrollmentEntry, EnrollmentError,
        SubscriptionGateway, SubscriptionReceipt, SubscriptionRequest,
    };
    use crate::domain::product::ProductType;
    use crate::errors::GatewayError;
    use crate::selection::fixtures::{auto_selection, iac_add_on, multirisque_selection};
    use crate::selection::SelectionStore;

    #[derive(Default)]
    struct RecordingGateway {
        requests: Mutex<Vec<SubscriptionRequest>>,
        fail_with: Option<GatewayError>,
    }

    #[async_trait]
    impl SubscriptionGateway for RecordingGateway {
        async fn submit_subscription(
            &self,
            request: &SubscriptionRequest,
        ) -> Result<SubscriptionReceipt, GatewayError> {
            self.requests.lock().expect("gateway lock").push(request.clone());
            match &self.fail_with {
                Some(error) => Err(error.clone()),
                None => Ok(SubscriptionReceipt {
                    id: "SUB-001".to_string(),
                    status: "received".to_string(),
                }),
            }
        }
    }

    fn filled_aggregator() -> EnrollmentAggregator {
        let mut aggregator = EnrollmentAggregator::new();
        aggregator.form.name = "Aïssa".to_string();
        aggregator.form.surname = "Maïga".to_string();
        aggregator.form.phone_number = "+22790000000".to_string();
        aggregator.form.vehicle_registration = Some("8 A 1234 RN".to_string());
        aggregator
    }

    #[test]
    fn entry_without_selection_redirects_to_catalog() {
        assert_eq!(
            entry_decision(&SelectionStore::new()),
            EnrollmentEntry::RedirectToCatalog
        );
    }

    #[test]
    fn entry_with_standalone_iac_proceeds() {
        let mut store = SelectionStore::new();
        store.set_iac_add_on(iac_add_on(true, 5_000));
        store.set_product_type(ProductType::Iac);

        assert_eq!(entry_decision(&store), EnrollmentEntry::Proceed);
    }

    #[test]
    fn validation_skips_inactive_product_groups() {
        let mut store = SelectionStore::new();
        store.set_multirisque_selection(multirisque_selection(120_000));

        let mut aggregator = filled_aggregator();
        aggregator.form.vehicle_registration = None;
        let errors = aggregator.validate(&store).to_vec();

        assert!(errors.iter().all(|error| error.field != "vehicle_registration"));
        assert!(errors.iter().any(|error| error.field == "business_name"));
        assert!(errors.iter().any(|error| error.field == "business_type"));
    }

    #[test]
    fn validation_requires_vehicle_fields_for_auto() {
        let mut store = SelectionStore::new();
        store.set_auto_selection(auto_selection(50_000));

        let mut aggregator = EnrollmentAggregator::new();
        let errors = aggregator.validate(&store);

        let fields: Vec<&str> = errors.iter().map(|error| error.field.as_str()).collect();
        assert!(fields.contains(&"name"));
        assert!(fields.contains(&"vehicle_registration"));
    }

    #[test]
    fn build_submission_embeds_active_slot_and_total() {
        let mut store = SelectionStore::new();
        store.set_auto_selection(auto_selection(50_000));
        store.set_iac_add_on(iac_add_on(true, 5_000));

        let mut aggregator = filled_aggregator();
        let request = aggregator.build_submission(&store).expect("valid submission");

        assert_eq!(request.product_type, ProductType::Auto);
        assert_eq!(request.total_price, 55_000);
        assert_eq!(request.product_details["price"], 50_000);
    }

    #[tokio::test]
    async fn successful_submission_resets_the_form() {
        let mut store = SelectionStore::new();
        store.set_auto_selection(auto_selection(50_000));

        let gateway = RecordingGateway::default();
        let mut aggregator = filled_aggregator();

        let receipt = aggregator.submit(&store, &gateway).await.expect("submission accepted");

        assert_eq!(receipt.id, "SUB-001");
        assert!(aggregator.form.name.is_empty(), "form resets after success");
        assert_eq!(gateway.requests.lock().expect("gateway lock").len(), 1);
    }

    #[tokio::test]
    async fn failed_submission_keeps_entered_values() {
        let mut store = SelectionStore::new();
        store.set_auto_selection(auto_selection(50_000));

        let gateway = RecordingGateway {
            fail_with: Some(GatewayError::Transport("connection refused".to_string())),
            ..RecordingGateway::default()
        };
        let mut aggregator = filled_aggregator();

        let error = aggregator.submit(&store, &gateway).await.expect_err("gateway down");

        assert!(matches!(error, EnrollmentError::Gateway(_)));
        assert_eq!(aggregator.form.name, "Aïssa", "entered values survive the failure");
        assert!(aggregator.flow_error().is_some());
        assert!(!aggregator.is_submitting());
    }

    #[tokio::test]
    async fn validation_errors_block_submission() {
        let mut store = SelectionStore::new();
        store.set_auto_selection(auto_selection(50_000));

        let gateway = RecordingGateway::default();
        let mut aggregator = EnrollmentAggregator::new();

        let error = aggregator.submit(&store, &gateway).await.expect_err("empty form");

        assert!(matches!(error, EnrollmentError::Validation(_)));
        assert!(gateway.requests.lock().expect("gateway lock").is_empty());
    }

    #[test]
    fn standalone_iac_submission_uses_add_on_as_product() {
        let mut store = SelectionStore::new();
        store.set_iac_add_on(iac_add_on(true, 5_000));
        store.set_product_type(ProductType::Iac);

        let mut aggregator = filled_aggregator();
        aggregator.form.beneficiary_name = Some("Hadiza Maïga".to_string());
        let request = aggregator.build_submission(&store).expect("standalone IAC submission");

        assert_eq!(request.product_type, ProductType::Iac);
        assert_eq!(request.total_price, 5_000);
        assert_eq!(request.product_details["death_capital"], 1_000_000);
    }
}
