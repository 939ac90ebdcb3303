//! Drives payment method selection and submission against the selection
//! total, tracking the payment status lifecycle.

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::payment::{PaymentFormData, PaymentState, PaymentStatus};
use crate::errors::{DomainError, GatewayError};
use crate::selection::selectors::total_price;
use crate::selection::SelectionStore;

/// Payload sent to the payment backend. The amount is read from the
/// selection total at submission time; the backend independently validates
/// the price before charging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub reference: String,
    pub payment_method: String,
    pub recipient_number: String,
    pub service_code: String,
    pub amount: String,
    pub additional_infos: String,
    pub callback: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub payment_id: String,
    pub status: String,
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn submit_payment(&self, request: &PaymentRequest) -> Result<PaymentReceipt, GatewayError>;
}

#[derive(Clone, Debug, Default)]
pub struct PaymentAggregator {
    state: PaymentState,
}

impl PaymentAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PaymentState {
        &self.state
    }

    pub fn status(&self) -> PaymentStatus {
        self.state.status
    }

    pub fn form_mut(&mut self) -> &mut PaymentFormData {
        &mut self.state.form
    }

    pub fn set_payment_method(&mut self, method: impl Into<String>) {
        self.state.form.payment_method = method.into();
    }

    pub fn set_recipient_number(&mut self, number: impl Into<String>) {
        self.state.form.recipient_number = number.into();
    }

    pub fn set_amount(&mut self, amount: impl Into<String>) {
        self.state.form.amount = amount.into();
    }

    /// Submits the payment for the current selection total. The
    /// `is_submitting` flag is exposed so callers can disable duplicate
    /// submissions, but mutual exclusion is not enforced here.
    pub async fn submit<G>(
        &mut self,
        store: &SelectionStore,
        gateway: &G,
    ) -> Result<PaymentReceipt, PaymentError>
    where
        G: PaymentGateway,
    {
        self.state.transition_to(PaymentStatus::Processing)?;
        self.state.is_submitting = true;
        self.state.submitted_at = Some(Utc::now());
        self.state.form.amount = total_price(store).to_string();

        let request = PaymentRequest {
            reference: Uuid::new_v4().to_string(),
            payment_method: self.state.form.payment_method.clone(),
            recipient_number: self.state.form.recipient_number.clone(),
            service_code: self.state.form.service_code.clone(),
            amount: self.state.form.amount.clone(),
            additional_infos: self.state.form.additional_infos.clone(),
            callback: self.state.form.callback.clone(),
        };

        let result = gateway.submit_payment(&request).await;
        self.state.is_submitting = false;

        match result {
            Ok(receipt) => {
                self.state.transition_to(PaymentStatus::Success)?;
                self.state.payment_id = Some(receipt.payment_id.clone());
                info!(reference = %request.reference, payment_id = %receipt.payment_id, "payment confirmed");
                Ok(receipt)
            }
            Err(error) => {
                self.state.transition_to(PaymentStatus::Failed)?;
                self.state.error = Some(error.to_string());
                warn!(reference = %request.reference, %error, "payment failed");
                Err(PaymentError::Gateway(error))
            }
        }
    }

    /// User-abandoned submission.
    pub fn cancel(&mut self) -> Result<(), DomainError> {
        self.state.transition_to(PaymentStatus::Cancelled)
    }

    pub fn reset_payment_form(&mut self) {
        self.state.reset();
    }
}

#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum PaymentError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}
