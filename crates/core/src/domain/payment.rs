use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Pending,
    Processing,
    Success,
    Failed,
    Cancelled,
}

impl PaymentStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Success | Self::Failed | Self::Cancelled)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentFormData {
    pub payment_method: String,
    pub recipient_number: String,
    pub service_code: String,
    pub amount: String,
    pub additional_infos: String,
    pub callback: String,
}

/// Payment submission lifecycle. Transitions are monotonic per attempt:
/// once a terminal status is reached, only [`PaymentState::reset`] leaves it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentState {
    pub form: PaymentFormData,
    pub status: PaymentStatus,
    pub payment_id: Option<String>,
    pub error: Option<String>,
    pub is_submitting: bool,
    pub submitted_at: Option<DateTime<Utc>>,
}

impl Default for PaymentState {
    fn default() -> Self {
        Self {
            form: PaymentFormData::default(),
            status: PaymentStatus::Pending,
            payment_id: None,
            error: None,
            is_submitting: false,
            submitted_at: None,
        }
    }
}

impl PaymentState {
    pub fn can_transition_to(&self, next: PaymentStatus) -> bool {
        use PaymentStatus::{Cancelled, Failed, Pending, Processing, Success};
        matches!(
            (self.status, next),
            (Pending, Processing)
                | (Processing, Success)
                | (Processing, Failed)
                | (Pending, Cancelled)
                | (Processing, Cancelled)
        )
    }

    pub fn transition_to(&mut self, next: PaymentStatus) -> Result<(), DomainError> {
        if self.can_transition_to(next) {
            self.status = next;
            return Ok(());
        }

        Err(DomainError::InvalidPaymentTransition { from: self.status, to: next })
    }

    /// The only way out of a terminal status. Clears the payment id and the
    /// error but keeps the entered form fields.
    pub fn reset(&mut self) {
        self.status = PaymentStatus::Pending;
        self.payment_id = None;
        self.error = None;
        self.is_submitting = false;
        self.submitted_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::{PaymentState, PaymentStatus};

    #[test]
    fn allows_submission_lifecycle() {
        let mut state = PaymentState::default();
        state.transition_to(PaymentStatus::Processing).expect("pending -> processing");
        state.transition_to(PaymentStatus::Success).expect("processing -> success");
        assert_eq!(state.status, PaymentStatus::Success);
    }

    #[test]
    fn terminal_status_blocks_reentry_without_reset() {
        let mut state = PaymentState::default();
        state.transition_to(PaymentStatus::Processing).expect("pending -> processing");
        state.transition_to(PaymentStatus::Failed).expect("processing -> failed");

        let error = state
            .transition_to(PaymentStatus::Processing)
            .expect_err("failed -> processing must be rejected");
        assert!(matches!(error, crate::errors::DomainError::InvalidPaymentTransition { .. }));
    }

    #[test]
    fn reset_returns_to_pending_and_clears_outcome() {
        let mut state = PaymentState::default();
        state.form.payment_method = "orange_money".to_string();
        state.transition_to(PaymentStatus::Processing).expect("pending -> processing");
        state.transition_to(PaymentStatus::Success).expect("processing -> success");
        state.payment_id = Some("PAY-123".to_string());

        state.reset();

        assert_eq!(state.status, PaymentStatus::Pending);
        assert_eq!(state.payment_id, None);
        assert_eq!(state.error, None);
        assert_eq!(state.form.payment_method, "orange_money");
    }

    #[test]
    fn user_can_abandon_before_and_during_submission() {
        let mut pending = PaymentState::default();
        pending.transition_to(PaymentStatus::Cancelled).expect("pending -> cancelled");

        let mut processing = PaymentState::default();
        processing.transition_to(PaymentStatus::Processing).expect("pending -> processing");
        processing.transition_to(PaymentStatus::Cancelled).expect("processing -> cancelled");
    }

    #[test]
    fn success_cannot_be_cancelled() {
        let mut state = PaymentState::default();
        state.transition_to(PaymentStatus::Processing).expect("pending -> processing");
        state.transition_to(PaymentStatus::Success).expect("processing -> success");
        assert!(!state.can_transition_to(PaymentStatus::Cancelled));
    }
}
