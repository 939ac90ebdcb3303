pub mod config;
pub mod domain;
pub mod draft;
pub mod enrollment;
pub mod errors;
pub mod payment;
pub mod selection;

pub use domain::enrollment::{Attachment, ClientType, EnrollmentFormData};
pub use domain::payment::{PaymentFormData, PaymentState, PaymentStatus};
pub use domain::product::{
    AutoFormula, AutoSelection, BusinessType, CoverageChapter, CoverageDetails, CoverageItem,
    CvRange, IacAddOn, MotoCategory, MotoFormula, MotoSelection, MultirisqueSelection, ProductType,
};
pub use draft::{DraftStore, EnrollmentDraft, JsonFileDraftStore};
pub use enrollment::{
    entry_decision, EnrollmentAggregator, EnrollmentEntry, EnrollmentError, FieldError,
    SubscriptionGateway, SubscriptionReceipt, SubscriptionRequest,
};
pub use errors::{ApplicationError, DomainError, GatewayError};
pub use payment::{
    PaymentAggregator, PaymentError, PaymentGateway, PaymentReceipt, PaymentRequest,
};
pub use selection::selectors::{
    current_product_details, has_product_selection, total_price, CurrentProduct,
};
pub use selection::SelectionStore;
