pub mod api;
pub mod cache;
pub mod catalog;
pub mod fallback;
pub mod models;

pub use api::{ApiClient, ClientError};
pub use cache::TtlCache;
pub use catalog::CatalogService;
pub use models::{
    AutoPricingEntry, CoverageDefinition, IacPricing, MotoPricingEntry, MultirisquePackage,
    Paginated, PaymentMethod, PaymentResponse, ProductFormula, ProductQuery, ProductSummary,
    SubscriptionResponse, TermsContent, TermsDocument, TermsSection,
};
