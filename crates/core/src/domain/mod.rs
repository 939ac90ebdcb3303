pub mod enrollment;
pub mod payment;
pub mod product;
