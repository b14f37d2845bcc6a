// src/services.rs

pub mod account_service;
pub use account_service::AccountService;
pub mod dashboard_service;
pub use dashboard_service::{compute_kpis, merge_schedule};
pub mod extraction_service;
pub use extraction_service::{Extraction, ExtractionService, ExtractionSource};
pub mod generative;
pub use generative::{GeminiClient, GenerativeBackend};
