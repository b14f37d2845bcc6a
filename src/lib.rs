// src/lib.rs

//! Núcleo de dados do Mil Eventos: o grafo de entidades de cada conta
//! (propostas, eventos, clientes, transações, fornecedores, notificações e
//! perfil do negócio) com persistência durável, as projeções derivadas
//! (agenda unificada e KPIs) e a extração de propostas a partir de texto
//! livre, com backend generativo e fallback heurístico local.

pub mod common;
pub mod config;
pub mod models;
pub mod seed;
pub mod services;
pub mod storage;

pub use common::error::{AppError, BackendError, StorageError};
pub use config::{init_logging, AppConfig, AppState};
pub use seed::seed_dataset;
pub use services::{
    compute_kpis, merge_schedule, AccountService, Extraction, ExtractionService, ExtractionSource,
    GeminiClient, GenerativeBackend,
};
pub use storage::{DatasetRepository, JsonDatasetRepository};
