// src/config.rs

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use crate::services::{AccountService, ExtractionService, GeminiClient, GenerativeBackend};
use crate::storage::{DatasetRepository, JsonDatasetRepository};

/// Configuração carregada do ambiente (arquivo .env e variáveis de
/// processo).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let data_dir = env::var("DATA_DIR")
            .unwrap_or_else(|_| "data".to_string())
            .into();
        let gemini_api_key = env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty());
        let gemini_model =
            env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-2.5-flash".to_string());

        Self {
            data_dir,
            gemini_api_key,
            gemini_model,
        }
    }
}

// O estado compartilhado que o aplicativo hospedeiro consome
pub struct AppState {
    pub accounts: AccountService,
    pub extraction: ExtractionService,
}

impl AppState {
    pub fn new() -> anyhow::Result<Self> {
        Self::with_config(&AppConfig::from_env())
    }

    // Monta o gráfico de dependências: armazenamento -> serviços
    pub fn with_config(config: &AppConfig) -> anyhow::Result<Self> {
        let repo: Arc<dyn DatasetRepository> =
            Arc::new(JsonDatasetRepository::new(&config.data_dir)?);

        let backend: Option<Arc<dyn GenerativeBackend>> = match &config.gemini_api_key {
            Some(key) => Some(Arc::new(GeminiClient::new(
                key.clone(),
                config.gemini_model.clone(),
            )?)),
            None => {
                tracing::warn!(
                    "GEMINI_API_KEY ausente; a extração de propostas usará somente o parser local"
                );
                None
            }
        };

        Ok(Self {
            accounts: AccountService::new(repo),
            extraction: ExtractionService::new(backend),
        })
    }
}

/// Inicializa o logger global (o filtro vem de RUST_LOG). Idempotente:
/// uma segunda chamada é ignorada.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init()
        .ok();
}
