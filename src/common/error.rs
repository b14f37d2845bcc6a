// src/common/error.rs

use thiserror::Error;

// Cada classe de falha tem a sua própria recuperação definida, e nenhuma
// delas pode abortar uma operação visível ao usuário:
// - StorageError: corrupção/E-S no armazenamento durável. O store loga e
//   segue com um dataset vazio (na ativação) ou mantém o estado em memória
//   como autoritativo (nas gravações).
// - BackendError: falha do backend generativo. A extração loga e cai para
//   o parser heurístico local.
// - AppError: a fronteira de uso da API, conta não ativada ou payload que
//   viola os invariantes estruturais do modelo de entidades.

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Erro de E/S no armazenamento: {0}")]
    Io(#[from] std::io::Error),

    #[error("Dados corrompidos no armazenamento: {0}")]
    Corrupt(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Backend generativo não configurado")]
    NotConfigured,

    #[error("Erro de rede no backend generativo: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Resposta malformada do backend generativo: {0}")]
    MalformedResponse(String),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Nenhuma conta ativa")]
    NoActiveAccount,
}
