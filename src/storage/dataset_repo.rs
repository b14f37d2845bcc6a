// src/storage/dataset_repo.rs

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::common::error::StorageError;
use crate::models::AccountDataset;

/// Colaborador de armazenamento durável: repositório chaveado por conta
/// que carrega e grava o dataset completo de uma vez só: a granularidade
/// de "transação" deste núcleo é o documento inteiro.
#[async_trait]
pub trait DatasetRepository: Send + Sync {
    /// `Ok(None)` quando a conta ainda não tem dataset gravado.
    /// `Err` somente quando existe um documento que não pôde ser lido ou
    /// interpretado; o chamador decide o fallback.
    async fn load(&self, account_id: &str) -> Result<Option<AccountDataset>, StorageError>;

    async fn save(&self, account_id: &str, dataset: &AccountDataset) -> Result<(), StorageError>;
}

/// Implementação em arquivos JSON: um documento por conta dentro de um
/// diretório base. Todos os campos fazem o ciclo serializa/desserializa
/// sem perda; datas gravam como "YYYY-MM-DD" e voltam como o mesmo dia de
/// calendário, sem deriva de fuso horário.
pub struct JsonDatasetRepository {
    base_dir: PathBuf,
}

impl JsonDatasetRepository {
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let base_dir = base_dir.into();
        std::fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    fn dataset_path(&self, account_id: &str) -> PathBuf {
        // Ids de conta são strings opacas; apenas caracteres seguros
        // entram no nome do arquivo.
        let sanitized: String = account_id
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.base_dir.join(format!("me_data_{sanitized}.json"))
    }
}

#[async_trait]
impl DatasetRepository for JsonDatasetRepository {
    async fn load(&self, account_id: &str) -> Result<Option<AccountDataset>, StorageError> {
        let path = self.dataset_path(account_id);

        let raw = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let dataset = serde_json::from_slice(&raw)?;
        Ok(Some(dataset))
    }

    async fn save(&self, account_id: &str, dataset: &AccountDataset) -> Result<(), StorageError> {
        let json = serde_json::to_vec_pretty(dataset)?;
        tokio::fs::write(self.dataset_path(account_id), json).await?;
        Ok(())
    }
}
