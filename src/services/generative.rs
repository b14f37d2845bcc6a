// src/services/generative.rs

use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::common::error::BackendError;

/// Colaborador generativo: recebe um prompt e devolve texto, opcionalmente
/// restrito a um schema JSON de saída. Toda falha (rede, auth, timeout,
/// resposta sem conteúdo) vira `BackendError`; quem chama decide o
/// fallback.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    async fn complete(
        &self,
        prompt: &str,
        output_schema: Option<Value>,
    ) -> Result<String, BackendError>;
}

const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

// Janela de paciência da chamada: estourou, o chamador cai para o caminho
// local em vez de esperar a rede indefinidamente.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Cliente HTTP da API Gemini (generateContent).
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            api_key: api_key.into(),
            model: model.into(),
        })
    }
}

#[async_trait]
impl GenerativeBackend for GeminiClient {
    async fn complete(
        &self,
        prompt: &str,
        output_schema: Option<Value>,
    ) -> Result<String, BackendError> {
        let mut body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });
        if let Some(schema) = output_schema {
            body["generationConfig"] = json!({
                "responseMimeType": "application/json",
                "responseSchema": schema,
            });
        }

        let url = format!("{GEMINI_ENDPOINT}/{}:generateContent", self.model);
        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let payload: Value = response.json().await?;
        let text = payload["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| {
                BackendError::MalformedResponse("resposta sem texto de candidato".into())
            })?;

        Ok(text.to_string())
    }
}
