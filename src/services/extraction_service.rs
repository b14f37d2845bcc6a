// src/services/extraction_service.rs

use std::sync::Arc;

use chrono::{Datelike, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::Deserialize;
use serde_json::json;

use crate::common::error::BackendError;
use crate::models::DraftProposal;
use crate::services::generative::GenerativeBackend;

/// De onde saiu o rascunho. O caminho heurístico é determinístico por
/// entrada; o caminho do modelo não tem essa garantia, e um resultado que
/// chegou depois de uma requisição mais nova deve ser descartado pelo
/// chamador (última requisição vence).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionSource {
    Model,
    Heuristic,
}

#[derive(Debug, Clone)]
pub struct Extraction {
    pub source: ExtractionSource,
    pub draft: DraftProposal,
}

// Resposta estruturada do modelo; tudo opcional porque o modelo pode
// omitir o que não encontrou no texto.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDraft {
    #[serde(default)]
    client_name: Option<String>,
    #[serde(default)]
    event_name: Option<String>,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    service_type: Option<String>,
}

// Nome próprio logo após um token de apresentação ("sou a Carol",
// "fala com o Pedro"): captura uma única palavra capitalizada.
static NOME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i:sou|chamo|aqui é|fala com) (?i:[oa] )?(\p{Lu}\p{Ll}+)").unwrap());

// Vocabulário fixo de serviços/eventos.
static TIPO_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(dj|fotografia|decoração|iluminação|som|banda|casamento|15 anos)").unwrap()
});

// D/M, D/M/YY ou D/M/YYYY; sempre dia/mês, nunca mês/dia.
static DATA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,2})/(\d{1,2})(?:/(\d{2,4}))?").unwrap());

/// Transforma texto livre (ex.: mensagem colada do WhatsApp) num rascunho
/// estruturado de proposta. Tenta o backend generativo primeiro e cai para
/// o parser local em qualquer falha: a funcionalidade degrada, nunca
/// quebra, inclusive totalmente offline.
pub struct ExtractionService {
    backend: Option<Arc<dyn GenerativeBackend>>,
}

impl ExtractionService {
    pub fn new(backend: Option<Arc<dyn GenerativeBackend>>) -> Self {
        Self { backend }
    }

    /// Nunca falha: sem backend, com backend fora do ar ou com resposta
    /// ilegível, o resultado vem do parser local (e no pior caso é um
    /// rascunho só com a data de hoje).
    pub async fn extract(&self, text: &str) -> Extraction {
        let today = Local::now().date_naive();

        if let Some(backend) = &self.backend {
            match extract_with_model(backend.as_ref(), text, today).await {
                Ok(draft) => {
                    return Extraction {
                        source: ExtractionSource::Model,
                        draft,
                    };
                }
                Err(e) => {
                    tracing::warn!("Extração via modelo falhou, usando heurística local: {e}");
                }
            }
        }

        Extraction {
            source: ExtractionSource::Heuristic,
            draft: extract_heuristic(text, today),
        }
    }

    /// Descrição curta de proposta escrita pelo modelo, com fallback
    /// estático quando o backend está ausente ou falha.
    pub async fn generate_proposal_description(
        &self,
        event_name: &str,
        client_name: &str,
        service_type: &str,
    ) -> String {
        if let Some(backend) = &self.backend {
            let prompt = format!(
                "Crie uma breve descrição profissional e amigável para uma proposta de evento. \
                 A proposta é para o cliente \"{client_name}\" para o evento \"{event_name}\". \
                 O serviço principal é \"{service_type}\". Foque em transmitir profissionalismo \
                 e entusiasmo. Responda em português do Brasil."
            );
            match backend.complete(&prompt, None).await {
                Ok(text) if !text.trim().is_empty() => return text,
                Ok(_) => tracing::warn!("Backend generativo devolveu descrição vazia"),
                Err(e) => tracing::warn!("Geração de descrição falhou, usando texto padrão: {e}"),
            }
        }

        format!("Proposta de {service_type} para o evento {event_name} de {client_name}.")
    }
}

async fn extract_with_model(
    backend: &dyn GenerativeBackend,
    text: &str,
    today: NaiveDate,
) -> Result<DraftProposal, BackendError> {
    let prompt = format!(
        "Extraia as seguintes informações do texto: nome do cliente, nome do evento \
         (ex: Casamento, Aniversário), data (formato YYYY-MM-DD, assuma o ano atual se não \
         especificado) e tipo de serviço (DJ, Fotografia, etc). Texto: \"{text}\""
    );
    let schema = json!({
        "type": "object",
        "properties": {
            "clientName": { "type": "string" },
            "eventName": { "type": "string" },
            "date": { "type": "string" },
            "serviceType": { "type": "string" }
        }
    });

    let response = backend.complete(&prompt, Some(schema)).await?;
    let raw: RawDraft = serde_json::from_str(&response)
        .map_err(|e| BackendError::MalformedResponse(e.to_string()))?;

    Ok(DraftProposal {
        client_name: non_empty(raw.client_name),
        event_name: non_empty(raw.event_name),
        date: raw
            .date
            .and_then(|d| NaiveDate::parse_from_str(&d, "%Y-%m-%d").ok())
            .unwrap_or(today),
        service_type: non_empty(raw.service_type),
    })
}

/// Parser local determinístico: mesma entrada, mesmo rascunho. Campos não
/// reconhecidos ficam ausentes, exceto a data, que recebe `today`.
pub fn extract_heuristic(text: &str, today: NaiveDate) -> DraftProposal {
    let client_name = NOME_RE
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string());

    let service_type = TIPO_RE.find(text).map(|m| m.as_str().to_string());
    let event_name = service_type.as_ref().map(|t| format!("Evento de {t}"));

    let date = DATA_RE
        .captures(text)
        .and_then(|c| parse_dd_mm(&c, today))
        .unwrap_or(today);

    DraftProposal {
        client_name,
        event_name,
        date,
        service_type,
    }
}

// Ano de dois dígitos ganha prefixo 20; sem ano, vale o ano de `today`.
fn parse_dd_mm(caps: &Captures<'_>, today: NaiveDate) -> Option<NaiveDate> {
    let day: u32 = caps.get(1)?.as_str().parse().ok()?;
    let month: u32 = caps.get(2)?.as_str().parse().ok()?;
    let year: i32 = match caps.get(3) {
        Some(y) if y.as_str().len() == 2 => format!("20{}", y.as_str()).parse().ok()?,
        Some(y) => y.as_str().parse().ok()?,
        None => today.year(),
    };
    NaiveDate::from_ymd_opt(year, month, day)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hoje() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
    }

    #[test]
    fn heuristica_extrai_nome_tipo_e_data() {
        let draft = extract_heuristic(
            "Oi, sou a Carol, queria orçamento de DJ pro meu casamento dia 20/11",
            hoje(),
        );

        assert_eq!(draft.client_name.as_deref(), Some("Carol"));
        assert_eq!(draft.service_type.as_deref(), Some("DJ"));
        assert_eq!(draft.event_name.as_deref(), Some("Evento de DJ"));
        assert_eq!(draft.date, NaiveDate::from_ymd_opt(2026, 11, 20).unwrap());
    }

    #[test]
    fn data_sempre_interpretada_como_dia_mes() {
        let draft = extract_heuristic("pode ser dia 05/09?", hoje());
        assert_eq!(draft.date, NaiveDate::from_ymd_opt(2026, 9, 5).unwrap());
    }

    #[test]
    fn ano_de_dois_digitos_ganha_prefixo_20() {
        let draft = extract_heuristic("festa dia 10/01/27", hoje());
        assert_eq!(draft.date, NaiveDate::from_ymd_opt(2027, 1, 10).unwrap());
    }

    #[test]
    fn ano_de_quatro_digitos_e_usado_como_esta() {
        let draft = extract_heuristic("festa dia 10/01/2028", hoje());
        assert_eq!(draft.date, NaiveDate::from_ymd_opt(2028, 1, 10).unwrap());
    }

    #[test]
    fn data_invalida_cai_para_hoje() {
        let draft = extract_heuristic("pode ser 31/02?", hoje());
        assert_eq!(draft.date, hoje());
    }

    #[test]
    fn texto_sem_padroes_so_tem_a_data_padrao() {
        let draft = extract_heuristic("", hoje());

        assert_eq!(draft.client_name, None);
        assert_eq!(draft.event_name, None);
        assert_eq!(draft.service_type, None);
        assert_eq!(draft.date, hoje());
    }

    #[test]
    fn vocabulario_e_case_insensitive() {
        let draft = extract_heuristic("preciso de fotografia pra festa de 15 anos", hoje());
        assert_eq!(draft.service_type.as_deref(), Some("fotografia"));
    }

    #[test]
    fn nome_depois_de_fala_com() {
        let draft = extract_heuristic("fala com o Pedro amanhã", hoje());
        assert_eq!(draft.client_name.as_deref(), Some("Pedro"));
    }
}
