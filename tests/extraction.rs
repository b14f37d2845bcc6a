use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Datelike, Local, NaiveDate};
use serde_json::Value;

use mil_eventos_core::{BackendError, ExtractionService, ExtractionSource, GenerativeBackend};

// Backend que sempre devolve o mesmo texto.
struct BackendFixo(String);

#[async_trait]
impl GenerativeBackend for BackendFixo {
    async fn complete(
        &self,
        _prompt: &str,
        _output_schema: Option<Value>,
    ) -> Result<String, BackendError> {
        Ok(self.0.clone())
    }
}

// Backend que sempre falha, como se a rede estivesse fora.
struct BackendQuebrado;

#[async_trait]
impl GenerativeBackend for BackendQuebrado {
    async fn complete(
        &self,
        _prompt: &str,
        _output_schema: Option<Value>,
    ) -> Result<String, BackendError> {
        Err(BackendError::NotConfigured)
    }
}

#[tokio::test]
async fn sem_backend_usa_a_heuristica() {
    let service = ExtractionService::new(None);

    let extraction = service
        .extract("Oi, sou a Carol, queria orçamento de DJ pro meu casamento dia 20/11")
        .await;

    assert_eq!(extraction.source, ExtractionSource::Heuristic);
    assert_eq!(extraction.draft.client_name.as_deref(), Some("Carol"));
    assert!(extraction
        .draft
        .service_type
        .as_deref()
        .unwrap()
        .eq_ignore_ascii_case("dj"));

    let ano = Local::now().date_naive().year();
    assert_eq!(
        extraction.draft.date,
        NaiveDate::from_ymd_opt(ano, 11, 20).unwrap()
    );
}

#[tokio::test]
async fn texto_vazio_rende_rascunho_so_com_a_data() {
    let service = ExtractionService::new(None);

    let extraction = service.extract("").await;

    assert_eq!(extraction.source, ExtractionSource::Heuristic);
    assert_eq!(extraction.draft.client_name, None);
    assert_eq!(extraction.draft.event_name, None);
    assert_eq!(extraction.draft.service_type, None);
    assert_eq!(extraction.draft.date, Local::now().date_naive());
}

#[tokio::test]
async fn resposta_estruturada_do_modelo_e_usada_direto() {
    let backend = Arc::new(BackendFixo(
        r#"{"clientName":"Maria","eventName":"Casamento Maria","date":"2027-05-09","serviceType":"Fotografia"}"#
            .to_string(),
    ));
    let service = ExtractionService::new(Some(backend));

    let extraction = service.extract("qualquer texto").await;

    assert_eq!(extraction.source, ExtractionSource::Model);
    assert_eq!(extraction.draft.client_name.as_deref(), Some("Maria"));
    assert_eq!(extraction.draft.event_name.as_deref(), Some("Casamento Maria"));
    assert_eq!(extraction.draft.service_type.as_deref(), Some("Fotografia"));
    assert_eq!(
        extraction.draft.date,
        NaiveDate::from_ymd_opt(2027, 5, 9).unwrap()
    );
}

#[tokio::test]
async fn resposta_ilegivel_do_modelo_cai_para_a_heuristica() {
    let backend = Arc::new(BackendFixo("isto não é json".to_string()));
    let service = ExtractionService::new(Some(backend));

    let extraction = service.extract("fala com a Paula sobre fotografia").await;

    assert_eq!(extraction.source, ExtractionSource::Heuristic);
    assert_eq!(extraction.draft.client_name.as_deref(), Some("Paula"));
    assert_eq!(extraction.draft.service_type.as_deref(), Some("fotografia"));
}

#[tokio::test]
async fn backend_fora_do_ar_cai_para_a_heuristica() {
    let service = ExtractionService::new(Some(Arc::new(BackendQuebrado)));

    let extraction = service.extract("sou o Marcos, decoração dia 02/03").await;

    assert_eq!(extraction.source, ExtractionSource::Heuristic);
    assert_eq!(extraction.draft.client_name.as_deref(), Some("Marcos"));
    assert_eq!(extraction.draft.service_type.as_deref(), Some("decoração"));
}

#[tokio::test]
async fn campos_vazios_do_modelo_ficam_ausentes() {
    let backend = Arc::new(BackendFixo(
        r#"{"clientName":"  ","eventName":"","serviceType":"DJ"}"#.to_string(),
    ));
    let service = ExtractionService::new(Some(backend));

    let extraction = service.extract("qualquer texto").await;

    assert_eq!(extraction.source, ExtractionSource::Model);
    assert_eq!(extraction.draft.client_name, None);
    assert_eq!(extraction.draft.event_name, None);
    assert_eq!(extraction.draft.service_type.as_deref(), Some("DJ"));
    // Sem data na resposta, vale a data do dia
    assert_eq!(extraction.draft.date, Local::now().date_naive());
}

#[tokio::test]
async fn descricao_usa_o_texto_do_modelo_quando_disponivel() {
    let backend = Arc::new(BackendFixo("Uma descrição entusiasmada.".to_string()));
    let service = ExtractionService::new(Some(backend));

    let text = service
        .generate_proposal_description("Casamento Maria", "Maria", "Fotografia")
        .await;
    assert_eq!(text, "Uma descrição entusiasmada.");
}

#[tokio::test]
async fn descricao_tem_fallback_offline() {
    let service = ExtractionService::new(Some(Arc::new(BackendQuebrado)));

    let text = service
        .generate_proposal_description("Casamento Maria", "Maria", "Fotografia")
        .await;

    assert!(text.contains("Casamento Maria"));
    assert!(text.contains("Fotografia"));
}
