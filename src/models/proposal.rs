// src/models/proposal.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::validate_non_negative;

// --- Enums ---

// O funil não impõe máquina de estados: qualquer status pode seguir
// qualquer outro. "Fechada" é o único com semântica extra (vira
// compromisso de agenda, ver services/dashboard_service.rs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProposalStatus {
    #[serde(rename = "Enviada")]
    Sent,
    #[serde(rename = "Em Análise")]
    Analysis,
    #[serde(rename = "Fechamento")]
    Closing,
    #[serde(rename = "Fechada")]
    Closed,
    #[serde(rename = "Perdida")]
    Lost,
}

// --- Structs ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    pub id: String,
    pub client_name: String,
    pub event_name: String,
    pub amount: Decimal,
    pub status: ProposalStatus,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewProposal {
    #[validate(length(min = 2, message = "O nome do cliente deve ter no mínimo 2 caracteres"))]
    pub client_name: String,

    #[validate(length(min = 2, message = "O nome do evento deve ter no mínimo 2 caracteres"))]
    pub event_name: String,

    #[validate(custom(function = validate_non_negative, message = "O valor não pode ser negativo"))]
    pub amount: Decimal,

    pub status: ProposalStatus,
    pub date: NaiveDate,
}

// Patch parcial aplicado por merge-by-id: campos ausentes ficam como estão.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalPatch {
    pub client_name: Option<String>,
    pub event_name: Option<String>,
    pub amount: Option<Decimal>,
    pub status: Option<ProposalStatus>,
    pub date: Option<NaiveDate>,
}

/// Rascunho estruturado produzido pela extração de texto livre.
///
/// É um ponto de partida para revisão manual, nunca um erro: campos que a
/// extração não encontrou ficam ausentes, exceto a data, que sempre recebe
/// um valor (a data do dia quando nada foi reconhecido).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftProposal {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,

    pub date: NaiveDate,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
}
