// src/models/finance.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::validate_non_negative;

// --- Enums ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Paid,    // Recebido
    Pending, // A receber
    Overdue, // Vencido
}

// --- Structs ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub description: String,
    pub client_name: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub status: TransactionStatus,

    // Referência de consulta à proposta de origem, não é posse:
    // apagar a proposta não apaga a transação.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proposal_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    #[validate(length(min = 1, message = "required"))]
    pub description: String,

    #[validate(length(min = 2, message = "O nome do cliente deve ter no mínimo 2 caracteres"))]
    pub client_name: String,

    #[validate(custom(function = validate_non_negative, message = "O valor não pode ser negativo"))]
    pub amount: Decimal,

    pub date: NaiveDate,
    pub status: TransactionStatus,
    pub proposal_id: Option<String>,
}

// Série histórica de receita, uma entrada por mês (append-only).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyMetric {
    pub month: String,
    pub revenue: Decimal,
}
