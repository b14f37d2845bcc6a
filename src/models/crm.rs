// src/models/crm.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::operations::CostCategory;

// --- Cliente ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    pub phone: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    // Contadores desnormalizados, preenchidos apenas na criação (zerados).
    // Para exibição use os seletores derivados do AccountService
    // (client_proposal_count / client_event_count), que calculam a partir
    // das coleções autoritativas e não sofrem drift.
    pub proposals: u32,
    pub events: u32,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewClient {
    #[validate(length(min = 2, message = "O nome deve ter no mínimo 2 caracteres"))]
    pub name: String,

    #[validate(length(min = 8, message = "Telefone inválido"))]
    pub phone: String,

    #[validate(email(message = "E-mail inválido"))]
    pub email: Option<String>,
}

// --- Fornecedor ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: String,
    pub name: String,
    pub category: CostCategory,
    pub phone: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewSupplier {
    #[validate(length(min = 2, message = "O nome deve ter no mínimo 2 caracteres"))]
    pub name: String,

    pub category: CostCategory,

    #[validate(length(min = 8, message = "Telefone inválido"))]
    pub phone: String,
}
