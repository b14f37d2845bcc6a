// src/models/settings.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::validate_non_negative;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PixKeyType {
    #[serde(rename = "CPF")]
    Cpf,
    #[default]
    #[serde(rename = "CNPJ")]
    Cnpj,
    Email,
    Telefone,
    #[serde(rename = "Aleatória")]
    Aleatoria,
}

// Modelos de mensagem para comunicação com o cliente. Os tokens
// {cliente}, {evento}, {link}, {valor}, {data} e {cronograma} são
// substituídos na hora do envio (fora deste núcleo).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageTemplates {
    pub proposal_send: String,
    pub review_request: String,
    pub timeline_share: String,
}

/// Perfil do negócio, singleton por conta. Criado uma única vez pelo seed
/// e depois apenas substituído por inteiro ou corrigido pela operação de
/// meta mensal; nunca é apagado enquanto a conta existir.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessProfile {
    pub name: String,
    pub category: String,
    pub phone: String,
    pub email: String,
    pub pix_key_type: PixKeyType,
    pub pix_key: String,
    pub theme_color: String,
    pub contract_terms: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_goal: Option<Decimal>,

    // Campos de divulgação
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_templates: Option<MessageTemplates>,
}

// --- Catálogo de serviços ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePackage {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewServicePackage {
    #[validate(length(min = 2, message = "O nome deve ter no mínimo 2 caracteres"))]
    pub name: String,

    #[validate(custom(function = validate_non_negative, message = "O valor não pode ser negativo"))]
    pub price: Decimal,

    pub description: String,
}
