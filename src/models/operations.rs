// src/models/operations.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{validate_non_negative, HORA_RE};

// --- Enums ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventType {
    #[serde(rename = "DJ")]
    Dj,
    Fotografia,
    #[serde(rename = "Decoração")]
    Decoracao,
    Assessoria,
    Outros,
}

// Compartilhado entre custos de evento e fornecedores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CostCategory {
    Equipe,
    Transporte,
    #[serde(rename = "Alimentação")]
    Alimentacao,
    Equipamento,
    Outros,
}

// --- Coleções aninhadas ---
// Itens aninhados pertencem exclusivamente ao Event pai: não têm ciclo de
// vida nem identidade fora dele. Os ids são únicos dentro do pai porque o
// store sempre gera um id novo na inserção.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTask {
    pub id: String,
    pub text: String,
    pub done: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineItem {
    pub id: String,
    // "HH:MM"; a coleção é mantida ordenada por este campo
    pub time: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCost {
    pub id: String,
    pub description: String,
    pub amount: Decimal,
    pub category: CostCategory,
}

// --- Evento operacional ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,

    #[serde(rename = "type")]
    pub kind: EventType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,

    // Receita esperada (vinda da proposta)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,

    #[serde(default)]
    pub checklist: Vec<EventTask>,
    #[serde(default)]
    pub timeline: Vec<TimelineItem>,
    #[serde(default)]
    pub costs: Vec<EventCost>,
}

// --- Payloads de criação ---

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    #[validate(length(min = 2, message = "O título deve ter no mínimo 2 caracteres"))]
    pub title: String,

    pub date: NaiveDate,

    #[serde(rename = "type")]
    pub kind: EventType,

    pub client_name: Option<String>,
    pub location: Option<String>,

    #[validate(regex(path = *HORA_RE, message = "Horário inválido (esperado HH:MM)"))]
    pub start_time: Option<String>,
    #[validate(regex(path = *HORA_RE, message = "Horário inválido (esperado HH:MM)"))]
    pub end_time: Option<String>,

    pub amount: Option<Decimal>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewTimelineItem {
    #[validate(regex(path = *HORA_RE, message = "Horário inválido (esperado HH:MM)"))]
    pub time: String,

    #[validate(length(min = 1, message = "required"))]
    pub title: String,

    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewEventCost {
    #[validate(length(min = 1, message = "required"))]
    pub description: String,

    #[validate(custom(function = validate_non_negative, message = "O valor não pode ser negativo"))]
    pub amount: Decimal,

    pub category: CostCategory,
}
