// src/models/account.rs

use serde::{Deserialize, Serialize};

use crate::models::{
    BusinessProfile, Client, Event, MonthlyMetric, Notification, Proposal, ServicePackage,
    Supplier, Transaction,
};

/// O grafo de entidades completo de uma conta: a unidade de carga e de
/// gravação do armazenamento durável.
///
/// Todos os campos têm `default` para que um documento parcial (ou de uma
/// versão anterior) hidrate com coleções vazias em vez de falhar o parse.
/// `Default` produz o dataset vazio, que é o destino do fallback quando o
/// armazenamento está corrompido.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDataset {
    #[serde(default)]
    pub proposals: Vec<Proposal>,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub clients: Vec<Client>,
    #[serde(default)]
    pub profile: BusinessProfile,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub services: Vec<ServicePackage>,
    #[serde(default)]
    pub suppliers: Vec<Supplier>,
    #[serde(default)]
    pub notifications: Vec<Notification>,
    #[serde(default)]
    pub historical_revenue: Vec<MonthlyMetric>,
}
