// src/models/dashboard.rs

use rust_decimal::Decimal;
use serde::Serialize;

// Métrica financeira agregada, recalculada a partir das transações e
// propostas. O valor é numérico: formatação de moeda é apresentação e
// fica fora deste núcleo.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialKpi {
    pub label: String,
    pub value: Decimal,
}
