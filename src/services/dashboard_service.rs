// src/services/dashboard_service.rs

use rust_decimal::Decimal;

use crate::models::{
    BusinessProfile, Event, EventType, FinancialKpi, Proposal, ProposalStatus, Transaction,
    TransactionStatus,
};

// Projeções somente-leitura derivadas do estado do store. As duas funções
// são puras: devem ser recalculadas sempre que qualquer coleção de entrada
// mudar, nunca guardadas contra uma entrada velha.

/// Agenda unificada: todos os eventos operacionais mais um compromisso
/// sintético para cada proposta com status Fechada.
///
/// O compromisso sintético recebe id com prefixo `prop-` (não colide com
/// ids de eventos reais), título com prefixo `(Contrato)`, e o dia inteiro
/// como horário (propostas não carregam hora). A data da proposta já é um
/// dia de calendário local e entra como está, nada de interpretá-la como
/// meia-noite UTC, que deslocaria o dia em fusos negativos.
pub fn merge_schedule(events: &[Event], proposals: &[Proposal]) -> Vec<Event> {
    let mut schedule = events.to_vec();

    schedule.extend(
        proposals
            .iter()
            .filter(|p| p.status == ProposalStatus::Closed)
            .map(|p| Event {
                id: format!("prop-{}", p.id),
                title: format!("(Contrato) {}", p.event_name),
                date: p.date,
                kind: EventType::Outros,
                client_name: Some(p.client_name.clone()),
                location: None,
                start_time: Some("00:00".into()),
                end_time: Some("23:59".into()),
                amount: Some(p.amount),
                checklist: Vec::new(),
                timeline: Vec::new(),
                costs: Vec::new(),
            }),
    );

    schedule
}

/// Métricas financeiras agregadas:
/// - "A Receber": soma das transações pendentes e vencidas
/// - "Recebido (Mês)": soma das transações pagas
/// - "Propostas Ativas": propostas fora de Fechada/Perdida
/// - "Conversão": percentual de propostas fechadas
/// - "Meta Mensal": repassada do perfil, quando configurada
pub fn compute_kpis(
    transactions: &[Transaction],
    proposals: &[Proposal],
    profile: &BusinessProfile,
) -> Vec<FinancialKpi> {
    let mut paid = Decimal::ZERO;
    let mut receivable = Decimal::ZERO;
    for transaction in transactions {
        match transaction.status {
            TransactionStatus::Paid => paid += transaction.amount,
            TransactionStatus::Pending | TransactionStatus::Overdue => {
                receivable += transaction.amount;
            }
        }
    }

    let active = proposals
        .iter()
        .filter(|p| !matches!(p.status, ProposalStatus::Closed | ProposalStatus::Lost))
        .count();
    let closed = proposals
        .iter()
        .filter(|p| p.status == ProposalStatus::Closed)
        .count();
    let conversion = if proposals.is_empty() {
        Decimal::ZERO
    } else {
        Decimal::from(closed as u64 * 100) / Decimal::from(proposals.len() as u64)
    };

    let mut kpis = vec![
        FinancialKpi {
            label: "A Receber".into(),
            value: receivable,
        },
        FinancialKpi {
            label: "Recebido (Mês)".into(),
            value: paid,
        },
        FinancialKpi {
            label: "Propostas Ativas".into(),
            value: Decimal::from(active as u64),
        },
        FinancialKpi {
            label: "Conversão".into(),
            value: conversion,
        },
    ];

    if let Some(goal) = profile.monthly_goal {
        kpis.push(FinancialKpi {
            label: "Meta Mensal".into(),
            value: goal,
        });
    }

    kpis
}
