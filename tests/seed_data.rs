use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;

use mil_eventos_core::models::{AccountDataset, ProposalStatus, TransactionStatus};
use mil_eventos_core::seed::seed_dataset;

fn hoje() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
}

#[test]
fn seed_e_deterministico_para_as_mesmas_entradas() {
    assert_eq!(
        seed_dataset("Estúdio Aurora", hoje()),
        seed_dataset("Estúdio Aurora", hoje())
    );
}

#[test]
fn seed_tem_o_inventario_completo() {
    let dataset = seed_dataset("Estúdio Aurora", hoje());

    assert_eq!(dataset.proposals.len(), 2);
    assert_eq!(dataset.events.len(), 1);
    assert_eq!(dataset.clients.len(), 2);
    assert_eq!(dataset.transactions.len(), 1);
    assert_eq!(dataset.services.len(), 2);
    assert_eq!(dataset.suppliers.len(), 1);
    assert_eq!(dataset.notifications.len(), 1);
    assert_eq!(dataset.historical_revenue.len(), 3);
}

#[test]
fn propostas_de_exemplo_tem_status_diferentes() {
    let dataset = seed_dataset("Estúdio Aurora", hoje());

    assert_eq!(dataset.proposals[0].status, ProposalStatus::Closing);
    assert_eq!(dataset.proposals[1].status, ProposalStatus::Sent);
}

#[test]
fn evento_de_exemplo_fica_cinco_dias_a_frente() {
    let dataset = seed_dataset("Estúdio Aurora", hoje());

    let event = &dataset.events[0];
    assert_eq!(event.date, hoje().checked_add_days(Days::new(5)).unwrap());

    // Uma tarefa feita e uma pendente
    let done: Vec<bool> = event.checklist.iter().map(|t| t.done).collect();
    assert!(done.contains(&true));
    assert!(done.contains(&false));

    assert_eq!(event.timeline.len(), 1);
    assert_eq!(event.costs.len(), 1);
}

#[test]
fn nome_de_exibicao_entra_no_perfil() {
    let dataset = seed_dataset("DJ Lunar", hoje());
    assert_eq!(dataset.profile.name, "DJ Lunar");

    // Nome vazio cai para o padrão
    let fallback = seed_dataset("  ", hoje());
    assert_eq!(fallback.profile.name, "Minha Empresa de Eventos");
}

#[test]
fn templates_padrao_carregam_todos_os_tokens() {
    let dataset = seed_dataset("Estúdio Aurora", hoje());
    let templates = dataset.profile.message_templates.expect("templates padrão");

    let tudo = format!(
        "{}{}{}",
        templates.proposal_send, templates.review_request, templates.timeline_share
    );
    for token in ["{cliente}", "{evento}", "{link}", "{valor}", "{data}", "{cronograma}"] {
        assert!(tudo.contains(token), "token {token} ausente dos templates");
    }
}

#[test]
fn transacao_de_exemplo_referencia_a_proposta() {
    let dataset = seed_dataset("Estúdio Aurora", hoje());

    let transaction = &dataset.transactions[0];
    assert_eq!(transaction.status, TransactionStatus::Paid);
    assert_eq!(transaction.amount, Decimal::from(2250));
    assert_eq!(transaction.proposal_id.as_deref(), Some("1"));
}

#[test]
fn historico_de_receita_comeca_zerado() {
    let dataset = seed_dataset("Estúdio Aurora", hoje());

    assert!(dataset
        .historical_revenue
        .iter()
        .all(|m| m.revenue == Decimal::ZERO));
    let meses: Vec<&str> = dataset
        .historical_revenue
        .iter()
        .map(|m| m.month.as_str())
        .collect();
    assert_eq!(meses, ["Jan", "Fev", "Mar"]);
}

#[test]
fn dataset_sobrevive_ao_ciclo_de_serializacao() {
    let dataset = seed_dataset("Estúdio Aurora", hoje());

    let json = serde_json::to_string_pretty(&dataset).unwrap();
    let reloaded: AccountDataset = serde_json::from_str(&json).unwrap();

    // Sem perda de campos nem deriva de datas
    assert_eq!(reloaded, dataset);

    // O documento usa os nomes e rótulos do formato original
    assert!(json.contains("historicalRevenue"));
    assert!(json.contains("\"Fechamento\""));
    assert!(json.contains("\"clientName\""));
}

#[test]
fn documento_parcial_hidrata_com_colecoes_vazias() {
    let dataset: AccountDataset = serde_json::from_str(r#"{ "proposals": [] }"#).unwrap();

    assert!(dataset.events.is_empty());
    assert!(dataset.notifications.is_empty());
    assert_eq!(dataset, AccountDataset::default());
}
