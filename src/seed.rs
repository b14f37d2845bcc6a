// src/seed.rs

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;

use crate::models::{
    AccountDataset, BusinessProfile, Client, CostCategory, Event, EventCost, EventTask,
    EventType, MessageTemplates, MonthlyMetric, Notification, NotificationKind, PixKeyType,
    Proposal, ProposalStatus, ServicePackage, Supplier, TimelineItem, Transaction,
    TransactionStatus,
};

/// Dataset inicial de uma conta recém-criada.
///
/// Função pura dos dois argumentos: o nome de exibição entra no perfil e a
/// data do dia ancora o evento de exemplo (cinco dias à frente); todo o
/// resto é fixo. Deve ser chamada uma única vez, na primeira ativação de
/// uma conta que ainda não tem dataset gravado.
pub fn seed_dataset(display_name: &str, today: NaiveDate) -> AccountDataset {
    let profile_name = if display_name.trim().is_empty() {
        "Minha Empresa de Eventos".to_string()
    } else {
        display_name.to_string()
    };

    let proposals = vec![
        Proposal {
            id: "1".into(),
            client_name: "Alice Johnson".into(),
            event_name: "Casamento Alice & Bob".into(),
            amount: Decimal::from(4500),
            status: ProposalStatus::Closing,
            date: data(2024, 9, 15),
        },
        Proposal {
            id: "2".into(),
            client_name: "Carlos Silva".into(),
            event_name: "Aniversário de 15 Anos".into(),
            amount: Decimal::from(2800),
            status: ProposalStatus::Sent,
            date: data(2024, 10, 20),
        },
    ];

    let events = vec![Event {
        id: "e1".into(),
        title: "Casamento Alice & Bob".into(),
        date: today.checked_add_days(Days::new(5)).unwrap_or(today),
        kind: EventType::Fotografia,
        client_name: Some("Alice Johnson".into()),
        location: Some("Buffet Splendore, Av. Paulista 1000".into()),
        start_time: Some("18:00".into()),
        end_time: Some("02:00".into()),
        amount: Some(Decimal::from(4500)),
        checklist: vec![
            EventTask {
                id: "t1".into(),
                text: "Carregar baterias das câmeras".into(),
                done: false,
            },
            EventTask {
                id: "t2".into(),
                text: "Confirmar lista de fotos protocolares".into(),
                done: true,
            },
        ],
        timeline: vec![TimelineItem {
            id: "tl1".into(),
            time: "18:00".into(),
            title: "Chegada da Equipe".into(),
            description: Some("Montagem de equipamento".into()),
        }],
        costs: vec![EventCost {
            id: "c1".into(),
            description: "Uber (Ida e Volta)".into(),
            amount: Decimal::from(80),
            category: CostCategory::Transporte,
        }],
    }];

    let clients = vec![
        Client {
            id: "c1".into(),
            name: "Alice Johnson".into(),
            phone: "(11) 98765-4321".into(),
            email: Some("alice.j@email.com".into()),
            proposals: 1,
            events: 1,
        },
        Client {
            id: "c2".into(),
            name: "Carlos Silva".into(),
            phone: "(21) 91234-5678".into(),
            email: None,
            proposals: 1,
            events: 1,
        },
    ];

    let transactions = vec![Transaction {
        id: "t1".into(),
        description: "Sinal - Casamento Alice".into(),
        client_name: "Alice Johnson".into(),
        amount: Decimal::from(2250),
        date: data(2024, 9, 15),
        status: TransactionStatus::Paid,
        proposal_id: Some("1".into()),
    }];

    let services = vec![
        ServicePackage {
            id: "s1".into(),
            name: "Pacote Básico".into(),
            price: Decimal::from(1500),
            description: "Serviço essencial por 4 horas.".into(),
        },
        ServicePackage {
            id: "s2".into(),
            name: "Pacote Premium".into(),
            price: Decimal::from(3000),
            description: "Serviço completo com extras.".into(),
        },
    ];

    let suppliers = vec![Supplier {
        id: "sup1".into(),
        name: "João Freela".into(),
        category: CostCategory::Equipe,
        phone: "(11) 99999-0001".into(),
    }];

    let notifications = vec![Notification {
        id: "n1".into(),
        title: "Bem-vindo!".into(),
        message: "Configure seu perfil em Ajustes para começar.".into(),
        kind: NotificationKind::Info,
        read: false,
        time: "Agora".into(),
    }];

    let historical_revenue = vec![
        MonthlyMetric {
            month: "Jan".into(),
            revenue: Decimal::ZERO,
        },
        MonthlyMetric {
            month: "Fev".into(),
            revenue: Decimal::ZERO,
        },
        MonthlyMetric {
            month: "Mar".into(),
            revenue: Decimal::ZERO,
        },
    ];

    let profile = BusinessProfile {
        name: profile_name,
        category: "Serviços para Eventos".into(),
        phone: "(11) 99999-8888".into(),
        email: "contato@exemplo.com.br".into(),
        pix_key_type: PixKeyType::Cnpj,
        pix_key: "00.000.000/0001-00".into(),
        theme_color: "#4F46E5".into(),
        contract_terms: "1. O CONTRATADO compromete-se a prestar os serviços descritos.\n2. O cancelamento deve ser feito com 30 dias de antecedência.".into(),
        logo_url: None,
        monthly_goal: Some(Decimal::from(10_000)),
        bio: Some("Apaixonados por realizar sonhos e entregar o melhor serviço para o seu evento.".into()),
        instagram: None,
        website: None,
        slug: None,
        message_templates: Some(default_templates()),
    };

    AccountDataset {
        proposals,
        events,
        clients,
        profile,
        transactions,
        services,
        suppliers,
        notifications,
        historical_revenue,
    }
}

fn default_templates() -> MessageTemplates {
    MessageTemplates {
        proposal_send: "Olá {cliente}! 👋\n\nAqui está o link da proposta para o evento *{evento}*, no valor de {valor}.\n\nVocê pode conferir todos os detalhes e assinar digitalmente por aqui: {link}\n\nQualquer dúvida, estou à disposição!".into(),
        review_request: "Olá {cliente}! 👋\n\nEspero que tenha gostado do meu trabalho no evento *{evento}*! Foi um prazer participar desse momento.\n\nVocê poderia me deixar uma avaliação? Isso me ajuda muito a continuar crescendo! ⭐⭐⭐⭐⭐".into(),
        timeline_share: "*CRONOGRAMA - {evento}*\n📅 Data: {data}\n\n{cronograma}\n\nGerado por Mil Eventos".into(),
    }
}

// As datas do seed são literais conhecidos; a falha aqui é impossível.
fn data(ano: i32, mes: u32, dia: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(ano, mes, dia).expect("data de seed válida")
}
