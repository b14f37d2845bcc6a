// src/services/account_service.rs

use std::sync::Arc;

use chrono::Local;
use rust_decimal::Decimal;
use uuid::Uuid;
use validator::Validate;

use crate::common::error::AppError;
use crate::models::{
    validate_non_negative, AccountDataset, BusinessProfile, Client, Event, EventCost,
    NewClient, NewEvent, NewEventCost, NewProposal, NewServicePackage, NewSupplier,
    NewTimelineItem, NewTransaction, Proposal, ProposalPatch, ServicePackage, Supplier,
    TimelineItem, Transaction, TransactionStatus,
};
use crate::seed::seed_dataset;
use crate::storage::DatasetRepository;

struct ActiveAccount {
    account_id: String,
    data: AccountDataset,
}

/// Fonte única de verdade do grafo de entidades da conta ativa.
///
/// Toda mutação é aplicada primeiro ao estado em memória (que é sempre o
/// autoritativo) e em seguida espelhada por inteiro no armazenamento
/// durável; falha de gravação é logada, nunca propagada. Existe exatamente
/// um escritor (a sessão ativa) e nenhuma mesclagem de escritores
/// concorrentes.
///
/// Operações que referenciam um id inexistente são no-ops silenciosos: a
/// única falha de uso é chamar uma operação sem conta ativa.
pub struct AccountService {
    repo: Arc<dyn DatasetRepository>,
    active: Option<ActiveAccount>,
}

impl AccountService {
    pub fn new(repo: Arc<dyn DatasetRepository>) -> Self {
        Self { repo, active: None }
    }

    // =========================================================================
    //  CICLO DE VIDA DA CONTA
    // =========================================================================

    /// Ativa uma conta: hidrata do armazenamento durável; se a conta ainda
    /// não tem dataset, gera o seed e grava imediatamente. Armazenamento
    /// corrompido nunca bloqueia a entrada no app: loga e segue com um
    /// dataset vazio.
    pub async fn activate(&mut self, account_id: &str, display_name: &str) {
        let data = match self.repo.load(account_id).await {
            Ok(Some(dataset)) => dataset,
            Ok(None) => {
                let seeded = seed_dataset(display_name, Local::now().date_naive());
                if let Err(e) = self.repo.save(account_id, &seeded).await {
                    tracing::error!("Falha ao gravar o seed da conta {account_id}: {e}");
                }
                seeded
            }
            Err(e) => {
                tracing::error!(
                    "Dataset da conta {account_id} ilegível, seguindo com dataset vazio: {e}"
                );
                AccountDataset::default()
            }
        };

        self.active = Some(ActiveAccount {
            account_id: account_id.to_string(),
            data,
        });
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    pub fn active_account_id(&self) -> Option<&str> {
        self.active.as_ref().map(|a| a.account_id.as_str())
    }

    // =========================================================================
    //  LEITURA
    // =========================================================================

    pub fn dataset(&self) -> Result<&AccountDataset, AppError> {
        self.active
            .as_ref()
            .map(|a| &a.data)
            .ok_or(AppError::NoActiveAccount)
    }

    // Seletores por id: a entidade "em exibição" deve sempre ser derivada
    // do estado vivo do store, nunca mantida como cópia avulsa.

    pub fn proposal(&self, id: &str) -> Option<&Proposal> {
        self.active
            .as_ref()
            .and_then(|a| a.data.proposals.iter().find(|p| p.id == id))
    }

    pub fn event(&self, id: &str) -> Option<&Event> {
        self.active
            .as_ref()
            .and_then(|a| a.data.events.iter().find(|e| e.id == id))
    }

    pub fn client(&self, id: &str) -> Option<&Client> {
        self.active
            .as_ref()
            .and_then(|a| a.data.clients.iter().find(|c| c.id == id))
    }

    // Contadores calculados na leitura, a partir das coleções
    // autoritativas. Os campos desnormalizados do Client existem só no
    // documento gravado e não devem alimentar exibição.

    pub fn client_proposal_count(&self, client_name: &str) -> usize {
        self.active.as_ref().map_or(0, |a| {
            a.data
                .proposals
                .iter()
                .filter(|p| p.client_name == client_name)
                .count()
        })
    }

    pub fn client_event_count(&self, client_name: &str) -> usize {
        self.active.as_ref().map_or(0, |a| {
            a.data
                .events
                .iter()
                .filter(|e| e.client_name.as_deref() == Some(client_name))
                .count()
        })
    }

    // =========================================================================
    //  PROPOSTAS
    // =========================================================================

    /// Insere no início da lista (mais recente primeiro).
    pub async fn add_proposal(&mut self, input: NewProposal) -> Result<Proposal, AppError> {
        input.validate()?;
        let account = self.data_mut()?;

        let proposal = Proposal {
            id: Uuid::new_v4().to_string(),
            client_name: input.client_name,
            event_name: input.event_name,
            amount: input.amount,
            status: input.status,
            date: input.date,
        };
        account.data.proposals.insert(0, proposal.clone());

        self.persist().await;
        Ok(proposal)
    }

    /// Merge-by-id: campos ausentes do patch ficam como estão.
    pub async fn update_proposal(&mut self, id: &str, patch: ProposalPatch) -> Result<(), AppError> {
        let account = self.data_mut()?;

        let Some(proposal) = account.data.proposals.iter_mut().find(|p| p.id == id) else {
            return Ok(());
        };
        if let Some(client_name) = patch.client_name {
            proposal.client_name = client_name;
        }
        if let Some(event_name) = patch.event_name {
            proposal.event_name = event_name;
        }
        if let Some(amount) = patch.amount {
            proposal.amount = amount;
        }
        if let Some(status) = patch.status {
            proposal.status = status;
        }
        if let Some(date) = patch.date {
            proposal.date = date;
        }

        self.persist().await;
        Ok(())
    }

    // =========================================================================
    //  CLIENTES E FORNECEDORES
    // =========================================================================

    pub async fn add_client(&mut self, input: NewClient) -> Result<Client, AppError> {
        input.validate()?;
        let account = self.data_mut()?;

        let client = Client {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            phone: input.phone,
            email: input.email,
            proposals: 0,
            events: 0,
        };
        account.data.clients.insert(0, client.clone());

        self.persist().await;
        Ok(client)
    }

    pub async fn add_supplier(&mut self, input: NewSupplier) -> Result<Supplier, AppError> {
        input.validate()?;
        let account = self.data_mut()?;

        let supplier = Supplier {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            category: input.category,
            phone: input.phone,
        };
        account.data.suppliers.push(supplier.clone());

        self.persist().await;
        Ok(supplier)
    }

    pub async fn delete_supplier(&mut self, id: &str) -> Result<(), AppError> {
        let account = self.data_mut()?;

        let before = account.data.suppliers.len();
        account.data.suppliers.retain(|s| s.id != id);
        if account.data.suppliers.len() == before {
            return Ok(());
        }

        self.persist().await;
        Ok(())
    }

    // =========================================================================
    //  EVENTOS E COLEÇÕES ANINHADAS
    // =========================================================================

    /// Cria o evento operacional com as coleções aninhadas vazias; elas
    /// crescem pelas operações dedicadas abaixo.
    pub async fn add_event(&mut self, input: NewEvent) -> Result<Event, AppError> {
        input.validate()?;
        let account = self.data_mut()?;

        let event = Event {
            id: Uuid::new_v4().to_string(),
            title: input.title,
            date: input.date,
            kind: input.kind,
            client_name: input.client_name,
            location: input.location,
            start_time: input.start_time,
            end_time: input.end_time,
            amount: input.amount,
            checklist: Vec::new(),
            timeline: Vec::new(),
            costs: Vec::new(),
        };
        account.data.events.insert(0, event.clone());

        self.persist().await;
        Ok(event)
    }

    /// Inverte o `done` do item de checklist indicado. Evento ou tarefa
    /// desconhecidos: no-op; nenhum outro evento ou tarefa é afetado.
    pub async fn toggle_event_task(&mut self, event_id: &str, task_id: &str) -> Result<(), AppError> {
        let account = self.data_mut()?;

        let task = account
            .data
            .events
            .iter_mut()
            .find(|e| e.id == event_id)
            .and_then(|e| e.checklist.iter_mut().find(|t| t.id == task_id));
        let Some(task) = task else {
            return Ok(());
        };
        task.done = !task.done;

        self.persist().await;
        Ok(())
    }

    pub async fn add_event_cost(
        &mut self,
        event_id: &str,
        input: NewEventCost,
    ) -> Result<(), AppError> {
        input.validate()?;
        let account = self.data_mut()?;

        let Some(event) = account.data.events.iter_mut().find(|e| e.id == event_id) else {
            return Ok(());
        };
        event.costs.push(EventCost {
            id: Uuid::new_v4().to_string(),
            description: input.description,
            amount: input.amount,
            category: input.category,
        });

        self.persist().await;
        Ok(())
    }

    pub async fn delete_event_cost(&mut self, event_id: &str, cost_id: &str) -> Result<(), AppError> {
        let account = self.data_mut()?;

        let Some(event) = account.data.events.iter_mut().find(|e| e.id == event_id) else {
            return Ok(());
        };
        let before = event.costs.len();
        event.costs.retain(|c| c.id != cost_id);
        if event.costs.len() == before {
            return Ok(());
        }

        self.persist().await;
        Ok(())
    }

    /// Acrescenta e reordena por horário. A ordenação é estável: itens com
    /// o mesmo horário preservam a ordem de inserção.
    pub async fn add_timeline_item(
        &mut self,
        event_id: &str,
        input: NewTimelineItem,
    ) -> Result<(), AppError> {
        input.validate()?;
        let account = self.data_mut()?;

        let Some(event) = account.data.events.iter_mut().find(|e| e.id == event_id) else {
            return Ok(());
        };
        event.timeline.push(TimelineItem {
            id: Uuid::new_v4().to_string(),
            time: input.time,
            title: input.title,
            description: input.description,
        });
        event.timeline.sort_by(|a, b| a.time.cmp(&b.time));

        self.persist().await;
        Ok(())
    }

    pub async fn delete_timeline_item(
        &mut self,
        event_id: &str,
        item_id: &str,
    ) -> Result<(), AppError> {
        let account = self.data_mut()?;

        let Some(event) = account.data.events.iter_mut().find(|e| e.id == event_id) else {
            return Ok(());
        };
        let before = event.timeline.len();
        event.timeline.retain(|t| t.id != item_id);
        if event.timeline.len() == before {
            return Ok(());
        }

        self.persist().await;
        Ok(())
    }

    // =========================================================================
    //  FINANCEIRO
    // =========================================================================

    pub async fn add_transaction(&mut self, input: NewTransaction) -> Result<Transaction, AppError> {
        input.validate()?;
        let account = self.data_mut()?;

        let transaction = Transaction {
            id: Uuid::new_v4().to_string(),
            description: input.description,
            client_name: input.client_name,
            amount: input.amount,
            date: input.date,
            status: input.status,
            proposal_id: input.proposal_id,
        };
        account.data.transactions.insert(0, transaction.clone());

        self.persist().await;
        Ok(transaction)
    }

    pub async fn update_transaction_status(
        &mut self,
        id: &str,
        status: TransactionStatus,
    ) -> Result<(), AppError> {
        let account = self.data_mut()?;

        let Some(transaction) = account.data.transactions.iter_mut().find(|t| t.id == id) else {
            return Ok(());
        };
        transaction.status = status;

        self.persist().await;
        Ok(())
    }

    // =========================================================================
    //  CATÁLOGO DE SERVIÇOS
    // =========================================================================

    pub async fn add_service(
        &mut self,
        input: NewServicePackage,
    ) -> Result<ServicePackage, AppError> {
        input.validate()?;
        let account = self.data_mut()?;

        let service = ServicePackage {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            price: input.price,
            description: input.description,
        };
        account.data.services.push(service.clone());

        self.persist().await;
        Ok(service)
    }

    pub async fn delete_service(&mut self, id: &str) -> Result<(), AppError> {
        let account = self.data_mut()?;

        let before = account.data.services.len();
        account.data.services.retain(|s| s.id != id);
        if account.data.services.len() == before {
            return Ok(());
        }

        self.persist().await;
        Ok(())
    }

    // =========================================================================
    //  NOTIFICAÇÕES E PERFIL
    // =========================================================================

    pub async fn mark_notification_read(&mut self, id: &str) -> Result<(), AppError> {
        let account = self.data_mut()?;

        let Some(notification) = account.data.notifications.iter_mut().find(|n| n.id == id) else {
            return Ok(());
        };
        notification.read = true;

        self.persist().await;
        Ok(())
    }

    /// Corrige apenas a meta mensal do perfil.
    pub async fn update_monthly_goal(&mut self, amount: Decimal) -> Result<(), AppError> {
        if validate_non_negative(&amount).is_err() {
            return Err(validation_error("monthlyGoal", "O valor não pode ser negativo"));
        }
        let account = self.data_mut()?;

        account.data.profile.monthly_goal = Some(amount);

        self.persist().await;
        Ok(())
    }

    /// Substituição por inteiro do perfil do negócio.
    pub async fn replace_business_profile(
        &mut self,
        profile: BusinessProfile,
    ) -> Result<(), AppError> {
        let account = self.data_mut()?;

        account.data.profile = profile;

        self.persist().await;
        Ok(())
    }

    // =========================================================================
    //  INTERNOS
    // =========================================================================

    fn data_mut(&mut self) -> Result<&mut ActiveAccount, AppError> {
        self.active.as_mut().ok_or(AppError::NoActiveAccount)
    }

    // Espelha o estado em memória no armazenamento durável. O estado em
    // memória permanece autoritativo mesmo quando a gravação falha.
    async fn persist(&self) {
        if let Some(active) = &self.active {
            if let Err(e) = self.repo.save(&active.account_id, &active.data).await {
                tracing::error!(
                    "Falha ao gravar o dataset da conta {}: {e}",
                    active.account_id
                );
            }
        }
    }
}

// Erro de validação de campo único, no formato do validator.
fn validation_error(field: &'static str, message: &str) -> AppError {
    let mut errors = validator::ValidationErrors::new();
    let mut error = validator::ValidationError::new("invalid_value");
    error.message = Some(message.to_string().into());
    errors.add(field, error);
    AppError::ValidationError(errors)
}
