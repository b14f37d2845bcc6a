// src/models.rs

pub mod proposal;
pub use proposal::{DraftProposal, NewProposal, Proposal, ProposalPatch, ProposalStatus};
pub mod operations;
pub use operations::{
    CostCategory, Event, EventCost, EventTask, EventType, NewEvent, NewEventCost,
    NewTimelineItem, TimelineItem,
};
pub mod crm;
pub use crm::{Client, NewClient, NewSupplier, Supplier};
pub mod finance;
pub use finance::{MonthlyMetric, NewTransaction, Transaction, TransactionStatus};
pub mod settings;
pub use settings::{
    BusinessProfile, MessageTemplates, NewServicePackage, PixKeyType, ServicePackage,
};
pub mod notification;
pub use notification::{Notification, NotificationKind};
pub mod dashboard;
pub use dashboard::FinancialKpi;
pub mod account;
pub use account::AccountDataset;

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use validator::ValidationError;

// Horário de evento no formato HH:MM (24h), compartilhado pelos payloads
pub static HORA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$").unwrap());

pub fn validate_non_negative(amount: &Decimal) -> Result<(), ValidationError> {
    if amount.is_sign_negative() {
        return Err(ValidationError::new("valor_negativo"));
    }
    Ok(())
}
