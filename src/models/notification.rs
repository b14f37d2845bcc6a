// src/models/notification.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,

    #[serde(rename = "type")]
    pub kind: NotificationKind,

    pub read: bool,

    // Texto de exibição ("Agora", "2h atrás"), não é um timestamp ordenável
    pub time: String,
}
