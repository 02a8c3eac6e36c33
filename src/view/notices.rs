// src/view/notices.rs
//! Transient, user-dismissable messages shown next to the form

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Validation,
    Transport,
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub id: Uuid,
    pub kind: NoticeKind,
    pub message: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NoticeBoard {
    ttl: Duration,
    notices: Vec<Notice>,
}

impl NoticeBoard {
    pub fn new(ttl: std::time::Duration) -> Self {
        Self {
            ttl: Duration::from_std(ttl).unwrap_or_else(|_| Duration::seconds(5)),
            notices: Vec::new(),
        }
    }

    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>, now: DateTime<Utc>) -> Uuid {
        let id = Uuid::new_v4();
        self.notices.push(Notice {
            id,
            kind,
            message: message.into(),
            expires_at: now
                .checked_add_signed(self.ttl)
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
        });
        id
    }

    /// Returns false when the notice had already expired or been dismissed
    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.notices.len();
        self.notices.retain(|n| n.id != id);
        self.notices.len() != before
    }

    /// Drop expired notices and return the ones still visible
    pub fn active(&mut self, now: DateTime<Utc>) -> &[Notice] {
        self.notices.retain(|n| n.expires_at > now);
        &self.notices
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}
