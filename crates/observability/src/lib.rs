use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use once_cell::sync::OnceCell;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

static TRACING_INIT: OnceCell<()> = OnceCell::new();

#[derive(Debug, Default)]
pub struct AppMetrics {
    submissions_accepted_total: AtomicU64,
    submissions_rejected_total: AtomicU64,
    chat_messages_total: AtomicU64,
    default_replies_total: AtomicU64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub submissions_accepted_total: u64,
    pub submissions_rejected_total: u64,
    pub chat_messages_total: u64,
    pub default_replies_total: u64,
}

impl AppMetrics {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn inc_submission_accepted(&self) {
        self.submissions_accepted_total
            .fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_submission_rejected(&self) {
        self.submissions_rejected_total
            .fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_chat_message(&self) {
        self.chat_messages_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_default_reply(&self) {
        self.default_replies_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            submissions_accepted_total: self.submissions_accepted_total.load(Ordering::Relaxed),
            submissions_rejected_total: self.submissions_rejected_total.load(Ordering::Relaxed),
            chat_messages_total: self.chat_messages_total.load(Ordering::Relaxed),
            default_replies_total: self.default_replies_total.load(Ordering::Relaxed),
        }
    }
}

pub fn init_tracing(service_name: &str) {
    TRACING_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}=info,agency_session=info", service_name))
        });

        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(true)
            .with_span_list(true)
            .init();
    });
}
