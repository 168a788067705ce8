mod booking;
mod chat;
mod config;
mod delay;
mod error;

use std::sync::Arc;

use agency_core::FaqAccordion;
use agency_observability::AppMetrics;
use tracing::info;
use uuid::Uuid;

pub use booking::{BookingDesk, BookingPhase, BookingReceipt};
pub use chat::ChatWidget;
pub use config::SessionTiming;
pub use delay::{wake_after, Epoch, EpochClock};
pub use error::BookingError;

/// State owned by one page view: the reservation form, the chat widget, and
/// the FAQ accordion. Nothing here is shared with other sessions.
#[derive(Clone)]
pub struct VisitorSession {
    pub id: Uuid,
    pub booking: BookingDesk,
    pub chat: ChatWidget,
    pub faq: FaqAccordion,
}

impl VisitorSession {
    pub fn new(timing: SessionTiming, metrics: Arc<AppMetrics>) -> Self {
        let id = Uuid::new_v4();
        info!(session_id = %id, "visitor session started");

        Self {
            id,
            booking: BookingDesk::new(id, timing, metrics.clone()),
            chat: ChatWidget::new(id, timing, metrics),
            faq: FaqAccordion::default(),
        }
    }

    pub fn teardown(&self) {
        self.booking.teardown();
        self.chat.teardown();
        info!(session_id = %self.id, "visitor session ended");
    }
}
