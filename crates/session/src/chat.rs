use std::sync::{Arc, Weak};

use agency_core::{ChatMessage, PendingReply, RuleTable, Transcript};
use agency_observability::AppMetrics;
use parking_lot::Mutex;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::config::SessionTiming;
use crate::delay::{wake_after, Epoch, EpochClock};

#[derive(Debug)]
struct ChatState {
    transcript: Transcript,
    pending_replies: usize,
    open: bool,
    clock: EpochClock,
}

#[derive(Clone)]
pub struct ChatWidget {
    session_id: Uuid,
    state: Arc<Mutex<ChatState>>,
    rules: Arc<RuleTable>,
    timing: SessionTiming,
    metrics: Arc<AppMetrics>,
}

impl ChatWidget {
    pub fn new(session_id: Uuid, timing: SessionTiming, metrics: Arc<AppMetrics>) -> Self {
        Self::with_rules(session_id, RuleTable::standard(), timing, metrics)
    }

    pub fn with_rules(
        session_id: Uuid,
        rules: RuleTable,
        timing: SessionTiming,
        metrics: Arc<AppMetrics>,
    ) -> Self {
        let mut clock = EpochClock::default();
        clock.advance();

        Self {
            session_id,
            state: Arc::new(Mutex::new(ChatState {
                transcript: Transcript::new(),
                pending_replies: 0,
                open: false,
                clock,
            })),
            rules: Arc::new(rules),
            timing,
            metrics,
        }
    }

    pub fn messages(&self) -> Vec<ChatMessage> {
        self.state.lock().transcript.messages().to_vec()
    }

    pub fn is_composing(&self) -> bool {
        self.state.lock().pending_replies > 0
    }

    pub fn is_open(&self) -> bool {
        self.state.lock().open
    }

    pub fn set_open(&self, open: bool) {
        self.state.lock().open = open;
    }

    pub fn toggle_open(&self) -> bool {
        let mut state = self.state.lock();
        state.open = !state.open;
        state.open
    }

    /// Records the user's message and marks a reply as being composed.
    /// Blank input and closed sessions are ignored.
    pub fn accept(&self, text: &str) -> Option<PendingReply> {
        let mut state = self.state.lock();
        if state.clock.is_closed() {
            return None;
        }

        let pending = state.transcript.append_user_message(text)?;
        state.pending_replies += 1;
        self.metrics.inc_chat_message();
        Some(pending)
    }

    /// Delivers the bot reply for `pending` after the typing delay.
    #[instrument(skip(self, pending), fields(session_id = %self.session_id))]
    pub async fn deliver(&self, pending: PendingReply) -> Option<ChatMessage> {
        let epoch = self.state.lock().clock.current();
        let delivery = tokio::spawn(deliver_reply(
            Arc::downgrade(&self.state),
            epoch,
            pending,
            self.rules.clone(),
            self.timing,
            self.metrics.clone(),
        ));

        delivery.await.ok().flatten()
    }

    pub async fn send(&self, text: &str) -> Option<ChatMessage> {
        let pending = self.accept(text)?;
        self.deliver(pending).await
    }

    /// Ends the session. Replies still being composed are dropped.
    pub fn teardown(&self) {
        let mut state = self.state.lock();
        state.clock.close();
        state.pending_replies = 0;
        debug!(session_id = %self.session_id, "chat widget closed");
    }
}

async fn deliver_reply(
    state: Weak<Mutex<ChatState>>,
    epoch: Epoch,
    pending: PendingReply,
    rules: Arc<RuleTable>,
    timing: SessionTiming,
    metrics: Arc<AppMetrics>,
) -> Option<ChatMessage> {
    let shared = wake_after(timing.typing_delay, &state).await?;
    let mut guard = shared.lock();
    if !guard.clock.is_current(epoch) {
        debug!("discarding stale chat reply");
        return None;
    }

    let topic = pending.topic(&rules);
    match topic {
        Some(topic) => debug!(topic = topic.as_code(), "chat rule matched"),
        None => {
            metrics.inc_default_reply();
            debug!(topic = "default", "no chat rule matched");
        }
    }

    guard.transcript.complete(&pending, &rules);
    guard.pending_replies = guard.pending_replies.saturating_sub(1);
    guard.transcript.last().cloned()
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use agency_core::{Sender, DEFAULT_RESPONSE, GREETING};

    use super::*;

    fn widget(metrics: Arc<AppMetrics>) -> ChatWidget {
        ChatWidget::new(Uuid::new_v4(), SessionTiming::default(), metrics)
    }

    #[tokio::test(start_paused = true)]
    async fn composing_flag_spans_typing_delay() {
        let chat = widget(AppMetrics::shared());
        let pending = chat.accept("is it safe").unwrap();
        assert!(chat.is_composing());

        let reply = chat.deliver(pending).await.unwrap();
        assert!(!chat.is_composing());
        assert_eq!(reply.sender, Sender::Bot);
        assert!(reply.text.starts_with("Safety is our top priority"));
        assert_eq!(chat.messages().len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn blank_input_changes_nothing() {
        let metrics = AppMetrics::shared();
        let chat = widget(metrics.clone());
        assert!(chat.send("   ").await.is_none());
        assert!(!chat.is_composing());

        let messages = chat.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].text, GREETING);
        assert_eq!(metrics.snapshot().chat_messages_total, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn overlapping_sends_keep_composing_until_last_reply() {
        let chat = widget(AppMetrics::shared());
        let first = chat.accept("hello").unwrap();
        let second = chat.accept("asdkjasd").unwrap();

        let first_reply = {
            let chat = chat.clone();
            tokio::spawn(async move { chat.deliver(first).await })
        };
        tokio::time::sleep(Duration::from_millis(300)).await;
        let second_reply = {
            let chat = chat.clone();
            tokio::spawn(async move { chat.deliver(second).await })
        };

        assert!(first_reply.await.unwrap().is_some());
        assert!(chat.is_composing());
        let second_reply = second_reply.await.unwrap().unwrap();
        assert_eq!(second_reply.text, DEFAULT_RESPONSE);
        assert!(!chat.is_composing());
    }

    #[tokio::test(start_paused = true)]
    async fn teardown_drops_pending_reply() {
        let metrics = AppMetrics::shared();
        let chat = widget(metrics.clone());
        let pending = chat.accept("asdkjasd").unwrap();
        chat.teardown();

        assert!(chat.deliver(pending).await.is_none());
        assert_eq!(chat.messages().len(), 2);
        assert_eq!(metrics.snapshot().default_replies_total, 0);
        assert!(chat.accept("hello again").is_none());
    }

    #[test]
    fn visibility_toggles() {
        let chat = widget(AppMetrics::shared());
        assert!(!chat.is_open());
        assert!(chat.toggle_open());
        chat.set_open(false);
        assert!(!chat.is_open());
    }
}
