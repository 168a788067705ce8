use std::sync::{Arc, Weak};
use std::time::Duration;

use agency_core::{
    validate_submission, BookingForm, BookingSummaryView, FormEdit, LookupError, ValidationError,
};
use agency_observability::AppMetrics;
use parking_lot::Mutex;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::config::SessionTiming;
use crate::delay::{wake_after, Epoch, EpochClock};
use crate::error::BookingError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingPhase {
    Editing,
    Submitting,
    Confirmed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingReceipt {
    pub reference: Uuid,
    pub form: BookingForm,
    pub summary: BookingSummaryView,
}

#[derive(Debug)]
struct BookingState {
    form: BookingForm,
    phase: BookingPhase,
    clock: EpochClock,
}

#[derive(Clone)]
pub struct BookingDesk {
    session_id: Uuid,
    state: Arc<Mutex<BookingState>>,
    timing: SessionTiming,
    metrics: Arc<AppMetrics>,
}

impl BookingDesk {
    pub fn new(session_id: Uuid, timing: SessionTiming, metrics: Arc<AppMetrics>) -> Self {
        Self {
            session_id,
            state: Arc::new(Mutex::new(BookingState {
                form: BookingForm::default(),
                phase: BookingPhase::Editing,
                clock: EpochClock::default(),
            })),
            timing,
            metrics,
        }
    }

    pub fn form(&self) -> BookingForm {
        self.state.lock().form.clone()
    }

    pub fn phase(&self) -> BookingPhase {
        self.state.lock().phase
    }

    pub fn is_pending(&self) -> bool {
        self.phase() == BookingPhase::Submitting
    }

    pub fn apply(&self, edit: FormEdit) -> Result<(), BookingError> {
        let mut state = self.state.lock();
        if state.clock.is_closed() {
            return Err(BookingError::SessionClosed);
        }
        debug!(session_id = %self.session_id, field = %edit.field(), "booking form edited");
        state.form.apply(edit);
        Ok(())
    }

    pub fn summary(&self) -> Result<BookingSummaryView, LookupError> {
        self.state.lock().form.summary()
    }

    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        validate_submission(&self.state.lock().form)
    }

    /// Runs the simulated submission. A second call while one is in flight is
    /// rejected without scheduling another completion.
    #[instrument(skip(self), fields(session_id = %self.session_id))]
    pub async fn submit(&self) -> Result<BookingReceipt, BookingError> {
        let (snapshot, summary, epoch) = {
            let mut state = self.state.lock();
            if state.clock.is_closed() {
                return Err(BookingError::SessionClosed);
            }
            if state.phase == BookingPhase::Submitting {
                self.metrics.inc_submission_rejected();
                warn!("booking submission already in flight");
                return Err(BookingError::SubmissionPending);
            }
            if let Err(errors) = validate_submission(&state.form) {
                self.metrics.inc_submission_rejected();
                info!(invalid_fields = errors.len(), "booking submission rejected");
                return Err(BookingError::Invalid(errors));
            }

            let summary = state.form.summary()?;
            state.phase = BookingPhase::Submitting;
            (state.form.clone(), summary, state.clock.advance())
        };

        let completion = tokio::spawn(complete_submission(
            Arc::downgrade(&self.state),
            epoch,
            snapshot,
            summary,
            self.timing,
            self.metrics.clone(),
        ));

        completion
            .await
            .unwrap_or(Err(BookingError::SessionClosed))
    }

    /// Tears the session down. Pending completions become no-ops.
    pub fn teardown(&self) {
        let mut state = self.state.lock();
        state.clock.close();
        debug!(session_id = %self.session_id, "booking desk closed");
    }
}

async fn complete_submission(
    state: Weak<Mutex<BookingState>>,
    epoch: Epoch,
    form: BookingForm,
    summary: BookingSummaryView,
    timing: SessionTiming,
    metrics: Arc<AppMetrics>,
) -> Result<BookingReceipt, BookingError> {
    let Some(shared) = wake_after(timing.submit_delay, &state).await else {
        return Err(BookingError::SessionClosed);
    };

    {
        let mut guard = shared.lock();
        if !guard.clock.is_current(epoch) {
            debug!("discarding stale booking completion");
            return Err(BookingError::SessionClosed);
        }
        guard.phase = BookingPhase::Confirmed;
    }

    let receipt = BookingReceipt {
        reference: Uuid::new_v4(),
        form,
        summary,
    };

    info!(
        reference = %receipt.reference,
        payload = %serde_json::json!(&receipt.form),
        total_price = receipt.summary.total_price,
        "booking submitted"
    );
    metrics.inc_submission_accepted();

    tokio::spawn(expire_confirmation(
        Arc::downgrade(&shared),
        epoch,
        timing.confirmation_window,
    ));

    Ok(receipt)
}

async fn expire_confirmation(state: Weak<Mutex<BookingState>>, epoch: Epoch, window: Duration) {
    let Some(shared) = wake_after(window, &state).await else {
        return;
    };

    let mut guard = shared.lock();
    if guard.clock.is_current(epoch) && guard.phase == BookingPhase::Confirmed {
        guard.form.reset();
        guard.phase = BookingPhase::Editing;
        debug!("booking confirmation window elapsed, form reset");
    }
}
