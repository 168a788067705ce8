use std::time::Duration;

use agency_core::{
    catalog, compute_summary, respond, BookingForm, FormEdit, FormField, RuleTable, Sender, Topic,
    ValidationError, DEFAULT_RESPONSE,
};
use agency_observability::AppMetrics;
use agency_session::{BookingError, BookingPhase, SessionTiming, VisitorSession};

fn fill(session: &VisitorSession) -> anyhow::Result<()> {
    session
        .booking
        .apply(FormEdit::Destination("florence-1504".to_string()))?;
    session.booking.apply(FormEdit::Travelers(1))?;
    session
        .booking
        .apply(FormEdit::DepartureDate("2030-10-01".to_string()))?;
    session
        .booking
        .apply(FormEdit::FullName("Giorgio Vasari".to_string()))?;
    session
        .booking
        .apply(FormEdit::Email("giorgio@uffizi.it".to_string()))?;
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn booking_round_trip_through_confirmation_window() -> anyhow::Result<()> {
    let metrics = AppMetrics::shared();
    let session = VisitorSession::new(SessionTiming::default(), metrics.clone());
    fill(&session)?;

    let view = session.booking.summary()?;
    assert_eq!(view.travelers, "1 person");
    assert_eq!(view.total_price_label, "$22,000");

    let receipt = session.booking.submit().await?;
    assert_eq!(receipt.summary.total_price, 22_000);
    assert_eq!(session.booking.phase(), BookingPhase::Confirmed);

    let payload = serde_json::to_value(&receipt)?;
    assert_eq!(payload["form"]["destination_code"], "florence-1504");
    assert_eq!(payload["summary"]["price_per_person"], 22_000);

    tokio::time::sleep(Duration::from_millis(3_100)).await;
    assert_eq!(session.booking.form(), BookingForm::default());
    assert_eq!(session.booking.phase(), BookingPhase::Editing);
    assert_eq!(metrics.snapshot().submissions_accepted_total, 1);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn invalid_email_is_the_only_reported_error() -> anyhow::Result<()> {
    let session = VisitorSession::new(SessionTiming::default(), AppMetrics::shared());
    fill(&session)?;
    session
        .booking
        .apply(FormEdit::Email("giorgio-at-uffizi".to_string()))?;

    assert_eq!(
        session.booking.submit().await,
        Err(BookingError::Invalid(vec![ValidationError::InvalidEmail]))
    );
    assert_eq!(
        session.booking.validate().unwrap_err()[0].field(),
        FormField::Email
    );
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn sessions_do_not_share_state() -> anyhow::Result<()> {
    let metrics = AppMetrics::shared();
    let first = VisitorSession::new(SessionTiming::default(), metrics.clone());
    let second = VisitorSession::new(SessionTiming::default(), metrics.clone());
    fill(&first)?;

    assert_ne!(first.id, second.id);
    assert_eq!(second.booking.form(), BookingForm::default());

    first.chat.send("where can we go?").await;
    assert_eq!(first.chat.messages().len(), 3);
    assert_eq!(second.chat.messages().len(), 1);

    first.teardown();
    assert!(second.chat.send("is it safe").await.is_some());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn chat_transcript_alternates_user_and_bot() {
    let session = VisitorSession::new(SessionTiming::default(), AppMetrics::shared());

    for text in ["Hello, what's the price for Florence?", "   ", "asdkjasd"] {
        session.chat.send(text).await;
    }

    let messages = session.chat.messages();
    let senders = messages.iter().map(|m| m.sender).collect::<Vec<_>>();
    assert_eq!(
        senders,
        vec![Sender::Bot, Sender::User, Sender::Bot, Sender::User, Sender::Bot]
    );
    assert_eq!(messages[2].text, respond("hello"));
    assert_eq!(messages[4].text, DEFAULT_RESPONSE);
}

#[test]
fn catalog_is_the_single_price_source() {
    for destination in catalog() {
        let summary = compute_summary(destination.code, 6).unwrap();
        assert!(destination
            .booking_label()
            .contains(&agency_core::format_usd(summary.price_per_person)));
        assert_eq!(summary.total_price, summary.price_per_person * 6);
    }
}

#[test]
fn rule_order_is_the_precedence_contract() {
    let table = RuleTable::standard();
    let topics = table.rules().iter().map(|rule| rule.topic).collect::<Vec<_>>();
    assert_eq!(
        topics,
        vec![
            Topic::Greeting,
            Topic::Destinations,
            Topic::Pricing,
            Topic::Safety,
            Topic::Booking,
            Topic::Paris,
            Topic::Cretaceous,
            Topic::Florence,
            Topic::Duration,
            Topic::Family,
        ]
    );
}
