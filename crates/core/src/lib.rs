pub mod booking;
pub mod catalog;
pub mod content;
pub mod error;
pub mod models;
pub mod responder;
pub mod transcript;

pub use booking::{
    compute_summary, format_usd, party_label, traveler_option_label, traveler_options,
    validate_submission, TRAVELER_RANGE,
};
pub use catalog::{catalog, default_destination, find_destination};
pub use content::{faqs, features, FaqAccordion};
pub use error::{LookupError, ValidationError};
pub use models::*;
pub use responder::{respond, Predicate, ResponseRule, RuleTable, DEFAULT_RESPONSE};
pub use transcript::{PendingReply, Transcript, GREETING};
