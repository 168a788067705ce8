use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Destination {
    pub code: &'static str,
    pub display_name: &'static str,
    pub price_per_person: u32,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub capacity: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Destination,
    Travelers,
    DepartureDate,
    FullName,
    Email,
}

impl FormField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Destination => "destination",
            Self::Travelers => "travelers",
            Self::DepartureDate => "departure date",
            Self::FullName => "full name",
            Self::Email => "email",
        }
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormEdit {
    Destination(String),
    Travelers(u32),
    DepartureDate(String),
    FullName(String),
    Email(String),
}

impl FormEdit {
    pub fn field(&self) -> FormField {
        match self {
            Self::Destination(_) => FormField::Destination,
            Self::Travelers(_) => FormField::Travelers,
            Self::DepartureDate(_) => FormField::DepartureDate,
            Self::FullName(_) => FormField::FullName,
            Self::Email(_) => FormField::Email,
        }
    }
}

/// Editable state of the reservation form. Field values are untrusted until
/// they pass `validate_submission`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingForm {
    pub destination_code: String,
    pub traveler_count: u32,
    pub departure_date: String,
    pub full_name: String,
    pub email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BookingSummary {
    pub price_per_person: u64,
    pub total_price: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingSummaryView {
    pub destination: String,
    pub travelers: String,
    pub departure: String,
    pub price_per_person: u64,
    pub total_price: u64,
    pub price_per_person_label: String,
    pub total_price_label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MessageId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: MessageId,
    pub sender: Sender,
    pub text: String,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Greeting,
    Destinations,
    Pricing,
    Safety,
    Booking,
    Paris,
    Cretaceous,
    Florence,
    Duration,
    Family,
}

impl Topic {
    pub fn as_code(self) -> &'static str {
        match self {
            Self::Greeting => "greeting",
            Self::Destinations => "destinations",
            Self::Pricing => "pricing",
            Self::Safety => "safety",
            Self::Booking => "booking",
            Self::Paris => "paris",
            Self::Cretaceous => "cretaceous",
            Self::Florence => "florence",
            Self::Duration => "duration",
            Self::Family => "family",
        }
    }
}
