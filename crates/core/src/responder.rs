use once_cell::sync::Lazy;

use crate::models::Topic;

pub const DEFAULT_RESPONSE: &str = "That's a great question! Our experts can help you with more specific information. Would you like to book a consultation call or explore our destinations?";

static STANDARD_RULES: Lazy<RuleTable> = Lazy::new(RuleTable::standard);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    ContainsAny(&'static [&'static str]),
}

impl Predicate {
    /// `lowered` must already be lowercase; keywords are stored lowercase.
    pub fn matches(&self, lowered: &str) -> bool {
        match self {
            Self::ContainsAny(keywords) => keywords.iter().any(|keyword| lowered.contains(keyword)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseRule {
    pub topic: Topic,
    pub predicate: Predicate,
    pub response: &'static str,
}

impl ResponseRule {
    pub const fn new(topic: Topic, keywords: &'static [&'static str], response: &'static str) -> Self {
        Self {
            topic,
            predicate: Predicate::ContainsAny(keywords),
            response,
        }
    }
}

/// Ordered keyword rules. The first rule whose predicate matches wins,
/// regardless of where its keyword appears in the utterance.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<ResponseRule>,
    default_response: &'static str,
}

impl RuleTable {
    pub fn new(rules: Vec<ResponseRule>, default_response: &'static str) -> Self {
        Self {
            rules,
            default_response,
        }
    }

    pub fn standard() -> Self {
        Self::new(
            vec![
                ResponseRule::new(
                    Topic::Greeting,
                    &["hello", "hi", "hey"],
                    "Welcome to TimeTravel Agency! How can I help you plan your temporal journey today?",
                ),
                ResponseRule::new(
                    Topic::Destinations,
                    &["destination", "where"],
                    "We offer three main destinations: Paris 1889 during the Belle Époque, the Cretaceous period to see dinosaurs, and Florence 1504 during the Renaissance. Which interests you most?",
                ),
                ResponseRule::new(
                    Topic::Pricing,
                    &["price", "cost", "money"],
                    "Our packages range from $15,000 to $75,000 per person depending on destination and duration. Would you like more details about a specific journey?",
                ),
                ResponseRule::new(
                    Topic::Safety,
                    &["safe"],
                    "Safety is our top priority! We maintain a 99.9% safety record with advanced temporal shielding and certified guides on every expedition.",
                ),
                ResponseRule::new(
                    Topic::Booking,
                    &["book", "reserve"],
                    "Ready to book? Our booking form is available at the bottom of the page. You can select your destination, preferred dates, and number of travelers.",
                ),
                ResponseRule::new(
                    Topic::Paris,
                    &["paris"],
                    "Paris 1889 is an extraordinary experience! Witness the unveiling of the Eiffel Tower at the Exposition Universelle. Limited to 12 travelers per journey.",
                ),
                ResponseRule::new(
                    Topic::Cretaceous,
                    &["dinosaur", "cretaceous"],
                    "Explore the Cretaceous period 66 million years ago! See magnificent dinosaurs in their natural habitat with our premium safety protocols.",
                ),
                ResponseRule::new(
                    Topic::Florence,
                    &["florence", "renaissance"],
                    "Florence 1504 is magical! Watch Leonardo da Vinci and Michelangelo at work during the Renaissance. Limited to 10 travelers.",
                ),
                ResponseRule::new(
                    Topic::Duration,
                    &["how long", "duration"],
                    "Most journeys last 3-7 days. You'll experience time naturally, fully immersed in your chosen era.",
                ),
                ResponseRule::new(
                    Topic::Family,
                    &["family", "kids", "children"],
                    "We offer family packages for ages 12+. Younger travelers can join our special educational tours with parental supervision.",
                ),
            ],
            DEFAULT_RESPONSE,
        )
    }

    pub fn shared() -> &'static RuleTable {
        &STANDARD_RULES
    }

    pub fn rules(&self) -> &[ResponseRule] {
        &self.rules
    }

    pub fn default_response(&self) -> &'static str {
        self.default_response
    }

    /// Appends a rule with the lowest precedence.
    pub fn push(&mut self, rule: ResponseRule) {
        self.rules.push(rule);
    }

    pub fn matching_rule(&self, utterance: &str) -> Option<&ResponseRule> {
        let lowered = utterance.to_lowercase();
        self.rules.iter().find(|rule| rule.predicate.matches(&lowered))
    }

    pub fn classify(&self, utterance: &str) -> Option<Topic> {
        self.matching_rule(utterance).map(|rule| rule.topic)
    }

    pub fn respond(&self, utterance: &str) -> &'static str {
        self.matching_rule(utterance)
            .map(|rule| rule.response)
            .unwrap_or(self.default_response)
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::standard()
    }
}

pub fn respond(utterance: &str) -> &'static str {
    RuleTable::shared().respond(utterance)
}
