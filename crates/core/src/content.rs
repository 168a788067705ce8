use crate::models::{FaqEntry, Feature};

pub const AGENCY_NAME: &str = "TimeTravel Agency";
pub const TAGLINE: &str = "Journey Through the Corridors of Time";
pub const CONTACT_EMAIL: &str = "journeys@timetravel.agency";
pub const CONTACT_PHONE: &str = "+1 (888) TIME-888";
pub const CONTACT_ADDRESS: &str = "Temporal Hub District, New York, 2157";
pub const PACKAGE_INCLUDES: &str =
    "Includes accommodation, meals, guide services, and temporal shielding";

static FEATURES: [Feature; 3] = [
    Feature {
        title: "Curated Experiences",
        description: "Handpicked moments in history with expert guides and immersive settings.",
    },
    Feature {
        title: "Safety Guaranteed",
        description: "Advanced temporal shielding and certified guides ensure your safety.",
    },
    Feature {
        title: "Exclusive Access",
        description: "Private expeditions limited to small groups for an unforgettable journey.",
    },
];

static FAQS: [FaqEntry; 6] = [
    FaqEntry {
        question: "Is time travel safe?",
        answer: "Absolutely. All our excursions utilize cutting-edge temporal shielding and are supervised by certified temporal guides. We maintain a 99.9% safety record across all timelines.",
    },
    FaqEntry {
        question: "Will I affect history?",
        answer: "No. Our temporal protocols ensure you observe only, with zero interference. We operate within the Temporal Regulation Authority guidelines to prevent paradoxes.",
    },
    FaqEntry {
        question: "What should I bring?",
        answer: "All necessary equipment is provided. Comfortable clothing suited to the era, identification, and a sense of adventure are recommended.",
    },
    FaqEntry {
        question: "How long are the journeys?",
        answer: "Each journey lasts 3-7 days depending on the destination. Time flows normally for you, so you'll experience history at a natural pace.",
    },
    FaqEntry {
        question: "Can I bring family?",
        answer: "Yes! We offer family packages for ages 12+. Younger travelers can join our special historical education tours with parental supervision.",
    },
    FaqEntry {
        question: "What's the price range?",
        answer: "Prices vary from $15,000 to $75,000 per person depending on destination and season. Packages include accommodation, meals, and expert guidance.",
    },
];

pub fn features() -> &'static [Feature] {
    &FEATURES
}

pub fn faqs() -> &'static [FaqEntry] {
    &FAQS
}

/// Open/closed flags for the FAQ list. Items toggle independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqAccordion {
    open: Vec<bool>,
}

impl Default for FaqAccordion {
    fn default() -> Self {
        Self::new(faqs().len())
    }
}

impl FaqAccordion {
    pub fn new(items: usize) -> Self {
        Self {
            open: vec![false; items],
        }
    }

    pub fn toggle(&mut self, index: usize) -> bool {
        match self.open.get_mut(index) {
            Some(flag) => {
                *flag = !*flag;
                *flag
            }
            None => false,
        }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.get(index).copied().unwrap_or(false)
    }

    pub fn open_items(&self) -> impl Iterator<Item = usize> + '_ {
        self.open
            .iter()
            .enumerate()
            .filter_map(|(idx, open)| open.then_some(idx))
    }
}
