use crate::booking::format_usd;
use crate::error::LookupError;
use crate::models::Destination;

static DESTINATIONS: [Destination; 3] = [
    Destination {
        code: "paris-1889",
        display_name: "Paris 1889",
        price_per_person: 18_000,
        title: "Paris 1889",
        subtitle: "The Belle Époque",
        description: "Witness the unveiling of the Eiffel Tower at the Exposition Universelle. Experience the golden age of art, culture, and innovation.",
        period: "May 6-31, 1889",
        location: "Paris, France",
        capacity: 12,
    },
    Destination {
        code: "cretaceous",
        display_name: "Cretaceous Era",
        price_per_person: 25_000,
        title: "Crétacé",
        subtitle: "The Age of Giants",
        description: "Step into a world 66 million years ago. Observe magnificent dinosaurs in their natural habitat with our premium safety protocols.",
        period: "66 Million BCE",
        location: "Laurasia Supercontinent",
        capacity: 8,
    },
    Destination {
        code: "florence-1504",
        display_name: "Florence 1504",
        price_per_person: 22_000,
        title: "Florence 1504",
        subtitle: "Renaissance Masterpiece",
        description: "Watch Leonardo da Vinci and Michelangelo at work. Immerse yourself in the creative revolution that shaped Western art forever.",
        period: "October 1504",
        location: "Florence, Italy",
        capacity: 10,
    },
];

pub fn catalog() -> &'static [Destination] {
    &DESTINATIONS
}

pub fn default_destination() -> &'static Destination {
    &DESTINATIONS[0]
}

pub fn find_destination(code: &str) -> Result<&'static Destination, LookupError> {
    DESTINATIONS
        .iter()
        .find(|destination| destination.code == code)
        .ok_or_else(|| LookupError::UnknownDestination(code.to_string()))
}

impl Destination {
    pub fn booking_label(&self) -> String {
        format!(
            "{} - {} per person",
            self.display_name,
            format_usd(u64::from(self.price_per_person))
        )
    }

    pub fn capacity_label(&self) -> String {
        format!("{} travelers", self.capacity)
    }
}
