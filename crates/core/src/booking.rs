use std::ops::RangeInclusive;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::catalog::{default_destination, find_destination};
use crate::error::{LookupError, ValidationError};
use crate::models::{BookingForm, BookingSummary, BookingSummaryView, FormEdit, FormField};

pub const TRAVELER_RANGE: RangeInclusive<u32> = 1..=6;
pub const DEFAULT_TRAVELERS: u32 = 2;

static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("valid email regex"));

pub fn compute_summary(
    destination_code: &str,
    traveler_count: u32,
) -> Result<BookingSummary, LookupError> {
    let destination = find_destination(destination_code)?;
    if !TRAVELER_RANGE.contains(&traveler_count) {
        return Err(LookupError::TravelerCountOutOfRange(traveler_count));
    }

    let price_per_person = u64::from(destination.price_per_person);
    Ok(BookingSummary {
        price_per_person,
        total_price: price_per_person * u64::from(traveler_count),
    })
}

pub fn validate_submission(form: &BookingForm) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(err) = find_destination(&form.destination_code) {
        errors.push(ValidationError::Lookup(err));
    }
    if !TRAVELER_RANGE.contains(&form.traveler_count) {
        errors.push(ValidationError::Lookup(LookupError::TravelerCountOutOfRange(
            form.traveler_count,
        )));
    }
    if form.departure_date.trim().is_empty() {
        errors.push(ValidationError::Required(FormField::DepartureDate));
    }
    if form.full_name.trim().is_empty() {
        errors.push(ValidationError::Required(FormField::FullName));
    }

    let email = form.email.trim();
    if email.is_empty() {
        errors.push(ValidationError::Required(FormField::Email));
    } else if !is_email_shape(email) {
        errors.push(ValidationError::InvalidEmail);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

pub fn is_email_shape(candidate: &str) -> bool {
    EMAIL_SHAPE.is_match(candidate)
}

pub fn traveler_options() -> impl Iterator<Item = u32> {
    TRAVELER_RANGE
}

pub fn traveler_option_label(count: u32) -> String {
    if count == 1 {
        "1 traveler".to_string()
    } else {
        format!("{count} travelers")
    }
}

pub fn party_label(count: u32) -> String {
    if count == 1 {
        "1 person".to_string()
    } else {
        format!("{count} people")
    }
}

pub fn format_usd(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    grouped.push('$');

    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

impl Default for BookingForm {
    fn default() -> Self {
        Self {
            destination_code: default_destination().code.to_string(),
            traveler_count: DEFAULT_TRAVELERS,
            departure_date: String::new(),
            full_name: String::new(),
            email: String::new(),
        }
    }
}

impl BookingForm {
    pub fn apply(&mut self, edit: FormEdit) {
        match edit {
            FormEdit::Destination(code) => self.destination_code = code,
            FormEdit::Travelers(count) => self.traveler_count = count,
            FormEdit::DepartureDate(date) => self.departure_date = date,
            FormEdit::FullName(name) => self.full_name = name,
            FormEdit::Email(email) => self.email = email,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        validate_submission(self)
    }

    pub fn summary(&self) -> Result<BookingSummaryView, LookupError> {
        let destination = find_destination(&self.destination_code)?;
        let totals = compute_summary(&self.destination_code, self.traveler_count)?;

        let departure = match self.departure_date.trim() {
            "" => "Select date".to_string(),
            date => date.to_string(),
        };

        Ok(BookingSummaryView {
            destination: destination.display_name.to_string(),
            travelers: party_label(self.traveler_count),
            departure,
            price_per_person: totals.price_per_person,
            total_price: totals.total_price,
            price_per_person_label: format_usd(totals.price_per_person),
            total_price_label: format_usd(totals.total_price),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog;

    fn filled_form() -> BookingForm {
        BookingForm {
            destination_code: "florence-1504".to_string(),
            traveler_count: 4,
            departure_date: "2031-04-12".to_string(),
            full_name: "Ada Lovelace".to_string(),
            email: "ada@analytical.engine".to_string(),
        }
    }

    #[test]
    fn total_is_exact_for_every_destination_and_party_size() {
        for destination in catalog() {
            for travelers in traveler_options() {
                let summary = compute_summary(destination.code, travelers).unwrap();
                assert_eq!(summary.price_per_person, u64::from(destination.price_per_person));
                assert_eq!(
                    summary.total_price,
                    u64::from(destination.price_per_person) * u64::from(travelers)
                );
            }
        }
    }

    #[test]
    fn cretaceous_for_three() {
        let summary = compute_summary("cretaceous", 3).unwrap();
        assert_eq!(
            summary,
            BookingSummary {
                price_per_person: 25_000,
                total_price: 75_000,
            }
        );
    }

    #[test]
    fn rejects_unknown_destination_and_bad_counts() {
        assert_eq!(
            compute_summary("atlantis", 2),
            Err(LookupError::UnknownDestination("atlantis".to_string()))
        );
        assert_eq!(
            compute_summary("paris-1889", 0),
            Err(LookupError::TravelerCountOutOfRange(0))
        );
        assert_eq!(
            compute_summary("paris-1889", 7),
            Err(LookupError::TravelerCountOutOfRange(7))
        );
    }

    #[test]
    fn complete_form_passes() {
        assert_eq!(validate_submission(&filled_form()), Ok(()));
    }

    #[test]
    fn each_missing_field_reports_only_itself() {
        let mut form = filled_form();
        form.departure_date.clear();
        assert_eq!(
            validate_submission(&form),
            Err(vec![ValidationError::Required(FormField::DepartureDate)])
        );

        let mut form = filled_form();
        form.full_name = "   ".to_string();
        assert_eq!(
            validate_submission(&form),
            Err(vec![ValidationError::Required(FormField::FullName)])
        );

        let mut form = filled_form();
        form.email.clear();
        assert_eq!(
            validate_submission(&form),
            Err(vec![ValidationError::Required(FormField::Email)])
        );

        let mut form = filled_form();
        form.email = "ada.analytical.engine".to_string();
        assert_eq!(validate_submission(&form), Err(vec![ValidationError::InvalidEmail]));
    }

    #[test]
    fn untrusted_selection_fields_are_checked() {
        let mut form = filled_form();
        form.destination_code = "atlantis".to_string();
        form.traveler_count = 9;

        let errors = validate_submission(&form).unwrap_err();
        let fields = errors.iter().map(ValidationError::field).collect::<Vec<_>>();
        assert_eq!(fields, vec![FormField::Destination, FormField::Travelers]);
    }

    #[test]
    fn email_shape() {
        assert!(is_email_shape("guest@timetravel.agency"));
        assert!(is_email_shape("a.b+c@mail.example.org"));
        assert!(!is_email_shape("guest@localhost"));
        assert!(!is_email_shape("guest@.com"));
        assert!(!is_email_shape("@timetravel.agency"));
        assert!(!is_email_shape("two words@timetravel.agency"));
    }

    #[test]
    fn labels_pluralize() {
        assert_eq!(party_label(1), "1 person");
        assert_eq!(party_label(3), "3 people");
        assert_eq!(traveler_option_label(1), "1 traveler");
        assert_eq!(traveler_option_label(6), "6 travelers");
    }

    #[test]
    fn usd_grouping() {
        assert_eq!(format_usd(0), "$0");
        assert_eq!(format_usd(950), "$950");
        assert_eq!(format_usd(18_000), "$18,000");
        assert_eq!(format_usd(150_000), "$150,000");
        assert_eq!(format_usd(1_250_000), "$1,250,000");
    }

    #[test]
    fn summary_view_follows_form_edits() {
        let mut form = BookingForm::default();
        let view = form.summary().unwrap();
        assert_eq!(view.destination, "Paris 1889");
        assert_eq!(view.travelers, "2 people");
        assert_eq!(view.departure, "Select date");
        assert_eq!(view.total_price_label, "$36,000");

        form.apply(FormEdit::Destination("cretaceous".to_string()));
        form.apply(FormEdit::Travelers(1));
        form.apply(FormEdit::DepartureDate("2030-01-01".to_string()));
        let view = form.summary().unwrap();
        assert_eq!(view.destination, "Cretaceous Era");
        assert_eq!(view.travelers, "1 person");
        assert_eq!(view.departure, "2030-01-01");
        assert_eq!(view.price_per_person_label, "$25,000");
        assert_eq!(view.total_price, 25_000);

        form.reset();
        assert_eq!(form, BookingForm::default());
    }
}
