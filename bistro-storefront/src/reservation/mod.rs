//! Reservation and contact forms
//!
//! Forms are validated locally and rendered into a text message that is
//! handed to the messaging deep link. There is no server round-trip:
//! producing the link is the whole submission.

mod link;

pub use link::{MESSAGING_BASE_URL, MessagingLink};

use chrono::{NaiveDate, NaiveTime};
use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_PHONE_LEN, validate_email, validate_optional_text,
    validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// Largest party accepted through the form
pub const MAX_GUESTS: u8 = 20;

/// Table reservation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub time: String,
    pub guests: u8,
    #[serde(default)]
    pub special_requests: Option<String>,
}

impl ReservationRequest {
    pub fn validate(&self) -> AppResult<()> {
        validate_required_text(&self.name, "name", MAX_NAME_LEN)?;
        validate_email(&self.email)?;
        validate_required_text(&self.phone, "phone", MAX_PHONE_LEN)?;
        self.parsed_date()?;
        self.parsed_time()?;
        if !(1..=MAX_GUESTS).contains(&self.guests) {
            return Err(AppError::validation(format!(
                "guests must be between 1 and {MAX_GUESTS}, got {}",
                self.guests
            )));
        }
        validate_optional_text(&self.special_requests, "special requests", MAX_NOTE_LEN)
    }

    fn parsed_date(&self) -> AppResult<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| AppError::validation(format!("date is not valid: {}", self.date)))
    }

    fn parsed_time(&self) -> AppResult<NaiveTime> {
        NaiveTime::parse_from_str(self.time.trim(), "%H:%M")
            .map_err(|_| AppError::validation(format!("time is not valid: {}", self.time)))
    }

    /// Pre-filled message body
    pub fn to_message_text(&self) -> String {
        let mut text = format!(
            "Hello! I'd like to book a table.\n\
             Name: {}\n\
             Email: {}\n\
             Phone: {}\n\
             Date: {}\n\
             Time: {}\n\
             Guests: {}",
            self.name.trim(),
            self.email.trim(),
            self.phone.trim(),
            self.date.trim(),
            self.time.trim(),
            self.guests,
        );
        if let Some(requests) = self.special_requests.as_deref().map(str::trim)
            && !requests.is_empty()
        {
            text.push_str("\nSpecial requests: ");
            text.push_str(requests);
        }
        text
    }

    /// Validate and build the deep link
    pub fn submit(&self, link: &MessagingLink) -> AppResult<Url> {
        self.validate()?;
        let url = link.link_for(&self.to_message_text())?;
        tracing::info!(guests = self.guests, date = %self.date, "reservation link created");
        Ok(url)
    }
}

/// General contact message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub message: String,
}

impl ContactMessage {
    pub fn validate(&self) -> AppResult<()> {
        validate_required_text(&self.name, "name", MAX_NAME_LEN)?;
        validate_email(&self.email)?;
        validate_optional_text(&self.phone, "phone", MAX_PHONE_LEN)?;
        validate_required_text(&self.message, "message", MAX_NOTE_LEN)
    }

    pub fn to_message_text(&self) -> String {
        let mut text = format!("Hello! My name is {} ({}).", self.name.trim(), self.email.trim());
        if let Some(phone) = self.phone.as_deref().map(str::trim)
            && !phone.is_empty()
        {
            text.push_str(&format!("\nPhone: {phone}"));
        }
        text.push_str("\n\n");
        text.push_str(self.message.trim());
        text
    }

    pub fn submit(&self, link: &MessagingLink) -> AppResult<Url> {
        self.validate()?;
        let url = link.link_for(&self.to_message_text())?;
        tracing::info!("contact link created");
        Ok(url)
    }
}
