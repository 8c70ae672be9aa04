use reqwest::Url;

use crate::utils::{AppError, AppResult};

/// Base of the messaging deep link
pub const MESSAGING_BASE_URL: &str = "https://wa.me/";

/// Builds deep links that open a chat with the restaurant, pre-filled with a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessagingLink {
    number: String,
}

impl MessagingLink {
    /// Accepts any formatting ("+1 (555) 123-4567"); only digits are kept
    pub fn new(contact_number: &str) -> AppResult<Self> {
        let number: String = contact_number.chars().filter(char::is_ascii_digit).collect();
        if number.is_empty() {
            return Err(AppError::config(format!(
                "contact number has no digits: {contact_number:?}"
            )));
        }
        Ok(Self { number })
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    /// Deep link carrying `text` as the URL-encoded message body
    pub fn link_for(&self, text: &str) -> AppResult<Url> {
        let base = format!("{MESSAGING_BASE_URL}{}", self.number);
        Url::parse_with_params(&base, &[("text", text)])
            .map_err(|e| AppError::config(format!("invalid messaging link: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_keeps_digits_only() {
        let link = MessagingLink::new("+1 (555) 123-4567").unwrap();
        assert_eq!(link.number(), "15551234567");
    }

    #[test]
    fn test_number_without_digits_rejected() {
        assert!(MessagingLink::new("call us").is_err());
    }

    #[test]
    fn test_link_encodes_text() {
        let link = MessagingLink::new("15551234567").unwrap();
        let url = link.link_for("Table for 2 & wine?").unwrap();

        assert_eq!(url.host_str(), Some("wa.me"));
        assert_eq!(url.path(), "/15551234567");
        let (key, value) = url.query_pairs().next().unwrap();
        assert_eq!(key, "text");
        assert_eq!(value, "Table for 2 & wine?");
        assert!(!url.as_str().contains(' '));
    }
}
