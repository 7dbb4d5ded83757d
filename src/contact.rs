//! Contact form and outbound deep links
//!
//! Nothing is sent from here: a valid form becomes a `mailto:` URL for the
//! user's mail client, and the WhatsApp button becomes a `wa.me` link.

use thiserror::Error;

use crate::constants::contact::{COMPANY_NOT_PROVIDED, SUBJECT_PREFIX, WHATSAPP_BASE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("please authorise us to contact you before sending")]
    ConsentRequired,
    #[error("the {0} field is required")]
    MissingField(&'static str),
    #[error("no contact address is configured")]
    NoRecipient,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
    pub consent: bool,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ContactError> {
        if !self.consent {
            return Err(ContactError::ConsentRequired);
        }
        for (field, value) in [("name", &self.name), ("email", &self.email), ("message", &self.message)] {
            if value.trim().is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }
        Ok(())
    }

    pub fn subject(&self) -> String {
        format!("{SUBJECT_PREFIX}{}", self.name.trim())
    }

    pub fn body(&self) -> String {
        let company = match self.company.trim() {
            "" => COMPANY_NOT_PROVIDED,
            company => company,
        };
        format!(
            "Name: {}\nEmail: {}\nCompany: {}\n\nMessage:\n{}",
            self.name.trim(),
            self.email.trim(),
            company,
            self.message.trim()
        )
    }

    /// Validate and build the `mailto:` link for `recipient`
    pub fn mailto_url(&self, recipient: &str) -> Result<String, ContactError> {
        self.validate()?;
        let recipient = recipient.trim();
        if recipient.is_empty() {
            return Err(ContactError::NoRecipient);
        }
        Ok(format!(
            "mailto:{recipient}?subject={}&body={}",
            encode_uri_component(&self.subject()),
            encode_uri_component(&self.body())
        ))
    }

    /// Build the link, then clear the form for the next message
    pub fn submit(&mut self, recipient: &str) -> Result<String, ContactError> {
        let url = self.mailto_url(recipient)?;
        *self = Self::default();
        Ok(url)
    }
}

/// `https://wa.me/{number}?text={message}`; `None` when no number is configured
pub fn whatsapp_url(number: &str, message: &str) -> Option<String> {
    let digits: String = number.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    Some(format!("{WHATSAPP_BASE}/{digits}?text={}", encode_uri_component(message)))
}

/// Percent-encode everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`
pub fn encode_uri_component(input: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";

    let mut out = String::with_capacity(input.len());
    for &byte in input.as_bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => {
                out.push('%');
                out.push(HEX[(byte >> 4) as usize] as char);
                out.push(HEX[(byte & 0x0F) as usize] as char);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ana Souza".to_string(),
            email: "ana@example.com".to_string(),
            company: String::new(),
            message: "Need a booking bot.".to_string(),
            consent: true,
        }
    }

    #[test]
    fn test_consent_is_required() {
        let form = ContactForm {
            consent: false,
            ..filled()
        };
        assert_eq!(form.mailto_url("me@example.com"), Err(ContactError::ConsentRequired));
    }

    #[test]
    fn test_required_fields() {
        let form = ContactForm {
            email: "   ".to_string(),
            ..filled()
        };
        assert_eq!(form.validate(), Err(ContactError::MissingField("email")));
    }

    #[test]
    fn test_body_marks_missing_company() {
        let body = filled().body();
        assert!(body.contains("Company: Not provided"));
        assert!(body.ends_with("Message:\nNeed a booking bot."));
    }

    #[test]
    fn test_mailto_url_is_encoded() {
        let url = filled().mailto_url("me@example.com").unwrap();
        assert!(url.starts_with("mailto:me@example.com?subject=Portfolio%20contact%3A%20Ana%20Souza&body="));
        assert!(url.contains("Name%3A%20Ana%20Souza%0AEmail%3A%20ana%40example.com"));
        assert!(!url.contains(' '));
        assert!(!url.contains('\n'));
    }

    #[test]
    fn test_missing_recipient() {
        assert_eq!(filled().mailto_url("  "), Err(ContactError::NoRecipient));
    }

    #[test]
    fn test_submit_resets_form() {
        let mut form = filled();
        assert!(form.submit("me@example.com").is_ok());
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_failed_submit_keeps_input() {
        let mut form = ContactForm {
            consent: false,
            ..filled()
        };
        assert!(form.submit("me@example.com").is_err());
        assert_eq!(form.name, "Ana Souza");
    }

    #[test]
    fn test_encode_uri_component() {
        assert_eq!(encode_uri_component("a-z_0.9!~*'()"), "a-z_0.9!~*'()");
        assert_eq!(encode_uri_component("a b&c=d/e?"), "a%20b%26c%3Dd%2Fe%3F");
        assert_eq!(encode_uri_component("Olá"), "Ol%C3%A1");
    }

    #[test]
    fn test_whatsapp_url() {
        assert_eq!(
            whatsapp_url("+55 (85) 99999-0000", "Hi there"),
            Some("https://wa.me/5585999990000?text=Hi%20there".to_string())
        );
        assert_eq!(whatsapp_url("", "Hi"), None);
    }
}
