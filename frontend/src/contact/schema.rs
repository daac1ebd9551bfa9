use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-ZÀ-ÿ\s]*$").unwrap());
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }
}

/// The contact form's working copy of the message. Serializes directly into
/// the POST /api/contact body.
#[derive(Clone, Default, PartialEq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }
}

struct FieldRule {
    min: usize,
    max: usize,
    min_msg: &'static str,
    max_msg: &'static str,
    pattern: Option<(&'static Lazy<Regex>, &'static str)>,
}

fn rule_for(field: Field) -> FieldRule {
    match field {
        Field::Name => FieldRule {
            min: 2,
            max: 50,
            min_msg: "Name must be at least 2 characters",
            max_msg: "Name is too long",
            pattern: Some((&NAME_RE, "Name must contain only letters")),
        },
        Field::Email => FieldRule {
            min: 5,
            max: 50,
            min_msg: "Email is too short",
            max_msg: "Email is too long",
            pattern: Some((&EMAIL_RE, "Invalid email")),
        },
        Field::Subject => FieldRule {
            min: 3,
            max: 100,
            min_msg: "Subject must be at least 3 characters",
            max_msg: "Subject is too long",
            pattern: None,
        },
        Field::Message => FieldRule {
            min: 10,
            max: 1000,
            min_msg: "Message must be at least 10 characters",
            max_msg: "Message is too long",
            pattern: None,
        },
    }
}

/// Fail-fast validation: minimum length, then maximum length, then pattern.
/// Returns the first failing rule's message.
pub fn validate_field(field: Field, value: &str) -> Result<(), String> {
    let rule = rule_for(field);
    let len = value.chars().count();
    if len < rule.min {
        return Err(rule.min_msg.to_string());
    }
    if len > rule.max {
        return Err(rule.max_msg.to_string());
    }
    if let Some((re, msg)) = rule.pattern {
        if !re.is_match(value) {
            return Err(msg.to_string());
        }
    }
    Ok(())
}

/// Validates all four fields independently; succeeds only if all succeed.
pub fn validate_message(message: &ContactMessage) -> Result<(), HashMap<Field, String>> {
    let mut errors = HashMap::new();
    for field in Field::ALL {
        if let Err(e) = validate_field(field, message.get(field)) {
            errors.insert(field, e);
        }
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Cheap enough to recompute on every keystroke; drives the submit button.
pub fn is_submittable(message: &ContactMessage) -> bool {
    validate_message(message).is_ok()
}

/// Per-field error/touched bookkeeping. A field shows its error only once
/// the user has interacted with it.
#[derive(Clone, Default, PartialEq)]
pub struct ValidationState {
    errors: HashMap<Field, String>,
    touched: HashSet<Field>,
}

impl ValidationState {
    pub fn record(&mut self, field: Field, result: Result<(), String>) {
        self.touched.insert(field);
        match result {
            Ok(()) => {
                self.errors.remove(&field);
            }
            Err(e) => {
                self.errors.insert(field, e);
            }
        }
    }

    pub fn record_all(&mut self, errors: HashMap<Field, String>) {
        for field in Field::ALL {
            self.touched.insert(field);
            match errors.get(&field) {
                Some(e) => {
                    self.errors.insert(field, e.clone());
                }
                None => {
                    self.errors.remove(&field);
                }
            }
        }
    }

    pub fn visible_error(&self, field: Field) -> Option<&str> {
        if self.touched.contains(&field) {
            self.errors.get(&field).map(String::as_str)
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.errors.clear();
        self.touched.clear();
    }
}

/// Reduces the gateway's HTTP response to the one shape the form branches
/// on: Ok for 2xx, otherwise the server's `error` text when present.
pub fn interpret_submit_response(status: u16, body: &str) -> Result<(), String> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    let server_error = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from));
    Err(server_error.unwrap_or_else(|| "Failed to send your message. Please try again later.".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_message() -> ContactMessage {
        ContactMessage {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            subject: "Project inquiry".to_string(),
            message: "I would like to discuss a new website.".to_string(),
        }
    }

    #[test]
    fn name_rejects_digits_and_accepts_letters_with_spaces() {
        assert!(validate_field(Field::Name, "John123").is_err());
        assert!(validate_field(Field::Name, "John Doe").is_ok());
        assert!(validate_field(Field::Name, "José Aparício").is_ok());
    }

    #[test]
    fn name_length_bounds() {
        assert_eq!(
            validate_field(Field::Name, "J").unwrap_err(),
            "Name must be at least 2 characters"
        );
        assert!(validate_field(Field::Name, &"a".repeat(51)).is_err());
        assert!(validate_field(Field::Name, &"a".repeat(50)).is_ok());
    }

    #[test]
    fn email_syntax_and_length() {
        assert_eq!(validate_field(Field::Email, "not-an-email").unwrap_err(), "Invalid email");
        assert!(validate_field(Field::Email, "a@b.co").is_ok());
        assert!(validate_field(Field::Email, "a@b").is_err());
        let long = format!("{}@example.com", "a".repeat(45));
        assert_eq!(validate_field(Field::Email, &long).unwrap_err(), "Email is too long");
    }

    #[test]
    fn min_length_checked_before_pattern() {
        // "a@b" is both too short and syntactically invalid; the length
        // message wins because rules apply in order.
        assert_eq!(validate_field(Field::Email, "a@b").unwrap_err(), "Email is too short");
    }

    #[test]
    fn message_length_bounds() {
        assert!(validate_field(Field::Message, "short").is_err());
        assert!(validate_field(Field::Message, &"a".repeat(1001)).is_err());
        assert!(validate_field(Field::Message, &"a".repeat(500)).is_ok());
    }

    #[test]
    fn submittable_flips_with_any_single_invalid_field() {
        let mut msg = valid_message();
        assert!(is_submittable(&msg));
        msg.set(Field::Subject, "ab".to_string());
        assert!(!is_submittable(&msg));
        msg.set(Field::Subject, "Project inquiry".to_string());
        assert!(is_submittable(&msg));
    }

    #[test]
    fn validate_message_collects_every_failing_field() {
        let msg = ContactMessage {
            name: "J".to_string(),
            email: "bad".to_string(),
            subject: "ok subject".to_string(),
            message: "short".to_string(),
        };
        let errors = validate_message(&msg).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains_key(&Field::Name));
        assert!(errors.contains_key(&Field::Email));
        assert!(errors.contains_key(&Field::Message));
    }

    #[test]
    fn errors_stay_hidden_until_touched() {
        let mut state = ValidationState::default();
        assert_eq!(state.visible_error(Field::Name), None);
        state.record(Field::Name, validate_field(Field::Name, "J"));
        assert_eq!(state.visible_error(Field::Name), Some("Name must be at least 2 characters"));
        state.record(Field::Name, validate_field(Field::Name, "John"));
        assert_eq!(state.visible_error(Field::Name), None);
    }

    #[test]
    fn recording_one_field_leaves_other_errors_alone() {
        let mut state = ValidationState::default();
        state.record(Field::Email, Err("Invalid email".to_string()));
        state.record(Field::Name, Ok(()));
        assert_eq!(state.visible_error(Field::Email), Some("Invalid email"));
    }

    #[test]
    fn success_response_maps_to_ok() {
        assert!(interpret_submit_response(200, r#"{"success":true}"#).is_ok());
    }

    #[test]
    fn server_error_text_is_surfaced_verbatim() {
        let err = interpret_submit_response(500, r#"{"error":"boom"}"#).unwrap_err();
        assert_eq!(err, "boom");
    }

    #[test]
    fn unparseable_error_body_falls_back_to_generic_message() {
        let err = interpret_submit_response(500, "<html>bad gateway</html>").unwrap_err();
        assert!(err.contains("try again"));
    }
}
