use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::config::PHYSIO_AGE_THRESHOLD;

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    pub name: String,
    pub phone: String,
    pub age: String,
    pub city: String,
    pub company: String,
    pub complaints: String,
    pub physio_experience: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Phone,
    Age,
    City,
    Company,
    Complaints,
}

impl FormData {
    pub fn with_field(&self, field: FormField, value: String) -> Self {
        let mut next = self.clone();
        match field {
            FormField::Name => next.name = value,
            FormField::Phone => next.phone = value,
            FormField::Age => next.age = value,
            FormField::City => next.city = value,
            FormField::Company => next.company = value,
            FormField::Complaints => next.complaints = value,
        }
        next
    }

    pub fn parsed_age(&self) -> Option<i64> {
        parse_age(&self.age)
    }

    /// Whether the physiotherapy checkbox is offered at all.
    pub fn asks_physio_experience(&self) -> bool {
        matches!(self.parsed_age(), Some(age) if age >= PHYSIO_AGE_THRESHOLD)
    }

    /// The form as it stands after a submit: younger patients never keep the physio flag.
    pub fn submitted(&self) -> Self {
        let mut next = self.clone();
        if matches!(self.parsed_age(), Some(age) if age < PHYSIO_AGE_THRESHOLD) {
            next.physio_experience = false;
        }
        next
    }
}

/// Reads a base-10 integer prefix: leading whitespace and an optional sign are
/// skipped, trailing characters after the digits are ignored. `None` when no
/// digit follows.
pub fn parse_age(input: &str) -> Option<i64> {
    let rest = input.trim_start();
    let (negative, rest) = match rest.chars().next() {
        Some('-') => (true, &rest[1..]),
        Some('+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for digit in rest.chars().map_while(|c| c.to_digit(10)) {
        seen_digit = true;
        value = value.saturating_mul(10).saturating_add(i64::from(digit));
    }

    if !seen_digit {
        return None;
    }
    Some(if negative { -value } else { value })
}

/// Text field taken as the service sends it: `null` or a missing key reads as
/// empty, numbers and booleans keep their JSON spelling.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text,
        Some(other) => other.to_string(),
    })
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Doctor {
    #[serde(deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(deserialize_with = "lenient_text")]
    pub expertise: String,
    #[serde(deserialize_with = "lenient_text")]
    pub city: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Testimonial {
    pub id: Option<Value>,
    #[serde(deserialize_with = "lenient_text")]
    pub quote: String,
    #[serde(deserialize_with = "lenient_text")]
    pub author: String,
}

impl Testimonial {
    /// List key: the record id when it has one, otherwise its position.
    pub fn key(&self, index: usize) -> String {
        match &self.id {
            None | Some(Value::Null) => format!("#{}", index),
            Some(Value::String(id)) => id.clone(),
            Some(id) => id.to_string(),
        }
    }
}
