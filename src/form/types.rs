//! Form descriptor types

use crate::types::StringMap;
use chrono::NaiveDate;
use serde::Serialize;

/// Date format accepted by date fields
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Closed set of field kinds the renderer knows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Textarea,
    File,
    Number,
    Date,
}

/// One field of a form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
    /// Upper bound on text length
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    /// Inclusive numeric bounds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Allowed file extensions, lowercase, without the dot
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    pub accept: &'static [&'static str],
}

impl FieldDescriptor {
    /// A field of the given kind with no constraints
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
            placeholder: None,
            max_length: None,
            min: None,
            max: None,
            accept: &[],
        }
    }

    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub const fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    #[must_use]
    pub const fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    #[must_use]
    pub const fn range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    #[must_use]
    pub const fn accept(mut self, extensions: &'static [&'static str]) -> Self {
        self.accept = extensions;
        self
    }

    /// Check one submitted value against this descriptor
    pub fn check(&self, value: Option<&str>) -> Option<String> {
        let value = value.map(str::trim).unwrap_or_default();
        if value.is_empty() {
            return self.required.then(|| format!("{} is required", self.label));
        }

        match self.kind {
            FieldKind::Text | FieldKind::Textarea => {
                let limit = self.max_length?;
                (value.chars().count() > limit)
                    .then(|| format!("{} must be at most {limit} characters", self.label))
            }
            FieldKind::Number => {
                let Ok(number) = value.parse::<f64>() else {
                    return Some(format!("{} must be a number", self.label));
                };
                if let Some(min) = self.min {
                    if number < min {
                        return Some(format!("{} must be at least {min}", self.label));
                    }
                }
                if let Some(max) = self.max {
                    if number > max {
                        return Some(format!("{} must be at most {max}", self.label));
                    }
                }
                None
            }
            FieldKind::Date => NaiveDate::parse_from_str(value, DATE_FORMAT)
                .is_err()
                .then(|| format!("{} must be a date (YYYY-MM-DD)", self.label)),
            FieldKind::File => {
                if self.accept.is_empty() {
                    return None;
                }
                let extension = value
                    .rsplit_once('.')
                    .map(|(_, ext)| ext.to_ascii_lowercase())
                    .unwrap_or_default();
                (!self.accept.contains(&extension.as_str())).then(|| {
                    format!("{} must be one of: {}", self.label, self.accept.join(", "))
                })
            }
        }
    }
}

/// A validation problem with one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// An ordered table of field descriptors
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormSchema {
    pub id: &'static str,
    pub title: &'static str,
    pub fields: Vec<FieldDescriptor>,
}

impl FormSchema {
    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Validate submitted values; empty when everything passes
    pub fn validate(&self, values: &StringMap) -> Vec<FieldError> {
        self.fields
            .iter()
            .filter_map(|field| {
                field
                    .check(values.get(field.name).map(String::as_str))
                    .map(|message| FieldError {
                        field: field.name.to_string(),
                        message,
                    })
            })
            .collect()
    }
}
