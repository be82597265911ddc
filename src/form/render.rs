//! Generic form renderer
//!
//! Every field kind maps to exactly one widget. The mapping is the only place
//! that knows about kinds; schemas only list descriptors.

use super::types::{FieldDescriptor, FieldKind, FormSchema};
use crate::types::StringMap;
use serde::Serialize;

/// Rows shown for textarea widgets
const TEXTAREA_ROWS: u32 = 5;

/// Input widget for one field
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "widget", rename_all = "snake_case")]
pub enum Widget {
    TextInput {
        value: String,
        placeholder: Option<String>,
        max_length: Option<usize>,
    },
    TextArea {
        value: String,
        rows: u32,
    },
    FileInput {
        accept: Vec<String>,
    },
    NumberInput {
        value: String,
        min: Option<f64>,
        max: Option<f64>,
    },
    DateInput {
        value: String,
    },
}

/// A field ready to display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedField {
    pub name: String,
    pub label: String,
    pub required: bool,
    #[serde(flatten)]
    pub widget: Widget,
}

impl RenderedField {
    /// Render as an HTML fragment
    pub fn to_html(&self) -> String {
        let name = escape(&self.name);
        let required = if self.required { " required" } else { "" };
        let input = match &self.widget {
            Widget::TextInput {
                value,
                placeholder,
                max_length,
            } => {
                let mut attrs = String::new();
                if let Some(p) = placeholder {
                    attrs.push_str(&format!(" placeholder=\"{}\"", escape(p)));
                }
                if let Some(n) = max_length {
                    attrs.push_str(&format!(" maxlength=\"{n}\""));
                }
                format!(
                    "<input type=\"text\" name=\"{name}\" value=\"{}\"{attrs}{required}>",
                    escape(value)
                )
            }
            Widget::TextArea { value, rows } => format!(
                "<textarea name=\"{name}\" rows=\"{rows}\"{required}>{}</textarea>",
                escape(value)
            ),
            Widget::FileInput { accept } => {
                let accept = accept
                    .iter()
                    .map(|ext| format!(".{ext}"))
                    .collect::<Vec<_>>()
                    .join(",");
                format!("<input type=\"file\" name=\"{name}\" accept=\"{accept}\"{required}>")
            }
            Widget::NumberInput { value, min, max } => {
                let mut attrs = String::new();
                if let Some(min) = min {
                    attrs.push_str(&format!(" min=\"{min}\""));
                }
                if let Some(max) = max {
                    attrs.push_str(&format!(" max=\"{max}\""));
                }
                format!(
                    "<input type=\"number\" name=\"{name}\" value=\"{}\"{attrs}{required}>",
                    escape(value)
                )
            }
            Widget::DateInput { value } => format!(
                "<input type=\"date\" name=\"{name}\" value=\"{}\"{required}>",
                escape(value)
            ),
        };
        format!(
            "<label for=\"{name}\">{}</label>{input}",
            escape(&self.label)
        )
    }
}

/// Render every field of a schema, pre-filled from `values`
pub fn render(schema: &FormSchema, values: &StringMap) -> Vec<RenderedField> {
    schema
        .fields
        .iter()
        .map(|field| render_field(field, values.get(field.name).cloned().unwrap_or_default()))
        .collect()
}

fn render_field(field: &FieldDescriptor, value: String) -> RenderedField {
    let widget = match field.kind {
        FieldKind::Text => Widget::TextInput {
            value,
            placeholder: field.placeholder.map(str::to_string),
            max_length: field.max_length,
        },
        FieldKind::Textarea => Widget::TextArea {
            value,
            rows: TEXTAREA_ROWS,
        },
        FieldKind::File => Widget::FileInput {
            accept: field.accept.iter().map(|s| (*s).to_string()).collect(),
        },
        FieldKind::Number => Widget::NumberInput {
            value,
            min: field.min,
            max: field.max,
        },
        FieldKind::Date => Widget::DateInput { value },
    };

    RenderedField {
        name: field.name.to_string(),
        label: field.label.to_string(),
        required: field.required,
        widget,
    }
}

fn escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
