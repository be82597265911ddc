//! Built-in form tables

use super::types::{FieldDescriptor, FieldKind, FormSchema};
use once_cell::sync::Lazy;
use std::str::FromStr;

const IMAGE_TYPES: &[&str] = &["jpg", "jpeg", "png", "webp"];

static VEHICLE_FORM: Lazy<FormSchema> = Lazy::new(|| FormSchema {
    id: "add_vehicle",
    title: "Add vehicle",
    fields: vec![
        FieldDescriptor::new("title", "Title", FieldKind::Text)
            .required()
            .max_length(120),
        FieldDescriptor::new("brand", "Brand", FieldKind::Text).required(),
        FieldDescriptor::new("model", "Model", FieldKind::Text),
        FieldDescriptor::new("year", "Registration year", FieldKind::Number)
            .required()
            .range(Some(1900.0), Some(2100.0)),
        FieldDescriptor::new("price", "Price", FieldKind::Number).range(Some(0.0), None),
        FieldDescriptor::new("mileage", "Mileage (km)", FieldKind::Number).range(Some(0.0), None),
        FieldDescriptor::new("tuningStage", "Tuning stage", FieldKind::Text)
            .placeholder("e.g. Stage 2"),
        FieldDescriptor::new("description", "Description", FieldKind::Textarea)
            .max_length(2000),
        FieldDescriptor::new("image", "Main image", FieldKind::File)
            .required()
            .accept(IMAGE_TYPES),
    ],
});

static EVENT_FORM: Lazy<FormSchema> = Lazy::new(|| FormSchema {
    id: "add_event",
    title: "Add event",
    fields: vec![
        FieldDescriptor::new("name", "Event name", FieldKind::Text)
            .required()
            .max_length(120),
        FieldDescriptor::new("location", "Location", FieldKind::Text).required(),
        FieldDescriptor::new("date", "Start date", FieldKind::Date).required(),
        FieldDescriptor::new("endDate", "End date", FieldKind::Date),
        FieldDescriptor::new("capacity", "Capacity", FieldKind::Number).range(Some(1.0), None),
        FieldDescriptor::new("description", "Description", FieldKind::Textarea).required(),
        FieldDescriptor::new("banner", "Banner image", FieldKind::File).accept(IMAGE_TYPES),
    ],
});

/// Schema for adding a vehicle to the catalog
pub fn vehicle_form() -> &'static FormSchema {
    &VEHICLE_FORM
}

/// Schema for adding an event
pub fn event_form() -> &'static FormSchema {
    &EVENT_FORM
}

/// Built-in forms by name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Vehicle,
    Event,
}

impl FormKind {
    /// Schema for this form
    pub fn schema(&self) -> &'static FormSchema {
        match self {
            Self::Vehicle => vehicle_form(),
            Self::Event => event_form(),
        }
    }
}

impl FromStr for FormKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "vehicle" | "bike" => Ok(Self::Vehicle),
            "event" => Ok(Self::Event),
            other => Err(crate::Error::config(format!("Unknown form: {other}"))),
        }
    }
}
