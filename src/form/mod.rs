//! Form module
//!
//! Declarative field descriptor tables for the "add vehicle" and "add event"
//! forms, plus one generic renderer and validator keyed on a closed set of
//! field kinds.

mod render;
mod schemas;
mod types;

pub use render::{render, RenderedField, Widget};
pub use schemas::{event_form, vehicle_form, FormKind};
pub use types::{FieldDescriptor, FieldError, FieldKind, FormSchema};
