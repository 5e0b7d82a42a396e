//! Shared domain types: symptom taxonomy, templates, label index map, wire types.

mod builtin;
pub mod label_map;
pub mod schema;
pub mod taxonomy;
pub mod wire;

pub use label_map::{LabelIndexMap, LabelMapError, parse_index_key};
pub use schema::corpus;
pub use taxonomy::{
    NON_MEDICAL_LABEL, PHRASE_SLOT, SymptomClass, SymptomTaxonomy, TaxonomyError, TaxonomyFile,
    Template, TemplateSet,
};
pub use wire::{SymptomRequest, SymptomResponse};
