//! Shared fetch / filter / modal-edit machinery for the record pages.
//!
//! A page supplies an [`EditableResource`] impl (form shape, columns, copy)
//! and its own form fields; listing, searching, the edit modal and the
//! delete confirmation come from here.

pub mod components;
pub mod directory;
pub mod utils;
pub mod view_model;

use crate::api::{ApiError, ResourceKind};

/// User-facing copy for one record page.
pub struct ResourceText {
    pub form_title: &'static str,
    pub submit_label: &'static str,
    pub search_title: &'static str,
    pub list_title: &'static str,
    pub modal_title: &'static str,
    pub loading: &'static str,
    pub empty: &'static str,
    pub load_failed: &'static str,
    pub created: &'static str,
    pub create_failed: &'static str,
    pub updated: &'static str,
    pub update_failed: &'static str,
    pub deleted: &'static str,
    pub delete_failed: &'static str,
    pub confirm_delete: &'static str,
}

pub trait EditableResource: ResourceKind {
    /// Raw input state; every field is edited as text.
    type Form: Clone + Default + PartialEq + 'static;

    const TEXT: ResourceText;
    const COLUMNS: &'static [&'static str];

    /// Text the search box matches against.
    fn search_key(record: &Self::Record) -> Option<&str>;
    fn cells(record: &Self::Record) -> Vec<String>;
    fn form_from_record(record: &Self::Record) -> Self::Form;
    fn draft_from_form(form: &Self::Form) -> Result<Self::Draft, ApiError>;
}
