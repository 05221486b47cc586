pub mod catalog;
pub mod language_model;
