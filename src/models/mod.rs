//! Core data models for the document QA backend.
//!
//! These entities describe registered documents and their stored
//! counterparts in the object store. They serialize naturally as JSON
//! via `serde`, using the wire names the HTTP API exposes.

pub mod document;
pub mod stored_object;
