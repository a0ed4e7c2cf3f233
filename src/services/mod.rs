//! Service layer: object-store adapter and in-memory document registry.

pub mod document_registry;
pub mod storage_service;
