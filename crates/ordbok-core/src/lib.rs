//! Ordbok Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Ordbok validator
//! and renderer. It includes:
//!
//! - **Article**: The recursive document model of a dictionary article
//!   ([`article`] module)
//! - **Concepts**: The read-only id → expansion table used to expand concept
//!   references inside text ([`concept::ConceptTable`])
//! - **Non-empty sequences**: A vector wrapper that can never be empty
//!   ([`non_empty::NonEmpty`])

pub mod article;
pub mod concept;
pub mod non_empty;
