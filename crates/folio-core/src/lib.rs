//! # Folio Core
//!
//! Shared logic for Folio: portfolio content models, the keyword index,
//! term-overlap scoring, answer templates, and the local assistant.
//!
//! This crate contains no tokio, filesystem I/O, or CLI dependencies.
//! Content arrives already parsed; the application crate handles loading.
//!
//! ```rust
//! use folio_core::assistant::{Assistant, AssistantContext};
//! use folio_core::models::{Profile, Project};
//!
//! let project = Project {
//!     title: "Mesquite MoCap".into(),
//!     category: "Research".into(),
//!     summary: "Motion capture from wireless IMU nodes.".into(),
//!     ..Default::default()
//! };
//! let assistant = Assistant::new(AssistantContext::new(
//!     Profile::default(),
//!     vec![project],
//!     Vec::new(),
//! ));
//! assert!(assistant.answer("what is mesquite mocap").contains("wireless IMU nodes"));
//! ```

pub mod assistant;
pub mod catalog;
pub mod client;
pub mod error;
pub mod format;
pub mod index;
pub mod models;
pub mod search;
pub mod timeline;

pub use assistant::{Assistant, AssistantContext};
pub use client::{AssistantClient, LocalAssistantClient};
pub use error::ContextError;
