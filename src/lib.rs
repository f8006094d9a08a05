//! # Folio
//!
//! **The content core of a personal portfolio site, with a local
//! keyword-matching assistant.**
//!
//! Folio loads a profile, a project list and a timeline from the JSON files
//! bundled with the site and answers free-text questions about them without
//! any network calls or models. The matching, scoring and answer templates
//! live in [`folio_core`]; this crate adds configuration, content loading,
//! and the `folio` command-line front end.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │ content/*.json│──▶│  Assistant   │──▶│  CLI (folio) │
//! │ profile/proj/ │   │ index+score  │   │  ask / chat  │
//! │ timeline      │   │ intent rules │   │  listings    │
//! └──────────────┘   └──────────────┘   └──────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! folio ask "What is Mesquite MoCap?"
//! folio ask "publications?" --explain
//! folio chat
//! folio projects --category research
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing and validation |
//! | [`content`] | JSON content loading into an `AssistantContext` |
//! | [`logging`] | `tracing-subscriber` setup |
//! | [`ask`] | One-shot question answering |
//! | [`chat`] | Line-oriented chat loop |
//! | [`listing`] | Project, timeline, publication and profile views |

pub mod ask;
pub mod chat;
pub mod config;
pub mod content;
pub mod listing;
pub mod logging;

pub use folio_core::{Assistant, AssistantClient, AssistantContext, LocalAssistantClient};
