//! crewctl - client library and CLI for a local multi-agent research service
//!
//! The service runs a research crew (multiple cooperating agents backed by a
//! local LLM) behind a small HTTP API. crewctl invokes it with a bounded
//! wait, classifies every outcome, and reports progress while a workflow is
//! in flight. The same capability is exposed as an embeddable [`tools::Tool`]
//! for agent hosts.

pub mod config;
pub mod error;
pub mod reporter;
pub mod service;
pub mod tools;

pub use error::{CrewError, Result};
