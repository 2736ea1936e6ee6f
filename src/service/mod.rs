//! Client for the remote research service
//!
//! The service fronts a multi-agent research workflow over HTTP. One
//! invocation means exactly one outbound request, awaited to completion or
//! deadline; retries are the caller's decision.

mod client;
mod types;

pub use client::ResearchClient;
pub use types::{HealthReport, Outcome, ResearchReport, ResearchRequest};
