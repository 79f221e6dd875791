//! joblens: scrape a job-posting page, turn a field selection (or a free-text
//! request) into a strict JSON schema, and ask an OpenAI-compatible model for
//! a structured summary — with a canned fallback when the call cannot
//! complete.
//!
//! Pipeline: `fetcher` downloads the page, `extractor` probes it for job
//! fields, `schema` builds the structured-output contract, `llm` performs the
//! model call, `fallback` stands in on failure, and `summary` wires it all
//! together behind the message contract the presentation surface speaks.

pub mod catalog;
pub mod config;
pub mod extractor;
pub mod fallback;
pub mod fetcher;
pub mod llm;
pub mod schema;
pub mod storage;
pub mod summary;
