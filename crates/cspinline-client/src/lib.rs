//! Client detection: build a `ClientContext` from raw request data.
//!
//! This crate is the only place user-agent strings are interpreted; the
//! domain crate consumes the resulting typed descriptors and never sniffs.

#![forbid(unsafe_code)]

mod parse;

pub use parse::{client_context_from_user_agent, parse_user_agent};
