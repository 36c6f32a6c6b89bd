//! Pure inline-script mode decision (no IO).
//!
//! Input: a client context constructed elsewhere.
//! Output: the final mode + a trace of applied downgrades.

#![forbid(unsafe_code)]

pub mod criteria;
pub mod error;
pub mod model;
pub mod policy;
pub mod report;

mod engine;
pub mod rules;

pub use engine::decide;

#[cfg(test)]
mod proptests;
#[cfg(test)]
pub(crate) mod test_support;
