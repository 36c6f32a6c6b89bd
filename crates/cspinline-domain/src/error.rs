use thiserror::Error;

/// Failures surfaced while evaluating the rule chain.
///
/// Silently picking an inline-script mode on malformed input would be a
/// security-relevant defect, so these propagate to the caller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecisionError {
    /// The request context carries no client descriptor.
    #[error("request context has no client information")]
    MissingClient,
}
