//! Error type shared by the editor engine.

/// Errors surfaced to the host UI.
///
/// None of these are fatal: every operation that returns one leaves the
/// engine state exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditorError {
    /// A polygon was finalized with too few vertices.
    #[error("Need at least {need} points")]
    TooFewPoints { have: usize, need: usize },
    /// The color input produced something that is not `#rgb` or `#rrggbb`.
    #[error("invalid color: {0}")]
    InvalidColor(String),
    /// The host supplied an editor configuration that could not be parsed.
    #[error("invalid editor config: {0}")]
    Config(String),
}
