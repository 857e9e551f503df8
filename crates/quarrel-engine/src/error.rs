//! Error types for the resolution engine.

use quarrel_core::EntityId;

/// Convenience result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while resolving a check, attack, or damage roll.
///
/// Errors surface immediately to the caller; the engine never retries and
/// never synthesizes attribute, skill, or feat values when a provider
/// fails. A failed operation must be re-invoked whole, re-drawing its
/// randomness.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A provider could not resolve the supplied entity identifier.
    #[error("unknown entity: {0}")]
    UnknownEntity(EntityId),

    /// An operation parameter is outside its documented domain. Raised
    /// before any random draw is consumed.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// An intermediate value left the representable integer range.
    #[error("arithmetic overflow while computing {0}")]
    ArithmeticOverflow(&'static str),

    /// A scripted random source ran out of recorded draws.
    #[error("random source exhausted: no draw left for {0}")]
    RandomExhausted(EntityId),
}
