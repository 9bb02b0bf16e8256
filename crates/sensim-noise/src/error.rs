use thiserror::Error;

use crate::model::NoiseType;

/// Errors surfaced by the strict (`try_*`, `validate`, descriptor loading)
/// entry points.  The permissive paths never return these.
#[derive(Debug, Error)]
pub enum NoiseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{field} must be finite and >= 0, got {value}")]
    InvalidParameter { field: &'static str, value: f64 },

    #[error("custom noise callback requires a custom model, got type[{}]", .found.tag())]
    NotCustom { found: NoiseType },

    #[error("custom noise model has no callback attached")]
    MissingCallback,
}
