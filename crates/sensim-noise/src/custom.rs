//! Noise fully delegated to a user callback.

use std::fmt;
use std::sync::Arc;

/// Callback signature: `(sample, dt) -> noisy sample`.
pub type CustomNoiseFn = dyn Fn(f64, f64) -> f64 + Send + Sync;

/// Holds the optional user callback of a custom noise source.
///
/// The callback is shared behind an [`Arc`] so that models can be cloned
/// across the axes of a vector sensor.
#[derive(Clone, Default)]
pub struct CustomNoise {
    callback: Option<Arc<CustomNoiseFn>>,
}

impl CustomNoise {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `callback`, replacing any previous one.
    pub fn set_callback<F>(&mut self, callback: F)
    where
        F: Fn(f64, f64) -> f64 + Send + Sync + 'static,
    {
        self.callback = Some(Arc::new(callback));
    }

    pub fn has_callback(&self) -> bool {
        self.callback.is_some()
    }

    /// Run the callback, or return `value` unchanged when none is attached.
    pub fn apply(&self, value: f64, dt: f64) -> f64 {
        match &self.callback {
            Some(callback) => callback(value, dt),
            None => value,
        }
    }
}

impl fmt::Debug for CustomNoise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomNoise")
            .field("has_callback", &self.has_callback())
            .finish()
    }
}
