//! Process-wide shared codec

use std::sync::{Arc, LazyLock, RwLock};

use error_stack::Report;

use super::Codec;
use crate::error::{Error, Result};

static SINGLETON: LazyLock<RwLock<Arc<Codec>>> =
    LazyLock::new(|| RwLock::new(Arc::new(Codec::default())));

/// The shared codec, built with defaults on first use
#[must_use]
pub fn singleton() -> Arc<Codec> {
    match SINGLETON.read() {
        Ok(guard) => Arc::clone(&guard),
        // A poisoned lock still holds a complete `Arc`
        Err(poisoned) => Arc::clone(&poisoned.into_inner()),
    }
}

/// Replace the shared codec
///
/// Callers holding the previous codec keep using it; later calls to
/// [`singleton`] see the new one.
///
/// # Errors
///
/// Returns [`Error::General`] when the lock guarding the shared codec is
/// poisoned.
pub fn set_singleton(codec: Codec) -> Result<()> {
    let codec = Arc::new(codec);
    *SINGLETON
        .write()
        .map_err(|e| Report::new(Error::failed_to("replace the shared codec", e)))? = codec;
    tracing::debug!("Replaced the shared codec");
    Ok(())
}
