use std::sync::Arc;

use super::Codec;
use crate::handler::{LoggingExceptionHandler, ParseExceptionHandler};
use crate::naming::{FieldNamingStrategy, NamingPolicy};

/// Configuration for a [`Codec`]
///
/// Defaults: [`NamingPolicy::Identity`], [`LoggingExceptionHandler`], `null`
/// values omitted, compact output.
#[derive(Clone)]
pub struct CodecBuilder {
    naming:          Arc<dyn FieldNamingStrategy>,
    handler:         Arc<dyn ParseExceptionHandler>,
    serialize_nulls: bool,
    pretty:          bool,
}

impl Default for CodecBuilder {
    fn default() -> Self { Self::new() }
}

impl CodecBuilder {
    /// Builder holding the defaults
    #[must_use]
    pub fn new() -> Self {
        Self {
            naming:          Arc::new(NamingPolicy::Identity),
            handler:         Arc::new(LoggingExceptionHandler),
            serialize_nulls: false,
            pretty:          false,
        }
    }

    /// Strategy that turns declared field names into wire names
    #[must_use]
    pub fn field_naming_strategy(mut self, strategy: impl FieldNamingStrategy + 'static) -> Self {
        self.naming = Arc::new(strategy);
        self
    }

    /// Handler told about every value the decoder drops
    #[must_use]
    pub fn parse_exception_handler(mut self, handler: impl ParseExceptionHandler + 'static) -> Self {
        self.handler = Arc::new(handler);
        self
    }

    /// Write `null` field values instead of leaving the key out
    #[must_use]
    pub const fn serialize_nulls(mut self, serialize_nulls: bool) -> Self {
        self.serialize_nulls = serialize_nulls;
        self
    }

    /// Indent text produced by [`Codec::to_string`]
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Finish configuration
    #[must_use]
    pub fn build(self) -> Codec {
        tracing::debug!(
            "Building codec (serialize_nulls: {}, pretty: {})",
            self.serialize_nulls,
            self.pretty
        );
        Codec {
            naming:          self.naming,
            handler:         self.handler,
            serialize_nulls: self.serialize_nulls,
            pretty:          self.pretty,
        }
    }
}

impl std::fmt::Debug for CodecBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodecBuilder")
            .field("serialize_nulls", &self.serialize_nulls)
            .field("pretty", &self.pretty)
            .finish_non_exhaustive()
    }
}
