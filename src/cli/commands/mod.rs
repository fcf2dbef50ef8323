//! Command implementations.

/// Configuration show/set handlers.
pub mod configure;

/// Translation command handler.
pub mod translate;
