//! Provider-specific implementations
//!
//! The gateway talks to a single provider (IONOS); the module
//! keeps the provider surface in one place anyway, so the
//! payload shapes and auth handling stay out of the handlers.

pub mod ionos;
