//! Compiled-in configuration for the chat widget frontend.
//!
//! The configuration is a single read-only value reachable through [`get`].
//! The [`render`] module turns it into the `config.js` artifact the browser
//! loads, either as a module export or as a global script.

pub mod config;
pub mod error;
pub mod render;

pub use config::{get, Config, Deployment, Endpoint, Endpoints};
pub use error::{ConfigError, Result};
pub use render::Target;
