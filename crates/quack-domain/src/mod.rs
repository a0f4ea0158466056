//! # Domain Layer
//!
//! Core types for Quack Integrations. Every other crate in the workspace
//! depends on these definitions; this crate depends on none of them.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`ports`] | The `Integration` capability contract and the `LlmClient` port |
//! | [`value_objects`] | Loaded objects, entry points and chat types |
//! | [`error`] | Domain error enum and `Result` alias |
//! | [`constants`] | Group names, reserved provider names, defaults |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{Integration, LlmClient};
pub use value_objects::{ChatMessage, ChatResponse, EntryPoint, LlmOptions, LoadedObject, Role};
