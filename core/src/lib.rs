//! Core components for shipping log entries to remote collectors.
//!
//! This crate provides the foundational types and traits for the logship ecosystem.
//!
//! ## Overview
//!
//! The crate is built around several key concepts:
//!
//! - **Entry**: A structured log entry with a level, a message and a set of fields
//! - **Hook**: An adapter that receives entries of chosen levels and delivers them somewhere
//! - **Context**: A container that holds implementations for HTTP sending and environment access
//! - **Dispatcher**: Fans an entry out to every hook registered for its level
//!
//! ## Example
//!
//! ```no_run
//! use logship_core::{Dispatcher, Entry, Hook, Level, Result};
//! use async_trait::async_trait;
//!
//! #[derive(Debug)]
//! struct StdoutHook;
//!
//! #[async_trait]
//! impl Hook for StdoutHook {
//!     fn levels(&self) -> &[Level] {
//!         &[Level::Error, Level::Fatal, Level::Panic]
//!     }
//!
//!     async fn fire(&self, entry: &Entry) -> Result<()> {
//!         println!("{}: {}", entry.level, entry.message);
//!         Ok(())
//!     }
//! }
//!
//! # async fn example() -> Result<()> {
//! let dispatcher = Dispatcher::new().with_hook(StdoutHook);
//!
//! let entry = Entry::new(Level::Error, "A walrus appears")
//!     .with_field("animal", "walrus")
//!     .with_field("number", 1);
//! dispatcher.fire(&entry).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Traits
//!
//! - [`Hook`]: For delivering entries
//! - [`HttpSend`]: For sending HTTP requests
//! - [`Env`]: For environment variable access
//!
//! ## Utilities
//!
//! - [`hash`]: Cryptographic hashing utilities
//! - [`time`]: Time manipulation utilities
//! - [`utils`]: General utilities including data redaction and JSON encoding

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::{Context, Env, HttpSend, NoopEnv, NoopHttpSend, OsEnv, StaticEnv};

mod error;
pub use error::{Error, ErrorKind, Result};

mod entry;
pub use entry::{merge_fields, Entry, Fields, Level};

mod api;
pub use api::Hook;
mod dispatcher;
pub use dispatcher::Dispatcher;
