// Design Patterns Catalog
// Runnable examples of classic object-oriented patterns, written the Rust way.

//! # Design Patterns Quick Reference
//!
//! ## Creational Patterns
//! - Builder Pattern (director + staged builder)
//! - Factory Method Pattern (trait objects)
//! - Singleton Pattern (OnceLock)
//!
//! ## Structural Patterns
//! - Facade Pattern
//! - Proxy Pattern (access check + logging)
//!
//! ## Behavioral Patterns
//! - Command Pattern (named registry with dispatch by name)
//! - Strategy Pattern (swappable trait objects)
//!
//! Run the drivers with:
//! ```bash
//! cargo run --bin p1_creational
//! cargo run --bin p2_structural
//! cargo run --bin p3_behavioral -- patterns.toml
//! ```

pub mod builder;
pub mod command;
pub mod config;
pub mod console;
pub mod error;
pub mod facade;
pub mod factory;
pub mod proxy;
pub mod singleton;
pub mod strategy;
pub mod telemetry;

pub use command::{
    Command, Dispatch, FnCommand, Light, LightOffCommand, LightOnCommand, RemoteControl,
};
pub use config::{Binding, LightAction, Settings};
pub use console::Console;
pub use error::{PatternError, Result};
