//! Metaprompt: build prompt templates through a four-step wizard and have a
//! model write their instructions.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod context;
pub mod errors;
pub mod export;
pub mod history;
pub mod log;
pub mod preview;
pub mod prompt;
pub mod provider;
pub mod repl;
pub mod settings;
pub mod store;
pub mod ux;
pub mod wire;
pub mod wizard;
