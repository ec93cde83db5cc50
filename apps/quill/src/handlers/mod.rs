//! Command handlers shared by the one-shot subcommands and the shell.

pub mod auth;
pub mod editor;
pub mod posts;
