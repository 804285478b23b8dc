/// Handles argument parsing and the interactive run loop.
pub mod cli;

/// Shared constants.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Typed project configuration and the interactive configuration builder.
pub mod config;

/// User input and interaction handling.
pub mod prompt;

/// Template parsing and rendering functionality.
pub mod renderer;

/// Compile-time embedded starter templates.
pub mod template;

/// Checked invocation of external tools (git, virtualenv, pip).
pub mod exec;

/// Turns a configuration into filesystem side effects.
pub mod generator;

/// A set of helpers for working with the file system.
pub mod ioutils;
