use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Prompt error: {0}.")]
    PromptError(#[from] dialoguer::Error),

    #[error("Failed to render. Original error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    #[error("Invalid URL: {0}.")]
    UrlParseError(#[from] url::ParseError),

    /// The remote libft URL points at a host we do not accept.
    #[error("Only github.com repositories are supported, got '{host}'.")]
    UnsupportedGitHost { host: String },

    /// Represents validation failures in user input.
    #[error("Validation error: {0}.")]
    ValidationError(String),

    #[error("Cannot proceed: output directory '{output_dir}' already exists.")]
    OutputDirectoryExistsError { output_dir: String },

    /// The external program could not be spawned at all.
    #[error("Failed to launch '{program}'. Original error: {source}")]
    CommandLaunchError { program: String, source: std::io::Error },

    /// The external program ran but finished with a non-zero status.
    #[error("Command '{program}' failed with status: {status}")]
    CommandFailedError { program: String, status: ExitStatus },

    /// The user declined the confirmation gate.
    #[error("Aborted.")]
    Aborted,
}

/// Convenience type alias for Results with makeproj's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", console::style(&err).red());
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
