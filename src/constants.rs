//! Constants used throughout the makeproj application

/// The only git host accepted for remote libft repositories.
pub const ALLOWED_GIT_HOST: &str = "github.com";

/// Directory name a vendored or submoduled libft lands in.
pub const LIBFT_DIR: &str = "libft";

/// Default suggestion for the local libft path prompt.
pub const DEFAULT_LIBFT_PATH: &str = "~/Documents/libft/";

/// How many times a path prompt is re-asked before giving up.
pub const MAX_PATH_ATTEMPTS: u32 = 3;

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
