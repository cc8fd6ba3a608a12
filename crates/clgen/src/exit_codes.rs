//! Exit codes for the CLI

use clgen_core::error::{ClgenError, ConfigError, GitError};

/// Success
pub const SUCCESS: u8 = 0;

/// General error
pub const ERROR: u8 = 1;

/// Configuration error
pub const CONFIG_ERROR: u8 = 2;

/// Git error
pub const GIT_ERROR: u8 = 3;

/// Map a failure to its exit code
pub fn for_error(err: &anyhow::Error) -> u8 {
    if let Some(err) = err.downcast_ref::<ClgenError>() {
        return match err {
            ClgenError::Config(_) => CONFIG_ERROR,
            ClgenError::Git(_) => GIT_ERROR,
            _ => ERROR,
        };
    }

    if err.downcast_ref::<ConfigError>().is_some() {
        CONFIG_ERROR
    } else if err.downcast_ref::<GitError>().is_some() {
        GIT_ERROR
    } else {
        ERROR
    }
}
