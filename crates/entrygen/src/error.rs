//! User-facing error types
//!
//! Configuration/usage errors are typed and recoverable: the generators
//! never terminate the process themselves. The top-level driver maps an
//! error onto an exit code via [`UsageError::exit_code`].

use thiserror::Error;

/// A configuration mistake the user has to fix before generation can
/// proceed. No partial fragment is produced alongside one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    /// A requested plugin name did not resolve against the discovered
    /// plugin catalog.
    #[error("Can not find the plugin named by {name}. Available plugins: {}", .available.join(", "))]
    UnknownPlugin {
        /// The name that failed to resolve.
        name: String,
        /// Every plugin name the catalog knows about.
        available: Vec<String>,
    },
}

impl UsageError {
    /// Process exit code the driver should use for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::UnknownPlugin { .. } => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_plugin_message_lists_available_names() {
        let err = UsageError::UnknownPlugin {
            name: "bogus".to_owned(),
            available: vec!["http".to_owned(), "mock".to_owned()],
        };
        let message = err.to_string();
        assert!(message.contains("bogus"));
        assert!(message.contains("http, mock"));
        assert_eq!(err.exit_code(), 2);
    }
}
