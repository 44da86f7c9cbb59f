//! Runtime result code for extension entry points.

use std::fmt::{self, Display, Formatter};

/// Result code returned by runtime entry points.
///
/// The runtime specification grows new codes over time, so this is an
/// open enumeration: a newtype with associated constants instead of an
/// exhaustive Rust enum. Unknown codes stay representable.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RuntimeResult(pub i32);

impl RuntimeResult {
    /// Call completed successfully.
    pub const SUCCESS: Self = Self(0);
    /// Call completed before the requested deadline.
    pub const TIMEOUT_EXPIRED: Self = Self(1);
    /// The session is about to be lost.
    pub const SESSION_LOSS_PENDING: Self = Self(3);
    /// Unspecified failure inside the runtime.
    pub const ERROR_RUNTIME_FAILURE: Self = Self(-2);
    /// The entry point is not supported by this runtime.
    pub const ERROR_FUNCTION_UNSUPPORTED: Self = Self(-7);
    /// The owning extension was not enabled at instance creation.
    pub const ERROR_EXTENSION_NOT_PRESENT: Self = Self(-9);
    /// A handle argument was invalid or already destroyed.
    pub const ERROR_HANDLE_INVALID: Self = Self(-12);

    /// Returns whether the code reports success (zero or positive).
    pub const fn is_success(self) -> bool {
        self.0 >= 0
    }

    /// Returns whether the code reports an error (negative).
    pub const fn is_error(self) -> bool {
        self.0 < 0
    }

    /// Returns the specification name for codes this crate knows.
    pub const fn name(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("SUCCESS"),
            1 => Some("TIMEOUT_EXPIRED"),
            3 => Some("SESSION_LOSS_PENDING"),
            -2 => Some("ERROR_RUNTIME_FAILURE"),
            -7 => Some("ERROR_FUNCTION_UNSUPPORTED"),
            -9 => Some("ERROR_EXTENSION_NOT_PRESENT"),
            -12 => Some("ERROR_HANDLE_INVALID"),
            _ => None,
        }
    }
}

impl Display for RuntimeResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "code {}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RuntimeResult;

    #[test]
    fn success_and_error_split_on_sign() {
        assert!(RuntimeResult::SUCCESS.is_success());
        assert!(RuntimeResult::TIMEOUT_EXPIRED.is_success());
        assert!(RuntimeResult::ERROR_HANDLE_INVALID.is_error());
        assert!(!RuntimeResult::ERROR_HANDLE_INVALID.is_success());
    }

    #[test]
    fn display_prefers_specification_names() {
        assert_eq!(RuntimeResult::SUCCESS.to_string(), "SUCCESS");
        assert_eq!(RuntimeResult(-99).to_string(), "code -99");
    }
}
