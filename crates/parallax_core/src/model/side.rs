//! Two-sided (left/right) selection index.
//!
//! # Responsibility
//! - Index hand/controller state that exists once per body side.
//! - Keep the display-name and interaction-path tables in lock-step with
//!   the selector enum.
//!
//! # Invariants
//! - Exactly two valid selectors; `SIDE_COUNT` only sizes tables and is
//!   never itself a selector.
//! - `SIDE_NAMES` and `SIDE_USER_PATHS` have `SIDE_COUNT` entries in
//!   `Left`, `Right` order.

/// Number of body sides. Sizes parallel tables, never selects.
pub const SIDE_COUNT: usize = 2;

/// Display names indexed by [`Side::index`].
pub const SIDE_NAMES: [&str; SIDE_COUNT] = ["Left", "Right"];

/// Interaction user paths indexed by [`Side::index`].
pub const SIDE_USER_PATHS: [&str; SIDE_COUNT] = ["/user/hand/left", "/user/hand/right"];

/// Body side selector for hand/controller state.
///
/// `#[repr(i32)]` so the selector can be embedded in wire records. An
/// out-of-range selector is unrepresentable; the fallible conversions
/// return `None` instead of asserting.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left = 0,
    Right = 1,
}

impl Side {
    /// Both sides in table order.
    pub const BOTH: [Side; SIDE_COUNT] = [Side::Left, Side::Right];

    /// Returns the table index for this side.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the side for a table index, `None` when out of range.
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Left),
            1 => Some(Self::Right),
            _ => None,
        }
    }

    /// Returns the side for a raw wire value, `None` when out of range.
    pub const fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Self::Left),
            1 => Some(Self::Right),
            _ => None,
        }
    }

    /// Returns the raw wire value.
    pub const fn as_raw(self) -> i32 {
        self as i32
    }

    /// Selects between two values of one type by side.
    pub fn select<T>(self, left: T, right: T) -> T {
        match self {
            Self::Left => left,
            Self::Right => right,
        }
    }

    /// Returns the display name for this side.
    pub const fn name(self) -> &'static str {
        SIDE_NAMES[self.index()]
    }

    /// Returns the interaction user path for this side.
    pub const fn user_path(self) -> &'static str {
        SIDE_USER_PATHS[self.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::{Side, SIDE_COUNT, SIDE_NAMES, SIDE_USER_PATHS};

    #[test]
    fn select_returns_the_matching_value() {
        assert_eq!(Side::Left.select("L", "R"), "L");
        assert_eq!(Side::Right.select("L", "R"), "R");
    }

    #[test]
    fn tables_stay_in_lock_step() {
        assert_eq!(SIDE_NAMES.len(), SIDE_COUNT);
        assert_eq!(SIDE_USER_PATHS.len(), SIDE_COUNT);
        assert_eq!(SIDE_NAMES[Side::Left.index()], "Left");
        assert_eq!(SIDE_USER_PATHS[Side::Right.index()], "/user/hand/right");
        for side in Side::BOTH {
            assert_eq!(side.name(), SIDE_NAMES[side.index()]);
            assert_eq!(side.user_path(), SIDE_USER_PATHS[side.index()]);
        }
    }

    #[test]
    fn out_of_range_conversions_are_rejected() {
        assert_eq!(Side::from_index(SIDE_COUNT), None);
        assert_eq!(Side::from_raw(-1), None);
        assert_eq!(Side::from_raw(2), None);
    }

    #[test]
    fn raw_roundtrip_matches_declaration_order() {
        for side in Side::BOTH {
            assert_eq!(Side::from_raw(side.as_raw()), Some(side));
            assert_eq!(Side::from_index(side.index()), Some(side));
        }
    }
}
