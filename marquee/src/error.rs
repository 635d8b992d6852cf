use core::fmt;

use crate::ItemKind;

/// Errors reported by the non-panicking controller entry points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MarqueeError {
    /// No factory is registered for the kind and its reuse pool is empty.
    UnregisteredKind(ItemKind),
}

impl fmt::Display for MarqueeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnregisteredKind(kind) => {
                write!(f, "no item factory registered for kind `{kind}`")
            }
        }
    }
}

impl core::error::Error for MarqueeError {}
