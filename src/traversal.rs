//! Traversal orders and the signal a visiting callback returns.
//!
//! The module is home to the following items:
//! - [`Order`]: the four ways of walking a binary tree
//! - [`Visit`]: what a callback wants to happen after visiting a node
//!
//! [`Order`]: enum.Order.html " "
//! [`Visit`]: enum.Visit.html " "

use core::{
    fmt::{self, Formatter, Display},
    str::FromStr,
};
use alloc::borrow::Cow;
use crate::Error;

/// The order in which a traversal visits the nodes of a binary tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Node, then left subtree, then right subtree. Stopping at a node skips both of its subtrees, but its siblings are still visited.
    PreOrder,
    /// Left subtree, then node, then right subtree. Stopping at a node skips its right subtree only.
    InOrder,
    /// Left subtree, then right subtree, then node. The callback cannot stop this traversal.
    PostOrder,
    /// Breadth-first, level by level, left to right. Stopping ends the traversal.
    LevelOrder,
}
impl Order {
    /// Every order, in declaration order.
    pub const ALL: [Self; 4] = [Self::PreOrder, Self::InOrder, Self::PostOrder, Self::LevelOrder];

    /// Returns the token which `from_str` accepts for this order.
    #[inline]
    pub const fn token(self) -> &'static str {
        match self {
            Self::PreOrder => "PRE_ORDER",
            Self::InOrder => "IN_ORDER",
            Self::PostOrder => "POST_ORDER",
            Self::LevelOrder => "LEVEL_ORDER",
        }
    }
}
impl Default for Order {
    #[inline(always)]
    fn default() -> Self {
        Self::LevelOrder
    }
}
impl Display for Order {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(self.token())
    }
}
impl FromStr for Order {
    type Err = Error;

    /// Parses one of `PRE_ORDER`, `IN_ORDER`, `POST_ORDER` or `LEVEL_ORDER`.
    fn from_str(s: &str) -> Result<Self, Error> {
        Self::ALL
            .iter()
            .copied()
            .find(|order| order.token() == s)
            .ok_or_else(|| Error::InvalidArgument {
                reason: Cow::Owned(alloc::format!("unknown traversal order `{}`", s)),
            })
    }
}

/// What a traversal callback wants to happen next.
///
/// Callbacks may return `Visit` directly, a `bool` (`true` stops, mirroring a "found it" predicate), or `()` to always continue.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Visit {
    /// Keep going.
    Continue,
    /// Stop, with the meaning depending on the [`Order`].
    ///
    /// [`Order`]: enum.Order.html " "
    Stop,
}
impl Visit {
    /// Returns `true` for `Visit::Stop`.
    #[inline(always)]
    pub const fn is_stop(self) -> bool {
        matches!(self, Self::Stop)
    }
}
impl Default for Visit {
    #[inline(always)]
    fn default() -> Self {
        Self::Continue
    }
}
impl From<bool> for Visit {
    #[inline(always)]
    fn from(stop: bool) -> Self {
        if stop { Self::Stop } else { Self::Continue }
    }
}
impl From<()> for Visit {
    #[inline(always)]
    fn from(_: ()) -> Self {
        Self::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_round_trip() {
        for order in Order::ALL.iter().copied() {
            assert_eq!(order.token().parse::<Order>().unwrap(), order);
        }
        assert_eq!(Order::default(), Order::LevelOrder);
    }

    #[test]
    fn unknown_token_is_invalid_argument() {
        assert!(matches!(
            "ZIGZAG".parse::<Order>(),
            Err(Error::InvalidArgument { .. }),
        ));
        assert!("pre_order".parse::<Order>().is_err());
    }

    #[test]
    fn callback_returns_convert() {
        assert_eq!(Visit::from(true), Visit::Stop);
        assert_eq!(Visit::from(false), Visit::Continue);
        assert_eq!(Visit::from(()), Visit::Continue);
    }
}
