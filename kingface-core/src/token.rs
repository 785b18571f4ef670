//! KFTL token economics
//!
//! A like is a fixed-price token transfer: the actor pays the like cost
//! and the post author receives their share. The remainder of the split
//! is not credited to any account.

/// KFTL spent by the actor on each like
pub const LIKE_COST_KFTL: f64 = 1.0;

/// Fraction of the like cost credited to the post author
pub const AUTHOR_SHARE: f64 = 0.9;

/// Spendable balance granted to a freshly provisioned account
pub const STARTING_KFTL_BALANCE: f64 = 10.0;

/// Bonus balance granted to a freshly provisioned account
pub const STARTING_KFT_BALANCE: f64 = 0.0;

/// KFTL credited to the author for one like.
pub fn author_reward() -> f64 {
    LIKE_COST_KFTL * AUTHOR_SHARE
}
