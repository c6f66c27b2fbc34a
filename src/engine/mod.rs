//! Adversarial narrowing engine
//!
//! Pure, stateless building blocks: group a candidate pool by feedback code,
//! pick the group the adversary commits to, and search for the guess that
//! leaves the adversary the least room.

pub mod hint;
mod partition;
mod selector;

pub use hint::{adversary_survivors, best_guess};
pub use partition::{Partition, group_sizes, partition};
pub use selector::{choose, select};
