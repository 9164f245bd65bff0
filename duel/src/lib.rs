extern crate alloc;

pub mod analysis;
pub mod battle;
pub mod error;
pub mod log;

#[cfg(test)]
mod test_util;

/// Random number generation used by battles.
pub mod rng {
    pub use duel_prng::*;
}

pub use analysis::*;
pub use battle::*;
pub use duel_data::*;
pub use error::*;
pub use self::log::*;
