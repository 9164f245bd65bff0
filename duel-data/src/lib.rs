extern crate alloc;

mod common;
mod datastore;
mod mons;
mod moves;


pub use common::*;
pub use datastore::*;
pub use mons::*;
pub use moves::*;
