// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod reachability;
pub mod remote;
pub mod time;

pub use reachability::CountingProbe;
pub use remote::CountingRemote;
pub use time::{FixedClock, fixed_now, fixed_today};
