pub mod http;
pub mod memory;
pub mod reachability;
pub mod remote;
pub mod time;
