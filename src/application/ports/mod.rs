// src/application/ports/mod.rs
pub mod reachability;
pub mod remote;
pub mod time;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type ClockPort = dyn time::Clock;
pub type ReachabilityPort = dyn reachability::ReachabilityProbe;
pub type RemoteArticlesPort = dyn remote::RemoteArticleApi;
pub type RemoteCategoriesPort = dyn remote::RemoteCategoryApi;
