mod client;

pub use client::{DEFAULT_TIMEOUT, RawResponse, RequestOptions, TimeoutHttpClient};
