pub mod client;
pub mod dedup;
pub mod poller;
