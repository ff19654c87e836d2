//! Outbound service clients.

pub mod upstream;
