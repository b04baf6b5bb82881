//! Apex NS Infrastructure Layer
pub mod dns;
