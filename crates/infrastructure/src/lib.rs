//! Gotify SRV Infrastructure Layer
pub mod dns;
pub mod logging;
pub mod random;
