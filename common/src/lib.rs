#[cfg(feature = "env")]
pub mod env;

#[cfg(feature = "ip")]
pub mod ip;

#[cfg(feature = "logger")]
pub mod logger;
