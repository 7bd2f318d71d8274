//! Feature-gated structured logging.
//!
//! With the `tracing` feature enabled these macros forward to the `tracing`
//! crate; without it they expand to nothing and their arguments are not
//! evaluated.

#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($($arg:tt)+) => { ::tracing::trace!($($arg)+) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($($arg:tt)+) => {};
}

#[cfg(feature = "tracing")]
macro_rules! debug_event {
    ($($arg:tt)+) => { ::tracing::debug!($($arg)+) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! debug_event {
    ($($arg:tt)+) => {};
}

#[cfg(feature = "tracing")]
macro_rules! warn_event {
    ($($arg:tt)+) => { ::tracing::warn!($($arg)+) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! warn_event {
    ($($arg:tt)+) => {};
}

pub(crate) use {debug_event, trace_event, warn_event};
