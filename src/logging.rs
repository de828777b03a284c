//! Logging shims over the `log` facade.
//!
//! With the `logging` feature disabled the macros still type-check their
//! arguments but emit nothing.

#[cfg(feature = "logging")]
macro_rules! debug_log {
    ($($arg:tt)+) => {
        log::debug!($($arg)+)
    };
}

#[cfg(not(feature = "logging"))]
macro_rules! debug_log {
    ($($arg:tt)+) => {{
        if false {
            let _ = format_args!($($arg)+);
        }
    }};
}

#[cfg(feature = "logging")]
macro_rules! trace_log {
    ($($arg:tt)+) => {
        log::trace!($($arg)+)
    };
}

#[cfg(not(feature = "logging"))]
macro_rules! trace_log {
    ($($arg:tt)+) => {{
        if false {
            let _ = format_args!($($arg)+);
        }
    }};
}
