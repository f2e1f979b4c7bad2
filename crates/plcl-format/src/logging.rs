//! Formatter logging. Without the `tracing` feature the calls compile away.

/// Log one keyword line as it is written.
#[cfg(any(test, feature = "tracing"))]
macro_rules! trace_keyword {
    ($kind:expr, $argument:expr, $depth:expr) => {
        tracing::trace!(kind = ?$kind, argument = ?$argument, depth = $depth, "write keyword")
    };
}

#[cfg(not(any(test, feature = "tracing")))]
macro_rules! trace_keyword {
    ($kind:expr, $argument:expr, $depth:expr) => {};
}

pub(crate) use trace_keyword;
