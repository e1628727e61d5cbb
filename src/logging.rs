// Not every feature combination logs at every level.
#![allow(unused_macros)]

// Each macro forwards to the `log` crate when the `logging` feature is
// enabled and expands to nothing otherwise. Arguments are not evaluated in
// the latter case.
macro_rules! log {
    ($($tt:tt)*) => {
        #[cfg(feature = "logging")]
        {
            $($tt)*
        }
    }
}

macro_rules! warn {
    ($($tt:tt)*) => { log!(log::warn!(target: "dateonly", $($tt)*)) }
}

macro_rules! debug {
    ($($tt:tt)*) => { log!(log::debug!(target: "dateonly", $($tt)*)) }
}

macro_rules! trace {
    ($($tt:tt)*) => { log!(log::trace!(target: "dateonly", $($tt)*)) }
}
