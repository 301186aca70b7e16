//! Google Analytics trackers.

pub mod universal;
