//! Team reference data.
//!
//! The roster maps team names to member counts. It is an explicit input
//! to classification rather than ambient state, so tests and sessions can
//! supply their own.

mod roster;

pub use roster::TeamRoster;
