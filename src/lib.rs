//! Vigil: a minimal test session engine for resource-constrained native code.
//!
//! A [`session::Session`] drives individual tests, parameterized tests (one
//! invocation per value in a named [`param::ParamBinding`]), and flat
//! [`group::TestGroup`]s, recording pass/fail outcomes and session timing.
//! Per-test status lines are composed in a fixed-capacity [`output::StatusLine`]
//! so a run never performs unbounded string allocation.
//!
//! The engine consumes two external contracts: the [`test::Test`] capability
//! (invoke once, yield a [`test::Verdict`]) and the append-ordered
//! [`collection::Collection`]. Assertion evaluation, test discovery, and any
//! CLI frontend live outside this crate.

pub use crate::error::SessionError;
pub use crate::session::{Outcome, Record, Session};
pub use crate::test::{FnTest, Test, Verdict};
pub use crate::value::Value;

pub mod collection;
pub mod error;
pub mod group;
pub mod output;
pub mod param;
pub mod report;
pub mod session;
pub mod test;
pub mod value;
