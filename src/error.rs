//! Session error types.
//!
//! Individual test failure is data, recorded in the session's collections —
//! it never surfaces here. Errors are reserved for caller misuse of the
//! session lifecycle and for runs that reference a parameter binding the
//! caller never registered.

use crate::session::Phase;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum SessionError {
    /// A lifecycle operation arrived out of order. Failing fast here is
    /// preferred over silently corrupting timing or results.
    #[error("session is {phase}, cannot {operation}")]
    #[diagnostic(
        code(vigil::session::phase),
        help("call start() exactly once before any run, and end() exactly once after the last run")
    )]
    Phase {
        operation: &'static str,
        phase: Phase,
    },

    /// A parameterized run referenced a binding name absent from the
    /// collection passed in. Recoverable: the session state is untouched.
    #[error("no parameter binding named '{name}' for test '{test}'")]
    #[diagnostic(
        code(vigil::session::unknown_param),
        help("register the binding in the collection handed to run_parameterized_test")
    )]
    UnknownParam { name: String, test: String },
}
