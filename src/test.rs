//! The test capability contract.
//!
//! The session never looks inside a test: it invokes it (optionally with a
//! bound parameter value) and receives a verdict. Assertion macros, fixtures,
//! and anything else behind `invoke` belong to the frontend. Invocations are
//! expected to be side-effect-isolated per call; the session never retries.

use crate::value::Value;

/// Outcome of one test invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Pass,
    Fail { message: Option<String> },
}

impl Verdict {
    /// Failure carrying a diagnostic message.
    pub fn fail(message: impl Into<String>) -> Self {
        Verdict::Fail {
            message: Some(message.into()),
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Verdict::Pass => None,
            Verdict::Fail { message } => message.as_deref(),
        }
    }
}

/// An invokable test body with a display name.
///
/// `param` is `Some` exactly when the session is iterating a parameter
/// binding; plain tests are invoked with `None`.
pub trait Test {
    fn name(&self) -> &str;
    fn invoke(&self, param: Option<&Value>) -> Verdict;
}

/// Adapts a closure into a [`Test`], for frontends and test fixtures.
///
/// # Examples
///
/// ```rust
/// use vigil::test::{FnTest, Test, Verdict};
/// let t = FnTest::new("always_passes", |_| Verdict::Pass);
/// assert_eq!(t.name(), "always_passes");
/// assert!(t.invoke(None).is_pass());
/// ```
pub struct FnTest<F> {
    name: String,
    body: F,
}

impl<F> FnTest<F>
where
    F: Fn(Option<&Value>) -> Verdict,
{
    pub fn new(name: impl Into<String>, body: F) -> Self {
        Self {
            name: name.into(),
            body,
        }
    }
}

impl<F> Test for FnTest<F>
where
    F: Fn(Option<&Value>) -> Verdict,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn invoke(&self, param: Option<&Value>) -> Verdict {
        (self.body)(param)
    }
}
