//! The test session orchestrator.
//!
//! A session owns the result and failure collections, the start/end
//! timestamps, and one reusable [`StatusLine`]. It drives execution of
//! single tests, parameterized tests, and groups, and is the system of
//! record for outcomes: `run_*` calls return nothing beyond lifecycle
//! errors, and frontends read the collections back after [`Session::end`].
//!
//! Lifecycle is a strict `Created -> Started -> Ended` state machine.
//! Out-of-order calls fail fast with [`SessionError::Phase`] instead of
//! silently corrupting timing.
//!
//! Execution is single-threaded and synchronous: each `run_*` call fully
//! completes before returning, and records are shared via `Rc`. Parallel
//! runs take one independent session per thread.

use crate::collection::Collection;
use crate::error::SessionError;
use crate::group::{GroupMember, TestGroup};
use crate::output::StatusLine;
use crate::param::{self, ParamBinding};
use crate::test::{Test, Verdict};
use serde::Serialize;
use std::fmt::{self, Write};
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Session lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Created,
    Started,
    Ended,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Created => write!(f, "created"),
            Phase::Started => write!(f, "started"),
            Phase::Ended => write!(f, "ended"),
        }
    }
}

/// Pass/fail kind of one recorded invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Pass,
    Fail,
}

/// The recorded result of one test invocation (or one parameter iteration).
///
/// `line` is the status line as composed at execution time; the shared
/// assembly buffer is overwritten by the next invocation, so the record
/// keeps its own copy.
#[derive(Debug, PartialEq, Serialize)]
pub struct Record {
    pub test: String,
    pub param_index: Option<usize>,
    pub outcome: Outcome,
    pub message: Option<String>,
    pub line: String,
}

/// Orchestrates one full test run and aggregates its outcomes.
///
/// # Examples
///
/// ```rust
/// use vigil::{FnTest, Session, Verdict};
/// let mut session = Session::new();
/// session.start()?;
/// session.run_test(&FnTest::new("it_works", |_| Verdict::Pass))?;
/// session.end()?;
/// assert_eq!(session.results().count(), 1);
/// assert!(session.failures().is_empty());
/// # Ok::<(), vigil::SessionError>(())
/// ```
pub struct Session {
    phase: Phase,
    results: Collection<Rc<Record>>,
    failures: Collection<Rc<Record>>,
    started_at: Option<Instant>,
    ended_at: Option<Instant>,
    output: StatusLine,
}

impl Session {
    pub fn new() -> Self {
        Self {
            phase: Phase::Created,
            results: Collection::new(),
            failures: Collection::new(),
            started_at: None,
            ended_at: None,
            output: StatusLine::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Captures the start timestamp and enters `Started`.
    pub fn start(&mut self) -> Result<(), SessionError> {
        if self.phase != Phase::Created {
            return Err(SessionError::Phase {
                operation: "start",
                phase: self.phase,
            });
        }
        self.started_at = Some(Instant::now());
        self.phase = Phase::Started;
        Ok(())
    }

    /// Captures the end timestamp and enters the terminal `Ended` phase.
    pub fn end(&mut self) -> Result<(), SessionError> {
        if self.phase != Phase::Started {
            return Err(SessionError::Phase {
                operation: "end",
                phase: self.phase,
            });
        }
        self.ended_at = Some(Instant::now());
        self.phase = Phase::Ended;
        Ok(())
    }

    /// Invokes `test` once with no parameter bound and records the outcome.
    pub fn run_test(&mut self, test: &dyn Test) -> Result<(), SessionError> {
        self.ensure_started("run a test")?;
        let verdict = test.invoke(None);
        self.record(test.name(), None, verdict);
        Ok(())
    }

    /// Resolves the named binding in `params` and invokes `test` once per
    /// remaining value, in declaration order, advancing the cursor as it
    /// goes. Every value is attempted; a failing value never short-circuits
    /// the rest, so one run surfaces every failing case.
    ///
    /// A lookup miss leaves the session untouched and returns
    /// [`SessionError::UnknownParam`].
    pub fn run_parameterized_test(
        &mut self,
        test: &dyn Test,
        params: &mut Collection<ParamBinding>,
        param_name: &str,
    ) -> Result<(), SessionError> {
        self.ensure_started("run a parameterized test")?;
        let binding =
            param::lookup_mut(params, param_name).ok_or_else(|| SessionError::UnknownParam {
                name: param_name.to_string(),
                test: test.name().to_string(),
            })?;
        while !binding.is_exhausted() {
            let index = binding.cursor();
            let verdict = match binding.current() {
                Some(value) => test.invoke(Some(value)),
                None => break,
            };
            self.record(test.name(), Some(index), verdict);
            binding.advance();
        }
        Ok(())
    }

    /// Runs each member of `group` in declared order. Aggregation is purely
    /// additive into this session's collections; a group introduces no
    /// scoping of its own.
    pub fn run_test_group(
        &mut self,
        group: &TestGroup,
        params: &mut Collection<ParamBinding>,
    ) -> Result<(), SessionError> {
        self.ensure_started("run a test group")?;
        for member in group.members() {
            match member {
                GroupMember::Single(test) => self.run_test(test.as_ref())?,
                GroupMember::Parameterized { test, param } => {
                    self.run_parameterized_test(test.as_ref(), params, param)?
                }
            }
        }
        Ok(())
    }

    /// All outcome records, in execution order.
    pub fn results(&self) -> &Collection<Rc<Record>> {
        &self.results
    }

    /// The failing subset of [`Session::results`], in execution order. Each
    /// entry is the same `Rc` as the corresponding results entry.
    pub fn failures(&self) -> &Collection<Rc<Record>> {
        &self.failures
    }

    /// (passed, failed) counts over all records.
    pub fn tally(&self) -> (usize, usize) {
        let failed = self.failures.count();
        (self.results.count() - failed, failed)
    }

    /// Timestamp captured by `start()`, once it has run.
    pub fn started_at(&self) -> Option<Instant> {
        self.started_at
    }

    /// Timestamp captured by `end()`; unset until the session ends.
    pub fn ended_at(&self) -> Option<Instant> {
        self.ended_at
    }

    /// Wall time between `start()` and `end()`; `None` until both ran.
    pub fn elapsed(&self) -> Option<Duration> {
        match (self.started_at, self.ended_at) {
            (Some(start), Some(end)) => Some(end.duration_since(start)),
            _ => None,
        }
    }

    fn ensure_started(&self, operation: &'static str) -> Result<(), SessionError> {
        if self.phase != Phase::Started {
            return Err(SessionError::Phase {
                operation,
                phase: self.phase,
            });
        }
        Ok(())
    }

    /// Composes the status line in the shared buffer (overwritten, not
    /// accumulated) and appends a record to `results`, plus `failures` on a
    /// failing verdict.
    fn record(&mut self, test: &str, param_index: Option<usize>, verdict: Verdict) {
        self.output.reset();
        let _ = write!(self.output, "{}", test);
        if let Some(index) = param_index {
            let _ = write!(self.output, "[{}]", index);
        }
        let (outcome, message) = match verdict {
            Verdict::Pass => {
                self.output.append(" PASS");
                (Outcome::Pass, None)
            }
            Verdict::Fail { message } => {
                self.output.append(" FAIL");
                if let Some(msg) = &message {
                    let _ = write!(self.output, ": {}", msg);
                }
                (Outcome::Fail, message)
            }
        };
        let record = Rc::new(Record {
            test: test.to_string(),
            param_index,
            outcome,
            message,
            line: self.output.as_str().to_string(),
        });
        self.results.insert(Rc::clone(&record));
        if record.outcome == Outcome::Fail {
            self.failures.insert(record);
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
