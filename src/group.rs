//! Test groups: ordered members executed together.
//!
//! A group is purely a declared ordering of tests and parameterized tests.
//! Aggregation is flat by design: members contribute records directly to the
//! session's collections, with no per-group scoping of outcomes.

use crate::collection::Collection;
use crate::test::Test;
use std::rc::Rc;

/// One member of a group: a plain test, or a test paired with the name of
/// the parameter binding it consumes. The binding itself lives in the
/// caller's binding collection, not in the group.
pub enum GroupMember {
    Single(Rc<dyn Test>),
    Parameterized { test: Rc<dyn Test>, param: String },
}

/// An ordered collection of tests executed together.
///
/// # Examples
///
/// ```rust
/// use std::rc::Rc;
/// use vigil::group::TestGroup;
/// use vigil::test::{FnTest, Verdict};
/// let mut group = TestGroup::new("arithmetic");
/// group.add_test(Rc::new(FnTest::new("adds", |_| Verdict::Pass)));
/// group.add_parameterized_test(
///     Rc::new(FnTest::new("divide_by", |_| Verdict::Pass)),
///     "divisors",
/// );
/// assert_eq!(group.count(), 2);
/// ```
pub struct TestGroup {
    name: String,
    members: Collection<GroupMember>,
}

impl TestGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Collection::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_test(&mut self, test: Rc<dyn Test>) {
        self.members.insert(GroupMember::Single(test));
    }

    pub fn add_parameterized_test(&mut self, test: Rc<dyn Test>, param: impl Into<String>) {
        self.members.insert(GroupMember::Parameterized {
            test,
            param: param.into(),
        });
    }

    /// Members in declared order.
    pub fn members(&self) -> impl Iterator<Item = &GroupMember> {
        self.members.iter()
    }

    pub fn count(&self) -> usize {
        self.members.count()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
