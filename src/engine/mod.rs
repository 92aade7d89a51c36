//! Test decision engine.
//!
//! `ScreenComparator::configure` binds a `ComparisonConfig` once; each
//! `invoke`/`check` call then runs an independent comparison:
//!
//! START -> baseline lookup -> (bootstrap | compare) -> (pass | fail with artifacts)

mod comparator;
mod decision;
mod target;
mod verdict;

pub use comparator::ScreenComparator;
pub use decision::{compare, Services, TestInvocation};
pub use target::{resolve_target, Target};
pub use verdict::{is_match, Outcome, VerdictStatus};
