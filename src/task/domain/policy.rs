//! Transition policy for the task status machine.

use super::TaskStatus;
use std::collections::{HashMap, HashSet};

/// Lookup table of permitted status moves.
///
/// The default policy is unrestricted: every status is reachable from every
/// other status in a single step. A restricted policy is built from an
/// explicit `from -> {to}` table. Staying in the same status is always
/// allowed regardless of the table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransitionPolicy {
    allowed: Option<HashMap<TaskStatus, HashSet<TaskStatus>>>,
}

impl TransitionPolicy {
    /// Creates a policy that allows every transition.
    #[must_use]
    pub fn unrestricted() -> Self {
        Self::default()
    }

    /// Creates a policy from an explicit table of permitted moves.
    ///
    /// Statuses absent from the table have no outgoing moves.
    #[must_use]
    pub fn from_table<I, T>(table: I) -> Self
    where
        I: IntoIterator<Item = (TaskStatus, T)>,
        T: IntoIterator<Item = TaskStatus>,
    {
        let mut allowed: HashMap<TaskStatus, HashSet<TaskStatus>> = HashMap::new();
        for (from, targets) in table {
            allowed.entry(from).or_default().extend(targets);
        }
        Self {
            allowed: Some(allowed),
        }
    }

    /// Creates a policy that forbids skipping the in-progress column.
    ///
    /// Tasks move `todo <-> in-progress <-> completed` one column at a time.
    #[must_use]
    pub fn sequential() -> Self {
        Self::from_table([
            (TaskStatus::Todo, vec![TaskStatus::InProgress]),
            (
                TaskStatus::InProgress,
                vec![TaskStatus::Todo, TaskStatus::Completed],
            ),
            (TaskStatus::Completed, vec![TaskStatus::InProgress]),
        ])
    }

    /// Returns whether the policy places no restriction on moves.
    #[must_use]
    pub const fn is_unrestricted(&self) -> bool {
        self.allowed.is_none()
    }

    /// Returns whether `from -> to` is permitted.
    #[must_use]
    pub fn allows(&self, from: TaskStatus, to: TaskStatus) -> bool {
        if from == to {
            return true;
        }
        self.allowed.as_ref().is_none_or(|table| {
            table
                .get(&from)
                .is_some_and(|targets| targets.contains(&to))
        })
    }

    /// Returns the statuses reachable from `from` in one step, in column
    /// order, excluding `from` itself.
    #[must_use]
    pub fn targets_from(&self, from: TaskStatus) -> Vec<TaskStatus> {
        TaskStatus::ALL
            .into_iter()
            .filter(|to| *to != from && self.allows(from, *to))
            .collect()
    }
}
