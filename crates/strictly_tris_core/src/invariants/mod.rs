//! First-class invariants over the move history.
//!
//! Invariants are logical properties that every history produced through
//! the public API satisfies. They are checked in debug builds after each
//! accepted move and can be tested on their own.

use derive_new::new;

pub mod alternating_turn;
pub mod board_matches_history;
pub mod unique_cells;

pub use alternating_turn::AlternatingTurnInvariant;
pub use board_matches_history::BoardMatchesHistoryInvariant;
pub use unique_cells::UniqueCellsInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    #[new(into)]
    pub description: String,
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks every invariant in the set, collecting all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn push_if_broken<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        push_if_broken::<S, I1>(state, &mut violations);
        push_if_broken::<S, I2>(state, &mut violations);
        collect(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        push_if_broken::<S, I1>(state, &mut violations);
        push_if_broken::<S, I2>(state, &mut violations);
        push_if_broken::<S, I3>(state, &mut violations);
        collect(violations)
    }
}

/// All history invariants as a composable set.
pub type HistoryInvariants = (
    UniqueCellsInvariant,
    AlternatingTurnInvariant,
    BoardMatchesHistoryInvariant,
);
