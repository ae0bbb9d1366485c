use crate::search::{Board, Direction, Plan};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("step {step}: moving the blank {direction} is not possible in state\n{state}")]
    NotApplicable {
        step: usize,
        direction: Direction,
        state: Board,
    },
    #[error("step {step}: boards are not one move apart\n{from}\n\n{to}")]
    NotAdjacent { step: usize, from: Board, to: Board },
    #[error("plan does not reach goal state, final state is:\n{0}")]
    GoalNotReached(Board),
    #[error("path does not start at the initial state")]
    WrongStart,
    #[error("path is empty")]
    EmptyPath,
}

/// Replays `plan` from `initial` and checks that it ends in `goal`.
pub fn validate(plan: &Plan, initial: &Board, goal: &Board) -> Result<(), ValidationError> {
    let mut cur_state = initial.clone();
    for (step, &direction) in plan.steps().iter().enumerate() {
        cur_state = cur_state
            .apply(direction)
            .ok_or_else(|| ValidationError::NotApplicable {
                step: step + 1,
                direction,
                state: cur_state.clone(),
            })?;
    }

    if !cur_state.is_goal(goal) {
        return Err(ValidationError::GoalNotReached(cur_state));
    }

    Ok(())
}

/// Checks that `path` runs from `initial` to `goal` with consecutive boards
/// one legal move apart.
pub fn validate_path(path: &[Board], initial: &Board, goal: &Board) -> Result<(), ValidationError> {
    let (first, last) = match (path.first(), path.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(ValidationError::EmptyPath),
    };
    if first != initial {
        return Err(ValidationError::WrongStart);
    }
    for (step, pair) in path.windows(2).enumerate() {
        if pair[0].direction_to(&pair[1]).is_none() {
            return Err(ValidationError::NotAdjacent {
                step: step + 1,
                from: pair[0].clone(),
                to: pair[1].clone(),
            });
        }
    }
    if !last.is_goal(goal) {
        return Err(ValidationError::GoalNotReached(last.clone()));
    }
    Ok(())
}
