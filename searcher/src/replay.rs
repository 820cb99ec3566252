//! Replaying action sequences against a problem.

use num::Zero;

use crate::errors::{Result, SearchError};
use crate::traits::SearchProblem;

/// Follow a sequence of actions from the start state.
///
/// Returns the state reached and the total cost of the path, or
/// an error naming the first action which isn't available from the
/// state the path had reached at that point.
pub fn replay<P>(problem: &P, actions: &[P::Action]) -> Result<(P::State, P::Cost)>
where
    P: SearchProblem,
{
    let mut state = problem.start_state();
    let mut cost = P::Cost::zero();

    for (step, action) in actions.iter().enumerate() {
        let successor = problem
            .successors(&state)
            .into_iter()
            .find(|s| &s.action == action)
            .ok_or_else(|| SearchError::InvalidAction {
                step,
                action: format!("{:?}", action),
            })?;

        state = successor.state;
        cost = cost + successor.cost;
    }

    Ok((state, cost))
}
