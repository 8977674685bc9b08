use crate::action::{SessionAction, SessionEffect};
use crate::number_line::x_to_num;
use crate::problem::generate_problem;
use crate::state::{Marker, SessionState};
use crate::SCORE_PENALTY;

/// The single transition function behind every DOM event. Mutates the
/// session and reports what the caller has to redraw.
///
/// While `problem_ended` is set the response is frozen for display: only
/// pointer bookkeeping and the check acknowledgment get through.
pub fn apply_action(state: &mut SessionState, action: SessionAction) -> SessionEffect {
    match action {
        SessionAction::PointerMoved { x, surface_width } => {
            if !state.mouse_down || state.problem_ended {
                return SessionEffect::None;
            }
            state.response.num = x_to_num(surface_width, x);
            SessionEffect::RedrawResponse
        }
        SessionAction::PointerPressed => {
            state.mouse_down = true;
            SessionEffect::None
        }
        SessionAction::PointerReleased | SessionAction::PointerLeft => {
            state.mouse_down = false;
            SessionEffect::None
        }
        SessionAction::DirectionToggled => {
            if state.problem_ended {
                return SessionEffect::None;
            }
            state.response.right_direction = !state.response.right_direction;
            SessionEffect::RedrawResponse
        }
        SessionAction::CircleToggled => {
            if state.problem_ended {
                return SessionEffect::None;
            }
            state.response.open = !state.response.open;
            SessionEffect::RedrawResponse
        }
        SessionAction::CheckPressed { nonce } => check(state, nonce),
    }
}

fn check(state: &mut SessionState, nonce: u32) -> SessionEffect {
    let correct = state.response == state.answer;

    // Only a fresh check moves the score; the acknowledgment click after a
    // reveal was already penalized.
    if !state.problem_ended {
        state.score = if correct {
            state.score + 1
        } else {
            state.score.saturating_sub(SCORE_PENALTY)
        };
    }

    if state.problem_ended || correct {
        let problem = generate_problem(nonce);
        state.answer = problem.answer;
        state.question = problem.question;
        state.response = Marker::default();
        state.mouse_down = false;
        state.problem_ended = false;
        SessionEffect::StartProblem
    } else {
        state.problem_ended = true;
        SessionEffect::RevealAnswer
    }
}
