use crate::problem::generate_problem;

/// A point-plus-direction annotation on the number line, used both for the
/// generated answer and the user's response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Marker {
    pub num: i32,
    pub open: bool,
    pub right_direction: bool,
}

impl Default for Marker {
    /// The fixed response reset: origin, open circle, rightward ray.
    fn default() -> Self {
        Self {
            num: 0,
            open: true,
            right_direction: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub answer: Marker,
    pub question: String,
    pub response: Marker,
    pub mouse_down: bool,
    /// Set after a wrong check while the correct answer is on display.
    pub problem_ended: bool,
    pub score: u32,
}

impl SessionState {
    pub fn new(seed: u32) -> Self {
        let problem = generate_problem(seed);
        Self {
            answer: problem.answer,
            question: problem.question,
            response: Marker::default(),
            mouse_down: false,
            problem_ended: false,
            score: 0,
        }
    }
}
