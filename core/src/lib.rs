pub mod action;
pub mod number_line;
pub mod problem;
pub mod session;
pub mod state;

pub use action::{SessionAction, SessionEffect};
pub use number_line::{num_to_x, tick_spacing, x_to_num};
pub use problem::{build_problem, generate_problem, InequalitySymbol, Problem, VARIABLE_ALPHABET};
pub use session::apply_action;
pub use state::{Marker, SessionState};

/// Number of integer steps spanned by the line, end tick to end tick.
pub const RANGE: i32 = 10;
pub const NUM_MIN: i32 = -(RANGE / 2);
pub const NUM_MAX: i32 = RANGE / 2;

pub const SCORE_PENALTY: u32 = 1;

pub fn splitmix32(mut value: u32) -> u32 {
    value = value.wrapping_add(0x9E37_79B9);
    let mut z = value;
    z = (z ^ (z >> 16)).wrapping_mul(0x85EB_CA6B);
    z = (z ^ (z >> 13)).wrapping_mul(0xC2B2_AE35);
    z ^ (z >> 16)
}

pub fn rand_unit(seed: u32, salt: u32) -> f32 {
    let mixed = splitmix32(seed ^ salt);
    let top = mixed >> 8;
    top as f32 / ((1u32 << 24) as f32)
}

pub fn rand_index(seed: u32, salt: u32, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let raw = (rand_unit(seed, salt) * len as f32) as usize;
    raw.min(len - 1)
}
