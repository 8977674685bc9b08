use crate::state::Marker;
use crate::{rand_index, rand_unit, NUM_MIN, RANGE};

/// Letters eligible as the inequality variable. Lookalikes for digits and
/// operators (i, l, o, u, v, a) are left out.
pub const VARIABLE_ALPHABET: &str = "bcdefghjkmnpqrstwxyz";

const SALT_VARIABLE: u32 = 0x5EED_0A01;
const SALT_SYMBOL: u32 = 0x5EED_0A02;
const SALT_NUM: u32 = 0x5EED_0A03;
const SALT_ORDER: u32 = 0x5EED_0A04;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InequalitySymbol {
    Less,
    LessOrEqual,
    GreaterOrEqual,
    Greater,
}

impl InequalitySymbol {
    pub const ALL: [InequalitySymbol; 4] = [
        InequalitySymbol::Less,
        InequalitySymbol::LessOrEqual,
        InequalitySymbol::GreaterOrEqual,
        InequalitySymbol::Greater,
    ];

    pub fn glyph(self) -> char {
        match self {
            InequalitySymbol::Less => '<',
            InequalitySymbol::LessOrEqual => '≤',
            InequalitySymbol::GreaterOrEqual => '≥',
            InequalitySymbol::Greater => '>',
        }
    }

    /// Strict symbols exclude the boundary value, shown as an open circle.
    pub fn is_strict(self) -> bool {
        matches!(self, InequalitySymbol::Less | InequalitySymbol::Greater)
    }

    /// Whether the solution ray extends toward +∞ when the variable is on
    /// the left-hand side.
    pub fn points_right(self) -> bool {
        matches!(
            self,
            InequalitySymbol::GreaterOrEqual | InequalitySymbol::Greater
        )
    }

    /// Mirror symbol for swapping operand order: `x > 3` ⟺ `3 < x`.
    pub fn flipped(self) -> InequalitySymbol {
        match self {
            InequalitySymbol::Less => InequalitySymbol::Greater,
            InequalitySymbol::LessOrEqual => InequalitySymbol::GreaterOrEqual,
            InequalitySymbol::GreaterOrEqual => InequalitySymbol::LessOrEqual,
            InequalitySymbol::Greater => InequalitySymbol::Less,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Problem {
    pub answer: Marker,
    pub question: String,
}

/// Assembles a problem from explicit draws. The answer marker is derived
/// from the symbol before phrasing, so both operand orders encode the same
/// solution set.
pub fn build_problem(
    variable: char,
    symbol: InequalitySymbol,
    num: i32,
    swap_sides: bool,
) -> Problem {
    let answer = Marker {
        num,
        open: symbol.is_strict(),
        right_direction: symbol.points_right(),
    };
    let question = if swap_sides {
        format!("{} {} {}", num, symbol.flipped().glyph(), variable)
    } else {
        format!("{} {} {}", variable, symbol.glyph(), num)
    };
    Problem { answer, question }
}

/// Draws a fresh problem from one seed. Never fails; every draw lands in
/// range by construction.
pub fn generate_problem(seed: u32) -> Problem {
    let letters = VARIABLE_ALPHABET.as_bytes();
    let variable = letters[rand_index(seed, SALT_VARIABLE, letters.len())] as char;
    let symbol = InequalitySymbol::ALL[rand_index(seed, SALT_SYMBOL, InequalitySymbol::ALL.len())];
    let num = NUM_MIN + rand_index(seed, SALT_NUM, (RANGE + 1) as usize) as i32;
    let swap_sides = rand_unit(seed, SALT_ORDER) >= 0.5;
    build_problem(variable, symbol, num, swap_sides)
}
