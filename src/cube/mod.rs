use crate::prelude::*;

pub mod algebra;
mod slot;
mod state;
mod sticker;

pub use algebra::{faces_of, turning_slots, FaceSpec};
pub use slot::*;
pub use state::CubeState;
pub use sticker::*;

pub trait CubeLike: Sized + core::fmt::Debug + Eq {
    fn solved() -> Self;
    fn apply(self, move_: Move) -> Self;

    fn apply_all(self, moves: impl IntoIterator<Item = Move>) -> Self {
        moves.into_iter().fold(self, |cube, m| cube.apply(m))
    }
}

/// Declaration order is the order faces appear in slot labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, enum_iterator::Sequence)]
pub enum Face {
    Up,
    Down,
    Front,
    Back,
    Left,
    Right,
}

impl Face {
    pub fn all() -> impl Iterator<Item = Face> {
        enum_iterator::all()
    }

    pub fn letter(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Down => 'D',
            Face::Front => 'F',
            Face::Back => 'B',
            Face::Left => 'L',
            Face::Right => 'R',
        }
    }

    pub fn from_letter(c: char) -> Option<Face> {
        let face = match c {
            'U' | 'u' => Face::Up,
            'D' | 'd' => Face::Down,
            'F' | 'f' => Face::Front,
            'B' | 'b' => Face::Back,
            'L' | 'l' => Face::Left,
            'R' | 'r' => Face::Right,
            _ => return None,
        };
        Some(face)
    }

    pub fn axis(self) -> Axis {
        self.into()
    }

    pub fn same_axis(a: Face, b: Face) -> bool {
        a.axis() == b.axis()
    }

    /// The face on `axis` at the positive (`true`) or negative end.
    pub fn on_axis(axis: Axis, positive: bool) -> Face {
        match (axis, positive) {
            (Axis::X, true) => Face::Right,
            (Axis::X, false) => Face::Left,
            (Axis::Y, true) => Face::Up,
            (Axis::Y, false) => Face::Down,
            (Axis::Z, true) => Face::Front,
            (Axis::Z, false) => Face::Back,
        }
    }

    pub fn is_positive(self) -> bool {
        matches!(self, Face::Up | Face::Front | Face::Right)
    }

    /// Sign of a clockwise turn of this face, measured as a right-handed
    /// rotation about the positive anchor axis.
    pub fn visual_sign(self) -> i8 {
        if self.is_positive() {
            -1
        } else {
            1
        }
    }
}

impl core::fmt::Display for Face {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, enum_iterator::Sequence)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn all() -> impl Iterator<Item = Axis> {
        enum_iterator::all()
    }

    /// Position of this axis' component in a `StickerTuple`.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(i: usize) -> Option<Axis> {
        Axis::all().nth(i)
    }

    /// The two axes a quarter turn about `self` exchanges.
    pub fn others(self) -> (Axis, Axis) {
        match self {
            Axis::X => (Axis::Y, Axis::Z),
            Axis::Y => (Axis::Z, Axis::X),
            Axis::Z => (Axis::X, Axis::Y),
        }
    }
}

impl From<Face> for Axis {
    fn from(face: Face) -> Self {
        match face {
            Face::Up | Face::Down => Axis::Y,
            Face::Front | Face::Back => Axis::Z,
            Face::Left | Face::Right => Axis::X,
        }
    }
}

impl core::fmt::Display for Axis {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Face {
    fn arbitrary<G: quickcheck::Gen>(g: &mut G) -> Self {
        use rand::seq::SliceRandom;

        *Face::all()
            .collect::<Vec<_>>()
            .choose(g)
            .expect("six faces")
    }
}
