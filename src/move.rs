use crate::prelude::*;

use rand::Rng;

pub const SCRAMBLE_LENGTH: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub face: Face,
    pub direction: Direction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, enum_iterator::Sequence)]
pub enum Direction {
    Single,
    Double,
    Reverse,
}

impl Direction {
    /// Signed clockwise quarter turns.
    pub fn quarters(self) -> i8 {
        match self {
            Direction::Single => 1,
            Direction::Double => 2,
            Direction::Reverse => -1,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            Direction::Single => "",
            Direction::Double => "2",
            Direction::Reverse => "'",
        }
    }
}

impl Move {
    pub fn new(face: Face, direction: Direction) -> Move {
        Move { face, direction }
    }

    pub fn all() -> impl Iterator<Item = Move> {
        Face::all().flat_map(|face| {
            enum_iterator::all::<Direction>().map(move |direction| Move { face, direction })
        })
    }

    pub fn parse_sequence(s: &str) -> Result<Vec<Move>, ParseError> {
        s.split_whitespace().map(|s| s.parse()).collect()
    }

    pub fn format_sequence(moves: &[Move]) -> String {
        moves
            .iter()
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn quarters(&self) -> i8 {
        self.direction.quarters()
    }

    /// The move that undoes this one. A half turn is its own inverse.
    pub fn inverse(&self) -> Move {
        let direction = match self.direction {
            Direction::Single => Direction::Reverse,
            Direction::Reverse => Direction::Single,
            Direction::Double => Direction::Double,
        };
        Move { direction, ..*self }
    }

    pub fn inverse_seq(moves: &[Move]) -> Vec<Move> {
        moves.iter().rev().map(Move::inverse).collect()
    }

    /// Uniform quarter turns of any face. Consecutive moves may cancel.
    pub fn scramble(rng: &mut impl Rng) -> Vec<Move> {
        const FACES: [Face; 6] = [
            Face::Front,
            Face::Back,
            Face::Right,
            Face::Left,
            Face::Up,
            Face::Down,
        ];
        const DIRECTIONS: [Direction; 2] = [Direction::Single, Direction::Reverse];

        (0..SCRAMBLE_LENGTH)
            .map(|_| {
                let face = FACES[rng.gen_range(0, FACES.len())];
                let direction = DIRECTIONS[rng.gen_range(0, DIRECTIONS.len())];
                Move { face, direction }
            })
            .collect()
    }
}

impl core::str::FromStr for Move {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Move, ParseError> {
        let mut chars = s.chars();
        let face_char = match chars.next() {
            Some(c) => c,
            None => return Err(ParseError::EmptyToken),
        };

        let face = Face::from_letter(face_char).ok_or(ParseError::UnknownFace(face_char))?;

        let direction = match chars.next() {
            None => Direction::Single,
            Some('\'') => Direction::Reverse,
            Some('2') => Direction::Double,
            Some(c) => {
                return Err(ParseError::UnknownModifier {
                    token: s.to_string(),
                    modifier: c,
                })
            }
        };

        if chars.next().is_some() {
            return Err(ParseError::TrailingCharacters(s.to_string()));
        }

        Ok(Move { face, direction })
    }
}

impl core::fmt::Display for Move {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{}{}", self.face, self.direction.suffix())
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Move {
    fn arbitrary<G: quickcheck::Gen>(g: &mut G) -> Self {
        use rand::seq::SliceRandom;

        *Move::all()
            .collect::<Vec<_>>()
            .choose(g)
            .expect("eighteen moves")
    }
}
