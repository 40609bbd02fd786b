use crate::prelude::*;

use serde::{Deserialize, Serialize};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    enum_iterator::Sequence,
)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Yellow,
    Red,
    Orange,
    Blue,
    Green,
    /// Unpainted or interior facelet.
    #[serde(rename = "black")]
    Blank,
}

impl Color {
    pub fn all() -> impl Iterator<Item = Color> {
        enum_iterator::all()
    }

    /// Color of `face` on a solved cube.
    pub fn of_face(face: Face) -> Color {
        match face {
            Face::Up => Color::Blue,
            Face::Down => Color::Green,
            Face::Front => Color::Yellow,
            Face::Back => Color::White,
            Face::Left => Color::Red,
            Face::Right => Color::Orange,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Yellow => "yellow",
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Blank => "black",
        }
    }
}

impl core::str::FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Color, ParseError> {
        Color::all()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::UnknownColor(s.to_string()))
    }
}

impl core::fmt::Display for Color {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The colors on a slot's x, y and z facelets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StickerTuple(pub [Color; 3]);

impl StickerTuple {
    pub const BLANK: StickerTuple = StickerTuple([Color::Blank; 3]);

    pub fn new(x: Color, y: Color, z: Color) -> Self {
        StickerTuple([x, y, z])
    }

    /// Stickers of `slot` on a solved cube. Axes facing the interior are blank.
    pub fn solved_at(slot: Slot) -> Self {
        let position = slot.position();
        let mut tuple = Self::BLANK;
        for axis in Axis::all() {
            if position[axis.index()] != 0 {
                let face = Face::on_axis(axis, position[axis.index()] > 0);
                tuple.set(axis, Color::of_face(face));
            }
        }
        tuple
    }

    pub fn get(&self, axis: Axis) -> Color {
        self.0[axis.index()]
    }

    pub fn set(&mut self, axis: Axis, color: Color) {
        self.0[axis.index()] = color;
    }

    /// The tuple after a quarter turn about `anchor`: the other two
    /// components trade places.
    pub fn reoriented(mut self, anchor: Axis) -> Self {
        let (a, b) = anchor.others();
        self.0.swap(a.index(), b.index());
        self
    }
}

impl core::fmt::Display for StickerTuple {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "[{} {} {}]", self.0[0], self.0[1], self.0[2])
    }
}
