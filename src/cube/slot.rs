use crate::prelude::*;

use smallvec::SmallVec;

pub const EDGE_COUNT: usize = 12;
pub const CORNER_COUNT: usize = 8;
pub const SLOT_COUNT: usize = EDGE_COUNT + CORNER_COUNT;

const EDGE_POSITIONS: [[i8; 3]; EDGE_COUNT] = [
    [0, 1, 1],
    [1, 1, 0],
    [0, 1, -1],
    [-1, 1, 0],
    [0, -1, 1],
    [1, -1, 0],
    [0, -1, -1],
    [-1, -1, 0],
    [1, 0, 1],
    [-1, 0, 1],
    [1, 0, -1],
    [-1, 0, -1],
];

const CORNER_POSITIONS: [[i8; 3]; CORNER_COUNT] = [
    [1, 1, 1],
    [1, 1, -1],
    [-1, 1, -1],
    [-1, 1, 1],
    [1, -1, 1],
    [-1, -1, 1],
    [-1, -1, -1],
    [1, -1, -1],
];

lazy_static::lazy_static! {
    /// Face-adjacency label of every slot, in solver order.
    static ref LABELS: Vec<String> = Slot::all()
        .map(|slot| slot.faces().iter().map(|f| f.letter()).collect())
        .collect();
}

/// A fixed lattice position. Slots never move; pieces move between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Slot {
    Edge(usize),
    Corner(usize),
}

impl Slot {
    /// Edges 0..12 then corners 0..8.
    pub fn all() -> impl Iterator<Item = Slot> {
        (0..EDGE_COUNT)
            .map(Slot::Edge)
            .chain((0..CORNER_COUNT).map(Slot::Corner))
    }

    pub fn from_index(index: usize) -> Option<Slot> {
        match index {
            i if i < EDGE_COUNT => Some(Slot::Edge(i)),
            i if i < SLOT_COUNT => Some(Slot::Corner(i - EDGE_COUNT)),
            _ => None,
        }
    }

    /// Whether this names one of the 20 slots. Ids coming from outside the
    /// crate should be checked before use.
    pub fn is_valid(self) -> bool {
        match self {
            Slot::Edge(i) => i < EDGE_COUNT,
            Slot::Corner(i) => i < CORNER_COUNT,
        }
    }

    /// Index in the flattened solver order.
    pub fn index(self) -> usize {
        match self {
            Slot::Edge(i) => i,
            Slot::Corner(i) => EDGE_COUNT + i,
        }
    }

    pub fn position(self) -> [i8; 3] {
        match self {
            Slot::Edge(i) => EDGE_POSITIONS[i],
            Slot::Corner(i) => CORNER_POSITIONS[i],
        }
    }

    /// Faces this slot touches, ordered U/D, F/B, L/R.
    pub fn faces(self) -> SmallVec<[Face; 3]> {
        let position = self.position();
        [Axis::Y, Axis::Z, Axis::X]
            .iter()
            .filter_map(|&axis| match position[axis.index()] {
                0 => None,
                c => Some(Face::on_axis(axis, c > 0)),
            })
            .collect()
    }

    pub fn label(self) -> &'static str {
        LABELS[self.index()].as_str()
    }

    /// The face a grabbed facelet on `axis` belongs to, if that facelet is
    /// on the outside of the cube.
    pub fn face_for_axis(self, axis: Axis) -> Option<Face> {
        let label = self.label();
        [Face::on_axis(axis, true), Face::on_axis(axis, false)]
            .into_iter()
            .find(|face| label.contains(face.letter()))
    }

    pub fn is_on(self, face: Face) -> bool {
        self.faces().contains(&face)
    }
}

impl core::fmt::Display for Slot {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Slot::Edge(i) => write!(f, "E{}", i),
            Slot::Corner(i) => write!(f, "C{}", i),
        }
    }
}
