//! Static face tables: which slots a face turn moves, in rotational order.

use crate::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceSpec {
    pub face: Face,
    /// Edge indices in cycle order. A clockwise quarter turn moves the piece
    /// at cycle position `i` to position `i - 1`.
    pub edge_slots: [usize; 4],
    pub corner_slots: [usize; 4],
    pub anchor_axis: Axis,
}

impl FaceSpec {
    pub fn slots(&self) -> impl Iterator<Item = Slot> {
        let corners = self.corner_slots;
        self.edge_slots
            .into_iter()
            .map(Slot::Edge)
            .chain(corners.into_iter().map(Slot::Corner))
    }
}

const fn spec(face: Face, edge_slots: [usize; 4], corner_slots: [usize; 4], anchor_axis: Axis) -> FaceSpec {
    FaceSpec {
        face,
        edge_slots,
        corner_slots,
        anchor_axis,
    }
}

// Indexed by `Face as usize`.
const FACE_SPECS: [FaceSpec; 6] = [
    spec(Face::Up, [0, 1, 2, 3], [0, 1, 2, 3], Axis::Y),
    spec(Face::Down, [4, 7, 6, 5], [4, 5, 6, 7], Axis::Y),
    spec(Face::Front, [0, 9, 4, 8], [0, 3, 5, 4], Axis::Z),
    spec(Face::Back, [2, 10, 6, 11], [2, 1, 7, 6], Axis::Z),
    spec(Face::Left, [3, 11, 7, 9], [3, 2, 6, 5], Axis::X),
    spec(Face::Right, [1, 8, 5, 10], [1, 0, 4, 7], Axis::X),
];

pub fn faces_of(face: Face) -> FaceSpec {
    FACE_SPECS[face as usize]
}

/// Slots a renderer groups under the rotating node. Empty when no face is
/// turning.
pub fn turning_slots(face: Option<Face>) -> impl Iterator<Item = Slot> {
    face.into_iter().flat_map(|f| faces_of(f).slots())
}
