use crate::prelude::*;

/// Sticker colors of the 20 moveable pieces, indexed by the slot they occupy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CubeState {
    edges: [StickerTuple; EDGE_COUNT],
    corners: [StickerTuple; CORNER_COUNT],
}

impl super::CubeLike for CubeState {
    fn solved() -> CubeState {
        let mut cube = CubeState::blank();
        for slot in Slot::all() {
            *cube.tuple_mut(slot) = StickerTuple::solved_at(slot);
        }
        cube
    }

    fn apply(mut self, move_: Move) -> Self {
        self.apply_turn(move_.face, move_.quarters());
        self
    }
}

impl CubeState {
    /// Every facelet unpainted, the starting point for entering a cube by hand.
    pub fn blank() -> CubeState {
        CubeState {
            edges: [StickerTuple::BLANK; EDGE_COUNT],
            corners: [StickerTuple::BLANK; CORNER_COUNT],
        }
    }

    /// Builds a cube from the flattened solver order: edges then corners.
    pub fn from_stickers(stickers: [StickerTuple; SLOT_COUNT]) -> CubeState {
        let mut cube = CubeState::blank();
        for (slot, tuple) in Slot::all().zip(stickers) {
            *cube.tuple_mut(slot) = tuple;
        }
        cube
    }

    pub fn stickers(&self) -> [StickerTuple; SLOT_COUNT] {
        let mut stickers = [StickerTuple::BLANK; SLOT_COUNT];
        for slot in Slot::all() {
            stickers[slot.index()] = self.get(slot);
        }
        stickers
    }

    pub fn edges(&self) -> &[StickerTuple; EDGE_COUNT] {
        &self.edges
    }

    pub fn corners(&self) -> &[StickerTuple; CORNER_COUNT] {
        &self.corners
    }

    pub fn get(&self, slot: Slot) -> StickerTuple {
        match slot {
            Slot::Edge(i) => self.edges[i],
            Slot::Corner(i) => self.corners[i],
        }
    }

    fn tuple_mut(&mut self, slot: Slot) -> &mut StickerTuple {
        match slot {
            Slot::Edge(i) => &mut self.edges[i],
            Slot::Corner(i) => &mut self.corners[i],
        }
    }

    pub fn paint(&mut self, slot: Slot, axis: Axis, color: Color) {
        self.tuple_mut(slot).set(axis, color);
    }

    /// Whether every outward facelet shows its face's solved color. Interior
    /// facelets are ignored.
    pub fn is_solved(&self) -> bool {
        Slot::all().all(|slot| {
            let tuple = self.get(slot);
            Axis::all().all(|axis| match slot.face_for_axis(axis) {
                Some(face) => tuple.get(axis) == Color::of_face(face),
                None => true,
            })
        })
    }

    /// Turns `face` by `quarters` clockwise quarter turns (negative is
    /// counter-clockwise). Any multiple of four is a no-op.
    pub fn apply_turn(&mut self, face: Face, quarters: i8) {
        let shift = (4 - quarters as i32).rem_euclid(4) as usize;
        if shift == 0 {
            return;
        }

        let spec = faces_of(face);
        // A half turn maps each non-anchor axis back onto itself.
        let reorient = (shift != 2).then_some(spec.anchor_axis);

        cycle(&mut self.edges, &spec.edge_slots, shift, reorient);
        cycle(&mut self.corners, &spec.corner_slots, shift, reorient);
    }
}

/// Moves the tuple at cycle position `i` to position `i + shift`. All four
/// sources are read before any destination is written.
fn cycle(
    tuples: &mut [StickerTuple],
    slots: &[usize; 4],
    shift: usize,
    reorient: Option<Axis>,
) {
    let before = slots.map(|s| tuples[s]);
    for (i, tuple) in before.into_iter().enumerate() {
        let tuple = match reorient {
            Some(anchor) => tuple.reoriented(anchor),
            None => tuple,
        };
        tuples[slots[(i + shift) % 4]] = tuple;
    }
}

impl std::fmt::Display for CubeState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for slot in Slot::all() {
            writeln!(f, "{:<4}{:<5}{}", slot.to_string(), slot.label(), self.get(slot))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solved_reports_solved() {
        assert!(CubeState::solved().is_solved());
        assert!(!cube_with_moves("R").is_solved());
    }

    #[test]
    fn blank_is_not_solved() {
        assert!(!CubeState::blank().is_solved());
    }

    #[test]
    fn right_turn_brings_front_to_top() {
        let cube = cube_with_moves("R");
        for slot in [Slot::Edge(1), Slot::Corner(0), Slot::Corner(1)] {
            assert_eq!(cube.get(slot).get(Axis::Y), Color::Yellow, "{}", slot);
        }
        // The left layer is untouched.
        assert_eq!(cube.get(Slot::Edge(3)), CubeState::solved().get(Slot::Edge(3)));
    }

    #[test]
    fn up_turn_brings_right_to_front() {
        let cube = cube_with_moves("U");
        assert_eq!(cube.get(Slot::Edge(0)).get(Axis::Z), Color::Orange);
        assert_eq!(cube.get(Slot::Edge(0)).get(Axis::Y), Color::Blue);
        assert_eq!(cube.get(Slot::Edge(0)).get(Axis::X), Color::Blank);
    }

    #[test]
    fn half_turn_does_not_reorient() {
        let cube = cube_with_moves("F2");
        // UF and DF trade places; their stickers stay on the same axes.
        assert_eq!(
            cube.get(Slot::Edge(0)),
            StickerTuple::new(Color::Blank, Color::Green, Color::Yellow)
        );
        assert_eq!(
            cube.get(Slot::Edge(4)),
            StickerTuple::new(Color::Blank, Color::Blue, Color::Yellow)
        );
    }

    #[test]
    fn zero_and_full_turns_are_noops() {
        for face in Face::all() {
            for quarters in [0, 4, -4, 8] {
                let mut cube = cube_with_moves("R U F'");
                let before = cube.clone();
                cube.apply_turn(face, quarters);
                assert_eq!(cube, before);
            }
        }
    }

    #[test]
    fn quarter_turn_four_times_is_identity() {
        for face in Face::all() {
            let mut cube = cube_with_moves("L D2 B' R");
            let before = cube.clone();
            for _ in 0..4 {
                cube.apply_turn(face, 1);
            }
            assert_eq!(cube, before, "{}", face);
        }
    }

    #[test]
    fn half_turn_twice_is_identity() {
        for face in Face::all() {
            let mut cube = cube_with_moves("U' F R2");
            let before = cube.clone();
            cube.apply_turn(face, 2);
            cube.apply_turn(face, 2);
            assert_eq!(cube, before, "{}", face);
        }
    }

    #[test]
    fn sexy_move_six_times_is_identity() {
        let moves = Move::parse_sequence("R U R' U'").unwrap();
        let cube = (0..6).fold(CubeState::solved(), |cube, _| cube.apply_all(moves.clone()));
        assert_eq!(cube, CubeState::solved());
    }

    #[test]
    fn stickers_round_trip() {
        let cube = cube_with_moves("B L2 D' F U");
        assert_eq!(CubeState::from_stickers(cube.stickers()), cube);
    }

    #[test]
    fn stickers_are_in_solver_order() {
        let cube = CubeState::solved();
        let stickers = cube.stickers();
        assert_eq!(stickers[0], cube.get(Slot::Edge(0)));
        assert_eq!(stickers[12], cube.get(Slot::Corner(0)));
        assert_eq!(stickers[19], cube.get(Slot::Corner(7)));
    }

    #[test]
    fn paint_sets_one_facelet() {
        let mut cube = CubeState::blank();
        cube.paint(Slot::Corner(2), Axis::X, Color::Red);
        assert_eq!(
            cube.get(Slot::Corner(2)),
            StickerTuple::new(Color::Red, Color::Blank, Color::Blank)
        );
    }

    #[test]
    fn display_lists_every_slot() {
        let text = CubeState::solved().to_string();
        assert_eq!(text.lines().count(), SLOT_COUNT);
        assert!(text.starts_with("E0  UF   [black blue yellow]"));
    }

    #[quickcheck]
    fn turns_preserve_sticker_census(moves: Vec<Move>) -> bool {
        sticker_census(&CubeState::solved().apply_all(moves))
            == sticker_census(&CubeState::solved())
    }

    #[quickcheck]
    fn inverse_turn_undoes(moves: Vec<Move>, face: Face, quarters: i8) -> bool {
        let mut cube = CubeState::solved().apply_all(moves);
        let before = cube.clone();
        cube.apply_turn(face, quarters);
        cube.apply_turn(face, quarters.wrapping_neg());
        cube == before
    }
}
