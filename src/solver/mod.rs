use crate::prelude::*;

pub mod json;

/// What a solver said about a cube.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverReply {
    Solution(Vec<Move>),
    /// The solver refused the cube, e.g. because it is already solved or not
    /// a legal position. Shown to the user, never played.
    Rejected(String),
}

/// Anything that can turn a sticker list into a solution. `Err` means the
/// solver could not be reached or answered garbage.
pub trait Solver {
    fn solve(&self, stickers: &[StickerTuple; SLOT_COUNT]) -> anyhow::Result<SolverReply>;
}

impl<F> Solver for F
where
    F: Fn(&[StickerTuple; SLOT_COUNT]) -> anyhow::Result<SolverReply>,
{
    fn solve(&self, stickers: &[StickerTuple; SLOT_COUNT]) -> anyhow::Result<SolverReply> {
        (self)(stickers)
    }
}

/// Answers by undoing a known scramble. Useful wherever a real solver is not
/// at hand.
#[derive(Debug, Clone)]
pub struct InverseSolver {
    scramble: Vec<Move>,
}

impl InverseSolver {
    pub fn new(scramble: Vec<Move>) -> Self {
        InverseSolver { scramble }
    }
}

impl Solver for InverseSolver {
    fn solve(&self, stickers: &[StickerTuple; SLOT_COUNT]) -> anyhow::Result<SolverReply> {
        let cube = CubeState::from_stickers(*stickers);
        if cube.is_solved() {
            return Ok(SolverReply::Rejected("Cube is already solved".to_string()));
        }
        if CubeState::solved().apply_all(self.scramble.clone()) != cube {
            return Ok(SolverReply::Rejected("Invalid cube".to_string()));
        }
        Ok(SolverReply::Solution(Move::inverse_seq(&self.scramble)))
    }
}
