use crate::prelude::*;

/// A move list and a cursor over it. `step` moves have been handed to the
/// animator; once it is idle, they have all been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceNavigator {
    sequence: Vec<Move>,
    step: usize,
}

impl SequenceNavigator {
    pub fn new(sequence: Vec<Move>) -> Self {
        SequenceNavigator { sequence, step: 0 }
    }

    pub fn sequence(&self) -> &[Move] {
        &self.sequence
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.len() - self.step
    }

    pub fn can_step_forward(&self) -> bool {
        self.step < self.len()
    }

    pub fn can_rollback(&self) -> bool {
        self.step > 0
    }

    /// Starts the next move. Returns `Ok(false)` at the end of the sequence.
    pub fn step_forward(&mut self, animator: &mut TurnAnimator) -> Result<bool, TurnError> {
        let move_ = match self.sequence.get(self.step) {
            Some(m) => *m,
            None => return Ok(false),
        };
        animator.begin_scripted(move_.face, move_.quarters())?;
        self.step += 1;
        log::debug!("Stepped forward over {} to {}/{}", move_, self.step, self.len());
        Ok(true)
    }

    /// Starts undoing the previous move. Returns `Ok(false)` at the start of
    /// the sequence.
    pub fn rollback(&mut self, animator: &mut TurnAnimator) -> Result<bool, TurnError> {
        if self.step == 0 {
            return Ok(false);
        }
        let move_ = self.sequence[self.step - 1];
        animator.begin_scripted(move_.face, -move_.quarters())?;
        self.step -= 1;
        log::debug!("Rolled back over {} to {}/{}", move_, self.step, self.len());
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn navigator(moves: &str) -> SequenceNavigator {
        SequenceNavigator::new(Move::parse_sequence(moves).unwrap())
    }

    fn forward(nav: &mut SequenceNavigator, animator: &mut TurnAnimator, cube: &mut CubeState) -> bool {
        let moved = nav.step_forward(animator).unwrap();
        animator.force_complete(cube);
        moved
    }

    fn back(nav: &mut SequenceNavigator, animator: &mut TurnAnimator, cube: &mut CubeState) -> bool {
        let moved = nav.rollback(animator).unwrap();
        animator.force_complete(cube);
        moved
    }

    #[test]
    fn forward_applies_prefix() {
        let mut nav = navigator("R U' F2 L");
        let mut animator = TurnAnimator::default();
        let mut cube = CubeState::solved();

        for step in 1..=nav.len() {
            assert!(forward(&mut nav, &mut animator, &mut cube));
            assert_eq!(nav.step(), step);
            let prefix = nav.sequence()[..step].to_vec();
            assert_eq!(cube, CubeState::solved().apply_all(prefix));
        }
    }

    #[test]
    fn step_forward_at_end_is_noop() {
        let mut nav = navigator("R U");
        let mut animator = TurnAnimator::default();
        let mut cube = CubeState::solved();
        forward(&mut nav, &mut animator, &mut cube);
        forward(&mut nav, &mut animator, &mut cube);
        let before = cube.clone();

        assert!(!nav.can_step_forward());
        assert!(!forward(&mut nav, &mut animator, &mut cube));
        assert_eq!(nav.step(), 2);
        assert_eq!(cube, before);
        assert!(animator.is_idle());
    }

    #[test]
    fn rollback_at_start_is_noop() {
        let mut nav = navigator("F");
        let mut animator = TurnAnimator::default();
        let mut cube = CubeState::solved();
        assert!(!nav.can_rollback());
        assert!(!back(&mut nav, &mut animator, &mut cube));
        assert_eq!(nav.step(), 0);
        assert_eq!(cube, CubeState::solved());
    }

    #[test]
    fn rollback_inverts_prime_moves() {
        let mut nav = navigator("U'");
        let mut animator = TurnAnimator::default();
        let mut cube = CubeState::solved();
        forward(&mut nav, &mut animator, &mut cube);
        nav.rollback(&mut animator).unwrap();
        assert_eq!(animator.turn().map(|t| t.quarters), Some(1));
        animator.force_complete(&mut cube);
        assert_eq!(cube, CubeState::solved());
    }

    #[test]
    fn busy_animator_keeps_cursor() {
        let mut nav = navigator("R U");
        let mut animator = TurnAnimator::default();
        nav.step_forward(&mut animator).unwrap();
        assert_eq!(nav.step_forward(&mut animator), Err(TurnError::Busy));
        assert_eq!(nav.rollback(&mut animator), Err(TurnError::Busy));
        assert_eq!(nav.step(), 1);
    }

    #[test]
    fn empty_sequence_never_moves() {
        let mut nav = SequenceNavigator::new(Vec::new());
        let mut animator = TurnAnimator::default();
        assert!(nav.is_empty());
        assert_eq!(nav.step_forward(&mut animator), Ok(false));
        assert_eq!(nav.rollback(&mut animator), Ok(false));
        assert!(animator.is_idle());
    }

    #[quickcheck]
    fn rollback_then_forward_restores(moves: Vec<Move>, k: usize) -> bool {
        let k = if moves.is_empty() { 0 } else { k % (moves.len() + 1) };
        let mut nav = SequenceNavigator::new(moves);
        let mut animator = TurnAnimator::default();
        let mut cube = CubeState::solved();
        for _ in 0..k {
            forward(&mut nav, &mut animator, &mut cube);
        }
        let at_k = cube.clone();

        for _ in 0..k {
            back(&mut nav, &mut animator, &mut cube);
        }
        let back_at_start = cube == CubeState::solved() && nav.step() == 0;
        for _ in 0..k {
            forward(&mut nav, &mut animator, &mut cube);
        }
        back_at_start && cube == at_k && nav.step() == k
    }
}
