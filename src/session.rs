//! One visualization session: the cube, its animator and the sequence being
//! played, with the mode rules that keep gestures and playback apart.

use crate::prelude::*;

use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionMode {
    /// Free turning by pointer gestures.
    Interactive,
    /// Painting facelets of a blank cube.
    Input,
    /// Stepping through a solution.
    Playback,
    /// Playing a scramble through to its end.
    Scramble,
}

#[derive(Debug)]
pub struct Session {
    cube: CubeState,
    animator: TurnAnimator,
    navigator: Option<SequenceNavigator>,
    mode: SessionMode,
}

impl Default for Session {
    fn default() -> Self {
        Session::new(AnimationConfig::default())
    }
}

impl Session {
    pub fn new(config: AnimationConfig) -> Self {
        Session {
            cube: CubeState::solved(),
            animator: TurnAnimator::new(config),
            navigator: None,
            mode: SessionMode::Interactive,
        }
    }

    pub fn cube(&self) -> &CubeState {
        &self.cube
    }

    pub fn animator(&self) -> &TurnAnimator {
        &self.animator
    }

    pub fn navigator(&self) -> Option<&SequenceNavigator> {
        self.navigator.as_ref()
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    /// Camera input must be ignored while a gesture holds a face.
    pub fn camera_locked(&self) -> bool {
        self.animator.is_gesture_active()
    }

    fn set_mode(&mut self, mode: SessionMode) {
        if self.mode != mode {
            log::info!("Session mode {:?} -> {:?}", self.mode, mode);
            self.mode = mode;
        }
    }

    fn require_mode(&self, allowed: &[SessionMode]) -> Result<(), SessionError> {
        if allowed.contains(&self.mode) {
            Ok(())
        } else {
            log::warn!("Rejected request in {:?} mode", self.mode);
            Err(SessionError::WrongMode(self.mode))
        }
    }

    fn require_slot(&self, slot: Slot) -> Result<(), SessionError> {
        if slot.is_valid() {
            Ok(())
        } else {
            log::warn!("Rejected unknown slot {}", slot);
            Err(SessionError::UnknownSlot(slot))
        }
    }

    fn require_idle(&self) -> Result<(), SessionError> {
        if self.animator.is_idle() {
            Ok(())
        } else {
            Err(TurnError::Busy.into())
        }
    }

    /// Starts playing `moves` from the current cube, as a solution
    /// (`Playback`) or a scramble (`Scramble`).
    pub fn load_sequence(&mut self, moves: Vec<Move>, mode: SessionMode) -> Result<(), SessionError> {
        if !matches!(mode, SessionMode::Playback | SessionMode::Scramble) {
            return Err(SessionError::WrongMode(mode));
        }
        self.require_mode(&[SessionMode::Interactive, SessionMode::Input])?;
        self.require_idle()?;

        log::info!("Loaded {} moves: {}", moves.len(), Move::format_sequence(&moves));
        self.navigator = Some(SequenceNavigator::new(moves));
        self.set_mode(mode);
        Ok(())
    }

    /// Generates a scramble and starts playing it.
    pub fn scramble(&mut self, rng: &mut impl Rng) -> Result<Vec<Move>, SessionError> {
        let moves = Move::scramble(rng);
        self.load_sequence(moves.clone(), SessionMode::Scramble)?;
        Ok(moves)
    }

    pub fn step_forward(&mut self) -> Result<bool, SessionError> {
        self.require_mode(&[SessionMode::Playback, SessionMode::Scramble])?;
        let navigator = match self.navigator.as_mut() {
            Some(n) => n,
            None => return Err(SessionError::WrongMode(self.mode)),
        };
        Ok(navigator.step_forward(&mut self.animator)?)
    }

    pub fn rollback(&mut self) -> Result<bool, SessionError> {
        self.require_mode(&[SessionMode::Playback, SessionMode::Scramble])?;
        let navigator = match self.navigator.as_mut() {
            Some(n) => n,
            None => return Err(SessionError::WrongMode(self.mode)),
        };
        Ok(navigator.rollback(&mut self.animator)?)
    }

    /// Finishes the turn in progress at once, for scrubbing through steps.
    pub fn complete_animation(&mut self) -> Option<CommittedTurn> {
        let committed = self.animator.force_complete(&mut self.cube);
        self.finish_scramble();
        committed
    }

    /// Replays the last committed turn on screen. Only offered while turns
    /// are being played or made by hand.
    pub fn repeat(&mut self) -> Result<(), SessionError> {
        self.require_mode(&[SessionMode::Playback, SessionMode::Interactive])?;
        Ok(self.animator.repeat()?)
    }

    pub fn tick(&mut self) -> Option<CommittedTurn> {
        let dt = self.animator.config().tick_duration();
        self.advance(dt)
    }

    /// Advances the animation by `dt`. A scramble starts its next move by
    /// itself whenever the animator is idle.
    pub fn advance(&mut self, dt: Duration) -> Option<CommittedTurn> {
        if self.mode == SessionMode::Scramble && self.animator.is_idle() {
            if let Some(navigator) = self.navigator.as_mut() {
                if let Err(e) = navigator.step_forward(&mut self.animator) {
                    log::warn!("Scramble stalled: {}", e);
                }
            }
        }
        let committed = self.animator.advance(dt, &mut self.cube);
        self.finish_scramble();
        committed
    }

    fn finish_scramble(&mut self) {
        let done = self.mode == SessionMode::Scramble
            && self.animator.is_idle()
            && self.navigator.as_ref().map_or(true, |n| !n.can_step_forward());
        if done {
            self.navigator = None;
            self.set_mode(SessionMode::Interactive);
        }
    }

    /// Grabs the facelet on `axis` of `slot` and starts turning its face.
    pub fn begin_gesture(&mut self, slot: Slot, axis: Axis, button: Button) -> Result<Face, SessionError> {
        self.require_mode(&[SessionMode::Interactive])?;
        self.require_slot(slot)?;
        let face = slot
            .face_for_axis(axis)
            .ok_or(TurnError::InteriorFacelet { slot, axis })?;
        self.animator.begin_interactive(face, button)?;
        log::debug!("Gesture on {} {} turns {}", slot, axis, face);
        Ok(face)
    }

    pub fn drag_gesture(&mut self, angle: f64) {
        self.animator.set_drag_angle(angle);
    }

    /// Lets go of the grabbed face. Always commits the snapped turn, which
    /// may be no turn at all.
    pub fn release_gesture(&mut self) -> Option<CommittedTurn> {
        self.animator.release(&mut self.cube)
    }

    /// Replaces the cube with a blank one to be painted.
    pub fn enter_input_mode(&mut self) -> Result<(), SessionError> {
        self.require_mode(&[SessionMode::Interactive])?;
        self.require_idle()?;
        self.cube = CubeState::blank();
        self.set_mode(SessionMode::Input);
        Ok(())
    }

    pub fn paint(&mut self, slot: Slot, axis: Axis, color: Color) -> Result<(), SessionError> {
        self.require_mode(&[SessionMode::Input])?;
        self.require_slot(slot)?;
        self.cube.paint(slot, axis, color);
        Ok(())
    }

    /// Back to a solved cube with nothing playing.
    pub fn reset(&mut self) {
        let config = *self.animator.config();
        self.cube = CubeState::solved();
        self.animator = TurnAnimator::new(config);
        self.navigator = None;
        self.set_mode(SessionMode::Interactive);
    }

    /// Asks `solver` for a solution of the current cube and loads it for
    /// playback. A message from the solver is returned as an error and
    /// nothing is loaded. Returns the solution length.
    pub fn solve(&mut self, solver: &impl Solver) -> Result<usize, SessionError> {
        self.require_mode(&[SessionMode::Interactive, SessionMode::Input])?;
        self.require_idle()?;

        match solver.solve(&self.cube.stickers()) {
            Ok(SolverReply::Solution(moves)) => {
                let len = moves.len();
                self.load_sequence(moves, SessionMode::Playback)?;
                Ok(len)
            }
            Ok(SolverReply::Rejected(message)) => {
                log::warn!("Solver rejected cube: {}", message);
                Err(SessionError::Solver(message))
            }
            Err(e) => Err(SessionError::Transport(e)),
        }
    }

    /// Leaves playback, keeping the cube as it is.
    pub fn stop_playback(&mut self) -> Result<(), SessionError> {
        self.require_mode(&[SessionMode::Playback])?;
        self.animator.force_complete(&mut self.cube);
        self.navigator = None;
        self.set_mode(SessionMode::Interactive);
        Ok(())
    }
}
