//! Per-frame turn animation.
//!
//! A turn is either scripted (a move token driven to its exact target angle),
//! interactive (driven while a pointer gesture is held and snapped to the
//! nearest quarter turn on release) or a replay (a visual-only re-run of the
//! last committed turn). The cube is mutated exactly once per scripted or
//! interactive turn, at commit.

use crate::prelude::*;

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, TAU};

pub const QUARTER_TURN: f64 = FRAC_PI_2;

const SNAP_BUCKET: f64 = FRAC_PI_4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationConfig {
    /// Radians a quarter turn advances per tick. Half turns advance twice as
    /// fast so both take the same number of ticks.
    pub radians_per_tick: f64,
    pub tick_rate_hz: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        AnimationConfig {
            radians_per_tick: 0.01,
            tick_rate_hz: 60.0,
        }
    }
}

impl AnimationConfig {
    /// Scales the turn speed. A multiplier that is not a positive finite
    /// number would leave scripted turns short of their target forever.
    pub fn with_speed(self, multiplier: f64) -> Result<Self, ConfigError> {
        if !multiplier.is_finite() || multiplier <= 0.0 {
            return Err(ConfigError::InvalidSpeed(multiplier));
        }
        Ok(AnimationConfig {
            radians_per_tick: self.radians_per_tick * multiplier,
            ..self
        })
    }

    pub fn tick_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.tick_rate_hz)
    }

    fn step_for(&self, dt: Duration) -> f64 {
        self.radians_per_tick * dt.as_secs_f64() * self.tick_rate_hz
    }
}

/// Which pointer button started a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Primary,
    Secondary,
}

impl Button {
    /// Primary turns the grabbed face clockwise, secondary counter-clockwise.
    pub fn direction(self) -> i8 {
        match self {
            Button::Primary => 1,
            Button::Secondary => -1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnMode {
    Scripted,
    Interactive,
    Replay,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Turn {
    pub face: Face,
    /// Target quarter turns for scripted and replayed turns; the drive
    /// direction (±1) for interactive ones.
    pub quarters: i8,
    pub mode: TurnMode,
    /// Live rotation about the positive anchor axis, in radians.
    pub angle: f64,
}

impl Turn {
    /// Signed rotation rate about the positive anchor axis, in quarters.
    fn drive(&self) -> f64 {
        f64::from(self.face.visual_sign()) * f64::from(self.quarters)
    }

    fn target_angle(&self) -> f64 {
        self.drive() * QUARTER_TURN
    }

    fn has_target(&self) -> bool {
        self.mode != TurnMode::Interactive
    }

    fn resolved_quarters(&self) -> i8 {
        match self.mode {
            TurnMode::Scripted | TurnMode::Replay => self.quarters,
            TurnMode::Interactive => resolve_angle(self.face, self.angle),
        }
    }
}

/// A turn that has been applied to the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommittedTurn {
    pub face: Face,
    pub quarters: i8,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AnimatorState {
    Idle,
    Turning(Turn),
}

/// Snaps a rotation to whole quarter turns about the positive axis, in 0..4.
///
/// The circle is split into eight 45° buckets; each quarter-turn position
/// owns the bucket on either side of it.
pub fn snap_quarters(angle: f64) -> i8 {
    let normalized = angle.rem_euclid(TAU);
    let bucket = (normalized / SNAP_BUCKET).floor() as i64 % 8;
    match bucket {
        0 | 7 => 0,
        1 | 2 => 1,
        3 | 4 => 2,
        _ => 3,
    }
}

/// Clockwise quarter turns of `face` nearest to `angle`, in -1..=2.
pub fn resolve_angle(face: Face, angle: f64) -> i8 {
    normalize_quarters(snap_quarters(angle) * face.visual_sign())
}

fn normalize_quarters(quarters: i8) -> i8 {
    match quarters.rem_euclid(4) {
        3 => -1,
        q => q,
    }
}

/// Drops whole revolutions, keeping the direction of a half turn.
fn reduce_quarters(quarters: i8) -> i8 {
    match quarters % 4 {
        3 => -1,
        -3 => 1,
        q => q,
    }
}

#[derive(Debug, Clone)]
pub struct TurnAnimator {
    config: AnimationConfig,
    state: AnimatorState,
    last_turn: Option<CommittedTurn>,
}

impl Default for TurnAnimator {
    fn default() -> Self {
        TurnAnimator::new(AnimationConfig::default())
    }
}

impl TurnAnimator {
    pub fn new(config: AnimationConfig) -> Self {
        TurnAnimator {
            config,
            state: AnimatorState::Idle,
            last_turn: None,
        }
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    pub fn state(&self) -> &AnimatorState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == AnimatorState::Idle
    }

    pub fn turn(&self) -> Option<&Turn> {
        match &self.state {
            AnimatorState::Idle => None,
            AnimatorState::Turning(turn) => Some(turn),
        }
    }

    pub fn active_face(&self) -> Option<Face> {
        self.turn().map(|t| t.face)
    }

    pub fn rotation_axis(&self) -> Option<Axis> {
        self.active_face().map(Face::axis)
    }

    /// Live rotation of the turning group, zero when idle.
    pub fn angle(&self) -> f64 {
        self.turn().map_or(0.0, |t| t.angle)
    }

    pub fn is_gesture_active(&self) -> bool {
        self.turn().map_or(false, |t| t.mode == TurnMode::Interactive)
    }

    pub fn last_turn(&self) -> Option<CommittedTurn> {
        self.last_turn
    }

    fn require_idle(&self, mode: TurnMode, face: Option<Face>) -> Result<(), TurnError> {
        if let AnimatorState::Turning(turn) = &self.state {
            match face {
                Some(face) => log::warn!(
                    "Ignoring {:?} turn of {}, {} is still turning",
                    mode,
                    face,
                    turn.face
                ),
                None => log::warn!("Ignoring {:?} turn, {} is still turning", mode, turn.face),
            }
            return Err(TurnError::Busy);
        }
        Ok(())
    }

    fn begin(&mut self, face: Face, quarters: i8, mode: TurnMode) -> Result<(), TurnError> {
        self.require_idle(mode, Some(face))?;
        self.state = AnimatorState::Turning(Turn {
            face,
            quarters,
            mode,
            angle: 0.0,
        });
        Ok(())
    }

    /// Starts turning `face` by `quarters` clockwise quarter turns. Whole
    /// revolutions are dropped, so the turn animates at most a half turn.
    pub fn begin_scripted(&mut self, face: Face, quarters: i8) -> Result<(), TurnError> {
        self.begin(face, reduce_quarters(quarters), TurnMode::Scripted)
    }

    pub fn begin_interactive(&mut self, face: Face, button: Button) -> Result<(), TurnError> {
        self.begin(face, button.direction(), TurnMode::Interactive)
    }

    /// Re-runs the last committed turn on screen without touching the cube.
    pub fn repeat(&mut self) -> Result<(), TurnError> {
        self.require_idle(TurnMode::Replay, None)?;
        let last = self.last_turn.ok_or(TurnError::NothingToRepeat)?;
        self.begin(last.face, last.quarters, TurnMode::Replay)
    }

    /// Sets the angle of a held gesture directly, for pointer-drag input.
    pub fn set_drag_angle(&mut self, angle: f64) {
        if let AnimatorState::Turning(turn) = &mut self.state {
            if turn.mode == TurnMode::Interactive {
                turn.angle = angle;
            }
        }
    }

    pub fn tick(&mut self, cube: &mut CubeState) -> Option<CommittedTurn> {
        self.advance(self.config.tick_duration(), cube)
    }

    /// Moves the turn in progress forward by `dt`. Reaching a scripted target
    /// commits the turn within this call.
    pub fn advance(&mut self, dt: Duration, cube: &mut CubeState) -> Option<CommittedTurn> {
        let step = self.config.step_for(dt);
        let turn = match &mut self.state {
            AnimatorState::Idle => return None,
            AnimatorState::Turning(turn) => turn,
        };

        turn.angle += turn.drive() * step;

        if !turn.has_target() {
            return None;
        }
        let target = turn.target_angle();
        if turn.angle.abs() < target.abs() {
            return None;
        }
        turn.angle = target;
        self.finish(cube)
    }

    /// Ends a held gesture, committing the snapped turn. Does nothing unless a
    /// gesture is in progress.
    pub fn release(&mut self, cube: &mut CubeState) -> Option<CommittedTurn> {
        if !self.is_gesture_active() {
            return None;
        }
        self.finish(cube)
    }

    /// Completes the turn in progress immediately, as if it had reached its
    /// target.
    pub fn force_complete(&mut self, cube: &mut CubeState) -> Option<CommittedTurn> {
        self.finish(cube)
    }

    fn finish(&mut self, cube: &mut CubeState) -> Option<CommittedTurn> {
        let turn = match std::mem::replace(&mut self.state, AnimatorState::Idle) {
            AnimatorState::Idle => return None,
            AnimatorState::Turning(turn) => turn,
        };

        if turn.mode == TurnMode::Replay {
            log::debug!("Finished replay of {}", turn.face);
            return None;
        }

        let committed = CommittedTurn {
            face: turn.face,
            quarters: turn.resolved_quarters(),
        };
        cube.apply_turn(committed.face, committed.quarters);
        log::debug!(
            "Committed {:?} turn {} by {} quarters",
            turn.mode,
            committed.face,
            committed.quarters
        );
        self.last_turn = Some(committed);
        Some(committed)
    }
}
