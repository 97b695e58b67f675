use bevy::prelude::*;
use constants::avatar::{AVATAR_START, MOVE_STEP, SWING_AMPLITUDE, SWING_RATE};

use crate::engine::input::movement::MovementInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gait {
    Idle,
    Walking,
}

/// Limb rotations about the X axis, in radians.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LimbPose {
    pub left_leg: f32,
    pub right_leg: f32,
    pub left_arm: f32,
    pub right_arm: f32,
}

impl LimbPose {
    /// Legs and arms swing in opposition and share one angle.
    pub fn from_swing(swing: f32) -> Self {
        Self {
            left_leg: swing,
            right_leg: -swing,
            left_arm: swing,
            right_arm: -swing,
        }
    }
}

/// Sole owner of the avatar's world position and walk animation state.
#[derive(Component, Debug, Clone)]
pub struct AvatarController {
    position: Vec3,
    phase: f32,
    pose: LimbPose,
    gait: Gait,
    step: f32,
}

impl Default for AvatarController {
    fn default() -> Self {
        Self::new(AVATAR_START)
    }
}

impl AvatarController {
    pub fn new(position: Vec3) -> Self {
        Self::with_step(position, MOVE_STEP)
    }

    pub fn with_step(position: Vec3, step: f32) -> Self {
        Self {
            position,
            phase: 0.0,
            pose: LimbPose::default(),
            gait: Gait::Idle,
            step,
        }
    }

    /// Advance one frame.
    ///
    /// Translation uses a fixed step per held direction and ignores `delta`;
    /// only the swing phase is time-scaled. Opposing directions cancel.
    pub fn tick(&mut self, input: &MovementInput, delta: f32) {
        if input.forward {
            self.position.z -= self.step;
        }
        if input.backward {
            self.position.z += self.step;
        }
        if input.left {
            self.position.x -= self.step;
        }
        if input.right {
            self.position.x += self.step;
        }

        if input.any() {
            self.gait = Gait::Walking;
            self.phase += delta * SWING_RATE;
            self.pose = LimbPose::from_swing(self.phase.sin() * SWING_AMPLITUDE);
        } else {
            self.gait = Gait::Idle;
            self.phase = 0.0;
            self.pose = LimbPose::default();
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    pub fn pose(&self) -> LimbPose {
        self.pose
    }

    pub fn gait(&self) -> Gait {
        self.gait
    }
}
