use bevy::prelude::*;

/// Movement direction bound to a pair of keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
    Left,
    Right,
}

/// Two synonyms per direction: arrow key and letter key.
pub const KEY_BINDINGS: [(KeyCode, Direction); 8] = [
    (KeyCode::ArrowUp, Direction::Forward),
    (KeyCode::KeyW, Direction::Forward),
    (KeyCode::ArrowDown, Direction::Backward),
    (KeyCode::KeyS, Direction::Backward),
    (KeyCode::ArrowLeft, Direction::Left),
    (KeyCode::KeyA, Direction::Left),
    (KeyCode::ArrowRight, Direction::Right),
    (KeyCode::KeyD, Direction::Right),
];

/// Which directions are currently held.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementInput {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl MovementInput {
    /// Apply a key press or release. Returns false for unbound keys, which are ignored.
    pub fn apply_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        let Some(direction) = direction_for(key) else {
            return false;
        };

        match direction {
            Direction::Forward => self.forward = pressed,
            Direction::Backward => self.backward = pressed,
            Direction::Left => self.left = pressed,
            Direction::Right => self.right = pressed,
        }
        true
    }

    pub fn any(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }
}

pub fn direction_for(key: KeyCode) -> Option<Direction> {
    KEY_BINDINGS
        .iter()
        .find(|(bound, _)| *bound == key)
        .map(|(_, direction)| *direction)
}

/// Rebuild [`MovementInput`] from the keys held this frame.
/// Keys already down when the system starts running still count.
pub fn keyboard_movement_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut movement: ResMut<MovementInput>,
) {
    let mut next = MovementInput::default();
    for (key, _) in KEY_BINDINGS {
        if keyboard.pressed(key) {
            next.apply_key(key, true);
        }
    }

    // Avoid tripping change detection while nothing changes.
    if next != *movement {
        *movement = next;
    }
}
