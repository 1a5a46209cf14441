//! Per-frame keyboard intent, as sampled by the host.

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Escape,
}

impl Key {
    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// The set of keys held down during one frame.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    down: u8,
}

impl InputSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: Key) -> Self {
        self.press(key);
        self
    }

    pub fn press(&mut self, key: Key) {
        self.down |= key.bit();
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.down & key.bit() != 0
    }

    /// Down now, up in `previous`.
    pub fn just_pressed(&self, previous: &InputSnapshot, key: Key) -> bool {
        self.is_down(key) && !previous.is_down(key)
    }
}
