//! Input suppression gate.
//!
//! Three independent channels (mouse movement, mouse buttons, keys), each
//! with a persistent suppress flag and a one-shot flag. The one-shot flag
//! consumes itself after suppressing exactly one event. The gate only
//! decides; actually preventing default behavior and stopping propagation
//! is the host's job, driven by the returned [`Disposition`].

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// A pointer event as delivered by the host, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub x: f64,
    pub y: f64,
    /// Button index for down/up events; 0 for plain movement.
    pub button: u8,
}

impl PointerEvent {
    #[must_use]
    pub fn at(x: f64, y: f64) -> Self {
        Self { x, y, button: 0 }
    }
}

/// A keyboard event as delivered by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    /// Key name as the host reports it (e.g. `"KeyQ"`, `"Escape"`).
    pub code: String,
}

impl KeyEvent {
    #[must_use]
    pub fn new(code: &str) -> Self {
        Self { code: code.to_string() }
    }
}

/// Whether a gated event should reach the underlying handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Forward to the underlying handler.
    Forwarded,
    /// Consume the event: prevent default and stop further listeners.
    Suppressed,
}

impl Disposition {
    #[must_use]
    pub fn is_suppressed(self) -> bool {
        self == Self::Suppressed
    }
}

/// Persistent + one-shot suppress flags for one channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GateFlags {
    pub persistent: bool,
    pub once: bool,
}

impl GateFlags {
    /// Decide one event, consuming the one-shot flag if set.
    fn pass(&mut self) -> Disposition {
        if self.persistent || self.once {
            self.once = false;
            Disposition::Suppressed
        } else {
            Disposition::Forwarded
        }
    }
}

/// The three-channel input gate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputGate {
    pub movement: GateFlags,
    pub buttons: GateFlags,
    pub keys: GateFlags,
}

impl InputGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gate a mouse-movement event.
    pub fn pass_movement(&mut self) -> Disposition {
        self.movement.pass()
    }

    /// Gate a mouse-button event (down or up share the channel).
    pub fn pass_buttons(&mut self) -> Disposition {
        self.buttons.pass()
    }

    /// Gate a key event (down or up share the channel).
    pub fn pass_keys(&mut self) -> Disposition {
        self.keys.pass()
    }
}
