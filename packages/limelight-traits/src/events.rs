//! Pointer event types delivered by the host's event loop.

use bitflags::bitflags;
use keyboard_types::Modifiers;

bitflags! {
    /// Which pointer buttons are held during an event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PointerButtons: u8 {
        const PRIMARY = 1 << 0;
        const SECONDARY = 1 << 1;
        const AUXILIARY = 1 << 2;
    }
}

/// A pointer movement, in viewport coordinates.
///
/// The highlight engine only reads `x`/`y`; button and modifier state ride
/// along so hosts can hand their native event through unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    pub x: f64,
    pub y: f64,
    pub buttons: PointerButtons,
    pub mods: Modifiers,
}

impl PointerEvent {
    /// A plain movement with no buttons or modifiers held.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            buttons: PointerButtons::empty(),
            mods: Modifiers::empty(),
        }
    }
}
