//! Terminal accent palettes for the wizard.
//!
//! The palette state is session-scoped and owned by the caller; there is no
//! module-level mutable state. Every third advance resets to the default
//! palette, the rest cycle through the mood list in order.

use colored::Color;

/// One accent palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    pub accent: Color,
}

/// Palette used on reset and before the first advance.
pub const DEFAULT_PALETTE: Palette = Palette {
    name: "classic",
    accent: Color::White,
};

const MOODS: &[Palette] = &[
    Palette { name: "neon-orange", accent: Color::TrueColor { r: 0xFF, g: 0x33, b: 0x00 } },
    Palette { name: "neon-lime", accent: Color::TrueColor { r: 0xCC, g: 0xFF, b: 0x00 } },
    Palette { name: "cyan", accent: Color::TrueColor { r: 0x00, g: 0xD1, b: 0xFF } },
    Palette { name: "hot-pink", accent: Color::TrueColor { r: 0xFF, g: 0x69, b: 0xB4 } },
    Palette { name: "beige", accent: Color::TrueColor { r: 0xF5, g: 0xF5, b: 0xDC } },
    Palette { name: "pastel-purple", accent: Color::TrueColor { r: 0xB1, g: 0x9C, b: 0xD9 } },
    Palette { name: "dark", accent: Color::TrueColor { r: 0x88, g: 0x88, b: 0x88 } },
];

/// Session-scoped palette selection state.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaletteState {
    advances: usize,
}

impl PaletteState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance to the next palette and return it.
    pub fn advance(&mut self) -> Palette {
        self.advances += 1;
        self.current()
    }

    /// Palette selected by the current state.
    pub fn current(&self) -> Palette {
        if self.advances == 0 || self.advances % 3 == 0 {
            DEFAULT_PALETTE
        } else {
            MOODS[(self.advances - 1) % MOODS.len()]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_default() {
        assert_eq!(PaletteState::new().current(), DEFAULT_PALETTE);
    }

    #[test]
    fn test_every_third_advance_resets() {
        let mut state = PaletteState::new();
        let first = state.advance();
        let second = state.advance();
        assert_ne!(first, DEFAULT_PALETTE);
        assert_ne!(second, DEFAULT_PALETTE);
        assert_eq!(state.advance(), DEFAULT_PALETTE);
        assert_ne!(state.advance(), DEFAULT_PALETTE);
        assert_ne!(state.advance(), DEFAULT_PALETTE);
        assert_eq!(state.advance(), DEFAULT_PALETTE);
    }

    #[test]
    fn test_state_is_copyable_per_session() {
        let mut a = PaletteState::new();
        let b = a;
        a.advance();
        assert_eq!(b.current(), DEFAULT_PALETTE);
    }
}
