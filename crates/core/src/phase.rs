//! Blink phases

use crate::{Color, PixelIndex};

/// The active half of the blink cycle.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub enum Phase {
    /// Even pixels are green, odd pixels are off.
    On,
    /// Even pixels are off, odd pixels are red.
    #[default]
    Off,
}

impl Phase {
    /// Returns the opposite phase.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::On => Self::Off,
            Self::Off => Self::On,
        }
    }

    /// Returns the pair of colors used to paint the strip during this phase.
    #[must_use]
    pub const fn colors(self) -> PhaseColors {
        match self {
            Self::On => PhaseColors {
                on: Color::GREEN,
                off: Color::BLACK,
            },
            Self::Off => PhaseColors {
                on: Color::BLACK,
                off: Color::RED,
            },
        }
    }
}

/// Colors of the even and odd pixels.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PhaseColors {
    /// Color of the even pixels.
    pub on: Color,
    /// Color of the odd pixels.
    pub off: Color,
}

impl PhaseColors {
    #[must_use]
    pub const fn color_for(self, index: PixelIndex) -> Color {
        if index.is_even() {
            self.on
        } else {
            self.off
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Phase;
    use crate::{Color, PixelIndex};

    fn paint(phase: Phase, len: u16) -> Vec<Color> {
        let colors = phase.colors();
        (0..len).map(|i| colors.color_for(PixelIndex(i))).collect()
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Phase::default(), Phase::Off);
        assert_eq!(Phase::Off.toggle(), Phase::On);
        assert_eq!(Phase::On.toggle(), Phase::Off);

        for phase in [Phase::On, Phase::Off] {
            assert_eq!(phase.toggle().toggle(), phase);
        }
    }

    #[test]
    fn test_on_phase_colors() {
        assert_eq!(
            paint(Phase::On, 4),
            [Color::GREEN, Color::BLACK, Color::GREEN, Color::BLACK]
        );
    }

    #[test]
    fn test_off_phase_colors() {
        assert_eq!(
            paint(Phase::Off, 4),
            [Color::BLACK, Color::RED, Color::BLACK, Color::RED]
        );
    }

    #[test]
    fn test_parity_rule() {
        for phase in [Phase::On, Phase::Off] {
            let colors = phase.colors();
            for (i, color) in paint(phase, 45).into_iter().enumerate() {
                let expected = if i % 2 == 0 { colors.on } else { colors.off };
                assert_eq!(color, expected, "pixel {i} in {phase:?}");
            }
        }
    }

    #[test]
    fn test_single_pixel() {
        assert_eq!(paint(Phase::On, 1), [Color::GREEN]);
        assert_eq!(paint(Phase::Off, 1), [Color::BLACK]);
    }
}
