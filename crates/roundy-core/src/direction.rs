//! Sweep directions and the injected direction source.

/// Grid axis a sweep walks along.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Axis {
    Rows,
    Columns,
}

/// Direction a sweep travels across the grid.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Direction {
    #[default]
    TopToBottom,
    LeftToRight,
    BottomToTop,
    RightToLeft,
}

impl Direction {
    pub const ALL: [Self; 4] = [
        Self::TopToBottom,
        Self::LeftToRight,
        Self::BottomToTop,
        Self::RightToLeft,
    ];

    /// Axis whose index the sweep advances.
    pub const fn axis(self) -> Axis {
        match self {
            Self::TopToBottom | Self::BottomToTop => Axis::Rows,
            Self::LeftToRight | Self::RightToLeft => Axis::Columns,
        }
    }

    /// Whether the sweep starts from the far end of its axis.
    pub const fn reversed(self) -> bool {
        matches!(self, Self::BottomToTop | Self::RightToLeft)
    }

    pub const fn is_vertical(self) -> bool {
        matches!(self.axis(), Axis::Rows)
    }

    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::TopToBottom),
            1 => Some(Self::LeftToRight),
            2 => Some(Self::BottomToTop),
            3 => Some(Self::RightToLeft),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TopToBottom => "top-to-bottom",
            Self::LeftToRight => "left-to-right",
            Self::BottomToTop => "bottom-to-top",
            Self::RightToLeft => "right-to-left",
        }
    }
}

/// Picks the direction for the next sweep.
///
/// The watchface asks once per activation; hosts back this with a random
/// source, tests with [`FixedDirection`].
pub trait DirectionSource {
    fn next_direction(&mut self) -> Direction;
}

/// Always yields the same direction.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FixedDirection(pub Direction);

impl DirectionSource for FixedDirection {
    fn next_direction(&mut self) -> Direction {
        self.0
    }
}

/// Cycles through [`Direction::ALL`] in order.
#[cfg(test)]
#[derive(Clone, Copy, Debug, Default)]
pub struct CyclingDirection {
    next: u8,
}

#[cfg(test)]
impl DirectionSource for CyclingDirection {
    fn next_direction(&mut self) -> Direction {
        let direction = Direction::ALL[self.next as usize % Direction::ALL.len()];
        self.next = self.next.wrapping_add(1);
        direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_and_reversal_cover_all_four_directions() {
        assert_eq!(Direction::TopToBottom.axis(), Axis::Rows);
        assert_eq!(Direction::BottomToTop.axis(), Axis::Rows);
        assert_eq!(Direction::LeftToRight.axis(), Axis::Columns);
        assert_eq!(Direction::RightToLeft.axis(), Axis::Columns);

        assert!(!Direction::TopToBottom.reversed());
        assert!(!Direction::LeftToRight.reversed());
        assert!(Direction::BottomToTop.reversed());
        assert!(Direction::RightToLeft.reversed());
    }

    #[test]
    fn index_mapping_matches_all_order() {
        for (i, direction) in Direction::ALL.iter().enumerate() {
            assert_eq!(Direction::from_index(i as u8), Some(*direction));
        }
        assert_eq!(Direction::from_index(4), None);
    }

    #[test]
    fn cycling_source_visits_every_direction() {
        let mut source = CyclingDirection::default();
        let drawn: [Direction; 5] = core::array::from_fn(|_| source.next_direction());

        assert_eq!(&drawn[..4], &Direction::ALL);
        assert_eq!(drawn[4], Direction::TopToBottom);
    }
}
