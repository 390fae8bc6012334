//! Difficulty levels: starting fall speed and its ceiling

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Map a slider level (1..=3) to a difficulty; anything else is Easy
    pub fn from_level(level: u8) -> Self {
        match level {
            2 => Difficulty::Medium,
            3 => Difficulty::Hard,
            _ => Difficulty::Easy,
        }
    }

    pub fn level(&self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Fall speed at session start (pixels per tick)
    pub fn base_speed(&self) -> f32 {
        match self {
            Difficulty::Easy => 3.0,
            Difficulty::Medium => 5.0,
            Difficulty::Hard => 9.0,
        }
    }

    /// Fall speed is never ramped past this
    pub fn speed_ceiling(&self) -> f32 {
        match self {
            Difficulty::Easy => 9.0,
            Difficulty::Medium => 15.0,
            Difficulty::Hard => 24.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_level_defaults_to_easy() {
        assert_eq!(Difficulty::from_level(1), Difficulty::Easy);
        assert_eq!(Difficulty::from_level(2), Difficulty::Medium);
        assert_eq!(Difficulty::from_level(3), Difficulty::Hard);
        assert_eq!(Difficulty::from_level(0), Difficulty::Easy);
        assert_eq!(Difficulty::from_level(42), Difficulty::Easy);
    }

    #[test]
    fn test_level_round_trips() {
        for d in Difficulty::ALL {
            assert_eq!(Difficulty::from_level(d.level()), d);
            assert!(d.base_speed() < d.speed_ceiling());
        }
        assert_eq!(Difficulty::Hard.label(), "Hard");
    }
}
