use crate::core::error::RaceError;
use serde::Deserialize;

pub const MIN_PUSH_LEVEL: u8 = 1;
pub const MAX_PUSH_LEVEL: u8 = 5;
pub const BALANCED: PushLevel = PushLevel(3);

/// PushLevel is a driving intensity between 1 (tyre saving) and 5 (flat out).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PushLevel(u8);

impl PushLevel {
    /// clamped maps any requested level onto the nearest valid one.
    pub fn clamped(level: i64) -> PushLevel {
        PushLevel(level.clamp(MIN_PUSH_LEVEL as i64, MAX_PUSH_LEVEL as i64) as u8)
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    fn idx(&self) -> usize {
        (self.0 - MIN_PUSH_LEVEL) as usize
    }
}

impl Default for PushLevel {
    fn default() -> Self {
        BALANCED
    }
}

/// * `name` - Label shown to the player
/// * `pace_effect` - Multiplier on speed
/// * `tyre_effect` - Multiplier on tyre degradation
#[derive(Debug, Deserialize, Clone)]
pub struct PushLevelPars {
    pub name: String,
    pub pace_effect: f64,
    pub tyre_effect: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PushLevelTable {
    levels: [PushLevelPars; MAX_PUSH_LEVEL as usize],
}

impl PushLevelTable {
    pub fn new(levels: [PushLevelPars; MAX_PUSH_LEVEL as usize]) -> PushLevelTable {
        PushLevelTable { levels }
    }

    pub fn get(&self, level: PushLevel) -> &PushLevelPars {
        &self.levels[level.idx()]
    }

    pub fn validate(&self) -> Result<(), RaceError> {
        for pars in self.levels.iter() {
            if !(pars.pace_effect >= 0.0 && pars.pace_effect.is_finite())
                || !(pars.tyre_effect >= 0.0 && pars.tyre_effect.is_finite())
            {
                return Err(RaceError::InvalidRacePars(format!(
                    "effects of push level {} must be finite and not negative",
                    pars.name
                )));
            }
        }
        Ok(())
    }
}

impl Default for PushLevelTable {
    fn default() -> Self {
        let level = |name: &str, pace_effect, tyre_effect| PushLevelPars {
            name: name.to_owned(),
            pace_effect,
            tyre_effect,
        };

        PushLevelTable::new([
            level("Conserve", 0.94, 0.6),
            level("Light", 0.97, 0.8),
            level("Balanced", 1.0, 1.0),
            level("Push", 1.03, 1.3),
            level("Attack", 1.05, 1.6),
        ])
    }
}
