use crate::core::error::RaceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const WEAR_FRESH: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Compound {
    Soft,
    Medium,
    Hard,
}

impl Compound {
    pub fn name(&self) -> &'static str {
        match self {
            Compound::Soft => "Soft",
            Compound::Medium => "Medium",
            Compound::Hard => "Hard",
        }
    }
}

impl fmt::Display for Compound {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Compound {
    type Err = RaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "SOFT" | "S" => Ok(Compound::Soft),
            "MEDIUM" | "M" => Ok(Compound::Medium),
            "HARD" | "H" => Ok(Compound::Hard),
            _ => Err(RaceError::UnknownCompound(s.to_owned())),
        }
    }
}

/// * `grip` - Pace multiplier of the compound
/// * `degradation_rate` - (%/tick) Wear lost per tick at push level effect 1.0
/// * `pit_wear_threshold` - (%) AI cars ask for a stop once wear drops below this value
#[derive(Debug, Deserialize, Clone)]
pub struct CompoundPars {
    pub grip: f64,
    pub degradation_rate: f64,
    pub pit_wear_threshold: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TyreConfig {
    pub soft: CompoundPars,
    pub medium: CompoundPars,
    pub hard: CompoundPars,
}

impl Default for TyreConfig {
    fn default() -> Self {
        TyreConfig {
            soft: CompoundPars {
                grip: 1.0,
                degradation_rate: 0.012,
                pit_wear_threshold: 30.0,
            },
            medium: CompoundPars {
                grip: 0.97,
                degradation_rate: 0.008,
                pit_wear_threshold: 25.0,
            },
            hard: CompoundPars {
                grip: 0.94,
                degradation_rate: 0.005,
                pit_wear_threshold: 20.0,
            },
        }
    }
}

impl TyreConfig {
    pub fn for_compound(&self, compound: Compound) -> &CompoundPars {
        match compound {
            Compound::Soft => &self.soft,
            Compound::Medium => &self.medium,
            Compound::Hard => &self.hard,
        }
    }

    /// mount_tyre looks the compound constants up once and returns a fresh, independent tyre.
    pub fn mount_tyre(&self, compound: Compound) -> TyreState {
        let pars = self.for_compound(compound);
        TyreState {
            compound,
            grip: pars.grip,
            degradation_rate: pars.degradation_rate,
            wear: WEAR_FRESH,
        }
    }

    pub fn pit_wear_threshold(&self, compound: Compound) -> f64 {
        self.for_compound(compound).pit_wear_threshold
    }

    /// validate rejects negative or non-finite grip and degradation, which would drive cars
    /// backwards or regrow the tread.
    pub fn validate(&self) -> Result<(), RaceError> {
        for compound in [Compound::Soft, Compound::Medium, Compound::Hard] {
            let pars = self.for_compound(compound);
            if !(pars.grip >= 0.0 && pars.grip.is_finite())
                || !(pars.degradation_rate >= 0.0 && pars.degradation_rate.is_finite())
            {
                return Err(RaceError::InvalidRacePars(format!(
                    "grip and degradation_rate of {} must be finite and not negative",
                    compound
                )));
            }
        }
        Ok(())
    }
}

/// TyreState is the tyre currently mounted on a car. Grip and degradation are copies of the
/// compound table at mounting time.
#[derive(Debug, Clone, PartialEq)]
pub struct TyreState {
    pub compound: Compound,
    pub grip: f64,
    pub degradation_rate: f64,
    wear: f64,
}

impl TyreState {
    /// wear is the remaining tread in percent, 100 is a fresh tyre.
    pub fn wear(&self) -> f64 {
        self.wear
    }

    /// degrade removes the wear of one tick, wear never drops below 0.
    pub fn degrade(&mut self, tyre_effect: f64) {
        self.wear = (self.wear - self.degradation_rate * tyre_effect).clamp(0.0, WEAR_FRESH);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn parses_compound_names_case_insensitively() {
        assert_eq!("soft".parse::<Compound>().unwrap(), Compound::Soft);
        assert_eq!(" Medium ".parse::<Compound>().unwrap(), Compound::Medium);
        assert_eq!("H".parse::<Compound>().unwrap(), Compound::Hard);
        assert_eq!(
            "intermediate".parse::<Compound>().unwrap_err(),
            RaceError::UnknownCompound(String::from("intermediate"))
        );
    }

    #[test]
    fn mounted_tyre_does_not_follow_table_changes() {
        let mut tyre_config = TyreConfig::default();
        let tyre = tyre_config.mount_tyre(Compound::Soft);
        tyre_config.soft.grip = 2.0;

        assert_relative_eq!(tyre.grip, 1.0);
        assert_relative_eq!(tyre.wear(), WEAR_FRESH);
    }

    #[test]
    fn wear_is_clamped_at_zero() {
        let mut tyre = TyreConfig::default().mount_tyre(Compound::Hard);
        tyre.degradation_rate = 30.0;
        for _ in 0..5 {
            tyre.degrade(1.0);
        }
        assert_relative_eq!(tyre.wear(), 0.0);
    }

    #[test]
    fn negative_grip_or_degradation_is_rejected() {
        assert!(TyreConfig::default().validate().is_ok());

        let mut tyre_config = TyreConfig::default();
        tyre_config.medium.grip = -0.97;
        assert!(tyre_config.validate().is_err());

        let mut tyre_config = TyreConfig::default();
        tyre_config.hard.degradation_rate = f64::NAN;
        assert!(tyre_config.validate().is_err());
    }

    #[test]
    fn fragile_compounds_pit_earlier() {
        let tyre_config = TyreConfig::default();
        assert!(
            tyre_config.pit_wear_threshold(Compound::Soft)
                > tyre_config.pit_wear_threshold(Compound::Hard)
        );
    }
}
