use crate::core::car::CarPars;
use crate::core::push_level::PushLevelTable;
use crate::core::race::{RaceEngine, RacePars};
use crate::core::team::TeamPars;
use crate::core::tireset::TyreConfig;
use crate::core::track::{Track, TrackPars};
use anyhow::Context;
use serde::Deserialize;
use std::fs::OpenOptions;
use std::path::Path;

/// SimPars is used to store all other parameter structs.
#[derive(Debug, Deserialize, Clone)]
pub struct SimPars {
    pub race_pars: RacePars,
    pub track_pars: TrackPars,
    #[serde(default)]
    pub tyre_config: TyreConfig,
    #[serde(default)]
    pub push_levels: PushLevelTable,
    pub teams: Vec<TeamPars>,
    pub car_pars_all: Vec<CarPars>,
}

impl SimPars {
    /// build_race loads the track and sets up a race engine from the parameters.
    pub fn build_race(&self) -> anyhow::Result<RaceEngine> {
        let track = Track::from_pars(&self.track_pars)?;
        let race = RaceEngine::new(
            &self.race_pars,
            track,
            &self.tyre_config,
            &self.push_levels,
            &self.teams,
            &self.car_pars_all,
        )
        .context("Failed to set up the race!")?;
        Ok(race)
    }
}

/// read_sim_pars reads the JSON file and decodes the JSON string into the simulation parameters
/// struct.
pub fn read_sim_pars(filepath: &Path) -> anyhow::Result<SimPars> {
    let fh = OpenOptions::new()
        .read(true)
        .open(filepath)
        .context(format!(
            "Failed to open parameter file {}!",
            filepath.to_str().unwrap_or("unknown")
        ))?;
    let pars = serde_json::from_reader(&fh).context(format!(
        "Failed to parse parameter file {}!",
        filepath.to_str().unwrap_or("unknown")
    ))?;
    Ok(pars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tireset::Compound;

    const PARS: &str = r##"{
        "race_pars": { "tot_no_laps": 3, "first_gridpos": 3.0, "grid_spacing": 1.0, "seed": 7 },
        "track_pars": { "name": "Triangle", "points": [
            { "x": 0.0, "y": 0.0 }, { "x": 4.0, "y": 0.0 }, { "x": 2.0, "y": 3.0 },
            { "x": 1.0, "y": 1.0 }, { "x": 0.5, "y": 0.5 }
        ] },
        "teams": [ { "name": "Azure", "color": "#1e41ff", "base_pace": 1.0 } ],
        "car_pars_all": [
            { "car_no": 1, "team": "Azure", "driver_name": "Anna Aalto", "driver_initials": "AAL",
              "is_player": true, "p_grid": 1, "start_compound": "soft" },
            { "car_no": 2, "team": "Azure", "driver_name": "Ben Berg", "driver_initials": "BER",
              "p_grid": 2, "start_compound": "hard" }
        ]
    }"##;

    #[test]
    fn parses_minimal_parameter_file_with_defaults() {
        let sim_pars: SimPars = serde_json::from_str(PARS).unwrap();

        assert_eq!(sim_pars.race_pars.tot_no_laps, 3);
        assert_eq!(sim_pars.race_pars.tick_rate, 60.0);
        assert_eq!(sim_pars.race_pars.seed, Some(7));
        assert_eq!(sim_pars.car_pars_all[1].start_compound, Compound::Hard);
        assert!(!sim_pars.car_pars_all[1].is_player);
        assert_eq!(sim_pars.tyre_config.soft.pit_wear_threshold, 30.0);
    }

    #[test]
    fn builds_race_from_inline_track() {
        let sim_pars: SimPars = serde_json::from_str(PARS).unwrap();
        let race = sim_pars.build_race().unwrap();

        assert_eq!(race.track.length_units(), 5);
        assert_eq!(race.cars().len(), 2);
        assert_eq!(race.leader().car_no, 1);
        assert_eq!(race.player_car_no(), Some(1));
    }

    #[test]
    fn missing_file_is_reported() {
        let err = read_sim_pars(Path::new("does/not/exist.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to open parameter file"));
    }
}
