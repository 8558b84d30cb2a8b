use thiserror::Error;

/// RaceError covers setup faults (the engine refuses to race) and rejected inputs from
/// collaborators writing to the race between ticks.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RaceError {
    #[error("track needs at least 2 points, got {0}")]
    DegenerateTrack(usize),
    #[error("race has no participating cars")]
    NoCars,
    #[error("unknown tyre compound '{0}'")]
    UnknownCompound(String),
    #[error("car {0} is not part of the race")]
    UnknownCar(u32),
    #[error("team '{team}' of car {car_no} is not defined")]
    UnknownTeam { car_no: u32, team: String },
    #[error("car {0} is not player controlled")]
    NotPlayerCar(u32),
    #[error("car {0} is not waiting for a tyre choice")]
    NotAwaitingTyreChoice(u32),
    #[error("grid slot {p_grid} of car {car_no} lies at {progress:.3}, outside the track")]
    InvalidGridPosition {
        car_no: u32,
        p_grid: u32,
        progress: f64,
    },
    #[error("base pace of team '{team}' must be finite and not negative, got {base_pace}")]
    InvalidTeamPace { team: String, base_pace: f64 },
    #[error("could not parse colour '{0}'")]
    InvalidColor(String),
    #[error("invalid race parameter: {0}")]
    InvalidRacePars(String),
}
