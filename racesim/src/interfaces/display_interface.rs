use crate::core::tireset::Compound;
use crate::post::race_result::RaceResult;
use helpers::geometry::Point2d;
use serde::{Deserialize, Serialize};

pub const MAX_DISPLAY_UPDATE_FREQUENCY: f64 = 20.0;

/// Gap reported when the trailing car does not move, e.g. while standing in its box.
pub const GAP_SENTINEL: f64 = 999.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Read-only view of one car for rendering, ordered as in the standings.
#[derive(Debug, Clone)]
pub struct CarState {
    pub position: usize,
    pub car_no: u32,
    pub driver_name: String,
    pub driver_initials: String,
    pub team_name: String,
    pub color: RgbColor,
    pub is_player: bool,
    pub lap: u32,
    pub progress: f64,
    pub race_prog: f64,
    pub coords: Point2d,
    pub speed: f64,
    /// (s) Gap to the car ahead, None for the leader
    pub gap: Option<f64>,
    pub compound: Compound,
    pub wear: f64,
    pub push_level: u8,
    pub push_level_name: String,
    pub pit_state: String,
    pub pitting: bool,
    /// (s) 0.0 until the first full lap is completed
    pub last_lap_time: f64,
}

#[derive(Debug, Clone, Default)]
pub struct RaceState {
    pub race_time: f64,
    pub active: bool,
    pub finished: bool,
    pub awaiting_tyre_choice: bool,
    pub tot_no_laps: u32,
    pub leader_lap: u32,
    pub car_states: Vec<CarState>,

    // final results payload (sent once when race finishes)
    pub final_result: Option<RaceResult>,
}

impl RaceState {
    pub fn player(&self) -> Option<&CarState> {
        self.car_states.iter().find(|car_state| car_state.is_player)
    }
}

/// calc_gap returns the time in seconds the trailing car needs to cover the distance to the car
/// ahead at its current speed. A stationary trailing car gets GAP_SENTINEL.
pub fn calc_gap(race_prog_front: f64, race_prog_rear: f64, speed_rear: f64, tick_rate: f64) -> f64 {
    if speed_rear <= 0.0 {
        return GAP_SENTINEL;
    }

    let gap = (race_prog_front - race_prog_rear) / (speed_rear * tick_rate);

    if gap.is_finite() {
        gap
    } else {
        GAP_SENTINEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn gap_uses_trailing_speed() {
        // 3 units behind at 0.5 units/tick and 60 ticks/s
        assert_relative_eq!(calc_gap(13.0, 10.0, 0.5, 60.0), 0.1);
    }

    #[test]
    fn stationary_car_gets_sentinel() {
        assert_eq!(calc_gap(13.0, 10.0, 0.0, 60.0), GAP_SENTINEL);
        assert_eq!(calc_gap(13.0, 10.0, -1.0, 60.0), GAP_SENTINEL);
    }

    #[test]
    fn tiny_speed_never_yields_infinity() {
        let gap = calc_gap(f64::MAX, 0.0, f64::MIN_POSITIVE, 60.0);
        assert!(gap.is_finite());
    }
}
