use std::fmt;

/// Pit-stop state of a car. `tyre_pending` marks a player car that stands in its box and waits
/// for the player to pick a compound, its countdown does not run until then.
#[derive(Debug, Clone, PartialEq)]
pub enum PitState {
    Racing,
    PitRequested,
    Pitting { time_remaining: f64, tyre_pending: bool },
}

impl fmt::Display for PitState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PitState::Racing => write!(f, "Racing"),
            PitState::PitRequested => write!(f, "Pit requested"),
            PitState::Pitting { .. } => write!(f, "In pit"),
        }
    }
}

/// StateHandler tracks a car's progress on the current lap, its lap counter and lap timing,
/// and the pit-stop state machine Racing -> PitRequested -> Pitting -> Racing.
#[derive(Debug, Clone)]
pub struct StateHandler {
    track_length: f64,
    s_track_cur: f64,
    lap: u32,
    state: PitState,
    lap_start_time: f64,
    last_lap_time: f64,
}

impl StateHandler {
    pub fn initialize_state_handler(&mut self, s_track_start: f64, track_length: f64) {
        if !(0.0..track_length).contains(&s_track_start) {
            panic!(
                "Start position must be in [0.0, track_length[, but is {:.3}!",
                s_track_start
            )
        }

        self.track_length = track_length;
        self.s_track_cur = s_track_start;
        self.lap = 1;
        self.state = PitState::Racing;
        self.lap_start_time = 0.0;
        self.last_lap_time = 0.0;
    }

    pub fn get_s_track(&self) -> f64 {
        self.s_track_cur
    }

    pub fn get_lap(&self) -> u32 {
        self.lap
    }

    /// get_race_prog returns the total progress (completed laps plus progress on the current lap)
    /// in distance units.
    pub fn get_race_prog(&self) -> f64 {
        (self.lap - 1) as f64 * self.track_length + self.s_track_cur
    }

    pub fn get_state(&self) -> &PitState {
        &self.state
    }

    pub fn get_last_lap_time(&self) -> f64 {
        self.last_lap_time
    }

    pub fn is_pitting(&self) -> bool {
        matches!(self.state, PitState::Pitting { .. })
    }

    pub fn is_pit_requested(&self) -> bool {
        matches!(self.state, PitState::PitRequested)
    }

    pub fn is_tyre_pending(&self) -> bool {
        matches!(
            self.state,
            PitState::Pitting {
                tyre_pending: true,
                ..
            }
        )
    }

    /// request_pit moves a racing car into PitRequested. Returns false if the car is already
    /// requesting or pitting.
    pub fn request_pit(&mut self) -> bool {
        if matches!(self.state, PitState::Racing) {
            self.state = PitState::PitRequested;
            true
        } else {
            false
        }
    }

    /// in_pit_window checks whether the car is within the last `pit_entry_window` distance units
    /// before the lap boundary.
    pub fn in_pit_window(&self, pit_entry_window: f64) -> bool {
        self.s_track_cur >= self.track_length - pit_entry_window
            && self.s_track_cur < self.track_length
    }

    /// act_pit moves a car that requested a stop into its box. The request is consumed.
    pub fn act_pit(&mut self, time_remaining: f64, tyre_pending: bool) {
        if !self.is_pit_requested() {
            panic!("Tried to enter the pits without a pit request!")
        }

        self.state = PitState::Pitting {
            time_remaining,
            tyre_pending,
        };
    }

    /// set_pit_stop_time releases a waiting player car into its countdown. Returns false if the car
    /// is not waiting for a tyre choice.
    pub fn set_pit_stop_time(&mut self, stop_duration: f64) -> bool {
        if !self.is_tyre_pending() {
            return false;
        }

        self.state = PitState::Pitting {
            time_remaining: stop_duration.max(0.0),
            tyre_pending: false,
        };
        true
    }

    /// count_down_pit decrements the stop countdown and returns true if the car leaves the pits in
    /// this step. A car waiting for its tyre choice does not count down.
    pub fn count_down_pit(&mut self, timestep_size: f64) -> bool {
        match self.state {
            PitState::Pitting {
                time_remaining,
                tyre_pending: false,
            } => {
                let time_remaining = time_remaining - timestep_size;

                if time_remaining <= 0.0 {
                    self.state = PitState::Racing;
                    true
                } else {
                    self.state = PitState::Pitting {
                        time_remaining,
                        tyre_pending: false,
                    };
                    false
                }
            }
            _ => false,
        }
    }

    /// update_race_prog moves the car forward and returns true if it crossed the lap boundary.
    /// Overshoot past the line is carried into the new lap, a distance of several laps counts
    /// every lap.
    pub fn update_race_prog(&mut self, distance: f64) -> bool {
        if self.is_pitting() {
            panic!("Tried to move a car that stands in the pits!")
        }

        self.s_track_cur += distance;

        let mut new_lap = false;
        while self.s_track_cur >= self.track_length {
            self.s_track_cur -= self.track_length;
            self.lap += 1;
            new_lap = true;
        }
        new_lap
    }

    /// register_new_lap restarts the lap clock and returns the time of the lap just completed.
    /// The grid lap is not a full lap and is not timed.
    pub fn register_new_lap(&mut self, cur_racetime: f64) -> Option<f64> {
        let laptime = if self.lap > 2 {
            self.last_lap_time = cur_racetime - self.lap_start_time;
            Some(self.last_lap_time)
        } else {
            None
        };

        self.lap_start_time = cur_racetime;
        laptime
    }
}

impl Default for StateHandler {
    fn default() -> Self {
        StateHandler {
            track_length: 0.0,
            s_track_cur: 0.0,
            lap: 1,
            state: PitState::Racing,
            lap_start_time: 0.0,
            last_lap_time: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn state_handler(s_track_start: f64) -> StateHandler {
        let mut sh = StateHandler::default();
        sh.initialize_state_handler(s_track_start, 10.0);
        sh
    }

    #[test]
    fn wraps_and_keeps_overshoot() {
        let mut sh = state_handler(9.5);
        assert!(sh.update_race_prog(1.0));
        assert_relative_eq!(sh.get_s_track(), 0.5);
        assert_eq!(sh.get_lap(), 2);
        assert_relative_eq!(sh.get_race_prog(), 10.5);
    }

    #[test]
    fn distance_of_several_laps_counts_every_lap() {
        let mut sh = state_handler(9.0);
        assert!(sh.update_race_prog(25.5));
        assert_relative_eq!(sh.get_s_track(), 4.5);
        assert_eq!(sh.get_lap(), 4);
        assert_relative_eq!(sh.get_race_prog(), 34.5);

        assert!(!sh.update_race_prog(1.0));
        assert_eq!(sh.get_lap(), 4);
    }

    #[test]
    fn pit_cycle() {
        let mut sh = state_handler(9.0);
        assert!(sh.request_pit());
        assert!(!sh.request_pit());
        assert!(sh.in_pit_window(2.0));

        sh.act_pit(0.25, false);
        assert!(!sh.is_pit_requested());
        assert!(!sh.count_down_pit(0.1));
        assert!(!sh.count_down_pit(0.1));
        assert!(sh.count_down_pit(0.1));
        assert_eq!(sh.get_state(), &PitState::Racing);
    }

    #[test]
    fn pending_tyre_choice_blocks_countdown() {
        let mut sh = state_handler(9.0);
        sh.request_pit();
        sh.act_pit(0.0, true);

        assert!(!sh.count_down_pit(1.0));
        assert!(sh.is_tyre_pending());

        assert!(sh.set_pit_stop_time(2.0));
        assert!(!sh.set_pit_stop_time(2.0));
        assert!(!sh.count_down_pit(1.0));
        assert!(sh.count_down_pit(1.0));
    }

    #[test]
    fn pit_window_is_before_the_line() {
        assert!(!state_handler(7.9).in_pit_window(2.0));
        assert!(state_handler(8.0).in_pit_window(2.0));
        assert!(!state_handler(0.5).in_pit_window(2.0));
    }

    #[test]
    fn grid_lap_is_not_timed() {
        let mut sh = state_handler(9.5);
        sh.update_race_prog(1.0);
        assert_eq!(sh.register_new_lap(3.0), None);

        sh.update_race_prog(10.0);
        assert_relative_eq!(sh.register_new_lap(15.5).unwrap(), 12.5);
        assert_relative_eq!(sh.get_last_lap_time(), 12.5);
    }
}
