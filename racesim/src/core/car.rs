use crate::core::push_level::{PushLevel, PushLevelPars};
use crate::core::state_handler::StateHandler;
use crate::core::team::Team;
use crate::core::tireset::{Compound, TyreState};
use serde::Deserialize;
use std::rc::Rc;

/// * `car_no` - Car number, unique within the race
/// * `team` - Team name, must exist in the team parameters
/// * `driver_name` - Driver name, e.g. Max Verstappen
/// * `driver_initials` - Driver initials, e.g. VER
/// * `is_player` - Car is controlled by the player instead of the AI
/// * `p_grid` - Grid position at the start (1 = pole)
/// * `start_compound` - Compound mounted at the start
#[derive(Debug, Deserialize, Clone)]
pub struct CarPars {
    pub car_no: u32,
    pub team: String,
    pub driver_name: String,
    pub driver_initials: String,
    #[serde(default)]
    pub is_player: bool,
    pub p_grid: u32,
    pub start_compound: Compound,
}

/// * `base` - Wear factor of a fully worn tyre
/// * `range` - Wear factor gained between fully worn and fresh
#[derive(Debug, Clone, Copy)]
pub struct WearFactor {
    pub base: f64,
    pub range: f64,
}

impl WearFactor {
    pub fn at(&self, wear: f64) -> f64 {
        self.base + wear / 100.0 * self.range
    }
}

#[derive(Debug)]
pub struct Car {
    pub car_no: u32,
    pub is_player: bool,
    pub team: Rc<Team>,
    pub driver_name: String,
    pub driver_initials: String,
    pub p_grid: u32,
    pub(crate) speed: f64,
    pub(crate) tyre: TyreState,
    pub(crate) push_level: PushLevel,
    pub(crate) sh: StateHandler,
    pub(crate) lap_times: Vec<f64>,
    pub(crate) pit_stops: u32,
}

impl Car {
    pub fn new(
        car_pars: &CarPars,
        team: Rc<Team>,
        tyre: TyreState,
        push_level: PushLevel,
        sh: StateHandler,
    ) -> Car {
        Car {
            car_no: car_pars.car_no,
            is_player: car_pars.is_player,
            team,
            driver_name: car_pars.driver_name.to_owned(),
            driver_initials: car_pars.driver_initials.to_owned(),
            p_grid: car_pars.p_grid,
            speed: 0.0,
            tyre,
            push_level,
            sh,
            lap_times: vec![],
            pit_stops: 0,
        }
    }

    /// Speed in distance units per tick, as computed in the last tick (0 while in the pits).
    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn tyre(&self) -> &TyreState {
        &self.tyre
    }

    pub fn push_level(&self) -> PushLevel {
        self.push_level
    }

    pub fn state_handler(&self) -> &StateHandler {
        &self.sh
    }

    pub fn progress(&self) -> f64 {
        self.sh.get_s_track()
    }

    pub fn lap(&self) -> u32 {
        self.sh.get_lap()
    }

    pub fn total_progress(&self) -> f64 {
        self.sh.get_race_prog()
    }

    pub fn last_lap_time(&self) -> f64 {
        self.sh.get_last_lap_time()
    }

    pub fn lap_times(&self) -> &[f64] {
        &self.lap_times
    }

    pub fn pit_stops(&self) -> u32 {
        self.pit_stops
    }

    /// calc_speed returns the distance covered in one tick with the current tyre and push level.
    pub fn calc_speed(
        &self,
        push_pars: &PushLevelPars,
        wear_factor: &WearFactor,
        sim_speed_constant: f64,
    ) -> f64 {
        self.team.base_pace
            * self.tyre.grip
            * push_pars.pace_effect
            * wear_factor.at(self.tyre.wear())
            * sim_speed_constant
    }

    /// drive_tick moves the car by its current speed and wears the tyre. Returns true on a new
    /// lap.
    pub fn drive_tick(&mut self, push_pars: &PushLevelPars) -> bool {
        let new_lap = self.sh.update_race_prog(self.speed);
        self.tyre.degrade(push_pars.tyre_effect);
        new_lap
    }

    /// mount_new_tyre swaps the tyre during a stop.
    pub fn mount_new_tyre(&mut self, tyre: TyreState) {
        self.tyre = tyre;
        self.pit_stops += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::push_level::PushLevelTable;
    use crate::core::team::TeamPars;
    use crate::core::tireset::TyreConfig;
    use approx::assert_relative_eq;

    fn car(base_pace: f64) -> Car {
        let team = Team::new(&TeamPars {
            name: String::from("Azure"),
            color: String::from("#0000ff"),
            base_pace,
        })
        .unwrap();
        let car_pars = CarPars {
            car_no: 7,
            team: String::from("Azure"),
            driver_name: String::from("Kimi Nordqvist"),
            driver_initials: String::from("NOR"),
            is_player: false,
            p_grid: 1,
            start_compound: Compound::Medium,
        };
        let mut sh = StateHandler::default();
        sh.initialize_state_handler(0.0, 100.0);

        Car::new(
            &car_pars,
            Rc::new(team),
            TyreConfig::default().mount_tyre(Compound::Medium),
            PushLevel::default(),
            sh,
        )
    }

    #[test]
    fn worn_tyres_slow_the_car_without_stopping_it() {
        let push_levels = PushLevelTable::default();
        let wear_factor = WearFactor {
            base: 0.8,
            range: 0.2,
        };
        let mut car = car(1.0);
        let fresh = car.calc_speed(push_levels.get(car.push_level), &wear_factor, 0.5);

        car.tyre.degradation_rate = 1000.0;
        car.tyre.degrade(1.0);
        let worn = car.calc_speed(push_levels.get(car.push_level), &wear_factor, 0.5);

        assert_relative_eq!(fresh, 0.97 * 0.5);
        assert_relative_eq!(worn, 0.97 * 0.8 * 0.5);
    }

    #[test]
    fn drive_tick_moves_and_wears() {
        let push_levels = PushLevelTable::default();
        let mut car = car(1.0);
        car.speed = 2.5;

        assert!(!car.drive_tick(push_levels.get(car.push_level)));
        assert_relative_eq!(car.progress(), 2.5);
        assert_relative_eq!(car.tyre().wear(), 100.0 - 0.008);
    }
}
