use crate::core::car::{Car, CarPars, WearFactor};
use crate::core::error::RaceError;
use crate::core::push_level::{PushLevel, PushLevelTable};
use crate::core::state_handler::StateHandler;
use crate::core::team::{Team, TeamPars};
use crate::core::tireset::{Compound, TyreConfig};
use crate::core::track::Track;
use crate::interfaces::display_interface::{calc_gap, CarState, RaceState};
use crate::post::race_result::{ClassifiedCar, RaceEvent, RaceResult};
use helpers::general::argmax;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Uniform};
use serde::Deserialize;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::rc::Rc;

/// * `tot_no_laps` - Total number of laps, the race ends once the leader starts lap tot_no_laps + 1
/// * `tick_rate` - (Hz) Fixed simulation rate, one tick lasts 1 / tick_rate seconds
/// * `pit_entry_window` - Distance units before the line in which a pit request is actioned
/// * `first_gridpos` - Start progress of the pole sitter
/// * `grid_spacing` - Distance units between two grid slots
/// * `sim_speed_constant` - Scale from pace multipliers to distance units per tick
/// * `wear_factor_base` - Wear factor of a fully worn tyre
/// * `wear_factor_range` - Wear factor gained between fully worn and fresh tyres
/// * `pit_stop_base` - (s) Minimum stationary time of an AI stop
/// * `pit_stop_jitter` - (s) Random extra stationary time of an AI stop
/// * `critical_wear` - (%) Below this wear AI cars switch to the hard compound
/// * `medium_wear` - (%) Below this wear (and above critical) AI cars switch to mediums
/// * `ai_push_level` - Push level held by AI cars
/// * `seed` - (optional) Seed of the random number generator
#[derive(Debug, Deserialize, Clone)]
pub struct RacePars {
    pub tot_no_laps: u32,
    #[serde(default = "default_tick_rate")]
    pub tick_rate: f64,
    #[serde(default = "default_pit_entry_window")]
    pub pit_entry_window: f64,
    #[serde(default = "default_first_gridpos")]
    pub first_gridpos: f64,
    #[serde(default = "default_grid_spacing")]
    pub grid_spacing: f64,
    #[serde(default = "default_sim_speed_constant")]
    pub sim_speed_constant: f64,
    #[serde(default = "default_wear_factor_base")]
    pub wear_factor_base: f64,
    #[serde(default = "default_wear_factor_range")]
    pub wear_factor_range: f64,
    #[serde(default = "default_pit_stop_base")]
    pub pit_stop_base: f64,
    #[serde(default = "default_pit_stop_jitter")]
    pub pit_stop_jitter: f64,
    #[serde(default = "default_critical_wear")]
    pub critical_wear: f64,
    #[serde(default = "default_medium_wear")]
    pub medium_wear: f64,
    #[serde(default = "default_ai_push_level")]
    pub ai_push_level: u8,
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_tick_rate() -> f64 {
    60.0
}

fn default_pit_entry_window() -> f64 {
    10.0
}

fn default_first_gridpos() -> f64 {
    40.0
}

fn default_grid_spacing() -> f64 {
    2.0
}

fn default_sim_speed_constant() -> f64 {
    0.35
}

fn default_wear_factor_base() -> f64 {
    0.85
}

fn default_wear_factor_range() -> f64 {
    0.15
}

fn default_pit_stop_base() -> f64 {
    19.5
}

fn default_pit_stop_jitter() -> f64 {
    1.0
}

fn default_critical_wear() -> f64 {
    10.0
}

fn default_medium_wear() -> f64 {
    22.0
}

fn default_ai_push_level() -> u8 {
    3
}

impl RacePars {
    pub fn new(tot_no_laps: u32) -> RacePars {
        RacePars {
            tot_no_laps,
            tick_rate: default_tick_rate(),
            pit_entry_window: default_pit_entry_window(),
            first_gridpos: default_first_gridpos(),
            grid_spacing: default_grid_spacing(),
            sim_speed_constant: default_sim_speed_constant(),
            wear_factor_base: default_wear_factor_base(),
            wear_factor_range: default_wear_factor_range(),
            pit_stop_base: default_pit_stop_base(),
            pit_stop_jitter: default_pit_stop_jitter(),
            critical_wear: default_critical_wear(),
            medium_wear: default_medium_wear(),
            ai_push_level: default_ai_push_level(),
            seed: None,
        }
    }

    pub fn validate(&self) -> Result<(), RaceError> {
        if self.tot_no_laps == 0 {
            return Err(RaceError::InvalidRacePars(String::from(
                "tot_no_laps must be at least 1",
            )));
        }
        if !(self.tick_rate > 0.0 && self.tick_rate.is_finite()) {
            return Err(RaceError::InvalidRacePars(format!(
                "tick_rate must be positive, got {}",
                self.tick_rate
            )));
        }
        if self.pit_entry_window < 0.0 {
            return Err(RaceError::InvalidRacePars(format!(
                "pit_entry_window must not be negative, got {}",
                self.pit_entry_window
            )));
        }
        for (name, value) in [
            ("sim_speed_constant", self.sim_speed_constant),
            ("wear_factor_base", self.wear_factor_base),
            ("wear_factor_range", self.wear_factor_range),
        ] {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(RaceError::InvalidRacePars(format!(
                    "{} must be finite and not negative, got {}",
                    name, value
                )));
            }
        }
        if !(self.pit_stop_base >= 0.0 && self.pit_stop_jitter >= 0.0)
            || !(self.pit_stop_base + self.pit_stop_jitter).is_finite()
        {
            return Err(RaceError::InvalidRacePars(String::from(
                "pit stop durations must not be negative",
            )));
        }
        Ok(())
    }
}

/// Standing is one row of the running order with its derived gap.
#[derive(Debug, Clone, PartialEq)]
pub struct Standing {
    pub position: usize,
    pub car_no: u32,
    pub race_prog: f64,
    pub gap: Option<f64>,
}

#[derive(Debug)]
pub struct RaceEngine {
    pub timestep_size: f64,
    tick_rate: f64,
    cur_racetime: f64,
    active: bool,
    finished: bool,
    pub tot_no_laps: u32,
    pit_entry_window: f64,
    sim_speed_constant: f64,
    wear_factor: WearFactor,
    pit_stop_duration: Uniform<f64>,
    critical_wear: f64,
    medium_wear: f64,
    pub track: Track,
    tyre_config: TyreConfig,
    push_levels: PushLevelTable,
    cars_list: Vec<Car>,
    events: Vec<RaceEvent>,
    rng: StdRng,
}

impl RaceEngine {
    pub fn new(
        race_pars: &RacePars,
        track: Track,
        tyre_config: &TyreConfig,
        push_levels: &PushLevelTable,
        teams_pars: &[TeamPars],
        car_pars_all: &[CarPars],
    ) -> Result<RaceEngine, RaceError> {
        race_pars.validate()?;
        tyre_config.validate()?;
        push_levels.validate()?;

        if car_pars_all.is_empty() {
            return Err(RaceError::NoCars);
        }

        // create teams
        let mut teams: HashMap<String, Rc<Team>> = HashMap::with_capacity(teams_pars.len());

        for team_pars in teams_pars.iter() {
            teams.insert(team_pars.name.to_owned(), Rc::new(Team::new(team_pars)?));
        }

        // create cars
        let mut cars_list: Vec<Car> = Vec::with_capacity(car_pars_all.len());
        let ai_push_level = PushLevel::clamped(race_pars.ai_push_level as i64);

        for car_pars in car_pars_all.iter() {
            let team = teams
                .get(&car_pars.team)
                .ok_or_else(|| RaceError::UnknownTeam {
                    car_no: car_pars.car_no,
                    team: car_pars.team.to_owned(),
                })?;

            let s_track_start = race_pars.first_gridpos
                - car_pars.p_grid.saturating_sub(1) as f64 * race_pars.grid_spacing;

            if !(0.0..track.length()).contains(&s_track_start) {
                return Err(RaceError::InvalidGridPosition {
                    car_no: car_pars.car_no,
                    p_grid: car_pars.p_grid,
                    progress: s_track_start,
                });
            }

            let mut sh = StateHandler::default();
            sh.initialize_state_handler(s_track_start, track.length());

            cars_list.push(Car::new(
                car_pars,
                Rc::clone(team),
                tyre_config.mount_tyre(car_pars.start_compound),
                ai_push_level,
                sh,
            ));
        }

        let rng = match race_pars.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut race = RaceEngine {
            timestep_size: 1.0 / race_pars.tick_rate,
            tick_rate: race_pars.tick_rate,
            cur_racetime: 0.0,
            active: true,
            finished: false,
            tot_no_laps: race_pars.tot_no_laps,
            pit_entry_window: race_pars.pit_entry_window,
            sim_speed_constant: race_pars.sim_speed_constant,
            wear_factor: WearFactor {
                base: race_pars.wear_factor_base,
                range: race_pars.wear_factor_range,
            },
            pit_stop_duration: Uniform::new_inclusive(
                race_pars.pit_stop_base,
                race_pars.pit_stop_base + race_pars.pit_stop_jitter,
            ),
            critical_wear: race_pars.critical_wear,
            medium_wear: race_pars.medium_wear,
            track,
            tyre_config: tyre_config.to_owned(),
            push_levels: push_levels.to_owned(),
            cars_list,
            events: vec![],
            rng,
        };

        race.sort_standings();

        log::info!(
            "Race on {} set up with {} cars over {} laps",
            race.track.name,
            race.cars_list.len(),
            race.tot_no_laps
        );

        Ok(race)
    }

    // ---------------------------------------------------------------------------------------------
    // MAIN METHOD ---------------------------------------------------------------------------------
    // ---------------------------------------------------------------------------------------------

    /// tick advances the race by one fixed time step and returns the events of this step. Does
    /// nothing while the race is paused or after it has finished.
    pub fn tick(&mut self) -> Vec<RaceEvent> {
        let mut events = vec![];

        if !self.active || self.finished {
            return events;
        }

        // increment discretization variable
        self.cur_racetime += self.timestep_size;

        for idx in 0..self.cars_list.len() {
            self.update_car(idx, &mut events);
        }

        // race end is decided by the leader once all cars moved
        self.handle_race_finish(&mut events);

        self.sort_standings();

        self.events.extend(events.iter().cloned());
        events
    }

    // ---------------------------------------------------------------------------------------------
    // RACE SIMULATOR PARTS ------------------------------------------------------------------------
    // ---------------------------------------------------------------------------------------------

    fn update_car(&mut self, idx: usize, events: &mut Vec<RaceEvent>) {
        // pit stop countdown, a car in its box is suspended for the whole tick
        if self.cars_list[idx].sh.is_pitting() {
            let car = &mut self.cars_list[idx];
            car.speed = 0.0;

            if car.sh.count_down_pit(self.timestep_size) {
                log::debug!("Car {} leaves the pits", car.car_no);
                events.push(RaceEvent::PitExit {
                    car_no: car.car_no,
                    lap: car.lap(),
                    time_s: self.cur_racetime,
                });
            }
            return;
        }

        // autonomous pit decision
        {
            let car = &mut self.cars_list[idx];
            if !car.is_player
                && car.tyre.wear() < self.tyre_config.pit_wear_threshold(car.tyre.compound)
                && car.sh.request_pit()
            {
                log::debug!(
                    "Car {} requests a stop at {:.1}% wear",
                    car.car_no,
                    car.tyre.wear()
                );
            }
        }

        // pit entry
        if self.cars_list[idx].sh.is_pit_requested()
            && self.cars_list[idx].sh.in_pit_window(self.pit_entry_window)
        {
            self.handle_pit_entry(idx, events);
            return;
        }

        // speed, movement and tyre wear
        let car = &mut self.cars_list[idx];
        let push_pars = self.push_levels.get(car.push_level);
        car.speed = car.calc_speed(push_pars, &self.wear_factor, self.sim_speed_constant);

        if car.drive_tick(push_pars) {
            let laptime = car.sh.register_new_lap(self.cur_racetime);
            if let Some(laptime) = laptime {
                car.lap_times.push(laptime);
            }

            log::debug!("Car {} starts lap {}", car.car_no, car.lap());
            events.push(RaceEvent::LapCompleted {
                car_no: car.car_no,
                lap: car.lap() - 1,
                time_s: self.cur_racetime,
                laptime,
            });
        }
    }

    fn handle_pit_entry(&mut self, idx: usize, events: &mut Vec<RaceEvent>) {
        if self.cars_list[idx].is_player {
            let car = &mut self.cars_list[idx];
            car.sh.act_pit(0.0, true);
            car.speed = 0.0;
            self.active = false;

            log::info!(
                "Car {} ({}) is in the box, waiting for a tyre choice",
                car.car_no,
                car.driver_initials
            );
            events.push(RaceEvent::AwaitingTyreChoice {
                car_no: car.car_no,
                lap: car.lap(),
                time_s: self.cur_racetime,
            });
        } else {
            let compound = self.recommended_compound(self.cars_list[idx].tyre.wear());
            let stop_duration = self.draw_pit_stop_duration();
            let tyre = self.tyre_config.mount_tyre(compound);

            let car = &mut self.cars_list[idx];
            car.mount_new_tyre(tyre);
            car.sh.act_pit(stop_duration, false);
            car.speed = 0.0;

            log::debug!(
                "Car {} pits for {} tyres, standing {:.2}s",
                car.car_no,
                compound,
                stop_duration
            );
            events.push(RaceEvent::PitEntry {
                car_no: car.car_no,
                lap: car.lap(),
                time_s: self.cur_racetime,
                compound,
                stop_duration,
            });
        }
    }

    fn handle_race_finish(&mut self, events: &mut Vec<RaceEvent>) {
        let race_progs: Vec<f64> = self
            .cars_list
            .iter()
            .map(|car| car.total_progress())
            .collect();
        let leader = &self.cars_list[argmax(&race_progs)];

        if leader.lap() > self.tot_no_laps {
            self.finished = true;
            self.active = false;

            log::info!(
                "Chequered flag after {:.3}s, car {} ({}) wins",
                self.cur_racetime,
                leader.car_no,
                leader.driver_initials
            );
            events.push(RaceEvent::Finished {
                car_no: leader.car_no,
                lap: self.tot_no_laps,
                time_s: self.cur_racetime,
            });
        }
    }

    /// sort_standings orders the cars by descending total progress, equal progress is broken by
    /// the lower car number.
    fn sort_standings(&mut self) {
        self.cars_list.sort_by(|a, b| {
            b.total_progress()
                .partial_cmp(&a.total_progress())
                .unwrap_or(Ordering::Equal)
                .then(a.car_no.cmp(&b.car_no))
        });
    }

    // ---------------------------------------------------------------------------------------------
    // INPUTS --------------------------------------------------------------------------------------
    // ---------------------------------------------------------------------------------------------

    fn get_player_car_mut(&mut self, car_no: u32) -> Result<&mut Car, RaceError> {
        let car = self
            .cars_list
            .iter_mut()
            .find(|car| car.car_no == car_no)
            .ok_or(RaceError::UnknownCar(car_no))?;

        if !car.is_player {
            return Err(RaceError::NotPlayerCar(car_no));
        }
        Ok(car)
    }

    /// set_push_level changes the push level of a player car. Levels outside 1-5 are clamped.
    pub fn set_push_level(&mut self, car_no: u32, level: i64) -> Result<PushLevel, RaceError> {
        let car = self.get_player_car_mut(car_no)?;
        let push_level = PushLevel::clamped(level);

        if push_level.get() as i64 != level {
            log::warn!(
                "Push level {} is out of range, using {} instead",
                level,
                push_level.get()
            );
        }

        car.push_level = push_level;
        Ok(push_level)
    }

    /// request_pit asks for a stop of a player car at the next pit window. Does nothing if a stop
    /// is already requested or in progress.
    pub fn request_pit(&mut self, car_no: u32) -> Result<(), RaceError> {
        let car = self.get_player_car_mut(car_no)?;

        if car.sh.request_pit() {
            log::info!("Car {} will pit at the end of this lap", car_no);
        } else {
            log::debug!("Car {} already has a pit stop pending", car_no);
        }
        Ok(())
    }

    /// apply_pit_tyre_choice mounts the chosen compound on a player car waiting in its box, starts
    /// the stop countdown and resumes the race. An unknown compound leaves the old tyre mounted.
    pub fn apply_pit_tyre_choice(
        &mut self,
        car_no: u32,
        compound: &str,
        stop_duration: f64,
    ) -> Result<(), RaceError> {
        let tyre_config = &self.tyre_config;
        let car = self
            .cars_list
            .iter_mut()
            .find(|car| car.car_no == car_no)
            .ok_or(RaceError::UnknownCar(car_no))?;

        if !car.is_player {
            return Err(RaceError::NotPlayerCar(car_no));
        }
        if !car.sh.is_tyre_pending() {
            return Err(RaceError::NotAwaitingTyreChoice(car_no));
        }

        let compound = compound.parse::<Compound>()?;
        car.mount_new_tyre(tyre_config.mount_tyre(compound));
        car.sh.set_pit_stop_time(stop_duration);

        log::info!(
            "Car {} gets {} tyres, standing {:.2}s",
            car_no,
            compound,
            stop_duration
        );

        let event = RaceEvent::PitEntry {
            car_no,
            lap: car.lap(),
            time_s: self.cur_racetime,
            compound,
            stop_duration,
        };
        self.events.push(event);

        self.resume();
        Ok(())
    }

    pub fn pause(&mut self) {
        if self.active {
            log::info!("Race paused at {:.3}s", self.cur_racetime);
        }
        self.active = false;
    }

    /// resume restarts a paused race. A finished race or a pending tyre choice keeps it paused.
    pub fn resume(&mut self) {
        if self.finished {
            return;
        }
        if self.cars_list.iter().any(|car| car.sh.is_tyre_pending()) {
            log::warn!("Cannot resume, a tyre choice is still pending");
            return;
        }
        self.active = true;
    }

    // ---------------------------------------------------------------------------------------------
    // METHODS (HELPERS) ---------------------------------------------------------------------------
    // ---------------------------------------------------------------------------------------------

    /// recommended_compound picks the replacement compound from the remaining wear, the lower the
    /// wear the more durable the compound.
    pub fn recommended_compound(&self, wear: f64) -> Compound {
        if wear < self.critical_wear {
            Compound::Hard
        } else if wear < self.medium_wear {
            Compound::Medium
        } else {
            Compound::Soft
        }
    }

    /// needs_pit applies the AI wear heuristic to any car.
    pub fn needs_pit(&self, car_no: u32) -> bool {
        self.car(car_no).map_or(false, |car| {
            car.tyre.wear() < self.tyre_config.pit_wear_threshold(car.tyre.compound)
        })
    }

    pub fn draw_pit_stop_duration(&mut self) -> f64 {
        self.pit_stop_duration.sample(&mut self.rng)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn race_time_elapsed(&self) -> f64 {
        self.cur_racetime
    }

    /// Cars in standings order, index 0 is the leader.
    pub fn cars(&self) -> &[Car] {
        &self.cars_list
    }

    pub fn car(&self, car_no: u32) -> Option<&Car> {
        self.cars_list.iter().find(|car| car.car_no == car_no)
    }

    pub fn leader(&self) -> &Car {
        &self.cars_list[0]
    }

    pub fn player_car_no(&self) -> Option<u32> {
        self.cars_list
            .iter()
            .find(|car| car.is_player)
            .map(|car| car.car_no)
    }

    /// player_waiting_for_tyres returns the player car standing in its box without tyres.
    pub fn player_waiting_for_tyres(&self) -> Option<u32> {
        self.cars_list
            .iter()
            .find(|car| car.is_player && car.sh.is_tyre_pending())
            .map(|car| car.car_no)
    }

    pub fn events(&self) -> &[RaceEvent] {
        &self.events
    }

    /// standings returns the running order with the gap of each car to the car ahead.
    pub fn standings(&self) -> Vec<Standing> {
        self.cars_list
            .iter()
            .enumerate()
            .map(|(i, car)| Standing {
                position: i + 1,
                car_no: car.car_no,
                race_prog: car.total_progress(),
                gap: self.gap_to_car_ahead(i),
            })
            .collect()
    }

    fn gap_to_car_ahead(&self, idx: usize) -> Option<f64> {
        if idx == 0 {
            return None;
        }

        let car_front = &self.cars_list[idx - 1];
        let car_rear = &self.cars_list[idx];

        Some(calc_gap(
            car_front.total_progress(),
            car_rear.total_progress(),
            car_rear.speed,
            self.tick_rate,
        ))
    }

    /// snapshot copies the state needed by the presentation layer.
    pub fn snapshot(&self) -> RaceState {
        let car_states = self
            .cars_list
            .iter()
            .enumerate()
            .map(|(i, car)| {
                let push_level = car.push_level;
                CarState {
                    position: i + 1,
                    car_no: car.car_no,
                    driver_name: car.driver_name.to_owned(),
                    driver_initials: car.driver_initials.to_owned(),
                    team_name: car.team.name.to_owned(),
                    color: car.team.color,
                    is_player: car.is_player,
                    lap: car.lap(),
                    progress: car.progress(),
                    race_prog: car.total_progress(),
                    coords: self.track.position_at(car.progress()),
                    speed: car.speed,
                    gap: self.gap_to_car_ahead(i),
                    compound: car.tyre.compound,
                    wear: car.tyre.wear(),
                    push_level: push_level.get(),
                    push_level_name: self.push_levels.get(push_level).name.to_owned(),
                    pit_state: car.sh.get_state().to_string(),
                    pitting: car.sh.is_pitting(),
                    last_lap_time: car.last_lap_time(),
                }
            })
            .collect();

        RaceState {
            race_time: self.cur_racetime,
            active: self.active,
            finished: self.finished,
            awaiting_tyre_choice: self.player_waiting_for_tyres().is_some(),
            tot_no_laps: self.tot_no_laps,
            leader_lap: self.leader().lap().min(self.tot_no_laps),
            car_states,
            final_result: None,
        }
    }

    pub fn get_race_result(&self) -> RaceResult {
        RaceResult {
            tot_no_laps: self.tot_no_laps,
            race_time: self.cur_racetime,
            classification: self
                .cars_list
                .iter()
                .map(|car| ClassifiedCar {
                    car_no: car.car_no,
                    driver_initials: car.driver_initials.to_owned(),
                    driver_name: car.driver_name.to_owned(),
                    team_name: car.team.name.to_owned(),
                    color: car.team.color,
                    laps_completed: car.lap() - 1,
                    laptimes: car.lap_times.to_owned(),
                    pit_stops: car.pit_stops,
                })
                .collect(),
            events: self.events.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use helpers::geometry::Point2d;

    fn race(seed: u64) -> RaceEngine {
        let mut race_pars = RacePars::new(3);
        race_pars.first_gridpos = 5.0;
        race_pars.seed = Some(seed);

        let track = Track::new(
            "line",
            (0..10).map(|i| Point2d::new(i as f64, 0.0)).collect(),
        )
        .unwrap();
        let teams = vec![TeamPars {
            name: String::from("Azure"),
            color: String::from("#1e41ff"),
            base_pace: 1.0,
        }];
        let cars = vec![CarPars {
            car_no: 8,
            team: String::from("Azure"),
            driver_name: String::from("Anna Aalto"),
            driver_initials: String::from("AAL"),
            is_player: false,
            p_grid: 1,
            start_compound: Compound::Soft,
        }];

        RaceEngine::new(
            &race_pars,
            track,
            &TyreConfig::default(),
            &PushLevelTable::default(),
            &teams,
            &cars,
        )
        .unwrap()
    }

    #[test]
    fn replacement_compound_follows_remaining_wear() {
        let race = race(1);
        assert_eq!(race.recommended_compound(5.0), Compound::Hard);
        assert_eq!(race.recommended_compound(15.0), Compound::Medium);
        assert_eq!(race.recommended_compound(22.0), Compound::Soft);
    }

    #[test]
    fn stop_durations_stay_in_range() {
        let mut race = race(3);
        for _ in 0..100 {
            let duration = race.draw_pit_stop_duration();
            assert!((19.5..=20.5).contains(&duration));
        }
    }

    #[test]
    fn invalid_pars_are_rejected() {
        let mut race_pars = RacePars::new(3);
        assert!(race_pars.validate().is_ok());

        race_pars.tick_rate = 0.0;
        assert!(race_pars.validate().is_err());

        race_pars.tick_rate = 60.0;
        race_pars.pit_stop_jitter = f64::NAN;
        assert!(race_pars.validate().is_err());

        let mut race_pars = RacePars::new(3);
        race_pars.sim_speed_constant = -0.35;
        assert!(race_pars.validate().is_err());

        let mut race_pars = RacePars::new(3);
        race_pars.wear_factor_base = f64::INFINITY;
        assert!(race_pars.validate().is_err());

        let mut race_pars = RacePars::new(3);
        race_pars.wear_factor_range = -0.15;
        assert!(race_pars.validate().is_err());
    }
}
