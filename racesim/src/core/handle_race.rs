use crate::core::error::RaceError;
use crate::core::race::RaceEngine;
use crate::core::tireset::Compound;
use crate::interfaces::display_interface::{RaceState, MAX_DISPLAY_UPDATE_FREQUENCY};
use crate::interfaces::player_input::PlayerCommand;
use crate::post::race_result::RaceResult;
use crate::pre::read_sim_pars::SimPars;
use anyhow::Context;
use flume::{Receiver, Sender, TryRecvError};
use std::thread::sleep;
use std::time::{Duration, Instant};

/// handle_race creates and simulates a race on the basis of the inserted parameters, and returns
/// the results for post-processing.
///
/// Without a sender the race runs as fast as possible and player cars are driven by the pit
/// heuristic of the AI. With a sender the race runs in real-time, race states are sent to the
/// display and player commands are read from `cmd_rx`.
pub fn handle_race(
    sim_pars: &SimPars,
    print_debug: bool,
    tx: Option<&Sender<RaceState>>,
    cmd_rx: Option<&Receiver<PlayerCommand>>,
    realtime_factor: f64,
) -> anyhow::Result<RaceResult> {
    let mut race = sim_pars.build_race()?;

    log::info!(
        "Track {} has {} distance units ({:.1} coordinate units per lap)",
        race.track.name,
        race.track.length_units(),
        race.track.geometric_length()
    );

    match tx {
        None => simulate_headless(&mut race, print_debug),
        Some(tx) => simulate_realtime(&mut race, tx, cmd_rx, realtime_factor)?,
    }

    // return race result
    Ok(race.get_race_result())
}

fn simulate_headless(race: &mut RaceEngine, print_debug: bool) {
    let mut t_race_update_print = 0.0;
    let mut last_printed_lap = 0u32;

    while !race.is_finished() {
        drive_player_cars(race);
        race.tick();
        resolve_tyre_choice_automatically(race);

        if print_debug && race.race_time_elapsed() > t_race_update_print + 0.9999 {
            log::debug!(
                "Simulating... Current race time is {:.3}s, current lap is {}",
                race.race_time_elapsed(),
                race.leader().lap()
            );
            t_race_update_print = race.race_time_elapsed();
        }
        if print_debug && race.leader().lap() > last_printed_lap {
            log::debug!("Leader started lap {}", race.leader().lap());
            last_printed_lap = race.leader().lap();
        }
    }
}

fn simulate_realtime(
    race: &mut RaceEngine,
    tx: &Sender<RaceState>,
    cmd_rx: Option<&Receiver<PlayerCommand>>,
    realtime_factor: f64,
) -> anyhow::Result<()> {
    let mut t_race_update_display = f64::NEG_INFINITY;

    while !race.is_finished() {
        let t_start = Instant::now();

        if let Some(cmd_rx) = cmd_rx {
            drain_player_commands(race, cmd_rx);
        } else {
            drive_player_cars(race);
        }

        race.tick();

        if race.player_waiting_for_tyres().is_some() {
            // show the box stop before blocking on the player's decision
            tx.send(race.snapshot())
                .context("Failed to send race state to display!")?;
            match cmd_rx {
                Some(cmd_rx) => wait_for_tyre_choice(race, cmd_rx),
                None => resolve_tyre_choice_automatically(race),
            }
            continue;
        }

        if race.race_time_elapsed()
            > t_race_update_display + 1.0 / MAX_DISPLAY_UPDATE_FREQUENCY - 0.001
        {
            tx.send(race.snapshot())
                .context("Failed to send race state to display!")?;
            t_race_update_display = race.race_time_elapsed();
        }

        // sleep until time step is finished in real-time as well (calculation in ms)
        let t_sleep = (race.timestep_size * 1000.0 / realtime_factor) as i64
            - t_start.elapsed().as_millis() as i64;

        if t_sleep > 0 {
            sleep(Duration::from_millis(t_sleep as u64));
        }
    }

    // after real-time loop finishes, send final result once
    let mut final_msg = race.snapshot();
    final_msg.final_result = Some(race.get_race_result());
    tx.send(final_msg)
        .context("Failed to send final race result to display!")?;

    Ok(())
}

/// drive_player_cars lets the pit heuristic of the AI request stops for player cars.
fn drive_player_cars(race: &mut RaceEngine) {
    let player_cars: Vec<u32> = race
        .cars()
        .iter()
        .filter(|car| car.is_player)
        .map(|car| car.car_no)
        .collect();

    for car_no in player_cars {
        if race.needs_pit(car_no) {
            if let Err(err) = race.request_pit(car_no) {
                log::warn!("Autopilot could not request a stop: {}", err);
            }
        }
    }
}

fn resolve_tyre_choice_automatically(race: &mut RaceEngine) {
    while let Some(car_no) = race.player_waiting_for_tyres() {
        let wear = race.car(car_no).map_or(0.0, |car| car.tyre().wear());
        let compound = race.recommended_compound(wear);
        let stop_duration = race.draw_pit_stop_duration();

        if let Err(err) = race.apply_pit_tyre_choice(car_no, compound.name(), stop_duration) {
            log::warn!("Autopilot tyre choice failed: {}", err);
            break;
        }
    }
}

fn apply_player_command(race: &mut RaceEngine, car_no: u32, cmd: PlayerCommand) {
    let res = match cmd {
        PlayerCommand::SetPushLevel(level) => race.set_push_level(car_no, level).map(|_| ()),
        PlayerCommand::RequestPit => race.request_pit(car_no),
        // a stop duration is drawn only for a valid choice while the car waits in its box
        PlayerCommand::ChooseTyre(compound) => {
            if race.player_waiting_for_tyres() != Some(car_no) {
                Err(RaceError::NotAwaitingTyreChoice(car_no))
            } else {
                compound.parse::<Compound>().and_then(|_| {
                    let stop_duration = race.draw_pit_stop_duration();
                    race.apply_pit_tyre_choice(car_no, &compound, stop_duration)
                })
            }
        }
    };

    if let Err(err) = res {
        log::warn!("Command rejected: {}", err);
    }
}

fn drain_player_commands(race: &mut RaceEngine, cmd_rx: &Receiver<PlayerCommand>) {
    let car_no = match race.player_car_no() {
        Some(car_no) => car_no,
        None => return,
    };

    loop {
        match cmd_rx.try_recv() {
            Ok(cmd) => apply_player_command(race, car_no, cmd),
            Err(TryRecvError::Empty) => break,
            Err(TryRecvError::Disconnected) => {
                drive_player_cars(race);
                break;
            }
        }
    }
}

/// wait_for_tyre_choice blocks until the player picked a valid compound. If the input side goes
/// away the choice is made automatically.
fn wait_for_tyre_choice(race: &mut RaceEngine, cmd_rx: &Receiver<PlayerCommand>) {
    while let Some(car_no) = race.player_waiting_for_tyres() {
        match cmd_rx.recv() {
            Ok(cmd) => apply_player_command(race, car_no, cmd),
            Err(_) => {
                log::warn!("Player input closed, choosing tyres automatically");
                resolve_tyre_choice_automatically(race);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::car::CarPars;
    use crate::core::push_level::PushLevelTable;
    use crate::core::race::RacePars;
    use crate::core::team::TeamPars;
    use crate::core::tireset::TyreConfig;
    use crate::core::track::Track;
    use helpers::geometry::Point2d;

    fn race(seed: u64) -> RaceEngine {
        let mut race_pars = RacePars::new(3);
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
            car_no: 16,
            team: String::from("Azure"),
            driver_name: String::from("Dana Dorn"),
            driver_initials: String::from("DDO"),
            is_player: true,
            p_grid: 1,
            start_compound: Compound::Medium,
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
    fn stray_tyre_choice_leaves_stop_durations_unchanged() {
        let mut reference = race(7);
        let mut race = race(7);

        apply_player_command(&mut race, 16, PlayerCommand::ChooseTyre(String::from("soft")));
        apply_player_command(&mut race, 16, PlayerCommand::ChooseTyre(String::from("wet")));

        assert_eq!(race.player_waiting_for_tyres(), None);
        for _ in 0..3 {
            assert_eq!(
                race.draw_pit_stop_duration(),
                reference.draw_pit_stop_duration()
            );
        }
    }
}
