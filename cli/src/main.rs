mod logger;
mod plot;
mod render;

use clap::Parser;
use log::LevelFilter;
use racesim::core::handle_race::handle_race;
use racesim::interfaces::player_input::PlayerCommand;
use racesim::post::race_result::RaceResult;
use racesim::pre::read_sim_pars::{read_sim_pars, SimPars};
use racesim::pre::sim_opts::SimOpts;
use rayon::prelude::*;
use std::collections::HashMap;
use std::io::BufRead;
use std::thread;
use std::time::Instant;

fn post_process(race_result: &RaceResult) -> anyhow::Result<()> {
    race_result.print_lap_and_race_times()?;

    let path = race_result.write_lap_and_race_times_to_file(None)?;
    log::info!("Lap times written to {}", path);

    match plot::export_results_plot(race_result) {
        Ok(path) => log::info!("Plot written to {}", path),
        Err(e) => log::warn!("Failed to write plot: {}", e),
    }
    Ok(())
}

fn run_single(sim_pars: &SimPars, print_debug: bool) -> anyhow::Result<()> {
    log::info!("Running simulation without display...");
    let t_start = Instant::now();

    let race_result = handle_race(sim_pars, print_debug, None, None, 1.0)?;

    log::info!("Execution time: {}ms", t_start.elapsed().as_millis());
    post_process(&race_result)
}

fn run_batch(sim_pars: &SimPars, no_sim_runs: u32) -> anyhow::Result<()> {
    log::info!("Running {} simulations in parallel...", no_sim_runs);
    let t_start = Instant::now();

    // per-race messages of parallel runs would interleave
    let log_level = log::max_level();
    log::set_max_level(log_level.min(LevelFilter::Warn));

    let race_results = (0..no_sim_runs)
        .into_par_iter()
        .map(|i| {
            let mut sim_pars_run = sim_pars.clone();
            sim_pars_run.race_pars.seed = sim_pars.race_pars.seed.map(|seed| seed + i as u64);
            handle_race(&sim_pars_run, false, None, None, 1.0)
        })
        .collect::<anyhow::Result<Vec<RaceResult>>>();

    log::set_max_level(log_level);
    let race_results = race_results?;
    log::info!("Execution time: {}ms", t_start.elapsed().as_millis());

    // count wins per car
    let mut wins: HashMap<u32, (String, u32)> = HashMap::new();
    for race_result in race_results.iter() {
        if let Some(winner) = race_result.winner() {
            wins.entry(winner.car_no)
                .or_insert_with(|| (winner.driver_initials.to_owned(), 0))
                .1 += 1;
        }
    }

    let mut wins: Vec<(u32, String, u32)> = wins
        .into_iter()
        .map(|(car_no, (initials, count))| (car_no, initials, count))
        .collect();
    wins.sort_by(|a, b| b.2.cmp(&a.2).then(a.0.cmp(&b.0)));

    let avg_race_time = race_results.iter().map(|r| r.race_time).sum::<f64>()
        / race_results.len().max(1) as f64;

    println!("RESULT: Wins after {} runs (average race time {:.3}s)", no_sim_runs, avg_race_time);
    for (car_no, initials, count) in wins.iter() {
        println!(
            "{:3} ({}) {:4} wins ({:5.1}%)",
            car_no,
            initials,
            count,
            *count as f64 / no_sim_runs as f64 * 100.0
        );
    }
    Ok(())
}

fn run_interactive(sim_pars: &SimPars, realtime_factor: f64) -> anyhow::Result<()> {
    log::info!("Starting real-time race, type commands and press enter...");

    let (tx, rx) = flume::unbounded();
    let (cmd_tx, cmd_rx) = flume::unbounded();

    // simulator runs in its own thread
    let sim_pars_thread = sim_pars.clone();
    let sim_handle = thread::spawn(move || {
        handle_race(
            &sim_pars_thread,
            false,
            Some(&tx),
            Some(&cmd_rx),
            realtime_factor,
        )
    });

    // player input is read line by line from stdin
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(_) => break,
            };
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<PlayerCommand>() {
                Ok(cmd) => {
                    if cmd_tx.send(cmd).is_err() {
                        break;
                    }
                }
                Err(e) => log::warn!("{}", e),
            }
        }
    });

    let mut t_last_render = f64::NEG_INFINITY;
    for race_state in rx.iter() {
        if let Some(race_result) = &race_state.final_result {
            println!("{}", render::render_standings(&race_state));
            post_process(race_result)?;
            continue;
        }

        if race_state.awaiting_tyre_choice || race_state.race_time >= t_last_render + 1.0 {
            print!("\x1b[2J\x1b[H{}", render::render_standings(&race_state));
            t_last_render = race_state.race_time;
        }
    }

    sim_handle
        .join()
        .map_err(|_| anyhow::anyhow!("Simulation thread panicked!"))??;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // PRE-PROCESSING ------------------------------------------------------------------------------
    // get simulation options from the command line arguments
    let sim_opts: SimOpts = SimOpts::parse();

    logger::init(if sim_opts.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    })?;

    // get simulation parameters
    let mut sim_pars = if let Some(parfile_path) = &sim_opts.parfile_path {
        log::info!("Reading simulation parameters from {:?}", parfile_path);
        read_sim_pars(parfile_path)?
    } else {
        anyhow::bail!("No parameter file provided! Use -p <path_to_json> to run the simulation.");
    };

    if sim_opts.seed.is_some() {
        sim_pars.race_pars.seed = sim_opts.seed;
    }

    // print race details
    log::info!(
        "Simulating {} over {} laps with {} cars at {:.0} ticks per second",
        sim_pars.track_pars.name,
        sim_pars.race_pars.tot_no_laps,
        sim_pars.car_pars_all.len(),
        sim_pars.race_pars.tick_rate
    );

    // EXECUTION -----------------------------------------------------------------------------------
    if sim_opts.interactive {
        run_interactive(&sim_pars, sim_opts.realtime_factor)
    } else if sim_opts.no_sim_runs > 1 {
        run_batch(&sim_pars, sim_opts.no_sim_runs)
    } else {
        run_single(&sim_pars, sim_opts.debug)
    }
}
