use racesim::interfaces::display_interface::{CarState, RaceState, GAP_SENTINEL};
use std::fmt::Write;

fn format_gap(car_state: &CarState) -> String {
    match car_state.gap {
        None => String::from("Leader"),
        Some(gap) if gap >= GAP_SENTINEL => String::from("--"),
        Some(gap) => format!("+{:.3}s", gap),
    }
}

fn format_last_lap(last_lap_time: f64) -> String {
    if last_lap_time > 0.0 {
        format!("{:.3}s", last_lap_time)
    } else {
        String::from("-")
    }
}

/// render_standings draws the running order as a text table for the terminal.
pub fn render_standings(race_state: &RaceState) -> String {
    let mut out = String::new();

    let status = if race_state.finished {
        "FINISHED"
    } else if race_state.awaiting_tyre_choice {
        "IN THE BOX"
    } else if !race_state.active {
        "PAUSED"
    } else {
        "RACING"
    };

    // writing into a String cannot fail
    let _ = writeln!(
        out,
        "Lap {}/{}  Race time {:.1}s  {}",
        race_state.leader_lap, race_state.tot_no_laps, race_state.race_time, status
    );
    let _ = writeln!(
        out,
        "{:>3}  {:>3}  {:<4} {:<16} {:>3}  {:>9}  {:<4} {:>5}  {:<10} {:>9}  {}",
        "Pos", "No", "Drv", "Team", "Lap", "Gap", "Tyre", "Wear", "Push", "Last", "Pit"
    );

    for car_state in race_state.car_states.iter() {
        let marker = if car_state.is_player { '*' } else { ' ' };
        let _ = writeln!(
            out,
            "{:>3}{} {:>3}  {:<4} \x1b[38;2;{};{};{}m{:<16}\x1b[0m {:>3}  {:>9}  {:<4} {:>4.1}%  {:<10} {:>9}  {}",
            car_state.position,
            marker,
            car_state.car_no,
            car_state.driver_initials,
            car_state.color.r,
            car_state.color.g,
            car_state.color.b,
            car_state.team_name,
            car_state.lap.min(race_state.tot_no_laps),
            format_gap(car_state),
            &car_state.compound.name()[..1],
            car_state.wear,
            format!("{} {}", car_state.push_level, car_state.push_level_name),
            format_last_lap(car_state.last_lap_time),
            car_state.pit_state
        );
    }

    if let Some(player) = race_state.player() {
        let _ = writeln!(
            out,
            "You: #{} {} P{} at ({:.0}, {:.0})  {} tyre at {:.1}%  push {} ({})  {}",
            player.car_no,
            player.driver_initials,
            player.position,
            player.coords.x,
            player.coords.y,
            player.compound,
            player.wear,
            player.push_level,
            player.push_level_name,
            player.pit_state
        );
    }

    if race_state.awaiting_tyre_choice {
        let _ = writeln!(out, "Choose tyres: 'tyre soft', 'tyre medium' or 'tyre hard'");
    } else if !race_state.finished {
        let _ = writeln!(out, "Commands: 'push <1-5>', 'pit'");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use helpers::geometry::Point2d;
    use racesim::core::tireset::Compound;
    use racesim::interfaces::display_interface::RgbColor;

    fn car_state(position: usize, car_no: u32, gap: Option<f64>, is_player: bool) -> CarState {
        CarState {
            position,
            car_no,
            driver_name: format!("Driver {}", car_no),
            driver_initials: format!("D{:02}", car_no),
            team_name: String::from("Azure"),
            color: RgbColor {
                r: 255,
                g: 135,
                b: 0,
            },
            is_player,
            lap: 4,
            progress: 12.0,
            race_prog: 312.0,
            coords: Point2d::new(120.4, -35.0),
            speed: 0.35,
            gap,
            compound: Compound::Medium,
            wear: 87.25,
            push_level: 3,
            push_level_name: String::from("Balanced"),
            pit_state: String::from("Racing"),
            pitting: false,
            last_lap_time: 71.5,
        }
    }

    fn race_state() -> RaceState {
        RaceState {
            race_time: 250.0,
            active: true,
            tot_no_laps: 20,
            leader_lap: 4,
            car_states: vec![
                car_state(1, 44, None, false),
                car_state(2, 16, Some(1.234), true),
                car_state(3, 1, Some(GAP_SENTINEL), false),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn lists_cars_in_order_with_gaps() {
        let out = render_standings(&race_state());
        let lines: Vec<&str> = out.lines().collect();

        assert!(lines[0].starts_with("Lap 4/20"));
        assert!(lines[2].contains("Leader"));
        assert!(lines[3].contains("+1.234s"));
        assert!(lines[4].contains("--"));
        assert!(lines[3].starts_with("  2*"));
        assert!(out.contains("87.2%") || out.contains("87.3%"));
        assert!(out.contains("You: #16 D16 P2 at (120, -35)  Medium tyre"));
        assert!(lines[3].contains("\x1b[38;2;255;135;0mAzure"));
    }

    #[test]
    fn prompts_for_tyres_while_in_the_box() {
        let mut state = race_state();
        state.active = false;
        state.awaiting_tyre_choice = true;

        let out = render_standings(&state);
        assert!(out.contains("IN THE BOX"));
        assert!(out.contains("tyre soft"));
    }
}
