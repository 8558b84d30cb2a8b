use crate::core::tireset::Compound;
use crate::interfaces::display_interface::RgbColor;
use helpers::general::argmin;
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::io::Write as IoWrite;

/// ClassifiedCar holds the post-race information of a single car, in finishing order.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ClassifiedCar {
    pub car_no: u32,
    pub driver_initials: String,
    pub driver_name: String,
    pub team_name: String,
    pub color: RgbColor,
    pub laps_completed: u32,
    pub laptimes: Vec<f64>,
    pub pit_stops: u32,
}

impl ClassifiedCar {
    /// fastest_lap returns the lap number (1-based among timed laps) and time of the best lap.
    pub fn fastest_lap(&self) -> Option<(usize, f64)> {
        if self.laptimes.is_empty() {
            return None;
        }
        let idx = argmin(&self.laptimes);
        Some((idx + 1, self.laptimes[idx]))
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(tag = "kind")]
pub enum RaceEvent {
    LapCompleted {
        car_no: u32,
        lap: u32,
        time_s: f64,
        laptime: Option<f64>,
    },
    PitEntry {
        car_no: u32,
        lap: u32,
        time_s: f64,
        compound: Compound,
        stop_duration: f64,
    },
    AwaitingTyreChoice {
        car_no: u32,
        lap: u32,
        time_s: f64,
    },
    PitExit {
        car_no: u32,
        lap: u32,
        time_s: f64,
    },
    Finished {
        car_no: u32,
        lap: u32,
        time_s: f64,
    },
}

impl RaceEvent {
    pub fn car_no(&self) -> u32 {
        match self {
            RaceEvent::LapCompleted { car_no, .. }
            | RaceEvent::PitEntry { car_no, .. }
            | RaceEvent::AwaitingTyreChoice { car_no, .. }
            | RaceEvent::PitExit { car_no, .. }
            | RaceEvent::Finished { car_no, .. } => *car_no,
        }
    }
}

/// RaceResult contains all race information that is required for post-processing the results.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RaceResult {
    pub tot_no_laps: u32,
    pub race_time: f64,
    pub classification: Vec<ClassifiedCar>,
    pub events: Vec<RaceEvent>,
}

impl RaceResult {
    pub fn winner(&self) -> Option<&ClassifiedCar> {
        self.classification.first()
    }

    fn format_lap_and_race_times(&self) -> Result<String, std::fmt::Error> {
        let mut content = String::new();

        writeln!(&mut content, "RESULT: Classification after {:.3}s", self.race_time)?;
        for (i, car) in self.classification.iter().enumerate() {
            let fastest = match car.fastest_lap() {
                Some((lap, laptime)) => format!("{:8.3}s (lap {})", laptime, lap),
                None => String::from("       -"),
            };
            writeln!(
                &mut content,
                "{:2}. {:3} ({}) {:<20} laps {:3}, stops {}, fastest {}",
                i + 1,
                car.car_no,
                car.driver_initials,
                car.team_name,
                car.laps_completed,
                car.pit_stops,
                fastest
            )?;
        }

        writeln!(&mut content, "RESULT: Lap times")?;
        let max_laps = self
            .classification
            .iter()
            .map(|car| car.laptimes.len())
            .max()
            .unwrap_or(0);

        let header: Vec<String> = self
            .classification
            .iter()
            .map(|car| format!("{:3} ({})", car.car_no, car.driver_initials))
            .collect();
        writeln!(&mut content, "lap, {}", header.join(", "))?;

        for lap in 0..max_laps {
            let row: Vec<String> = self
                .classification
                .iter()
                .map(|car| match car.laptimes.get(lap) {
                    Some(laptime) => format!("{:8.3}s", laptime),
                    None => format!("{:>9}", "-"),
                })
                .collect();
            writeln!(&mut content, "{:3}, {}", lap + 1, row.join(", "))?;
        }

        Ok(content)
    }

    /// write_lap_and_race_times_to_file writes the classification and lap times to a text file in
    /// output/. Returns the path to the written file.
    pub fn write_lap_and_race_times_to_file(
        &self,
        path: Option<&std::path::Path>,
    ) -> anyhow::Result<String> {
        let content = self.format_lap_and_race_times()?;

        let out_dir = std::path::Path::new("output");
        std::fs::create_dir_all(out_dir)?;
        let out_path = if let Some(p) = path {
            p.to_path_buf()
        } else {
            out_dir.join("last_run.txt")
        };
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .open(&out_path)?;
        file.write_all(content.as_bytes())?;
        file.flush()?;

        Ok(out_path.to_string_lossy().into_owned())
    }

    /// print_lap_and_race_times prints the classification and lap times to the console output.
    pub fn print_lap_and_race_times(&self) -> anyhow::Result<()> {
        print!("{}", self.format_lap_and_race_times()?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result() -> RaceResult {
        RaceResult {
            tot_no_laps: 2,
            race_time: 61.25,
            classification: vec![
                ClassifiedCar {
                    car_no: 1,
                    driver_initials: String::from("AAA"),
                    driver_name: String::from("Anna Aalto"),
                    team_name: String::from("Azure"),
                    color: RgbColor { r: 30, g: 65, b: 255 },
                    laps_completed: 3,
                    laptimes: vec![30.5, 29.75],
                    pit_stops: 1,
                },
                ClassifiedCar {
                    car_no: 2,
                    driver_initials: String::from("BBB"),
                    driver_name: String::from("Ben Berg"),
                    team_name: String::from("Crimson"),
                    color: RgbColor { r: 220, g: 0, b: 0 },
                    laps_completed: 2,
                    laptimes: vec![31.0],
                    pit_stops: 0,
                },
            ],
            events: vec![],
        }
    }

    #[test]
    fn fastest_lap_is_reported() {
        let result = result();
        assert_eq!(result.winner().unwrap().fastest_lap(), Some((2, 29.75)));
        assert_eq!(result.classification[1].fastest_lap(), Some((1, 31.0)));
    }

    #[test]
    fn text_output_lists_all_cars_and_pads_missing_laps() {
        let content = result().format_lap_and_race_times().unwrap();

        assert!(content.contains(" 1.   1 (AAA) Azure"));
        assert!(content.contains("lap,   1 (AAA),   2 (BBB)"));
        assert!(content.contains("  2,   29.750s,         -"));
    }

    #[test]
    fn events_serialize_with_kind_tag() {
        let event = RaceEvent::PitExit {
            car_no: 44,
            lap: 12,
            time_s: 301.5,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"kind\":\"PitExit\""));
        assert_eq!(event.car_no(), 44);
    }
}
