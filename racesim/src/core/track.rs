use crate::core::error::RaceError;
use anyhow::Context;
use helpers::geometry::Point2d;
use serde::Deserialize;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

/// * `name` - Track name
/// * `track_file` - (optional) CSV file containing the centreline (`x_m`, `y_m` columns)
/// * `points` - (optional) Inline centreline, used if no track file is given
#[derive(Debug, Deserialize, Clone)]
pub struct TrackPars {
    pub name: String,
    #[serde(default)]
    pub track_file: Option<PathBuf>,
    #[serde(default)]
    pub points: Vec<Point2d>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CsvTrackEl {
    pub x_m: f64,
    pub y_m: f64,
}

/// Closed-loop track. Every pair of consecutive points is one distance unit, the last point
/// connects back to the first one.
#[derive(Debug, Clone)]
pub struct Track {
    pub name: String,
    points: Vec<Point2d>,
}

/// read_centreline reads the track centreline from a CSV file.
pub fn read_centreline(trackfile_path: &Path) -> anyhow::Result<Vec<Point2d>> {
    let fh = OpenOptions::new()
        .read(true)
        .open(trackfile_path)
        .context(format!(
            "Failed to open track file {}!",
            trackfile_path.to_str().unwrap_or("unknown")
        ))?;

    let mut csv_reader = csv::Reader::from_reader(&fh);
    let mut centreline: Vec<Point2d> = vec![];

    for result in csv_reader.deserialize() {
        let csv_track_el: CsvTrackEl = result.context(format!(
            "Failed to parse track file {}!",
            trackfile_path.to_str().unwrap_or("unknown")
        ))?;
        centreline.push(Point2d::new(csv_track_el.x_m, csv_track_el.y_m));
    }

    Ok(centreline)
}

impl Track {
    pub fn new(name: &str, points: Vec<Point2d>) -> Result<Track, RaceError> {
        if points.len() < 2 {
            return Err(RaceError::DegenerateTrack(points.len()));
        }

        Ok(Track {
            name: name.to_owned(),
            points,
        })
    }

    pub fn from_csv(name: &str, trackfile_path: &Path) -> anyhow::Result<Track> {
        let points = read_centreline(trackfile_path)?;
        Ok(Track::new(name, points)?)
    }

    /// from_pars prefers the track file and falls back to the inline points.
    pub fn from_pars(track_pars: &TrackPars) -> anyhow::Result<Track> {
        match &track_pars.track_file {
            Some(path) => Track::from_csv(&track_pars.name, path),
            None => Ok(Track::new(&track_pars.name, track_pars.points.to_owned())?),
        }
    }

    pub fn length_units(&self) -> usize {
        self.points.len()
    }

    /// Lap length in simulation distance units.
    pub fn length(&self) -> f64 {
        self.points.len() as f64
    }

    /// position_at interpolates linearly between the two track points bracketing `progress`.
    /// Any progress value is wrapped onto the closed loop.
    pub fn position_at(&self, progress: f64) -> Point2d {
        let n = self.points.len();
        let progress = progress.rem_euclid(self.length());
        let floor = progress.floor();
        let i = (floor as usize) % n;
        let j = (i + 1) % n;

        self.points[i].lerp(&self.points[j], progress - floor)
    }

    /// geometric_length returns the length of the closed centreline in coordinate units.
    pub fn geometric_length(&self) -> f64 {
        let n = self.points.len();
        (0..n)
            .map(|i| self.points[i].dist(&self.points[(i + 1) % n]))
            .sum()
    }
}
