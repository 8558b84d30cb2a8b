use plotters::prelude::*;
use racesim::post::race_result::{RaceEvent, RaceResult};
use std::collections::HashSet;

/// export_results_plot draws the lap times of all classified cars into a PNG in output/. Vertical
/// lines mark the laps on which cars stopped. Returns the path to the written file.
pub fn export_results_plot(result: &RaceResult) -> anyhow::Result<String> {
    let max_laps = result
        .classification
        .iter()
        .map(|car| car.laptimes.len())
        .max()
        .unwrap_or(0);

    if max_laps == 0 {
        anyhow::bail!("No timed laps to plot!");
    }

    let out_dir = std::path::Path::new("output");
    std::fs::create_dir_all(out_dir)?;
    let ts = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let out_path = out_dir.join(format!("race_plot_{}.png", ts));

    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for car in result.classification.iter() {
        for &laptime in car.laptimes.iter() {
            if laptime.is_finite() && laptime > 0.0 {
                y_min = y_min.min(laptime);
                y_max = y_max.max(laptime);
            }
        }
    }
    if !y_min.is_finite() || !y_max.is_finite() || y_min == y_max {
        y_min -= 1.0;
        y_max += 1.0;
    }
    let margin = (y_max - y_min) * 0.05;
    y_min -= margin;
    y_max += margin;

    let root = BitMapBackend::new(&out_path, (1280, 720)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption("Lap times", ("sans-serif", 24).into_font())
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(1u32..(max_laps as u32 + 1), y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Timed lap")
        .y_desc("s")
        .label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 16))
        .draw()?;

    // team liveries, the second car of a team is drawn thinner
    let mut teams_drawn: HashSet<&str> = HashSet::new();
    for car in result.classification.iter() {
        let color = RGBColor(car.color.r, car.color.g, car.color.b);
        let width = if teams_drawn.insert(car.team_name.as_str()) {
            3
        } else {
            1
        };

        // the first timed lap is lap 2, the grid lap is not timed
        let series: Vec<(u32, f64)> = car
            .laptimes
            .iter()
            .enumerate()
            .filter(|(_, laptime)| laptime.is_finite() && **laptime > 0.0)
            .map(|(idx, laptime)| (idx as u32 + 1, *laptime))
            .collect();

        chart
            .draw_series(LineSeries::new(
                series.into_iter(),
                color.stroke_width(width),
            ))?
            .label(format!("{} ({})", car.car_no, car.driver_initials))
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(width))
            });
    }

    for event in result.events.iter() {
        if let RaceEvent::PitEntry { lap, .. } = event {
            let x = lap.saturating_sub(1).max(1);
            if x > max_laps as u32 {
                continue;
            }
            chart.draw_series(std::iter::once(PathElement::new(
                vec![(x, y_min), (x, y_max)],
                RGBColor(150, 150, 150).stroke_width(1),
            )))?;
        }
    }

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .label_font(("sans-serif", 16))
        .position(plotters::chart::SeriesLabelPosition::UpperRight)
        .draw()?;

    root.present()?;
    Ok(out_path.to_string_lossy().into_owned())
}
