use dashcore::constants::{CHART_MAX_X, CHART_MIN_X, MAX, MIN};
use dashcore::types::{DetailLevel, DriveCommand, WheelPair};
use kinematics::engine::KinematicsEngine;
use plotters::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut engine = KinematicsEngine::new(DetailLevel::Detailed);
    let outputs = engine.update(DriveCommand::new(std::f64::consts::FRAC_PI_3, 0.9, 0.25, 1.0))?;

    let root = BitMapBackend::new("power_curves.png", (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Mecanum wheel-pair power curves", ("Arial", 28))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(CHART_MIN_X..CHART_MAX_X, (MIN - 0.1)..(MAX + 0.1))?;

    chart
        .configure_mesh()
        .x_desc("sample")
        .y_desc("normalized power")
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            outputs.frbl.iter().map(|p| (p.index as f64, p.value)),
            &MAGENTA,
        ))?
        .label(WheelPair::Frbl.label())
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], MAGENTA.filled()));

    chart
        .draw_series(LineSeries::new(
            outputs.flbr.iter().map(|p| (p.index as f64, p.value)),
            &BLUE,
        ))?
        .label(WheelPair::Flbr.label())
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.filled()));

    // Direction marker.
    chart.draw_series(LineSeries::new(
        vec![
            (outputs.marker_x, MIN - 0.02),
            (outputs.marker_x, MAX + 0.02),
        ],
        &BLACK,
    ))?;

    chart.configure_series_labels().border_style(&BLACK).draw()?;

    root.present()?;
    println!("wrote power_curves.png");
    Ok(())
}
