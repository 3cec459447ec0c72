//! Dashboard application: input panel, kinematics chart, wheel sliders, and
//! the top-down scene, all fed from one engine update per command change.

use std::f64::consts::PI;
use std::path::PathBuf;

use dashcore::constants::{CHART_MAX_X, CHART_MIN_X, MARKER_OVERSHOOT, MAX, MIN, SLIDER_AMPLIFY};
use dashcore::types::{DetailLevel, DriveCommand, Wheel, WheelPair, WheelPairCurve};
use egui_plot::{Legend, Line, Plot, PlotBounds, PlotPoints};
use kinematics::engine::KinematicsEngine;
use projection::{project, ProjectedOutputs, SliderDrive};

use crate::scene;
use crate::settings::{DashSettings, SETTINGS_FILE};

pub struct DashApp {
    engine: KinematicsEngine,
    outputs: ProjectedOutputs,
    settings: DashSettings,
    settings_path: PathBuf,

    // Commanded drive vector as edited in the input panel.
    direction: f64,
    magnitude: f64,
    twist: f64,
    scale: f64,

    last_applied: Option<(DriveCommand, DetailLevel)>,
    last_error: Option<String>,
}

impl DashApp {
    pub fn new() -> Self {
        let settings_path = PathBuf::from(SETTINGS_FILE);
        let settings = DashSettings::load(&settings_path);
        let engine = KinematicsEngine::new(settings.detail_level);

        let mut app = DashApp {
            engine,
            outputs: ProjectedOutputs::default(),
            settings,
            settings_path,
            direction: 0.0,
            magnitude: 0.0,
            twist: 0.0,
            scale: 1.0,
            last_applied: None,
            last_error: None,
        };
        app.apply_command();
        app
    }

    /// Runs the engine and projections when the edited command (or detail
    /// level) differs from the last applied one. A rejected command keeps
    /// the previous outputs on screen and surfaces the error.
    fn apply_command(&mut self) {
        let command = DriveCommand::new(self.direction, self.magnitude, self.twist, self.scale);
        let applied = (command, self.engine.detail_level());
        if self.last_applied == Some(applied) {
            return;
        }
        self.last_applied = Some(applied);

        match self.engine.update(command) {
            Ok(_) => {
                let projected = project(
                    self.engine.outputs(),
                    self.engine.wheel_values(),
                    &self.engine.command(),
                );
                match projected {
                    Ok(outputs) => {
                        self.outputs = outputs;
                        self.last_error = None;
                    }
                    Err(err) => {
                        log::error!("projection failed: {err}");
                        self.last_error = Some(err.to_string());
                    }
                }
            }
            Err(err) => {
                log::error!("rejected drive command: {err}");
                self.last_error = Some(err.to_string());
            }
        }
    }

    fn command_panel(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            ui.label("Direction");
            ui.add(egui::Slider::new(&mut self.direction, -2.0 * PI..=2.0 * PI).suffix(" rad"));
            ui.separator();
            ui.label("Magnitude");
            ui.add(egui::Slider::new(&mut self.magnitude, 0.0..=1.0));
            ui.separator();
            ui.label("Twist");
            ui.add(egui::Slider::new(&mut self.twist, -1.0..=1.0));
            ui.separator();
            ui.label("Scale");
            ui.add(egui::Slider::new(&mut self.scale, 0.0..=2.0));
        });

        ui.horizontal(|ui| {
            let mut level = self.settings.detail_level;
            ui.label("Detail");
            ui.radio_value(&mut level, DetailLevel::Basic, "Basic");
            ui.radio_value(&mut level, DetailLevel::Detailed, "Detailed");
            if level != self.settings.detail_level {
                self.settings.detail_level = level;
                self.engine.set_detail_level(level);
                self.settings.save(&self.settings_path);
            }

            ui.separator();
            if ui
                .checkbox(&mut self.settings.show_scene_grid, "Grid")
                .changed()
            {
                self.settings.save(&self.settings_path);
            }

            ui.separator();
            if ui.button("Stop").clicked() {
                self.direction = 0.0;
                self.magnitude = 0.0;
                self.twist = 0.0;
            }

            if let Some(err) = &self.last_error {
                ui.separator();
                ui.colored_label(egui::Color32::RED, err);
            }
        });
    }

    fn draw_chart(&self, ui: &mut egui::Ui) {
        Plot::new("kinematics_chart")
            .legend(Legend::default())
            .allow_scroll(false)
            .height(280.0)
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                    [CHART_MIN_X - 0.3, MIN - 0.1],
                    [CHART_MAX_X + 0.3, MAX + 0.1],
                ));
                plot_ui.line(
                    Line::new(WheelPair::Frbl.label(), curve_points(&self.outputs.frbl_curve))
                        .color(scene::wheel_pair_color(WheelPair::Frbl))
                        .width(2.5),
                );
                plot_ui.line(
                    Line::new(WheelPair::Flbr.label(), curve_points(&self.outputs.flbr_curve))
                        .color(scene::wheel_pair_color(WheelPair::Flbr))
                        .width(2.5),
                );
                // Vertical marker at the commanded direction.
                let x = self.outputs.marker_x;
                plot_ui.line(
                    Line::new(
                        "dir",
                        PlotPoints::from_iter([
                            [x, MAX + MARKER_OVERSHOOT],
                            [x, MIN - MARKER_OVERSHOOT],
                        ]),
                    )
                    .color(egui::Color32::WHITE)
                    .width(1.5),
                );
            });
    }

    fn draw_wheel_sliders(&self, ui: &mut egui::Ui, height_px: f32) {
        let desired = egui::vec2(ui.available_width(), height_px);
        let (response, painter) = ui.allocate_painter(desired, egui::Sense::hover());
        painter.rect_filled(response.rect, 4.0, ui.visuals().extreme_bg_color);

        let rect = response.rect.shrink(12.0);
        let column_w = rect.width() / 4.0;
        let track_w = 18.0;
        let half_travel = rect.height() / 2.0 - 18.0;
        let center_y = rect.center().y;

        for (i, wheel) in Wheel::ALL.into_iter().enumerate() {
            let cx = rect.left() + column_w * (i as f32 + 0.5);
            let color = scene::wheel_pair_color(wheel.pair());
            let drive = self.outputs.wheel_sliders[i];

            // Track with a center reference line.
            painter.rect_filled(
                egui::Rect::from_center_size(
                    egui::pos2(cx, center_y),
                    egui::vec2(track_w, half_travel * 2.0),
                ),
                3.0,
                ui.visuals().faint_bg_color,
            );
            painter.line_segment(
                [
                    egui::pos2(cx - track_w, center_y),
                    egui::pos2(cx + track_w, center_y),
                ],
                egui::Stroke::new(1.0, ui.visuals().weak_text_color()),
            );

            let top_px = (drive.top / SLIDER_AMPLIFY) as f32 * half_travel;
            if top_px > 0.0 {
                painter.rect_filled(
                    egui::Rect::from_min_max(
                        egui::pos2(cx - track_w / 2.0, center_y - top_px),
                        egui::pos2(cx + track_w / 2.0, center_y),
                    ),
                    0.0,
                    color,
                );
            }
            let bottom_px = (-drive.bottom / SLIDER_AMPLIFY) as f32 * half_travel;
            if bottom_px > 0.0 {
                painter.rect_filled(
                    egui::Rect::from_min_max(
                        egui::pos2(cx - track_w / 2.0, center_y),
                        egui::pos2(cx + track_w / 2.0, center_y + bottom_px),
                    ),
                    0.0,
                    color,
                );
            }

            painter.text(
                egui::pos2(cx, rect.bottom()),
                egui::Align2::CENTER_BOTTOM,
                format!("{} {:+.0}", wheel.label(), signed_value(drive)),
                egui::FontId::monospace(13.0),
                ui.visuals().text_color(),
            );
        }
    }
}

impl eframe::App for DashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_command();

        egui::TopBottomPanel::top("command_panel").show(ctx, |ui| {
            self.command_panel(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Wheel-pair power curves");
            self.draw_chart(ui);
            ui.separator();

            ui.columns(2, |columns| {
                columns[0].heading("Wheel power");
                let height = columns[0].available_height() - 8.0;
                self.draw_wheel_sliders(&mut columns[0], height);

                columns[1].heading("Vehicle");
                let height = columns[1].available_height() - 8.0;
                scene::draw_scene(
                    &mut columns[1],
                    &self.outputs,
                    self.settings.show_scene_grid,
                    height,
                );
            });
        });
    }
}

fn curve_points(curve: &WheelPairCurve) -> PlotPoints<'_> {
    PlotPoints::from_iter(curve.iter().map(|p| [p.index as f64, p.value]))
}

/// The single signed slider value: whichever half is driven.
fn signed_value(drive: SliderDrive) -> f64 {
    if drive.top > 0.0 {
        drive.top
    } else {
        drive.bottom
    }
}
