//! Painted top-down vehicle scene.
//!
//! Frame, mecanum wheels, and the command overlays: a direction arrow
//! rotated/scaled per the projected transform and a curved side arrow for
//! the twist component. Pure drawing; all values arrive pre-projected.

use dashcore::types::{Wheel, WheelPair};
use nalgebra::{Rotation2, Vector2};
use projection::{ArrowTransform, ProjectedOutputs, Side, SideArrowTransform};

// Scene geometry in meters.
const INBASE_LENGTH: f64 = 1.6;
const INBASE_WIDTH: f64 = 1.2;
const WHEEL_WIDTH: f64 = 0.3;
const WHEEL_DIAMETER: f64 = 0.5;
const GRID_SIZE: f64 = 4.0;
const GRID_INNER_INSET: f64 = 0.2;
/// Lateral placement of the twist arrows relative to the frame center.
const SIDE_ARROW_LATERAL: f64 = 0.6;
/// Arrow mesh size at transform scale 1.0.
const ARROW_NOMINAL: f64 = 4.0;
const SIDE_ARROW_NOMINAL: f64 = 2.0;

const FRAME_COLOR: egui::Color32 = egui::Color32::WHITE;
const INNER_BASE_COLOR: egui::Color32 = egui::Color32::from_rgba_premultiplied(113, 17, 127, 128);
const ARROW_COLOR: egui::Color32 = egui::Color32::from_rgb(226, 35, 255);
const FRBL_COLOR: egui::Color32 = egui::Color32::from_rgb(232, 77, 209);
const FLBR_COLOR: egui::Color32 = egui::Color32::from_rgb(79, 70, 250);

pub fn wheel_pair_color(pair: WheelPair) -> egui::Color32 {
    match pair {
        WheelPair::Frbl => FRBL_COLOR,
        WheelPair::Flbr => FLBR_COLOR,
    }
}

pub fn draw_scene(ui: &mut egui::Ui, outputs: &ProjectedOutputs, show_grid: bool, height_px: f32) {
    let desired = egui::vec2(ui.available_width(), height_px);
    let (response, painter) = ui.allocate_painter(desired, egui::Sense::hover());

    // Front is up; x grows to the right.
    let scale_px = (response.rect.height() / (GRID_SIZE as f32 + 1.5))
        .min(response.rect.width() / (GRID_SIZE as f32 + 1.5));
    let to_screen = |x: f64, y: f64| -> egui::Pos2 {
        let sx = response.rect.center().x + x as f32 * scale_px;
        let sy = response.rect.center().y - y as f32 * scale_px;
        egui::pos2(sx, sy)
    };

    painter.rect_filled(response.rect, 4.0, ui.visuals().extreme_bg_color);

    if show_grid {
        draw_grid(&painter, ui, &to_screen);
    }
    draw_frame(&painter, &to_screen);
    for wheel in Wheel::ALL {
        draw_wheel(&painter, &to_screen, wheel);
    }
    if let Some(arrow) = &outputs.arrow {
        draw_direction_arrow(&painter, &to_screen, arrow);
    }
    if let Some(side_arrow) = &outputs.side_arrow {
        draw_side_arrow(&painter, &to_screen, side_arrow);
    }
}

fn draw_grid(
    painter: &egui::Painter,
    ui: &egui::Ui,
    to_screen: &impl Fn(f64, f64) -> egui::Pos2,
) {
    let stroke = egui::Stroke::new(1.0, ui.visuals().weak_text_color());
    let half = GRID_SIZE / 2.0;
    let lines = [-half, -half + GRID_INNER_INSET, 0.0, half - GRID_INNER_INSET, half];
    for offset in lines {
        painter.line_segment([to_screen(offset, -half), to_screen(offset, half)], stroke);
        painter.line_segment([to_screen(-half, offset), to_screen(half, offset)], stroke);
    }

    let font = egui::FontId::proportional(14.0);
    let color = ui.visuals().weak_text_color();
    painter.text(
        to_screen(0.0, half + 0.35),
        egui::Align2::CENTER_CENTER,
        "Front",
        font.clone(),
        color,
    );
    painter.text(
        to_screen(0.0, -half - 0.35),
        egui::Align2::CENTER_CENTER,
        "Back",
        font.clone(),
        color,
    );
    painter.text(
        to_screen(half + 0.45, 0.0),
        egui::Align2::CENTER_CENTER,
        "Right",
        font.clone(),
        color,
    );
    painter.text(
        to_screen(-half - 0.45, 0.0),
        egui::Align2::CENTER_CENTER,
        "Left",
        font,
        color,
    );
}

fn draw_frame(painter: &egui::Painter, to_screen: &impl Fn(f64, f64) -> egui::Pos2) {
    let hw = INBASE_WIDTH / 2.0;
    let hl = INBASE_LENGTH / 2.0;
    let corners = [
        to_screen(-hw, hl),
        to_screen(hw, hl),
        to_screen(hw, -hl),
        to_screen(-hw, -hl),
    ];

    painter.add(egui::Shape::convex_polygon(
        corners.to_vec(),
        INNER_BASE_COLOR,
        egui::Stroke::NONE,
    ));
    let stroke = egui::Stroke::new(3.0, FRAME_COLOR);
    for i in 0..4 {
        painter.line_segment([corners[i], corners[(i + 1) % 4]], stroke);
        painter.circle_filled(corners[i], 4.0, FRAME_COLOR);
    }
}

fn draw_wheel(painter: &egui::Painter, to_screen: &impl Fn(f64, f64) -> egui::Pos2, wheel: Wheel) {
    let cx = match wheel {
        Wheel::FrontRight | Wheel::BackRight => INBASE_WIDTH / 2.0 + WHEEL_WIDTH / 2.0,
        Wheel::FrontLeft | Wheel::BackLeft => -(INBASE_WIDTH / 2.0 + WHEEL_WIDTH / 2.0),
    };
    let cy = match wheel {
        Wheel::FrontRight | Wheel::FrontLeft => INBASE_LENGTH / 2.0,
        Wheel::BackRight | Wheel::BackLeft => -INBASE_LENGTH / 2.0,
    };
    let hw = WHEEL_WIDTH / 2.0;
    let hd = WHEEL_DIAMETER / 2.0;

    let stroke = egui::Stroke::new(2.0, wheel_pair_color(wheel.pair()));
    let corners = [
        to_screen(cx - hw, cy + hd),
        to_screen(cx + hw, cy + hd),
        to_screen(cx + hw, cy - hd),
        to_screen(cx - hw, cy - hd),
    ];
    for i in 0..4 {
        painter.line_segment([corners[i], corners[(i + 1) % 4]], stroke);
    }

    // Roller hatching: each diagonal pair rolls the opposite way.
    let slope = match wheel.pair() {
        WheelPair::Frbl => 1.0,
        WheelPair::Flbr => -1.0,
    };
    for step in [-0.5, 0.0, 0.5] {
        let y0 = cy + step * hd;
        painter.line_segment(
            [
                to_screen(cx - hw, y0 - slope * hw),
                to_screen(cx + hw, y0 + slope * hw),
            ],
            stroke,
        );
    }
}

fn draw_direction_arrow(
    painter: &egui::Painter,
    to_screen: &impl Fn(f64, f64) -> egui::Pos2,
    arrow: &ArrowTransform,
) {
    let size = arrow.scale * ARROW_NOMINAL;
    // Heading is clockwise from front; Rotation2 is counter-clockwise.
    let rotation = Rotation2::new(-arrow.rotation_deg.to_radians());
    let place = |x: f64, y: f64| {
        let v = rotation * Vector2::new(x * size, y * size);
        to_screen(v.x, v.y)
    };

    let shaft = vec![
        place(-0.06, 0.2),
        place(0.06, 0.2),
        place(0.06, -0.5),
        place(-0.06, -0.5),
    ];
    painter.add(egui::Shape::convex_polygon(
        shaft,
        ARROW_COLOR,
        egui::Stroke::NONE,
    ));

    let head = vec![place(0.0, 0.5), place(0.2, 0.2), place(-0.2, 0.2)];
    painter.add(egui::Shape::convex_polygon(
        head,
        ARROW_COLOR,
        egui::Stroke::NONE,
    ));
}

fn draw_side_arrow(
    painter: &egui::Painter,
    to_screen: &impl Fn(f64, f64) -> egui::Pos2,
    side_arrow: &SideArrowTransform,
) {
    let (lateral, sweep) = match side_arrow.side {
        Side::Left => (-SIDE_ARROW_LATERAL, -1.0),
        Side::Right => (SIDE_ARROW_LATERAL, 1.0),
    };
    let center_y = INBASE_LENGTH / 2.0 + side_arrow.offset;
    let radius = side_arrow.scale * SIDE_ARROW_NOMINAL;

    // Half-circle arc from the rear of the arrow around to its tip.
    let mut points = Vec::with_capacity(25);
    for i in 0..=24 {
        let angle = std::f64::consts::PI * (i as f64 / 24.0) * sweep;
        let x = lateral + radius * angle.sin();
        let y = center_y + radius * angle.cos();
        points.push(to_screen(x, y));
    }
    let tip = points[points.len() - 1];
    let before_tip = points[points.len() - 2];
    painter.add(egui::Shape::line(
        points,
        egui::Stroke::new(3.0, ARROW_COLOR),
    ));

    // Arrowhead along the arc tangent.
    let tangent = (tip - before_tip).normalized();
    let normal = egui::vec2(-tangent.y, tangent.x);
    let head_len = 10.0;
    painter.add(egui::Shape::convex_polygon(
        vec![
            tip + tangent * head_len,
            tip + normal * head_len * 0.6,
            tip - normal * head_len * 0.6,
        ],
        ARROW_COLOR,
        egui::Stroke::NONE,
    ));
}
