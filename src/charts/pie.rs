use color_eyre::Result;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::{svg, text, ChartInput, ChartKind};

const SIZE: (u32, u32) = (800, 800);
const CENTER: (f64, f64) = (400.0, 420.0);
const RADIUS: f64 = 250.0;
/// Degrees, counter-clockwise from three o'clock.
const START_ANGLE: f64 = 140.0;
/// Offset of the first slice as a fraction of the radius.
const EXPLODE: f64 = 0.1;

const COLORS: [RGBColor; 5] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
];

fn point(center: (f64, f64), radius: f64, degrees: f64) -> (i32, i32) {
    let rad = degrees.to_radians();
    (
        (center.0 + radius * rad.cos()).round() as i32,
        (center.1 - radius * rad.sin()).round() as i32,
    )
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Slice {
    index: usize,
    fraction: f64,
    /// Degrees, counter-clockwise from three o'clock.
    start: f64,
    sweep: f64,
    center: (f64, f64),
}

impl Slice {
    fn bisector(&self) -> f64 {
        self.start + self.sweep / 2.0
    }
}

/// Lay out the non-empty slices counter-clockwise from [`START_ANGLE`]. The
/// first category's slice is pushed out along its bisector.
fn layout(values: &[f64]) -> Vec<Slice> {
    let total: f64 = values.iter().sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut start = START_ANGLE;
    let mut slices = Vec::with_capacity(values.len());
    for (index, value) in values.iter().enumerate() {
        let fraction = value / total;
        if fraction <= 0.0 {
            continue;
        }
        let sweep = fraction * 360.0;
        let offset = if index == 0 { EXPLODE * RADIUS } else { 0.0 };
        let rad = (start + sweep / 2.0).to_radians();
        slices.push(Slice {
            index,
            fraction,
            start,
            sweep,
            center: (CENTER.0 + offset * rad.cos(), CENTER.1 - offset * rad.sin()),
        });
        start += sweep;
    }
    slices
}

/// One slice per category sized by its sum. Negative sums draw as empty slices.
pub(super) fn render(input: &ChartInput<'_>) -> Result<String> {
    let values: Vec<f64> = input
        .categories
        .iter()
        .map(|c| c.sum.max(0) as f64)
        .collect();
    let slices = layout(&values);

    svg(SIZE, |root| {
        root.draw_text(
            ChartKind::Pie.title(),
            &text(20.0, Pos::new(HPos::Center, VPos::Center)),
            (SIZE.0 as i32 / 2, 30),
        )?;

        if slices.is_empty() {
            root.draw_text(
                "No scores to display",
                &text(16.0, Pos::new(HPos::Center, VPos::Center)),
                (CENTER.0 as i32, CENTER.1 as i32),
            )?;
            return Ok(());
        }

        let percent_style = text(13.0, Pos::new(HPos::Center, VPos::Center));

        for slice in &slices {
            let steps = (slice.sweep / 2.0).ceil().max(1.0) as usize;
            let mut outline = vec![point(slice.center, 0.0, 0.0)];
            outline.extend((0..=steps).map(|s| {
                point(
                    slice.center,
                    RADIUS,
                    slice.start + slice.sweep * s as f64 / steps as f64,
                )
            }));

            let color = COLORS[slice.index % COLORS.len()];
            root.draw(&Polygon::new(outline.clone(), color.filled()))?;
            outline.push(outline[0]);
            root.draw(&PathElement::new(outline, WHITE.stroke_width(1)))?;

            let middle = slice.bisector();
            root.draw_text(
                &format!("{:.1}%", slice.fraction * 100.0),
                &percent_style,
                point(slice.center, RADIUS * 0.6, middle),
            )?;

            let h_pos = if middle.to_radians().cos() >= 0.0 {
                HPos::Left
            } else {
                HPos::Right
            };
            root.draw_text(
                input.categories[slice.index].name,
                &text(14.0, Pos::new(h_pos, VPos::Center)),
                point(slice.center, RADIUS * 1.1, middle),
            )?;
        }

        Ok(())
    })
}
