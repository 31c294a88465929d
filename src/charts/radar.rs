use std::f64::consts::TAU;

use color_eyre::Result;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::{svg, text, ChartInput, ChartKind, SCALE_MAX};

const SIZE: (u32, u32) = (800, 800);
const CENTER: (i32, i32) = (400, 430);
const RADIUS: f64 = 260.0;
const RINGS: i32 = 5;

const TITLE_BLUE: RGBColor = RGBColor(0, 0, 255);
const FILL: RGBColor = RGBColor(135, 206, 235);
const GRID: RGBColor = RGBColor(200, 200, 200);

/// Screen position at `radius` along spoke `i` of `n`. Spoke 0 points
/// straight up and the rest follow clockwise.
fn spoke(i: usize, n: usize, radius: f64) -> (i32, i32) {
    let angle = TAU * i as f64 / n as f64;
    (
        CENTER.0 + (radius * angle.sin()).round() as i32,
        CENTER.1 - (radius * angle.cos()).round() as i32,
    )
}

/// Closed polygon over the category means.
pub(super) fn render(input: &ChartInput<'_>) -> Result<String> {
    let n = input.categories.len();
    let scale = input
        .categories
        .iter()
        .map(|c| c.mean)
        .fold(SCALE_MAX as f64, f64::max);

    svg(SIZE, |root| {
        root.draw_text(
            ChartKind::Radar.title(),
            &(super::SANS, 24.0)
                .into_font()
                .color(&TITLE_BLUE)
                .pos(Pos::new(HPos::Center, VPos::Center)),
            (SIZE.0 as i32 / 2, 40),
        )?;

        for ring in 1..=RINGS {
            let r = (RADIUS * f64::from(ring) / f64::from(RINGS)).round() as i32;
            root.draw(&Circle::new(CENTER, r, GRID.stroke_width(1)))?;
        }

        if n == 0 {
            return Ok(());
        }

        for (i, category) in input.categories.iter().enumerate() {
            root.draw(&PathElement::new(
                vec![CENTER, spoke(i, n, RADIUS)],
                GRID.stroke_width(1),
            ))?;

            let (x, _) = spoke(i, n, RADIUS);
            let h_pos = match x.cmp(&CENTER.0) {
                std::cmp::Ordering::Less => HPos::Right,
                std::cmp::Ordering::Equal => HPos::Center,
                std::cmp::Ordering::Greater => HPos::Left,
            };
            root.draw_text(
                category.name,
                &text(14.0, Pos::new(h_pos, VPos::Center)),
                spoke(i, n, RADIUS + 24.0),
            )?;
        }

        let points: Vec<(i32, i32)> = input
            .categories
            .iter()
            .enumerate()
            .map(|(i, c)| spoke(i, n, RADIUS * c.mean.max(0.0) / scale))
            .collect();

        root.draw(&Polygon::new(points.clone(), FILL.mix(0.5).filled()))?;

        let mut outline = points;
        outline.push(outline[0]);
        root.draw(&PathElement::new(outline, BLUE.stroke_width(2)))?;

        Ok(())
    })
}
