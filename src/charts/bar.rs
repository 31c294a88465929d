use color_eyre::Result;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::{svg, text, ChartInput, ChartKind, SCALE_MAX};

const SIZE: (u32, u32) = (1000, 620);
const SKY_BLUE: RGBColor = RGBColor(135, 206, 235);
const AXIS: RGBColor = RGBColor(90, 90, 90);

const LEFT: i32 = 440;
const RIGHT: i32 = 970;
const TOP: i32 = 50;
const BOTTOM: i32 = 560;

/// Vertical extent of row `i` out of `rows`; row 0 is the top one.
fn row_bounds(i: usize, rows: usize) -> (i32, i32) {
    let height = (BOTTOM - TOP) / rows.max(1) as i32;
    let top = TOP + i as i32 * height;
    (top, top + height)
}

/// Axis ticks from `lo` up to `hi`, at most eleven of them.
fn ticks(lo: i64, hi: i64) -> Vec<i64> {
    let (lo, hi) = (i128::from(lo), i128::from(hi));
    let step = ((hi - lo) / 10).max(1);
    (0..=10)
        .map(|k| lo + step * k)
        .take_while(|tick| *tick <= hi)
        .map(|tick| tick as i64)
        .collect()
}

/// Horizontal bar per question, first question at the top.
pub(super) fn render(input: &ChartInput<'_>) -> Result<String> {
    let values: Vec<i64> = input
        .scores
        .values()
        .iter()
        .map(|v| v.unwrap_or(0))
        .collect();

    let lo = values.iter().copied().min().unwrap_or(0).min(0);
    let hi = values.iter().copied().max().unwrap_or(0).max(SCALE_MAX);
    let span = (hi as f64 - lo as f64).max(1.0);
    let x = |v: i64| {
        LEFT + ((v as f64 - lo as f64) / span * f64::from(RIGHT - LEFT)).round() as i32
    };

    svg(SIZE, |root| {
        root.draw_text(
            ChartKind::Bar.title(),
            &text(20.0, Pos::new(HPos::Center, VPos::Center)),
            (SIZE.0 as i32 / 2, 22),
        )?;

        let rows = input.catalog.len();
        let label_style = text(11.0, Pos::new(HPos::Right, VPos::Center));

        for (i, (question, value)) in input.catalog.questions().iter().zip(&values).enumerate() {
            let (top, bottom) = row_bounds(i, rows);
            let middle = (top + bottom) / 2;
            let pad = (bottom - top) / 6;

            root.draw_text(question.text, &label_style, (LEFT - 8, middle))?;

            let (start, end) = if *value >= 0 {
                (x(0), x(*value))
            } else {
                (x(*value), x(0))
            };
            if end > start {
                root.draw(&Rectangle::new(
                    [(start, top + pad), (end, bottom - pad)],
                    SKY_BLUE.filled(),
                ))?;
            }
        }

        let axis_y = row_bounds(rows, rows).0;
        root.draw(&PathElement::new(
            vec![(LEFT, TOP), (LEFT, axis_y), (RIGHT, axis_y)],
            AXIS.stroke_width(1),
        ))?;

        let tick_style = text(11.0, Pos::new(HPos::Center, VPos::Top));
        for tick in ticks(lo, hi) {
            let tx = x(tick);
            root.draw(&PathElement::new(
                vec![(tx, axis_y), (tx, axis_y + 4)],
                AXIS.stroke_width(1),
            ))?;
            root.draw_text(&tick.to_string(), &tick_style, (tx, axis_y + 6))?;
        }

        root.draw_text(
            "Score",
            &text(13.0, Pos::new(HPos::Center, VPos::Top)),
            ((LEFT + RIGHT) / 2, axis_y + 26),
        )?;

        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Catalog, Scores};

    fn render_scores(scores: &Scores) -> String {
        let catalog = Catalog::default();
        render(&ChartInput {
            catalog: &catalog,
            scores,
            categories: &[],
            totals: &[],
        })
        .unwrap()
    }

    #[test]
    fn first_question_is_the_top_row() {
        assert_eq!(row_bounds(0, 22).0, TOP);
        for i in 1..22 {
            assert_eq!(row_bounds(i, 22).0, row_bounds(i - 1, 22).1);
        }
        assert!(row_bounds(21, 22).1 <= BOTTOM);
    }

    #[test]
    fn labels_are_drawn_in_catalog_order() {
        let svg = render_scores(&Scores::new(vec![Some(2); 22]));

        let mut last = 0;
        for question in Catalog::default().questions() {
            let at = svg
                .find(question.text)
                .unwrap_or_else(|| panic!("{} not drawn", question.id));
            assert!(at > last, "{} out of order", question.id);
            last = at;
        }
    }

    #[test]
    fn ticks_cover_the_axis() {
        assert_eq!(ticks(0, 5), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(ticks(-20, 80), (-20..=80).step_by(10).collect::<Vec<_>>());
    }

    #[test]
    fn extreme_values_render_with_bounded_ticks() {
        let ticks = ticks(i64::MIN, i64::MAX);
        assert_eq!(ticks.len(), 11);
        assert_eq!(ticks[0], i64::MIN);

        let mut values = vec![Some(1); 22];
        values[0] = Some(i64::MAX);
        values[1] = Some(i64::MIN);
        let svg = render_scores(&Scores::new(values));
        assert!(svg.contains(ChartKind::Bar.title()));
    }
}
