use color_eyre::Result;
use plotters::prelude::*;

use super::{svg, ChartInput, ChartKind, SANS};

const SIZE: (u32, u32) = (1000, 600);
const ORANGE: RGBColor = RGBColor(255, 165, 0);

pub const BIN_WIDTH: i64 = 10;
pub const BIN_COUNT: usize = 10;

/// Count totals into ten bins with edges 0, 10, ..., 100. Bins are half-open
/// except the last, which also takes totals of exactly 100. Totals outside
/// `[0, 100]` are not counted.
pub fn histogram_bins(totals: &[i64]) -> [u32; BIN_COUNT] {
    let upper = BIN_WIDTH * BIN_COUNT as i64;
    let mut bins = [0u32; BIN_COUNT];
    for &total in totals {
        if !(0..=upper).contains(&total) {
            continue;
        }
        let idx = ((total / BIN_WIDTH) as usize).min(BIN_COUNT - 1);
        bins[idx] += 1;
    }
    bins
}

pub(super) fn render(input: &ChartInput<'_>) -> Result<String> {
    let bins = histogram_bins(input.totals);
    let y_max = bins.iter().copied().max().unwrap_or(0).max(1) + 1;
    let x_max = (BIN_WIDTH * BIN_COUNT as i64) as i32;

    svg(SIZE, |root| {
        let mut chart = ChartBuilder::on(root)
            .caption(ChartKind::Histogram.title(), (SANS, 20))
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(55)
            .build_cartesian_2d(0..x_max, 0u32..y_max)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(BIN_COUNT + 1)
            .x_desc("Total Score")
            .y_desc("Frequency")
            .draw()?;

        chart.draw_series(bins.iter().enumerate().filter(|(_, &count)| count > 0).map(
            |(i, &count)| {
                let lo = i as i32 * BIN_WIDTH as i32;
                Rectangle::new([(lo, 0), (lo + BIN_WIDTH as i32, count)], ORANGE.filled())
            },
        ))?;

        chart.draw_series(bins.iter().enumerate().filter(|(_, &count)| count > 0).map(
            |(i, &count)| {
                let lo = i as i32 * BIN_WIDTH as i32;
                Rectangle::new(
                    [(lo, 0), (lo + BIN_WIDTH as i32, count)],
                    BLACK.stroke_width(1),
                )
            },
        ))?;

        Ok(())
    })
}
