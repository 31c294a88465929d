use color_eyre::Result;
use plotters::prelude::*;

use super::{svg, ChartInput, ChartKind, SANS, SCALE_MAX};

const SIZE: (u32, u32) = (1000, 600);
const POINT: RGBColor = RGBColor(0, 128, 0);

/// Answers to eye contact and verbal communication, unanswered as zero.
fn coordinates(input: &ChartInput<'_>) -> (i64, i64) {
    let value = |id: &str| input.scores.get(input.catalog, id).unwrap_or(0);
    (value("eye_contact"), value("verbal_communication"))
}

/// A single point at (eye contact, verbal communication).
pub(super) fn render(input: &ChartInput<'_>) -> Result<String> {
    let (eye_contact, verbal) = coordinates(input);

    let lo = eye_contact.min(verbal).min(0) as f64 - 0.5;
    let hi = eye_contact.max(verbal).max(SCALE_MAX) as f64 + 0.5;

    svg(SIZE, |root| {
        let mut chart = ChartBuilder::on(root)
            .caption(ChartKind::Scatter.title(), (SANS, 20))
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(55)
            .build_cartesian_2d(lo..hi, lo..hi)?;

        chart
            .configure_mesh()
            .x_desc("Eye Contact")
            .y_desc("Verbal Communication")
            .draw()?;

        chart.draw_series(std::iter::once(Circle::new(
            (eye_contact as f64, verbal as f64),
            6,
            POINT.filled(),
        )))?;

        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Catalog, Scores};

    #[test]
    fn point_uses_eye_contact_and_verbal_communication() {
        let catalog = Catalog::default();
        let scores = Scores::new(
            catalog
                .questions()
                .iter()
                .map(|q| match q.id {
                    "eye_contact" => Some(4),
                    "verbal_communication" => Some(1),
                    _ => Some(3),
                })
                .collect(),
        );
        let input = ChartInput {
            catalog: &catalog,
            scores: &scores,
            categories: &[],
            totals: &[],
        };

        assert_eq!(coordinates(&input), (4, 1));
        assert!(render(&input).unwrap().contains(ChartKind::Scatter.title()));
    }
}
