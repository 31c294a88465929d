use maud::{html, Markup};

use crate::{
    charts::ChartKind,
    names,
    scoring::{CategoryScore, Likelihood},
};

pub struct ResultData {
    pub assessment_id: i64,
    pub total: i64,
    pub likelihood: Likelihood,
    pub categories: Vec<CategoryScore>,
}

fn likelihood_class(likelihood: Likelihood) -> &'static str {
    match likelihood {
        Likelihood::Low => "likelihood-low",
        Likelihood::Moderate => "likelihood-moderate",
        Likelihood::High => "likelihood-high",
    }
}

pub fn result(data: ResultData) -> Markup {
    html! {
        h1 { "Assessment Result" }

        article {
            p { "Total score: " strong { (data.total) } }
            h2 class=(likelihood_class(data.likelihood)) { (data.likelihood.label()) }
            p {
                small {
                    "Raw answers: "
                    a href=(names::api_assessment_url(data.assessment_id)) { "JSON" }
                }
            }
        }

        @if !data.categories.is_empty() {
            article {
                h3 { "Scores by Category" }
                table {
                    thead { tr {
                        th { "Category" }
                        th { "Total" }
                        th { "Average" }
                    } }
                    tbody {
                        @for c in &data.categories {
                            tr {
                                td { (c.name) }
                                td { (c.sum) }
                                td { (format!("{:.2}", c.mean)) }
                            }
                        }
                    }
                }
            }
        }

        @for kind in ChartKind::ALL {
            figure.chart {
                img src=(names::chart_url(data.assessment_id, kind)) alt=(kind.title());
                figcaption { (kind.title()) }
            }
        }

        p {
            a href=(names::QUESTIONNAIRE_URL) { "Start a new assessment" }
        }
    }
}
