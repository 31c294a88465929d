use maud::{html, Markup};

use crate::{models::Catalog, names};

pub fn form(catalog: &Catalog) -> Markup {
    html! {
        h1 { "Behavioral Screening Questionnaire" }
        p {
            "For each statement, choose how often it applies to the child. "
            "All questions are required unless they offer a "
            em { (names::NOT_APPLICABLE_LABEL) }
            " choice."
        }

        form method="post" action=(names::QUESTIONNAIRE_URL) {
            @for (idx, question) in catalog.questions().iter().enumerate() {
                fieldset.question {
                    legend { (idx + 1) ". " (question.text) }
                    @for (value, label) in names::ANSWER_SCALE {
                        label {
                            input type="radio"
                                  name=(question.id)
                                  value=(value)
                                  required[!question.nullable];
                            " " (label)
                        }
                    }
                    @if question.nullable {
                        label {
                            input type="radio" name=(question.id) value="";
                            " " (names::NOT_APPLICABLE_LABEL)
                        }
                    }
                }
            }
            button type="submit" { "Submit" }
        }
    }
}
