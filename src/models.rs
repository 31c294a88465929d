use std::collections::HashMap;
use std::ops::RangeInclusive;

/// Values the server stores for a single answer. Wider than the form's 0..=5
/// scale but small enough that no sum over a row or over the table overflows.
pub const ANSWER_RANGE: RangeInclusive<i64> = MIN_ANSWER..=MAX_ANSWER;
pub const MIN_ANSWER: i64 = -1000;
pub const MAX_ANSWER: i64 = 1000;

/// One scored behavioral indicator. `id` doubles as the form field name and
/// the storage column name.
#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub id: &'static str,
    pub text: &'static str,
    pub nullable: bool,
}

/// A named group of question ids used by the pie and radar charts.
#[derive(Debug, Clone, Copy)]
pub struct Category {
    pub name: &'static str,
    pub members: &'static [&'static str],
}

const fn required(id: &'static str, text: &'static str) -> Question {
    Question {
        id,
        text,
        nullable: false,
    }
}

const fn optional(id: &'static str, text: &'static str) -> Question {
    Question {
        id,
        text,
        nullable: true,
    }
}

static QUESTIONS: [Question; 22] = [
    required("eye_contact", "Child avoids eye contact"),
    required("response_to_name", "Does not respond when their name is called"),
    required("uses_gestures", "Uses gestures to communicate"),
    required("play_behavior", "Prefer to play alone"),
    required(
        "verbal_communication",
        "Struggles to engage in verbal communication with others",
    ),
    required(
        "social_smiling",
        "Does not smile back when someone smiles at them",
    ),
    required("shared_interest", "Uninterested in what others are doing"),
    required("follows_direction", "Struggles following sequential steps"),
    required(
        "repetitive_behaviors",
        "Repetitive behaviors (rocking, spinning, hand-flapping)",
    ),
    required(
        "routines_or_rituals",
        "Insistent on sticking to certain routines or rituals",
    ),
    required(
        "intense_interests",
        "Has intense interests in specific subjects or activities",
    ),
    required("reacts_to_changes", "Reacts to changes in their routine"),
    required("handles_frustration", "Unable to control frustration"),
    required("shows_empathy", "Lacks empathy towards others?"),
    required("calming_strategies", "Unable to calm themselves down"),
    optional(
        "age_started_speaking",
        "Delay or absence of typical developmental speech milestones",
    ),
    required("uses_language", "Using language not typical for their age"),
    required("imaginative_play", "Engages in imaginative play?"),
    required(
        "unusual_speech_patterns",
        "Uses repetitive or atypical speech patterns",
    ),
    required(
        "unusual_reactions",
        "Has unusual reactions to sensory experiences",
    ),
    required(
        "clothing_textures_intolerance",
        "Shows intolerance to certain clothing textures",
    ),
    required("seeks_sensory_experiences", "Seeks sensory experiences"),
];

// Only 18 of the 22 questions belong to a category. The remaining four
// (verbal_communication, social_smiling, shared_interest, follows_direction)
// count towards the total but not towards any category.
static CATEGORIES: [Category; 5] = [
    Category {
        name: "Social & Communication",
        members: &[
            "eye_contact",
            "response_to_name",
            "uses_gestures",
            "play_behavior",
        ],
    },
    Category {
        name: "Behavioral Patterns",
        members: &[
            "repetitive_behaviors",
            "routines_or_rituals",
            "intense_interests",
            "reacts_to_changes",
        ],
    },
    Category {
        name: "Language Development",
        members: &[
            "age_started_speaking",
            "uses_language",
            "imaginative_play",
            "unusual_speech_patterns",
        ],
    },
    Category {
        name: "Sensory Sensitivity",
        members: &[
            "unusual_reactions",
            "clothing_textures_intolerance",
            "seeks_sensory_experiences",
        ],
    },
    Category {
        name: "Emotional Regulation",
        members: &[
            "handles_frustration",
            "shows_empathy",
            "calming_strategies",
        ],
    },
];

/// The ordered question schema. Form parsing, storage columns, chart labels
/// and JSON output all iterate this one list, so their orders cannot drift
/// apart.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    questions: &'static [Question],
    categories: &'static [Category],
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(&QUESTIONS, &CATEGORIES)
    }
}

impl Catalog {
    pub const fn new(questions: &'static [Question], categories: &'static [Category]) -> Self {
        Self {
            questions,
            categories,
        }
    }

    pub fn questions(&self) -> &'static [Question] {
        self.questions
    }

    pub fn categories(&self) -> &'static [Category] {
        self.categories
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.questions.iter().position(|q| q.id == id)
    }

    /// Parse one integer per question from submitted form fields.
    ///
    /// Required questions must be present and integer-valued within
    /// [`ANSWER_RANGE`]. A nullable question that is absent or blank is
    /// stored as `None`.
    pub fn parse_submission(
        &self,
        form: &HashMap<String, String>,
    ) -> Result<Scores, SubmissionError> {
        let mut values = Vec::with_capacity(self.questions.len());

        for question in self.questions {
            let raw = form
                .get(question.id)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty());

            let value = match raw {
                Some(raw) => {
                    let value = raw.parse::<i64>().map_err(|_| SubmissionError::NotInteger {
                        field: question.id,
                        value: raw.to_owned(),
                    })?;
                    if !ANSWER_RANGE.contains(&value) {
                        return Err(SubmissionError::OutOfRange {
                            field: question.id,
                            value,
                        });
                    }
                    Some(value)
                }
                None if question.nullable => None,
                None => return Err(SubmissionError::Missing { field: question.id }),
            };
            values.push(value);
        }

        Ok(Scores::new(values))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("missing answer for `{field}`")]
    Missing { field: &'static str },
    #[error("answer for `{field}` is not an integer: {value:?}")]
    NotInteger { field: &'static str, value: String },
    #[error(
        "answer for `{field}` must be between {min} and {max}: {value}",
        min = MIN_ANSWER,
        max = MAX_ANSWER
    )]
    OutOfRange { field: &'static str, value: i64 },
}

/// Raw answer values in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scores(Vec<Option<i64>>);

impl Scores {
    pub fn new(values: Vec<Option<i64>>) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[Option<i64>] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Value for a question id, `None` when unanswered or unknown.
    pub fn get(&self, catalog: &Catalog, id: &str) -> Option<i64> {
        catalog
            .position(id)
            .and_then(|idx| self.0.get(idx).copied().flatten())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn full_form(value: &str) -> HashMap<String, String> {
        Catalog::default()
            .questions()
            .iter()
            .map(|q| (q.id.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn catalog_has_22_unique_questions_with_one_nullable() {
        let catalog = Catalog::default();
        assert_eq!(catalog.len(), 22);

        let ids: HashSet<_> = catalog.questions().iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), 22);

        let nullable: Vec<_> = catalog
            .questions()
            .iter()
            .filter(|q| q.nullable)
            .map(|q| q.id)
            .collect();
        assert_eq!(nullable, vec!["age_started_speaking"]);
    }

    #[test]
    fn categories_cover_exactly_18_known_questions() {
        let catalog = Catalog::default();
        let mut grouped = HashSet::new();
        for category in catalog.categories() {
            assert!(!category.members.is_empty());
            for id in category.members {
                assert!(catalog.position(id).is_some(), "unknown id {id}");
                assert!(grouped.insert(*id), "{id} is in two categories");
            }
        }
        assert_eq!(grouped.len(), 18);

        let mut ungrouped: Vec<_> = catalog
            .questions()
            .iter()
            .map(|q| q.id)
            .filter(|id| !grouped.contains(id))
            .collect();
        ungrouped.sort_unstable();
        assert_eq!(
            ungrouped,
            vec![
                "follows_direction",
                "shared_interest",
                "social_smiling",
                "verbal_communication"
            ]
        );
    }

    #[test]
    fn parse_submission_keeps_catalog_order() {
        let catalog = Catalog::default();
        let form: HashMap<String, String> = catalog
            .questions()
            .iter()
            .enumerate()
            .map(|(i, q)| (q.id.to_string(), i.to_string()))
            .collect();

        let scores = catalog.parse_submission(&form).unwrap();
        let expected: Vec<_> = (0..22).map(Some).collect();
        assert_eq!(scores.values(), expected.as_slice());
        assert_eq!(scores.get(&catalog, "seeks_sensory_experiences"), Some(21));
    }

    #[test]
    fn nullable_question_may_be_absent_or_blank() {
        let catalog = Catalog::default();

        let mut form = full_form("1");
        form.remove("age_started_speaking");
        let scores = catalog.parse_submission(&form).unwrap();
        assert_eq!(scores.get(&catalog, "age_started_speaking"), None);

        form.insert("age_started_speaking".to_string(), "  ".to_string());
        let scores = catalog.parse_submission(&form).unwrap();
        assert_eq!(scores.values()[15], None);
    }

    #[test]
    fn missing_required_answer_is_rejected() {
        let catalog = Catalog::default();
        let mut form = full_form("2");
        form.remove("shows_empathy");

        let err = catalog.parse_submission(&form).unwrap_err();
        assert!(matches!(
            err,
            SubmissionError::Missing {
                field: "shows_empathy"
            }
        ));
    }

    #[test]
    fn non_integer_answer_is_rejected() {
        let catalog = Catalog::default();
        let mut form = full_form("2");
        form.insert("age_started_speaking".to_string(), "two".to_string());

        let err = catalog.parse_submission(&form).unwrap_err();
        assert_eq!(
            err.to_string(),
            "answer for `age_started_speaking` is not an integer: \"two\""
        );
    }

    #[test]
    fn answers_outside_the_stored_range_are_rejected() {
        let catalog = Catalog::default();

        for extreme in [i64::MAX, i64::MIN, 1001, -1001] {
            let mut form = full_form("2");
            form.insert("eye_contact".to_string(), extreme.to_string());
            let err = catalog.parse_submission(&form).unwrap_err();
            assert!(matches!(
                err,
                SubmissionError::OutOfRange { field: "eye_contact", value } if value == extreme
            ));
        }

        let mut form = full_form("1000");
        form.insert("uses_language".to_string(), "-1000".to_string());
        assert!(catalog.parse_submission(&form).is_ok());
    }
}
