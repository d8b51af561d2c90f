//! Field validation for raw person records.
//!
//! [`FieldValidator`] runs a fixed chain of filters over raw rows and yields
//! the `(first_name, last_name)` pairs that survive. Each filter sees only the
//! output of the one before it; order and duplicates are preserved.

pub mod checks;
mod options;
mod report;

pub use checks::Stage;
pub use options::{
    DEFAULT_MAX_FIELD_LEN, DEFAULT_MAX_LOCAL_PART_LEN, EMAIL_INDEX, FIRST_NAME_INDEX,
    LAST_NAME_INDEX, ValidationOptions,
};
pub use report::{StageCount, ValidationReport};

use kinlink_model::{EventLog, PersonKey, RawRecord};

use crate::checks::{email, length, names};

/// The three fields kept by projection.
#[derive(Debug, Clone)]
struct Candidate {
    first_name: String,
    last_name: String,
    email: String,
}

impl Candidate {
    fn names(&self) -> [&str; 2] {
        [self.first_name.as_str(), self.last_name.as_str()]
    }
}

/// Output of [`FieldValidator::clean_with_report`].
#[derive(Debug, Clone, Default)]
pub struct Cleaned {
    pub people: Vec<PersonKey>,
    pub report: ValidationReport,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FieldValidator {
    options: ValidationOptions,
}

impl FieldValidator {
    pub fn new(options: ValidationOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ValidationOptions {
        &self.options
    }

    /// Run the chain and return the surviving name pairs in input order.
    pub fn clean(&self, records: Vec<RawRecord>, log: &dyn EventLog) -> Vec<PersonKey> {
        self.clean_with_report(records, log).people
    }

    /// Run the chain, also returning how many records each stage kept.
    pub fn clean_with_report(&self, records: Vec<RawRecord>, log: &dyn EventLog) -> Cleaned {
        let mut report = ValidationReport::default();
        let options = self.options;

        // 1. Field length
        let records = run_stage(Stage::FieldLength, records, &mut report, log, |record| {
            length::fields_within(record, options.max_field_len)
        });

        // 2. Projection to first_name, last_name, email
        let input = records.len();
        let mut candidates = Vec::with_capacity(input);
        for record in records {
            match record.project([FIRST_NAME_INDEX, LAST_NAME_INDEX, EMAIL_INDEX]) {
                Ok([first_name, last_name, email]) => candidates.push(Candidate {
                    first_name,
                    last_name,
                    email,
                }),
                Err(error) => {
                    report.malformed += 1;
                    log.warn(&format!("Skipping record: {error}"));
                }
            }
        }
        record_stage(Stage::Projection, input, candidates.len(), &mut report, log);

        // 3. Non-blank fields
        let candidates = run_stage(Stage::NonBlank, candidates, &mut report, log, |c| {
            !c.first_name.is_empty() && !c.last_name.is_empty() && !c.email.is_empty()
        });

        // 4. At least one letter per name
        let candidates = run_stage(Stage::AlphaPresence, candidates, &mut report, log, |c| {
            c.names().into_iter().all(names::has_alpha)
        });

        // 5. Letters, spaces and hyphens only
        let candidates = run_stage(Stage::CharacterSet, candidates, &mut report, log, |c| {
            c.names().into_iter().all(names::has_allowed_chars)
        });

        // 6. Email format and local part length
        let candidates = run_stage(Stage::EmailFormat, candidates, &mut report, log, |c| {
            email::is_valid_email(&c.email, options.max_local_part_len)
        });

        // 7. Drop the email
        let people: Vec<PersonKey> = candidates
            .into_iter()
            .map(|c| PersonKey::new(c.first_name, c.last_name))
            .collect();
        log.info(&format!("{} records passed filtering", people.len()));

        Cleaned { people, report }
    }
}

/// Keep the items accepted by `keep`, recording and logging the counts.
fn run_stage<T>(
    stage: Stage,
    items: Vec<T>,
    report: &mut ValidationReport,
    log: &dyn EventLog,
    keep: impl Fn(&T) -> bool,
) -> Vec<T> {
    let input = items.len();
    let kept: Vec<T> = items.into_iter().filter(|item| keep(item)).collect();
    record_stage(stage, input, kept.len(), report, log);
    kept
}

fn record_stage(
    stage: Stage,
    input: usize,
    kept: usize,
    report: &mut ValidationReport,
    log: &dyn EventLog,
) {
    report.stages.push(StageCount { stage, input, kept });
    log.info(&format!("{kept} out of {input} records {}", stage.outcome()));
}
