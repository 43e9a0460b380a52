//! Question sources.
//!
//! A [`QuestionSource`] turns an intake (job description and résumé) into
//! the two question collections. [`QuestionBank`] is a fixed bank: it
//! returns the same questions whatever the intake says. Banks come from
//! the built-in mock set or from a JSON file.
//!
//! Bank file format:
//!
//! ```json
//! {
//!   "technical":  [{ "text": "...", "difficulty": "medium", "model_answer": "..." }],
//!   "behavioral": [{ "text": "...", "difficulty": "easy",   "model_answer": "..." }]
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::{Error, Result};
use crate::types::{Difficulty, Question, QuestionCategory, QuestionSet};

/// Directory name under the platform config dir.
pub const CONFIG_DIR_NAME: &str = "interview-prep";

/// File name of the default bank inside [`CONFIG_DIR_NAME`].
pub const BANK_FILE_NAME: &str = "questions.json";

// ============================================================================
// SOURCE TRAIT
// ============================================================================

/// Produces questions for a job description and résumé.
pub trait QuestionSource {
    fn generate(&self, job_description: &str, resume: &str) -> Result<QuestionSet>;
}

// ============================================================================
// FIXED BANK
// ============================================================================

/// A fixed question bank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: QuestionSet,
}

impl QuestionBank {
    /// Wrap a question set after validating it.
    pub fn new(questions: QuestionSet) -> Result<Self> {
        validate(&questions)?;
        Ok(QuestionBank { questions })
    }

    /// The built-in mock questions.
    pub fn builtin() -> Self {
        QuestionBank {
            questions: builtin_questions(),
        }
    }

    /// Load a bank from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let questions: QuestionSet = serde_json::from_str(&raw).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        let bank = Self::new(questions)?;
        info!(
            "loaded {} technical and {} behavioral questions from {}",
            bank.questions.technical.len(),
            bank.questions.behavioral.len(),
            path.display()
        );
        Ok(bank)
    }

    /// Pick a bank: explicit path, then the default config file, then built-in.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match default_bank_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => {
                debug!("no question bank file, using built-in questions");
                Ok(Self::builtin())
            }
        }
    }

    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }
}

impl QuestionSource for QuestionBank {
    fn generate(&self, job_description: &str, resume: &str) -> Result<QuestionSet> {
        // Input text does not influence a fixed bank.
        debug!(
            "generating questions (job description {} chars, résumé {} chars)",
            job_description.chars().count(),
            resume.chars().count()
        );
        Ok(self.questions.clone())
    }
}

/// `<config dir>/interview-prep/questions.json`, if a config dir exists.
pub fn default_bank_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(BANK_FILE_NAME))
}

fn validate(questions: &QuestionSet) -> Result<()> {
    if questions.is_empty() {
        return Err(Error::EmptyBank);
    }
    for category in QuestionCategory::ALL {
        if let Some(index) = questions
            .get(category)
            .iter()
            .position(|q| q.text.trim().is_empty())
        {
            return Err(Error::InvalidQuestion { category, index });
        }
    }
    Ok(())
}

// ============================================================================
// BUILT-IN QUESTIONS
// ============================================================================

fn builtin_questions() -> QuestionSet {
    QuestionSet {
        technical: vec![
            Question::new(
                "What is a closure?",
                Difficulty::Medium,
                "A closure is a function bundled with the environment it was defined in. \
                 It keeps access to the variables it captured even after the enclosing scope \
                 has returned, which makes it useful for callbacks, iterators and factories.",
            ),
            Question::new(
                "Explain the difference between a process and a thread.",
                Difficulty::Easy,
                "A process has its own address space and OS resources. Threads live inside a \
                 process and share its memory, so they are cheaper to create and switch \
                 between but need synchronization around shared data.",
            ),
            Question::new(
                "How would you design a rate limiter for a public API?",
                Difficulty::Hard,
                "Start from the requirements: per-key limits, burst tolerance, and whether \
                 limits must be global. A token bucket per API key works for bursts. Keep the \
                 counters in a shared store such as Redis with atomic scripts, return 429 with \
                 a Retry-After header, and monitor rejection rates.",
            ),
            Question::new(
                "What happens when you type a URL into a browser and press Enter?",
                Difficulty::Medium,
                "The browser parses the URL, resolves the host via DNS, opens a TCP connection \
                 (plus TLS for HTTPS), sends an HTTP request, and receives a response. It then \
                 parses the HTML, fetches subresources, builds the DOM and CSSOM, lays out the \
                 page and paints it.",
            ),
        ],
        behavioral: vec![
            Question::new(
                "Tell me about a time you disagreed with a teammate.",
                Difficulty::Medium,
                "Situation: a teammate and I disagreed on a database migration plan. Task: we \
                 had to ship within the sprint. Action: I proposed we list the risks of both \
                 plans and test the riskiest step on staging. Result: we merged the best parts \
                 of both plans and shipped on time with no downtime.",
            ),
            Question::new(
                "Describe a project you are proud of.",
                Difficulty::Easy,
                "Pick a project with a measurable outcome. Explain the problem, your specific \
                 role, the decisions you made and why, and the result in numbers, such as \
                 latency cut in half or support tickets reduced.",
            ),
            Question::new(
                "Tell me about a time you failed.",
                Difficulty::Hard,
                "Choose a real failure you owned. Describe what happened, what you did to \
                 limit the damage, what you learned, and the concrete change you made \
                 afterwards so it did not happen again.",
            ),
        ],
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_bank_has_both_categories() {
        let bank = QuestionBank::builtin();
        assert!(!bank.questions().technical.is_empty());
        assert!(!bank.questions().behavioral.is_empty());
        assert!(validate(bank.questions()).is_ok());
    }

    #[test]
    fn builtin_bank_starts_with_closure_question() {
        let bank = QuestionBank::builtin();
        let first = &bank.questions().technical[0];
        assert_eq!(first.text, "What is a closure?");
        assert_eq!(first.difficulty, Difficulty::Medium);
    }

    #[test]
    fn generate_ignores_input_text() {
        let bank = QuestionBank::builtin();
        let a = bank.generate("Rust engineer", "ten years of C").unwrap();
        let b = bank.generate("Product manager", "MBA").unwrap();
        assert_eq!(a, b);
        assert_eq!(&a, bank.questions());
    }

    #[test]
    fn load_reads_json_bank() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"technical":[{{"text":"What is ownership?","difficulty":"easy","modelAnswer":"Each value has one owner."}}],
                "behavioral":[]}}"#
        )
        .unwrap();

        let bank = QuestionBank::load(file.path()).unwrap();
        assert_eq!(bank.questions().technical.len(), 1);
        assert_eq!(bank.questions().technical[0].model_answer, "Each value has one owner.");
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = QuestionBank::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn load_malformed_json_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = QuestionBank::load(file.path()).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn empty_bank_is_rejected() {
        let err = QuestionBank::new(QuestionSet::default()).unwrap_err();
        assert!(matches!(err, Error::EmptyBank));
    }

    #[test]
    fn blank_question_text_is_rejected() {
        let set = QuestionSet {
            technical: vec![Question::new("ok", Difficulty::Easy, "a")],
            behavioral: vec![
                Question::new("fine", Difficulty::Easy, "a"),
                Question::new("   ", Difficulty::Hard, "a"),
            ],
        };
        let err = QuestionBank::new(set).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidQuestion {
                category: QuestionCategory::Behavioral,
                index: 1
            }
        ));
    }

    #[test]
    fn resolve_prefers_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"behavioral":[{{"text":"Why us?","difficulty":"easy","model_answer":"Research."}}]}}"#
        )
        .unwrap();
        let bank = QuestionBank::resolve(Some(file.path())).unwrap();
        assert!(bank.questions().technical.is_empty());
        assert_eq!(bank.questions().behavioral[0].text, "Why us?");
    }

    #[test]
    fn default_bank_path_ends_with_bank_file() {
        if let Some(path) = default_bank_path() {
            assert!(path.ends_with(Path::new(CONFIG_DIR_NAME).join(BANK_FILE_NAME)));
        }
    }
}
