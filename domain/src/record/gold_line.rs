//! Gold file line value object

use super::entities::DprRecord;
use super::literal::render_answers;

/// Separator between the question and answers fields
pub const FIELD_SEPARATOR: char = '\t';

/// Terminator of every gold line
pub const LINE_TERMINATOR: char = '\n';

/// One line of the gold file (Value Object)
///
/// Holds the complete line text, terminator included:
/// `question + "\t" + answers + "\n"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoldLine {
    text: String,
}

impl GoldLine {
    /// Build the line for a record
    pub fn from_record(record: &DprRecord) -> Self {
        let answers = render_answers(&record.answers);

        let mut text = String::with_capacity(record.question.len() + answers.len() + 2);
        text.push_str(&record.question);
        text.push(FIELD_SEPARATOR);
        text.push_str(&answers);
        text.push(LINE_TERMINATOR);

        Self { text }
    }

    /// Full line text, including the trailing newline
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Question field (everything before the first separator)
    pub fn question(&self) -> &str {
        self.fields().0
    }

    /// Answers field (everything after the first separator, without terminator)
    pub fn answers(&self) -> &str {
        self.fields().1
    }

    fn fields(&self) -> (&str, &str) {
        let body = self
            .text
            .strip_suffix(LINE_TERMINATOR)
            .unwrap_or(&self.text);
        body.split_once(FIELD_SEPARATOR).unwrap_or((body, ""))
    }
}

impl std::fmt::Display for GoldLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&DprRecord> for GoldLine {
    fn from(record: &DprRecord) -> Self {
        GoldLine::from_record(record)
    }
}
