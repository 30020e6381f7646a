use crate::error::{OrderFlowError, Result};
use std::io::Read;
use std::str::FromStr;

/// What the user did at one point of the conversation.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TranscriptAction {
    /// Typed text or a tapped chip, routed through `process_message`.
    Message,
    /// Tapped "I have paid" outside the chat, routed through
    /// `trigger_confirmation`.
    Confirm,
}

impl FromStr for TranscriptAction {
    type Err = OrderFlowError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "message" => Ok(TranscriptAction::Message),
            "confirm" => Ok(TranscriptAction::Confirm),
            other => Err(OrderFlowError::TranscriptError(format!(
                "unknown action {other:?}"
            ))),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct TranscriptEntry {
    pub action: TranscriptAction,
    pub text: String,
}

impl TryFrom<csv::StringRecord> for TranscriptEntry {
    type Error = OrderFlowError;

    fn try_from(record: csv::StringRecord) -> Result<Self> {
        let action = record
            .get(0)
            .ok_or_else(|| OrderFlowError::TranscriptError("missing action".to_string()))?
            .parse()?;
        Ok(Self {
            action,
            text: record.get(1).unwrap_or_default().to_string(),
        })
    }
}

/// Reads a scripted conversation from a CSV source with an `action,text`
/// header.
///
/// Whitespace around fields is trimmed and short rows are accepted, so a
/// `confirm` row needs no text column.
pub struct TranscriptReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> TranscriptReader<R> {
    /// Creates a new `TranscriptReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and parses entries.
    pub fn entries(self) -> impl Iterator<Item = Result<TranscriptEntry>> {
        self.reader
            .into_records()
            .map(|result| TranscriptEntry::try_from(result?))
    }
}
