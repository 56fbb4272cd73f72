use crate::{collect, summarize, Number};

/// Turns delimited number lists into range summaries.
pub trait NumberRangeSummarizer {
    /// Parses `input` into ascending, unique numbers.
    fn collect(&self, input: Option<&str>) -> collect::Result<Vec<Number>>;

    /// Renders already ascending numbers as a summary such as `"1-3, 5"`.
    fn summarize_collection(&self, numbers: &[Number]) -> String;
}

/// Summarizer that collapses duplicates before folding runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniqueRangeSummarizer;

impl NumberRangeSummarizer for UniqueRangeSummarizer {
    fn collect(&self, input: Option<&str>) -> collect::Result<Vec<Number>> {
        collect::collect(input)
    }

    fn summarize_collection(&self, numbers: &[Number]) -> String {
        if numbers.is_empty() {
            return String::new();
        }
        summarize::summarize(numbers.iter().copied())
    }
}
