pub mod collect;
pub mod range;
pub mod summarize;
pub mod summarizer;

/// Integer type handled by the collector and the folder.
pub type Number = i32;

pub use {
    collect::collect,
    range::{expand, parse_summary, Range, EXPAND_LIMIT},
    summarize::{fold, summarize, RangeFolder},
    summarizer::{NumberRangeSummarizer, UniqueRangeSummarizer},
};
