use crate::{range::Range, Number};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    Building { start: Number, current: Number },
}

/// Folds an ascending sequence of numbers into runs of consecutive values.
///
/// Feed numbers with [`push`](Self::push) and seal the summary with
/// [`finish`](Self::finish), which flushes the open run. Input is expected to be strictly
/// ascending; that is what [`collect`](crate::collect()) produces.
#[derive(Debug)]
pub struct RangeFolder {
    state: State,
    ranges: Vec<Range>,
}

impl Default for RangeFolder {
    fn default() -> Self {
        Self::new()
    }
}

impl RangeFolder {
    pub fn new() -> Self {
        Self {
            state: State::Idle,
            ranges: Vec::new(),
        }
    }

    pub fn push(&mut self, n: Number) {
        let state = self.state;
        self.state = match state {
            State::Idle => State::Building {
                start: n,
                current: n,
            },
            State::Building { start, current } if current.checked_add(1) == Some(n) => {
                State::Building { start, current: n }
            }
            State::Building { start, current } => {
                self.close(start, current);
                State::Building {
                    start: n,
                    current: n,
                }
            }
        };
    }

    fn close(&mut self, start: Number, end: Number) {
        let range = Range { start, end };
        log::trace!("Closing range {}", range);
        self.ranges.push(range);
    }

    /// Flushes the open run and returns every run in the order it was closed.
    pub fn into_ranges(mut self) -> Vec<Range> {
        if let State::Building { start, current } = self.state {
            self.close(start, current);
            self.state = State::Idle;
        }
        self.ranges
    }

    /// Flushes the open run and renders the summary, runs joined by `", "`.
    pub fn finish(self) -> String {
        render(&self.into_ranges())
    }
}

/// Folds `numbers` into its maximal runs.
pub fn fold<I: IntoIterator<Item = Number>>(numbers: I) -> Vec<Range> {
    let mut folder = RangeFolder::new();
    numbers.into_iter().for_each(|n| folder.push(n));
    folder.into_ranges()
}

/// Renders `numbers` as a range summary, e.g. `[1, 2, 3, 5]` becomes `"1-3, 5"`.
///
/// An empty sequence gives an empty string.
pub fn summarize<I: IntoIterator<Item = Number>>(numbers: I) -> String {
    let summary = render(&fold(numbers));
    log::debug!("Summarized into {:?}", summary);
    summary
}

fn render(ranges: &[Range]) -> String {
    ranges
        .iter()
        .map(Range::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
