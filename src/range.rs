use {
    crate::Number,
    lazy_static::lazy_static,
    regex::Regex,
    std::fmt,
};

lazy_static! {
    static ref RANGE_TOKEN: Regex = Regex::new(r#"^(\d+)(?:-(\d+))?$"#).unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Invalid range: {0}")]
    InvalidToken(String),

    #[error("Range start exceeds end: {0}")]
    Reversed(String),

    #[error("Summary covers {count} numbers, more than the limit of {limit}")]
    TooLarge { count: u64, limit: u64 },
}

pub type Result<T> = std::result::Result<T, Error>;

/// A run of consecutive numbers, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Range {
    pub start: Number,
    pub end: Number,
}

impl Range {
    pub fn single(n: Number) -> Self {
        Self { start: n, end: n }
    }

    pub fn is_single(&self) -> bool {
        self.start == self.end
    }

    /// How many numbers the range covers.
    pub fn len(&self) -> u64 {
        (i64::from(self.end) - i64::from(self.start)) as u64 + 1
    }

    pub fn numbers(&self) -> std::ops::RangeInclusive<Number> {
        self.start..=self.end
    }

    /// Parses one summary token, either `"7"` or `"7-9"`.
    pub fn from_token(token: &str) -> Result<Self> {
        let captures = RANGE_TOKEN
            .captures(token)
            .ok_or_else(|| Error::InvalidToken(token.into()))?;
        let start = captures[1]
            .parse::<Number>()
            .map_err(|_e| Error::InvalidToken(token.into()))?;
        let end = match captures.get(2) {
            Some(end) => end
                .as_str()
                .parse::<Number>()
                .map_err(|_e| Error::InvalidToken(token.into()))?,
            None => start,
        };
        if start > end {
            return Err(Error::Reversed(token.into()));
        }
        Ok(Self { start, end })
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single() {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// Upper bound on how many numbers [`expand`] will materialize.
pub const EXPAND_LIMIT: u64 = 1 << 24;

/// Parses a summary such as `"1-3, 5, 7-9"` into ascending ranges, merging overlapping and
/// adjacent ones.
///
/// Accepts the same loose separators as [`collect`](crate::collect()): tokens are trimmed
/// and empty ones skipped.
pub fn parse_summary(summary: &str) -> Result<Vec<Range>> {
    let mut ranges = Vec::new();
    for token in summary.split(',').map(str::trim) {
        if token.is_empty() {
            continue;
        }
        ranges.push(Range::from_token(token)?);
    }
    ranges.sort();

    let mut merged: Vec<Range> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            Some(last) if i64::from(range.start) <= i64::from(last.end) + 1 => {
                last.end = last.end.max(range.end);
            }
            _ => merged.push(range),
        }
    }
    log::debug!("Parsed summary into {} ranges", merged.len());
    Ok(merged)
}

/// Expands a summary such as `"1-3, 5, 7-9"` back into its numbers, ascending and unique.
///
/// Fails with [`Error::TooLarge`] instead of allocating more than [`EXPAND_LIMIT`] numbers.
pub fn expand(summary: &str) -> Result<Vec<Number>> {
    let ranges = parse_summary(summary)?;
    let count: u64 = ranges.iter().map(Range::len).sum();
    if count > EXPAND_LIMIT {
        return Err(Error::TooLarge {
            count,
            limit: EXPAND_LIMIT,
        });
    }

    let mut numbers = Vec::with_capacity(count as usize);
    for range in ranges {
        log::trace!("Expanding range {}", range);
        numbers.extend(range.numbers());
    }
    Ok(numbers)
}
