use {crate::Number, std::collections::BTreeSet};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Invalid number: {0}")]
    Format(String),

    #[error("Negative numbers are not supported")]
    Domain(Number),
}

impl Error {
    pub fn is_format(&self) -> bool {
        matches!(self, Error::Format(_))
    }

    pub fn is_domain(&self) -> bool {
        matches!(self, Error::Domain(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Parses a comma-separated list of non-negative integers, returning them ascending with
/// duplicates removed.
///
/// Tokens are trimmed and empty ones are skipped. The first invalid token aborts the whole
/// call: syntax is checked before sign, so `"-x"` is a [`Error::Format`] while `"-3"` is a
/// [`Error::Domain`]. A missing input yields an empty list.
pub fn collect<'a>(input: impl Into<Option<&'a str>>) -> Result<Vec<Number>> {
    let input = match input.into() {
        Some(input) => input,
        None => return Ok(Vec::new()),
    };

    let mut numbers = BTreeSet::new();
    for token in input.split(',').map(str::trim) {
        if token.is_empty() {
            continue;
        }
        let number = parse_token(token)?;
        if !numbers.insert(number) {
            log::trace!("Skipping duplicate {}", number);
        }
    }

    log::debug!("Collected {} unique numbers", numbers.len());
    Ok(numbers.into_iter().collect())
}

fn parse_token(token: &str) -> Result<Number> {
    let number = token.parse::<Number>().map_err(|_e| {
        log::debug!("Rejecting malformed token {:?}", token);
        Error::Format(token.into())
    })?;
    if number < 0 {
        log::debug!("Rejecting negative token {:?}", token);
        return Err(Error::Domain(number));
    }
    Ok(number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collect_smoke_test() {
        assert_eq!(collect("").unwrap(), vec![]);
        assert_eq!(collect(None::<&str>).unwrap(), vec![]);
        assert_eq!(collect("555").unwrap(), vec![555]);
        assert_eq!(collect("2,3,1").unwrap(), vec![1, 2, 3]);
        assert_eq!(collect("0,0,0").unwrap(), vec![0]);
        assert_eq!(collect("+7, 07").unwrap(), vec![7]);
    }

    #[test]
    fn empty_tokens_are_skipped() {
        assert_eq!(collect(",1,,2,  ,3,").unwrap(), vec![1, 2, 3]);
        assert_eq!(collect(" , ,").unwrap(), vec![]);
    }

    #[test]
    fn unicode_whitespace_is_trimmed() {
        assert_eq!(collect("\u{a0}5,\t6\u{2003}").unwrap(), vec![5, 6]);
        // Control characters are not whitespace.
        assert_eq!(collect("\u{1}5"), Err(Error::Format("\u{1}5".into())));
    }

    #[test]
    fn garbage_is_format_error() {
        assert_eq!(collect("1,2,three,4"), Err(Error::Format("three".into())));
        assert_eq!(collect("1, 2 x ,3"), Err(Error::Format("2 x".into())));
        assert_eq!(collect("1.5"), Err(Error::Format("1.5".into())));
        assert_eq!(collect("-"), Err(Error::Format("-".into())));
    }

    #[test]
    fn out_of_range_is_format_error() {
        assert!(collect("2147483648").unwrap_err().is_format());
        assert_eq!(collect("2147483647").unwrap(), vec![Number::MAX]);
    }

    #[test]
    fn negative_is_domain_error() {
        let err = collect("1,2,-3,4").unwrap_err();
        assert!(err.is_domain());
        assert_eq!(err.to_string(), "Negative numbers are not supported");
    }

    #[test]
    fn first_bad_token_wins() {
        assert!(collect("-1,x").unwrap_err().is_domain());
        assert!(collect("x,-1").unwrap_err().is_format());
        // "-0" parses to zero, which is not negative.
        assert_eq!(collect("-0").unwrap(), vec![0]);
    }
}
