use anyhow::{ensure, Context, Result};

use crate::tableau::RawEquation;

/// Parses `"2 1 = 5"` (or `"2, 1 = 5"`) into `([2, 1], [5])`.
pub fn parse_equation(text: &str) -> Result<RawEquation> {
    let (coefficients, results) = text
        .split_once('=')
        .with_context(|| format!("equation `{text}` has no `=`"))?;
    let coefficients = parse_numbers(coefficients)
        .with_context(|| format!("parsing coefficients of `{text}`"))?;
    let results =
        parse_numbers(results).with_context(|| format!("parsing results of `{text}`"))?;
    ensure!(!coefficients.is_empty(), "equation `{text}` has no coefficients");
    ensure!(!results.is_empty(), "equation `{text}` has no results");
    Ok((coefficients, results))
}

pub fn parse_equations<S: AsRef<str>>(texts: &[S]) -> Result<Vec<RawEquation>> {
    texts
        .iter()
        .enumerate()
        .map(|(idx, text)| {
            parse_equation(text.as_ref()).with_context(|| format!("equation #{}", idx + 1))
        })
        .collect()
}

fn parse_numbers(side: &str) -> Result<Vec<f64>> {
    side.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<f64>()
                .with_context(|| format!("`{token}` is not a number"))
        })
        .collect()
}
