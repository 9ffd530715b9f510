//! Multi-case text format.
//!
//! `t`, then per case: `n`, n lines `x y` (P), `m`, m lines `x y` (R).
//! Tokens are whitespace separated; line breaks carry no meaning.

use std::fmt::Write as _;
use std::str::{FromStr, SplitAsciiWhitespace};

use anyhow::{anyhow, bail, Context, Result};
use hullcross::geom::{Point, COORD_LIMIT};
use hullcross::search::Case;

struct Tokens<'a> {
    iter: std::iter::Peekable<SplitAsciiWhitespace<'a>>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            iter: text.split_ascii_whitespace().peekable(),
        }
    }

    fn value<T>(&mut self, what: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        let tok = self
            .iter
            .next()
            .ok_or_else(|| anyhow!("unexpected end of input, expected {what}"))?;
        tok.parse::<T>()
            .with_context(|| format!("invalid {what}: {tok:?}"))
    }

    fn coord(&mut self, what: &str) -> Result<i64> {
        let v: i64 = self.value(what)?;
        if !(-COORD_LIMIT..=COORD_LIMIT).contains(&v) {
            bail!("{what} {v} outside [-{COORD_LIMIT}, {COORD_LIMIT}]");
        }
        Ok(v)
    }

    fn point_set(&mut self, name: &str) -> Result<Vec<Point>> {
        let n: usize = self.value(&format!("{name} point count"))?;
        (1..=n)
            .map(|id| {
                let x = self.coord(&format!("{name}[{id}].x"))?;
                let y = self.coord(&format!("{name}[{id}].y"))?;
                Ok(Point::new(x, y, id))
            })
            .collect()
    }
}

/// Parse all cases. Empty input is zero cases; anything else must be complete.
pub fn parse_cases(text: &str) -> Result<Vec<Case>> {
    let mut tok = Tokens::new(text);
    if tok.iter.peek().is_none() {
        return Ok(Vec::new());
    }
    let t: usize = tok.value("test case count")?;
    let mut cases = Vec::new();
    for case_no in 1..=t {
        let p = tok
            .point_set("P")
            .with_context(|| format!("case {case_no}"))?;
        let r = tok
            .point_set("R")
            .with_context(|| format!("case {case_no}"))?;
        cases.push(Case::new(p, r));
    }
    if let Some(extra) = tok.iter.next() {
        bail!("unexpected trailing token {extra:?} after {t} cases");
    }
    Ok(cases)
}

/// Render cases in the input format (ids are implied by order).
pub fn write_cases(cases: &[Case]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", cases.len());
    for case in cases {
        for set in [&case.p, &case.r] {
            let _ = writeln!(out, "{}", set.len());
            for p in set {
                let _ = writeln!(out, "{} {}", p.x(), p.y());
            }
        }
    }
    out
}
