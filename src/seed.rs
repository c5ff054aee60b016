use thiserror::Error;

use crate::board::Board;

/// A seed line that failed validation. `line` is the zero-based
/// index of the offending input line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SeedError {
    /// The line does not split into exactly two fields.
    #[error("line {line} does not split into two comma-separated fields")]
    MalformedLine { line: usize },

    /// A field is not a base-10 integer literal.
    #[error("line {line}: {field:?} is not a base-10 integer")]
    NotNumeric { line: usize, field: String },

    /// The coordinate parsed but lies outside the board. Negative
    /// values land here, not under [`SeedError::NotNumeric`].
    #[error("line {line}: ({x}, {y}) is outside the {width}x{height} board")]
    OutOfRange {
        line: usize,
        x: i64,
        y: i64,
        width: usize,
        height: usize,
    },
}

impl SeedError {
    /// Zero-based index of the input line this error refers to.
    pub fn line(&self) -> usize {
        match *self {
            SeedError::MalformedLine { line } => line,
            SeedError::NotNumeric { line, .. } => line,
            SeedError::OutOfRange { line, .. } => line,
        }
    }
}

/// How [`Board::seed_from_text`] treats a mix of valid and invalid
/// lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SeedPolicy {
    /// Every line is validated on its own and every individually
    /// valid coordinate is applied, even when other lines fail.
    #[default]
    Independent,

    /// No coordinate is applied unless every line validates.
    AllOrNothing,
}

impl Board {
    /// Activates cells in bulk from coordinate text, one `x,y` pair
    /// per line.
    ///
    /// Each line must hold exactly two comma-separated fields, each a
    /// base-10 integer inside the board after surrounding whitespace
    /// is trimmed (`" 5 , 7 "` is fine). Blank lines are malformed,
    /// not skipped. A failing line reports exactly one error, checked
    /// in the order: field count, numeric parse (x before y), range.
    /// All failing lines are collected, in input order.
    ///
    /// Valid coordinates are set alive (idempotently, so a repeated
    /// coordinate stays alive). Under [`SeedPolicy::Independent`]
    /// that happens for every valid line even when the call returns
    /// `Err`; under [`SeedPolicy::AllOrNothing`] a single bad line
    /// leaves the board untouched. Either way the board stays fully
    /// usable after a failed seed.
    pub fn seed_from_text<I, S>(
        &mut self,
        lines: I,
        policy: SeedPolicy,
    ) -> Result<(), Vec<SeedError>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut pending = vec![];
        let mut errors = vec![];

        for (line, raw) in lines.into_iter().enumerate() {
            match parse_line(line, raw.as_ref(), self.width(), self.height()) {
                Ok((x, y)) => match policy {
                    SeedPolicy::Independent => self.set_alive(x, y),
                    SeedPolicy::AllOrNothing => pending.push((x, y)),
                },
                Err(e) => errors.push(e),
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        for (x, y) in pending {
            self.set_alive(x, y);
        }
        Ok(())
    }
}

fn parse_line(
    line: usize,
    raw: &str,
    width: usize,
    height: usize,
) -> Result<(usize, usize), SeedError> {
    let mut fields = raw.split(',');
    let (Some(xs), Some(ys), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(SeedError::MalformedLine { line });
    };

    let x = parse_field(line, xs)?;
    let y = parse_field(line, ys)?;

    if x < 0 || y < 0 || x >= width as i64 || y >= height as i64 {
        return Err(SeedError::OutOfRange {
            line,
            x,
            y,
            width,
            height,
        });
    }

    Ok((x as usize, y as usize))
}

fn parse_field(line: usize, field: &str) -> Result<i64, SeedError> {
    let field = field.trim();
    field.parse().map_err(|_| SeedError::NotNumeric {
        line,
        field: field.to_string(),
    })
}
