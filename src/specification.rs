//! Grid specifications: the rectangular mine layout a [`Grid`](crate::Grid)
//! is built from, plus the streaming text parser that produces one.
//!
//! The text format is a `"<rows> <columns>"` header line followed by `rows`
//! lines of exactly `columns` characters, `.` for an empty cell and `*` for a
//! mine. Carriage returns are ignored anywhere in the input.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use log::{debug, trace};
use rand::Rng;

use crate::common::SpecError;
use crate::config::{EMPTY_CHAR, MAX_HEADER_LEN, MINE_CHAR};

/// A rectangular boolean matrix, `true` where a mine is placed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Specification {
    height: usize,
    width: usize,
    mines: Vec<bool>,
}

impl Specification {
    /// Parse a specification from text.
    pub fn parse(text: &str) -> Result<Self, SpecError> {
        let mut scanner = Scanner::new();
        for ch in text.chars() {
            scanner.push(ch)?;
        }
        scanner.finish()
    }

    /// Parse a specification from a UTF-8 byte stream.
    ///
    /// Characters are decoded and fed to the parser as they arrive, and
    /// parsing stops at the first malformed character. The internal buffer may
    /// already have read further ahead from `reader` by then.
    #[cfg(feature = "std")]
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self, SpecError> {
        use std::io::Read;

        let mut scanner = Scanner::new();
        let mut pending = [0u8; 4];
        let mut len = 0;
        for byte in std::io::BufReader::new(reader).bytes() {
            let byte = byte?;
            if len == 0 && byte.is_ascii() {
                scanner.push(char::from(byte))?;
                continue;
            }
            pending[len] = byte;
            len += 1;
            match core::str::from_utf8(&pending[..len]) {
                Ok(decoded) => {
                    for ch in decoded.chars() {
                        scanner.push(ch)?;
                    }
                    len = 0;
                }
                // Incomplete multi-byte sequence, wait for more bytes.
                Err(err) if err.error_len().is_none() && len < pending.len() => {}
                Err(_) => return Err(invalid_utf8()),
            }
        }
        if len > 0 {
            return Err(invalid_utf8());
        }
        scanner.finish()
    }

    /// Build a specification from nested rows.
    ///
    /// Every row must have the length of the first one. An empty slice gives a
    /// `0x0` specification, which [`Grid::build`](crate::Grid::build) rejects.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self, SpecError> {
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut mines = Vec::with_capacity(rows.len() * width);
        for (row, cells) in rows.iter().enumerate() {
            let cells = cells.as_ref();
            if cells.len() != width {
                return Err(SpecError::Ragged {
                    row,
                    expected: width,
                    found: cells.len(),
                });
            }
            mines.extend_from_slice(cells);
        }
        Ok(Specification {
            height: rows.len(),
            width,
            mines,
        })
    }

    /// Place exactly `mines` mines at distinct random cells.
    pub fn random<R: Rng + ?Sized>(
        rng: &mut R,
        height: usize,
        width: usize,
        mines: usize,
    ) -> Result<Self, SpecError> {
        let too_large = || SpecError::TooLarge { height, width };
        let cells = height.checked_mul(width).ok_or_else(too_large)?;
        if mines > cells {
            return Err(SpecError::TooManyMines { mines, cells });
        }
        let mut layout = Vec::new();
        layout.try_reserve_exact(cells).map_err(|_| too_large())?;
        layout.resize(cells, false);
        for idx in rand::seq::index::sample(rng, cells, mines).into_iter() {
            layout[idx] = true;
        }
        debug!("generated {}x{} specification with {} mines", height, width, mines);
        Ok(Specification {
            height,
            width,
            mines: layout,
        })
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether (`row`, `column`) holds a mine; `None` when out of range.
    pub fn has_mine(&self, row: usize, column: usize) -> Option<bool> {
        if row < self.height && column < self.width {
            Some(self.mines[row * self.width + column])
        } else {
            None
        }
    }

    /// Coordinates of every mine, row-major.
    pub fn mines(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.mines
            .iter()
            .enumerate()
            .filter(|(_, mine)| **mine)
            .map(move |(idx, _)| (idx / width, idx % width))
    }

    pub fn mine_count(&self) -> usize {
        self.mines.iter().filter(|&&m| m).count()
    }
}

/// Writes the specification back out in the text format it is parsed from.
impl fmt::Display for Specification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.height, self.width)?;
        if self.width == 0 {
            for _ in 0..self.height {
                writeln!(f)?;
            }
            return Ok(());
        }
        for row in self.mines.chunks(self.width) {
            for &mine in row {
                let ch = if mine { MINE_CHAR } else { EMPTY_CHAR };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Push-based incremental parser for the specification text format.
///
/// Feed characters with [`Scanner::push`]; the first malformed character is
/// reported immediately. [`Scanner::finish`] validates the end of input.
///
/// A final row without a trailing newline is accepted when it is complete.
#[derive(Debug, Default)]
pub struct Scanner {
    started: bool,
    header: String,
    dimensions: Option<(usize, usize)>,
    row: usize,
    column: usize,
    mines: Vec<bool>,
}

impl Scanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next character of the input.
    pub fn push(&mut self, ch: char) -> Result<(), SpecError> {
        self.started = true;
        if ch == '\r' {
            return Ok(());
        }

        let (rows, columns) = match self.dimensions {
            Some(dims) => dims,
            None => {
                if ch == '\n' {
                    let dims = parse_header(&self.header)?;
                    debug!("specification header: {} rows, {} columns", dims.0, dims.1);
                    self.dimensions = Some(dims);
                } else if self.header.len() >= MAX_HEADER_LEN {
                    return Err(SpecError::InvalidHeader {
                        line: self.header.clone(),
                    });
                } else {
                    self.header.push(ch);
                }
                return Ok(());
            }
        };

        if self.row >= rows {
            return Err(SpecError::TooManyRows { expected: rows });
        }

        match ch {
            '\n' => {
                if self.column < columns {
                    return Err(SpecError::TooFewColumns {
                        row: self.row,
                        expected: columns,
                        found: self.column,
                    });
                }
                trace!("row {} complete", self.row);
                self.row += 1;
                self.column = 0;
            }
            MINE_CHAR | EMPTY_CHAR => {
                if self.column >= columns {
                    return Err(SpecError::TooManyColumns {
                        row: self.row,
                        expected: columns,
                    });
                }
                self.mines.push(ch == MINE_CHAR);
                self.column += 1;
            }
            found => {
                return Err(SpecError::InvalidCharacter {
                    row: self.row,
                    column: self.column,
                    found,
                })
            }
        }
        Ok(())
    }

    /// Signal end of input and produce the specification.
    pub fn finish(mut self) -> Result<Specification, SpecError> {
        let (rows, columns) = match self.dimensions {
            Some(dims) => dims,
            None if !self.started => return Err(SpecError::MissingHeader),
            None => parse_header(&self.header)?,
        };

        // Final row without its newline.
        if self.column > 0 {
            if self.column < columns {
                return Err(SpecError::TooFewColumns {
                    row: self.row,
                    expected: columns,
                    found: self.column,
                });
            }
            self.row += 1;
        }

        if self.row < rows {
            return Err(SpecError::TooFewRows {
                expected: rows,
                found: self.row,
            });
        }

        debug!("parsed {}x{} specification", rows, columns);
        Ok(Specification {
            height: rows,
            width: columns,
            mines: self.mines,
        })
    }
}

fn parse_header(line: &str) -> Result<(usize, usize), SpecError> {
    let invalid = || SpecError::InvalidHeader {
        line: String::from(line),
    };
    let mut tokens = line.split(' ');
    let (Some(rows), Some(columns), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(invalid());
    };
    let number = |token: &str| {
        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        token.parse::<usize>().map_err(|_| invalid())
    };
    Ok((number(rows)?, number(columns)?))
}

#[cfg(feature = "std")]
fn invalid_utf8() -> SpecError {
    SpecError::Io {
        kind: std::io::ErrorKind::InvalidData,
        message: String::from("stream did not contain valid UTF-8"),
    }
}
