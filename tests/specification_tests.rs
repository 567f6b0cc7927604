use std::io::{self, Read};

use minegrid::{Scanner, SpecError, Specification};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_parse_valid_specification() {
    let spec = Specification::parse("3 3\n*..\n...\n..*\n").unwrap();
    let expected = Specification::from_rows(&[
        [true, false, false],
        [false, false, false],
        [false, false, true],
    ])
    .unwrap();
    assert_eq!(spec, expected);
    assert_eq!(spec.mines().collect::<Vec<_>>(), vec![(0, 0), (2, 2)]);
    assert_eq!(spec.mine_count(), 2);
}

#[test]
fn test_final_newline_optional() {
    let with = Specification::parse("3 3\n*..\n...\n..*\n").unwrap();
    let without = Specification::parse("3 3\n*..\n...\n..*").unwrap();
    assert_eq!(with, without);
}

#[test]
fn test_carriage_returns_ignored() {
    let spec = Specification::parse("2 2\r\n*.\r\n.*\r\n").unwrap();
    assert_eq!(spec.has_mine(0, 0), Some(true));
    assert_eq!(spec.has_mine(1, 1), Some(true));
    assert_eq!(spec.has_mine(2, 0), None);
}

#[test]
fn test_short_row_fails() {
    let err = Specification::parse("3 3\n*..\n..\n..*").unwrap_err();
    assert_eq!(err, SpecError::TooFewColumns { row: 1, expected: 3, found: 2 });
}

#[test]
fn test_short_row_fails_before_next_row() {
    let mut scanner = Scanner::new();
    for ch in "3 3\n*..\n..".chars() {
        scanner.push(ch).unwrap();
    }
    assert_eq!(
        scanner.push('\n').unwrap_err(),
        SpecError::TooFewColumns { row: 1, expected: 3, found: 2 }
    );
}

/// Reader that fails if the parser pulls bytes past the first malformed row.
struct Tripwire {
    data: &'static [u8],
    limit: usize,
    pos: usize,
}

impl Read for Tripwire {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.pos >= self.limit {
            return Err(io::Error::new(io::ErrorKind::Other, "read past malformed row"));
        }
        let end = self.limit.min(self.data.len()).min(self.pos + buf.len());
        let n = end - self.pos;
        buf[..n].copy_from_slice(&self.data[self.pos..end]);
        self.pos = end;
        Ok(n)
    }
}

#[test]
fn test_reader_stops_at_malformed_row() {
    let data = b"3 3\n*..\n..\n..*\n";
    // everything up to and including the short row's newline
    let reader = Tripwire { data, limit: 11, pos: 0 };
    let err = Specification::from_reader(reader).unwrap_err();
    assert_eq!(err, SpecError::TooFewColumns { row: 1, expected: 3, found: 2 });
}

#[test]
fn test_reader_parses_valid_input() {
    let spec = Specification::from_reader(&b"1 2\n.*\n"[..]).unwrap();
    assert_eq!(spec.mines().collect::<Vec<_>>(), vec![(0, 1)]);
}

#[test]
fn test_reader_error_surfaces_as_io() {
    let reader = Tripwire { data: b"2 2\n", limit: 4, pos: 0 };
    let err = Specification::from_reader(reader).unwrap_err();
    assert!(matches!(err, SpecError::Io { kind: io::ErrorKind::Other, .. }));
}

#[test]
fn test_reader_names_non_ascii_character() {
    let text = "1 2\n*é\n";
    let from_text = Specification::parse(text).unwrap_err();
    let from_reader = Specification::from_reader(text.as_bytes()).unwrap_err();
    assert_eq!(from_reader, from_text);
    assert_eq!(from_reader, SpecError::InvalidCharacter { row: 0, column: 1, found: 'é' });
}

#[test]
fn test_reader_rejects_invalid_utf8() {
    let err = Specification::from_reader(&b"1 2\n*\xff\n"[..]).unwrap_err();
    assert!(matches!(err, SpecError::Io { kind: io::ErrorKind::InvalidData, .. }));

    // a multi-byte sequence cut short by the end of input
    let err = Specification::from_reader(&b"1 1\n\xc3"[..]).unwrap_err();
    assert!(matches!(err, SpecError::Io { kind: io::ErrorKind::InvalidData, .. }));
}

#[test]
fn test_missing_rows_fail() {
    let err = Specification::parse("3 3\n*..\n...").unwrap_err();
    assert_eq!(err, SpecError::TooFewRows { expected: 3, found: 2 });

    let err = Specification::parse("3 3\n*..\n...\n").unwrap_err();
    assert_eq!(err, SpecError::TooFewRows { expected: 3, found: 2 });
}

#[test]
fn test_partial_final_row_fails() {
    let err = Specification::parse("2 3\n*..\n.").unwrap_err();
    assert_eq!(err, SpecError::TooFewColumns { row: 1, expected: 3, found: 1 });
}

#[test]
fn test_invalid_character_fails() {
    let err = Specification::parse("3 3\n*..\n...\n..X").unwrap_err();
    assert_eq!(err, SpecError::InvalidCharacter { row: 2, column: 2, found: 'X' });
    assert!(err.to_string().contains("row 2"));
}

#[test]
fn test_too_many_columns_fails() {
    let err = Specification::parse("2 2\n*..\n..\n").unwrap_err();
    assert_eq!(err, SpecError::TooManyColumns { row: 0, expected: 2 });
}

#[test]
fn test_too_many_rows_fails() {
    let err = Specification::parse("1 2\n*.\n..\n").unwrap_err();
    assert_eq!(err, SpecError::TooManyRows { expected: 1 });

    let err = Specification::parse("1 2\n*.\n\n").unwrap_err();
    assert_eq!(err, SpecError::TooManyRows { expected: 1 });
}

#[test]
fn test_header_errors() {
    assert_eq!(Specification::parse("").unwrap_err(), SpecError::MissingHeader);
    for header in ["3", "3 3 3", "3  3", "a 3", "3 -1", "+3 3", "3 +3", ""] {
        let text = format!("{}\n...\n", header);
        assert_eq!(
            Specification::parse(&text).unwrap_err(),
            SpecError::InvalidHeader { line: header.to_string() },
            "header {:?}",
            header
        );
    }
}

#[test]
fn test_header_without_rows() {
    assert_eq!(
        Specification::parse("2 2").unwrap_err(),
        SpecError::TooFewRows { expected: 2, found: 0 }
    );
}

#[test]
fn test_overlong_header_rejected() {
    let text = "1".repeat(200);
    assert!(matches!(
        Specification::parse(&text).unwrap_err(),
        SpecError::InvalidHeader { .. }
    ));
}

#[test]
fn test_ragged_rows_rejected() {
    let rows: [&[bool]; 2] = [&[true, false], &[true]];
    assert_eq!(
        Specification::from_rows(&rows).unwrap_err(),
        SpecError::Ragged { row: 1, expected: 2, found: 1 }
    );
}

#[test]
fn test_display_matches_input_format() {
    let text = "2 3\n*..\n..*\n";
    let spec = Specification::parse(text).unwrap();
    assert_eq!(spec.to_string(), text);
}

#[test]
fn test_random_places_exact_mine_count() {
    let mut rng = SmallRng::seed_from_u64(42);
    let spec = Specification::random(&mut rng, 9, 9, 10).unwrap();
    assert_eq!((spec.height(), spec.width()), (9, 9));
    assert_eq!(spec.mine_count(), 10);

    let full = Specification::random(&mut rng, 2, 2, 4).unwrap();
    assert_eq!(full.mine_count(), 4);
}

#[test]
fn test_random_is_reproducible() {
    let a = Specification::random(&mut SmallRng::seed_from_u64(7), 16, 30, 99).unwrap();
    let b = Specification::random(&mut SmallRng::seed_from_u64(7), 16, 30, 99).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_random_rejects_too_many_mines() {
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(
        Specification::random(&mut rng, 2, 2, 5).unwrap_err(),
        SpecError::TooManyMines { mines: 5, cells: 4 }
    );
}

#[test]
fn test_random_rejects_oversized_layout() {
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(
        Specification::random(&mut rng, usize::MAX, 2, 0).unwrap_err(),
        SpecError::TooLarge { height: usize::MAX, width: 2 }
    );
    assert_eq!(
        Specification::random(&mut rng, usize::MAX / 2, 2, 0).unwrap_err(),
        SpecError::TooLarge { height: usize::MAX / 2, width: 2 }
    );
}
