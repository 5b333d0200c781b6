//! Basic tests for furrow-core

use std::io::{self, Read};

use furrow_core::{CursorConfig, Input, ParseError, RowCursor};

fn parse(input: &str) -> (Vec<Vec<String>>, furrow_core::Result<()>) {
    let mut cursor = RowCursor::open(Input::from_text(input)).unwrap();
    let rows: Vec<_> = cursor.rows().collect();
    (rows, cursor.finish())
}

fn rows_of(input: &str) -> Vec<Vec<String>> {
    let (rows, result) = parse(input);
    result.unwrap();
    rows
}

#[test]
fn test_plain_row() {
    assert_eq!(rows_of("a,b,c\n"), vec![vec!["a", "b", "c"]]);
}

#[test]
fn test_quoted_cell_with_comma() {
    assert_eq!(
        rows_of("\"hello, world\",42\n"),
        vec![vec!["hello, world", "42"]]
    );
}

#[test]
fn test_escaped_quotes() {
    assert_eq!(
        rows_of("\"she said \"\"hi\"\"\",ok\n"),
        vec![vec!["she said \"hi\"", "ok"]]
    );
}

#[test]
fn test_crlf_rows() {
    assert_eq!(rows_of("a,b\r\nc,d\n"), vec![vec!["a", "b"], vec!["c", "d"]]);
}

#[test]
fn test_unterminated_quote() {
    let (rows, result) = parse("\"unterminated");
    assert!(rows.is_empty());
    assert_eq!(result, Err(ParseError::UnclosedQuote { offset: 0 }));
}

#[test]
fn test_quote_in_unquoted_cell() {
    let (rows, result) = parse("a\"b,c\n");
    assert!(rows.is_empty());
    assert_eq!(result, Err(ParseError::StrayQuote { offset: 1 }));
}

#[test]
fn test_line_ending_styles_are_equivalent() {
    let expected = vec![vec!["a", "b"], vec!["c", "d"]];
    assert_eq!(rows_of("a,b\r\nc,d\n"), expected);
    assert_eq!(rows_of("a,b\nc,d\n"), expected);
    assert_eq!(rows_of("a,b\rc,d\n"), expected);
}

#[test]
fn test_final_row_without_newline() {
    assert_eq!(rows_of("a,b\nc,d"), vec![vec!["a", "b"], vec!["c", "d"]]);
}

#[test]
fn test_empty_input_has_no_rows() {
    assert_eq!(rows_of(""), Vec::<Vec<String>>::new());
}

#[test]
fn test_empty_cells() {
    assert_eq!(rows_of(",,\n"), vec![vec!["", "", ""]]);
    assert_eq!(rows_of("a,\nb,\n"), vec![vec!["a", ""], vec!["b", ""]]);
}

#[test]
fn test_quoted_cell_with_embedded_newline() {
    assert_eq!(
        rows_of("\"line1\nline2\",x\n"),
        vec![vec!["line1\nline2", "x"]]
    );
}

#[test]
fn test_whitespace_between_quote_and_delimiter() {
    assert_eq!(rows_of("\"a\"  ,\"b\"\t\n"), vec![vec!["a", "b"]]);
}

#[test]
fn test_junk_after_closing_quote() {
    let (rows, result) = parse("\"a\" x\n");
    assert!(rows.is_empty());
    assert_eq!(
        result,
        Err(ParseError::DelimiterExpected {
            offset: 4,
            found: 'x'
        })
    );
}

#[test]
fn test_error_does_not_corrupt_earlier_rows() {
    let (rows, result) = parse("good,row\nalso\"bad\n");
    assert_eq!(rows, vec![vec!["good", "row"]]);
    assert!(matches!(result, Err(ParseError::StrayQuote { .. })));
}

#[test]
fn test_two_cursors_agree() {
    let input = "a,b\n\"c,c\",d\ne,f\n";
    assert_eq!(rows_of(input), rows_of(input));
}

#[test]
fn test_offset_resumption() {
    let input = "first,row\nsecond,row\nthird,row\n";

    let mut original = RowCursor::open(Input::from_text(input)).unwrap();
    original.next_row().unwrap();
    let checkpoint = original.offset();
    let continued: Vec<_> = original.rows().collect();
    original.finish().unwrap();

    let mut resumed = RowCursor::open(Input::from_text(input)).unwrap();
    resumed.skip_to(checkpoint).unwrap();
    let replayed: Vec<_> = resumed.rows().collect();
    resumed.finish().unwrap();

    assert_eq!(continued, replayed);
    assert_eq!(replayed, vec![vec!["second", "row"], vec!["third", "row"]]);
}

#[test]
fn test_small_buffer_forces_compaction() {
    let config = CursorConfig::builder().buffer_capacity(16).build().unwrap();
    let input: String = (0..200)
        .map(|i| format!("r{i},v{i}\n"))
        .collect();

    let mut cursor =
        RowCursor::open_with_config(Input::from_text(input), config).unwrap();
    let rows: Vec<_> = cursor.rows().collect();
    cursor.finish().unwrap();

    assert_eq!(rows.len(), 200);
    assert_eq!(rows[0], vec!["r0", "v0"]);
    assert_eq!(rows[199], vec!["r199", "v199"]);
}

#[test]
fn test_oversized_cell_is_an_error() {
    let config = CursorConfig::builder().buffer_capacity(16).build().unwrap();
    let input = format!("{},short\n", "x".repeat(64));

    let mut cursor =
        RowCursor::open_with_config(Input::from_text(input), config).unwrap();
    assert!(cursor.next_row().is_none());
    assert_eq!(
        cursor.finish(),
        Err(ParseError::CellOverflow {
            offset: 0,
            capacity: 16
        })
    );
}

/// Reader that serves a prefix of well-formed data, then fails
struct FailingReader {
    data: io::Cursor<Vec<u8>>,
    failed: bool,
}

impl FailingReader {
    fn new(data: &str) -> Self {
        Self {
            data: io::Cursor::new(data.as_bytes().to_vec()),
            failed: false,
        }
    }
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.data.read(buf)? {
            0 if !self.failed => {
                self.failed = true;
                Err(io::Error::new(io::ErrorKind::ConnectionReset, "link lost"))
            }
            n => Ok(n),
        }
    }
}

#[test]
fn test_io_failure_is_surfaced_after_buffered_rows() {
    let mut cursor = RowCursor::new(FailingReader::new("a,b\nc,d\n"));
    let rows: Vec<_> = cursor.rows().collect();

    // data read before the failure is still served
    assert_eq!(rows, vec![vec!["a", "b"], vec!["c", "d"]]);
    assert!(matches!(cursor.finish(), Err(ParseError::Io(_))));
}

#[test]
fn test_io_failure_during_skip_is_returned() {
    let mut cursor = RowCursor::new(FailingReader::new("a,b\n"));
    let err = cursor.skip_to(1000).unwrap_err();
    assert!(matches!(err, ParseError::Io(_)));
}

#[test]
fn test_checkpoint_of_drained_cursor_is_input_length() {
    let input = "a,b\nc,d\n";
    let mut cursor = RowCursor::open(Input::from_text(input)).unwrap();
    cursor.rows().for_each(drop);
    assert_eq!(cursor.offset(), input.len() as u64);
}
