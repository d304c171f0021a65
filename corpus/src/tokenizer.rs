use std::{
    io::{BufRead, Error as IoError, ErrorKind as IoErrorKind, Result as IoResult},
    iter,
};

/// Reads the lines of a text, each ending in `\n`, `\r\n` or a lone `\r`.
///
/// The line breaks are not part of the lines. A final line without a line break is still read.
pub(crate) fn lines(reader: impl BufRead) -> impl Iterator<Item = IoResult<String>> {
    reader.split(b'\n').flat_map(|chunk| {
        let lines = chunk.and_then(|mut chunk| {
            if chunk.last() == Some(&b'\r') {
                chunk.pop();
            }
            String::from_utf8(chunk).map_err(|error| IoError::new(IoErrorKind::InvalidData, error))
        });
        match lines {
            Ok(lines) => lines.split('\r').map(|line| Ok(line.to_string())).collect(),
            Err(error) => vec![Err(error)],
        }
    })
}

/// Checks for whitespace, including the ascii file, group, record and unit separators.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Splits a line on separator runs and appends the end-of-sequence token.
pub(crate) fn tokenize<'a>(line: &'a str, eos: &'a str) -> impl Iterator<Item = &'a str> {
    line.split(is_separator)
        .filter(|token| !token.is_empty())
        .chain(iter::once(eos))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn tokens<'a>(line: &'a str, eos: &'a str) -> Vec<&'a str> {
        tokenize(line, eos).collect()
    }

    fn read(text: &str) -> Vec<String> {
        lines(Cursor::new(text)).collect::<IoResult<_>>().unwrap()
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(tokens("the cat sat", "<eos>"), ["the", "cat", "sat", "<eos>"]);
    }

    #[test]
    fn test_whitespace_runs() {
        assert_eq!(tokens("  the \t cat\r\n", "<eos>"), ["the", "cat", "<eos>"]);
    }

    #[test]
    fn test_ascii_separators() {
        assert_eq!(
            tokens("a\x1cb\x1dc\x1ed\x1fe", "<eos>"),
            ["a", "b", "c", "d", "e", "<eos>"],
        );
        assert_eq!(tokens("a\x1bb", "<eos>"), ["a\x1bb", "<eos>"]);
    }

    #[test]
    fn test_empty_line() {
        assert_eq!(tokens("", "<eos>"), ["<eos>"]);
        assert_eq!(tokens(" \t ", "<eos>"), ["<eos>"]);
    }

    #[test]
    fn test_custom_eos() {
        assert_eq!(tokens("a b", "</s>"), ["a", "b", "</s>"]);
        assert_eq!(tokens("a", ""), ["a", ""]);
    }

    #[test]
    fn test_lines() {
        assert_eq!(read("a b\nc\n"), ["a b", "c"]);
        assert_eq!(read("a b\nc"), ["a b", "c"]);
        assert!(read("").is_empty());
        assert_eq!(read("\n"), [""]);
    }

    #[test]
    fn test_lines_carriage_return() {
        assert_eq!(read("a\rb\n"), ["a", "b"]);
        assert_eq!(read("a\r\nb\r\n"), ["a", "b"]);
        assert_eq!(read("a\r\r\n"), ["a", ""]);
        assert_eq!(read("a\r"), ["a"]);
        assert_eq!(read("a\rb"), ["a", "b"]);
    }

    #[test]
    fn test_lines_invalid_utf8() {
        let mut lines = lines(Cursor::new(&b"a\n\xff\n"[..]));
        assert_eq!(lines.next().unwrap().unwrap(), "a");
        assert_eq!(
            lines.next().unwrap().unwrap_err().kind(),
            IoErrorKind::InvalidData,
        );
    }
}
