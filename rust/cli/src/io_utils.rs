//! Input utilities for interactive commands.

use std::io::BufRead;

/// Reads a line of input from a buffered reader, blocking until available.
///
/// Used by interactive commands. Trims whitespace from the input and
/// returns `None` on EOF or read errors.
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => {
            let trimmed = line.trim();
            Some(trimmed.to_string())
        }
        Err(_) => None, // Read error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_line_trims_and_eofs() {
        let mut input = Cursor::new(b"  d  \nq\n");
        assert_eq!(read_stdin_line(&mut input), Some("d".to_string()));
        assert_eq!(read_stdin_line(&mut input), Some("q".to_string()));
        assert_eq!(read_stdin_line(&mut input), None);
    }
}
