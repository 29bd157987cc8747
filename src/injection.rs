// 💉 Dependency Injection - Greet into any output sink
// Tests pass a Vec<u8>, the CLI passes stdout, the server builds a response body

use std::io::{self, Write};

/// The text written by [`greet`]
pub fn greeting(name: &str) -> String {
    format!("Hello, {}", name)
}

/// Write "Hello, {name}" to `writer`.
pub fn greet<W: Write>(mut writer: W, name: &str) -> io::Result<()> {
    write!(writer, "{}", greeting(name))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greet_into_buffer() {
        let mut buffer = Vec::new();

        greet(&mut buffer, "you").unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), "Hello, you");
    }

    #[test]
    fn test_greet_into_cursor() {
        let mut cursor = io::Cursor::new(Vec::new());

        greet(&mut cursor, "Elodie").unwrap();

        assert_eq!(cursor.into_inner(), b"Hello, Elodie");
    }

    #[test]
    fn test_greet_propagates_sink_errors() {
        struct BrokenSink;

        impl Write for BrokenSink {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let err = greet(BrokenSink, "you").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
