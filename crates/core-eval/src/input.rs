//! Line-oriented data stream for `read` statements (`SPEC_FULL.md` §4.4/§6).

use core_util::error::CoreError;

/// One decimal integer per line, consumed strictly in order.
pub struct DataStream {
    file: String,
    lines: std::vec::IntoIter<String>,
}

impl DataStream {
    pub fn new(file: impl Into<String>, data: &str) -> Self {
        let lines: Vec<String> = data.lines().map(str::to_string).collect();
        Self {
            file: file.into(),
            lines: lines.into_iter(),
        }
    }

    /// Read and parse the next line as a signed decimal integer.
    pub fn read_int(&mut self) -> Result<i64, CoreError> {
        let line = self.lines.next().ok_or_else(|| CoreError::DataEof {
            file: self.file.clone(),
        })?;
        if line.is_empty() {
            return Err(CoreError::DataEmptyLine {
                file: self.file.clone(),
            });
        }
        line.parse::<i64>().map_err(|_| CoreError::DataInvalidLine {
            file: self.file.clone(),
            text: line.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_integers_in_order() {
        let mut stream = DataStream::new("d.dat", "1\n2\n3\n");
        assert_eq!(stream.read_int().unwrap(), 1);
        assert_eq!(stream.read_int().unwrap(), 2);
        assert_eq!(stream.read_int().unwrap(), 3);
    }

    #[test]
    fn reads_negative_integers() {
        let mut stream = DataStream::new("d.dat", "-7\n");
        assert_eq!(stream.read_int().unwrap(), -7);
    }

    #[test]
    fn exhausted_stream_is_data_eof() {
        let mut stream = DataStream::new("d.dat", "1\n");
        stream.read_int().unwrap();
        assert!(matches!(stream.read_int().unwrap_err(), CoreError::DataEof { .. }));
    }

    #[test]
    fn empty_line_is_data_empty_line() {
        let mut stream = DataStream::new("d.dat", "1\n\n2\n");
        stream.read_int().unwrap();
        assert!(matches!(
            stream.read_int().unwrap_err(),
            CoreError::DataEmptyLine { .. }
        ));
    }

    #[test]
    fn non_numeric_line_is_data_invalid_line() {
        let mut stream = DataStream::new("d.dat", "abc\n");
        match stream.read_int().unwrap_err() {
            CoreError::DataInvalidLine { text, .. } => assert_eq!(text, "abc"),
            other => panic!("expected DataInvalidLine, got {other:?}"),
        }
    }
}
