use crate::decode::{DecodeError, LineRejection, LinePattern, LogRecord, ParseQuality};
use flate2::read::MultiGzDecoder;
use std::fs::{File, Metadata};
use std::io::{self, BufRead, BufReader};
use std::iter::FusedIterator;
use std::path::{Path, PathBuf};

/// Single-pass, forward-only stream of [`LogRecord`]s.
///
/// Rejected lines are absorbed into [`ParseQuality`]. The quality summary is
/// emitted exactly once: by [`LogRecordReader::finish`], or on drop when the
/// reader is abandoned early (including while unwinding).
///
/// The reader is not restartable; once exhausted it keeps returning `None`.
pub struct LogRecordReader<R: BufRead = Box<dyn BufRead>> {
    path: PathBuf,
    source: R,
    pattern: LinePattern,
    threshold: f64,
    quality: ParseQuality,
    buf: Vec<u8>,
    failure: Option<DecodeError>,
    exhausted: bool,
    reported: bool,
}

impl LogRecordReader {
    /// Open `path`, transparently decompressing when the name ends in `.gz`.
    pub fn open(
        path: impl AsRef<Path>,
        pattern: LinePattern,
        threshold: f64,
    ) -> Result<Self, DecodeError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| DecodeError::open(path, e))?;
        let meta = file.metadata().map_err(|e| DecodeError::open(path, e))?;
        if !meta.is_file() {
            return Err(DecodeError::open(path, not_a_file(&meta)));
        }

        let gzip = is_gzip(path);
        // A zero-byte `.gz` has no gzip header; read it as an empty log.
        let source: Box<dyn BufRead> = if meta.len() == 0 {
            Box::new(io::empty())
        } else if gzip {
            Box::new(BufReader::new(MultiGzDecoder::new(file)))
        } else {
            Box::new(BufReader::new(file))
        };

        tracing::debug!(path = %path.display(), gzip, "log file opened");

        Ok(Self::with_source(path, source, pattern, threshold))
    }
}

impl<R: BufRead> LogRecordReader<R> {
    /// Decode from an arbitrary buffered source. `path` is only used in errors.
    pub fn with_source(
        path: impl Into<PathBuf>,
        source: R,
        pattern: LinePattern,
        threshold: f64,
    ) -> Self {
        Self {
            path: path.into(),
            source,
            pattern,
            threshold,
            quality: ParseQuality::default(),
            buf: Vec::with_capacity(512),
            failure: None,
            exhausted: false,
            reported: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Counters so far. Final only once the stream is exhausted.
    pub fn quality(&self) -> &ParseQuality {
        &self.quality
    }

    /// Close the stream: emit the quality summary and hand back the counters,
    /// or the I/O fault that cut the stream short.
    pub fn finish(mut self) -> Result<ParseQuality, DecodeError> {
        self.emit_summary();

        match self.failure.take() {
            Some(err) => Err(err),
            None => Ok(std::mem::take(&mut self.quality)),
        }
    }

    fn emit_summary(&mut self) {
        if self.reported {
            return;
        }
        self.reported = true;
        self.quality.report(self.threshold);
    }
}

impl<R: BufRead> Iterator for LogRecordReader<R> {
    type Item = LogRecord;

    fn next(&mut self) -> Option<LogRecord> {
        if self.exhausted {
            return None;
        }

        loop {
            self.buf.clear();
            match self.source.read_until(b'\n', &mut self.buf) {
                Ok(0) => {
                    self.exhausted = true;
                    return None;
                }
                Ok(_) => {}
                Err(source) => {
                    let line = self.quality.lines_count + 1;
                    tracing::error!(path = %self.path.display(), line, error = %source, "log read failed");
                    self.failure = Some(DecodeError::Read {
                        path: self.path.clone(),
                        line,
                        source,
                    });
                    self.exhausted = true;
                    return None;
                }
            }

            let line_no = self.quality.line_read();
            match decode_line(&self.pattern, &self.buf) {
                Ok(record) => return Some(record),
                Err(rejection) => {
                    tracing::trace!(line = line_no, ?rejection, "line skipped");
                    self.quality.line_rejected(line_no);
                }
            }
        }
    }
}

impl<R: BufRead> FusedIterator for LogRecordReader<R> {}

impl<R: BufRead> Drop for LogRecordReader<R> {
    fn drop(&mut self) {
        self.emit_summary();
    }
}

fn decode_line(pattern: &LinePattern, raw: &[u8]) -> Result<LogRecord, LineRejection> {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    let line = std::str::from_utf8(raw).map_err(|_| LineRejection::InvalidUtf8)?;
    pattern.parse(line)
}

fn not_a_file(meta: &Metadata) -> io::Error {
    let kind = if meta.is_dir() {
        io::ErrorKind::IsADirectory
    } else {
        io::ErrorKind::InvalidInput
    };
    io::Error::new(kind, "not a regular file")
}

pub(crate) fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}
