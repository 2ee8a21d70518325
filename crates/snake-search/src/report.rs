//! The solution reporter interface and stock implementations.

use crate::moves::Solution;
use std::error::Error;
use std::fmt;
use std::io::{self, Write};

/// Receives each complete solution as the engine finds it.
///
/// The view borrows the engine's move stack and is only valid for the
/// duration of the call. Returning an error aborts the search.
pub trait SolutionReporter {
    /// Present one solution.
    fn report(&mut self, solution: &Solution<'_>) -> Result<(), ReportError>;
}

impl<R: SolutionReporter + ?Sized> SolutionReporter for &mut R {
    fn report(&mut self, solution: &Solution<'_>) -> Result<(), ReportError> {
        (**self).report(solution)
    }
}

impl<R: SolutionReporter + ?Sized> SolutionReporter for Box<R> {
    fn report(&mut self, solution: &Solution<'_>) -> Result<(), ReportError> {
        (**self).report(solution)
    }
}

/// Writing a solution failed.
#[derive(Debug)]
pub enum ReportError {
    /// The underlying writer returned an I/O error.
    Io(io::Error),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to write solution: {e}"),
        }
    }
}

impl Error for ReportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for ReportError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Renders each solution as a numbered step list followed by a blank line.
#[derive(Debug)]
pub struct WriterReporter<W> {
    out: W,
}

impl<W: Write> WriterReporter<W> {
    /// Report to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SolutionReporter for WriterReporter<W> {
    fn report(&mut self, solution: &Solution<'_>) -> Result<(), ReportError> {
        writeln!(self.out, "{solution}")?;
        writeln!(self.out)?;
        Ok(())
    }
}

/// Discards solutions; for count-only runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullReporter;

impl SolutionReporter for NullReporter {
    fn report(&mut self, _solution: &Solution<'_>) -> Result<(), ReportError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::MoveRecord;
    use snake_core::{Coord3, Direction};

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writer_reporter_appends_blank_line() {
        let moves = [MoveRecord {
            direction: Direction::Back,
            length: 2,
            endpoint: Coord3::new(0, 0, 1),
        }];
        let mut reporter = WriterReporter::new(Vec::new());
        reporter
            .report(&Solution::new(Coord3::new(0, 0, 0), &moves))
            .unwrap();
        let text = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(text, "1. Start at (0, 0, 0)\n2. back 2 to (0, 0, 1)\n\n");
    }

    #[test]
    fn writer_failure_surfaces_as_report_error() {
        let mut reporter = WriterReporter::new(BrokenPipe);
        let err = reporter
            .report(&Solution::new(Coord3::new(0, 0, 0), &[]))
            .unwrap_err();
        assert!(matches!(&err, ReportError::Io(e) if e.kind() == io::ErrorKind::BrokenPipe));
        assert!(err.to_string().starts_with("failed to write solution"));
    }

    fn report_centre<R: SolutionReporter>(mut reporter: R) {
        reporter
            .report(&Solution::new(Coord3::new(1, 1, 1), &[]))
            .unwrap();
    }

    #[test]
    fn mut_ref_forwards() {
        let mut inner = WriterReporter::new(Vec::new());
        report_centre(&mut inner);
        assert_eq!(inner.into_inner(), b"1. Start at (1, 1, 1)\n\n");
    }

    #[test]
    fn boxed_dyn_forwards() {
        let boxed: Box<dyn SolutionReporter> = Box::new(NullReporter);
        report_centre(boxed);
    }
}
