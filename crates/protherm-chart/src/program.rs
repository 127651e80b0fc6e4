// File: crates/protherm-chart/src/program.rs
// Summary: Weekly program parser; builds the time-ordered set of programmed temperatures.
// Notes:
// - Lines are `"<d> <HH>:<MM><ws><value>"`. Anything else is skipped, not reported.
// - A program that does not start at Monday 00:00 gets a placeholder there
//   (value `None`), which the renderer pins to the bottom of the value range.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, trace, warn};

use crate::error::ProgramError;
use crate::week::WeekTime;

/// Programmed set-points keyed by time of week. `None` marks the synthetic start point.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Program {
    points: BTreeMap<WeekTime, Option<f64>>,
    min: Option<f64>,
    max: Option<f64>,
}

impl Program {
    pub fn new() -> Self { Self::default() }

    /// Insert or overwrite a set-point. Later writes to the same time win.
    pub fn insert(&mut self, at: WeekTime, value: f64) {
        self.min = Some(self.min.map_or(value, |m| m.min(value)));
        self.max = Some(self.max.map_or(value, |m| m.max(value)));
        self.points.insert(at, Some(value));
    }

    /// Add the Monday 00:00 placeholder when the program is non-empty and lacks one.
    fn ensure_week_start(&mut self) {
        if let Some((&first, _)) = self.points.first_key_value() {
            if first != WeekTime::START {
                debug!(first = %first, "program does not start at week start; adding placeholder");
                self.points.insert(WeekTime::START, None);
            }
        }
    }

    /// Parse a program from any buffered reader.
    ///
    /// A read error before the first line is returned; a later one ends the program
    /// at the last complete line and keeps what was parsed so far.
    pub fn parse<R: BufRead>(mut reader: R) -> std::io::Result<Self> {
        let mut program = Program::new();
        let mut buf = Vec::new();
        let mut line_no = 0usize;
        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => {}
                Err(e) if line_no == 0 => return Err(e),
                Err(e) => {
                    warn!(error = %e, after_line = line_no, "program read interrupted; keeping parsed lines");
                    break;
                }
            }
            line_no += 1;
            let line = String::from_utf8_lossy(&buf);
            match parse_line(&line) {
                Some((at, value)) => program.insert(at, value),
                None => trace!(line = line_no, "skipping unrecognised program line"),
            }
        }
        program.ensure_week_start();
        debug!(points = program.len(), min = ?program.min, max = ?program.max, "parsed program");
        Ok(program)
    }

    /// Parse a program held in memory.
    pub fn parse_str(text: &str) -> Self {
        // Reading from a byte slice cannot fail.
        Self::parse(text.as_bytes()).unwrap_or_default()
    }

    /// Open and parse a program file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ProgramError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| ProgramError::from_io(path, e))?;
        Self::parse(BufReader::new(file)).map_err(|e| ProgramError::from_io(path, e))
    }

    /// Like [`Program::load`], but a missing or unreadable file yields an empty program.
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(p) => p,
            Err(e) => {
                warn!(error = %e, "rendering empty program");
                Self::default()
            }
        }
    }

    pub fn is_empty(&self) -> bool { self.points.is_empty() }
    pub fn len(&self) -> usize { self.points.len() }

    /// Points in ascending time order, including the placeholder if present.
    pub fn points(&self) -> impl Iterator<Item = (WeekTime, Option<f64>)> + '_ {
        self.points.iter().map(|(&k, &v)| (k, v))
    }

    pub fn get(&self, at: WeekTime) -> Option<Option<f64>> { self.points.get(&at).copied() }

    /// Smallest programmed value (placeholder excluded).
    pub fn min_value(&self) -> Option<f64> { self.min }
    /// Largest programmed value (placeholder excluded).
    pub fn max_value(&self) -> Option<f64> { self.max }
}

/// Match one program line. Returns `None` for anything that is not a valid set-point.
fn parse_line(line: &str) -> Option<(WeekTime, f64)> {
    let line = line.trim();
    if line.len() < 9 || !line.is_char_boundary(7) {
        return None;
    }
    let (key, rest) = line.split_at(7);
    if !rest.starts_with(|c: char| c.is_whitespace()) {
        return None;
    }
    let value = rest.trim_start();
    if !is_decimal(value) {
        return None;
    }
    let at = WeekTime::parse(key)?;
    value.parse::<f64>().ok().map(|v| (at, v))
}

/// `\d+(\.\d+)?`
fn is_decimal(s: &str) -> bool {
    let (int, frac) = match s.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (s, None),
    };
    let digits = |p: &str| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit());
    digits(int) && frac.map_or(true, digits)
}
