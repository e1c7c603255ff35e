//! Loose version ordering
//!
//! Wheel versions in the wheelhouse are not always PEP 440 compliant
//! (`1.6.2.post1`, `2018.1`, `1.0rc1`, ...), so they are compared
//! segment by segment instead of being parsed strictly:
//! - runs of digits are numeric segments, compared by value
//! - runs of lowercase letters are text segments, and so is every run of
//!   other characters between them, so `1.0aB` is `1`, `0`, `a`, `B`
//! - `.` only separates segments
//! - text segments compare lexically
//! - a text segment sorts below a numeric one
//! - a missing segment sorts below everything, so `1.3 < 1.3.0`

use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Digits without leading zeros ("0" for zero)
    Number(String),
    Text(String),
}

/// Character class a segment is made of
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Run {
    Digits,
    Lowercase,
    Other,
}

impl Run {
    fn of(c: char) -> Self {
        if c.is_ascii_digit() {
            Run::Digits
        } else if c.is_ascii_lowercase() {
            Run::Lowercase
        } else {
            Run::Other
        }
    }
}

impl Segment {
    fn number(digits: &str) -> Self {
        let trimmed = digits.trim_start_matches('0');
        if trimmed.is_empty() {
            Segment::Number("0".to_string())
        } else {
            Segment::Number(trimmed.to_string())
        }
    }
}

impl Ord for Segment {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            // Normalized digit strings: a longer one is a larger number
            (Segment::Number(a), Segment::Number(b)) => {
                a.len().cmp(&b.len()).then_with(|| a.cmp(b))
            }
            (Segment::Text(a), Segment::Text(b)) => a.cmp(b),
            (Segment::Text(_), Segment::Number(_)) => Ordering::Less,
            (Segment::Number(_), Segment::Text(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Segment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A version compared segment by segment
#[derive(Debug, Clone)]
pub struct LooseVersion {
    raw: String,
    segments: Vec<Segment>,
}

impl LooseVersion {
    pub fn parse(version: &str) -> Self {
        let mut segments = Vec::new();
        let mut current = String::new();
        let mut run = Run::Other;

        for c in version.chars() {
            if c == '.' {
                flush(&mut segments, &mut current, run);
                continue;
            }
            if !current.is_empty() && Run::of(c) != run {
                flush(&mut segments, &mut current, run);
            }
            run = Run::of(c);
            current.push(c);
        }
        flush(&mut segments, &mut current, run);

        Self {
            raw: version.to_string(),
            segments,
        }
    }

    /// The version string this was parsed from
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

fn flush(segments: &mut Vec<Segment>, current: &mut String, run: Run) {
    if current.is_empty() {
        return;
    }
    let segment = match run {
        Run::Digits => Segment::number(current),
        Run::Lowercase | Run::Other => Segment::Text(current.clone()),
    };
    segments.push(segment);
    current.clear();
}

impl Ord for LooseVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.segments.len().max(other.segments.len());
        (0..len)
            .map(|i| self.segments.get(i).cmp(&other.segments.get(i)))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for LooseVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for LooseVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for LooseVersion {}

impl fmt::Display for LooseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for LooseVersion {
    fn from(version: &str) -> Self {
        Self::parse(version)
    }
}
