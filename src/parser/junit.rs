// JUnit XML report parser
// Root attributes give the totals, every <testcase> becomes one record.

use crate::error::{ReportError, Result};
use crate::report::types::{TestCase, TestStatus, UnitTestResults};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::path::Path;
use std::str::FromStr;

/// Parse a JUnit XML file from disk
pub fn parse_junit_xml(path: &Path) -> Result<UnitTestResults> {
    let content = std::fs::read_to_string(path).map_err(|e| ReportError::io(path, e))?;
    parse_junit_str(&content)
}

/// Child elements of <testcase> that decide its status
#[derive(Debug, Clone, Copy, PartialEq)]
enum Marker {
    Failure,
    Error,
    Skipped,
}

impl Marker {
    fn from_name(name: &[u8]) -> Option<Self> {
        match name {
            b"failure" => Some(Marker::Failure),
            b"error" => Some(Marker::Error),
            b"skipped" => Some(Marker::Skipped),
            _ => None,
        }
    }
}

/// A <testcase> whose end tag has not been seen yet
struct PendingCase {
    depth: usize,
    name: Option<String>,
    classname: Option<String>,
    time: f64,
    failure: Option<String>,
    error: Option<String>,
    skipped: bool,
}

impl PendingCase {
    fn open(e: &BytesStart<'_>, depth: usize) -> Self {
        Self {
            depth,
            name: attribute(e, b"name"),
            classname: attribute(e, b"classname"),
            time: numeric(e, b"time"),
            failure: None,
            error: None,
            skipped: false,
        }
    }

    /// Record a status child. Returns true when its text should be captured,
    /// which is only the first <failure> or <error>.
    fn mark(&mut self, marker: Marker) -> bool {
        match marker {
            Marker::Failure if self.failure.is_none() => {
                self.failure = Some(String::new());
                true
            }
            Marker::Error if self.error.is_none() => {
                self.error = Some(String::new());
                true
            }
            Marker::Skipped => {
                self.skipped = true;
                false
            }
            _ => false,
        }
    }

    fn append_text(&mut self, marker: Marker, text: &str) {
        let target = match marker {
            Marker::Failure => self.failure.as_mut(),
            Marker::Error => self.error.as_mut(),
            Marker::Skipped => None,
        };
        if let Some(buf) = target {
            buf.push_str(text);
        }
    }

    /// Fixed priority: failure, then error, then skipped, else passed.
    fn finish(self) -> TestCase {
        let non_empty = |text: String| if text.is_empty() { None } else { Some(text) };

        let (status, failure, error) = if let Some(text) = self.failure {
            (TestStatus::Failed, non_empty(text), None)
        } else if let Some(text) = self.error {
            (TestStatus::Error, None, non_empty(text))
        } else if self.skipped {
            (TestStatus::Skipped, None, None)
        } else {
            (TestStatus::Passed, None, None)
        };

        TestCase {
            name: self.name,
            classname: self.classname,
            time: self.time,
            status,
            failure,
            error,
        }
    }
}

/// Parse JUnit XML content
pub fn parse_junit_str(content: &str) -> Result<UnitTestResults> {
    let mut reader = Reader::from_str(content);

    let mut results = UnitTestResults::default();
    let mut seen_root = false;
    let mut depth = 0usize;
    let mut current: Option<PendingCase> = None;
    // Marker whose text is being collected and the depth it closes at
    let mut capture: Option<(Marker, usize)> = None;

    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => {
                // Only text ahead of the first nested element is kept
                capture = None;
                open_element(
                    e,
                    depth,
                    &mut seen_root,
                    &mut results,
                    &mut current,
                    &mut capture,
                    true,
                );
                depth += 1;
            }
            Event::Empty(ref e) => {
                capture = None;
                open_element(
                    e,
                    depth,
                    &mut seen_root,
                    &mut results,
                    &mut current,
                    &mut capture,
                    false,
                );
                // A self-closing <testcase/> opens and closes in one event
                if current.as_ref().is_some_and(|case| case.depth == depth) {
                    if let Some(case) = current.take() {
                        results.test_cases.push(case.finish());
                    }
                }
            }
            Event::Text(ref e) => {
                if let (Some((marker, _)), Some(case)) = (capture, current.as_mut()) {
                    case.append_text(marker, &e.unescape()?);
                }
            }
            Event::CData(ref e) => {
                if let (Some((marker, _)), Some(case)) = (capture, current.as_mut()) {
                    case.append_text(marker, &String::from_utf8_lossy(e));
                }
            }
            Event::End(_) => {
                depth = depth.checked_sub(1).ok_or_else(|| {
                    ReportError::MalformedXml("unbalanced closing tag".to_string())
                })?;

                if capture.is_some_and(|(_, d)| d == depth) {
                    capture = None;
                }
                if current.as_ref().is_some_and(|case| case.depth == depth) {
                    if let Some(case) = current.take() {
                        results.test_cases.push(case.finish());
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if !seen_root {
        return Err(ReportError::MalformedXml("no root element found".to_string()));
    }
    if depth != 0 {
        return Err(ReportError::MalformedXml(format!(
            "document ended with {} unclosed element(s)",
            depth
        )));
    }

    Ok(results)
}

fn open_element(
    e: &BytesStart<'_>,
    depth: usize,
    seen_root: &mut bool,
    results: &mut UnitTestResults,
    current: &mut Option<PendingCase>,
    capture: &mut Option<(Marker, usize)>,
    has_content: bool,
) {
    if depth == 0 {
        if *seen_root {
            return;
        }
        *seen_root = true;
        results.test_count = numeric(e, b"tests");
        results.failures = numeric(e, b"failures");
        results.errors = numeric(e, b"errors");
        results.skipped = numeric(e, b"skipped");
        results.time = numeric(e, b"time");
    }

    let name = e.name();
    if let Some(case) = current.as_mut() {
        // Only direct children decide the status
        if depth == case.depth + 1 {
            if let Some(marker) = Marker::from_name(name.as_ref()) {
                if case.mark(marker) && has_content {
                    *capture = Some((marker, depth));
                }
            }
        }
    } else if depth > 0 && name.as_ref() == b"testcase" {
        *current = Some(PendingCase::open(e, depth));
    }
}

fn attribute(e: &BytesStart<'_>, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == key)
        .and_then(|attr| attr.unescape_value().ok().map(|v| v.into_owned()))
}

/// Numeric attribute; missing or unparsable values read as zero
fn numeric<T: FromStr + Default>(e: &BytesStart<'_>, key: &[u8]) -> T {
    attribute(e, key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or_default()
}
