use std::{borrow::Cow, collections::HashMap, io::BufRead};

use tracing::warn;

use crate::{Error, ErrorKind};

/// Pairs parsed from one file. Built fresh per file, last pair wins.
pub type EnvMap = HashMap<String, String>;

#[inline]
pub fn is_comment(line: &str) -> bool {
    line.starts_with('#')
}

/// Splits `KEY=VALUE` on its only `=`.
///
/// Comments, blank lines and lines with no or more than one `=` yield `None`.
/// Key and value are returned verbatim, nothing is trimmed or unescaped.
pub fn parse_line(line: &str) -> Option<(&str, &str)> {
    if is_comment(line) {
        return None;
    }

    let (key, value) = line.split_once('=')?;
    if value.contains('=') {
        return None;
    }

    Some((key, value))
}

pub fn parse_str(src: &str) -> EnvMap {
    let mut vars = EnvMap::new();
    for line in src.split('\n') {
        insert_line(&mut vars, strip_cr(line));
    }
    vars
}

/// Reads all lines of `reader` into a map.
///
/// Lines are not required to be valid UTF-8. Invalid sequences are replaced
/// by U+FFFD and the line is parsed like any other. An IO error ends the scan;
/// the pairs collected up to that point are still returned together with
/// the error.
pub fn parse_reader(reader: &mut dyn BufRead) -> (EnvMap, Option<Error>) {
    let mut vars = EnvMap::new();
    let mut buf = Vec::new();
    let mut lineno: usize = 0;

    loop {
        buf.clear();
        lineno += 1;

        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                let err = Error::with_cause(ErrorKind::ReadError, LineError { lineno, cause: err });
                return (vars, Some(err));
            }
        }

        let bytes = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
        let line = String::from_utf8_lossy(bytes);
        if matches!(line, Cow::Owned(_)) {
            warn!("line {lineno}: invalid UTF-8 replaced");
        }
        insert_line(&mut vars, strip_cr(&line));
    }

    (vars, None)
}

#[inline]
fn strip_cr(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

#[inline]
fn insert_line(vars: &mut EnvMap, line: &str) {
    if let Some((key, value)) = parse_line(line) {
        vars.insert(key.to_owned(), value.to_owned());
    }
}

#[derive(Debug, thiserror::Error)]
#[error("line {lineno}: {cause}")]
pub struct LineError {
    lineno: usize,
    #[source]
    cause: std::io::Error,
}

impl LineError {
    #[inline]
    pub fn lineno(&self) -> usize {
        self.lineno
    }
}
