use std::{fs::File, io::BufReader};

use tracing::{debug, warn};

use crate::{options::DEFAULT_PATH, parser::parse_reader, Env, Error, ErrorKind, Options, Result};

/// Ordered list of files to load.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct EnvFile {
    filenames: Vec<String>,
}

impl Default for EnvFile {
    #[inline]
    fn default() -> Self {
        Self { filenames: vec![DEFAULT_PATH.to_owned()] }
    }
}

impl EnvFile {
    /// An empty list is replaced by [`DEFAULT_PATH`].
    pub fn new<I, S>(filenames: I) -> Self
    where I: IntoIterator<Item=S>, S: Into<String> {
        let filenames: Vec<String> = filenames.into_iter().map(Into::into).collect();
        if filenames.is_empty() {
            return Self::default();
        }
        Self { filenames }
    }

    #[inline]
    pub fn filenames(&self) -> &[String] {
        &self.filenames
    }

    /// Loads every file in order.
    ///
    /// Unless `options.strict` is set, a file that can't be opened is
    /// skipped, a read error keeps the lines read so far and a variable the
    /// environment refuses is skipped. Each is logged and never returned.
    pub fn load_into(&self, env: &mut dyn Env, options: &Options) -> Result<()> {
        for filename in &self.filenames {
            load_file(filename, env, options)?;
        }
        Ok(())
    }
}

fn load_file(filename: &str, env: &mut dyn Env, options: &Options) -> Result<()> {
    let file = match File::open(filename) {
        Ok(file) => file,
        Err(err) => {
            warn!("{filename}: {err}");
            if options.strict {
                return Err(Error::with_cause(ErrorKind::IOError, err));
            }
            return Ok(());
        }
    };

    let mut reader = BufReader::new(file);
    let (vars, read_error) = parse_reader(&mut reader);
    drop(reader);

    if let Some(err) = read_error {
        warn!("{filename}: reading the file: {err}");
        if options.strict {
            return Err(err);
        }
    }

    let mut count: usize = 0;
    for (key, value) in &vars {
        if let Err(err) = env.set(key, value) {
            warn!("{filename}: error setting env var: {err}");
            if options.strict {
                return Err(err);
            }
            continue;
        }
        count += 1;
    }

    debug!("{filename}: set {count} of {} variables", vars.len());

    Ok(())
}
