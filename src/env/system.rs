use std::{borrow::Cow, collections::HashMap, sync::Mutex};

use crate::{error::InvalidVar, Error, ErrorKind, Result};

use super::{Env, GetEnv};

/// Accessing the environment is not thread safe, but the std::env::*
/// functions aren't marked as unsafe in this edition. This mutex doesn't
/// really fix the issue since it only applies to code accessing the
/// environment through [`SystemEnv`].
static MUTEX: Mutex<()> = Mutex::new(());

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv();

pub const SYSTEM_ENV: SystemEnv = SystemEnv();

impl SystemEnv {
    #[inline]
    pub fn new() -> Self {
        Self()
    }

    /// Snapshot of all variables whose name and value are valid unicode.
    pub fn to_hash_map(&self) -> HashMap<String, String> {
        let _lock = MUTEX.lock();

        std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect()
    }
}

/// Checks a pair against what the operating system accepts.
///
/// `std::env::set_var` panics on these instead of failing.
pub fn validate_var(key: &str, value: &str) -> std::result::Result<(), InvalidVar> {
    if key.is_empty() {
        return Err(InvalidVar::EmptyKey);
    }

    if key.contains('=') {
        return Err(InvalidVar::KeyContainsEquals(key.to_owned()));
    }

    if key.contains('\0') {
        return Err(InvalidVar::KeyContainsNull(key.to_owned()));
    }

    if value.contains('\0') {
        return Err(InvalidVar::ValueContainsNull(key.to_owned()));
    }

    Ok(())
}

impl GetEnv for SystemEnv {
    fn get<'a>(&'a self, key: &str) -> Option<Cow<'a, str>> {
        if validate_var(key, "").is_err() {
            return None;
        }

        let _lock = MUTEX.lock();

        std::env::var_os(key).map(|value| match value.into_string() {
            Ok(value) => Cow::from(value),
            Err(value) => Cow::from(value.to_string_lossy().into_owned()),
        })
    }
}

impl Env for SystemEnv {
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        validate_var(key, value)
            .map_err(|err| Error::with_cause(ErrorKind::InvalidVar, err))?;

        let _lock = MUTEX.lock();

        std::env::set_var(key, value);

        Ok(())
    }
}
