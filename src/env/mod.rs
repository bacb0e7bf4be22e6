pub mod system;

use std::{borrow::Cow, collections::HashMap, hash::BuildHasher};

use crate::{options::{IllegalOption, OptionType}, Error, ErrorKind, Result};

pub use system::{SystemEnv, SYSTEM_ENV};

pub fn parse_bool(value: &str) -> Option<bool> {
    if value.eq_ignore_ascii_case("true") || value == "1" {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") || value == "0" {
        Some(false)
    } else {
        None
    }
}

pub trait GetEnv {
    fn get<'a>(&'a self, key: &str) -> Option<Cow<'a, str>>;

    #[inline]
    fn get_config_path(&self) -> Option<Cow<'_, str>> {
        self.get("DOTENV_CONFIG_PATH").filter(|path| !path.is_empty())
    }

    #[inline]
    fn get_strict(&self) -> Result<bool> {
        self.get_bool("DOTENV_CONFIG_STRICT", crate::options::DEFAULT_STRICT)
    }

    fn get_bool(&self, key: &str, default_value: bool) -> Result<bool> {
        let Some(value) = self.get(key) else {
            return Ok(default_value);
        };

        if value.is_empty() {
            return Ok(default_value);
        }

        let Some(value) = parse_bool(&value) else {
            return Err(Error::with_cause(
                ErrorKind::OptionsParseError,
                IllegalOption::new(key.to_owned(), value.into_owned(), OptionType::Bool)));
        };

        Ok(value)
    }
}

/// A writable key-value store that parsed pairs are applied to.
///
/// [`SystemEnv`] writes to the process environment; a plain `HashMap` keeps
/// everything in memory.
pub trait Env: GetEnv {
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<T: GetEnv> GetEnv for &T {
    #[inline]
    fn get<'a>(&'a self, key: &str) -> Option<Cow<'a, str>> {
        (**self).get(key)
    }
}

impl<T: GetEnv> GetEnv for &mut T {
    #[inline]
    fn get<'a>(&'a self, key: &str) -> Option<Cow<'a, str>> {
        (**self).get(key)
    }
}

impl<T: Env> Env for &mut T {
    #[inline]
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

impl<BH: BuildHasher> GetEnv for HashMap<String, String, BH> {
    #[inline]
    fn get<'a>(&'a self, key: &str) -> Option<Cow<'a, str>> {
        HashMap::get(self, key).map(|value| Cow::from(value.as_str()))
    }
}

impl<BH: BuildHasher> Env for HashMap<String, String, BH> {
    #[inline]
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
