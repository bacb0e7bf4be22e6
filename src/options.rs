use std::collections::HashMap;

use crate::{env::{GetEnv, SystemEnv, SYSTEM_ENV}, Env, EnvFile, Result};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Options {
    /// Return the first IO or environment error instead of logging it.
    pub strict: bool,
}

pub const DEFAULT_PATH: &str = ".env";
pub const DEFAULT_STRICT: bool = false;

impl Default for Options {
    #[inline]
    fn default() -> Self {
        Self { strict: DEFAULT_STRICT }
    }
}

impl Options {
    pub fn try_from(env: &impl GetEnv) -> Result<Self> {
        let strict = env.get_strict()?;

        Ok(Self { strict })
    }

    #[inline]
    pub fn try_from_env() -> Result<Self> {
        Self::try_from(&SYSTEM_ENV)
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum OptionType {
    Bool,
}

impl std::fmt::Display for OptionType {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&self, f)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("{option_type} option has illegal value: {name:?}={value:?}")]
pub struct IllegalOption {
    name: String,
    value: String,
    option_type: OptionType,
}

impl IllegalOption {
    #[inline]
    pub fn new(name: String, value: String, option_type: OptionType) -> Self {
        Self { name, value, option_type }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Collects options and file names, then loads them.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Builder {
    options: Options,
    files: EnvFile,
}

impl Builder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options and the file name from `DOTENV_CONFIG_*` variables of `env`.
    pub fn try_from(env: &impl GetEnv) -> Result<Self> {
        let options = Options::try_from(env)?;
        let files = match env.get_config_path() {
            Some(path) => EnvFile::new([path.into_owned()]),
            None => EnvFile::default(),
        };

        Ok(Self { options, files })
    }

    #[inline]
    pub fn try_from_env() -> Result<Self> {
        Self::try_from(&SYSTEM_ENV)
    }

    #[inline]
    pub fn strict(mut self, value: bool) -> Self {
        self.options.strict = value;
        self
    }

    /// Replaces the file list with a single file.
    #[inline]
    pub fn path(self, value: impl Into<String>) -> Self {
        self.paths([value])
    }

    /// Replaces the file list. An empty list means [`DEFAULT_PATH`].
    #[inline]
    pub fn paths<I, S>(mut self, values: I) -> Self
    where I: IntoIterator<Item=S>, S: Into<String> {
        self.files = EnvFile::new(values);
        self
    }

    #[inline]
    pub fn options(&self) -> &Options {
        &self.options
    }

    #[inline]
    pub fn files(&self) -> &EnvFile {
        &self.files
    }

    /// Loads into the process environment.
    #[inline]
    pub fn load(self) -> Result<Self> {
        self.files.load_into(&mut SystemEnv(), &self.options)?;
        Ok(self)
    }

    #[inline]
    pub fn load_env(self, env: &mut impl Env) -> Result<Self> {
        self.files.load_into(env, &self.options)?;
        Ok(self)
    }

    /// Loads into a fresh in-memory map.
    #[inline]
    pub fn load_new(&self) -> Result<HashMap<String, String>> {
        let mut env = HashMap::new();
        self.files.load_into(&mut env, &self.options)?;
        Ok(env)
    }
}
