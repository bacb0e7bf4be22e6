pub mod error;
pub use error::Error;
pub use error::ErrorKind;

pub mod env;
pub use env::{Env, GetEnv, SystemEnv};

pub mod options;
pub use options::{Builder, Options};

pub mod parser;
pub use parser::{parse_line, parse_reader, parse_str, EnvMap};

pub mod loader;
pub use loader::EnvFile;

pub type Result<T> = std::result::Result<T, Error>;

/// Loads `filenames` (or `.env` if there are none) into the process
/// environment.
///
/// Errors are logged and otherwise ignored. Use [`build`] with
/// [`Builder::strict`] to get them returned instead.
pub fn load<I, S>(filenames: I)
where I: IntoIterator<Item=S>, S: Into<String> {
    let _ = EnvFile::new(filenames).load_into(&mut SystemEnv(), &Options::default());
}

/// Value of the environment variable `name`, or an empty string if it is
/// unset. Invalid unicode is replaced by U+FFFD.
#[inline]
pub fn get(name: &str) -> String {
    env::SYSTEM_ENV.get(name).map(|value| value.into_owned()).unwrap_or_default()
}

#[inline]
pub fn build() -> Builder {
    Builder::new()
}
