use std::fmt::Display;
use std::path::{ Path, PathBuf };
use std::str::FromStr;

/// Relative paths in `.env` are taken from the home directory.
pub fn config_path(value: &str) -> PathBuf {
    let path = Path::new(value);
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match dirs::home_dir() {
        Some(home_dir) => home_dir.join(path),
        None => path.to_path_buf()
    }
}

pub fn var_or(key: &str, default: &str) -> String {
    dotenv::var(key).unwrap_or_else(|_| {
        log::debug!("{} not set, using default: {}", key, default);
        default.to_string()
    })
}

/// Parses `key` (or `default`), panicking on a value that doesn't parse.
pub fn parse_var_or<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display
{
    let value = var_or(key, default);
    match value.parse() {
        Ok(parsed) => parsed,
        Err(error) => panic!("Invalid {} value \"{}\": {}", key, value, error)
    }
}
