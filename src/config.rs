use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable naming the data file.
pub const DATA_ENV: &str = "LANG_TRENDS_DATA";
pub const DEFAULT_DATA_PATH: &str = "./data.json";

/// Start-up settings, resolved once in `main`.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data_path: PathBuf,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
}

impl Config {
    /// First command-line argument, else `$LANG_TRENDS_DATA`, else
    /// `./data.json`.
    pub fn from_env() -> Self {
        Self::resolve(std::env::args_os().nth(1), std::env::var_os(DATA_ENV))
    }

    fn resolve(arg: Option<OsString>, env: Option<OsString>) -> Self {
        let given = |p: Option<OsString>| p.filter(|p| !p.is_empty());
        let data_path = given(arg)
            .or(given(env))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));
        Config {
            data_path,
            window_size: [1200.0, 800.0],
            min_window_size: [600.0, 400.0],
        }
    }
}
