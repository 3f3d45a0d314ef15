use dirs::home_dir;
use std::{
    env, fs,
    io::Write,
    path::{Path, PathBuf},
};

const DEFAULT_DIR_NAME: &str = ".fintrack";
const RECORDS_DIR: &str = "records";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// Environment variable overriding the application data directory.
pub const HOME_ENV: &str = "FINTRACK_HOME";

/// Largest magnitude accepted for a single amount (one quadrillion).
///
/// Sums of clamped amounts stay finite for any ledger that fits in memory.
pub const MAX_AMOUNT: f64 = 1e15;

/// Maps NaN and infinities to zero so one malformed record cannot poison a sum.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// [`finite_or_zero`], then clamped to `±MAX_AMOUNT`.
pub fn bounded_amount(value: f64) -> f64 {
    finite_or_zero(value).clamp(-MAX_AMOUNT, MAX_AMOUNT)
}

/// Returns the application-specific data directory, defaulting to `~/.fintrack`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

pub fn records_dir_in(base: &Path) -> PathBuf {
    base.join(RECORDS_DIR)
}

pub fn config_file_in(base: &Path) -> PathBuf {
    base.join(CONFIG_FILE)
}

pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Writes `data` next to `path` and renames it into place.
pub fn write_atomic(path: &Path, data: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let tmp = tmp_path(path);
    let mut file = fs::File::create(&tmp)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    fs::rename(&tmp, path)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_finite_values_become_zero() {
        assert_eq!(finite_or_zero(f64::NAN), 0.0);
        assert_eq!(finite_or_zero(f64::INFINITY), 0.0);
        assert_eq!(finite_or_zero(f64::NEG_INFINITY), 0.0);
        assert_eq!(finite_or_zero(-12.5), -12.5);
    }

    #[test]
    fn bounded_amount_clamps_extremes() {
        assert_eq!(bounded_amount(f64::MAX), MAX_AMOUNT);
        assert_eq!(bounded_amount(f64::MIN), -MAX_AMOUNT);
        assert_eq!(bounded_amount(f64::NAN), 0.0);
        assert_eq!(bounded_amount(-42.0), -42.0);
    }

    #[test]
    fn write_atomic_leaves_no_tmp_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested").join("user.json");
        write_atomic(&target, "{}").unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "{}");
        assert!(!target.with_extension("json.tmp").exists());
    }
}
