use std::ffi::OsString;

use super::types::{PositiveU64, PositiveUsize};
use crate::error::{AppError, AppResult, ValidationError};

pub(super) fn parse_positive_u64(s: &str) -> AppResult<PositiveU64> {
    s.trim().parse::<PositiveU64>().map_err(AppError::from)
}

pub(super) fn parse_positive_usize(s: &str) -> AppResult<PositiveUsize> {
    s.trim().parse::<PositiveUsize>().map_err(AppError::from)
}

pub(super) fn parse_config_path(s: &str) -> AppResult<String> {
    let value = s.trim();
    if value.is_empty() {
        return Err(AppError::validation(ValidationError::ConfigPathEmpty));
    }
    Ok(value.to_owned())
}

pub(crate) fn parse_bool_env(s: &str) -> AppResult<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" | "on" => Ok(true),
        "0" | "false" | "no" | "n" | "off" => Ok(false),
        _ => Err(AppError::validation(ValidationError::InvalidBoolean {
            value: s.to_owned(),
        })),
    }
}

/// Long flags that may also be spelled with a single dash (`-config cfg.json`).
const SINGLE_DASH_LONG_FLAGS: [&str; 3] = ["config", "iterations", "duration"];

/// Rewrites single-dash long flags such as `-duration=2` to their `--` form so
/// clap does not read them as a cluster of short flags. Arguments after a
/// bare `--` are left alone.
pub(crate) fn normalize_long_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut past_terminator = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if arg == "--" {
                past_terminator = true;
            }
            if past_terminator || !arg.to_str().is_some_and(is_single_dash_long_flag) {
                return arg;
            }
            let mut rewritten = OsString::from("-");
            rewritten.push(&arg);
            rewritten
        })
        .collect()
}

fn is_single_dash_long_flag(arg: &str) -> bool {
    let Some(rest) = arg.strip_prefix('-') else {
        return false;
    };
    if rest.starts_with('-') {
        return false;
    }
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    SINGLE_DASH_LONG_FLAGS.contains(&name)
}
