use clap::Parser;

use crate::error::{AppError, AppResult};

use super::CliArgs;
use super::parsers::normalize_long_flags;

pub(crate) fn parse_test_args<I, T>(args: I) -> AppResult<CliArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    CliArgs::try_parse_from(normalize_long_flags(args)).map_err(AppError::from)
}
