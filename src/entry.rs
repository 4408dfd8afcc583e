use clap::Parser;
use clap::error::ErrorKind;

use crate::args::CliArgs;
use crate::args::parsers::normalize_long_flags;
use crate::error::AppResult;

/// Parses the command line and drives one run to completion.
///
/// # Errors
///
/// Returns an error for invalid arguments, unreadable or incomplete
/// configuration, and any failure of the baseline request.
pub fn run() -> AppResult<()> {
    let Some(args) = parse_args()? else {
        return Ok(());
    };

    crate::logger::init_logging(args.verbose, args.no_color);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(crate::app::run_local(&args))
}

fn parse_args() -> AppResult<Option<CliArgs>> {
    match CliArgs::try_parse_from(normalize_long_flags(std::env::args_os())) {
        Ok(args) => Ok(Some(args)),
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.print()?;
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}
