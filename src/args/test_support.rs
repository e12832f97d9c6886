use clap::Parser;

use crate::error::{AppError, AppResult};

use super::{FuzzArgs, ReplayArgs};

pub(crate) fn parse_fuzz_args<I, T>(args: I) -> AppResult<FuzzArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    FuzzArgs::try_parse_from(args).map_err(AppError::from)
}

pub(crate) fn parse_replay_args<I, T>(args: I) -> AppResult<ReplayArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    ReplayArgs::try_parse_from(args).map_err(AppError::from)
}
