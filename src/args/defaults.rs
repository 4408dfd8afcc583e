use std::num::{NonZeroU64, NonZeroUsize};

pub(crate) const DEFAULT_USER_AGENT: &str = concat!("loadshot/", env!("CARGO_PKG_VERSION"));

/// Config file read when `--config` is not given.
pub(crate) const DEFAULT_CONFIG_PATH: &str = "config.json";

pub(crate) const DEFAULT_ITERATIONS: NonZeroUsize = NonZeroUsize::MIN;
pub(crate) const DEFAULT_DURATION_SECS: NonZeroU64 = match NonZeroU64::new(10) {
    Some(value) => value,
    None => NonZeroU64::MIN,
};
