//! Kernel configuration, with environment overrides.

use std::str::FromStr;

/// How a [`Kernel`](crate::Kernel) runs its compute window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Run the numeric loop on a worker thread instead of the calling one.
    pub offload: bool,
    /// Smallest amount of work (multiply-adds, or elements touched) worth a
    /// worker thread. Smaller calls run inline even with `offload` set.
    pub min_offload_work: usize,
    /// Stack size for the worker, in bytes. `None` keeps the platform default.
    pub worker_stack_size: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            offload: true,
            min_offload_work: 65_536,
            worker_stack_size: None,
        }
    }
}

impl Config {
    /// Defaults, overridden by `MTRX_OFFLOAD`, `MTRX_MIN_OFFLOAD_WORK` and
    /// `MTRX_WORKER_STACK_SIZE` where set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] but reading from an arbitrary source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let d = Self::default();
        let offload = read("MTRX_OFFLOAD", &lookup, parse_flag).unwrap_or(d.offload);
        let min_offload_work =
            read("MTRX_MIN_OFFLOAD_WORK", &lookup, parse_num).unwrap_or(d.min_offload_work);
        let worker_stack_size =
            read("MTRX_WORKER_STACK_SIZE", &lookup, parse_num).or(d.worker_stack_size);
        Self {
            offload,
            min_offload_work,
            worker_stack_size,
        }
    }

    /// Whether a call doing `work` units should go to a worker thread.
    pub fn should_offload(&self, work: usize) -> bool {
        self.offload && work >= self.min_offload_work
    }
}

fn read<T, F, P>(key: &str, lookup: &F, parse: P) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    P: Fn(&str) -> Option<T>,
{
    let raw = lookup(key)?;
    let parsed = parse(raw.trim());
    if parsed.is_none() {
        log::warn!("ignoring {}={:?}: not a valid value", key, raw);
    }
    parsed
}

fn parse_flag(v: &str) -> Option<bool> {
    match v.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

fn parse_num<T: FromStr>(v: &str) -> Option<T> {
    v.parse().ok()
}
