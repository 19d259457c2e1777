use core::num::NonZeroUsize;
use core::str::FromStr;
use std::string::{String, ToString};
use std::thread;

use super::HarnessError;

pub const SAMPLES_ENV: &str = "FASTLOG_SAMPLES";
pub const THREADS_ENV: &str = "FASTLOG_THREADS";
pub const F32_BASELINE_ENV: &str = "FASTLOG_F32_BASELINE";

/// 1e8 samples keeps a default run in the seconds range.
pub const DEFAULT_SAMPLES: u64 = 100_000_000;

/// Parameters of one accuracy sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccuracyConfig {
    /// Step count over `[1.0, 2.0]`; `samples + 1` points are evaluated.
    pub samples: u64,
    /// Worker threads, one partition each.
    pub threads: usize,
    /// Also measure `f32::log2` in the reserved baseline slot.
    pub f32_baseline: bool,
}

impl Default for AccuracyConfig {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            threads: thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1),
            f32_baseline: false,
        }
    }
}

impl AccuracyConfig {
    pub fn new(samples: u64, threads: usize) -> Self {
        Self {
            samples,
            threads,
            f32_baseline: false,
        }
    }

    pub fn with_f32_baseline(mut self, enabled: bool) -> Self {
        self.f32_baseline = enabled;
        self
    }

    /// Defaults overridden by `FASTLOG_SAMPLES`, `FASTLOG_THREADS` and
    /// `FASTLOG_F32_BASELINE`. Empty variables are ignored.
    pub fn from_env() -> Result<Self, HarnessError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, HarnessError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(samples) = parse_var(&lookup, SAMPLES_ENV)? {
            config.samples = samples;
        }
        if let Some(threads) = parse_var(&lookup, THREADS_ENV)? {
            config.threads = threads;
        }
        if let Some(value) = lookup_trimmed(&lookup, F32_BASELINE_ENV) {
            config.f32_baseline = match value.to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    return Err(HarnessError::InvalidEnv {
                        var: F32_BASELINE_ENV,
                        value,
                    });
                }
            };
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), HarnessError> {
        if self.samples == 0 {
            return Err(HarnessError::ZeroSamples);
        }
        if self.samples == u64::MAX {
            return Err(HarnessError::TooManySamples);
        }
        if self.threads == 0 {
            return Err(HarnessError::ZeroThreads);
        }
        Ok(())
    }
}

fn lookup_trimmed<F>(lookup: &F, var: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(var)?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn parse_var<F, V>(lookup: &F, var: &'static str) -> Result<Option<V>, HarnessError>
where
    F: Fn(&str) -> Option<String>,
    V: FromStr,
{
    match lookup_trimmed(lookup, var) {
        None => Ok(None),
        Some(value) => value
            .replace('_', "")
            .parse()
            .map(Some)
            .map_err(|_| HarnessError::InvalidEnv { var, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var: &str| map.get(var).cloned()
    }

    #[test]
    fn defaults_are_valid() {
        let config = AccuracyConfig::default();
        assert_eq!(config.samples, DEFAULT_SAMPLES);
        assert!(config.threads >= 1);
        assert!(!config.f32_baseline);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn env_overrides() {
        let config = AccuracyConfig::from_lookup(lookup(&[
            (SAMPLES_ENV, " 100_000_000_000 "),
            (THREADS_ENV, "12"),
            (F32_BASELINE_ENV, "yes"),
        ]))
        .unwrap();
        assert_eq!(config.samples, 100_000_000_000);
        assert_eq!(config.threads, 12);
        assert!(config.f32_baseline);
    }

    #[test]
    fn empty_vars_are_ignored() {
        let config =
            AccuracyConfig::from_lookup(lookup(&[(SAMPLES_ENV, ""), (THREADS_ENV, "  ")])).unwrap();
        assert_eq!(config.samples, DEFAULT_SAMPLES);
    }

    #[test]
    fn rejects_garbage_and_zero() {
        let err = AccuracyConfig::from_lookup(lookup(&[(THREADS_ENV, "many")])).unwrap_err();
        assert!(matches!(
            err,
            HarnessError::InvalidEnv { var: THREADS_ENV, ref value } if value == "many"
        ));

        let err = AccuracyConfig::from_lookup(lookup(&[(SAMPLES_ENV, "0")])).unwrap_err();
        assert!(matches!(err, HarnessError::ZeroSamples));

        let err = AccuracyConfig::from_lookup(lookup(&[(F32_BASELINE_ENV, "maybe")])).unwrap_err();
        assert!(matches!(err, HarnessError::InvalidEnv { .. }));

        assert!(matches!(
            AccuracyConfig::new(10, 0).validate(),
            Err(HarnessError::ZeroThreads)
        ));
    }

    #[test]
    fn rejects_unrepresentable_upper_bound() {
        let max = u64::MAX.to_string();
        let err =
            AccuracyConfig::from_lookup(lookup(&[(SAMPLES_ENV, max.as_str())])).unwrap_err();
        assert!(matches!(err, HarnessError::TooManySamples));
        assert!(AccuracyConfig::new(u64::MAX - 1, 2).validate().is_ok());
    }
}
