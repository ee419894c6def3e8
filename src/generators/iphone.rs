//! iPhone/iOS Facebook app user-agent generator.

use crate::core::error::{AppError, AppResult};
use crate::core::version::VersionTuple;
use crate::generators::{GenerationOutcome, GeneratorConfig};
use crate::tables::iphone::{
    fb_build_range, DeviceRange, OsVersionEntry, DEVICE_IOS_RANGES, FBRV_MAX, FBRV_MIN,
    FB_BUILD_RANGES, IOS_VERSIONS, LANGUAGES, SCREEN_SCALES,
};
use rand::Rng;
use std::collections::HashSet;
use std::fmt;

/// Device re-picks allowed before an empty compatibility filter is treated as
/// a reference-data bug instead of a transient miss.
const COMPAT_RETRY_LIMIT: usize = 1000;

/// Rejection-sampling draws allowed per FBRV value.
const FBRV_RETRY_LIMIT: usize = 10_000;

/// Reference tables the iPhone generator draws from. Defaults to the built-in
/// tables; tests inject crafted ones.
#[derive(Debug, Clone, Copy)]
pub struct IphoneTables<'a> {
    pub devices: &'a [DeviceRange],
    pub versions: &'a [OsVersionEntry],
    pub fbrv_min: u64,
    pub fbrv_max: u64,
}

impl Default for IphoneTables<'static> {
    fn default() -> Self {
        Self {
            devices: DEVICE_IOS_RANGES,
            versions: IOS_VERSIONS,
            fbrv_min: FBRV_MIN,
            fbrv_max: FBRV_MAX,
        }
    }
}

/// Operational-flag suffix appended after the FBLC field, chosen by nested
/// independent coin flips: 10% `Op80`; otherwise an FBRV chain that carries
/// IABMV 90% of the time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpSuffix {
    Op80,
    Op5Plain { fbrv: u64 },
    Op5WithIabmv { fbrv: u64 },
}

impl fmt::Display for OpSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpSuffix::Op80 => write!(f, ";FBOP/80"),
            OpSuffix::Op5Plain { fbrv } => write!(f, ";FBOP/5;FBRV/{fbrv}"),
            OpSuffix::Op5WithIabmv { fbrv } => write!(f, ";FBOP/5;FBRV/{fbrv};IABMV/1"),
        }
    }
}

/// Generates unique iPhone user agents. Owns its RNG and the run-scoped
/// used-FBRV set; construct fresh per run.
pub struct IphoneGenerator<'a, R: Rng> {
    rng: R,
    tables: IphoneTables<'a>,
    fbrv_used: HashSet<u64>,
}

impl<R: Rng> IphoneGenerator<'static, R> {
    pub fn new(rng: R) -> Self {
        Self::with_tables(rng, IphoneTables::default())
    }
}

impl<'a, R: Rng> IphoneGenerator<'a, R> {
    pub fn with_tables(rng: R, tables: IphoneTables<'a>) -> Self {
        Self {
            rng,
            tables,
            fbrv_used: HashSet::new(),
        }
    }

    /// Picks a device, then an OS version compatible with its declared range.
    /// Devices whose range excludes every known version trigger a bounded
    /// re-pick; budget exhaustion means the tables themselves are broken.
    fn pick_device_and_version(&mut self) -> AppResult<(&'a DeviceRange, &'a OsVersionEntry)> {
        let tables = self.tables;
        for _ in 0..COMPAT_RETRY_LIMIT {
            let device = &tables.devices[self.rng.random_range(0..tables.devices.len())];
            let candidates = compatible_versions(device, tables.versions)?;
            if candidates.is_empty() {
                continue;
            }
            let chosen = candidates[self.rng.random_range(0..candidates.len())];
            return Ok((device, chosen));
        }
        Err(AppError::ReferenceData(format!(
            "no device yielded a compatible OS version after {COMPAT_RETRY_LIMIT} attempts"
        )))
    }

    /// FBAV version for a fixed major: minor 1 with probability 0.1 else 0,
    /// build in [30, 59], hotfix in [40, 99].
    pub fn fb_app_version(&mut self, major: &str) -> String {
        let minor = if self.rng.random_bool(0.1) { 1 } else { 0 };
        let build = self.rng.random_range(30..=59);
        let hotfix = self.rng.random_range(40..=99);
        format!("{major}.{minor}.0.{build}.{hotfix}")
    }

    /// FBBV build number drawn from the range declared for the major label.
    pub fn fb_build_number(&mut self, major: &str) -> AppResult<String> {
        let range = fb_build_range(major).ok_or_else(|| {
            AppError::ReferenceData(format!("no FBBV range declared for FBAV major {major}"))
        })?;
        Ok(self.rng.random_range(range.min..=range.max).to_string())
    }

    /// Draws an FBRV value not yet used in this run. The pool is large
    /// relative to the output target, so rejection sampling terminates
    /// quickly in practice; the retry cap turns a mis-sized pool into an
    /// error instead of a hang.
    fn unique_fbrv(&mut self) -> AppResult<u64> {
        for _ in 0..FBRV_RETRY_LIMIT {
            let candidate = self
                .rng
                .random_range(self.tables.fbrv_min..=self.tables.fbrv_max);
            if self.fbrv_used.insert(candidate) {
                return Ok(candidate);
            }
        }
        Err(AppError::RangeExhausted(format!(
            "no unused FBRV value found after {FBRV_RETRY_LIMIT} draws"
        )))
    }

    /// Chooses the operational suffix by the documented nested coin flips.
    /// Only the FBRV branches consume from the FBRV pool.
    fn sample_op_suffix(&mut self) -> AppResult<OpSuffix> {
        if self.rng.random_bool(0.1) {
            return Ok(OpSuffix::Op80);
        }
        let fbrv = self.unique_fbrv()?;
        if self.rng.random_bool(0.9) {
            Ok(OpSuffix::Op5WithIabmv { fbrv })
        } else {
            Ok(OpSuffix::Op5Plain { fbrv })
        }
    }

    /// Assembles one user-agent string from freshly sampled fields.
    pub fn generate_one(&mut self) -> AppResult<String> {
        let (device, os) = self.pick_device_and_version()?;

        let major = FB_BUILD_RANGES[self.rng.random_range(0..FB_BUILD_RANGES.len())].major;
        let fbav = self.fb_app_version(major);
        let fbbv = self.fb_build_number(major)?;
        let fbss = SCREEN_SCALES[self.rng.random_range(0..SCREEN_SCALES.len())];
        let language = LANGUAGES[self.rng.random_range(0..LANGUAGES.len())];
        let suffix = self.sample_op_suffix()?;

        Ok(format!(
            "Mozilla/5.0 (iPhone; CPU iPhone OS {os_underscore} like Mac OS X) \
             AppleWebKit/{webkit} (KHTML, like Gecko) Mobile/{os_build} \
             [FBAN/FBIOS;FBAV/{fbav};FBBV/{fbbv};FBDV/{model};FBMD/iPhone;\
             FBSN/iOS;FBSV/{os_version};FBSS/{fbss};FBID/phone;FBLC/{language}{suffix}]",
            os_underscore = os.version.replace('.', "_"),
            webkit = os.webkit,
            os_build = os.build,
            model = device.model,
            os_version = os.version,
        ))
    }

    /// Collects exactly `config.target` unique user agents. There is no
    /// best-effort cap for this flavor; a generous attempt ceiling guards
    /// against non-termination if the combinatorial space were ever too
    /// small for the target.
    pub fn run(&mut self, config: &GeneratorConfig) -> AppResult<GenerationOutcome> {
        let attempt_limit = config.target.saturating_mul(1000);
        let mut user_agents = HashSet::new();
        let mut attempts = 0;

        while user_agents.len() < config.target {
            if attempts >= attempt_limit {
                return Err(AppError::RangeExhausted(format!(
                    "collected {} of {} unique user agents after {attempts} attempts",
                    user_agents.len(),
                    config.target
                )));
            }
            attempts += 1;
            user_agents.insert(self.generate_one()?);
        }

        Ok(GenerationOutcome {
            user_agents,
            attempts,
        })
    }
}

fn compatible_versions<'a>(
    device: &DeviceRange,
    versions: &'a [OsVersionEntry],
) -> AppResult<Vec<&'a OsVersionEntry>> {
    let min = VersionTuple::parse(device.min_ios)?;
    let max = VersionTuple::parse(device.max_ios)?;

    let mut compatible = Vec::new();
    for entry in versions {
        let parsed = VersionTuple::parse(entry.version)?;
        if parsed >= min && parsed <= max {
            compatible.push(entry);
        }
    }
    Ok(compatible)
}
