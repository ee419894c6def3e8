//! Samsung/Android Facebook in-app WebView user-agent generator.

use crate::generators::{GenerationOutcome, GeneratorConfig};
use crate::tables::samsung::{CHROME_MAJORS, DEVICES, FB_MAJOR_VERSIONS, FB_MAJOR_WEIGHTS};
use once_cell::sync::Lazy;
use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::Rng;
use std::collections::HashSet;

static FB_MAJOR_DIST: Lazy<WeightedIndex<f64>> = Lazy::new(|| {
    WeightedIndex::new(FB_MAJOR_WEIGHTS.iter().copied()).expect("static FBAV weights are valid")
});

/// Generates unique Samsung Android user agents. Owns its RNG; construct
/// fresh per run.
pub struct SamsungGenerator<R: Rng> {
    rng: R,
}

impl<R: Rng> SamsungGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// FBAV version: weighted major (70% "517", 30% "516"), asymmetric minor
    /// rule per major, two independent patch components in [0, 99].
    ///
    /// The Android version is accepted for conditional rules but currently
    /// unused, matching the observed app versioning.
    pub fn fb_app_version(&mut self, _android_version: &str) -> String {
        let major = FB_MAJOR_VERSIONS[FB_MAJOR_DIST.sample(&mut self.rng)];
        let minor = if major == "517" {
            if self.rng.random_bool(0.1) {
                "1"
            } else {
                "0"
            }
        } else {
            "1"
        };
        let patch1 = self.rng.random_range(0..=99);
        let patch2 = self.rng.random_range(0..=99);
        format!("{major}.{minor}.0.{patch1}.{patch2}")
    }

    /// Chrome version for the WebView segment: uniform major label, build in
    /// [4000, 4999], patch in [50, 150].
    pub fn chrome_version(&mut self) -> String {
        let major = CHROME_MAJORS[self.rng.random_range(0..CHROME_MAJORS.len())];
        let build = self.rng.random_range(4000..=4999);
        let patch = self.rng.random_range(50..=150);
        format!("{major}.{build}.{patch}")
    }

    /// Assembles one user-agent string from freshly sampled fields.
    pub fn generate_one(&mut self) -> String {
        let device = &DEVICES[self.rng.random_range(0..DEVICES.len())];
        let fb_version = self.fb_app_version(device.android_version);
        let chrome_version = self.chrome_version();

        format!(
            "Mozilla/5.0 (Linux; Android {av}; {model} Build/{build}; wv) \
             AppleWebKit/537.36 (KHTML, like Gecko) Version/4.0 \
             Chrome/{cv} Mobile Safari/537.36 \
             [FB_IAB/FB4A;FBAV/{fbav};IABMV/1;]",
            av = device.android_version,
            model = device.model,
            build = device.build,
            cv = chrome_version,
            fbav = fb_version,
        )
    }

    /// Collects unique user agents until the target is reached or the attempt
    /// budget runs out. Exhausting the budget below target is a valid
    /// best-effort outcome; duplicates consume attempts without progress.
    pub fn run(&mut self, config: &GeneratorConfig) -> GenerationOutcome {
        let mut user_agents = HashSet::new();
        let mut attempts = 0;

        while user_agents.len() < config.target && attempts < config.max_attempts {
            attempts += 1;
            user_agents.insert(self.generate_one());
        }

        GenerationOutcome {
            user_agents,
            attempts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded(seed: u64) -> SamsungGenerator<StdRng> {
        SamsungGenerator::new(StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_fb_app_version_shape() {
        let mut generator = seeded(1);
        for _ in 0..200 {
            let version = generator.fb_app_version("14");
            let parts: Vec<&str> = version.split('.').collect();
            assert_eq!(parts.len(), 5, "unexpected shape: {version}");
            assert!(["517", "516"].contains(&parts[0]));
            assert!(["0", "1"].contains(&parts[1]));
            assert_eq!(parts[2], "0");
            assert!(parts[3].parse::<u32>().unwrap() <= 99);
            assert!(parts[4].parse::<u32>().unwrap() <= 99);
            // 516 always carries minor 1
            if parts[0] == "516" {
                assert_eq!(parts[1], "1");
            }
        }
    }

    #[test]
    fn test_fb_major_weighting_is_biased() {
        let mut generator = seeded(2);
        let majors_517 = (0..1000)
            .filter(|_| generator.fb_app_version("14").starts_with("517."))
            .count();
        // 70% expected; loose bounds keep the test stable across rand versions
        assert!(
            (500..900).contains(&majors_517),
            "517 drawn {majors_517} times out of 1000"
        );
    }

    #[test]
    fn test_chrome_version_fields_in_range() {
        let mut generator = seeded(3);
        for _ in 0..200 {
            let version = generator.chrome_version();
            let parts: Vec<&str> = version.split('.').collect();
            assert_eq!(parts.len(), 4, "unexpected shape: {version}");
            let major = format!("{}.{}", parts[0], parts[1]);
            assert!(CHROME_MAJORS.contains(&major.as_str()));
            let build: u32 = parts[2].parse().unwrap();
            let patch: u32 = parts[3].parse().unwrap();
            assert!((4000..=4999).contains(&build));
            assert!((50..=150).contains(&patch));
        }
    }

    #[test]
    fn test_generate_one_embeds_device_fields() {
        let mut generator = seeded(4);
        for _ in 0..50 {
            let ua = generator.generate_one();
            assert!(ua.starts_with("Mozilla/5.0 (Linux; Android "));
            assert!(ua.ends_with(";IABMV/1;]"));

            let device = DEVICES
                .iter()
                .find(|d| ua.contains(d.model))
                .expect("model from the device table");
            assert!(ua.contains(&format!(
                "Android {}; {} Build/{}; wv",
                device.android_version, device.model, device.build
            )));
        }
    }

    #[test]
    fn test_run_collects_unique_target() {
        let mut generator = seeded(5);
        let config = GeneratorConfig {
            target: 100,
            max_attempts: 100_000,
        };
        let outcome = generator.run(&config);
        assert_eq!(outcome.user_agents.len(), 100);
        assert!(outcome.attempts >= 100);
        assert!(!outcome.under_target(&config));
    }

    #[test]
    fn test_run_respects_attempt_budget() {
        let mut generator = seeded(6);
        let config = GeneratorConfig {
            target: 5000,
            max_attempts: 10,
        };
        let outcome = generator.run(&config);
        assert_eq!(outcome.attempts, 10);
        assert!(outcome.user_agents.len() <= 10);
        assert!(outcome.under_target(&config));
    }

    #[test]
    fn test_same_seed_reproduces_records() {
        let first = seeded(42).generate_one();
        let second = seeded(42).generate_one();
        assert_eq!(first, second);
    }
}
