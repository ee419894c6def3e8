//! Reference data for the iPhone/iOS flavor.

/// iPhone model with its inclusive supported iOS version range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceRange {
    pub model: &'static str,
    pub min_ios: &'static str,
    pub max_ios: &'static str,
}

pub const DEVICE_IOS_RANGES: &[DeviceRange] = &[
    DeviceRange { model: "iPhone12,1", min_ios: "18.3", max_ios: "18.5" },
    DeviceRange { model: "iPhone12,3", min_ios: "18.3", max_ios: "18.5" },
    DeviceRange { model: "iPhone12,5", min_ios: "18.3", max_ios: "18.5" },
    DeviceRange { model: "iPhone13,2", min_ios: "18.3", max_ios: "18.5" },
    DeviceRange { model: "iPhone13,1", min_ios: "18.3", max_ios: "18.5" },
    DeviceRange { model: "iPhone13,3", min_ios: "18.3", max_ios: "18.5" },
    DeviceRange { model: "iPhone13,4", min_ios: "18.3", max_ios: "18.5" },
    DeviceRange { model: "iPhone14,5", min_ios: "18.3", max_ios: "18.5" },
    DeviceRange { model: "iPhone14,4", min_ios: "18.3", max_ios: "18.5" },
    DeviceRange { model: "iPhone14,2", min_ios: "18.3", max_ios: "18.5" },
    DeviceRange { model: "iPhone14,3", min_ios: "18.3", max_ios: "18.5" },
    DeviceRange { model: "iPhone14,7", min_ios: "18.3", max_ios: "18.5" },
    DeviceRange { model: "iPhone14,8", min_ios: "18.3", max_ios: "18.5" },
    DeviceRange { model: "iPhone15,2", min_ios: "18.3", max_ios: "18.5" },
    DeviceRange { model: "iPhone15,3", min_ios: "18.3", max_ios: "18.5" },
    DeviceRange { model: "iPhone15,4", min_ios: "18.3", max_ios: "18.5" },
    DeviceRange { model: "iPhone15,5", min_ios: "18.3", max_ios: "18.5" },
    DeviceRange { model: "iPhone16,1", min_ios: "18.3", max_ios: "18.5" },
    DeviceRange { model: "iPhone16,2", min_ios: "18.3", max_ios: "18.5" },
    DeviceRange { model: "iPhone17,3", min_ios: "18.3", max_ios: "18.5" },
    DeviceRange { model: "iPhone17,4", min_ios: "18.3", max_ios: "18.5" },
    DeviceRange { model: "iPhone17,1", min_ios: "18.3", max_ios: "18.5" },
    DeviceRange { model: "iPhone17,2", min_ios: "18.3", max_ios: "18.5" },
];

/// iOS release with its build identifier and WebKit version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OsVersionEntry {
    pub version: &'static str,
    pub build: &'static str,
    pub webkit: &'static str,
}

pub const IOS_VERSIONS: &[OsVersionEntry] = &[
    OsVersionEntry { version: "18.3", build: "22D63", webkit: "605.1.15" },
    OsVersionEntry { version: "18.3.1", build: "22D72", webkit: "605.1.15" },
    OsVersionEntry { version: "18.3.2", build: "22D82", webkit: "605.1.15" },
    OsVersionEntry { version: "18.4", build: "22E240", webkit: "605.1.15" },
    OsVersionEntry { version: "18.4.1", build: "22E252", webkit: "605.1.15" },
    OsVersionEntry { version: "18.5", build: "22F76", webkit: "605.1.15" },
];

/// FBAV major label with its inclusive FBBV build-number range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FbBuildRange {
    pub major: &'static str,
    pub min: u64,
    pub max: u64,
}

pub const FB_BUILD_RANGES: &[FbBuildRange] = &[
    FbBuildRange { major: "515", min: 737_212_593, max: 740_881_359 },
    FbBuildRange { major: "516", min: 740_881_360, max: 743_277_063 },
    FbBuildRange { major: "517", min: 743_277_064, max: 746_450_682 },
];

/// Looks up the FBBV range declared for an FBAV major label.
pub fn fb_build_range(major: &str) -> Option<&'static FbBuildRange> {
    FB_BUILD_RANGES.iter().find(|r| r.major == major)
}

pub const LANGUAGES: &[&str] = &["en_US", "es_US"];

/// Display scale factors (@2x/@3x)
pub const SCREEN_SCALES: &[&str] = &["2", "3"];

/// Pool the run-unique FBRV values are drawn from.
pub const FBRV_MIN: u64 = 741_881_359;
pub const FBRV_MAX: u64 = 746_450_682;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::version::VersionTuple;

    #[test]
    fn test_device_ranges_parse() {
        for device in DEVICE_IOS_RANGES {
            let min = VersionTuple::parse(device.min_ios).unwrap();
            let max = VersionTuple::parse(device.max_ios).unwrap();
            assert!(min <= max, "inverted range for {}", device.model);
        }
    }

    #[test]
    fn test_every_device_has_a_compatible_os_version() {
        for device in DEVICE_IOS_RANGES {
            let min = VersionTuple::parse(device.min_ios).unwrap();
            let max = VersionTuple::parse(device.max_ios).unwrap();
            let compatible = IOS_VERSIONS.iter().any(|v| {
                let parsed = VersionTuple::parse(v.version).unwrap();
                parsed >= min && parsed <= max
            });
            assert!(compatible, "{} has no compatible iOS version", device.model);
        }
    }

    #[test]
    fn test_fb_build_ranges_disjoint() {
        for (i, a) in FB_BUILD_RANGES.iter().enumerate() {
            assert!(a.min <= a.max);
            for b in &FB_BUILD_RANGES[i + 1..] {
                assert!(a.max < b.min || b.max < a.min, "{} overlaps {}", a.major, b.major);
            }
        }
    }

    #[test]
    fn test_fb_build_range_lookup() {
        assert_eq!(fb_build_range("516").map(|r| r.min), Some(740_881_360));
        assert!(fb_build_range("999").is_none());
    }

    #[test]
    fn test_fbrv_pool_covers_target_count() {
        // 5000 unique draws must fit comfortably in the pool.
        assert!(FBRV_MAX - FBRV_MIN + 1 > 1_000_000);
    }
}
