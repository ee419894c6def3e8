//! Reference data for the Samsung/Android flavor.

/// One carrier-unlocked Samsung device: model, Android major version, firmware build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceEntry {
    pub model: &'static str,
    pub android_version: &'static str,
    pub build: &'static str,
}

pub const DEVICES: &[DeviceEntry] = &[
    DeviceEntry { model: "SM-G975U1", android_version: "12", build: "G975U1UEU8IWB6" },
    DeviceEntry { model: "SM-G980U1", android_version: "13", build: "G980U1UEU2EVA2" },
    DeviceEntry { model: "SM-G985U1", android_version: "13", build: "G985U1UES9HXE3" },
    DeviceEntry { model: "SM-G988U1", android_version: "13", build: "G988U1UEU6HWHD" },
    DeviceEntry { model: "SM-G991U1", android_version: "14", build: "G991U1UESCGXF3" },
    DeviceEntry { model: "SM-G996U1", android_version: "13", build: "G996U1UEU9EWL2" },
    DeviceEntry { model: "SM-G998U1", android_version: "14", build: "G998U1UESCGXF3" },
    DeviceEntry { model: "SM-S908U1", android_version: "14", build: "S908U1UES6EXJ1" },
    DeviceEntry { model: "SM-S911U1", android_version: "14", build: "S911U1UES5CXL7" },
    DeviceEntry { model: "SM-S916U1", android_version: "14", build: "S916U1UES5CXL7" },
    DeviceEntry { model: "SM-S918U1", android_version: "14", build: "S918U1UES5CXL7" },
    DeviceEntry { model: "SM-S921U1", android_version: "14", build: "S921U1UES4AXL4" },
    DeviceEntry { model: "SM-S926U1", android_version: "14", build: "S926U1UES3AXI1" },
    DeviceEntry { model: "SM-S928U1", android_version: "14", build: "S928U1UES4AXL4" },
    DeviceEntry { model: "SM-S931U1", android_version: "15", build: "S931U1UEU1AYA1" },
    DeviceEntry { model: "SM-S936U1", android_version: "15", build: "S936U1UEU1AYA1" },
    DeviceEntry { model: "SM-S938U1", android_version: "15", build: "S938U1UEU1AYA1" },
    DeviceEntry { model: "SM-N970U1", android_version: "12", build: "N970U1UEU7HWB2" },
    DeviceEntry { model: "SM-N975U1", android_version: "12", build: "G975U1UEU8IWB6" },
    DeviceEntry { model: "SM-N980U1", android_version: "13", build: "N981U1UES7HXE3" },
    DeviceEntry { model: "SM-N986U1", android_version: "13", build: "N986U1UESBHXL1" },
    DeviceEntry { model: "SM-A515U1", android_version: "14", build: "A515USQSCFXA1" },
    DeviceEntry { model: "SM-F916U1", android_version: "14", build: "F916U1UES7KXH1" },
    DeviceEntry { model: "SM-F926U1", android_version: "14", build: "F926U1UES9JXLA" },
    DeviceEntry { model: "SM-F936U1", android_version: "14", build: "F936U1UES7GXK5" },
    DeviceEntry { model: "SM-F700U1", android_version: "14", build: "F700U1UES8JXA1" },
    DeviceEntry { model: "SM-F711U1", android_version: "14", build: "F711U1TBSAJXLA" },
    DeviceEntry { model: "SM-F721U1", android_version: "14", build: "F721U1UES8HYE3" },
];

/// Chrome major labels for the WebView Chrome/ segment.
pub const CHROME_MAJORS: &[&str] = &["137.0", "136.0", "135.0"];

/// FBAV major labels with their selection weights (70% "517", 30% "516").
pub const FB_MAJOR_VERSIONS: &[&str] = &["517", "516"];
pub const FB_MAJOR_WEIGHTS: &[f64] = &[0.7, 0.3];
