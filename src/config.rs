use crate::platform::{CompilerLocation, Platform};

pub const VULKAN_SDK_VAR: &str = "VULKAN_SDK";
pub const MIN_SDK_VERSION: &str = "1.3.296.0";

pub const OUTPUT_DIR: &str = "spv";
pub const TARGET: &str = "spirv";

pub const LOG_LEVEL: log::LevelFilter = if cfg!(debug_assertions) {
    log::LevelFilter::Debug
} else {
    log::LevelFilter::Info
};

/// Indexed by [`Platform`] discriminant.
pub const COMPILER_LOCATIONS: [CompilerLocation; Platform::COUNT] = [
    // Windows
    CompilerLocation::SdkRelative {
        dir: "Bin",
        executable: "slangc.exe",
    },
    // Linux
    CompilerLocation::SearchPath {
        executable: "slangc",
    },
];
