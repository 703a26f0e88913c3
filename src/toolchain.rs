use std::{ffi::OsString, path::PathBuf};

use log::info;

use crate::{config::VULKAN_SDK_VAR, error::ConfigurationError, platform::Platform};

/// A validated Vulkan SDK together with the Slang compiler to use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    pub platform: Platform,
    pub sdk_root: PathBuf,
    pub compiler: PathBuf,
}

impl Toolchain {
    /// Runs the doctor checks against the value of `VULKAN_SDK`.
    pub fn locate(
        platform: Platform,
        vulkan_sdk: Option<OsString>,
    ) -> Result<Self, ConfigurationError> {
        info!("Target system {platform} detected");

        let sdk_root = match vulkan_sdk {
            Some(value) if !value.is_empty() => PathBuf::from(value),
            _ => return Err(ConfigurationError::SdkNotSet),
        };
        if !sdk_root.exists() {
            return Err(ConfigurationError::SdkNotFound { path: sdk_root });
        }
        info!("Found {VULKAN_SDK_VAR} env var");

        let location = platform.compiler_location();
        let compiler = location.resolve(&sdk_root);
        if location.must_exist() && !compiler.exists() {
            return Err(ConfigurationError::CompilerNotFound { path: compiler });
        }
        info!("Found slangc compiler");

        Ok(Self {
            platform,
            sdk_root,
            compiler,
        })
    }
}
