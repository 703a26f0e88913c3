use std::{
    fmt,
    path::{Path, PathBuf},
};

use crate::{config::COMPILER_LOCATIONS, error::ConfigurationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows = 0,
    Linux = 1,
}

impl Platform {
    pub const COUNT: usize = 2;

    pub fn from_os_name(name: &str) -> Result<Self, ConfigurationError> {
        match name {
            "windows" => Ok(Self::Windows),
            "linux" => Ok(Self::Linux),
            _ => Err(ConfigurationError::UnsupportedPlatform {
                os: name.to_owned(),
            }),
        }
    }

    pub fn compiler_location(self) -> CompilerLocation {
        COMPILER_LOCATIONS[self as usize]
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Windows => "Windows",
            Self::Linux => "Linux",
        })
    }
}

/// How the shader compiler is found on a given platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompilerLocation {
    /// `<sdk>/<dir>/<executable>`, must exist on disk.
    SdkRelative {
        dir: &'static str,
        executable: &'static str,
    },
    /// Bare executable name, left to the OS search path.
    SearchPath { executable: &'static str },
}

impl CompilerLocation {
    pub fn resolve(self, sdk_root: &Path) -> PathBuf {
        match self {
            Self::SdkRelative { dir, executable } => sdk_root.join(dir).join(executable),
            Self::SearchPath { executable } => PathBuf::from(executable),
        }
    }

    pub fn must_exist(self) -> bool {
        matches!(self, Self::SdkRelative { .. })
    }
}
