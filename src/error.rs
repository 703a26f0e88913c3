use std::{io, path::PathBuf, process::ExitStatus};

use thiserror::Error;

use crate::config::{MIN_SDK_VERSION, VULKAN_SDK_VAR};

/// Host is not set up to compile shaders. Reported before any work starts.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Unsupported OS {os:?}. Supported operating systems are: Linux, Windows")]
    UnsupportedPlatform { os: String },
    #[error(
        "{} environment variable is not set. Please install Vulkan SDK, relaunch the shell for \
         new changes to take effect and try again.",
        VULKAN_SDK_VAR
    )]
    SdkNotSet,
    #[error(
        "{} points to {} which does not exist. Please install Vulkan SDK, relaunch the shell for \
         new changes to take effect and try again.",
        VULKAN_SDK_VAR,
        .path.display()
    )]
    SdkNotFound { path: PathBuf },
    #[error(
        "Failed to compile the shaders. Slang compiler missing at {}! Make sure Vulkan SDK \
         {} or newer is installed or install it separately.",
        .path.display(),
        MIN_SDK_VERSION
    )]
    CompilerNotFound { path: PathBuf },
}

#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error("Failed to create output directory {}", .path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to run shader compiler {}", .compiler.display())]
    Spawn {
        compiler: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Shader compilation of {source_path} into {output_path} failed ({status})")]
    Compilation {
        source_path: &'static str,
        output_path: &'static str,
        status: ExitStatus,
    },
}
