use std::{
    ffi::OsString,
    fs,
    path::PathBuf,
    time::{Duration, Instant},
};

use log::info;

use crate::{
    compiler::ShaderCompiler,
    config::OUTPUT_DIR,
    error::BuildError,
    jobs::{self, GROUPS},
    platform::Platform,
    toolchain::Toolchain,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildReport {
    pub compiled: usize,
    pub elapsed: Duration,
}

/// Compiles the whole shader table of a project, one job at a time.
#[derive(Debug)]
pub struct ShaderBuildDriver {
    root: PathBuf,
    toolchain: Toolchain,
}

impl ShaderBuildDriver {
    pub fn new(root: impl Into<PathBuf>, toolchain: Toolchain) -> Self {
        Self {
            root: root.into(),
            toolchain,
        }
    }

    /// Doctor checks for a host named `os`. Nothing is touched on disk if they fail.
    pub fn prepare(
        os: &str,
        vulkan_sdk: Option<OsString>,
        root: impl Into<PathBuf>,
    ) -> Result<Self, BuildError> {
        let platform = Platform::from_os_name(os)?;
        let toolchain = Toolchain::locate(platform, vulkan_sdk)?;
        Ok(Self::new(root, toolchain))
    }

    pub fn toolchain(&self) -> &Toolchain {
        &self.toolchain
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root.join(OUTPUT_DIR)
    }

    pub fn ensure_output_dir(&self) -> Result<(), BuildError> {
        let path = self.output_dir();
        fs::create_dir_all(&path).map_err(|source| BuildError::OutputDir { path, source })
    }

    /// Stops at the first failing job. Outputs already written are left in place.
    pub fn run<C: ShaderCompiler>(&self, compiler: &mut C) -> Result<BuildReport, BuildError> {
        info!("Creating output dir...");
        self.ensure_output_dir()?;
        info!("OK");

        info!("Compiling shaders, this may take few seconds...");
        let start = Instant::now();
        let mut compiled = 0;
        for group in GROUPS {
            info!("{} ({} shaders)", group.name, group.jobs.len());
            for job in group.jobs {
                compiler.compile(&self.root, job)?;
                compiled += 1;
            }
        }
        let report = BuildReport {
            compiled,
            elapsed: start.elapsed(),
        };
        debug_assert_eq!(report.compiled, jobs::jobs().count());
        info!("OK");
        Ok(report)
    }
}
