use std::{
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use log::debug;

use crate::{error::BuildError, jobs::CompileJob, toolchain::Toolchain};

pub trait ShaderCompiler {
    /// Compiles `job`, with its relative paths resolved against `root`. Blocks until done.
    fn compile(&mut self, root: &Path, job: &CompileJob) -> Result<(), BuildError>;
}

/// The `slangc` executable, run as a child process with its output discarded.
#[derive(Debug)]
pub struct Slangc {
    executable: PathBuf,
}

impl Slangc {
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    pub fn from_toolchain(toolchain: &Toolchain) -> Self {
        Self::new(&toolchain.compiler)
    }
}

impl ShaderCompiler for Slangc {
    fn compile(&mut self, root: &Path, job: &CompileJob) -> Result<(), BuildError> {
        let args = job.args();
        debug!("{} {}", self.executable.display(), args.join(" "));

        let status = Command::new(&self.executable)
            .args(&args)
            .current_dir(root)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|source| BuildError::Spawn {
                compiler: self.executable.clone(),
                source,
            })?;

        if !status.success() {
            return Err(BuildError::Compilation {
                source_path: job.source_path,
                output_path: job.output_path,
                status,
            });
        }
        Ok(())
    }
}
