#![warn(
    clippy::correctness,
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf
)]
#![warn(
    clippy::unwrap_used,
    clippy::clone_on_ref_ptr,
    clippy::empty_structs_with_brackets,
    clippy::dbg_macro
)]

mod compiler;
mod config;
mod driver;
mod error;
mod jobs;
mod platform;
#[cfg(test)]
mod test_utils;
mod toolchain;

use std::{env, process::ExitCode};

use anyhow::{Context, Result};
use compiler::Slangc;
use config::VULKAN_SDK_VAR;
use driver::ShaderBuildDriver;
use log::{debug, error, info, LevelFilter};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

fn main() -> ExitCode {
    if let Err(e) = init_logger() {
        eprintln!("{e:#}");
        return ExitCode::FAILURE;
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    info!("Running doctor ...");
    let root = env::current_dir().context("Failed to get the working directory")?;
    let driver =
        ShaderBuildDriver::prepare(env::consts::OS, env::var_os(VULKAN_SDK_VAR), root)?;
    let toolchain = driver.toolchain();
    debug!(
        "{} toolchain: Vulkan SDK at {}, compiler {}",
        toolchain.platform,
        toolchain.sdk_root.display(),
        toolchain.compiler.display()
    );
    info!("OK");

    let mut slangc = Slangc::from_toolchain(driver.toolchain());
    let report = driver
        .run(&mut slangc)
        .context("Failed to compile the shaders")?;
    debug!(
        "Compiled {} shaders in {:.2?}",
        report.compiled, report.elapsed
    );
    Ok(())
}

fn init_logger() -> Result<()> {
    let log_config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .build();
    TermLogger::init(
        config::LOG_LEVEL,
        log_config,
        TerminalMode::Stdout,
        ColorChoice::Auto,
    )
    .context("Failed to initialize logger")
}
