use std::{
    fs,
    path::{Path, PathBuf},
};

use log::LevelFilter;
use simplelog::{ConfigBuilder, TestLogger};

#[ctor::ctor]
fn init_test_logger() {
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .build();
    let _ = TestLogger::init(LevelFilter::Debug, config);
}

/// Empty directory under the system temp dir, removed on drop.
pub struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    pub fn new(name: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "shader_doctor-{}-{name}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&path);
        fs::create_dir_all(&path).expect("create scratch dir");
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}
