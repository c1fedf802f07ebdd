//! 설정 저장소 포트 구현 어댑터.

use anyhow::Result;

use crate::application::ports::ConfigRepository;
use crate::domain::arguments::Arguments;
use crate::infrastructure::config::{self, RuntimeConfiguration};

/// properties 파일 기반 런타임 설정 저장소 어댑터.
pub struct RuntimeConfigRepository<'a> {
    runtime: &'a RuntimeConfiguration,
}

impl<'a> RuntimeConfigRepository<'a> {
    pub fn new(runtime: &'a RuntimeConfiguration) -> Self {
        Self { runtime }
    }
}

impl Default for RuntimeConfigRepository<'static> {
    fn default() -> Self {
        Self::new(config::global())
    }
}

impl ConfigRepository for RuntimeConfigRepository<'_> {
    fn configure(&self, args: &Arguments) -> bool {
        let applied = self.runtime.configure(args);
        if applied {
            self.runtime.log_startup_diagnostics();
        }
        applied
    }

    fn inspect_pretty_json(&self) -> Result<String> {
        self.runtime.inspect_pretty_json()
    }

    fn api_key(&self, name: &str, fallback: &str) -> String {
        self.runtime.api_key(name, fallback)
    }
}
