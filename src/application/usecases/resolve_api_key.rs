//! provider API key 해석 유스케이스.

use crate::application::ports::ConfigRepository;
use crate::domain::arguments::Arguments;

pub struct ResolveApiKeyUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
}

impl<'a> ResolveApiKeyUseCase<'a> {
    pub fn execute(&self, args: &Arguments, name: &str, fallback: &str) -> String {
        self.config_repo.configure(args);
        self.config_repo.api_key(name, fallback)
    }
}
