//! 애플리케이션 조립(composition root) 모듈.

use crate::application::usecases::describe_env::DescribeEnvUseCase;
use crate::application::usecases::inspect_config::InspectConfigUseCase;
use crate::application::usecases::resolve_api_key::ResolveApiKeyUseCase;
use crate::infrastructure::adapters::RuntimeConfigRepository;
use crate::infrastructure::config::RuntimeConfiguration;

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition<'a> {
    config_repo: RuntimeConfigRepository<'a>,
}

impl Default for AppComposition<'static> {
    fn default() -> Self {
        Self {
            config_repo: RuntimeConfigRepository::default(),
        }
    }
}

impl<'a> AppComposition<'a> {
    /// 전역 대신 주어진 설정 컨텍스트를 사용한다.
    pub fn with_runtime(runtime: &'a RuntimeConfiguration) -> Self {
        Self {
            config_repo: RuntimeConfigRepository::new(runtime),
        }
    }

    pub fn inspect_config_usecase(&self) -> InspectConfigUseCase<'_> {
        InspectConfigUseCase {
            config_repo: &self.config_repo,
        }
    }

    pub fn resolve_api_key_usecase(&self) -> ResolveApiKeyUseCase<'_> {
        ResolveApiKeyUseCase {
            config_repo: &self.config_repo,
        }
    }

    pub fn describe_env_usecase(&self) -> DescribeEnvUseCase {
        DescribeEnvUseCase
    }
}
