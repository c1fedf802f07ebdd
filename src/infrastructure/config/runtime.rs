//! 런타임 설정 컨텍스트.
//!
//! 저장소, 초기화 플래그, 1회성 알림 상태를 하나의 객체가 소유한다.
//! 프로세스 전역으로 쓰려면 [`global`]을 사용한다.

use std::path::PathBuf;
use std::sync::{Mutex, OnceLock, PoisonError};

use anyhow::Result;

use super::api_key::ApiKeyResolver;
use super::inspection::ConfigInspection;
use super::locator::ConfigFileLocator;
use super::notify::NotifyOnce;
use super::store::PropertyStore;
use super::utils::non_blank;
use super::{loader, overrides};
use crate::application::ports::EnvSource;
use crate::domain::arguments::Arguments;
use crate::domain::{keys, provider};
use crate::infrastructure::env::SystemEnv;

pub struct RuntimeConfiguration {
    store: PropertyStore,
    env: Box<dyn EnvSource>,
    locator: ConfigFileLocator,
    initialized: Mutex<bool>,
    api_keys: ApiKeyResolver,
    legacy_warnings: NotifyOnce,
}

impl RuntimeConfiguration {
    pub fn new(env: impl EnvSource + 'static, locator: ConfigFileLocator) -> Self {
        Self {
            store: PropertyStore::new(),
            env: Box::new(env),
            locator,
            initialized: Mutex::new(false),
            api_keys: ApiKeyResolver::new(),
            legacy_warnings: NotifyOnce::new(),
        }
    }

    /// 실제 환경변수와 사용자 홈 디렉터리를 사용한다.
    pub fn from_system() -> Self {
        Self::new(SystemEnv, ConfigFileLocator::from_user_home())
    }

    /// 파일 → 환경변수 → 명령행 → 파생 값 순서로 저장소를 채운다.
    ///
    /// 전체가 하나의 임계 구역이다. 동시에 호출되면 나머지 호출은 첫 호출이
    /// 끝날 때까지 기다린 뒤 아무것도 하지 않는다. 실제로 적용했으면 `true`.
    pub fn configure(&self, args: &Arguments) -> bool {
        let mut initialized = self
            .initialized
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if *initialized {
            tracing::debug!("runtime configuration already initialized; ignoring");
            return false;
        }

        let config_file = self
            .locator
            .locate(args, &*self.env)
            .or_else(|| self.locator.create_default_config_template_if_missing());
        let properties = config_file
            .as_deref()
            .map(|path| loader::load(path, &self.store))
            .unwrap_or_default();

        overrides::apply_file(&self.store, &properties);
        overrides::apply_environment(&self.store, &*self.env);
        overrides::apply_command_line(&self.store, args);
        overrides::apply_derived(&self.store);

        *initialized = true;
        true
    }

    pub fn is_configured(&self) -> bool {
        *self
            .initialized
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// 원본 속성 저장소(열거되지 않은 키 조회용).
    pub fn store(&self) -> &PropertyStore {
        &self.store
    }

    pub fn locator(&self) -> &ConfigFileLocator {
        &self.locator
    }

    pub fn property(&self, key: &str) -> Option<String> {
        non_blank(self.store.get(key).as_deref())
    }

    /// 값이 없거나 공백이면 `fallback`을 반환한다.
    pub fn application_property(&self, key: &str, fallback: &str) -> String {
        self.property(key).unwrap_or_else(|| fallback.to_string())
    }

    pub fn api_key(&self, name: &str, fallback: &str) -> String {
        self.api_keys
            .resolve(&self.store, &*self.env, name, fallback)
    }

    /// 같은 `key`에 대해 프로세스 수명 동안 한 번만 경고를 남긴다.
    pub fn warn_legacy_property(&self, key: &str, message: &str) -> bool {
        self.legacy_warnings
            .notify_once(key, || tracing::warn!("{message}"))
    }

    pub fn data_source_mirror(&self) -> Option<String> {
        self.property(keys::DATA_SOURCE)
    }

    pub fn provider_order(&self) -> Vec<String> {
        self.property(keys::PROVIDER_ORDER)
            .map(|raw| provider::split_provider_list(&raw))
            .unwrap_or_default()
    }

    pub fn disabled_providers(&self) -> Vec<String> {
        self.property(keys::PROVIDER_DISABLED)
            .map(|raw| provider::split_provider_list(&raw))
            .unwrap_or_default()
    }

    pub fn is_provider_enabled(&self, identifier: &str) -> bool {
        provider::is_enabled(self.property(keys::PROVIDER_DISABLED).as_deref(), identifier)
    }

    pub fn provider_status_message(&self, identifier: &str) -> &'static str {
        provider::status_message(self.is_provider_enabled(identifier))
    }

    pub fn config_path(&self) -> Option<PathBuf> {
        self.property(keys::CONFIG_PATH).map(PathBuf::from)
    }

    pub fn github_stable(&self) -> Option<String> {
        self.property(keys::GITHUB_STABLE)
    }

    pub fn github_master(&self) -> Option<String> {
        self.property(keys::GITHUB_MASTER)
    }

    /// 시작 시 어떤 설정 파일/데이터 소스가 쓰였는지 기록한다.
    pub fn log_startup_diagnostics(&self) {
        if let Some(path) = self.config_path() {
            tracing::info!(path = %path.display(), "Runtime config");
        }
        if let Some(source) = self.data_source_mirror() {
            tracing::info!(source = %source, "Data source override");
        }
    }

    pub fn inspect(&self) -> ConfigInspection {
        ConfigInspection::from_runtime(self)
    }

    pub fn inspect_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.inspect())?)
    }
}

static GLOBAL: OnceLock<RuntimeConfiguration> = OnceLock::new();

/// 프로세스 전역 설정 컨텍스트.
pub fn global() -> &'static RuntimeConfiguration {
    GLOBAL.get_or_init(RuntimeConfiguration::from_system)
}

pub fn configure(args: &Arguments) -> bool {
    global().configure(args)
}

pub fn application_property(key: &str, fallback: &str) -> String {
    global().application_property(key, fallback)
}

pub fn api_key(name: &str, fallback: &str) -> String {
    global().api_key(name, fallback)
}

pub fn warn_legacy_property(key: &str, message: &str) -> bool {
    global().warn_legacy_property(key, message)
}
