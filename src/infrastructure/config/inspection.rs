//! 적용 설정 진단(inspection) 뷰 모델.

use std::collections::BTreeMap;

use serde::Serialize;

use super::runtime::RuntimeConfiguration;
use crate::domain::keys;

const MASKED: &str = "********";

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInspection {
    pub configured: bool,
    pub config_path: Option<String>,
    pub searched_paths: Vec<String>,
    pub properties: BTreeMap<String, String>,
    pub providers: ProvidersInspection,
    pub supported_env: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProvidersInspection {
    pub order: Vec<String>,
    pub disabled: Vec<String>,
    pub api_keys: BTreeMap<String, bool>,
}

impl ConfigInspection {
    pub(crate) fn from_runtime(runtime: &RuntimeConfiguration) -> Self {
        // API key 값은 노출하지 않는다.
        let properties = runtime
            .store()
            .snapshot()
            .into_iter()
            .map(|(key, value)| {
                if key.starts_with(keys::API_KEY_PREFIX) {
                    (key, MASKED.to_string())
                } else {
                    (key, value)
                }
            })
            .collect();

        let api_keys = keys::API_KEY_ENV_MAP
            .iter()
            .map(|(_, name)| {
                let resolved = runtime
                    .property(&keys::api_key_property(name))
                    .is_some();
                (name.to_string(), resolved)
            })
            .collect();

        Self {
            configured: runtime.is_configured(),
            config_path: runtime.config_path().map(|p| p.display().to_string()),
            searched_paths: [runtime.locator().modern_path(), runtime.locator().legacy_path()]
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            properties,
            providers: ProvidersInspection {
                order: runtime.provider_order(),
                disabled: runtime.disabled_providers(),
                api_keys,
            },
            supported_env: keys::describe_supported_environment_variables()
                .split(", ")
                .map(ToString::to_string)
                .collect(),
        }
    }
}
