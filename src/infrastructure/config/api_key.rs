//! provider API key 해석기.

use std::sync::atomic::{AtomicBool, Ordering};

use super::store::PropertyStore;
use super::utils::non_blank;
use crate::application::ports::EnvSource;
use crate::domain::keys;

pub const BUNDLED_FALLBACK_NOTICE: &str =
    "Using bundled API key defaults; configure env or --config to override.";

/// 저장소 → 환경변수 → 호출자 기본값 순서로 API key를 찾는다.
#[derive(Debug, Default)]
pub struct ApiKeyResolver {
    warned_fallback: AtomicBool,
}

impl ApiKeyResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve(
        &self,
        store: &PropertyStore,
        env: &dyn EnvSource,
        name: &str,
        fallback: &str,
    ) -> String {
        if let Some(value) = non_blank(store.get(&keys::api_key_property(name)).as_deref()) {
            return value;
        }

        if let Some(value) = keys::api_key_env_var(name)
            .and_then(|var| non_blank(env.var(var).as_deref()))
        {
            return value;
        }

        // 안내 플래그는 key 이름과 무관하게 하나만 둔다.
        if !fallback.trim().is_empty()
            && self
                .warned_fallback
                .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
                .is_ok()
        {
            tracing::info!("{BUNDLED_FALLBACK_NOTICE}");
        }

        fallback.to_string()
    }

    pub fn fallback_notice_emitted(&self) -> bool {
        self.warned_fallback.load(Ordering::Acquire)
    }
}
