//! 파일 → 환경변수 → 명령행 → 파생 값 순서의 덮어쓰기 단계.
//!
//! 모든 단계는 공백이 아닌 값만 기록하므로 빈 값이 앞 단계 값을 지우지 않는다.

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use url::Url;

use super::store::{PropertyMap, PropertyStore};
use super::utils::ensure_trailing_slash;
use crate::application::ports::EnvSource;
use crate::domain::arguments::Arguments;
use crate::domain::keys;

const STABLE_ARTIFACT: &str = "scripts/fn.jar.xz";
const MASTER_ARTIFACT: &str = "scripts/master";

pub fn apply_file(store: &PropertyStore, properties: &PropertyMap) {
    for (key, value) in properties {
        store.set_if_present(key, Some(value.as_str()));
    }
}

pub fn apply_environment(store: &PropertyStore, env: &dyn EnvSource) {
    for (var, key) in keys::GENERAL_ENV_MAP {
        store.set_if_present(key, env.var(var).as_deref());
    }

    for (var, name) in keys::API_KEY_ENV_MAP {
        store.set_if_present(&keys::api_key_property(name), env.var(var).as_deref());
    }
}

pub fn apply_command_line(store: &PropertyStore, args: &Arguments) {
    store.set_if_present(keys::DATA_SOURCE, args.data_source.as_deref());
    store.set_if_present(keys::PROVIDER_ORDER, args.provider_order.as_deref());
}

/// 데이터 소스 미러가 있으면 stable/master 다운로드 URL을 파생한다.
/// 명시적으로 설정된 값은 유지한다.
pub fn apply_derived(store: &PropertyStore) {
    let Some(base) = store
        .get(keys::DATA_SOURCE)
        .filter(|v| !v.trim().is_empty())
    else {
        return;
    };

    if !store.contains(keys::GITHUB_STABLE) {
        store.set(keys::GITHUB_STABLE, resolve(&base, STABLE_ARTIFACT));
    }

    if !store.contains(keys::GITHUB_MASTER) {
        store.set(
            keys::GITHUB_MASTER,
            ensure_trailing_slash(&resolve(&base, MASTER_ARTIFACT)),
        );
    }
}

/// `base`(URL 또는 디렉터리 경로) 아래의 `path`를 URL 문자열로 만든다.
/// 실패하면 경고 후 `base`를 그대로 돌려준다.
pub fn resolve(base: &str, path: &str) -> String {
    match try_resolve(base, path) {
        Ok(resolved) => resolved,
        Err(err) => {
            tracing::warn!(
                base = base,
                path = path,
                error = %format!("{err:#}"),
                "Failed to resolve runtime data source"
            );
            base.to_string()
        }
    }
}

fn try_resolve(base: &str, path: &str) -> Result<String> {
    let relative = path.strip_prefix('/').unwrap_or(path);

    let root = if base.contains("://") {
        Url::parse(&ensure_trailing_slash(base))
            .with_context(|| format!("invalid data source URL: {base}"))?
    } else {
        let dir = std::path::absolute(Path::new(base))
            .with_context(|| format!("invalid data source path: {base}"))?;
        Url::from_directory_path(&dir)
            .map_err(|_| anyhow!("cannot convert {} to a file URL", dir.display()))?
    };

    let joined = root
        .join(relative)
        .with_context(|| format!("failed to join {relative} onto {root}"))?;
    Ok(joined.to_string())
}
