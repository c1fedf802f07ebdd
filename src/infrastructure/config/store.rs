//! 프로세스 전역 속성 저장소.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

pub type PropertyMap = BTreeMap<String, String>;

/// 점(.)으로 구분된 문자열 키 → 문자열 값 저장소.
///
/// 쓰기는 `configure` 임계 구역 안에서만 일어나고, `RwLock`이
/// 이후 모든 읽기 스레드에 쓰기 결과가 보이도록 보장한다. 삭제는 없다.
#[derive(Debug, Default)]
pub struct PropertyStore {
    inner: RwLock<PropertyMap>,
}

impl PropertyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(key)
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.into(), value.into());
    }

    /// 공백이 아닌 값만 trim 후 기록한다. 기록했으면 `true`.
    pub fn set_if_present(&self, key: &str, value: Option<&str>) -> bool {
        match super::utils::non_blank(value) {
            Some(v) => {
                self.set(key.trim(), v);
                true
            }
            None => false,
        }
    }

    pub fn snapshot(&self) -> PropertyMap {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_never_overwrite() {
        let store = PropertyStore::new();
        store.set("url.data.source", "/srv/mirror");

        assert!(!store.set_if_present("url.data.source", Some("   ")));
        assert!(!store.set_if_present("url.data.source", None));
        assert_eq!(store.get("url.data.source").as_deref(), Some("/srv/mirror"));

        assert!(store.set_if_present(" url.data.source ", Some("  https://m/ ")));
        assert_eq!(store.get("url.data.source").as_deref(), Some("https://m/"));
    }
}
