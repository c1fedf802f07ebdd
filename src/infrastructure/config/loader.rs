//! 설정 파일 로더.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::properties::parse_properties;
use super::store::{PropertyMap, PropertyStore};
use crate::domain::keys;

/// 파일을 읽어 속성 맵으로 반환한다. 실패하면 경고 후 빈 맵.
///
/// 성공 시 사용된 경로를 `net.filebot.config.path`에 기록한다.
pub fn load(path: &Path, store: &PropertyStore) -> PropertyMap {
    match read_properties(path) {
        Ok(properties) => {
            let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
            store.set(keys::CONFIG_PATH, absolute.display().to_string());
            tracing::info!(
                path = %path.display(),
                count = properties.len(),
                "Loaded runtime config"
            );
            properties
        }
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                error = %format!("{err:#}"),
                "Failed to load runtime config"
            );
            PropertyMap::new()
        }
    }
}

fn read_properties(path: &Path) -> Result<PropertyMap> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config at {}", path.display()))?;
    parse_properties(&raw).with_context(|| format!("failed to parse properties in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn records_path_on_success() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.properties");
        fs::write(&path, "apikey.omdb=ABC\n").unwrap();
        let store = PropertyStore::new();

        let loaded = load(&path, &store);

        assert_eq!(loaded["apikey.omdb"], "ABC");
        assert_eq!(store.get(keys::CONFIG_PATH), Some(path.display().to_string()));
    }

    #[test]
    fn records_absolute_path_for_relative_input() {
        let file = tempfile::Builder::new()
            .suffix(".properties")
            .tempfile_in(".")
            .unwrap();
        fs::write(file.path(), "url.data.source=/srv/mirror\n").unwrap();
        let relative = Path::new(file.path().file_name().unwrap());
        let store = PropertyStore::new();

        let loaded = load(relative, &store);

        assert_eq!(loaded["url.data.source"], "/srv/mirror");
        let recorded = store.get(keys::CONFIG_PATH).unwrap();
        assert!(Path::new(&recorded).is_absolute());
        assert_eq!(
            recorded,
            std::path::absolute(relative).unwrap().display().to_string()
        );
    }

    #[test]
    fn missing_or_broken_file_yields_empty_map() {
        let dir = TempDir::new().unwrap();
        let store = PropertyStore::new();

        assert!(load(&dir.path().join("missing.properties"), &store).is_empty());

        let invalid_utf8 = dir.path().join("binary.properties");
        fs::write(&invalid_utf8, [b'a', b'=', 0xff, 0xfe]).unwrap();
        assert!(load(&invalid_utf8, &store).is_empty());

        let bad_escape = dir.path().join("escape.properties");
        fs::write(&bad_escape, "ok=1\nbad=\\uZZZZ\n").unwrap();
        assert!(load(&bad_escape, &store).is_empty());

        assert!(!store.contains(keys::CONFIG_PATH));
    }
}
