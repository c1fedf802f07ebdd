//! 런타임 설정 키와 환경변수 매핑 테이블.
//!
//! 하위 컴포넌트가 이름으로 직접 읽는 키이므로 문자열 값을 바꾸지 않는다.

pub const CONFIG_PATH: &str = "net.filebot.config.path";
pub const DATA_SOURCE: &str = "url.data.source";
pub const PROVIDER_ORDER: &str = "net.filebot.provider.order";
pub const PROVIDER_DISABLED: &str = "net.filebot.provider.disabled";
pub const GITHUB_STABLE: &str = "github.stable";
pub const GITHUB_MASTER: &str = "github.master";

/// API key 속성 접두사. 실제 키는 `apikey.<name>` 형태다.
pub const API_KEY_PREFIX: &str = "apikey.";

/// 설정 파일 경로를 지정하는 환경변수(로케이터 전용).
pub const ENV_CONFIG: &str = "FB_MOD_CONFIG";

/// 일반 환경변수 → 속성 키.
pub const GENERAL_ENV_MAP: [(&str, &str); 5] = [
    ("FB_MOD_DATA_SOURCE", DATA_SOURCE),
    ("FB_MOD_PROVIDER_ORDER", PROVIDER_ORDER),
    ("FB_MOD_PROVIDER_DISABLED", PROVIDER_DISABLED),
    ("FB_MOD_GITHUB_STABLE", GITHUB_STABLE),
    ("FB_MOD_GITHUB_MASTER", GITHUB_MASTER),
];

/// API key 환경변수 → provider 논리 이름.
pub const API_KEY_ENV_MAP: [(&str, &str); 8] = [
    ("FB_MOD_APIKEY_THEMOVIEDB", "themoviedb"),
    ("FB_MOD_APIKEY_THETVDB", "thetvdb"),
    ("FB_MOD_APIKEY_OMDB", "omdb"),
    ("FB_MOD_APIKEY_FANART_TV", "fanart.tv"),
    ("FB_MOD_APIKEY_ACOUSTID", "acoustid"),
    ("FB_MOD_APIKEY_ANIDB", "anidb"),
    ("FB_MOD_APIKEY_OPENSUBTITLES", "opensubtitles"),
    ("FB_MOD_APIKEY_GOOGLE_GEOCODE", "google.geocode"),
];

pub const DEFAULT_PROVIDER_ORDER: &str = "TheMovieDB::TV,TVmaze,TheTVDB,AniDB";

pub fn api_key_property(name: &str) -> String {
    format!("{API_KEY_PREFIX}{name}")
}

/// provider 이름에 대응하는 API key 환경변수를 찾는다.
pub fn api_key_env_var(name: &str) -> Option<&'static str> {
    API_KEY_ENV_MAP
        .iter()
        .find(|(_, provider)| *provider == name)
        .map(|(env, _)| *env)
}

/// 지원하는 모든 환경변수를 정렬해 `, `로 이어 붙인다.
pub fn describe_supported_environment_variables() -> String {
    let mut names: Vec<&str> = std::iter::once(ENV_CONFIG)
        .chain(GENERAL_ENV_MAP.iter().map(|(env, _)| *env))
        .chain(API_KEY_ENV_MAP.iter().map(|(env, _)| *env))
        .collect();
    names.sort_unstable();
    names.dedup();
    names.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_all_variables_sorted() {
        let described = describe_supported_environment_variables();
        let names: Vec<&str> = described.split(", ").collect();

        assert_eq!(names.len(), 14);
        assert_eq!(names.first(), Some(&"FB_MOD_APIKEY_ACOUSTID"));
        assert_eq!(names.last(), Some(&"FB_MOD_PROVIDER_ORDER"));
        assert!(names.contains(&"FB_MOD_CONFIG"));
        assert!(names.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn maps_provider_name_to_env_var() {
        assert_eq!(api_key_env_var("fanart.tv"), Some("FB_MOD_APIKEY_FANART_TV"));
        assert_eq!(api_key_env_var("unknown"), None);
        assert_eq!(api_key_property("omdb"), "apikey.omdb");
    }
}
