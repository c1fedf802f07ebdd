//! 설정 파일 탐색 및 최초 실행 템플릿 생성.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::utils::non_blank;
use crate::application::ports::EnvSource;
use crate::domain::arguments::Arguments;
use crate::domain::keys::{self, DEFAULT_PROVIDER_ORDER};

const MODERN_CONFIG: [&str; 3] = [".config", "fb-mod", "config.properties"];
const LEGACY_CONFIG: [&str; 2] = [".fb-mod", "config.properties"];

/// 홈 디렉터리 기준 설정 파일 위치를 계산한다.
#[derive(Debug, Clone)]
pub struct ConfigFileLocator {
    home: PathBuf,
}

impl ConfigFileLocator {
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    /// 사용자 홈을 찾지 못하면 현재 디렉터리를 기준으로 삼는다.
    pub fn from_user_home() -> Self {
        Self::new(dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
    }

    pub fn modern_path(&self) -> PathBuf {
        MODERN_CONFIG.iter().fold(self.home.clone(), |p, s| p.join(s))
    }

    pub fn legacy_path(&self) -> PathBuf {
        LEGACY_CONFIG.iter().fold(self.home.clone(), |p, s| p.join(s))
    }

    /// 인자 → `FB_MOD_CONFIG` → 최신 경로 → 레거시 경로 순으로 찾는다.
    ///
    /// 명시 경로는 존재 여부와 관계없이 그대로(절대 경로로) 반환한다.
    pub fn locate(&self, args: &Arguments, env: &dyn EnvSource) -> Option<PathBuf> {
        let explicit = non_blank(args.config_path.as_deref())
            .or_else(|| non_blank(env.var(keys::ENV_CONFIG).as_deref()));
        if let Some(path) = explicit {
            return Some(absolute(Path::new(&path)));
        }

        [self.modern_path(), self.legacy_path()]
            .into_iter()
            .find(|p| p.is_file())
    }

    /// 최신 경로에 템플릿이 없으면 생성한다. 실패하면 `None`.
    ///
    /// 이미 존재하는 파일은 건드리지 않고 그 경로를 반환한다.
    pub fn create_default_config_template_if_missing(&self) -> Option<PathBuf> {
        let config_path = self.modern_path();
        if config_path.exists() {
            return Some(config_path);
        }

        match write_template(&config_path) {
            Ok(()) => {
                tracing::info!(
                    path = %config_path.display(),
                    "Created default runtime config template"
                );
                Some(config_path)
            }
            Err(err) => {
                tracing::warn!(
                    path = %config_path.display(),
                    error = %format!("{err:#}"),
                    "Failed to create default runtime config template"
                );
                None
            }
        }
    }
}

fn write_template(config_path: &Path) -> Result<()> {
    if let Some(parent) = config_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    fs::write(config_path, default_config_template()).with_context(|| {
        format!(
            "failed to create config template at {}",
            config_path.display()
        )
    })
}

pub fn default_config_template() -> String {
    format!(
        r#"# FB-Mod runtime configuration
# Generated automatically on first launch.

# Provider order (comma-separated)
net.filebot.provider.order={DEFAULT_PROVIDER_ORDER}

# Optional data mirror path / URL
# url.data.source=/path/to/fb-mod-mirror

# Optional provider disable list
# net.filebot.provider.disabled=TheTVDB,AniDB

# API keys (recommended)
# apikey.themoviedb=
# apikey.thetvdb=
# apikey.omdb=
# apikey.fanart.tv=
# apikey.opensubtitles=
"#
    )
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::infrastructure::env::StaticEnv;

    fn write(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn explicit_argument_wins_over_env_and_home() {
        let home = TempDir::new().unwrap();
        let locator = ConfigFileLocator::new(home.path());
        write(&locator.modern_path(), "a=1\n");
        let env = StaticEnv::new().with("FB_MOD_CONFIG", "/from/env.properties");

        let args = Arguments::default().with_config_path("  /from/args.properties ");
        assert_eq!(
            locator.locate(&args, &env),
            Some(PathBuf::from("/from/args.properties"))
        );

        let blank_args = Arguments::default().with_config_path("   ");
        assert_eq!(
            locator.locate(&blank_args, &env),
            Some(PathBuf::from("/from/env.properties"))
        );
    }

    #[test]
    fn prefers_modern_over_legacy() {
        let home = TempDir::new().unwrap();
        let locator = ConfigFileLocator::new(home.path());
        let env = StaticEnv::new();

        assert_eq!(locator.locate(&Arguments::default(), &env), None);

        write(&locator.legacy_path(), "a=legacy\n");
        assert_eq!(
            locator.locate(&Arguments::default(), &env),
            Some(locator.legacy_path())
        );

        write(&locator.modern_path(), "a=modern\n");
        assert_eq!(
            locator.locate(&Arguments::default(), &env),
            Some(locator.modern_path())
        );
    }

    #[test]
    fn creates_template_with_parents() {
        let home = TempDir::new().unwrap();
        let locator = ConfigFileLocator::new(home.path());

        let created = locator.create_default_config_template_if_missing();

        assert_eq!(created, Some(locator.modern_path()));
        let content = fs::read_to_string(locator.modern_path()).unwrap();
        assert!(content.contains("net.filebot.provider.order=TheMovieDB::TV,TVmaze,TheTVDB,AniDB"));
        assert!(content.contains("# url.data.source="));
        assert!(content.contains("# net.filebot.provider.disabled="));
        assert_eq!(content.matches("# apikey.").count(), 5);
    }

    #[test]
    fn never_overwrites_existing_file() {
        let home = TempDir::new().unwrap();
        let locator = ConfigFileLocator::new(home.path());
        let user_content = "# my edits\nurl.data.source=/srv/mirror\n";
        write(&locator.modern_path(), user_content);

        let returned = locator.create_default_config_template_if_missing();

        assert_eq!(returned, Some(locator.modern_path()));
        assert_eq!(
            fs::read(locator.modern_path()).unwrap(),
            user_content.as_bytes()
        );
    }

    #[test]
    fn template_failure_is_not_fatal() {
        let home = TempDir::new().unwrap();
        // `.config`가 파일이면 디렉터리를 만들 수 없다.
        fs::write(home.path().join(".config"), "blocker").unwrap();
        let locator = ConfigFileLocator::new(home.path());

        assert_eq!(locator.create_default_config_template_if_missing(), None);
    }
}
