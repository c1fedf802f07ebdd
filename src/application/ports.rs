//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use anyhow::Result;

use crate::domain::arguments::Arguments;

/// 환경변수 조회 포트. 해석기는 `std::env`에 직접 접근하지 않는다.
pub trait EnvSource: Send + Sync {
    fn var(&self, name: &str) -> Option<String>;
}

/// 런타임 설정 초기화/조회를 담당하는 저장소 포트.
pub trait ConfigRepository: Send + Sync {
    /// 최초 호출에서만 설정을 적용하고 `true`를 반환한다.
    fn configure(&self, args: &Arguments) -> bool;
    fn inspect_pretty_json(&self) -> Result<String>;
    fn api_key(&self, name: &str, fallback: &str) -> String;
}
