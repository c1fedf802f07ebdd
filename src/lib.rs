//! fbmod-config library root.
//! 설정 파일/환경변수/명령행 인자를 병합해 런타임 속성을 게시한다.

use anyhow::Result;

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

pub use domain::arguments::Arguments;
pub use infrastructure::config::{
    RuntimeConfiguration, api_key, application_property, configure, global, warn_legacy_property,
};
pub use infrastructure::env::{StaticEnv, SystemEnv};

use interface::composition::AppComposition;

/// 전역 설정을 초기화하고 진단 JSON을 반환한다.
pub fn inspect_config_pretty_json(args: &Arguments) -> Result<String> {
    let composition = AppComposition::default();
    composition.inspect_config_usecase().execute(args)
}
