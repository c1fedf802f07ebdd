//! 런타임 설정 해석 모듈.
//! 설정 파일/환경변수/명령행 인자를 우선순위대로 병합해 속성 저장소에 게시한다.

mod api_key;
mod inspection;
mod loader;
mod locator;
mod notify;
mod overrides;
mod properties;
mod runtime;
mod store;
mod utils;

pub use api_key::{ApiKeyResolver, BUNDLED_FALLBACK_NOTICE};
pub use inspection::{ConfigInspection, ProvidersInspection};
pub use loader::load;
pub use locator::{ConfigFileLocator, default_config_template};
pub use notify::NotifyOnce;
pub use runtime::{
    RuntimeConfiguration, api_key, application_property, configure, global, warn_legacy_property,
};
pub use store::{PropertyMap, PropertyStore};
