//! Domain layer
//! 속성 키, 명령행 인자, provider 목록 규칙 같은 순수 규칙만 둔다.

pub mod arguments;
pub mod keys;
pub mod provider;
