//! 지원 환경변수 목록 안내 유스케이스.

use crate::domain::keys;

pub struct DescribeEnvUseCase;

impl DescribeEnvUseCase {
    /// 도움말/진단 출력용 목록(정렬, `, ` 구분).
    pub fn execute(&self) -> String {
        keys::describe_supported_environment_variables()
    }
}
