//! 명령행 파서가 만들어 넘기는 설정 관련 인자 묶음.

/// 런타임 설정 해석에 필요한 명령행 인자.
///
/// 값은 파서가 준 그대로 보관하며, 공백 처리는 해석기에서 한다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments {
    /// 명시적 설정 파일 경로
    pub config_path: Option<String>,
    /// 데이터 소스 미러(URL 또는 디렉터리)
    pub data_source: Option<String>,
    /// provider 순서(쉼표 구분)
    pub provider_order: Option<String>,
}

impl Arguments {
    pub fn with_config_path(mut self, path: impl Into<String>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    pub fn with_data_source(mut self, source: impl Into<String>) -> Self {
        self.data_source = Some(source.into());
        self
    }

    pub fn with_provider_order(mut self, order: impl Into<String>) -> Self {
        self.provider_order = Some(order.into());
        self
    }
}
