//! provider 목록 문자열(`a, b, c`) 해석 규칙.

/// 쉼표로 구분된 provider 목록을 공백 제거 후 분리한다.
pub fn split_provider_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// 비활성 목록에 식별자가 없으면 활성 상태로 본다(대소문자 무시).
pub fn is_enabled(disabled: Option<&str>, identifier: &str) -> bool {
    let Some(disabled) = disabled.filter(|v| !v.trim().is_empty()) else {
        return true;
    };

    !split_provider_list(disabled)
        .iter()
        .any(|it| it.eq_ignore_ascii_case(identifier))
}

pub fn status_message(enabled: bool) -> &'static str {
    if enabled {
        "enabled"
    } else {
        "disabled by net.filebot.provider.disabled"
    }
}
