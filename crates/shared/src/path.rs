//! 路径参数解析

/// 解析纯数字的路径 id
///
/// 只接受非空的 ASCII 数字串，不接受符号和空白。
/// 超出 `i64` 范围时返回 `None`。
pub fn parse_numeric_id(raw: &str) -> Option<i64> {
    if !is_numeric_id(raw) {
        return None;
    }
    raw.parse().ok()
}

/// 是否为非空的 ASCII 数字串，不检查取值范围
pub fn is_numeric_id(raw: &str) -> bool {
    !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit())
}
