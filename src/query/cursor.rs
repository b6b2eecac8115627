/// 把偏移量夹到文本范围内的字符边界上
pub(crate) fn clamp_offset(text: &str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

/// 偏移量所在行的行首偏移
pub fn line_start(text: &str, offset: usize) -> usize {
    let offset = clamp_offset(text, offset);
    text[..offset].rfind('\n').map_or(0, |i| i + 1)
}

/// 偏移量所在的 1-based 行号
pub fn line_number(text: &str, offset: usize) -> usize {
    let offset = clamp_offset(text, offset);
    text[..offset].matches('\n').count() + 1
}

fn is_identifier_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// 包含 offset 的最长标识符字符串 (光标在标识符末尾也算)
pub fn identifier_at(text: &str, offset: usize) -> Option<&str> {
    let offset = clamp_offset(text, offset);
    let bytes = text.as_bytes();

    let mut start = offset;
    while start > 0 && is_identifier_byte(bytes[start - 1]) {
        start -= 1;
    }
    let mut end = offset;
    while end < bytes.len() && is_identifier_byte(bytes[end]) {
        end += 1;
    }

    (start < end).then(|| &text[start..end])
}
