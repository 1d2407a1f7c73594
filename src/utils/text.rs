//! Text helpers shared by the indexes

/// Return the line (without its terminator) containing the character at
/// `char_offset`, or `None` if the offset is past the end of the text
pub fn line_of_char(text: &str, char_offset: usize) -> Option<&str> {
    locate_line(text, char_offset).map(|(line, _)| line)
}

/// Like [`line_of_char`], also returning the char column of the offset
/// within that line
pub fn locate_line(text: &str, char_offset: usize) -> Option<(&str, usize)> {
    let (byte_pos, c) = text.char_indices().nth(char_offset)?;

    // A newline belongs to the line it terminates
    let line_end = if c == '\n' {
        byte_pos
    } else {
        text[byte_pos..]
            .find('\n')
            .map(|i| byte_pos + i)
            .unwrap_or(text.len())
    };
    let line_start = text[..byte_pos].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let column = text[line_start..byte_pos].chars().count();

    Some((text[line_start..line_end].trim_end_matches('\r'), column))
}

/// Check if content is likely binary
///
/// Examines the first 8KB for NUL bytes or a high share of control bytes
pub fn is_binary(content: &[u8]) -> bool {
    let sample_size = content.len().min(8192);
    let sample = &content[..sample_size];

    if sample.contains(&0) {
        return true;
    }

    let non_text_count = sample
        .iter()
        .filter(|&&b| b < 0x20 && b != b'\n' && b != b'\r' && b != b'\t')
        .count();

    non_text_count > sample_size / 8
}

/// Decode file bytes as text, replacing invalid UTF-8 sequences
pub fn decode_lossy(content: Vec<u8>) -> String {
    match String::from_utf8(content) {
        Ok(text) => text,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    }
}
