pub(super) fn is_line_comment_start(bytes: &[u8], idx: usize) -> bool {
    bytes.get(idx) == Some(&b'-') && bytes.get(idx + 1) == Some(&b'-')
}

pub(super) fn is_block_comment_start(bytes: &[u8], idx: usize) -> bool {
    bytes.get(idx) == Some(&b'/') && bytes.get(idx + 1) == Some(&b'*')
}

pub(super) fn is_block_comment_end(bytes: &[u8], idx: usize) -> bool {
    bytes.get(idx) == Some(&b'*') && bytes.get(idx + 1) == Some(&b'/')
}

pub(super) fn is_line_end(b: u8) -> bool {
    b == b'\n' || b == b'\r'
}

/// A quote byte followed by the same byte is an escaped quote, not a terminator.
pub(super) fn is_doubled(bytes: &[u8], idx: usize, quote: u8) -> bool {
    bytes.get(idx + 1) == Some(&quote)
}
