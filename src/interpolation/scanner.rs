use crate::error::{Construct, SqlInterpolateError};

use super::parsers::{
    is_block_comment_end, is_block_comment_start, is_doubled, is_line_comment_start, is_line_end,
};

/// Scanner state. Quoted and block-comment states remember the byte offset they opened at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum State {
    Normal,
    SingleQuoted(usize),
    DoubleQuoted(usize),
    LineComment,
    BlockComment { depth: u32, start: usize },
}

impl State {
    fn unterminated(self) -> Option<SqlInterpolateError> {
        let (construct, offset) = match self {
            State::Normal | State::LineComment => return None,
            State::SingleQuoted(start) => (Construct::SingleQuoted, start),
            State::DoubleQuoted(start) => (Construct::DoubleQuoted, start),
            State::BlockComment { start, .. } => (Construct::BlockComment, start),
        };
        Some(SqlInterpolateError::UnterminatedConstruct { construct, offset })
    }
}

/// How a quote character is escaped inside a quoted literal or identifier.
///
/// Must match the quote function the literals were produced with: `quote_standard` output is
/// read with `Doubled`, `quote_backslash` output with `Backslash`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EscapeStyle {
    /// `''` and `""` (ANSI)
    #[default]
    Doubled,
    /// `\x` escapes any byte, and doubled quotes are still honoured (MySQL)
    Backslash,
}

/// Walk `sql` once, calling `on_placeholder` with the byte offset of every `?` that sits
/// outside string literals, quoted identifiers and comments.
///
/// Every delimiter is ASCII, so each reported offset is a char boundary of `sql`.
///
/// # Errors
/// Returns `SqlInterpolateError::UnterminatedConstruct` if input ends inside a quoted
/// literal or a block comment. A trailing `--` comment is closed by end of input.
pub(super) fn scan<F>(
    sql: &str,
    escapes: EscapeStyle,
    mut on_placeholder: F,
) -> Result<(), SqlInterpolateError>
where
    F: FnMut(usize),
{
    let bytes = sql.as_bytes();
    let mut state = State::Normal;
    let mut idx = 0;

    while idx < bytes.len() {
        let b = bytes[idx];
        match state {
            State::Normal => match b {
                b'\'' => state = State::SingleQuoted(idx),
                b'"' => state = State::DoubleQuoted(idx),
                b'?' => on_placeholder(idx),
                _ if is_line_comment_start(bytes, idx) => {
                    state = State::LineComment;
                    idx += 1;
                }
                _ if is_block_comment_start(bytes, idx) => {
                    state = State::BlockComment {
                        depth: 1,
                        start: idx,
                    };
                    idx += 1;
                }
                _ => {}
            },
            State::SingleQuoted(_) | State::DoubleQuoted(_)
                if b == b'\\' && escapes == EscapeStyle::Backslash =>
            {
                idx += 1; // skip escaped byte
            }
            State::SingleQuoted(_) if b == b'\'' => {
                if is_doubled(bytes, idx, b'\'') {
                    idx += 1; // skip escaped quote
                } else {
                    state = State::Normal;
                }
            }
            State::DoubleQuoted(_) if b == b'"' => {
                if is_doubled(bytes, idx, b'"') {
                    idx += 1; // skip escaped quote
                } else {
                    state = State::Normal;
                }
            }
            State::SingleQuoted(_) | State::DoubleQuoted(_) => {}
            State::LineComment => {
                if is_line_end(b) {
                    state = State::Normal;
                }
            }
            State::BlockComment { depth, start } => {
                if is_block_comment_start(bytes, idx) {
                    state = State::BlockComment {
                        depth: depth + 1,
                        start,
                    };
                    idx += 1;
                } else if is_block_comment_end(bytes, idx) {
                    state = if depth == 1 {
                        State::Normal
                    } else {
                        State::BlockComment {
                            depth: depth - 1,
                            start,
                        }
                    };
                    idx += 1;
                }
            }
        }

        idx += 1;
    }

    match state.unterminated() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
