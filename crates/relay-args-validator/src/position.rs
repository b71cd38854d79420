/// Convert a byte offset to a line and column (0-indexed)
///
/// Iterates through the document character by character until it reaches the
/// specified offset, counting newlines to determine the line number and
/// characters to determine the column.
#[must_use]
pub fn offset_to_line_col(document: &str, offset: usize) -> (usize, usize) {
    let mut line = 0;
    let mut col = 0;
    let mut current_offset = 0;

    for ch in document.chars() {
        if current_offset >= offset {
            break;
        }

        if ch == '\n' {
            line += 1;
            col = 0;
        } else {
            col += 1;
        }

        current_offset += ch.len_utf8();
    }

    (line, col)
}
