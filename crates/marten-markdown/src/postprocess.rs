//! Cleanup of the finished buffer.

const FOUR_NEWLINES: &str = "\n\n\n\n";
const THREE_NEWLINES: &str = "\n\n\n";

/// Trim the buffer and cap blank space between blocks at two blank lines.
///
/// Runs of four newlines are replaced by three until none remain.
#[must_use]
pub fn finish(buffer: &str) -> String {
    let mut output = buffer.trim().to_string();
    while output.contains(FOUR_NEWLINES) {
        output = output.replace(FOUR_NEWLINES, THREE_NEWLINES);
    }
    output
}
