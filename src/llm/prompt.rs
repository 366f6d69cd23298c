//! Model-facing text assembly.
//!
//! Every provider receives the same text: the user's instruction, a blank
//! line, then the note content.  The filename mode replaces the note content
//! with a short label naming the file, and Perplexity additionally gets a
//! fixed system message.

/// System message sent with every Perplexity request.
pub const LINGUIST_SYSTEM_PROMPT: &str = "Bạn là một chuyên gia ngôn ngữ học với kinh nghiệm \
xây dựng hệ thống từ vựng và phương pháp ghi nhớ hiệu quả.";

/// Label placed in front of a file's basename in filename mode.
const FILENAME_LABEL: &str = "Tên file";

/// Join `instruction` and `content` with a blank-line separator.
///
/// ```
/// use note_processor::llm::prompt::compose;
///
/// assert_eq!(compose("Summarise:", "body"), "Summarise:\n\nbody");
/// ```
pub fn compose(instruction: &str, content: &str) -> String {
    let mut text = String::with_capacity(instruction.len() + content.len() + 2);
    text.push_str(instruction);
    text.push_str("\n\n");
    text.push_str(content);
    text
}

/// Content sent instead of the file body when processing by filename.
pub fn filename_context(basename: &str) -> String {
    format!("{FILENAME_LABEL}: {basename}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compose_keeps_both_parts_verbatim() {
        let text = compose("  Translate  ", "line one\nline two\n");
        assert_eq!(text, "  Translate  \n\nline one\nline two\n");
    }

    #[test]
    fn compose_with_empty_content() {
        assert_eq!(compose("Do it", ""), "Do it\n\n");
    }

    #[test]
    fn filename_context_names_the_file() {
        assert_eq!(filename_context("ephemeral"), "Tên file: ephemeral");
    }
}
