//! Markdown table rendering for parsed vocabulary entries.
//!
//! Column rules:
//!
//! | Column          | Rule                                                        |
//! |-----------------|-------------------------------------------------------------|
//! | every cell      | `|` escaped as `\|`; missing values render as empty cells   |
//! | Part of Speech  | abbreviated (`adj.`, `n.`, `v.`, `adv.`), else text before the first comma |
//! | Definition      | cut to 60 characters (after escaping) plus `...`           |

use super::parser::VocabularyEntry;

pub const TABLE_HEADER: &str =
    "| Word | Part of Speech | Definition | Pronunciation | Audio | Example |\n";
pub const TABLE_SEPARATOR: &str =
    "|------|---------------|------------|---------------|-------|---------|\n";

/// Maximum definition length in characters, counted after escaping.
pub const DEFINITION_LIMIT: usize = 60;
const ELLIPSIS: &str = "...";

/// Abbreviations checked in order; the first substring hit wins.
const PART_OF_SPEECH_ABBREVIATIONS: &[(&str, &str)] = &[
    ("adjective", "adj."),
    ("noun", "n."),
    ("verb", "v."),
    ("adverb", "adv."),
];

/// Prefix every `|` with a backslash.
pub fn escape_pipes(text: &str) -> String {
    text.replace('|', "\\|")
}

/// Short form of a part-of-speech description.
///
/// Matching is a case-insensitive substring test in the order adjective,
/// noun, verb, adverb.  Since "adverb" contains "verb", adverbs come out as
/// `v.`.  Without a match the text before the first comma is kept as is.
///
/// ```
/// use note_processor::vocab::table::abbreviate_part_of_speech;
///
/// assert_eq!(abbreviate_part_of_speech("Noun, common"), "n.");
/// assert_eq!(abbreviate_part_of_speech("Exclamation"), "Exclamation");
/// ```
pub fn abbreviate_part_of_speech(part_of_speech: &str) -> String {
    let lower = part_of_speech.to_lowercase();
    PART_OF_SPEECH_ABBREVIATIONS
        .iter()
        .find(|(needle, _)| lower.contains(needle))
        .map(|(_, short)| short.to_string())
        .unwrap_or_else(|| {
            part_of_speech
                .split(',')
                .next()
                .unwrap_or_default()
                .to_string()
        })
}

/// Cut `definition` to [`DEFINITION_LIMIT`] characters and mark the cut.
pub fn truncate_definition(definition: &str) -> String {
    if definition.chars().count() <= DEFINITION_LIMIT {
        return definition.to_string();
    }
    let mut cut: String = definition.chars().take(DEFINITION_LIMIT).collect();
    cut.push_str(ELLIPSIS);
    cut
}

fn cell(value: Option<&str>) -> String {
    escape_pipes(value.unwrap_or_default())
}

/// One table row, newline-terminated.
pub fn render_row(entry: &VocabularyEntry) -> String {
    let word = escape_pipes(&entry.vocabulary);
    let part_of_speech =
        escape_pipes(&abbreviate_part_of_speech(entry.part_of_speech.as_deref().unwrap_or_default()));
    let definition = truncate_definition(&cell(entry.definition.as_deref()));
    let pronunciation = cell(entry.pronunciation.as_deref());
    let audio = cell(entry.audio.as_deref());
    let example = cell(entry.example.as_deref());

    format!("| {word} | {part_of_speech} | {definition} | {pronunciation} | {audio} | {example} |\n")
}

/// Header, separator and one row per entry, in order.
pub fn render_table(entries: &[VocabularyEntry]) -> String {
    let mut table = String::with_capacity(
        TABLE_HEADER.len() + TABLE_SEPARATOR.len() + entries.len() * 96,
    );
    table.push_str(TABLE_HEADER);
    table.push_str(TABLE_SEPARATOR);
    for entry in entries {
        table.push_str(&render_row(entry));
    }
    table
}

/// Title and counts placed above the table.
pub fn render_summary(files_processed: usize, total_entries: usize) -> String {
    format!(
        "# Vocabulary Table\n\n**Files processed:** {files_processed}\n**Total entries:** {total_entries}\n\n---\n\n"
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_with_definition(definition: &str) -> VocabularyEntry {
        VocabularyEntry {
            definition: Some(definition.to_string()),
            ..VocabularyEntry::new("word")
        }
    }

    #[test]
    fn part_of_speech_precedence() {
        assert_eq!(abbreviate_part_of_speech("Adjective (comparative)"), "adj.");
        assert_eq!(abbreviate_part_of_speech("Noun, common"), "n.");
        assert_eq!(abbreviate_part_of_speech("transitive VERB"), "v.");
        assert_eq!(abbreviate_part_of_speech("adverb"), "v.");
        assert_eq!(abbreviate_part_of_speech("adjective / noun"), "adj.");
    }

    #[test]
    fn unmatched_part_of_speech_keeps_text_before_comma() {
        assert_eq!(abbreviate_part_of_speech("Exclamation"), "Exclamation");
        assert_eq!(abbreviate_part_of_speech("Idiom, informal"), "Idiom");
        assert_eq!(abbreviate_part_of_speech(" prep , x"), " prep ");
        assert_eq!(abbreviate_part_of_speech(""), "");
    }

    #[test]
    fn long_definition_is_cut_to_sixty_plus_ellipsis() {
        let definition = "d".repeat(70);
        let cut = truncate_definition(&definition);

        assert_eq!(cut.len(), 63);
        assert!(cut.ends_with("..."));
        assert_eq!(&cut[..60], &definition[..60]);
    }

    #[test]
    fn sixty_character_definition_is_untouched() {
        let definition = "x".repeat(60);
        assert_eq!(truncate_definition(&definition), definition);
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let definition = "é".repeat(61);
        let cut = truncate_definition(&definition);
        assert_eq!(cut.chars().count(), 63);
    }

    #[test]
    fn escape_backslashes_count_toward_the_limit() {
        let definition = format!("{}|tail", "a".repeat(58));
        let row = render_row(&entry_with_definition(&definition));

        // 58 + `\|` fills the budget exactly.
        let expected = format!("{}\\|...", "a".repeat(58));
        assert!(row.contains(&format!("| {expected} |")), "{row}");
    }

    #[test]
    fn pipes_are_escaped_in_every_cell() {
        let entry = VocabularyEntry {
            vocabulary: "either|or".into(),
            pronunciation: Some("/a|b/".into()),
            definition: Some("a|b".into()),
            example: Some("this|that".into()),
            audio: Some("![[x|alias]]".into()),
            part_of_speech: Some("conj|x".into()),
        };
        let row = render_row(&entry);

        assert_eq!(
            row,
            "| either\\|or | conj\\|x | a\\|b | /a\\|b/ | ![[x\\|alias]] | this\\|that |\n"
        );
    }

    #[test]
    fn missing_fields_render_as_empty_cells() {
        let row = render_row(&VocabularyEntry::new("bare"));
        assert_eq!(row, "| bare |  |  |  |  |  |\n");
    }

    #[test]
    fn table_has_header_separator_and_rows_in_order() {
        let entries = vec![VocabularyEntry::new("first"), VocabularyEntry::new("second")];
        let table = render_table(&entries);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(format!("{}\n", lines[0]), TABLE_HEADER);
        assert_eq!(format!("{}\n", lines[1]), TABLE_SEPARATOR);
        assert!(lines[2].starts_with("| first |"));
        assert!(lines[3].starts_with("| second |"));
    }

    #[test]
    fn empty_batch_renders_header_only() {
        assert_eq!(render_table(&[]), format!("{TABLE_HEADER}{TABLE_SEPARATOR}"));
    }

    #[test]
    fn summary_states_both_counts() {
        assert_eq!(
            render_summary(3, 12),
            "# Vocabulary Table\n\n**Files processed:** 3\n**Total entries:** 12\n\n---\n\n"
        );
    }
}
