/// Ordered substitutions applied to `html_instructions` strings from the
/// directions endpoint. The pipeline is lossy on purpose: distinct HTML
/// elements collapse into plain text, matching the historical output format
/// of this tool, so the table must not be reordered or extended casually.
pub const INSTRUCTION_CLEANUP: &[(&str, &str)] = &[
    ("<b>", ""),
    ("</b>", ""),
    ("<div style=\"font-size:0.9em\">", " "),
    ("</div>", ""),
    ("&nbsp;", " "),
];

pub fn clean_instruction(html: &str) -> String {
    let mut text = html.to_string();
    for (pattern, replacement) in INSTRUCTION_CLEANUP {
        text = text.replace(pattern, replacement);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_bold_markup() {
        assert_eq!(
            clean_instruction("Turn <b>left</b> onto <b>Main St</b>"),
            "Turn left onto Main St"
        );
    }

    #[test]
    fn collapses_annotation_divs_into_plain_text() {
        let html = "Merge onto <b>I-95 N</b><div style=\"font-size:0.9em\">Entering Maryland</div>";

        assert_eq!(
            clean_instruction(html),
            "Merge onto I-95 N Entering Maryland"
        );
    }

    #[test]
    fn replaces_non_breaking_spaces() {
        assert_eq!(
            clean_instruction("Head&nbsp;north on Elm St"),
            "Head north on Elm St"
        );
    }

    #[test]
    fn leaves_plain_text_untouched() {
        assert_eq!(
            clean_instruction("Continue straight for 2 km"),
            "Continue straight for 2 km"
        );
    }
}
