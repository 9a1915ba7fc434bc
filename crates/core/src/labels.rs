//! Participant label input.
//!
//! Labels arrive as free text, one per line. Blank lines act as placeholders:
//! a run of blank lines collapses into one empty entry, and empty entries
//! never become lanes.

/// Split free text into label entries, collapsing each run of consecutive
/// empty lines into a single empty entry.
///
/// A trailing `\r` is dropped from every line so CRLF input behaves like LF.
pub fn parse_labels(text: &str) -> Vec<String> {
    let mut labels: Vec<String> = Vec::new();
    for line in text.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.is_empty() && labels.last().is_some_and(String::is_empty) {
            continue;
        }
        labels.push(line.to_string());
    }
    labels
}

/// The entries that become lanes, in input order.
pub fn usable_labels<S: AsRef<str>>(labels: &[S]) -> Vec<&str> {
    labels
        .iter()
        .map(AsRef::as_ref)
        .filter(|label| !label.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_label_per_line() {
        assert_eq!(parse_labels("A\nB\nC"), vec!["A", "B", "C"]);
    }

    #[test]
    fn collapses_blank_runs() {
        assert_eq!(parse_labels("A\n\n\n\nB"), vec!["A", "", "B"]);
        assert_eq!(parse_labels("\n\nA"), vec!["", "A"]);
    }

    #[test]
    fn keeps_single_trailing_placeholder() {
        assert_eq!(parse_labels("A\nB\n"), vec!["A", "B", ""]);
        assert_eq!(parse_labels("A\nB\n\n\n"), vec!["A", "B", ""]);
    }

    #[test]
    fn crlf_input() {
        assert_eq!(parse_labels("A\r\n\r\n\r\nB\r\n"), vec!["A", "", "B", ""]);
    }

    #[test]
    fn usable_drops_placeholders_only() {
        let labels = ["A", "", "", "B", " ", "C"];
        assert_eq!(usable_labels(&labels), vec!["A", "B", " ", "C"]);
    }
}
