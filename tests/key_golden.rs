
use folio_tui::{parse_input_events, parse_key};
use pretty_assertions::assert_eq;

#[test]
fn key_vectors_match_fixture() {
    let raw = fixture::read_fixture("key_vectors.tsv");
    for (idx, line) in raw.lines().enumerate() {
        let line_num = idx + 1;
        let line = line.trim_end();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let parts: Vec<&str> = line.split('\t').collect();
        assert!(
            parts.len() == 3,
            "line {line_num}: expected 3 columns, got {}",
            parts.len()
        );
        let input = fixture::unescape(parts[1]);
        let expected = parts[2].trim();
        match parts[0] {
            "parse" => {
                let actual = parse_key(&input)
                    .map(|key| format!("{key:?}"))
                    .unwrap_or_else(|| "none".to_string());
                assert_eq!(actual, expected, "line {line_num}: parse_key({input:?}) mismatch");
            }
            "events" => {
                let actual = parse_input_events(&input)
                    .iter()
                    .map(|event| format!("{event:?}"))
                    .collect::<Vec<_>>()
                    .join("|");
                assert_eq!(
                    actual, expected,
                    "line {line_num}: parse_input_events({input:?}) mismatch"
                );
            }
            other => panic!("line {line_num}: unknown kind {other}"),
        }
    }
}
