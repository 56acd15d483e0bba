use smallworld_core::CardId;
use thiserror::Error;

const EXTRA_MARKER: &str = "#extra";
const SIDE_MARKER: &str = "!side";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    #[error("line {line}: expected a card id, found {text:?}")]
    InvalidId { line: usize, text: String },
}

/// Main-deck card ids in file order, repeats included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeckList {
    pub main: Vec<CardId>,
}

/// Parses `.ydk` text. Reading stops at the extra deck (or side deck) marker.
pub fn parse_deck(text: &str) -> Result<DeckList, DeckError> {
    let mut main = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        let lower = line.to_ascii_lowercase();
        if lower.starts_with(EXTRA_MARKER) || lower.starts_with(SIDE_MARKER) {
            break;
        }
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let id = line.parse::<u32>().map_err(|_| DeckError::InvalidId {
            line: idx + 1,
            text: line.to_string(),
        })?;
        main.push(CardId(id));
    }
    Ok(DeckList { main })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments_skipped_and_extra_stops() {
        let text = "#created by someone\n#main\n14558127\n\n14558127\n23434538\n#extra\n1861629\n!side\n";
        let deck = parse_deck(text).expect("parse");
        assert_eq!(
            deck.main,
            vec![CardId(14558127), CardId(14558127), CardId(23434538)]
        );
    }

    #[test]
    fn extra_marker_is_case_insensitive() {
        let deck = parse_deck("#main\n1\n#EXTRA\n2\n").expect("parse");
        assert_eq!(deck.main, vec![CardId(1)]);
    }

    #[test]
    fn windows_line_endings_parse() {
        let deck = parse_deck("#main\r\n42\r\n7\r\n").expect("parse");
        assert_eq!(deck.main, vec![CardId(42), CardId(7)]);
    }

    #[test]
    fn garbage_reports_line_number() {
        let err = parse_deck("#main\n12\nnot-a-card\n").unwrap_err();
        assert_eq!(
            err,
            DeckError::InvalidId {
                line: 3,
                text: "not-a-card".to_string()
            }
        );
    }
}
