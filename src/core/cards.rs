use crate::utils::error::{CheckError, Result};

/// Rank characters in deck order. `0` is ten.
pub const RANKS: [char; 13] = [
    'a', '2', '3', '4', '5', '6', '7', '8', '9', '0', 'j', 'q', 'k',
];

/// Suit characters: spades, diamonds, clubs, hearts.
pub const SUITS: [char; 4] = ['s', 'd', 'c', 'h'];

/// All 52 card codes in sorted order: every rank of spades, then
/// diamonds, clubs, hearts.
pub fn full_deck() -> Vec<String> {
    SUITS
        .iter()
        .flat_map(|suit| RANKS.iter().map(move |rank| format!("{}{}", rank, suit)))
        .collect()
}

/// Renders codes as the comma-separated list the deck service expects.
pub fn join_codes(codes: &[String]) -> String {
    codes.join(",")
}

pub fn validate_code(code: &str) -> Result<()> {
    let mut chars = code.chars();
    let valid = match (chars.next(), chars.next(), chars.next()) {
        (Some(rank), Some(suit), None) => RANKS.contains(&rank) && SUITS.contains(&suit),
        _ => false,
    };

    if valid {
        Ok(())
    } else {
        Err(CheckError::ConfigValidationError {
            field: "card_code".to_string(),
            message: format!("'{}' is not a valid two-character card code", code),
        })
    }
}
