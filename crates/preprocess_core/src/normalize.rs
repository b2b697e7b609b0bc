/// Normalizes `text` through the fixed pipeline: lowercase, strip
/// leading/trailing whitespace, replace each newline with a single
/// space, then delete every ASCII punctuation character.
///
/// The steps apply in that order. Stripping happens before punctuation
/// removal, so whitespace that was interior at strip time survives even
/// when deleting an adjacent punctuation character leaves it trailing.
/// Newlines are replaced one-for-one; consecutive newlines become
/// consecutive spaces, never collapsed.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let trimmed = lowered.trim();

    // Newline replacement and punctuation deletion commute with a
    // single pass: '\n' is not punctuation and ' ' is never deleted.
    trimmed
        .chars()
        .filter_map(|character| match character {
            '\n' => Some(' '),
            character if character.is_ascii_punctuation() => None,
            character => Some(character),
        })
        .collect()
}
