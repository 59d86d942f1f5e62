use katsuyo_core::error::ConjugateError;

/// Dictionary-form endings a verb may have
pub const VERB_ENDINGS: [char; 9] = ['る', 'う', 'く', 'ぐ', 'す', 'つ', 'ぬ', 'ぶ', 'む'];

pub fn is_japanese_char(c: char) -> bool {
    matches!(c,
        '\u{3040}'..='\u{309F}' // hiragana
        | '\u{30A0}'..='\u{30FF}' // katakana
        | '\u{4E00}'..='\u{9FAF}' // kanji
    )
}

/// Reject input that cannot be a dictionary-form verb.
///
/// Expects preprocessed input. Skipping this keeps the classifier's
/// godan-ru fallback reachable.
pub fn validate_verb(verb: &str) -> Result<(), ConjugateError> {
    let Some(last) = verb.chars().next_back() else {
        return Err(ConjugateError::EmptyVerb);
    };

    if !verb.chars().any(is_japanese_char) {
        return Err(ConjugateError::NotJapanese(verb.to_string()));
    }

    if !VERB_ENDINGS.contains(&last) {
        return Err(ConjugateError::UnsupportedEnding(verb.to_string()));
    }

    Ok(())
}
