use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default JP preprocessor
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // Unicode normalization (NFKC), folds half-width kana and full-width spaces
        let text: String = text.nfkc().collect();

        // A verb is a single word, drop any whitespace left inside it
        text.chars().filter(|c| !c.is_whitespace()).collect()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
