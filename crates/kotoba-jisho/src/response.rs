use serde::Deserialize;

use crate::WordDefinition;

/// Only the first three sense groups contribute glosses.
const MAX_SENSES: usize = 3;
/// Hard cap on glosses per output record.
const MAX_DEFINITIONS: usize = 3;

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    data: Vec<SearchEntry>,
}

#[derive(Debug, Deserialize)]
struct SearchEntry {
    #[serde(default)]
    japanese: Vec<JapaneseForm>,
    #[serde(default)]
    senses: Vec<Sense>,
}

#[derive(Debug, Deserialize)]
struct JapaneseForm {
    word: Option<String>,
    reading: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Sense {
    #[serde(default)]
    english_definitions: Vec<String>,
}

impl SearchResponse {
    /// Reduce the first hit to a `WordDefinition`. Any missing required field
    /// makes the whole lookup count as "not found".
    pub(crate) fn into_definition(self) -> Option<WordDefinition> {
        let entry = self.data.into_iter().next()?;
        let form = entry.japanese.into_iter().next()?;

        let reading = form.reading.filter(|r| !r.is_empty())?;
        // Kana-only entries carry no separate written form.
        let surface = match form.word.filter(|w| !w.is_empty()) {
            Some(word) => word,
            None => reading.clone(),
        };

        let definitions: Vec<String> = entry
            .senses
            .into_iter()
            .take(MAX_SENSES)
            .flat_map(|sense| sense.english_definitions)
            .take(MAX_DEFINITIONS)
            .collect();

        if definitions.is_empty() {
            return None;
        }

        Some(WordDefinition {
            surface,
            reading,
            definitions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> SearchResponse {
        serde_json::from_str(json).expect("valid test payload")
    }

    #[test]
    fn extracts_first_entry() {
        let response = parse(
            r#"{"data": [
                {"japanese": [{"word": "犬", "reading": "いぬ"}],
                 "senses": [{"english_definitions": ["dog"]}]},
                {"japanese": [{"word": "狗", "reading": "いぬ"}],
                 "senses": [{"english_definitions": ["hound"]}]}
            ]}"#,
        );

        let def = response.into_definition().expect("entry present");
        assert_eq!(def.surface, "犬");
        assert_eq!(def.reading, "いぬ");
        assert_eq!(def.definitions, vec!["dog"]);
    }

    #[test]
    fn surface_falls_back_to_reading() {
        let response = parse(
            r#"{"data": [
                {"japanese": [{"reading": "こんにちは"}],
                 "senses": [{"english_definitions": ["hello"]}]}
            ]}"#,
        );

        let def = response.into_definition().expect("entry present");
        assert_eq!(def.surface, "こんにちは");
        assert_eq!(def.reading, "こんにちは");
    }

    #[test]
    fn flattens_three_senses_and_truncates_to_three_glosses() {
        let response = parse(
            r#"{"data": [
                {"japanese": [{"word": "手", "reading": "て"}],
                 "senses": [
                    {"english_definitions": ["hand", "arm"]},
                    {"english_definitions": ["handle"]},
                    {"english_definitions": ["means"]},
                    {"english_definitions": ["never reached"]}
                 ]}
            ]}"#,
        );

        let def = response.into_definition().expect("entry present");
        assert_eq!(def.definitions, vec!["hand", "arm", "handle"]);
    }

    #[test]
    fn empty_data_is_not_found() {
        assert_eq!(parse(r#"{"data": []}"#).into_definition(), None);
    }

    #[test]
    fn missing_reading_is_not_found() {
        let response = parse(
            r#"{"data": [
                {"japanese": [{"word": "犬"}],
                 "senses": [{"english_definitions": ["dog"]}]}
            ]}"#,
        );
        assert_eq!(response.into_definition(), None);
    }

    #[test]
    fn no_glosses_is_not_found() {
        let response = parse(
            r#"{"data": [
                {"japanese": [{"word": "犬", "reading": "いぬ"}],
                 "senses": [{"english_definitions": []}]}
            ]}"#,
        );
        assert_eq!(response.into_definition(), None);
    }
}
