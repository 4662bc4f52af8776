use kotoba_jisho::WordDefinition;

/// Header line introducing the trailing not-found section.
pub const NOT_FOUND_HEADER: &str = "Definition Not Found:";

/// One output line per found word. The reading is bracketed only when the
/// written form differs from it.
pub fn format_record(def: &WordDefinition) -> String {
    let glosses = def.definitions.join(", ");
    if def.surface == def.reading {
        format!("{};{};", def.reading, glosses)
    } else {
        format!("{}[{}];{};", def.surface, def.reading, glosses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def(surface: &str, reading: &str, glosses: &[&str]) -> WordDefinition {
        WordDefinition {
            surface: surface.to_string(),
            reading: reading.to_string(),
            definitions: glosses.iter().map(|g| g.to_string()).collect(),
        }
    }

    #[test]
    fn brackets_reading_when_it_differs() {
        let line = format_record(&def("犬", "いぬ", &["dog"]));
        assert_eq!(line, "犬[いぬ];dog;");
    }

    #[test]
    fn omits_reading_when_equal_to_surface() {
        let line = format_record(&def("こんにちは", "こんにちは", &["hello", "hi"]));
        assert_eq!(line, "こんにちは;hello, hi;");
    }
}
