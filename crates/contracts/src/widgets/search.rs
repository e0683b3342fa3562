//! Center search box texts.

pub fn placeholder_for(engine: &str) -> String {
    format!("{}全网搜索", engine.trim())
}

/// Message shown on submit, or `None` when there is nothing to search for.
pub fn search_message(engine: Option<&str>, query: &str) -> Option<String> {
    let query = query.trim();
    let engine = engine?.trim();
    if query.is_empty() {
        return None;
    }
    Some(format!("使用{engine}搜索: {query}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder() {
        assert_eq!(placeholder_for(" 百度 "), "百度全网搜索");
    }

    #[test]
    fn test_search_message() {
        assert_eq!(
            search_message(Some("Google"), "  rust wasm "),
            Some("使用Google搜索: rust wasm".to_string())
        );
        assert_eq!(search_message(Some("Google"), "   "), None);
        assert_eq!(search_message(None, "rust"), None);
    }
}
