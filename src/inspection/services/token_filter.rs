/// Delimiter between AND-tokens in a query
pub const TOKEN_DELIMITER: char = '%';

/// TokenFilter - case-insensitive AND-substring filter
///
/// `"AR%NNB"` keeps values containing both `ar` and `nnb`, in any order.
/// A query with no non-blank tokens keeps everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenFilter {
    tokens: Vec<String>,
    folded: Vec<String>,
}

impl TokenFilter {
    pub fn parse(query: &str) -> Self {
        Self::parse_with(query, TOKEN_DELIMITER)
    }

    pub fn parse_with(query: &str, delimiter: char) -> Self {
        let tokens: Vec<String> = query
            .split(delimiter)
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .map(str::to_string)
            .collect();
        let folded = tokens.iter().map(|t| t.to_lowercase()).collect();
        Self { tokens, folded }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn matches(&self, value: &str) -> bool {
        let value = value.to_lowercase();
        self.folded.iter().all(|token| value.contains(token.as_str()))
    }

    /// Keeps the records whose target field matches, preserving order
    ///
    /// A missing target field is matched as an empty string.
    pub fn apply<T>(&self, records: Vec<T>, target: impl Fn(&T) -> Option<&str>) -> Vec<T> {
        if self.is_empty() {
            return records;
        }
        records
            .into_iter()
            .filter(|record| self.matches(target(record).unwrap_or("")))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> Vec<Option<String>> {
        values.iter().map(|v| Some(v.to_string())).collect()
    }

    #[test]
    fn test_parse_drops_blank_tokens() {
        let filter = TokenFilter::parse(" AR % %NNB% ");
        assert_eq!(filter.tokens(), &["AR".to_string(), "NNB".to_string()]);
    }

    #[test]
    fn test_and_semantics() {
        let filter = TokenFilter::parse("AR%NNB");
        assert!(filter.matches("AR-100-NNB"));
        assert!(!filter.matches("AR-100"));
    }

    #[test]
    fn test_case_insensitive_and_order_free() {
        assert!(TokenFilter::parse("nnb%ar").matches("AR-100-NNB"));
        assert!(TokenFilter::parse("Ar").matches("bAR"));
    }

    #[test]
    fn test_empty_queries_are_noop() {
        for query in ["", "   ", "%%", " % "] {
            let filter = TokenFilter::parse(query);
            assert!(filter.is_empty());
            let input = names(&["x", "y"]);
            let output = filter.apply(input.clone(), |n| n.as_deref());
            assert_eq!(output, input);
        }
    }

    #[test]
    fn test_apply_is_stable() {
        let input = names(&["AR-2 NNB", "BR-1", "nnb ar-3", "AR-4"]);
        let output = TokenFilter::parse("AR%NNB").apply(input, |n| n.as_deref());
        assert_eq!(output, names(&["AR-2 NNB", "nnb ar-3"]));
    }

    #[test]
    fn test_missing_field_matches_as_empty() {
        let input: Vec<Option<String>> = vec![None, Some("AR".to_string())];
        let output = TokenFilter::parse("AR").apply(input, |n| n.as_deref());
        assert_eq!(output, vec![Some("AR".to_string())]);
    }

    #[test]
    fn test_custom_delimiter() {
        let filter = TokenFilter::parse_with("AR,NNB", ',');
        assert_eq!(filter.tokens().len(), 2);
    }
}
