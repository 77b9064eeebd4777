//! Array literal detection and splitting.

/// Returns `true` if `text` (trimmed) is a brace list: `{...}` or `'{...}`.
pub fn is_array_literal(text: &str) -> bool {
    let text = text.trim();
    (text.starts_with('{') || text.starts_with("'{")) && text.ends_with('}')
}

/// Splits a brace list into its top-level elements.
///
/// The leading `'{`/`{` and the trailing `}` are stripped, then the text is
/// split on commas that are not nested inside parentheses, braces, brackets,
/// or string literals. Elements are returned untrimmed. Text that is not a
/// brace list is returned as a single element.
pub fn split_array(text: &str) -> Vec<String> {
    let trimmed = text.trim();
    if !is_array_literal(trimmed) {
        return vec![trimmed.to_string()];
    }
    let inner = trimmed.strip_prefix('\'').unwrap_or(trimmed);
    let inner = &inner[1..inner.len() - 1];

    let mut elements = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for c in inner.chars() {
        if in_string {
            current.push(c);
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '(' | '{' | '[' => depth += 1,
            ')' | '}' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                elements.push(std::mem::take(&mut current));
                continue;
            }
            _ => {}
        }
        current.push(c);
    }
    elements.push(current);
    elements
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_brace_lists() {
        assert!(is_array_literal("{1,2}"));
        assert!(is_array_literal(" '{1, 2} "));
        assert!(!is_array_literal("1"));
        assert!(!is_array_literal("{1,2"));
        assert!(!is_array_literal("\"{1}\""));
    }

    #[test]
    fn splits_top_level_commas() {
        assert_eq!(split_array("{1, 2,3}"), vec!["1", " 2", "3"]);
        assert_eq!(split_array("'{a}"), vec!["a"]);
    }

    #[test]
    fn nested_commas_stay_together() {
        assert_eq!(
            split_array("{$pow(2,3), {4,5}, \"a,b\"}"),
            vec!["$pow(2,3)", " {4,5}", " \"a,b\""]
        );
    }

    #[test]
    fn non_array_is_single_element() {
        assert_eq!(split_array(" 12 "), vec!["12"]);
    }
}
