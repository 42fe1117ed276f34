/// Escapes every regex metacharacter in `s` so it matches as literal text.
pub fn escape_regex(s: &str) -> String {
    regex::escape(s)
}

/// Joins the escaped form of each name with `|`, keeping input order.
pub fn alternation<S: AsRef<str>>(names: &[S]) -> String {
    names
        .iter()
        .map(|name| escape_regex(name.as_ref()))
        .collect::<Vec<_>>()
        .join("|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn escapes_metacharacters() {
        assert_eq!(escape_regex("A+B"), r"A\+B");
        assert_eq!(escape_regex("AT&T (US)"), r"AT\&T \(US\)");
        assert_eq!(escape_regex(r"a\b"), r"a\\b");
        assert_eq!(escape_regex("Plain Name"), "Plain Name");
        assert_eq!(escape_regex("a-b~c#d"), r"a\-b\~c\#d");
    }

    #[test]
    fn escaped_name_matches_only_itself() {
        let re = Regex::new(&format!("^(?:{})$", escape_regex("A+B.co"))).unwrap();
        assert!(re.is_match("A+B.co"));
        assert!(!re.is_match("AAB.co"));
        assert!(!re.is_match("A+Bxco"));
    }

    #[test]
    fn alternation_keeps_order() {
        assert_eq!(alternation(&["Acme", "Foo?", "Bar"]), r"Acme|Foo\?|Bar");
        assert_eq!(alternation::<&str>(&[]), "");
    }
}
