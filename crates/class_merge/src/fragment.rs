//! Class fragments and the filter-and-flatten normalization step.

use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One entry in a component's ordered class list.
pub enum ClassFragment<'a> {
    /// Always-applied class text. May hold several whitespace-separated classes.
    Literal(Cow<'a, str>),
    /// Class text applied only when the condition holds.
    Conditional(bool, Cow<'a, str>),
}

impl<'a> ClassFragment<'a> {
    /// Creates an always-applied fragment.
    pub fn literal(classes: impl Into<Cow<'a, str>>) -> Self {
        Self::Literal(classes.into())
    }

    /// Creates a fragment gated by `condition`.
    pub fn when(condition: bool, classes: impl Into<Cow<'a, str>>) -> Self {
        Self::Conditional(condition, classes.into())
    }

    /// Returns the fragment text when it contributes to the class list.
    pub fn included(&self) -> Option<&str> {
        match self {
            Self::Literal(classes) => Some(classes.as_ref()),
            Self::Conditional(true, classes) => Some(classes.as_ref()),
            Self::Conditional(false, _) => None,
        }
    }
}

impl<'a> From<&'a str> for ClassFragment<'a> {
    fn from(classes: &'a str) -> Self {
        Self::Literal(Cow::Borrowed(classes))
    }
}

impl From<String> for ClassFragment<'_> {
    fn from(classes: String) -> Self {
        Self::Literal(Cow::Owned(classes))
    }
}

impl<'a> From<&'a String> for ClassFragment<'a> {
    fn from(classes: &'a String) -> Self {
        Self::Literal(Cow::Borrowed(classes.as_str()))
    }
}

impl<'a> From<Option<&'a str>> for ClassFragment<'a> {
    fn from(classes: Option<&'a str>) -> Self {
        match classes {
            Some(classes) => Self::Literal(Cow::Borrowed(classes)),
            None => Self::Conditional(false, Cow::Borrowed("")),
        }
    }
}

impl<'a> From<(bool, &'a str)> for ClassFragment<'a> {
    fn from((condition, classes): (bool, &'a str)) -> Self {
        Self::Conditional(condition, Cow::Borrowed(classes))
    }
}

/// Flattens fragments into individual class tokens.
///
/// False conditionals are skipped and every included fragment is split on runs
/// of whitespace. Order is preserved and duplicates are kept; conflict
/// resolution happens later in [`crate::merge`].
pub fn normalize<'f>(fragments: &'f [ClassFragment<'_>]) -> Vec<&'f str> {
    fragments
        .iter()
        .filter_map(ClassFragment::included)
        .flat_map(str::split_whitespace)
        .collect()
}

/// Returns `classes` when `condition` holds, otherwise an empty string.
pub fn when(condition: bool, classes: &str) -> &str {
    if condition {
        classes
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn false_conditionals_are_omitted() {
        let fragments = [
            ClassFragment::from("rounded-md font-medium"),
            ClassFragment::when(false, "opacity-50 cursor-not-allowed"),
            ClassFragment::when(true, "w-full"),
        ];

        assert_eq!(normalize(&fragments), vec!["rounded-md", "font-medium", "w-full"]);
    }

    #[test]
    fn splits_on_whitespace_runs_and_keeps_duplicates() {
        let fragments = [
            ClassFragment::from("  px-4\t py-2\n"),
            ClassFragment::from("px-4   px-6"),
            ClassFragment::from(""),
        ];

        assert_eq!(normalize(&fragments), vec!["px-4", "py-2", "px-4", "px-6"]);
    }

    #[test]
    fn missing_override_contributes_nothing() {
        let fragments = [ClassFragment::from("flex"), ClassFragment::from(None)];
        assert_eq!(normalize(&fragments), vec!["flex"]);
    }

    #[test]
    fn owned_and_tuple_fragments_normalize_like_literals() {
        let fragments = [
            ClassFragment::from(String::from("text-sm")),
            ClassFragment::from((true, "mx-auto")),
            ClassFragment::from((false, "hidden")),
        ];
        assert_eq!(normalize(&fragments), vec!["text-sm", "mx-auto"]);
    }

    #[test]
    fn when_returns_empty_string_for_false_condition() {
        assert_eq!(when(true, "cursor-wait"), "cursor-wait");
        assert_eq!(when(false, "cursor-wait"), "");
    }
}
