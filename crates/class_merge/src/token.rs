//! Parsing of a single class token into modifiers, flags, and base utility.

use crate::groups::{classify, PropertyGroup};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Identity of the style property a token controls.
pub enum GroupId<'a> {
    /// A utility recognized by the rule table.
    Property(PropertyGroup),
    /// An arbitrary property utility such as `[mask-type:alpha]`, keyed by property name.
    ArbitraryProperty(&'a str),
}

/// One atomic class name, split into its variant modifiers and base utility.
///
/// `md:hover:!-mt-2` parses into modifiers `["md", "hover"]`, the important
/// flag, the negative flag, and the utility `mt-2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassToken<'a> {
    raw: &'a str,
    modifiers: Vec<&'a str>,
    important: bool,
    negative: bool,
    utility: &'a str,
}

impl<'a> ClassToken<'a> {
    /// Parses a single whitespace-free class token.
    pub fn parse(raw: &'a str) -> Self {
        let mut modifiers = Vec::new();
        let mut depth = 0usize;
        let mut segment_start = 0usize;
        for (index, byte) in raw.bytes().enumerate() {
            match byte {
                b'[' | b'(' => depth += 1,
                b']' | b')' => depth = depth.saturating_sub(1),
                b':' if depth == 0 => {
                    modifiers.push(&raw[segment_start..index]);
                    segment_start = index + 1;
                }
                _ => {}
            }
        }

        let mut utility = &raw[segment_start..];
        let mut important = false;
        if let Some(rest) = utility.strip_prefix('!') {
            utility = rest;
            important = true;
        }
        if let Some(rest) = utility.strip_suffix('!') {
            utility = rest;
            important = true;
        }
        let mut negative = false;
        if let Some(rest) = utility.strip_prefix('-') {
            if !rest.is_empty() {
                utility = rest;
                negative = true;
            }
        }

        Self {
            raw,
            modifiers,
            important,
            negative,
            utility,
        }
    }

    /// Returns the original token text.
    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    /// Returns the variant modifiers in written order.
    pub fn modifiers(&self) -> &[&'a str] {
        &self.modifiers
    }

    /// Returns the base utility without modifiers, `!`, or leading `-`.
    pub fn utility(&self) -> &'a str {
        self.utility
    }

    /// Returns whether the token carries the important marker.
    pub fn is_important(&self) -> bool {
        self.important
    }

    /// Returns whether the utility was written with a leading `-`.
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Returns the property group this token controls, if recognized.
    pub fn group(&self) -> Option<GroupId<'a>> {
        if let Some(inner) = self
            .utility
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
        {
            return inner
                .split_once(':')
                .filter(|(property, value)| is_property_name(property) && !value.is_empty())
                .map(|(property, _)| GroupId::ArbitraryProperty(property));
        }
        classify(self.utility).map(GroupId::Property)
    }

    /// Returns the modifier context used to scope conflicts.
    ///
    /// Runs of plain modifiers are sorted so `hover:focus:` and `focus:hover:`
    /// share a context. Arbitrary modifiers (`[&>*]`) keep their position since
    /// their order changes the generated selector.
    pub fn context(&self) -> String {
        let mut ordered: Vec<&str> = Vec::with_capacity(self.modifiers.len());
        let mut run: Vec<&str> = Vec::new();
        for modifier in &self.modifiers {
            if modifier.starts_with('[') {
                run.sort_unstable();
                ordered.append(&mut run);
                ordered.push(modifier);
            } else {
                run.push(modifier);
            }
        }
        run.sort_unstable();
        ordered.append(&mut run);
        ordered.join(":")
    }
}

fn is_property_name(raw: &str) -> bool {
    !raw.is_empty()
        && raw
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_modifiers_flags_and_utility() {
        let token = ClassToken::parse("md:hover:!-mt-2");
        assert_eq!(token.modifiers(), &["md", "hover"]);
        assert!(token.is_important());
        assert!(token.is_negative());
        assert_eq!(token.utility(), "mt-2");
        assert_eq!(token.as_str(), "md:hover:!-mt-2");
    }

    #[test]
    fn colons_inside_brackets_do_not_split_modifiers() {
        let token = ClassToken::parse("[&>*:hover]:bg-[url(a:b)]");
        assert_eq!(token.modifiers(), &["[&>*:hover]"]);
        assert_eq!(token.utility(), "bg-[url(a:b)]");
    }

    #[test]
    fn context_sorts_plain_modifiers() {
        assert_eq!(ClassToken::parse("hover:focus:p-2").context(), "focus:hover");
        assert_eq!(ClassToken::parse("focus:hover:p-2").context(), "focus:hover");
        assert_eq!(ClassToken::parse("md:[&>p]:hover:p-2").context(), "md:[&>p]:hover");
        assert_eq!(ClassToken::parse("p-2").context(), "");
    }

    #[test]
    fn arbitrary_property_groups_by_property_name() {
        assert_eq!(
            ClassToken::parse("[mask-type:alpha]").group(),
            Some(GroupId::ArbitraryProperty("mask-type"))
        );
        assert_eq!(ClassToken::parse("[not-a-property]").group(), None);
    }

    #[test]
    fn lone_dash_is_not_treated_as_negative() {
        let token = ClassToken::parse("-");
        assert!(!token.is_negative());
        assert_eq!(token.utility(), "-");
        assert_eq!(token.group(), None);
    }
}
