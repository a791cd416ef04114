//! Ordered class-list builder used by component style contracts.

use std::borrow::Cow;

use crate::fragment::{normalize, ClassFragment};
use crate::merge::merge;

/// Ordered list of class fragments resolved into one conflict-free class string.
///
/// Fragments are resolved in push order, so whatever is pushed last wins a
/// conflict. Components push base classes first and the caller's override last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList<'a> {
    fragments: Vec<ClassFragment<'a>>,
}

impl<'a> ClassList<'a> {
    /// Creates an empty class list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a fragment and returns the list for chaining.
    pub fn with(mut self, fragment: impl Into<ClassFragment<'a>>) -> Self {
        self.push(fragment);
        self
    }

    /// Appends a fragment gated by `condition` and returns the list for chaining.
    pub fn with_if(mut self, condition: bool, classes: impl Into<Cow<'a, str>>) -> Self {
        self.push_if(condition, classes);
        self
    }

    /// Appends a fragment.
    pub fn push(&mut self, fragment: impl Into<ClassFragment<'a>>) -> &mut Self {
        self.fragments.push(fragment.into());
        self
    }

    /// Appends a fragment gated by `condition`.
    pub fn push_if(&mut self, condition: bool, classes: impl Into<Cow<'a, str>>) -> &mut Self {
        self.fragments
            .push(ClassFragment::Conditional(condition, classes.into()));
        self
    }

    /// Returns the fragments in push order.
    pub fn fragments(&self) -> &[ClassFragment<'a>] {
        &self.fragments
    }

    /// Returns the normalized token sequence before conflict resolution.
    pub fn tokens(&self) -> Vec<&str> {
        normalize(&self.fragments)
    }

    /// Normalizes and merges the list into the final class attribute value.
    pub fn resolve(&self) -> String {
        merge(self.tokens())
    }
}

impl<'a, F: Into<ClassFragment<'a>>> Extend<F> for ClassList<'a> {
    fn extend<T: IntoIterator<Item = F>>(&mut self, iter: T) {
        self.fragments.extend(iter.into_iter().map(Into::into));
    }
}

impl<'a, F: Into<ClassFragment<'a>>> FromIterator<F> for ClassList<'a> {
    fn from_iter<T: IntoIterator<Item = F>>(iter: T) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

/// Normalizes and merges fragments in one call.
pub fn compose_classes<'a, I, F>(fragments: I) -> String
where
    I: IntoIterator<Item = F>,
    F: Into<ClassFragment<'a>>,
{
    fragments.into_iter().collect::<ClassList<'a>>().resolve()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn override_pushed_last_wins() {
        let resolved = ClassList::new()
            .with("inline-flex rounded-md")
            .with("px-4 py-2")
            .with("bg-green-600 text-white")
            .with_if(false, "opacity-50")
            .with(Some("bg-neutral-900 px-8"))
            .resolve();

        assert_eq!(resolved, "inline-flex rounded-md px-8 py-2 bg-neutral-900 text-white");
    }

    #[test]
    fn tokens_expose_the_unmerged_sequence() {
        let list = ClassList::new().with("p-2 p-4").with_if(true, "p-2");
        assert_eq!(list.tokens(), vec!["p-2", "p-4", "p-2"]);
        assert_eq!(list.fragments().len(), 2);
    }

    #[test]
    fn compose_accepts_mixed_fragment_sources() {
        let override_class = String::from("w-auto");
        assert_eq!(
            compose_classes([
                ClassFragment::from("w-full"),
                ClassFragment::when(true, "mx-auto"),
                ClassFragment::from(&override_class),
            ]),
            "w-auto mx-auto"
        );
    }
}
