//! Shared class-resolution contract for every component.

use class_merge::ClassList;

/// Styling contract implemented by each component's resolved configuration.
///
/// Fragments are assembled in a fixed order, base, size, variant/color, state,
/// and finally the caller's override, then merged so that the last class for
/// each style property wins. Two equal configurations always resolve to the
/// same string.
pub trait ComponentStyle {
    /// Classes every instance carries.
    fn base(&self) -> &'static str;

    /// Size-keyed fragment.
    fn size(&self) -> Option<&'static str> {
        None
    }

    /// Variant and color fragments.
    fn variant(&self, _classes: &mut ClassList<'static>) {}

    /// Boolean-gated state fragments.
    fn state(&self, _classes: &mut ClassList<'static>) {}

    /// Caller-supplied classes applied last.
    fn class_override(&self) -> Option<&str>;

    /// Returns the ordered, unresolved fragment list.
    fn class_list(&self) -> ClassList<'_> {
        let mut classes = ClassList::new().with(self.base());
        classes.push(self.size());
        self.variant(&mut classes);
        self.state(&mut classes);
        // Stage hooks take `ClassList<'static>`; narrow it so the borrowed
        // override can join.
        let mut classes: ClassList<'_> = classes;
        classes.push(self.class_override());
        classes
    }

    /// Resolves the final `class` attribute value.
    fn classes(&self) -> String {
        self.class_list().resolve()
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    struct Probe {
        class: Option<String>,
    }

    impl ComponentStyle for Probe {
        fn base(&self) -> &'static str {
            "flex px-2"
        }

        fn size(&self) -> Option<&'static str> {
            Some("px-4 text-sm")
        }

        fn variant(&self, classes: &mut ClassList<'static>) {
            classes.push("bg-green-600 text-white");
        }

        fn state(&self, classes: &mut ClassList<'static>) {
            classes.push_if(true, "bg-neutral-200").push_if(false, "hidden");
        }

        fn class_override(&self) -> Option<&str> {
            self.class.as_deref()
        }
    }

    #[test]
    fn fragments_resolve_in_contract_order() {
        let probe = Probe { class: None };
        assert_eq!(probe.classes(), "flex px-4 text-sm bg-neutral-200 text-white");
    }

    #[test]
    fn override_wins_over_every_stage() {
        let probe = Probe {
            class: Some("px-10 bg-red-500 landing-glow".to_string()),
        };
        assert_eq!(
            probe.classes(),
            "flex px-10 text-sm bg-red-500 text-white landing-glow"
        );
    }

    #[test]
    fn bool_token_matches_dom_contract() {
        assert_eq!(bool_token(true), "true");
        assert_eq!(bool_token(false), "false");
    }
}
