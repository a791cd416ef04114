//! Breakpoint prefixing for responsive class values.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Responsive breakpoints understood by the utility stylesheet.
pub enum Breakpoint {
    /// Unprefixed, applies at every width.
    Base,
    /// `sm:` (640px and up).
    Sm,
    /// `md:` (768px and up).
    Md,
    /// `lg:` (1024px and up).
    Lg,
    /// `xl:` (1280px and up).
    Xl,
    /// `2xl:` (1536px and up).
    Xxl,
}

impl Breakpoint {
    /// Returns the modifier name, or `None` for [`Breakpoint::Base`].
    pub fn modifier(self) -> Option<&'static str> {
        match self {
            Self::Base => None,
            Self::Sm => Some("sm"),
            Self::Md => Some("md"),
            Self::Lg => Some("lg"),
            Self::Xl => Some("xl"),
            Self::Xxl => Some("2xl"),
        }
    }
}

/// Builds a class string with each value prefixed by its breakpoint modifier.
///
/// Every whitespace-separated class in a value receives the prefix, so
/// `(Md, "grid-cols-2 gap-8")` becomes `md:grid-cols-2 md:gap-8`.
pub fn responsive(values: &[(Breakpoint, &str)]) -> String {
    let mut classes = Vec::new();
    for (breakpoint, value) in values {
        for class in value.split_whitespace() {
            match breakpoint.modifier() {
                Some(prefix) => classes.push(format!("{prefix}:{class}")),
                None => classes.push(class.to_string()),
            }
        }
    }
    classes.join(" ")
}
