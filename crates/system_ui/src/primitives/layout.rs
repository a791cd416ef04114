use super::*;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Resolved page-container configuration.
pub struct ContainerStyle {
    /// Maximum content width.
    pub max_width: ContainerWidth,
    /// Horizontal padding step.
    pub padding: Size,
    /// Center horizontally with auto margins.
    pub center: bool,
    /// Caller override classes.
    pub class: Option<String>,
}

impl Default for ContainerStyle {
    fn default() -> Self {
        Self {
            max_width: ContainerWidth::default(),
            padding: Size::default(),
            center: true,
            class: None,
        }
    }
}

impl ComponentStyle for ContainerStyle {
    fn base(&self) -> &'static str {
        "w-full"
    }

    fn size(&self) -> Option<&'static str> {
        Some(tables::container_padding(self.padding))
    }

    fn variant(&self, classes: &mut ClassList<'static>) {
        classes.push(tables::container_max_width(self.max_width));
    }

    fn state(&self, classes: &mut ClassList<'static>) {
        classes.push_if(self.center, "mx-auto");
    }

    fn class_override(&self) -> Option<&str> {
        self.class.as_deref()
    }
}

#[component]
/// Width-constrained page section wrapper.
pub fn Container(
    #[prop(optional)] max_width: ContainerWidth,
    #[prop(optional)] padding: Size,
    #[prop(default = true)] center: bool,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] data_testid: Option<String>,
    children: Children,
) -> impl IntoView {
    let classes = ContainerStyle {
        max_width,
        padding,
        center,
        class,
    }
    .classes();

    view! {
        <div
            class=classes
            data-testid=data_testid
            data-ui-kind="container"
            data-ui-width=max_width.token()
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_container_is_centered_xl() {
        assert_eq!(ContainerStyle::default().classes(), "w-full px-6 max-w-xl mx-auto");
    }

    #[test]
    fn page_override_widens_container() {
        let classes = ContainerStyle {
            padding: Size::Lg,
            center: false,
            class: Some("max-w-7xl px-4 sm:px-6 lg:px-8".to_string()),
            ..ContainerStyle::default()
        }
        .classes();
        assert_eq!(classes, "w-full px-4 max-w-7xl sm:px-6 lg:px-8");
    }
}
