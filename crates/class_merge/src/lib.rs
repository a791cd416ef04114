//! Utility-class composition engine shared by every `system_ui` component.
//!
//! Components describe their styling as an ordered list of [`ClassFragment`]s
//! (base classes, size and variant lookups, boolean-gated state classes, and the
//! caller's override). [`normalize`] flattens that list into individual tokens,
//! and [`merge`] resolves conflicts so that for each underlying style property
//! only the last specified utility survives. Unknown class names are never
//! dropped; they pass through once, in their original position.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod class_list;
mod fragment;
mod groups;
mod merge;
mod responsive;
mod token;

pub use class_list::{compose_classes, ClassList};
pub use fragment::{normalize, when, ClassFragment};
pub use groups::{classify, PropertyGroup};
pub use merge::{merge, merge_classes};
pub use responsive::{responsive, Breakpoint};
pub use token::{ClassToken, GroupId};

/// Convenience imports for component crates.
pub mod prelude {
    pub use crate::{
        compose_classes, merge, merge_classes, normalize, responsive, when, Breakpoint,
        ClassFragment, ClassList,
    };
}
