//! Slot resolution.
//!
//! Resolution turns a slot default plus an optional [`Override`] into the
//! final renderable and prop map. Props layer in a fixed order: the
//! slot's base props first, then the descriptor's props, then the
//! resolved style under [`STYLE_PROP`]. Later layers win per key.

use crate::props::{PropValue, Props};
use crate::renderable::Renderable;
use crate::style::{StyleContext, STYLE_PROP};
use crate::theme::Theme;

use super::descriptor::Override;

/// The outcome of resolving one slot.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolved {
    pub renderable: Renderable,
    pub props: Props,
}

impl Resolved {
    /// Splits into the renderable and its props.
    pub fn into_parts(self) -> (Renderable, Props) {
        (self.renderable, self.props)
    }
}

/// Resolves one slot against its override descriptor.
///
/// Absent and unrecognized descriptors leave the default untouched. A
/// bare replacement swaps the renderable and passes the base props
/// through. A record may swap the renderable, layer its props over the
/// base, and attach style; style functions see the theme and the props
/// merged so far.
///
/// # Example
///
/// ```rust
/// use standin::{resolve, Override, OverrideRecord, Props, Renderable, Theme};
///
/// let theme = Theme::default_light();
/// let base = Props::new().add("role", "dialog");
/// let descriptor: Override = OverrideRecord::new().prop("aria-label", "Settings").into();
///
/// let resolved = resolve(Renderable::element("div"), &descriptor, base, &theme);
/// assert_eq!(resolved.renderable, Renderable::element("div"));
/// assert_eq!(resolved.props.get_str("role"), Some("dialog"));
/// assert_eq!(resolved.props.get_str("aria-label"), Some("Settings"));
/// ```
pub fn resolve(default: Renderable, descriptor: &Override, base: Props, theme: &Theme) -> Resolved {
    match descriptor {
        Override::Inherit | Override::Unrecognized => Resolved {
            renderable: default,
            props: base,
        },
        Override::Replace(renderable) => Resolved {
            renderable: renderable.clone(),
            props: base,
        },
        Override::Custom(record) => {
            let renderable = record.component.clone().unwrap_or(default);
            let mut props = base.merge(record.props.clone());

            if let Some(style) = &record.style {
                let resolved = {
                    let ctx = StyleContext {
                        theme,
                        props: &props,
                    };
                    style.resolve(&ctx)
                };
                props.insert(STYLE_PROP, PropValue::Style(resolved));
            }

            Resolved { renderable, props }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overrides::descriptor::OverrideRecord;
    use crate::style::StyleMap;

    fn div() -> Renderable {
        Renderable::element("div")
    }

    #[test]
    fn test_absent_override_is_identity() {
        let theme = Theme::new();
        let base = Props::new().add("role", "dialog").add("tabindex", 0i64);

        let resolved = resolve(div(), &Override::Inherit, base.clone(), &theme);
        assert_eq!(resolved.renderable, div());
        assert_eq!(resolved.props, base);
    }

    #[test]
    fn test_unrecognized_resolves_like_absent() {
        let theme = Theme::new();
        let base = Props::new().add("role", "dialog");

        let resolved = resolve(div(), &Override::Unrecognized, base.clone(), &theme);
        assert_eq!(resolved.renderable, div());
        assert_eq!(resolved.props, base);
    }

    #[test]
    fn test_bare_replacement_swaps_renderable_keeps_props() {
        let theme = Theme::new();
        let base = Props::new().add("role", "dialog");
        let descriptor = Override::replace("CustomRoot");

        let resolved = resolve(div(), &descriptor, base.clone(), &theme);
        assert_eq!(resolved.renderable, Renderable::component("CustomRoot"));
        assert_eq!(resolved.props, base);
    }

    #[test]
    fn test_record_component_beats_default() {
        let theme = Theme::new();
        let descriptor: Override = OverrideRecord::new().component("aside").into();

        let resolved = resolve(div(), &descriptor, Props::new(), &theme);
        assert_eq!(resolved.renderable, Renderable::element("aside"));
    }

    #[test]
    fn test_disjoint_props_union() {
        let theme = Theme::new();
        let base = Props::new().add("role", "dialog");
        let descriptor: Override = OverrideRecord::new().prop("aria-label", "Settings").into();

        let resolved = resolve(div(), &descriptor, base, &theme);
        assert_eq!(resolved.props.get_str("role"), Some("dialog"));
        assert_eq!(resolved.props.get_str("aria-label"), Some("Settings"));
        assert_eq!(resolved.props.len(), 2);
    }

    #[test]
    fn test_overlapping_props_override_wins() {
        let theme = Theme::new();
        let base = Props::new().add("size", "small");
        let descriptor: Override = OverrideRecord::new().prop("size", "large").into();

        let resolved = resolve(div(), &descriptor, base, &theme);
        assert_eq!(resolved.props.get_str("size"), Some("large"));
        assert_eq!(resolved.props.len(), 1);
    }

    #[test]
    fn test_style_function_reads_theme() {
        let theme = Theme::new().add("accent", "red");
        let descriptor: Override = OverrideRecord::new()
            .style_with(|ctx| {
                StyleMap::new().set("color", ctx.theme.token("accent").unwrap_or("inherit"))
            })
            .into();

        let resolved = resolve(div(), &descriptor, Props::new(), &theme);
        let style = resolved.props.style().expect("style should be attached");
        assert_eq!(style.get("color"), Some(&"red".into()));
    }

    #[test]
    fn test_style_function_sees_merged_props() {
        let theme = Theme::new();
        let base = Props::new().add("$size", "small");
        let descriptor: Override = OverrideRecord::new()
            .prop("$size", "large")
            .style_with(|ctx| {
                let padding = match ctx.props.get_str("$size") {
                    Some("large") => "16px",
                    _ => "8px",
                };
                StyleMap::new().set("padding", padding)
            })
            .into();

        let resolved = resolve(div(), &descriptor, base, &theme);
        let style = resolved.props.style().unwrap();
        assert_eq!(style.get("padding"), Some(&"16px".into()));
    }

    #[test]
    fn test_literal_style_attached_under_style_prop() {
        let theme = Theme::new();
        let descriptor: Override = OverrideRecord::new()
            .style(StyleMap::new().set("marginTop", 0))
            .into();

        let resolved = resolve(div(), &descriptor, Props::new(), &theme);
        assert!(resolved.props.contains(STYLE_PROP));
        assert_eq!(
            resolved.props.style().and_then(|s| s.get("marginTop")),
            Some(&0.into())
        );
    }

    #[test]
    fn test_override_style_replaces_base_style_prop() {
        let theme = Theme::new();
        let base = Props::new().add(STYLE_PROP, StyleMap::new().set("color", "blue"));
        let descriptor: Override = OverrideRecord::new()
            .style(StyleMap::new().set("padding", "8px"))
            .into();

        let resolved = resolve(div(), &descriptor, base, &theme);
        let style = resolved.props.style().unwrap();
        assert_eq!(style.get("padding"), Some(&"8px".into()));
        assert!(style.get("color").is_none());
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let theme = Theme::new();
        let base = Props::new().add("size", "small").add("role", "dialog");
        let descriptor: Override = OverrideRecord::new()
            .prop("size", "large")
            .style(StyleMap::new().set("padding", "8px"))
            .into();

        let first = resolve(div(), &descriptor, base, &theme);
        let second = resolve(div(), &descriptor, first.props.clone(), &theme);
        assert_eq!(first.props, second.props);
    }

    #[test]
    fn test_into_parts() {
        let theme = Theme::new();
        let resolved = resolve(div(), &Override::Inherit, Props::new().add("id", "x"), &theme);

        let (renderable, props) = resolved.into_parts();
        assert_eq!(renderable, div());
        assert_eq!(props.get_str("id"), Some("x"));
    }
}
