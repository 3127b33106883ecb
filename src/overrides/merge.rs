//! Override composition.
//!
//! Overrides for the same slot arrive from more than one layer: library
//! defaults, app-wide configuration files, then per-call code. Layers
//! compose pairwise with the later one winning per field, so a config
//! file can restyle a slot and a call site can still swap its renderable
//! without losing that style.

use super::descriptor::{Override, OverrideRecord};

impl Override {
    /// Composes this override on top of `base`.
    ///
    /// Inherit (and unrecognized) layers pass the other side through
    /// unchanged. When both sides are active, the renderable comes from
    /// this side if it names one, props merge with this side winning,
    /// and styles compose with [`crate::StyleOverride::merged_over`].
    pub fn merged_over(self, base: Override) -> Override {
        if base.is_inherit() {
            return self;
        }
        if self.is_inherit() {
            return base;
        }

        let base = base.into_record();
        let over = self.into_record();

        let style = match (base.style, over.style) {
            (None, style) | (style, None) => style,
            (Some(under), Some(over)) => Some(over.merged_over(under)),
        };

        Override::Custom(OverrideRecord {
            component: over.component.or(base.component),
            props: base.props.merge(over.props),
            style,
        })
    }

    /// Normalizes an active override to record form.
    fn into_record(self) -> OverrideRecord {
        match self {
            Override::Inherit | Override::Unrecognized => OverrideRecord::default(),
            Override::Replace(renderable) => OverrideRecord {
                component: Some(renderable),
                ..OverrideRecord::default()
            },
            Override::Custom(record) => record,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::Props;
    use crate::style::{StyleContext, StyleMap, StyleOverride};
    use crate::theme::Theme;

    fn record_props(over: &Override) -> &Props {
        match over {
            Override::Custom(record) => &record.props,
            other => panic!("expected Custom, got {:?}", other),
        }
    }

    #[test]
    fn test_inherit_passes_base_through() {
        let base = Override::replace("CustomRoot");
        let merged = Override::Inherit.merged_over(base);
        assert!(matches!(merged, Override::Replace(_)));
    }

    #[test]
    fn test_base_inherit_keeps_over_unchanged() {
        let over = Override::replace("CustomRoot");
        let merged = over.merged_over(Override::Inherit);
        assert!(matches!(merged, Override::Replace(_)));
    }

    #[test]
    fn test_unrecognized_behaves_like_inherit() {
        let over = Override::from(OverrideRecord::new().prop("id", "x"));
        let merged = over.clone().merged_over(Override::Unrecognized);
        assert_eq!(record_props(&merged).get_str("id"), Some("x"));

        let merged = Override::Unrecognized.merged_over(over);
        assert_eq!(record_props(&merged).get_str("id"), Some("x"));
    }

    #[test]
    fn test_replace_over_custom_keeps_base_props() {
        let base = Override::from(OverrideRecord::new().prop("role", "dialog"));
        let merged = Override::replace("FancyRoot").merged_over(base);

        match &merged {
            Override::Custom(record) => {
                assert_eq!(record.component.as_ref().map(|r| r.name()), Some("FancyRoot"));
                assert_eq!(record.props.get_str("role"), Some("dialog"));
            }
            other => panic!("expected Custom, got {:?}", other),
        }
    }

    #[test]
    fn test_custom_over_replace_keeps_base_component() {
        let base = Override::replace("FancyRoot");
        let over = Override::from(OverrideRecord::new().prop("role", "dialog"));
        let merged = over.merged_over(base);

        match &merged {
            Override::Custom(record) => {
                assert_eq!(record.component.as_ref().map(|r| r.name()), Some("FancyRoot"));
                assert_eq!(record.props.get_str("role"), Some("dialog"));
            }
            other => panic!("expected Custom, got {:?}", other),
        }
    }

    #[test]
    fn test_over_component_wins() {
        let base = Override::replace("BaseRoot");
        let over = Override::replace("TopRoot");
        let merged = over.merged_over(base);

        match &merged {
            Override::Custom(record) => {
                assert_eq!(record.component.as_ref().map(|r| r.name()), Some("TopRoot"));
            }
            other => panic!("expected Custom, got {:?}", other),
        }
    }

    #[test]
    fn test_props_collision_over_wins() {
        let base = Override::from(OverrideRecord::new().prop("size", "small").prop("id", "a"));
        let over = Override::from(OverrideRecord::new().prop("size", "large"));
        let merged = over.merged_over(base);

        let props = record_props(&merged);
        assert_eq!(props.get_str("size"), Some("large"));
        assert_eq!(props.get_str("id"), Some("a"));
    }

    #[test]
    fn test_style_literals_merge_eagerly() {
        let base = Override::from(
            OverrideRecord::new().style(StyleMap::new().set("color", "blue").set("margin", 8)),
        );
        let over = Override::from(OverrideRecord::new().style(StyleMap::new().set("color", "red")));
        let merged = over.merged_over(base);

        match &merged {
            Override::Custom(record) => match &record.style {
                Some(StyleOverride::Literal(style)) => {
                    assert_eq!(style.get("color"), Some(&"red".into()));
                    assert_eq!(style.get("margin"), Some(&8.into()));
                }
                other => panic!("expected literal style, got {:?}", other),
            },
            other => panic!("expected Custom, got {:?}", other),
        }
    }

    #[test]
    fn test_style_functions_compose_lazily() {
        let theme = Theme::new().add("accent", "red");
        let props = Props::new();
        let ctx = StyleContext {
            theme: &theme,
            props: &props,
        };

        let base = Override::from(OverrideRecord::new().style_with(|ctx| {
            StyleMap::new().set("color", ctx.theme.token("accent").unwrap_or("inherit"))
        }));
        let over =
            Override::from(OverrideRecord::new().style(StyleMap::new().set("fontWeight", "bold")));
        let merged = over.merged_over(base);

        match &merged {
            Override::Custom(record) => {
                let style = record.style.as_ref().unwrap().resolve(&ctx);
                assert_eq!(style.get("color"), Some(&"red".into()));
                assert_eq!(style.get("fontWeight"), Some(&"bold".into()));
            }
            other => panic!("expected Custom, got {:?}", other),
        }
    }

    #[test]
    fn test_one_sided_style_survives() {
        let base =
            Override::from(OverrideRecord::new().style(StyleMap::new().set("color", "blue")));
        let over = Override::from(OverrideRecord::new().prop("id", "x"));
        let merged = over.merged_over(base);

        match &merged {
            Override::Custom(record) => assert!(record.style.is_some()),
            other => panic!("expected Custom, got {:?}", other),
        }
    }
}
