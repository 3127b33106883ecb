use standin::{
    palette, resolve, BottomSheet, BottomSheetOverrides, Override, OverrideRecord, PropValue,
    Props, Renderable, SheetPosition, StyleMap, Tag, TagOverrides, Theme,
};

#[test]
fn test_yaml_overrides_drive_a_mount() {
    let overrides: BottomSheetOverrides = serde_yaml::from_str(
        r#"
Grabber: ThickGrabber
Title:
  props:
    $level: 2
Content:
  style:
    paddingTop: 16px
"#,
    )
    .unwrap();

    let tree = BottomSheet::new()
        .title("Trip details")
        .content("Pickup at 5th and Main")
        .positions([SheetPosition::Collapsed, SheetPosition::Half])
        .overrides(overrides)
        .mount(&Theme::default_light());

    // The grabber slot was swapped wholesale.
    assert!(tree.find("Grabber").is_none());
    assert!(tree.find("ThickGrabber").is_some());

    // The title slot kept its name and text but gained a prop.
    let title = tree.find("Title").unwrap();
    assert_eq!(title.text_content(), "Trip details");
    assert_eq!(
        title.props().get("$level").and_then(PropValue::as_f64),
        Some(2.0)
    );

    // The content slot carries the literal style under $style.
    let content = tree.find("Content").unwrap();
    let style = content.props().style().unwrap();
    assert_eq!(
        style.get("paddingTop").and_then(|v| v.as_str()),
        Some("16px")
    );
}

#[test]
fn test_deployment_layer_merges_over_base_config() {
    let base: TagOverrides = serde_json::from_str(
        r#"{
            "Root": { "props": { "data-testid": "tag" } },
            "ActionIcon": "XSmallIcon"
        }"#,
    )
    .unwrap();
    let deployment: TagOverrides = serde_yaml::from_str(
        r#"
Root:
  props:
    $size: small
  style:
    borderRadius: 8px
"#,
    )
    .unwrap();

    let tree = Tag::new("Beta")
        .closeable(true)
        .overrides(deployment.merged_over(base))
        .mount(&Theme::default_light());

    let root = tree.find("Root").unwrap();
    assert_eq!(root.props().get_str("data-testid"), Some("tag"));
    assert_eq!(root.props().get_str("$size"), Some("small"));
    assert!(root.props().style().is_some());
    assert!(tree.find("XSmallIcon").is_some());
}

#[test]
fn test_unrecognized_override_shapes_fall_back_to_defaults() {
    let overrides: TagOverrides = serde_yaml::from_str(
        r#"
Root: 12
Text:
  - not
  - an
  - override
"#,
    )
    .unwrap();

    let tree = Tag::new("Beta").overrides(overrides).mount(&Theme::default_light());

    assert!(tree.find("Root").is_some());
    assert_eq!(tree.find("Text").unwrap().text_content(), "Beta");
}

#[test]
fn test_unknown_slot_names_are_ignored() {
    let overrides: BottomSheetOverrides = serde_json::from_str(
        r#"{ "Titel": "Oops", "Title": { "props": { "$level": 3 } } }"#,
    )
    .unwrap();

    let tree = BottomSheet::new()
        .title("Receipt")
        .overrides(overrides)
        .mount(&Theme::default_light());

    assert!(tree.find("Oops").is_none());
    assert!(tree.find("Title").unwrap().props().contains("$level"));
}

#[test]
fn test_layered_style_function_sees_merged_props_and_theme() {
    let base = Override::from(OverrideRecord::new().prop("$tone", "warning"));
    let deployment = Override::from(OverrideRecord::new().style_with(|ctx| {
        let token = match ctx.props.get_str("$tone") {
            Some("warning") => "contentWarning",
            Some("negative") => "contentNegative",
            _ => "contentPrimary",
        };
        StyleMap::new().set("color", ctx.theme.token(token).unwrap_or(palette::BLACK))
    }));

    let resolved = resolve(
        Renderable::component("Hint"),
        &deployment.merged_over(base),
        Props::new(),
        &Theme::default_light(),
    );

    assert_eq!(resolved.props.get_str("$tone"), Some("warning"));
    let style = resolved.props.style().unwrap();
    assert_eq!(
        style.get("color").and_then(|v| v.as_str()),
        Some(palette::YELLOW_600)
    );
}
