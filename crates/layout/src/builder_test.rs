use crate::test_utils::{contents, fixed_height_builder, mm, text};
use crate::{
    ElementRenderer, LayoutConfig, LayoutError, PageBuilder, RenderContext, RenderOutcome,
};
use pagebuilder_markup::MarkupNode;
use pagebuilder_style::{AttributeScales, FontWeight, StyleKey, StyleValue};
use pagebuilder_traits::{
    Collaborators, DrawOp, InMemoryImageProvider, PrintableValidator, RecordingSurface,
};
use pagebuilder_types::{Rect, Size};
use serde_json::{Value, json};
use std::sync::Arc;

#[test]
fn test_container_spacing_places_second_child_below_first() {
    let mut builder = fixed_height_builder(20.0);
    let map = MarkupNode::new("Container")
        .with_attr("Y", "10")
        .with_attr("YSpacing", "5")
        .with_child(text("first"))
        .with_child(text("second"));

    let items = builder.layout(&map, &json!({})).unwrap();
    assert_eq!(items.len(), 2);
    let base = mm(10.0);
    assert_eq!(items[0].container_rect().y, base);
    assert_eq!(items[0].container_rect().height, 20.0);
    assert_eq!(items[1].container_rect().y, base + (20.0 + mm(5.0) + 0.0));
}

#[test]
fn test_explicit_height_and_increment_drive_usage() {
    let mut builder = fixed_height_builder(20.0);
    let map = MarkupNode::new("StackPanel")
        .with_attr("YIncrement", "2")
        .with_child(text("a").with_attr("Height", "8"))
        .with_child(text("b"))
        .with_child(text("c"));

    let items = builder.layout(&map, &json!({})).unwrap();
    let first_step = mm(8.0) + 0.0 + mm(2.0);
    let second_step = 20.0 + 0.0 + mm(2.0);
    assert_eq!(items[0].container_rect().y, 0.0);
    assert_eq!(items[1].container_rect().y, 0.0 + first_step);
    assert_eq!(items[2].container_rect().y, 0.0 + (first_step + second_step));
}

#[test]
fn test_child_offsets_are_relative_to_the_flow() {
    let mut builder = fixed_height_builder(10.0);
    let map = MarkupNode::new("Container")
        .with_attr("X", "20")
        .with_attr("Width", "100")
        .with_child(text("a").with_attr("X", "5").with_attr("Y", "1"));

    let items = builder.layout(&map, &json!({})).unwrap();
    let rect = items[0].container_rect();
    assert_eq!(rect.x, mm(20.0) + mm(5.0));
    assert_eq!(rect.y, 0.0 + mm(1.0));
    assert_eq!(rect.width, (mm(20.0) + mm(100.0) - rect.x).max(0.0));
}

#[test]
fn test_nested_container_contributes_its_usage() {
    let mut builder = fixed_height_builder(10.0);
    let inner = MarkupNode::new("Container")
        .with_child(text("a"))
        .with_child(text("b"));
    let fixed = MarkupNode::new("Container")
        .with_attr("Height", "50")
        .with_child(text("c"));
    let map = MarkupNode::new("Container")
        .with_child(inner)
        .with_child(fixed)
        .with_child(text("d"));

    let items = builder.layout(&map, &json!({})).unwrap();
    assert_eq!(contents(&items), vec!["a", "b", "c", "d"]);
    assert_eq!(items[1].container_rect().y, 10.0);
    assert_eq!(items[2].container_rect().y, 20.0);
    assert_eq!(items[3].container_rect().y, 20.0 + mm(50.0));
}

#[test]
fn test_nested_container_does_not_repeat_cascaded_spacing() {
    let mut builder = fixed_height_builder(20.0);
    let map = MarkupNode::new("Container")
        .with_attr("YSpacing", "5")
        .with_child(MarkupNode::new("Container").with_child(text("inner")))
        .with_child(text("after"));

    let items = builder.layout(&map, &json!({})).unwrap();
    assert_eq!(contents(&items), vec!["inner", "after"]);
    assert_eq!(items[0].container_rect().y, 0.0);
    assert!((items[1].container_rect().y - (20.0 + mm(5.0))).abs() < 1e-3);
}

#[test]
fn test_font_size_override_leaves_parent_cascade_untouched() {
    let mut builder = PageBuilder::default();
    builder.push("FontSize", "12").unwrap();
    let map = MarkupNode::new("Group")
        .with_child(text("small").with_attr("FontSize", "10"))
        .with_child(text("inherited"));

    let items = builder.layout(&map, &json!({})).unwrap();
    assert_eq!(items[0].as_text().unwrap().style().font_size, mm(10.0));
    assert_eq!(items[1].as_text().unwrap().style().font_size, mm(12.0));
    assert_eq!(builder.cascade().depth(StyleKey::FontSize), 1);
    assert_eq!(
        builder.cascade().peek(StyleKey::FontSize),
        Some(&StyleValue::Length(mm(12.0)))
    );
}

#[test]
fn test_font_size_is_millimetres_times_scale() {
    let config = LayoutConfig {
        scales: AttributeScales {
            font_size: 0.5,
            ..AttributeScales::default()
        },
        ..LayoutConfig::default()
    };
    let mut builder = PageBuilder::new(config, Collaborators::default());
    let map = MarkupNode::new("Group")
        .with_child(text("map units").with_attr("FontSize", "10"))
        .with_child(text("points").with_attr("FontSize", "10pt"));

    let items = builder.layout(&map, &json!({})).unwrap();
    assert_eq!(items[0].as_text().unwrap().style().font_size, mm(10.0) * 0.5);
    assert_eq!(items[1].as_text().unwrap().style().font_size, 5.0);
}

#[test]
fn test_cascade_depth_restored_after_walk() {
    let mut builder = PageBuilder::default();
    let map = MarkupNode::new("Style")
        .with_attr("FontWeight", "Bold")
        .with_attr("Foreground", "blue")
        .with_child(
            MarkupNode::new("Container")
                .with_attr("FontSize", "9")
                .with_attr("YSpacing", "1")
                .with_child(MarkupNode::new("Group").with_attr("FontStyle", "Italic"))
                .with_child(text("deep")),
        );

    let before = builder.cascade().total_depth();
    let items = builder.layout(&map, &json!({})).unwrap();
    assert_eq!(builder.cascade().total_depth(), before);
    let style = items[0].as_text().unwrap().style();
    assert_eq!(style.font_weight, FontWeight::Bold);
    assert_eq!(style.font_size, mm(9.0));
}

#[test]
fn test_unknown_tags_pass_through() {
    let mut builder = PageBuilder::default();
    let map = MarkupNode::new("Page")
        .with_attr("FontSize", "30")
        .with_child(MarkupNode::new("Section").with_child(text("inside")));

    let items = builder.layout(&map, &json!({})).unwrap();
    assert_eq!(contents(&items), vec!["inside"]);
    // Unknown tags do not cascade.
    assert_eq!(items[0].as_text().unwrap().style().font_size, 12.0);
}

#[test]
fn test_property_binding_with_format() {
    let mut builder = PageBuilder::default();
    let data = json!({ "order": { "total": 1234.5, "code": "A-7" } });
    let map = MarkupNode::new("Group")
        .with_child(
            MarkupNode::new("Property")
                .with_attr("Property", "order.total")
                .with_attr("Format", "#,##0.00"),
        )
        .with_child(MarkupNode::new("Property").with_attr("Path", "order.code"))
        .with_child(MarkupNode::new("Property").with_attr("Property", "order.total"))
        .with_child(
            MarkupNode::new("Property")
                .with_attr("Property", "order.total")
                .with_attr("Format", "0;0;0;0"),
        );

    let items = builder.layout(&map, &data).unwrap();
    assert_eq!(contents(&items), vec!["1,234.50", "A-7", "1,234.5", "1,234.5"]);
}

#[test]
fn test_missing_binding_yields_empty_item() {
    let mut builder = PageBuilder::default();
    let map = MarkupNode::new("Text").with_attr("Property", "nope");
    let items = builder.layout(&map, &json!({})).unwrap();
    assert_eq!(contents(&items), vec![""]);
}

#[test]
fn test_cascaded_property_binds_empty_text() {
    let mut builder = PageBuilder::default();
    let map = MarkupNode::new("Group")
        .with_attr("Property", "name")
        .with_child(MarkupNode::new("Text"))
        .with_child(text("literal"));
    let items = builder.layout(&map, &json!({ "name": "Ada" })).unwrap();
    assert_eq!(contents(&items), vec!["Ada", "literal"]);
}

#[test]
fn test_date_format() {
    let mut builder = PageBuilder::default();
    let map = MarkupNode::new("Property")
        .with_attr("Property", "due")
        .with_attr("DateFormat", "%d.%m.%Y");
    let items = builder.layout(&map, &json!({ "due": "2025-01-31" })).unwrap();
    assert_eq!(contents(&items), vec!["31.01.2025"]);

    let configured = MarkupNode::new("Property")
        .with_attr("Property", "due")
        .with_attr("DateFormat", "");
    let items = builder.layout(&configured, &json!({ "due": "2025-01-31T10:00:00" })).unwrap();
    assert_eq!(contents(&items), vec!["2025-01-31"]);
}

#[test]
fn test_trim_attribute() {
    let mut builder = PageBuilder::default();
    let map = MarkupNode::new("Group")
        .with_child(text("\n  padded  \n"))
        .with_child(text("  kept ").with_attr("Trim", "false"));
    let items = builder.layout(&map, &json!({})).unwrap();
    assert_eq!(contents(&items), vec!["padded", "  kept "]);
}

#[test]
fn test_validator_rejection_omits_item() {
    let collaborators = Collaborators::default().with_validator(Arc::new(PrintableValidator));
    let mut builder = PageBuilder::new(Default::default(), collaborators);
    let map = MarkupNode::new("Group")
        .with_child(MarkupNode::new("Property").with_attr("Property", "bad"))
        .with_child(MarkupNode::new("Property").with_attr("Property", "good"));
    let data = json!({ "bad": "ring\u{7}", "good": "fine" });
    let items = builder.layout(&map, &data).unwrap();
    assert_eq!(contents(&items), vec!["fine"]);
}

#[test]
fn test_constants_supply_text_and_style_fallback() {
    let mut builder = PageBuilder::default();
    let map = MarkupNode::new("Page")
        .with_child(
            MarkupNode::new("Constants")
                .with_child(MarkupNode::new("Title").with_text(" Invoice "))
                .with_child(MarkupNode::new("FontSize").with_attr("Value", "9")),
        )
        .with_child(MarkupNode::new("Text").with_attr("Constant", "Title"))
        .with_child(
            MarkupNode::new("Group")
                .with_attr("FontSize", "14")
                .with_child(text("cascaded")),
        );

    let items = builder.layout(&map, &json!({})).unwrap();
    assert_eq!(contents(&items), vec!["Invoice", "cascaded"]);
    assert_eq!(items[0].as_text().unwrap().style().font_size, mm(9.0));
    // An active cascade beats a constant of the same name.
    assert_eq!(items[1].as_text().unwrap().style().font_size, mm(14.0));
}

#[test]
fn test_load_registers_constants_without_items() {
    let mut builder = PageBuilder::default();
    let map = MarkupNode::new("Page")
        .with_child(text("ignored"))
        .with_child(
            MarkupNode::new("Container").with_child(
                MarkupNode::new("Constants")
                    .with_child(MarkupNode::new("Currency").with_text("EUR"))
                    .with_child(MarkupNode::new("Foreground").with_attr("Value", "#333333")),
            ),
        );

    let names = builder.load(&map);
    assert_eq!(names, vec!["Currency", "Foreground"]);
    assert!(builder.items().is_empty());
    assert_eq!(builder.constants().get("Currency"), Some("EUR"));
}

#[test]
fn test_layout_offset_shifts_absolute_items() {
    let mut builder = PageBuilder::default();
    builder.set_layout_offset(100.0);
    let map = text("shifted").with_attr("Y", "10").with_attr("Height", "5");
    let items = builder.layout(&map, &json!({})).unwrap();
    assert_eq!(items[0].container_rect().y, mm(10.0) + 100.0);
}

#[test]
fn test_auto_height_outside_flow_is_deferred() {
    let mut builder = fixed_height_builder(20.0);
    let map = text("later").with_attr("Y", "20");
    let items = builder.layout(&map, &json!({})).unwrap();
    let page_height = builder.config().page_size.height;
    assert!(items[0].needs_layout());
    assert_eq!(items[0].container_rect().height, page_height - mm(20.0));

    let mut surface = RecordingSurface::new();
    builder.draw(&mut surface);
    assert!(!builder.items()[0].needs_layout());
    assert_eq!(builder.items()[0].used_rect().height, 20.0);
}

#[test]
fn test_image_sizes_from_intrinsic_aspect() {
    let images = InMemoryImageProvider::new();
    images.add("logo", vec![0], Size::new(100.0, 50.0)).unwrap();
    let collaborators = Collaborators::default().with_images(Arc::new(images));
    let mut builder = PageBuilder::new(Default::default(), collaborators);
    let map = MarkupNode::new("Container")
        .with_child(MarkupNode::new("Image").with_attr("Source", "logo").with_attr("Width", "20"))
        .with_child(MarkupNode::new("Image").with_attr("Source", "missing"))
        .with_child(MarkupNode::new("Image").with_attr("Property", "picture"))
        .with_child(text("after"));

    let items = builder.layout(&map, &json!({ "picture": "logo" })).unwrap();
    assert_eq!(items.len(), 3);
    let first = items[0].container_rect();
    assert_eq!(first.width, mm(20.0));
    assert_eq!(first.height, mm(20.0) * 0.5);
    assert_eq!(items[1].as_image().unwrap().key(), "logo");
    assert_eq!(items[1].container_rect().y, first.height);
    assert_eq!(items[1].container_rect().size(), Size::new(100.0, 50.0));
}

#[test]
fn test_push_and_pop_by_name() {
    let mut builder = PageBuilder::default();
    assert!(matches!(
        builder.push("Colour", "red"),
        Err(LayoutError::UnknownStyleKey(name)) if name == "Colour"
    ));
    assert!(matches!(
        builder.push("FontSize", "big"),
        Err(LayoutError::Style(_))
    ));
    builder.push("TextAlignment", "Right").unwrap();
    assert!(builder.pop("TextAlignment").unwrap().is_some());
    assert_eq!(builder.pop("TextAlignment").unwrap(), None);
    assert!(builder.pop("Nope").is_err());
}

#[derive(Debug)]
struct Stamp;

impl ElementRenderer for Stamp {
    fn render(
        &self,
        node: &MarkupNode,
        _data: &Value,
        ctx: &RenderContext<'_>,
    ) -> Result<RenderOutcome, LayoutError> {
        let origin = ctx.place(node);
        let item = crate::PageItem::text(
            "STAMP",
            ctx.styles.text_style(node),
            ctx.frame(node, Rect::new(origin.x, origin.y, 40.0, 10.0)),
        );
        Ok(RenderOutcome::item(item, 10.0))
    }
}

#[test]
fn test_custom_renderer_registration() {
    let mut builder = PageBuilder::default();
    assert!(builder.register("Stamp", Arc::new(Stamp)).is_none());
    let map = MarkupNode::new("Page").with_child(MarkupNode::new("Stamp"));
    let items = builder.layout(&map, &json!({})).unwrap();
    assert_eq!(contents(&items), vec!["STAMP"]);

    // A second builder keeps the built-in dictionary.
    let other = PageBuilder::default();
    assert!(!other.renderers().contains("Stamp"));
}

#[test]
fn test_add_items_directly_and_reset() {
    let images = InMemoryImageProvider::new();
    images.add("seal", vec![1], Size::new(10.0, 10.0)).unwrap();
    let image = pagebuilder_traits::ImageProvider::image(&images, "seal", &json!({})).unwrap();

    let mut builder = PageBuilder::default();
    builder.push("Foreground", "#ff0000").unwrap();
    let item = builder.add_text_item("manual", Rect::new(1.0, 2.0, 3.0, 4.0));
    assert_eq!(item.container_rect(), Rect::new(1.0, 2.0, 3.0, 4.0));
    assert_eq!(
        item.as_text().unwrap().style().foreground,
        pagebuilder_types::Color::rgb(255, 0, 0)
    );
    builder.add_image_item("seal", image, Rect::new(0.0, 0.0, 5.0, 5.0));
    assert_eq!(builder.items().len(), 2);

    builder.reset();
    assert!(builder.items().is_empty());
    assert_eq!(builder.cascade().total_depth(), 0);
}

#[test]
fn test_draw_with_highlight() {
    let mut builder = fixed_height_builder(10.0);
    builder.set_highlight_container_rects(true);
    let map = MarkupNode::new("Container")
        .with_child(text("a").with_attr("BorderBrush", "black").with_attr("BorderThickness", "0.5"));
    builder.layout(&map, &json!({})).unwrap();

    let mut surface = RecordingSurface::new();
    builder.draw(&mut surface);
    let ops = surface.ops();
    assert_eq!(ops.len(), 3);
    assert!(matches!(&ops[0], DrawOp::Text { content, .. } if content == "a"));
    assert!(matches!(ops[1], DrawOp::StrokeRect { .. }));
    assert!(matches!(ops[2], DrawOp::StrokeRect { thickness, .. } if thickness == 0.5));
}
