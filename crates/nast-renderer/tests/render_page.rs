use nast_renderer::{HtmlRenderer, RenderResult};
use nast_transform::assemble;
use nast_types::{ChildIndex, RecordMap, Warning};
use pretty_assertions::assert_eq;

const ROOT: &str = "0eeee000-cccc-bbbb-aaaa-123450000000";

fn render(renderer: &HtmlRenderer) -> RenderResult {
    let records = RecordMap::from_json(include_str!("fixtures/page.json")).unwrap();
    let children = ChildIndex::from_records(&records);
    let assembled = assemble(ROOT, &records, &children).unwrap();
    assert!(assembled.warnings.is_empty(), "{:?}", assembled.warnings);
    renderer.render(&assembled.root)
}

#[test]
fn test_page_header_and_title() {
    let result = render(&HtmlRenderer::new());
    assert_eq!(result.title.as_deref(), Some("Team handbook"));
    assert!(result.html.starts_with(concat!(
        r#"<article id="0eeee000ccccbbbbaaaa123450000000" class="page">"#,
        r#"<header class="page__header"><span class="page__icon">📘</span>"#,
        r#"<h1 class="page__title"><span><em>Team </em>handbook</span></h1></header>"#
    )));
    assert!(result.html.ends_with("</article>"));
}

#[test]
fn test_inline_styles() {
    let result = render(&HtmlRenderer::new());
    assert!(result.html.contains(concat!(
        r#"<div id="20000000000000000000000000000001"><div class="block block--text"><span>"#,
        r#"Ask <span class="color-mention">@user_id:user-42</span> or read "#,
        r##"<a href="#20000000000000000000000000000004">this section</a>"##,
        r#"<span class="color-red">, it is </span>"#,
        r#"<strong><span class="background-yellow">important</span></strong>!"#,
        "</span></div></div>"
    )));
}

#[test]
fn test_local_anchor_target_exists() {
    let result = render(&HtmlRenderer::new());
    assert!(result.html.contains(concat!(
        r#"<div id="20000000000000000000000000000004">"#,
        r#"<h2 class="block block--heading color-purple"><span>Holidays</span></h2></div>"#
    )));
}

#[test]
fn test_toggle_contents_escaped() {
    let result = render(&HtmlRenderer::new());
    assert!(result.html.contains(concat!(
        r#"<details class="block block--toggle"><summary><span>Details</span></summary>"#,
        r#"<div id="20000000000000000000000000000007"><blockquote class="block block--quote">"#,
        r#"<span>Hidden &lt;&#x2F;quote&gt;</span></blockquote></div></details>"#
    )));
}

#[test]
fn test_nested_page_rendered_as_link() {
    let result = render(&HtmlRenderer::new());
    assert!(result.html.contains(
        r#"<a class="page__link" href="https://www.notion.so/20000000000000000000000000000003"><span>Onboarding</span></a>"#
    ));
}

#[test]
fn test_numbered_list_grouped() {
    let result = render(&HtmlRenderer::new());
    assert!(result.html.contains(concat!(
        r#"<div id=""><ol class="block block--numbered_list">"#,
        r#"<li id="20000000000000000000000000000005"><div class="block block--numbered_list_item">"#,
        r#"<span>Book <span class="color-mention">@2024-01-15</span></span></div></li>"#,
        r#"<li id="20000000000000000000000000000006"><div class="block block--numbered_list_item">"#,
        r#"<span>Tell the team</span></div></li></ol></div>"#
    )));
}

#[test]
fn test_unknown_marker_reported_once() {
    let result = render(&HtmlRenderer::new());
    assert_eq!(
        result.warnings,
        vec![Warning::UnsupportedStyle {
            code: "x".to_owned()
        }]
    );
}

#[test]
fn test_standalone_wraps_document() {
    let result = render(&HtmlRenderer::new().with_standalone(true));
    assert!(result.html.starts_with("<!DOCTYPE html>\n"));
    assert!(result.html.contains("<title>Team handbook</title>"));
}

#[test]
fn test_malformed_marker_keeps_title_text() {
    let records = RecordMap::from_json(
        r#"{"block": {
            "0eeee000-cccc-bbbb-aaaa-123450000000": {"value": {
                "type": "page",
                "content": ["10000000-0000-0000-0000-000000000001"]
            }},
            "10000000-0000-0000-0000-000000000001": {"value": {
                "type": "text",
                "properties": {"title": [["Hello ", [["b"], "x"]], ["world"]]}
            }}
        }}"#,
    )
    .unwrap();
    let children = ChildIndex::from_records(&records);
    let assembled = assemble(ROOT, &records, &children).unwrap();
    let result = HtmlRenderer::new().render(&assembled.root);

    assert!(result.html.contains(
        r#"<div class="block block--text"><span><strong>Hello </strong>world</span></div>"#
    ));
    assert_eq!(
        result.warnings,
        vec![Warning::UnsupportedStyle {
            code: "x".to_owned()
        }]
    );
}
