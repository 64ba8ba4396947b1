use safebuild::{Builder, BuilderOptions, TagCall, TagOptions};

#[test]
fn test_builder_namespace_prefixes_every_tag() {
    let options = BuilderOptions {
        namespace: Some("x".to_string()),
        ..BuilderOptions::default()
    };
    let mut xml = Builder::with_options(options);
    xml.tag("a", TagCall::new()).unwrap();
    xml.tag("b", TagCall::new().content("text")).unwrap();
    assert_eq!(xml.output().as_str(), "<x:a/>\n<x:b>text</x:b>\n");
}

#[test]
fn test_call_namespace_overrides_builder_namespace() {
    let options = BuilderOptions {
        namespace: Some("x".to_string()),
        ..BuilderOptions::default()
    };
    let mut xml = Builder::with_options(options);
    xml.tag("rect", TagCall::new().namespace("svg")).unwrap();
    assert_eq!(xml.output().as_str(), "<svg:rect/>\n");
}

#[test]
fn test_namespace_used_in_closing_tag() {
    let options = BuilderOptions {
        namespace: Some("x".to_string()),
        ..BuilderOptions::default()
    };
    let mut xml = Builder::with_options(options);
    xml.tag("b", TagCall::new().content("t")).unwrap();
    assert!(xml.output().as_str().ends_with("</x:b>\n"));
}

#[test]
fn test_call_selfclose_override() {
    let mut html = Builder::new();
    html.tag("div", TagCall::new().selfclose(false)).unwrap();
    assert_eq!(html.output().as_str(), "<div></div>\n");
}

#[test]
fn test_call_indent_override() {
    let mut html = Builder::new();
    html.tag("span", TagCall::new().content("a").indent(false))
        .unwrap();
    html.tag("span", TagCall::new().content("b")).unwrap();
    assert_eq!(html.output().as_str(), "<span>a</span><span>b</span>\n");
}

#[test]
fn test_call_options_struct() {
    let mut html = Builder::new();
    let options = TagOptions {
        namespace: Some("ns".to_string()),
        selfclose: Some(false),
        indent: Some(false),
    };
    html.tag("item", TagCall::new().options(options)).unwrap();
    assert_eq!(html.output().as_str(), "<ns:item></ns:item>");
}

#[test]
fn test_builder_options_do_not_mutate() {
    let mut html = Builder::new();
    html.tag("div", TagCall::new().indent(false).selfclose(false))
        .unwrap();
    // the per-call override does not stick
    html.tag("div", TagCall::new()).unwrap();
    assert_eq!(html.output().as_str(), "<div></div><div/>\n");
    assert!(html.options().indent);
    assert!(html.options().selfclose);
}
