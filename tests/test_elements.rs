use safebuild::{is_html_element, Builder, TagCall};

#[test]
fn test_element_methods_build_a_document() {
    let mut page = Builder::new();
    page.html(TagCall::new().indent(false).body(|b| {
        b.head(TagCall::new().indent(false).body(|b| {
            b.title(TagCall::new().content("Demo").indent(false))?;
            Ok(None)
        }))?;
        b.body(TagCall::new().indent(false).body(|b| {
            b.h1(TagCall::new().content("Demo").indent(false))?;
            b.p(TagCall::new().content("1 < 2").indent(false))?;
            Ok(None)
        }))?;
        Ok(None)
    }))
    .unwrap();
    insta::assert_snapshot!(
        page.output().as_str(),
        @"<html><head><title>Demo</title></head><body><h1>Demo</h1><p>1 &lt; 2</p></body></html>"
    );
}

#[test]
fn test_void_style_elements_self_close() {
    let mut html = Builder::new();
    html.br(TagCall::new()).unwrap();
    html.hr(TagCall::new()).unwrap();
    assert_eq!(html.output().as_str(), "<br/>\n<hr/>\n");
}

#[test]
fn test_list_sugar() {
    let mut html = Builder::new();
    html.li(TagCall::new().content(vec!["a", "b"])).unwrap();
    assert_eq!(html.output().as_str(), "<li>a</li>\n<li>b</li>\n");
}

#[test]
fn test_vocabulary_lookup() {
    assert!(is_html_element("table"));
    assert!(is_html_element("TABLE"));
    assert!(!is_html_element("tabel"));
    // the open-ended entry point still renders unknown names
    let mut html = Builder::new();
    html.tag("tabel", TagCall::new()).unwrap();
    assert_eq!(html.output().as_str(), "<tabel/>\n");
}
