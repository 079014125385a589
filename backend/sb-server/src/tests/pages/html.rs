use crate::pages::html::{escape, list};

#[test]
fn test_escape_replaces_markup_characters() {
    assert_eq!(
        escape(r#"<script>alert("x") & 'y'</script>"#),
        "&lt;script&gt;alert(&quot;x&quot;) &amp; &#39;y&#39;&lt;/script&gt;"
    );
}

#[test]
fn test_escape_leaves_plain_text_alone() {
    assert_eq!(escape("Bengaluru – 560068"), "Bengaluru – 560068");
}

#[test]
fn test_list_escapes_each_item() {
    let html = list(&["a<b".to_string(), "c".to_string()], "checklist");
    assert_eq!(html, r#"<ul class="checklist"><li>a&lt;b</li><li>c</li></ul>"#);
}
