// tests/scan.rs
//
// Script-block scanning over raw HTML, no network.
//
use gym_scrape::core::html::extract_script_blocks;

#[test]
fn no_script_tags_yields_nothing() {
    let doc = "<html><body><p>Quiet in here.</p></body></html>";
    assert!(extract_script_blocks(doc).is_empty());
}

#[test]
fn whitespace_only_and_include_only_scripts_dropped() {
    let doc = r#"
        <html><head>
        <script src="https://cdn.example/counter.js"></script>
        <script>
        </script>
        </head></html>
    "#;
    assert!(extract_script_blocks(doc).is_empty());
}

#[test]
fn bodies_in_document_order_and_trimmed() {
    let doc = "
        <script> first(); </script>
        <p>noise</p>
        <SCRIPT type=\"text/javascript\">second();</SCRIPT>
    ";
    let blocks = extract_script_blocks(doc);
    assert_eq!(blocks, vec!["first();", "second();"]);
}

#[test]
fn angle_brackets_inside_script_do_not_end_it() {
    let doc = "<script>if (a < b) { go(); }</script>";
    let blocks = extract_script_blocks(doc);
    assert_eq!(blocks, vec!["if (a < b) { go(); }"]);
}

#[test]
fn lookalike_tag_names_ignored() {
    let doc = "<scripty>nope</scripty><script>yes();</script>";
    assert_eq!(extract_script_blocks(doc), vec!["yes();"]);
}

#[test]
fn unterminated_script_ends_scan_without_panic() {
    let doc = "<script>ok();</script><script>never closed";
    assert_eq!(extract_script_blocks(doc), vec!["ok();"]);
}
