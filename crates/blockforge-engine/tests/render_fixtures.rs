use blockforge_engine::{
    parse_blocks, parse_page, parse_rich_text, render_blocks, render_page, serialize_rich_text,
};

fn fixture(name: &str) -> String {
    std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.json",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}

#[test]
fn landing_page_renders_every_entry_kind() {
    let page = parse_page(&fixture("pages/landing")).unwrap();
    let html = render_page(&page.page_builder).to_html().into_string();

    assert!(html.starts_with("<div class=\"page-builder\">"), "{html}");

    // Row columns keep their authored widths and nested blocks.
    assert!(html.contains("col-span-12 lg:col-span-8"), "{html}");
    assert!(html.contains("col-span-12 lg:col-span-4"), "{html}");
    assert!(html.contains("<h1 class=\"heading-block\">Welcome</h1>"), "{html}");
    assert!(
        html.contains("<p>Build pages from <strong>blocks</strong>.</p>"),
        "{html}"
    );
    assert!(html.contains("href=\"/signup\""), "{html}");

    // Rich text entry serializes inline.
    assert!(html.contains("<h2>Why blocks</h2>"), "{html}");
    assert!(
        html.contains("<ul><li>Composable</li><li>Orderable</li></ul>"),
        "{html}"
    );

    // Custom HTML passes through verbatim, CSS included.
    assert!(
        html.contains("<aside data-widget=\"newsletter\">Subscribe</aside>"),
        "{html}"
    );
    assert!(html.contains(".custom-html-block aside { padding: 1rem }"), "{html}");

    // An unresolved block relationship and an unknown entry kind both
    // degrade to visible diagnostics without dropping the page.
    assert!(html.contains("Content block reference is missing"), "{html}");
    assert!(html.contains("Unknown block type:"), "{html}");
}

#[test]
fn landing_page_preserves_entry_order() {
    let page = parse_page(&fixture("pages/landing")).unwrap();
    let html = render_page(&page.page_builder).to_html().into_string();

    let welcome = html.find("Welcome").unwrap();
    let why = html.find("Why blocks").unwrap();
    let subscribe = html.find("Subscribe").unwrap();
    assert!(welcome < why && why < subscribe, "{html}");
}

#[test]
fn block_showcase_covers_styling_and_degradation() {
    let blocks = parse_blocks(&fixture("blocks/showcase")).unwrap();
    let html = render_blocks(&blocks).to_html().into_string();

    // Resolved media renders with its stored dimensions.
    assert!(
        html.contains(
            "<img class=\"max-w-full h-auto\" src=\"/media/hero.jpg\" alt=\"Hero\" \
             width=\"1200\" height=\"400\">"
        ),
        "{html}"
    );

    // Styling flows onto the wrapper element.
    assert!(
        html.contains("<div class=\"block-2 pull-quote\" style=\"text-align:center\">"),
        "{html}"
    );
    assert!(html.contains("<cite class=\"quote-author\">Ada</cite>"), "{html}");

    // Embed URLs become iframes with the aspect-ratio wrapper.
    assert!(html.contains("<iframe"), "{html}");
    assert!(html.contains("padding-bottom:56.25%"), "{html}");

    // Inactive blocks vanish, stubs announce themselves.
    assert!(!html.contains("Draft heading"), "{html}");
    assert!(html.contains("STATS Block"), "{html}");

    // Custom CSS is scoped to the owning block's class.
    assert!(
        html.contains("<style>.block-6 {canvas { border: 1px solid }}</style>"),
        "{html}"
    );
    assert!(html.contains("<canvas id=\"chart\"></canvas>"), "{html}");
}

#[test]
fn block_showcase_preserves_block_order() {
    let blocks = parse_blocks(&fixture("blocks/showcase")).unwrap();
    let html = render_blocks(&blocks).to_html().into_string();

    let image = html.find("block-1").unwrap();
    let quote = html.find("block-2").unwrap();
    let video = html.find("block-3").unwrap();
    assert!(image < quote && quote < video, "{html}");
}

#[test]
fn article_rich_text_serializes_exactly() {
    let content = parse_rich_text(&fixture("richtext/article")).unwrap();
    let html = serialize_rich_text(Some(&content)).into_string();

    assert_eq!(
        html,
        "<h1>Release notes</h1>\
         <p>Version <strong>2.0</strong> is out. See the \
         <a href=\"https://example.com/changelog\" target=\"_blank\" \
         rel=\"noopener noreferrer\">changelog</a>.</p>\
         <blockquote><em>Upgrade early, upgrade often.</em></blockquote>\
         <ol><li>Faster renders</li><li><code>Safer markup</code></li></ol>"
    );
}
