use scraper::{Html, Selector};

/// Every `<pre>` block in document order, text content trimmed. No semantic
/// filtering: a `<pre>` that is not actually an example input still counts.
pub fn extract_samples(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("pre").unwrap();

    document
        .select(&selector)
        .map(|block| block.text().collect::<String>().trim().to_string())
        .collect()
}

/// `sample.txt`, `sample2.txt`, `sample3.txt`, ... Index 1 maps to
/// `sample2.txt`; existing workspaces depend on this numbering.
pub fn sample_filename(index: usize) -> String {
    if index == 0 {
        "sample.txt".to_string()
    } else {
        format!("sample{}.txt", index + 1)
    }
}
