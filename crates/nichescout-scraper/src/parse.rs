//! Search-result page parsing.
//!
//! Storefront search pages mark each result with a
//! `data-component-type="s-search-result"` container carrying a `data-asin`
//! attribute. The parser slices the page into one block per container and
//! pulls loose text fragments out of each block with targeted regexes. No
//! numeric interpretation happens here; that is the engine's job.

use nichescout_core::RawListing;
use regex::Regex;

/// Parses one search-result page into raw listing fragments, in page order.
///
/// Blocks without a recoverable title are kept anyway; every fragment in
/// [`RawListing`] is optional and downstream normalization substitutes
/// sentinels.
#[must_use]
pub fn parse_search_page(html: &str) -> Vec<RawListing> {
    let block_re = Regex::new(
        r#"data-asin="([A-Z0-9]{10})"[^>]*data-component-type="s-search-result""#,
    )
    .expect("valid search-result block regex");

    let starts: Vec<(usize, String)> = block_re
        .captures_iter(html)
        .filter_map(|caps| {
            let m = caps.get(0)?;
            Some((m.start(), caps[1].to_owned()))
        })
        .collect();

    let mut listings = Vec::with_capacity(starts.len());
    for (i, (start, asin)) in starts.iter().enumerate() {
        let end = starts.get(i + 1).map_or(html.len(), |(next, _)| *next);
        listings.push(parse_result_block(&html[*start..end], asin));
    }
    listings
}

fn parse_result_block(block: &str, asin: &str) -> RawListing {
    let title_re =
        Regex::new(r"(?s)<h2[^>]*>.*?<span[^>]*>([^<]+)</span>").expect("valid title regex");
    let author_re = Regex::new(r#"<a class="a-link-normal[^"]*"[^>]*>([^<]+)</a>"#)
        .expect("valid author regex");
    let rating_re =
        Regex::new(r"([\d.]+ out of 5 stars)").expect("valid rating regex");
    let reviews_re = Regex::new(r#"<span class="a-size-base[^"]*"[^>]*>\s*([\d,]+)\s*</span>"#)
        .expect("valid reviews regex");
    let price_re = Regex::new(r#"<span class="a-offscreen">([^<]+)</span>"#)
        .expect("valid price regex");
    let date_re = Regex::new(r#"<span class="a-size-base a-color-secondary[^"]*"[^>]*>([^<]+)</span>"#)
        .expect("valid date regex");

    let first = |re: &Regex| {
        re.captures(block)
            .map(|caps| caps[1].trim().to_owned())
            .filter(|s| !s.is_empty())
    };

    RawListing {
        title_text: first(&title_re),
        author_text: first(&author_re),
        reviews_text: first(&reviews_re),
        rating_text: first(&rating_re),
        price_text: first(&price_re),
        asin: Some(asin.to_owned()),
        date_text: first(&date_re),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_block(asin: &str, body: &str) -> String {
        format!(
            r#"<div data-asin="{asin}" data-component-type="s-search-result" class="s-result-item">{body}</div>"#
        )
    }

    const FULL_BODY: &str = concat!(
        r#"<h2 class="a-size-mini"><a class="a-link-normal s-link-style" href="/dp/x">"#,
        r#"<span class="a-text-normal">Sourdough for Beginners</span></a></h2>"#,
        r#"<a class="a-link-normal s-underline-link-text" href="/author">Jane Baker</a>"#,
        r#"<span class="a-icon-alt">4.5 out of 5 stars</span>"#,
        r#"<span class="a-size-base s-underline-text">1,234</span>"#,
        r#"<span class="a-price"><span class="a-offscreen">$12.99</span></span>"#,
        r#"<span class="a-size-base a-color-secondary a-text-normal">March 15, 2024</span>"#,
    );

    #[test]
    fn empty_page_yields_no_listings() {
        assert!(parse_search_page("<html><body>No results</body></html>").is_empty());
    }

    #[test]
    fn full_block_yields_every_fragment() {
        let html = result_block("B0ABCDEF12", FULL_BODY);
        let listings = parse_search_page(&html);
        assert_eq!(listings.len(), 1);

        let listing = &listings[0];
        assert_eq!(listing.asin.as_deref(), Some("B0ABCDEF12"));
        assert_eq!(listing.title_text.as_deref(), Some("Sourdough for Beginners"));
        assert_eq!(listing.author_text.as_deref(), Some("Jane Baker"));
        assert_eq!(listing.rating_text.as_deref(), Some("4.5 out of 5 stars"));
        assert_eq!(listing.reviews_text.as_deref(), Some("1,234"));
        assert_eq!(listing.price_text.as_deref(), Some("$12.99"));
        assert_eq!(listing.date_text.as_deref(), Some("March 15, 2024"));
    }

    #[test]
    fn sparse_block_yields_asin_only() {
        let html = result_block("B0SPARSE99", "<div>sponsored placeholder</div>");
        let listings = parse_search_page(&html);
        assert_eq!(listings.len(), 1);

        let listing = &listings[0];
        assert_eq!(listing.asin.as_deref(), Some("B0SPARSE99"));
        assert!(listing.title_text.is_none());
        assert!(listing.rating_text.is_none());
        assert!(listing.price_text.is_none());
    }

    #[test]
    fn multiple_blocks_keep_page_order() {
        let html = format!(
            "{}{}{}",
            result_block("B0FIRST111", FULL_BODY),
            result_block("B0SECOND22", "<h2><span>Bread Science</span></h2>"),
            result_block("B0THIRD333", FULL_BODY),
        );
        let listings = parse_search_page(&html);
        let asins: Vec<&str> = listings.iter().filter_map(|l| l.asin.as_deref()).collect();
        assert_eq!(asins, vec!["B0FIRST111", "B0SECOND22", "B0THIRD333"]);
        assert_eq!(listings[1].title_text.as_deref(), Some("Bread Science"));
    }

    #[test]
    fn fragments_never_leak_across_blocks() {
        // Second block has no price; the first block's price must not bleed in.
        let html = format!(
            "{}{}",
            result_block("B0PRICED00", FULL_BODY),
            result_block("B0NOPRICE0", "<h2><span>Free Pamphlet</span></h2>"),
        );
        let listings = parse_search_page(&html);
        assert_eq!(listings[0].price_text.as_deref(), Some("$12.99"));
        assert!(listings[1].price_text.is_none());
    }

    #[test]
    fn whitespace_around_fragments_is_trimmed() {
        let body = r#"<h2><span>  Padded Title </span></h2>"#;
        let html = result_block("B0PADDED00", body);
        let listings = parse_search_page(&html);
        assert_eq!(listings[0].title_text.as_deref(), Some("Padded Title"));
    }
}
