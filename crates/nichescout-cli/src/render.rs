//! Text rendering of an opportunity report for terminal output.

use std::fmt::Write as _;

use nichescout_engine::{
    ActivityLevel, CompetitionLevel, OpportunityReport, OpportunityTiming, Recommendation,
};

const WIDE_RULE: &str =
    "================================================================================";
const SECTION_RULE: &str = "----------------------------------------";

/// Renders the full text report for one analysis.
///
/// Sections backed by insufficient data are replaced with a one-line note
/// rather than omitted silently, so a thin market is visible in the output.
#[must_use]
#[allow(clippy::too_many_lines)]
pub(crate) fn render_report(report: &OpportunityReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{WIDE_RULE}");
    let _ = writeln!(out, "BOOK MARKET RESEARCH REPORT");
    let _ = writeln!(out, "{WIDE_RULE}");
    let _ = writeln!(out, "Query: {}", report.query);
    let _ = writeln!(out, "Analysis Date: {}", report.analysis_date.to_rfc3339());
    let _ = writeln!(out, "Total Books Analyzed: {}", report.total_books_analyzed);
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "OVERALL OPPORTUNITY SCORE: {}/100",
        report.opportunity_score
    );
    let banner = match report.recommendation() {
        Recommendation::Excellent => "EXCELLENT OPPORTUNITY - Highly Recommended",
        Recommendation::Good => "GOOD OPPORTUNITY - Recommended with Strategy",
        Recommendation::Moderate => "MODERATE OPPORTUNITY - Proceed with Caution",
        Recommendation::Low => "LOW OPPORTUNITY - Not Recommended",
    };
    let _ = writeln!(out, "  {banner}");
    let _ = writeln!(out);

    let _ = writeln!(out, "COMPETITION ANALYSIS");
    let _ = writeln!(out, "{SECTION_RULE}");
    match report.competition.metrics() {
        Some(competition) => {
            let _ = writeln!(out, "Total Competitors: {}", competition.total_competitors);
            let _ = writeln!(out, "Average Reviews: {:.0}", competition.avg_reviews);
            let _ = writeln!(out, "Median Reviews: {:.0}", competition.median_reviews);
            let _ = writeln!(
                out,
                "Competition Level: {}",
                competition.competition_level
            );
            let _ = writeln!(
                out,
                "Author Diversity: {} unique authors",
                competition.author_diversity
            );
            if !competition.dominant_authors.is_empty() {
                let _ = writeln!(out, "Top Authors by Book Count:");
                for entry in competition.dominant_authors.iter().take(3) {
                    let _ = writeln!(out, "  - {}: {} books", entry.author, entry.listings);
                }
            }
        }
        None => {
            let _ = writeln!(out, "Insufficient data: no listings with review data");
        }
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "DEMAND ANALYSIS");
    let _ = writeln!(out, "{SECTION_RULE}");
    let demand = &report.demand;
    let _ = writeln!(
        out,
        "Total Market Reviews: {}",
        demand.total_market_reviews
    );
    let _ = writeln!(
        out,
        "Avg Reviews per Book: {:.1}",
        demand.avg_reviews_per_listing
    );
    let _ = writeln!(
        out,
        "Market Activity Level: {}",
        demand.market_activity_level
    );
    let _ = writeln!(
        out,
        "Estimated Monthly Searches: {:.0}",
        demand.estimated_monthly_searches
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "QUALITY OPPORTUNITIES");
    let _ = writeln!(out, "{SECTION_RULE}");
    let gaps = &report.quality_gaps;
    let _ = writeln!(
        out,
        "Low-Rated Books (Under 4.0): {}",
        gaps.low_rated_opportunities
    );
    if !gaps.missing_formats.is_empty() {
        let _ = writeln!(out, "Missing Formats (Opportunities):");
        for format in &gaps.missing_formats {
            let _ = writeln!(out, "  - {format}");
        }
    }
    if !gaps.oversaturated_formats.is_empty() {
        let _ = writeln!(out, "Oversaturated Formats (Avoid):");
        for format in &gaps.oversaturated_formats {
            let _ = writeln!(out, "  - {format}");
        }
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "PRICING ANALYSIS");
    let _ = writeln!(out, "{SECTION_RULE}");
    match report.pricing.metrics() {
        Some(pricing) => {
            let _ = writeln!(out, "Average Price: ${:.2}", pricing.avg_price);
            let _ = writeln!(out, "Median Price: ${:.2}", pricing.median_price);
            let buckets = &pricing.price_range_distribution;
            let _ = writeln!(out, "Price Distribution:");
            let _ = writeln!(out, "  - Under $3: {} books", buckets.under_3);
            let _ = writeln!(out, "  - $3-$6: {} books", buckets.from_3_to_6);
            let _ = writeln!(out, "  - $6-$10: {} books", buckets.from_6_to_10);
            let _ = writeln!(out, "  - Over $10: {} books", buckets.over_10);
            let _ = writeln!(out, "Recommended Strategy: {}", pricing.pricing_strategy);
            if !pricing.price_gaps.is_empty() {
                let _ = writeln!(out, "Price Gap Opportunities:");
                for gap in pricing.price_gaps.iter().take(3) {
                    let _ = writeln!(
                        out,
                        "  - ${:.2} - ${:.2} (Gap: ${:.2})",
                        gap.gap_start, gap.gap_end, gap.gap_size
                    );
                }
            }
        }
        None => {
            let _ = writeln!(out, "Insufficient data: no pricing data available");
        }
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "MARKET TIMING");
    let _ = writeln!(out, "{SECTION_RULE}");
    let timing = &report.timing;
    let _ = writeln!(out, "Recent Publications: {}", timing.recent_publications);
    let _ = writeln!(
        out,
        "Market Freshness: {:.1}%",
        timing.market_freshness * 100.0
    );
    let _ = writeln!(out, "Publishing Trend: {}", timing.publishing_trend);
    let _ = writeln!(out, "Opportunity Timing: {}", timing.opportunity_timing);
    let _ = writeln!(out);

    if report.trend_signal.is_some() || report.youtube_trend.is_some() {
        let _ = writeln!(out, "TREND ANALYSIS");
        let _ = writeln!(out, "{SECTION_RULE}");
        if let Some(signal) = &report.trend_signal {
            let _ = writeln!(out, "Search Results: {}", signal.total_results);
            let _ = writeln!(out, "Related Questions: {}", signal.related_questions);
            let _ = writeln!(out, "Trend Score: {}/100", signal.trend_score);
        }
        if let Some(youtube) = &report.youtube_trend {
            let _ = writeln!(out, "YouTube Interest: {}", youtube.interest_level);
        }
        let _ = writeln!(out);
    }

    render_recommendations(&mut out, report);

    let _ = writeln!(out, "ACTION ITEMS");
    let _ = writeln!(out, "{SECTION_RULE}");
    let _ = writeln!(out, "1. Research top 5 competitors in detail");
    let _ = writeln!(out, "2. Analyze their reviews for improvement opportunities");
    let _ = writeln!(out, "3. Consider unique angles or underserved sub-niches");
    let _ = writeln!(out, "4. Plan content that addresses quality gaps identified");
    let _ = writeln!(out, "5. Set competitive pricing based on analysis above");

    out
}

fn render_recommendations(out: &mut String, report: &OpportunityReport) {
    let _ = writeln!(out, "STRATEGIC RECOMMENDATIONS");
    let _ = writeln!(out, "{SECTION_RULE}");

    let competition_level = report.competition.metrics().map(|m| m.competition_level);
    let gaps = &report.quality_gaps;

    if report.opportunity_score >= 50 {
        let _ = writeln!(out, "PROCEED WITH THIS NICHE");
        let _ = writeln!(out, "Key Success Factors:");
        if competition_level == Some(CompetitionLevel::Low) {
            let _ = writeln!(out, "  - Low competition, a strong entry opportunity");
        }
        if gaps.low_rated_opportunities > 0 {
            let _ = writeln!(
                out,
                "  - {} poorly rated books to outcompete",
                gaps.low_rated_opportunities
            );
        }
        if !gaps.missing_formats.is_empty() {
            let shortlist: Vec<&str> = gaps
                .missing_formats
                .iter()
                .take(3)
                .map(String::as_str)
                .collect();
            let _ = writeln!(
                out,
                "  - Missing formats to explore: {}",
                shortlist.join(", ")
            );
        }
        if report.timing.opportunity_timing == OpportunityTiming::Good {
            let _ = writeln!(
                out,
                "  - Good timing, not oversaturated with recent releases"
            );
        }
    } else {
        let _ = writeln!(out, "CONSIDER ALTERNATIVE NICHES");
        let _ = writeln!(out, "Risk Factors:");
        if competition_level == Some(CompetitionLevel::High) {
            let _ = writeln!(out, "  - High competition with established players");
        }
        if report.demand.market_activity_level == ActivityLevel::Low {
            let _ = writeln!(out, "  - Low market demand indicators");
        }
        if report.timing.opportunity_timing == OpportunityTiming::Competitive {
            let _ = writeln!(out, "  - Market may be oversaturated");
        }
    }
    let _ = writeln!(out);
}
