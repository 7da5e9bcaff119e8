//! Fixed prose shown around the computed sections.

use insights_core::Domain;

pub const TITLE: &str = "AI-Powered Marketing with Free WiFi Analytics";

pub const INTRODUCTION: &str = "\
This showcase walks through how data scientists can turn free WiFi analytics \
from physical venues into sharper marketing. It starts from the general picture \
and then looks at two concrete venues: a Nigerian restaurant and a supermarket.";

pub const DATA_SOURCES_HEADING: &str = "Data from Free WiFi Analytics";

pub const DATA_SOURCES: &str = "\
Free WiFi analytics can describe how customers behave inside a venue:
- Visit frequency (new vs. returning visitors).
- Visit duration.
- Foot traffic within the venue.
- Dwell time in specific zones.
- Path analysis.
- Demographics or preferences, when collected at login or through surveys.";

pub const ENHANCEMENTS_HEADING: &str = "How AI Enhances Marketing";

pub const ENHANCEMENTS: &str = "\
- Customer Segmentation: grouping customers with similar behavior or preferences.
- Personalized Promotions: targeted offers and recommendations.
- Optimizing Operations: layout, product placement and staffing decisions.
- Predictive Analytics: forecasting future customer behavior.
- Automated Campaigns: messages triggered by real-time behavior.";

pub const COMBINED_HEADING: &str = "Combined Insights and AI's Role";

pub const COMBINED_INSIGHTS: &str = "\
If the restaurant and the supermarket are nearby, AI could help understand cross-shopping behavior.
- AI Role: association rule mining to link restaurant visits with supermarket purchases.
- Potential Insight: frequent lunch guests at the restaurant may also buy certain grocery items.
- Marketing Potential: cross-promotion between the two businesses.";

pub const BENEFITS_HEADING: &str = "Benefits for the Business";

pub const BENEFITS: &str = "\
- Better customer experience through personalization.
- Higher loyalty from relevant offers.
- Improved marketing ROI by reaching the right audiences.
- Data-driven decisions for day-to-day operations.";

pub const PRIVACY_HEADING: &str = "Privacy Considerations";

pub const PRIVACY: &str = "\
Ethical data handling is essential. Real deployments must prioritize:
- Anonymization of user data.
- Transparency about data collection.
- Compliance with privacy regulations.";

pub const CLOSING: &str = "\
All figures above come from synthetic visitor tables; they illustrate the approach \
rather than any real venue.";

pub fn venue_heading(domain: Domain) -> &'static str {
    match domain {
        Domain::Restaurant => "Advanced Use Case: Nigerian Restaurant",
        Domain::Supermarket => "Advanced Use Case: Supermarket",
    }
}

pub fn venue_intro(domain: Domain) -> &'static str {
    match domain {
        Domain::Restaurant => "Consider a Nigerian restaurant serving both local and continental dishes.",
        Domain::Supermarket => "Next, a supermarket stocking a wide range of provisions.",
    }
}

pub fn segmentation_intro(domain: Domain) -> &'static str {
    match domain {
        Domain::Restaurant => "Rule-based segmentation groups restaurant guests into a few audiences:",
        Domain::Supermarket => "Supermarket visitors can be segmented by their shopping behavior:",
    }
}
