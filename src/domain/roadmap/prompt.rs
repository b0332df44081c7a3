//! Roadmap prompt template.
//!
//! Builds the markdown report request sent to the language model. The
//! heading and label shapes asked for here are exactly what
//! `MarkdownRoadmapParser` extracts; keep the two in lockstep when
//! changing either.

use crate::domain::profile::FarmerProfile;

/// Builds the ten-year roadmap prompt for a resolved business title.
pub fn roadmap_prompt(profile: &FarmerProfile, business_title: &str) -> String {
    format!(
        r#"You are an expert agricultural consultant. Create a comprehensive 10-Year Business Roadmap for '{business}'.

Farmer Details:
- Name: {name}
- Location: {location}
- Land Size: {land}
- Starting Capital/Budget: ₹{capital}
- Experience: {experience} years
- Market Access: {market_access}
- Risk Preference: {risk}

Please write a detailed report using the exact structure below. STRICTLY NO EMOJIS. Use Markdown headers and bold text.

# Title: 10-Year Sustainability & Profit Planner for {business}

# Overview
[Write a 2-3 sentence summary focusing on long-term sustainability and the farmer's specific context.]

# 1. 10-Year Growth & Profit Planner
[Provide a Year-wise breakdown from Year 1 to Year 10. Format each year as a clear block like this:]

## Year 1: [Main Goal]
- **Strategic Focus**: [Primary objective]
- **Key Actions**: [2-3 specific actionable steps]
- **Expected Profit**: ₹[Amount]

... (Repeat for Years 2 through 10) ...

# 2. Labor & Aging Analysis
[How labor requirements shift as the farmer ages (current age: {age}). Include specific automation triggers for years 4, 7, and 10.]

# 3. Sustainability & Succession
[A plan for multi-generational wealth transfer and soil/resource health.]

# 4. Financial Resilience
[How to handle 1 "bad year" (drought/pest) during Phase 1 (Years 1-3) vs Phase 3 (Years 7-10).]

# 5. Final Verdict
[Feasibility score and long-term ROI.]

DISCLAIMER: This roadmap is an AI-generated simulation based on provided data and regional averages. Actual results may vary due to market fluctuations, climate conditions, and individual management. This should not be considered financial or legal advice. Consult with local agricultural experts before major investments.
"#,
        business = business_title,
        name = profile.name,
        location = profile.location(),
        land = profile.land(),
        capital = profile.capital,
        experience = profile.experience_years,
        market_access = profile.market_access,
        risk = profile.risk_level,
        age = profile.age,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_contains_all_section_headings() {
        let prompt = roadmap_prompt(&FarmerProfile::guest(), "PLANT NURSERY");

        assert!(prompt.contains("# Overview"));
        assert!(prompt.contains("# 1. 10-Year Growth & Profit Planner"));
        assert!(prompt.contains("# 2. Labor & Aging Analysis"));
        assert!(prompt.contains("# 3. Sustainability & Succession"));
        assert!(prompt.contains("# 4. Financial Resilience"));
        assert!(prompt.contains("# 5. Final Verdict"));
        assert!(prompt.contains("DISCLAIMER:"));
    }

    #[test]
    fn prompt_embeds_profile_and_business() {
        let mut profile = FarmerProfile::guest();
        profile.name = "Ramesh".to_string();
        profile.village = "Wai".to_string();
        let prompt = roadmap_prompt(&profile, "DAIRY FARMING (6–8 COW UNIT)");

        assert!(prompt.contains("Name: Ramesh"));
        assert!(prompt.contains("Wai,"));
        assert!(prompt.contains("DAIRY FARMING (6–8 COW UNIT)"));
    }

    #[test]
    fn prompt_requests_year_block_shape() {
        let prompt = roadmap_prompt(&FarmerProfile::guest(), "PLANT NURSERY");
        assert!(prompt.contains("## Year 1:"));
        assert!(prompt.contains("**Strategic Focus**:"));
        assert!(prompt.contains("**Key Actions**:"));
        assert!(prompt.contains("**Expected Profit**:"));
    }
}
