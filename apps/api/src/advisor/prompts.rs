// Prompt templates for the job search and industry trend orchestrators.
// Placeholders in `{braces}` are filled with `str::replace` before sending.

/// Narrative headings the job analysis must produce, in order.
pub const JOB_SECTIONS: [&str; 4] = [
    "SELECTED OPPORTUNITIES",
    "SKILLS MATCH ANALYSIS",
    "RECOMMENDATIONS",
    "APPLICATION TIPS",
];

/// Narrative headings the trend analysis must produce, in order.
pub const TREND_SECTIONS: [&str; 4] = [
    "TRENDS SUMMARY",
    "TOP SKILLS",
    "GROWTH OPPORTUNITIES",
    "RECOMMENDATIONS FOR JOB SEEKERS",
];

pub const NO_JOBS_MESSAGE: &str = "No job listings found matching your criteria. \
    Try adjusting your search parameters or try different job sites.";

/// Replace `{category}`.
pub const NO_TRENDS_MESSAGE_TEMPLATE: &str =
    "No industry trends data available for {category}. Try a different industry category.";

pub const JOB_ERROR_GUIDANCE: &str = "Please try again with different search parameters \
    or check if the job sites are supported by Firecrawl.";

pub const TREND_ERROR_GUIDANCE: &str = "Please try again with a different industry category \
    or check if the sites are supported by Firecrawl.";

/// Job extraction prompt. Replace: {job_title}, {location}, {experience_years}, {skills}
pub const JOB_EXTRACTION_PROMPT_TEMPLATE: &str = r#"Extract job postings by region, roles, job titles, and experience from these job sites.

Look for jobs that match these criteria:
- Job Title: Should be related to {job_title}
- Location: {location} (include remote jobs if available)
- Experience: Around {experience_years} years
- Skills: Should match at least some of these skills: {skills}
- Job Type: Full-time, Part-time, Contract, Temporary, Internship

For each job posting, extract:
- region: The broader region or area where the job is located (e.g., "Northeast", "West Coast", "Midwest")
- role: The specific role or function (e.g., "Frontend Developer", "Data Analyst")
- job_title: The exact title of the job
- experience: The experience requirement in years or level (e.g., "3-5 years", "Senior")
- job_link: The link to the job posting

IMPORTANT: Return data for at least 3 different job opportunities. MAXIMUM 10."#;

/// Job analysis prompt.
/// Replace: {jobs_json}, {job_title}, {location}, {experience_years}, {skills}
pub const JOB_ANALYSIS_PROMPT_TEMPLATE: &str = r#"As a career expert, analyze these job opportunities:

Jobs Found in json format:
{jobs_json}

**IMPORTANT INSTRUCTIONS:**
1. ONLY analyze jobs from the above JSON data that match the user's requirements:
   - Job Title: Related to {job_title}
   - Location/Region: Near {location}
   - Experience: Around {experience_years} years
   - Skills: {skills}
   - Job Type: Full-time, Part-time, Contract, Temporary, Internship
2. DO NOT create new job listings
3. From the matching jobs, select 5-6 jobs that best match the user's skills and experience

Please provide your analysis in this format, using exactly these four section headings in this order:

## 💼 SELECTED OPPORTUNITIES
• List only 5-6 best matching jobs
• For each job include:
  - Job Title and Role
  - Region/Location
  - Experience Required
  - Pros and Cons
  - Job Link

## 🔍 SKILLS MATCH ANALYSIS
• Compare the selected jobs based on:
  - Skills match with user's profile
  - Experience requirements
  - Growth potential

## 💡 RECOMMENDATIONS
• Top 3 jobs from the selection with reasoning
• Career growth potential
• Points to consider before applying

## 📝 APPLICATION TIPS
• Job-specific application strategies
• Resume customization tips for these roles

Format your response in a clear, structured way using the above sections."#;

/// Trend extraction prompt. Replace: {category}
pub const TREND_EXTRACTION_PROMPT_TEMPLATE: &str = r#"Extract industry trends data for the {category} industry.

For each industry trend, extract:
- industry: The specific industry or sub-category
- avg_salary: The average salary in this industry (as a number)
- growth_rate: The growth rate of this industry (as a number)
- demand_level: The demand level (e.g., "High", "Medium", "Low")
- top_skills: A list of top skills in demand for this industry

IMPORTANT:
- Extract data for at least 3-5 different roles or sub-categories within this industry
- Include salary trends, growth rate, and demand level
- Identify top skills in demand for this industry"#;

/// Trend analysis prompt. Replace: {category}, {trends_json}
pub const TREND_ANALYSIS_PROMPT_TEMPLATE: &str = r#"As a career expert, analyze these industry trends for {category}:

{trends_json}

Only use the records above. Please provide:
1. A bullet-point summary of the salary and demand trends
2. Identify the top skills in demand for this industry
3. Career growth opportunities:
   - Roles with highest growth potential
   - Emerging specializations
   - Skills with increasing demand
4. Specific advice for job seekers based on these trends

Format the response with exactly these four section headings in this order:

## 📊 TRENDS SUMMARY
• [Bullet points for salary and demand trends]

## 🔥 TOP SKILLS
• [Bullet points for most sought-after skills]

## 📈 GROWTH OPPORTUNITIES
• [Bullet points with growth insights]

## 🎯 RECOMMENDATIONS FOR JOB SEEKERS
• [Bullet points with specific advice]"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::report::sections_in_order;

    #[test]
    fn test_templates_list_their_own_sections_in_order() {
        assert!(sections_in_order(JOB_ANALYSIS_PROMPT_TEMPLATE, &JOB_SECTIONS));
        assert!(sections_in_order(TREND_ANALYSIS_PROMPT_TEMPLATE, &TREND_SECTIONS));
    }

    #[test]
    fn test_analysis_template_forbids_invented_listings() {
        assert!(JOB_ANALYSIS_PROMPT_TEMPLATE.contains("DO NOT create new job listings"));
        assert!(JOB_ANALYSIS_PROMPT_TEMPLATE.contains("select 5-6 jobs"));
    }
}
