//! Target site URLs for the two extraction calls.

/// Lowercases and swaps spaces for hyphens so the value can sit in a URL path.
pub fn url_token(value: &str) -> String {
    value.trim().to_lowercase().replace(' ', "-")
}

/// Job board search pages for a title and location.
pub fn job_board_urls(job_title: &str, location: &str) -> Vec<String> {
    let title = url_token(job_title);
    let location = url_token(location);

    vec![
        format!("https://www.naukri.com/{title}-jobs-in-{location}"),
        format!("https://www.indeed.com/jobs?q={title}&l={location}"),
        format!("https://www.monster.com/jobs/search/?q={title}&where={location}"),
    ]
}

/// Salary research pages for an industry category.
pub fn salary_site_urls(category: &str) -> Vec<String> {
    let category = category.trim();
    let payscale_job = category.replace(' ', "_");
    let glassdoor_slug = url_token(category);
    // Glassdoor's keyword-offset suffix is the length of the raw label.
    let keyword_len = category.chars().count();

    vec![
        format!("https://www.payscale.com/research/US/Job={payscale_job}/Salary"),
        format!(
            "https://www.glassdoor.com/Salaries/{glassdoor_slug}-salary-SRCH_KO0,{keyword_len}.htm"
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_token() {
        assert_eq!(url_token("Software Engineer"), "software-engineer");
        assert_eq!(url_token(" New York "), "new-york");
        assert_eq!(url_token("bangalore"), "bangalore");
    }

    #[test]
    fn test_job_urls_embed_normalized_tokens() {
        let urls = job_board_urls("Software Engineer", "Bangalore");
        assert_eq!(urls.len(), 3);
        for url in &urls {
            assert!(url.contains("software-engineer"), "{url}");
            assert!(url.contains("bangalore"), "{url}");
        }
        assert_eq!(
            urls[0],
            "https://www.naukri.com/software-engineer-jobs-in-bangalore"
        );
        assert_eq!(
            urls[1],
            "https://www.indeed.com/jobs?q=software-engineer&l=bangalore"
        );
        assert_eq!(
            urls[2],
            "https://www.monster.com/jobs/search/?q=software-engineer&where=bangalore"
        );
    }

    #[test]
    fn test_job_urls_are_deterministic() {
        assert_eq!(
            job_board_urls("Data Analyst", "Remote"),
            job_board_urls("Data Analyst", "Remote")
        );
    }

    #[test]
    fn test_salary_urls() {
        let urls = salary_site_urls("Data Science");
        assert_eq!(
            urls,
            vec![
                "https://www.payscale.com/research/US/Job=Data_Science/Salary".to_string(),
                "https://www.glassdoor.com/Salaries/data-science-salary-SRCH_KO0,12.htm"
                    .to_string(),
            ]
        );
    }
}
