//! Per-site filter templates.
//!
//! Literal templates carry `[Company]` and are expanded once per company.
//! Regex templates carry `{pattern}` and are expanded once with the combined
//! alternation. Lines without a placeholder (comments starting with `!`,
//! blank separators, fixed rules) are written as-is.

use crate::config::Site;

const LITERAL_LINKEDIN: &[&str] = &[
    "linkedin.com##li.job-card:has(span.job-card-container__primary-description:has-text(/[Company]/i))",
];

const LITERAL_INDEED: &[&str] = &[
    r#"indeed.com##li:has(span[data-testid="company-name"]:has-text(/[Company]/i))"#,
];

const LITERAL_ZIPRECRUITER: &[&str] = &[
    r#"ziprecruiter.com##.job_content:has(a[href*="[Company]" i])"#,
    r#"ziprecruiter.com##.company:has(a[href*="[Company]" i])"#,
];

const LITERAL_GLASSDOOR: &[&str] = &[
    r#"glassdoor.com##.jobListing:has(a[href*="[Company]" i])"#,
    r#"glassdoor.com##.companyInfo:has(a[href*="[Company]" i])"#,
];

const REGEX_LINKEDIN: &[&str] = &[
    "! Linkedin Company Search Feed",
    "linkedin.com##li.reusable-search__result-container:has(div.entity-result__primary-subtitle:has-text(/({pattern})/i))",
    "",
    "! Linkedin Job Feed",
    "linkedin.com##li.ember-view.jobs-search-results__list-item:has(span.job-card-container__primary-description:has-text(/({pattern})/i))",
    "",
    "! Linkedin Filter-Out: Removed from job feed (Removed, Applied)",
    "linkedin.com##li.ember-view.jobs-search-results__list-item:has(div.artdeco-entity-lockup__caption:has(span:has-text(We won\u{2019}t show you this job again)))",
    "linkedin.com##li.ember-view.jobs-search-results__list-item:has(ul.job-card-list__footer-wrapper:has(li.job-card-container__footer-job-state:has-text(Applied)))",
];

const REGEX_INDEED: &[&str] = &[
    "! Indeed Job Search Feed",
    r#"indeed.com##li:has(span[data-testid="company-name"]:has-text(/({pattern})/i))"#,
    "",
];

const REGEX_ZIPRECRUITER: &[&str] = &[
    r#"ziprecruiter.com##.job_content:has(a[href*="/{pattern}/"])"#,
    r#"ziprecruiter.com##.company:has(a[href*="/{pattern}/"])"#,
];

const REGEX_GLASSDOOR: &[&str] = &[
    r#"glassdoor.com##.jobListing:has(a[href*="/{pattern}/"])"#,
    r#"glassdoor.com##.companyInfo:has(a[href*="/{pattern}/"])"#,
];

const REGEX_GOOGLE_JOBS: &[&str] = &[
    "! Block job listings for multiple companies on Google Jobs",
    "google.com##li.iFjolb.gws-plugins-horizon-jobs__li-ed:has-text((/({pattern})/i))",
    "",
];

pub fn literal(site: Site) -> Option<&'static [&'static str]> {
    match site {
        Site::Linkedin => Some(LITERAL_LINKEDIN),
        Site::Indeed => Some(LITERAL_INDEED),
        Site::ZipRecruiter => Some(LITERAL_ZIPRECRUITER),
        Site::Glassdoor => Some(LITERAL_GLASSDOOR),
        Site::GoogleJobs => None,
    }
}

pub fn regex(site: Site) -> &'static [&'static str] {
    match site {
        Site::Linkedin => REGEX_LINKEDIN,
        Site::Indeed => REGEX_INDEED,
        Site::ZipRecruiter => REGEX_ZIPRECRUITER,
        Site::Glassdoor => REGEX_GLASSDOOR,
        Site::GoogleJobs => REGEX_GOOGLE_JOBS,
    }
}
