use crate::config::templates;
use anyhow::{anyhow, Result};
use clap::{ArgMatches, Command};
use std::fmt;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

pub const DEFAULT_INDEX_FILE: &str = "Job_Company_Filter_INDEX.txt";

#[derive(Debug, Clone)]
pub struct Config {
    pub variant: Variant,
    pub index_path: PathBuf,
    pub output_dir: PathBuf,
    pub log_level: LevelFilter,
}

/// How company names are substituted into a site's templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// One output line per company and template, name inserted verbatim.
    Literal,
    /// One output line per template, all names folded into an escaped alternation.
    Regex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Site {
    Linkedin,
    Indeed,
    ZipRecruiter,
    Glassdoor,
    GoogleJobs,
}

impl Variant {
    pub fn sites(&self) -> &'static [Site] {
        match self {
            Self::Literal => &[Site::Linkedin, Site::Indeed, Site::ZipRecruiter, Site::Glassdoor],
            Self::Regex => &[
                Site::Linkedin,
                Site::Indeed,
                Site::ZipRecruiter,
                Site::Glassdoor,
                Site::GoogleJobs,
            ],
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Literal => "[Company]",
            Self::Regex => "{pattern}",
        }
    }

    /// Templates for `site`, or `None` when this variant does not cover it.
    pub fn templates(&self, site: Site) -> Option<&'static [&'static str]> {
        match self {
            Self::Literal => templates::literal(site),
            Self::Regex => Some(templates::regex(site)),
        }
    }
}

impl Site {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Linkedin => "Linkedin",
            Self::Indeed => "Indeed",
            Self::ZipRecruiter => "ZipRecruiter",
            Self::Glassdoor => "Glassdoor",
            Self::GoogleJobs => "GoogleJobs",
        }
    }

    pub fn output_file_name(&self) -> String {
        format!("{}_Company_Filter_List.txt", self.name())
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Command-line definition read by [`Config::from_matches`].
pub fn cli() -> Command {
    Command::new("jobsite-filtergen")
        .about("Maintain a company index and generate job-site content filter lists from it")
        .arg(clap::arg!(-l --literal "Write one filter per company and template").conflicts_with("regex"))
        .arg(clap::arg!(-r --regex "Write one filter per template using a combined regex (default)").conflicts_with("literal"))
        .arg(clap::arg!(-i --index <INDEX> "Path to the company index file").default_value(DEFAULT_INDEX_FILE))
        .arg(clap::arg!(-o --output <DIR> "Directory for generated filter lists").default_value("."))
        .arg(clap::arg!(-v --verbose "Show debug diagnostics on stderr").conflicts_with("quiet"))
        .arg(clap::arg!(-q --quiet "Only show errors on stderr"))
}

impl Config {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let variant = if matches.get_flag("literal") {
            Variant::Literal
        } else {
            Variant::Regex
        };

        let index_path = matches
            .get_one::<String>("index")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INDEX_FILE));

        let output_dir = matches
            .get_one::<String>("output")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        let log_level = if matches.get_flag("quiet") {
            LevelFilter::ERROR
        } else if matches.get_flag("verbose") {
            LevelFilter::DEBUG
        } else {
            LevelFilter::WARN
        };

        if !output_dir.is_dir() {
            return Err(anyhow!("Output directory does not exist: {:?}", output_dir));
        }
        Ok(Self {
            variant,
            index_path,
            output_dir,
            log_level,
        })
    }

    pub fn output_path(&self, site: Site) -> PathBuf {
        self.output_dir.join(site.output_file_name())
    }
}
