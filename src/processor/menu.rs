use crate::config::{Config, Site};
use crate::processor::filter_generator::{generate_filters, write_filter_list};
use crate::processor::index_manager::{read_companies, AddOutcome, FilterIndex};
use anyhow::Result;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, error, warn};

const QUIT: &str = ":q";
const DONE: &str = "done";

/// Result of one pass through the filter generation flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    MissingIndex,
    EmptyIndex,
    Cancelled,
    Written {
        site: Site,
        path: PathBuf,
        count: usize,
    },
}

/// Interactive session over an input/output pair. Holds all state the
/// menu loop needs so it can be driven from memory in tests.
pub struct Console<R, W> {
    config: Config,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(config: Config, input: R, output: W) -> Self {
        Self {
            config,
            input,
            output,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes `message` without a newline and reads one line of input.
    /// Returns `None` once input is exhausted.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Main menu loop. Returns when the operator quits or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "\nChoose an option (or type '{}' to quit):", QUIT)?;
            writeln!(self.output, "(1) Update 'Job Company Filter INDEX'")?;
            writeln!(self.output, "(2) Create a company filter list for Job Sites")?;

            let Some(choice) = self.prompt("Enter the number corresponding to your choice: ")?
            else {
                break;
            };
            let choice = choice.trim();
            if choice == QUIT {
                writeln!(self.output, "Exiting program.")?;
                break;
            }

            match choice.parse::<i64>() {
                Ok(1) => {
                    if let Err(e) = self.update_filter_index() {
                        error!(error = %e, "updating the filter index failed");
                        writeln!(self.output, "Error: {:#}", e)?;
                    }
                }
                Ok(2) => {
                    if let Err(e) = self.create_company_filter_list() {
                        error!(error = %e, "generating the filter list failed");
                        writeln!(self.output, "Error: {:#}", e)?;
                    }
                }
                Ok(_) => writeln!(self.output, "Invalid choice. Please enter 1 or 2.")?,
                Err(_) => writeln!(
                    self.output,
                    "Invalid input. Please enter a number or '{}' to quit.",
                    QUIT
                )?,
            }
        }
        Ok(())
    }

    /// Adds operator-supplied company names to the index until `done`.
    pub fn update_filter_index(&mut self) -> Result<()> {
        let index_path = self.config.index_path.clone();
        let (mut index, created) = FilterIndex::open_or_create(&index_path)?;
        if created {
            writeln!(self.output, "Created new {:?}.", index_path)?;
        }
        writeln!(self.output, "Updating {:?}...", index_path)?;

        loop {
            let Some(company) = self.prompt(&format!(
                "Enter a company to add to the filter (or type '{}' to finish): ",
                DONE
            ))?
            else {
                break;
            };
            if company.trim().eq_ignore_ascii_case(DONE) {
                break;
            }

            match index.add(&company)? {
                AddOutcome::Added(name) => {
                    writeln!(self.output, "Added '{}' to the filter list.", name)?
                }
                AddOutcome::Duplicate(name) => writeln!(
                    self.output,
                    "Company '{}' already exists in the filter list.",
                    name
                )?,
                AddOutcome::Blank => writeln!(self.output, "Please enter a company name.")?,
            }
        }

        debug!(entries = index.entry_count(), "finished updating filter index");
        Ok(())
    }

    /// Asks for a site and writes its filter list from the current index.
    pub fn create_company_filter_list(&mut self) -> Result<GenerateOutcome> {
        let index_path = self.config.index_path.clone();
        let Some(companies) = read_companies(&index_path)? else {
            warn!(path = ?index_path, "filter index not found");
            writeln!(
                self.output,
                "No {:?} file found. Please update the filter index first.",
                index_path
            )?;
            return Ok(GenerateOutcome::MissingIndex);
        };

        if companies.is_empty() {
            writeln!(
                self.output,
                "No companies found in {:?}. Please update the filter index first.",
                index_path
            )?;
            return Ok(GenerateOutcome::EmptyIndex);
        }

        let Some(site) = self.select_site()? else {
            return Ok(GenerateOutcome::Cancelled);
        };
        writeln!(self.output, "Generating company filter list for {}...", site)?;

        let filters = generate_filters(self.config.variant, site, &companies)?;
        let path = self.config.output_path(site);
        let count = write_filter_list(&path, &filters)?;
        writeln!(
            self.output,
            "Company filter list for {} saved to {:?} ({} filters).",
            site, path, count
        )?;
        Ok(GenerateOutcome::Written { site, path, count })
    }

    fn select_site(&mut self) -> Result<Option<Site>> {
        let sites = self.config.variant.sites();

        writeln!(
            self.output,
            "Which Job Site are you trying to generate a company filter list for?"
        )?;
        for (i, site) in sites.iter().enumerate() {
            writeln!(self.output, "({}) {}", i + 1, site)?;
        }

        loop {
            let Some(choice) = self.prompt(&format!(
                "Enter the number corresponding to the job site (or type '{}' to quit): ",
                DONE
            ))?
            else {
                return Ok(None);
            };
            let choice = choice.trim();
            if choice.eq_ignore_ascii_case(DONE) {
                return Ok(None);
            }

            match choice.parse::<i64>() {
                Ok(n) if n >= 1 && (n as usize) <= sites.len() => {
                    return Ok(Some(sites[n as usize - 1]));
                }
                Ok(_) => writeln!(
                    self.output,
                    "Invalid choice. Please enter a number between 1 and {} OR '{}'.",
                    sites.len(),
                    DONE
                )?,
                Err(_) => writeln!(
                    self.output,
                    "Invalid input. Please enter a number OR '{}'.",
                    DONE
                )?,
            }
        }
    }
}
