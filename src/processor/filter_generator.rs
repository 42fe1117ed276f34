use crate::config::{Site, Variant};
use crate::utils::regex_utils::alternation;
use anyhow::{anyhow, Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Expands the templates of `site` for `companies` using `variant`.
///
/// Literal output is company-major, template-minor. Regex output has exactly
/// one line per template.
pub fn generate_filters<S: AsRef<str>>(
    variant: Variant,
    site: Site,
    companies: &[S],
) -> Result<Vec<String>> {
    let templates = variant
        .templates(site)
        .ok_or_else(|| anyhow!("{} is not supported by the {:?} generator", site, variant))?;
    let placeholder = variant.placeholder();

    let filters: Vec<String> = match variant {
        Variant::Literal => companies
            .iter()
            .flat_map(|company| {
                templates
                    .iter()
                    .map(move |template| template.replacen(placeholder, company.as_ref(), 1))
            })
            .collect(),
        Variant::Regex => {
            let pattern = alternation(companies);
            templates
                .iter()
                .map(|template| template.replacen(placeholder, &pattern, 1))
                .collect()
        }
    };
    Ok(filters)
}

/// Overwrites `path` with one filter per line and returns the line count.
pub fn write_filter_list(path: &Path, filters: &[String]) -> Result<usize> {
    let file = File::create(path).with_context(|| format!("Failed to create {:?}", path))?;
    let mut writer = BufWriter::new(file);

    for filter in filters {
        writeln!(writer, "{}", filter)?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to write {:?}", path))?;

    info!(path = ?path, lines = filters.len(), "wrote filter list");
    Ok(filters.len())
}
