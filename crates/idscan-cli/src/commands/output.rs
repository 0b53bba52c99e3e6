//! Record formatting and configuration loading shared by the commands.

use std::path::{Path, PathBuf};

use tracing::debug;

use idscan_core::models::config::{IdscanConfig, OutputConfig};
use idscan_core::DocumentRecord;

use super::config::default_config_path;

/// Image extensions the OCR engine accepts.
pub const IMAGE_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "webp", "tiff", "tif", "bmp"];

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output (header plus one row)
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    /// File extension for outputs written in this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

/// Load the configuration from `config_path`, else from the user config
/// file when it exists, else the defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<IdscanConfig> {
    if let Some(path) = config_path {
        return Ok(IdscanConfig::from_file(Path::new(path))?);
    }

    let default_path = default_config_path();
    if default_path.exists() {
        debug!("Using configuration from {}", default_path.display());
        return Ok(IdscanConfig::from_file(&default_path)?);
    }

    Ok(IdscanConfig::default())
}

/// Whether `path` has one of the accepted image extensions.
pub fn is_image(path: &Path) -> bool {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    IMAGE_EXTENSIONS.contains(&extension.as_str())
}

/// Output path for `input` inside `output_dir`, named after the input stem.
pub fn output_path_for(input: &Path, output_dir: &Path, format: OutputFormat) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("document");

    output_dir.join(format!("{}.{}", stem, format.extension()))
}

pub fn format_record(
    record: &DocumentRecord,
    format: OutputFormat,
    output: &OutputConfig,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => format_json(record, output),
        OutputFormat::Csv => format_csv(record),
        OutputFormat::Text => Ok(format_text(record)),
    }
}

fn format_json(record: &DocumentRecord, output: &OutputConfig) -> anyhow::Result<String> {
    let mut json = serde_json::to_value(record)?;

    if !output.include_raw_text {
        if let Some(obj) = json.as_object_mut() {
            obj.remove("rawText");
        }
    }

    let data = if output.pretty {
        serde_json::to_string_pretty(&json)?
    } else {
        serde_json::to_string(&json)?
    };

    Ok(data)
}

fn format_csv(record: &DocumentRecord) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    let fields = record.fields();

    let mut header = vec!["documentType"];
    header.extend(fields.iter().map(|(name, _)| *name));
    header.push("confidence");
    wtr.write_record(&header)?;

    let confidence = format!("{:.2}", record.confidence());
    let mut row = vec![record.kind().as_str()];
    row.extend(fields.iter().map(|(_, value)| value.unwrap_or("")));
    row.push(&confidence);
    wtr.write_record(&row)?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(record: &DocumentRecord) -> String {
    let fields = record.fields();
    let width = fields.iter().map(|(name, _)| name.len()).max().unwrap_or(0);

    let mut output = String::new();
    output.push_str(&format!("Document: {}\n", record.kind()));
    output.push_str(&format!("Confidence: {:.1}%\n", record.confidence()));
    output.push('\n');

    for &(name, value) in &fields {
        // keep multi-line values (the MRZ) aligned under their label
        let value = value
            .unwrap_or("-")
            .replace('\n', &format!("\n  {:width$}  ", ""));
        output.push_str(&format!("  {:width$}  {}\n", name, value));
    }

    output.push_str(&format!(
        "\n{}/{} fields found\n",
        record.found_count(),
        fields.len()
    ));

    output
}
