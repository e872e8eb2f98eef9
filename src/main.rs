//! Command-line entry point: reads a chart request, prints the analysis
//! report as JSON.

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;
use tracing::debug;

use auspire::application::{AnalyzeChartHandler, AnalyzeChartQuery};
use auspire::config::{AppConfig, ConfigError};
use auspire::domain::foundation::DomainError;

#[derive(Parser)]
#[command(name = "auspire")]
#[command(about = "Annotate a Four Pillars chart and print its five-stage analysis")]
#[command(version)]
struct Cli {
    /// Chart request file (.json, .yaml or .yml); reads JSON from stdin when omitted
    input: Option<PathBuf>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to read {path}: {source}")]
    Read { path: String, source: io::Error },

    #[error("Invalid chart request: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid chart request: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{0}")]
    Domain(#[from] DomainError),
}

/// Serialization format of a chart request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RequestFormat {
    Json,
    Yaml,
}

impl RequestFormat {
    /// YAML for `.yaml`/`.yml` (any case), JSON otherwise.
    fn from_path(path: &Path) -> Self {
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
            .unwrap_or(false);

        if is_yaml {
            RequestFormat::Yaml
        } else {
            RequestFormat::Json
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logging may not be installed yet, so failures go straight to stderr.
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("auspire: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = AppConfig::load()?;
    config.validate().map_err(ConfigError::from)?;
    config.logging.init()?;

    let query = match cli.input.as_deref() {
        Some(path) => read_query_file(path)?,
        None => read_query(io::stdin().lock(), "stdin", RequestFormat::Json)?,
    };
    debug!(name = %query.name, pillars = query.chart.pillars.len(), "Read chart request");

    let handler = AnalyzeChartHandler::new(config.report.options());
    let report = handler.handle(query)?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn read_query_file(path: &Path) -> Result<AnalyzeChartQuery, CliError> {
    let file = std::fs::File::open(path).map_err(|source| CliError::Read {
        path: path.display().to_string(),
        source,
    })?;
    read_query(file, &path.display().to_string(), RequestFormat::from_path(path))
}

fn read_query<R: Read>(
    mut reader: R,
    source_name: &str,
    format: RequestFormat,
) -> Result<AnalyzeChartQuery, CliError> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .map_err(|source| CliError::Read {
            path: source_name.to_string(),
            source,
        })?;

    match format {
        RequestFormat::Json => Ok(serde_json::from_str(&content)?),
        RequestFormat::Yaml => Ok(serde_yaml::from_str(&content)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    const JSON_REQUEST: &str = r#"{
        "name": "张三",
        "pillars": [
            { "role": "year", "stem": "甲", "branch": "子" },
            { "role": "month", "stem": "丙", "branch": "寅" },
            { "role": "day", "stem": "甲", "branch": "午" },
            { "role": "hour", "stem": "庚", "branch": "午" }
        ]
    }"#;

    const YAML_REQUEST: &str = "\
name: 李四
pillars:
  - { role: year, stem: 甲, branch: 子 }
  - { role: month, stem: 丙, branch: 寅 }
  - { role: day, stem: 甲, branch: 午 }
  - { role: hour, stem: 庚, branch: 午 }
";

    fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn cli_accepts_optional_input_path() {
        let cli = Cli::try_parse_from(["auspire", "chart.yaml"]).unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("chart.yaml")));

        let cli = Cli::try_parse_from(["auspire"]).unwrap();
        assert!(cli.input.is_none());
    }

    #[test]
    fn cli_rejects_extra_arguments() {
        assert!(Cli::try_parse_from(["auspire", "a.json", "extra"]).is_err());
    }

    #[test]
    fn cli_help_is_not_treated_as_a_path() {
        let err = Cli::try_parse_from(["auspire", "--help"]).err().unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(RequestFormat::from_path(Path::new("a.yaml")), RequestFormat::Yaml);
        assert_eq!(RequestFormat::from_path(Path::new("a.YML")), RequestFormat::Yaml);
        assert_eq!(RequestFormat::from_path(Path::new("a.json")), RequestFormat::Json);
        assert_eq!(RequestFormat::from_path(Path::new("chart")), RequestFormat::Json);
    }

    #[test]
    fn reads_yaml_file_by_extension() {
        let file = write_temp(".yml", YAML_REQUEST);
        let query = read_query_file(file.path()).unwrap();
        assert_eq!(query.name, "李四");
        assert_eq!(query.chart.pillars.len(), 4);
    }

    #[test]
    fn reads_json_file_by_extension() {
        let file = write_temp(".json", JSON_REQUEST);
        let query = read_query_file(file.path()).unwrap();
        assert_eq!(query.name, "张三");
    }

    #[test]
    fn yaml_content_in_json_file_is_a_json_error() {
        let file = write_temp(".json", YAML_REQUEST);
        assert!(matches!(read_query_file(file.path()), Err(CliError::Json(_))));
    }

    #[test]
    fn malformed_yaml_is_a_yaml_error() {
        let file = write_temp(".yaml", "name: [unclosed");
        assert!(matches!(read_query_file(file.path()), Err(CliError::Yaml(_))));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let err = read_query_file(&path).err().unwrap();
        assert!(matches!(err, CliError::Read { .. }));
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn reads_json_from_a_reader() {
        let query = read_query(Cursor::new(JSON_REQUEST), "stdin", RequestFormat::Json).unwrap();
        assert_eq!(query.name, "张三");
    }

    #[test]
    fn malformed_chart_surfaces_as_domain_error() {
        let request = r#"{ "pillars": [ { "role": "year", "stem": "甲", "branch": "子" } ] }"#;
        let query = read_query(Cursor::new(request), "stdin", RequestFormat::Json).unwrap();

        let err: CliError = AnalyzeChartHandler::default().handle(query).unwrap_err().into();
        assert!(matches!(err, CliError::Domain(_)));
        assert!(err.to_string().contains("MALFORMED_CHART"));
    }
}
