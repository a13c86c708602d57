use crate::adapters::InputFormat;
use crate::config::toml_config::TomlConfig;
use crate::config::Settings;
use crate::core::{ColumnConfig, ColumnSet};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "column-render")]
#[command(about = "Render one supported column from every row of a CSV or JSON file")]
pub struct CliConfig {
    /// Input file (CSV, TSV or JSON)
    #[arg(short, long)]
    pub input: String,

    /// Column to render
    #[arg(short, long)]
    pub column: String,

    /// Input format; inferred from the file extension when omitted
    #[arg(long)]
    pub format: Option<String>,

    /// Optional TOML configuration file
    #[arg(long)]
    pub config: Option<String>,

    /// Override the supported column set
    #[arg(long, value_delimiter = ',')]
    pub columns: Vec<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    /// 合併命令列與 TOML 檔：命令列優先，其次檔案，最後使用預設值
    pub fn resolve(&self) -> Result<Settings> {
        self.validate()?;

        let file = match &self.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                Some(file)
            }
            None => None,
        };

        let columns = if !self.columns.is_empty() {
            self.supported_columns()?
        } else if let Some(file) = &file {
            file.supported_columns()?
        } else {
            ColumnSet::default()
        };

        let input = PathBuf::from(&self.input);
        let format = match &self.format {
            Some(name) => InputFormat::parse(name)?,
            None => match file.as_ref().map(TomlConfig::input_format).transpose()?.flatten() {
                Some(format) => format,
                None => InputFormat::from_path(&input),
            },
        };
        let delimiter = file.as_ref().map(TomlConfig::delimiter).transpose()?.flatten();

        tracing::debug!(
            "Resolved settings: format={:?}, columns={:?}",
            format,
            columns.iter().collect::<Vec<_>>()
        );

        Ok(Settings {
            input,
            column: self.column.clone(),
            format,
            delimiter,
            columns,
        })
    }
}

impl ColumnConfig for CliConfig {
    fn supported_columns(&self) -> Result<ColumnSet> {
        ColumnSet::new(self.columns.iter().map(|c| c.trim().to_string()))
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input", &self.input)?;
        validation::validate_non_empty_string("column", &self.column)?;
        if let Some(path) = &self.config {
            validation::validate_path("config", path)?;
        }
        if !self.columns.is_empty() {
            validation::validate_column_names("columns", &self.columns)?;
        }
        Ok(())
    }
}
