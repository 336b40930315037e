use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Comparison payload consumed once at startup.
    #[serde(default = "default_data_path")]
    pub data_path: String,
    #[serde(default = "default_export_dir")]
    pub export_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            data_path: default_data_path(),
            export_dir: default_export_dir(),
        }
    }
}

/// Per-chart display properties. Unit conversion (`to_seconds`) belongs to
/// the chart, not the metric: the same raw value may render converted on
/// one chart and raw on another.
#[derive(Debug, Deserialize, Clone)]
pub struct ChartsConfig {
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    #[serde(default)]
    pub average: AverageChartConfig,
    #[serde(default)]
    pub error: ErrorChartConfig,
    #[serde(default)]
    pub rag: RagChartConfig,
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            average: AverageChartConfig::default(),
            error: ErrorChartConfig::default(),
            rag: RagChartConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AverageChartConfig {
    pub title: String,
    pub to_seconds: bool,
}

impl Default for AverageChartConfig {
    fn default() -> Self {
        Self {
            title: "Avg Response Time (s)".to_string(),
            to_seconds: true,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ErrorChartConfig {
    pub title: String,
    pub metric: String,
    pub to_seconds: bool,
}

impl Default for ErrorChartConfig {
    fn default() -> Self {
        Self {
            title: "Error Percentage (%)".to_string(),
            metric: "Error %".to_string(),
            to_seconds: false,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct RagChartConfig {
    pub title_prefix: String,
}

impl Default for RagChartConfig {
    fn default() -> Self {
        Self {
            title_prefix: "RAG Drift:".to_string(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_data_path() -> String {
    "data/comparison.json".to_string()
}

fn default_export_dir() -> String {
    "exports".to_string()
}

fn default_tick_ms() -> u64 {
    1500
}

pub fn load_server_config() -> anyhow::Result<ServerConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/server").required(false))
        .build()?;

    Ok(settings.try_deserialize()?)
}

pub fn load_charts_config() -> anyhow::Result<ChartsConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/charts").required(false))
        .build()?;

    Ok(settings.try_deserialize()?)
}
