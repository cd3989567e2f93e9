use serde::{Deserialize, Serialize};

pub mod report_v1;

pub use report_v1::ReportV1;

/// Tool information for wire-level schemas (schema-exact).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfoV1 {
    pub name: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,
}
