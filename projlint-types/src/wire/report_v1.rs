use serde::{Deserialize, Serialize};

use crate::report::{ProjlintReport, ReportCapabilities, ReportRunInfo, ReportVerdict};
use crate::result::RuleResult;
use crate::wire::ToolInfoV1;

/// Schema-exact wire representation of projlint.report.v1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportV1 {
    pub schema: String,
    pub tool: ToolInfoV1,
    pub run: ReportRunInfo,
    pub root: String,
    pub verdict: ReportVerdict,

    #[serde(default)]
    pub results: Vec<RuleResult>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<ReportCapabilities>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl From<&ProjlintReport> for ReportV1 {
    fn from(report: &ProjlintReport) -> Self {
        Self {
            schema: report.schema.clone(),
            tool: ToolInfoV1 {
                name: report.tool.name.clone(),
                version: report.tool.version.clone(),
                commit: report.tool.commit.clone(),
            },
            run: report.run.clone(),
            root: report.root.clone(),
            verdict: report.verdict.clone(),
            results: report.results.clone(),
            capabilities: report.capabilities.clone(),
            data: report.data.clone(),
        }
    }
}
