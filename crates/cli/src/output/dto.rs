use dns_notify_domain::NotifyResult;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct NotifyResultDto {
    pub server: String,
    pub result: String,
    pub error: bool,
}

impl From<&NotifyResult> for NotifyResultDto {
    fn from(result: &NotifyResult) -> Self {
        Self {
            server: result.server().to_string(),
            result: result.message().to_string(),
            error: result.is_error(),
        }
    }
}

/// Envelope for `--json` output. `error` is set when the dispatch itself was
/// rejected, in which case `result` is empty.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct NotifyResponseDto {
    pub error: String,
    pub result: Vec<NotifyResultDto>,
}

impl NotifyResponseDto {
    pub fn from_results(results: &[NotifyResult]) -> Self {
        Self {
            error: String::new(),
            result: results.iter().map(NotifyResultDto::from).collect(),
        }
    }

    pub fn from_error(error: impl ToString) -> Self {
        Self {
            error: error.to_string(),
            result: Vec::new(),
        }
    }
}
