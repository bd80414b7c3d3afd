//! Controller result and status records.

use serde::Serialize;
use tuxdroid_transport::TransportStatus;

/// Outcome of one controller action.
///
/// Always produced, never an error: transport failures surface as
/// `success: false` with the failure detail in `message`.
#[derive(Debug, Clone, Serialize)]
pub struct ActionResult {
    pub success: bool,
    /// Stable snake_case action name.
    pub action: &'static str,
    /// The parameters the action carried, as a JSON object.
    pub params: serde_json::Value,
    pub message: String,
}

impl ActionResult {
    pub fn is_success(&self) -> bool {
        self.success
    }
}

/// Transport status with the controller's own bookkeeping merged in.
#[derive(Debug, Clone, Serialize)]
pub struct ControllerStatus {
    #[serde(flatten)]
    pub transport: TransportStatus,
    /// Name of the most recent action attempted through this controller.
    pub last_action: Option<&'static str>,
}
