use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of a new comment. The author is passed separately.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewComment {
    pub text: String,
    #[serde(default)]
    pub parent_id: Option<Uuid>,
}
