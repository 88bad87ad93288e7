use serde::{Deserialize, Serialize};

// One profile document as read from the input directory. The payload is
// opaque: whatever JSON value the file contains is carried through unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub source: String,
    pub value: serde_json::Value,
}

#[derive(Debug, Clone)]
pub struct BuildResult {
    pub profiles: Vec<Profile>,
    pub json_output: String,
}
