use serde::{Deserialize, Serialize};

use crate::article::SectionResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateArticleResponse {
    pub result: Vec<SectionResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
