use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Header {
    pub names: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub fields: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    pub header: Header,
    pub rows: Vec<Record>,
}

#[derive(Debug, Clone)]
pub struct OutputItem {
    pub fields: Vec<(String, String)>,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub items: Vec<OutputItem>,
    pub yaml_output: String,
}
