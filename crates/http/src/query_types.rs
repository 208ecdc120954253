//! Request/query types

#[derive(Debug, Default)]
pub struct PredictQuery {
    pub region: Option<String>,
}

impl PredictQuery {
    /// Builds the query from raw pairs; a repeated key keeps its first value.
    pub fn from_params(params: Vec<(String, String)>) -> Self {
        let region = params.into_iter().find(|(key, _)| key == "region").map(|(_, value)| value);
        Self { region }
    }
}
