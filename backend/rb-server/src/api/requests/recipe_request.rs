use serde::Deserialize;

/// Body of recipe lifecycle calls; these carry no input fields
#[derive(Debug, Deserialize)]
pub struct RecipeRequest {
    pub payload: RecipePayload,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipePayload {
    #[serde(default)]
    pub webhook_url: Option<String>,
}
