use serde::Deserialize;

/// Body the automation runner posts to every action route
#[derive(Debug, Deserialize)]
pub struct ActionRequest<T> {
    pub payload: ActionPayload<T>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionPayload<T> {
    pub input_fields: T,
    /// Where trigger callbacks for this recipe go
    #[serde(default)]
    pub webhook_url: Option<String>,
}
