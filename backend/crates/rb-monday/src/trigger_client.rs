use crate::{ClientResult, TriggerOutput};

use std::time::Duration;

use log::debug;
use reqwest::Client as ReqwestClient;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TriggerBody<'a> {
    trigger: TriggerFields<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TriggerFields<'a> {
    output_fields: &'a TriggerOutput,
}

/// Fires recipe triggers through the webhook URL the platform handed out
/// on subscription.
pub struct TriggerClient {
    signing_secret: String,
    client: ReqwestClient,
}

impl TriggerClient {
    pub fn new(signing_secret: &str, timeout: Duration) -> ClientResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            signing_secret: signing_secret.to_string(),
            client,
        })
    }

    /// POST `{"trigger":{"outputFields":{..}}}` to `webhook_url`
    pub async fn fire(&self, webhook_url: &str, output: &TriggerOutput) -> ClientResult<()> {
        let body = TriggerBody {
            trigger: TriggerFields {
                output_fields: output,
            },
        };

        debug!("Firing trigger at {} with {:?}", webhook_url, output);

        self.client
            .post(webhook_url)
            .header("Authorization", &self.signing_secret)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}
