use crate::{CoreError, Result as CoreResult};

use std::collections::BTreeMap;
use std::panic::Location;

use error_location::ErrorLocation;
use serde::Deserialize;

/// Ordered label list of a status column, keyed by zero-based index.
///
/// Settings store labels either as an array or as an object keyed by the
/// stringified index (`{"0":"Working on it","1":"Done"}`); both are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusLabels {
    labels: BTreeMap<i64, String>,
}

#[derive(Deserialize)]
struct StatusSettings {
    #[serde(default)]
    labels: Option<RawLabels>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawLabels {
    List(Vec<Option<String>>),
    Keyed(BTreeMap<String, String>),
}

impl StatusLabels {
    pub fn from_list<S: AsRef<str>>(labels: &[S]) -> Self {
        Self {
            labels: labels
                .iter()
                .enumerate()
                .map(|(index, label)| (index as i64, label.as_ref().to_string()))
                .collect(),
        }
    }

    #[track_caller]
    pub fn from_settings(column_id: &str, settings_str: &str) -> CoreResult<Self> {
        let settings: StatusSettings =
            serde_json::from_str(settings_str).map_err(|e| CoreError::InvalidStatusSettings {
                column_id: column_id.to_string(),
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let labels = match settings.labels {
            Some(RawLabels::List(list)) => list
                .into_iter()
                .enumerate()
                .filter_map(|(index, label)| label.map(|label| (index as i64, label)))
                .collect(),
            Some(RawLabels::Keyed(keyed)) => {
                let mut labels = BTreeMap::new();
                for (key, label) in keyed {
                    let index = key.parse::<i64>().map_err(|_| CoreError::InvalidStatusSettings {
                        column_id: column_id.to_string(),
                        message: format!("label key '{}' is not an index", key),
                        location: ErrorLocation::from(Location::caller()),
                    })?;
                    labels.insert(index, label);
                }
                labels
            }
            None => {
                return Err(CoreError::InvalidStatusSettings {
                    column_id: column_id.to_string(),
                    message: "settings have no labels".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };

        Ok(Self { labels })
    }

    pub fn get(&self, index: i64) -> Option<&str> {
        self.labels.get(&index).map(String::as_str)
    }

    pub(crate) fn len(&self) -> usize {
        self.labels.len()
    }
}
