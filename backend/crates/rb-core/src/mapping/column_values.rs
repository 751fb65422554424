use chrono::{Datelike, NaiveDate, Utc};
use serde_json::{Value, json};

/// Date column value for the first day of `today`'s month
pub fn month_start_value(today: NaiveDate) -> Value {
    json!({
        "date": format!("{:04}-{:02}-01", today.year(), today.month()),
    })
}

/// [`month_start_value`] for the current UTC date
pub fn current_month_start_value() -> Value {
    month_start_value(Utc::now().date_naive())
}

/// People column value assigning a single user
pub fn person_assignment_value(user_id: i64) -> Value {
    json!({
        "personsAndTeams": [
            { "id": user_id, "kind": "person" }
        ],
    })
}
