use chrono::NaiveDate;
use rusqlite::Row;
use serde::{Deserialize, Deserializer, Serialize};

use super::FromSqliteRow;

/// Deserialize an optional text field from a form or JSON body.
/// JSON numbers are accepted and kept as their textual form; empty
/// strings become None.
fn deserialize_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Text {
        Str(String),
        Int(i64),
        Float(f64),
    }

    let opt: Option<Text> = Option::deserialize(deserializer)?;
    Ok(match opt {
        Some(Text::Str(s)) if s.trim().is_empty() => None,
        Some(Text::Str(s)) => Some(s),
        Some(Text::Int(n)) => Some(n.to_string()),
        Some(Text::Float(n)) => Some(n.to_string()),
        None => None,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    pub id: String,
    pub user_id: String,
    pub description: String,
    pub duration: i64,
    pub date: NaiveDate,
}

impl FromSqliteRow for Exercise {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            user_id: row.get("user_id")?,
            description: row.get("description")?,
            duration: row.get("duration")?,
            date: row.get("date")?,
        })
    }
}

/// Raw exercise fields as submitted; parsed by the exercise service.
#[derive(Debug, Default, Deserialize)]
pub struct CreateExercise {
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub duration: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub date: Option<String>,
}

/// Response to a successful exercise submission. `id` is the owning user's id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExerciseReceipt {
    pub username: String,
    pub description: String,
    pub duration: i64,
    pub date: String,
    #[serde(rename = "_id")]
    pub id: String,
}

/// Raw `from`/`to`/`limit` query parameters of the log endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct LogParams {
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub from: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub to: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub limit: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    pub description: String,
    pub duration: i64,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExerciseLog {
    pub username: String,
    pub count: usize,
    #[serde(rename = "_id")]
    pub id: String,
    pub log: Vec<LogEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_exercise_from_json_number() {
        let form: CreateExercise =
            serde_json::from_str(r#"{"description":"run","duration":30}"#).unwrap();

        assert_eq!(form.description.as_deref(), Some("run"));
        assert_eq!(form.duration.as_deref(), Some("30"));
        assert!(form.date.is_none());
    }

    #[test]
    fn test_create_exercise_blank_fields_are_none() {
        let form: CreateExercise =
            serde_json::from_str(r#"{"description":"  ","duration":"","date":""}"#).unwrap();

        assert!(form.description.is_none());
        assert!(form.duration.is_none());
        assert!(form.date.is_none());
    }

    #[test]
    fn test_exercise_log_field_names() {
        let log = ExerciseLog {
            username: "alice".to_string(),
            count: 1,
            id: "u1".to_string(),
            log: vec![LogEntry {
                description: "run".to_string(),
                duration: 30,
                date: "Sun Jan 15 2023".to_string(),
            }],
        };

        let json = serde_json::to_value(&log).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "username": "alice",
                "count": 1,
                "_id": "u1",
                "log": [{ "description": "run", "duration": 30, "date": "Sun Jan 15 2023" }]
            })
        );
    }
}
