use serde_json::{json, Value};

use crate::error::TaskdeckError;
use crate::models::TaskRecord;

pub fn success(data: Value) -> Value {
    json!({
        "success": true,
        "data": data
    })
}

pub fn error(err: &TaskdeckError) -> Value {
    json!({
        "success": false,
        "error": {
            "code": err.code().as_str(),
            "message": err.to_string()
        }
    })
}

pub fn task_json(t: &TaskRecord) -> Value {
    json!({
        "id": t.id,
        "name": t.name,
        "description": t.description,
        "status": t.status.as_str(),
        "priority": t.priority.as_str(),
        "createdAt": t.created_at
    })
}

pub fn task_list_json(tasks: &[TaskRecord]) -> Value {
    json!({
        "tasks": tasks.iter().map(task_json).collect::<Vec<_>>(),
        "count": tasks.len()
    })
}

/// Pretty JSON for stdout. `Value` serialization cannot fail.
pub fn to_pretty(v: &Value) -> String {
    serde_json::to_string_pretty(v).unwrap_or_else(|_| v.to_string())
}
