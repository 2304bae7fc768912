use serde_json::{json, Value};
use std::sync::LazyLock;

pub static CONFIG_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "additionalProperties": false,
        "properties": {
            "rates": {
                "type": "object",
                "properties": {
                    "compensation_rate": { "type": "number", "minimum": 0 },
                    "operational_cost_rate": { "type": "number", "minimum": 0 },
                    "insurance_multiplier": { "type": "number", "minimum": 0, "maximum": 1 }
                }
            },
            "columns": {
                "type": "object",
                "properties": {
                    "airline": { "type": "string" },
                    "delay": { "type": "string" },
                    "passengers": { "type": "string" }
                }
            },
            "validation": {
                "type": "object",
                "properties": {
                    "keywords": { "type": "array", "items": { "type": "string" }, "minItems": 1 }
                }
            },
            "cost_model": {
                "type": "object",
                "properties": {
                    "cost_per_minute": { "type": "number", "minimum": 0 },
                    "compensation_per_passenger": { "type": "number", "minimum": 0 }
                }
            },
            "output": {
                "type": "object",
                "properties": {
                    "report_path": { "type": "string" },
                    "chart_width": { "type": "integer", "minimum": 1 }
                }
            },
            "server": {
                "type": "object",
                "properties": {
                    "host": { "type": "string" },
                    "port": { "type": "integer", "minimum": 1, "maximum": 65535 },
                    "max_body_bytes": { "type": "integer", "minimum": 1 }
                }
            }
        }
    })
});
