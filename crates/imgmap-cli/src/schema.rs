//! JSON Schemas for the regions file and report records.

use schemars::schema_for;
use serde_json::Value;

use imgmap_models::{RegionSet, Report};

/// Schemas keyed by document kind: `regions_file` and `report`.
pub fn schema_document() -> serde_json::Result<Value> {
    Ok(serde_json::json!({
        "regions_file": serde_json::to_value(schema_for!(RegionSet))?,
        "report": serde_json::to_value(schema_for!(Report))?,
    }))
}
