use crate::error::TaskdeckError;
use crate::models::Sheet;
use crate::store::endpoint::Endpoint;

pub fn list_sheets(endpoint: &Endpoint) -> Result<Vec<Sheet>, TaskdeckError> {
    let payload = endpoint.get_json("getSheets", &[])?;
    if payload.is_null() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_value(payload)?)
}

pub fn create_sheet(endpoint: &Endpoint, name: &str) -> Result<(), TaskdeckError> {
    endpoint.post_form(&[("action", "createSheet"), ("sheetName", name)])
}
