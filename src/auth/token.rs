use std::collections::{HashMap, HashSet};

use jsonwebtoken::{DecodingKey, Validation, decode};
use serde_json::Value;

/// Reads the user id out of a JWT issued by the backend.
///
/// The signature is not checked. Returns `None` for opaque tokens.
pub fn user_id_from_token(token: &str) -> Option<u64> {
    let mut validation = Validation::default();
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims = HashSet::new();

    let claims = decode::<HashMap<String, Value>>(token, &DecodingKey::from_secret(&[]), &validation)
        .ok()?
        .claims;

    ["userId", "user_id", "id", "employeeId", "employee_id", "sub"]
        .iter()
        .filter_map(|key| claims.get(*key))
        .find_map(as_id)
}

fn as_id(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}
