use serde::{Deserialize, Serialize};

/// A distributor as served by `GET /api/distributors`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distributor {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub whatsapp: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DistributorsResponse {
    #[serde(default)]
    pub distributors: Vec<Distributor>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_optional_contact_fields_absent() {
        let body = r#"{"distributors":[{"id":3,"name":"ABC Distributors"}]}"#;
        let parsed: DistributorsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.distributors.len(), 1);
        assert_eq!(parsed.distributors[0].name, "ABC Distributors");
        assert_eq!(parsed.distributors[0].email, None);
    }
}
