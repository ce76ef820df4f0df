use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An employee record. Request bodies may omit any field; `id` is assigned
/// by the store and whatever the client sent in it is discarded.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Employee {
    pub id: i32,
    pub name: String,
    pub gender: String,
    pub hire_year: i32,
    pub address: String,
    pub department: String,
    pub others: String,
    #[serde(with = "image_base64")]
    pub image: Vec<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    // Stored in plaintext and compared verbatim on login. Never echoed back.
    #[serde(skip_serializing)]
    pub password: Option<String>,
}

impl Employee {
    pub fn with_id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Credentials left out of an update body keep their stored values,
    /// since `password` is never sent to clients to be echoed back.
    pub fn keep_credentials_from(mut self, stored: &Employee) -> Self {
        if self.email.is_none() {
            self.email = stored.email.clone();
        }
        if self.password.is_none() {
            self.password = stored.password.clone();
        }
        self
    }
}

/// Row shape of the `employee` table, nullable columns included.
#[derive(sqlx::FromRow, Debug)]
pub struct EmployeeRow {
    pub id: i32,
    pub name: Option<String>,
    pub gender: Option<String>,
    pub hire_year: Option<i32>,
    pub address: Option<String>,
    pub department: Option<String>,
    pub others: Option<String>,
    pub image: Option<Vec<u8>>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Employee {
            id: row.id,
            name: row.name.unwrap_or_default(),
            gender: row.gender.unwrap_or_default(),
            hire_year: row.hire_year.unwrap_or_default(),
            address: row.address.unwrap_or_default(),
            department: row.department.unwrap_or_default(),
            others: row.others.unwrap_or_default(),
            image: row.image.unwrap_or_default(),
            email: row.email,
            password: row.password,
        }
    }
}

/// Binary image data travels as a standard base64 string, `null` when empty.
mod image_base64 {
    use super::*;

    pub fn serialize<S: Serializer>(image: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        if image.is_empty() {
            serializer.serialize_none()
        } else {
            serializer.serialize_str(&STANDARD.encode(image))
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(encoded) => STANDARD
                .decode(encoded.as_bytes())
                .map_err(serde::de::Error::custom),
            None => Ok(Vec::new()),
        }
    }
}
