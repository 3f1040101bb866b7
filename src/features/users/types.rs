use crate::features::EntityId;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt};
use tracing::debug;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmployeeStatus {
    Pending,
    Approved,
    Denied,
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub status: Option<EmployeeStatus>,
    #[serde(default)]
    pub permissions: BTreeMap<String, bool>,
    #[serde(default)]
    pub permissions_json: Option<String>,
}

impl Employee {
    #[must_use]
    pub fn is_approved(&self) -> bool {
        self.status == Some(EmployeeStatus::Approved)
    }

    /// Permissions from `permissionsJson` when it parses, else the inline map.
    #[must_use]
    pub fn effective_permissions(&self) -> BTreeMap<String, bool> {
        if let Some(raw) = self.permissions_json.as_deref().filter(|raw| !raw.is_empty()) {
            match serde_json::from_str(raw) {
                Ok(parsed) => return parsed,
                Err(err) => debug!("Ignoring unreadable permissionsJson: {err}"),
            }
        }
        self.permissions.clone()
    }
}

/// Body for `PUT /api/usuarios/configuracion`; unset fields are left out.
#[derive(Clone, Default, Serialize, PartialEq, Eq)]
pub struct ProfileSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl ProfileSettings {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.language.is_none()
            && self.notifications.is_none()
            && self.password.is_none()
    }
}

impl fmt::Debug for ProfileSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileSettings")
            .field("name", &self.name)
            .field("language", &self.language)
            .field("notifications", &self.notifications)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePicture {
    pub profile_picture: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn employee_reads_both_id_shapes_and_unknown_status() {
        let employees: Vec<Employee> = serde_json::from_value(json!([
            { "id": "u-1", "name": "Ana", "email": "ana@example.com", "status": "APPROVED" },
            { "id": 2, "name": "Luis", "email": "luis@example.com", "status": "SUSPENDED" }
        ]))
        .unwrap();

        assert!(employees[0].is_approved());
        assert_eq!(employees[1].id, EntityId::Number(2));
        assert_eq!(employees[1].status, Some(EmployeeStatus::Unknown));
    }

    #[test]
    fn permissions_json_wins_over_inline_map() {
        let employee: Employee = serde_json::from_value(json!({
            "id": 1,
            "name": "Ana",
            "email": "ana@example.com",
            "permissions": { "addProduct": false },
            "permissionsJson": "{\"addProduct\":true,\"deleteUser\":false}"
        }))
        .unwrap();

        let permissions = employee.effective_permissions();
        assert_eq!(permissions.get("addProduct"), Some(&true));
        assert_eq!(permissions.get("deleteUser"), Some(&false));
    }

    #[test]
    fn unreadable_permissions_json_falls_back() {
        let employee: Employee = serde_json::from_value(json!({
            "id": 1,
            "name": "Ana",
            "email": "ana@example.com",
            "permissions": { "viewProduct": true },
            "permissionsJson": "not json"
        }))
        .unwrap();

        assert_eq!(employee.effective_permissions().get("viewProduct"), Some(&true));
    }

    #[test]
    fn settings_skip_unset_fields_and_hide_password() {
        let settings = ProfileSettings {
            language: Some("es".to_string()),
            password: Some("hunter22".to_string()),
            ..ProfileSettings::default()
        };

        assert_eq!(
            serde_json::to_value(&settings).unwrap(),
            json!({ "language": "es", "password": "hunter22" })
        );
        assert!(!format!("{settings:?}").contains("hunter22"));
        assert!(ProfileSettings::default().is_empty());
    }
}
