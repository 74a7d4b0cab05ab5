//! Employee Model

use serde::{Deserialize, Serialize};

/// Employee record as persisted and returned by the API
///
/// `id` is assigned by the record store on creation and is empty for a
/// record that has not been created yet. `Default` yields the blank form
/// record (empty strings, zero salary).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub position: String,
    pub office: String,
    pub salary: f64,
}

impl Employee {
    /// Build a persisted record from a store-assigned id and its fields
    pub fn from_new(id: impl Into<String>, data: NewEmployee) -> Self {
        Self {
            id: id.into(),
            name: data.name,
            position: data.position,
            office: data.office,
            salary: data.salary,
        }
    }

    /// Whether the record already exists in the store
    pub fn is_persisted(&self) -> bool {
        !self.id.is_empty()
    }
}

/// Create employee payload
///
/// Clients may send the blank form record, so `id` is accepted but never
/// trusted: see [`EmployeeCreate::into_new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeCreate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub position: String,
    pub office: String,
    pub salary: f64,
}

impl EmployeeCreate {
    /// Non-empty id supplied by the caller, if any
    pub fn supplied_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    /// Drop the caller's id, leaving only the fields the store persists
    pub fn into_new(self) -> NewEmployee {
        NewEmployee {
            name: self.name,
            position: self.position,
            office: self.office,
            salary: self.salary,
        }
    }
}

/// Employee fields handed to the record store for insertion (no id)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEmployee {
    pub name: String,
    pub position: String,
    pub office: String,
    pub salary: f64,
}

/// Update employee payload (merge-document)
///
/// Only the keys present in the request survive: absent and `null` keys
/// deserialize to `None` and are skipped on serialization, so the store
/// never sees placeholders for omitted fields. Unknown keys (including
/// `id`) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub office: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
}

impl EmployeeUpdate {
    /// Names of the keys carried by this merge-document
    pub fn keys(&self) -> Vec<&'static str> {
        let mut keys = Vec::new();
        if self.name.is_some() {
            keys.push("name");
        }
        if self.position.is_some() {
            keys.push("position");
        }
        if self.office.is_some() {
            keys.push("office");
        }
        if self.salary.is_some() {
            keys.push("salary");
        }
        keys
    }

    /// Merge the present keys into `target`, leaving the others untouched
    pub fn apply_to(&self, target: &mut Employee) {
        if let Some(name) = &self.name {
            target.name = name.clone();
        }
        if let Some(position) = &self.position {
            target.position = position.clone();
        }
        if let Some(office) = &self.office {
            target.office = office.clone();
        }
        if let Some(salary) = self.salary {
            target.salary = salary;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_is_blank_form_record() {
        let e = Employee::default();
        assert_eq!(e.id, "");
        assert_eq!(e.name, "");
        assert_eq!(e.salary, 0.0);
        assert!(!e.is_persisted());
    }

    #[test]
    fn test_create_ignores_empty_id() {
        let payload: EmployeeCreate = serde_json::from_value(json!({
            "id": "",
            "name": "Lina",
            "position": "Dev",
            "office": "HQ",
            "salary": 6000
        }))
        .unwrap();
        assert_eq!(payload.supplied_id(), None);

        let data = payload.into_new();
        assert_eq!(data.name, "Lina");
        assert_eq!(data.salary, 6000.0);
    }

    #[test]
    fn test_create_reports_supplied_id() {
        let payload: EmployeeCreate = serde_json::from_value(json!({
            "id": "abc",
            "name": "Lina",
            "position": "Dev",
            "office": "HQ",
            "salary": 1
        }))
        .unwrap();
        assert_eq!(payload.supplied_id(), Some("abc"));
    }

    #[test]
    fn test_create_requires_fields() {
        let result = serde_json::from_value::<EmployeeCreate>(json!({ "name": "Lina" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_partial_update_serializes_only_present_keys() {
        let patch: EmployeeUpdate = serde_json::from_value(json!({ "name": "X" })).unwrap();
        assert_eq!(patch.keys(), vec!["name"]);
        assert_eq!(serde_json::to_value(&patch).unwrap(), json!({ "name": "X" }));
    }

    #[test]
    fn test_update_drops_nulls_and_unknown_keys() {
        let patch: EmployeeUpdate = serde_json::from_value(json!({
            "id": "someone-else",
            "office": null,
            "salary": 10.5,
            "nickname": "Ace"
        }))
        .unwrap();
        assert_eq!(patch.keys(), vec!["salary"]);
        assert_eq!(serde_json::to_value(&patch).unwrap(), json!({ "salary": 10.5 }));
    }

    #[test]
    fn test_apply_leaves_missing_fields_untouched() {
        let mut e = Employee {
            id: "1".into(),
            name: "Ana".into(),
            position: "Dev".into(),
            office: "HQ".into(),
            salary: 1000.0,
        };
        let patch = EmployeeUpdate {
            name: Some("Ana2".into()),
            ..Default::default()
        };
        patch.apply_to(&mut e);

        assert_eq!(e.name, "Ana2");
        assert_eq!(e.position, "Dev");
        assert_eq!(e.office, "HQ");
        assert_eq!(e.salary, 1000.0);
        assert_eq!(e.id, "1");
    }
}
