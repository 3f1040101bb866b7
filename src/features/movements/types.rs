use serde::{Deserialize, Serialize};

/// Movement type assumed when the backend leaves it out.
pub const DEFAULT_MOVEMENT_KIND: &str = "ENTRADA";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Movement {
    pub id: u64,
    #[serde(default)]
    pub fecha: Option<String>,
    #[serde(default)]
    pub nombre_usuario: Option<String>,
    #[serde(default)]
    pub nombre_producto: Option<String>,
    #[serde(default)]
    pub tipo_movimiento: Option<String>,
    #[serde(default)]
    pub cantidad: i64,
}

impl Movement {
    /// Calendar date (`YYYY-MM-DD`) of the timestamp, empty when absent.
    #[must_use]
    pub fn date(&self) -> &str {
        let fecha = self.fecha.as_deref().unwrap_or_default();
        fecha.get(..10).unwrap_or(fecha)
    }

    #[must_use]
    pub fn kind(&self) -> &str {
        self.tipo_movimiento
            .as_deref()
            .filter(|kind| !kind.is_empty())
            .unwrap_or(DEFAULT_MOVEMENT_KIND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sparse_movement_uses_defaults() {
        let movement: Movement = serde_json::from_value(json!({
            "id": 4,
            "fecha": "2024-05-02T13:45:00",
            "tipoMovimiento": ""
        }))
        .unwrap();

        assert_eq!(movement.date(), "2024-05-02");
        assert_eq!(movement.kind(), "ENTRADA");
        assert_eq!(movement.cantidad, 0);
        assert!(movement.nombre_usuario.is_none());
    }

    #[test]
    fn missing_date_is_empty() {
        let movement: Movement = serde_json::from_value(json!({ "id": 1 })).unwrap();
        assert_eq!(movement.date(), "");
    }
}
