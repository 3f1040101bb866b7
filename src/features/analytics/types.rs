use serde::{Deserialize, Serialize};

/// Counters shown on the dashboard landing page; missing values read as zero.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardSummary {
    pub total_productos: u64,
    pub total_categorias: u64,
    pub stock_bajo: u64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MostMovedProduct {
    pub nombre_producto: String,
    #[serde(default)]
    pub total_movimientos: u64,
}
