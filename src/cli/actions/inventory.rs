use crate::{
    cli::globals::{GlobalArgs, Runtime},
    features::{
        catalog::{
            NewProvider,
            client::{create_provider, delete_provider, list_categories, list_providers},
        },
        movements::client::list_movements,
        products::{
            ImageFile, ProductForm,
            client::{
                create_product, delete_product, get_product, list_products, recent_products,
                update_product,
            },
        },
        stock::{
            StockRequest,
            client::{delete_stock, list_stock, save_stock},
        },
    },
};
use anyhow::Result;
use serde_json::json;
use std::path::PathBuf;

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub op: Op,
}

/// Product fields from the command line; the image is read when the action runs.
#[derive(Debug)]
pub struct ProductInput {
    pub form: ProductForm,
    pub image: Option<PathBuf>,
}

impl ProductInput {
    async fn into_form(self) -> Result<ProductForm> {
        let mut form = self.form;
        if let Some(path) = self.image {
            form.image = Some(ImageFile::from_path(&path).await?);
        }
        Ok(form)
    }
}

#[derive(Debug)]
pub enum Op {
    ListProducts,
    RecentProducts,
    ShowProduct(String),
    CreateProduct(ProductInput),
    UpdateProduct { id: String, input: ProductInput },
    DeleteProduct(String),
    ListCategories,
    ListProviders,
    CreateProvider(NewProvider),
    DeleteProvider(String),
    ListStock,
    SaveStock(StockRequest),
    DeleteStock(String),
    Movements,
}

impl Op {
    /// Dashboard route this operation belongs to.
    #[must_use]
    pub fn route(&self) -> &'static str {
        match self {
            Op::ListProducts
            | Op::RecentProducts
            | Op::ShowProduct(_)
            | Op::DeleteProduct(_)
            | Op::ListCategories => "/dashboard/productos",
            Op::CreateProduct(_) => "/dashboard/newProductos",
            Op::UpdateProduct { .. } => "/dashboard/productos/editar",
            Op::ListProviders | Op::CreateProvider(_) | Op::DeleteProvider(_) => {
                "/dashboard/proveedores"
            }
            Op::ListStock | Op::SaveStock(_) | Op::DeleteStock(_) => "/dashboard/stock",
            Op::Movements => "/dashboard/movimientos",
        }
    }
}

/// # Errors
/// Returns an error when there is no valid session or the request fails.
pub async fn execute(runtime: &Runtime, op: Op) -> Result<()> {
    runtime.require_session(op.route())?;
    let api = &runtime.api;

    match op {
        Op::ListProducts => runtime.print(&list_products(api).await?),
        Op::RecentProducts => runtime.print(&recent_products(api).await?),
        Op::ShowProduct(id) => runtime.print(&get_product(api, &id).await?),
        Op::CreateProduct(input) => {
            let form = input.into_form().await?;
            runtime.print(&create_product(api, form).await?)
        }
        Op::UpdateProduct { id, input } => {
            let form = input.into_form().await?;
            update_product(api, &id, form).await?;
            runtime.print(&json!({ "updated": id }))
        }
        Op::DeleteProduct(id) => {
            delete_product(api, &id).await?;
            runtime.print(&json!({ "deleted": id }))
        }
        Op::ListCategories => runtime.print(&list_categories(api).await?),
        Op::ListProviders => runtime.print(&list_providers(api).await?),
        Op::CreateProvider(provider) => runtime.print(&create_provider(api, &provider).await?),
        Op::DeleteProvider(id) => {
            delete_provider(api, &id).await?;
            runtime.print(&json!({ "deleted": id }))
        }
        Op::ListStock => runtime.print(&list_stock(api).await?),
        Op::SaveStock(request) => runtime.print(&save_stock(api, &request).await?),
        Op::DeleteStock(id) => {
            delete_stock(api, &id).await?;
            runtime.print(&json!({ "deleted": id }))
        }
        Op::Movements => {
            let movements = list_movements(api).await?;
            let rows: Vec<_> = movements
                .iter()
                .map(|movement| {
                    json!({
                        "id": movement.id,
                        "fecha": movement.date(),
                        "nombreUsuario": movement.nombre_usuario,
                        "nombreProducto": movement.nombre_producto,
                        "tipo": movement.kind(),
                        "cantidad": movement.cantidad,
                    })
                })
                .collect();
            runtime.print(&rows)
        }
    }
}
