use vmw_catalog::{
    models::{DownloadGroupRequest, ProductHeaderRequest, RelatedDlgListRequest},
    CatalogClient,
};

use crate::{
    command::{CatalogCommands, DownloadGroupArgs, ProductArgs},
    render::{CommandOutput, CommandResult},
};

impl From<DownloadGroupArgs> for DownloadGroupRequest {
    fn from(args: DownloadGroupArgs) -> Self {
        DownloadGroupRequest {
            download_group: args.download_group,
            product_id: args.product_id,
        }
    }
}

impl From<ProductArgs> for ProductHeaderRequest {
    fn from(args: ProductArgs) -> Self {
        ProductHeaderRequest {
            category: args.category,
            product: args.product,
            version: args.version,
        }
    }
}

impl CatalogCommands {
    pub(crate) async fn run(self, catalog: &CatalogClient) -> CommandResult {
        Ok(match self {
            CatalogCommands::AccountInfo => CommandOutput::object(catalog.account_info().await?),
            CatalogCommands::Products { raw: true } => {
                CommandOutput::object(catalog.get_products().await?)
            }
            CatalogCommands::Products { raw: false } => {
                CommandOutput::object(catalog.product_index().await?)
            }
            CatalogCommands::ProductHeader(args) => {
                CommandOutput::object(catalog.get_product_header(&args.into()).await?)
            }
            CatalogCommands::RelatedDlg { product, dlg_type } => {
                let request = RelatedDlgListRequest {
                    category: product.category,
                    product: product.product,
                    version: product.version,
                    dlg_type,
                };
                CommandOutput::object(catalog.get_related_dlg_list(&request).await?)
            }
            CatalogCommands::DlgHeader(args) => {
                CommandOutput::object(catalog.get_dlg_header(&args.into()).await?)
            }
            CatalogCommands::DlgDetails(args) => {
                CommandOutput::object(catalog.get_dlg_details(&args.into()).await?)
            }
            CatalogCommands::EulaAccept(args) => {
                CommandOutput::object(catalog.eula_accept(&args.into()).await?)
            }
            CatalogCommands::Licensed => {
                CommandOutput::object(catalog.get_my_licensed_products().await?)
            }
            CatalogCommands::Download { group, file } => CommandOutput::object(
                catalog.request_download(&group.into(), &file).await?,
            ),
        })
    }
}
