use serde_json::Value;
use vmw_api_portal::{
    apis::{account_api, download_group_api, products_api},
    models::{
        AccountInfoRequest, DlgDetailsResponse, DlgHeaderResponse, DownloadGroupRequest,
        DownloadRequest, DownloadResponse, ProductHeaderRequest, ProductsAtoZResponse,
        RelatedDlgListRequest,
    },
};
use vmw_core::{ApiError, Client};

/// Portal endpoints, one method per endpoint.
///
/// Responses the call sites only display are returned as raw JSON.
#[derive(Clone)]
pub struct CatalogClient {
    pub(crate) client: Client,
}

impl CatalogClient {
    fn new(client: Client) -> Self {
        Self { client }
    }

    /// Account details of the logged in user.
    pub async fn account_info(&self) -> Result<Value, ApiError> {
        let config = self.client.internal.get_api_configuration()?;
        Ok(account_api::account_info(config, &AccountInfoRequest::default()).await?)
    }

    /// The whole product catalog, A to Z.
    pub async fn get_products(&self) -> Result<ProductsAtoZResponse, ApiError> {
        let config = self.client.internal.get_api_configuration()?;
        Ok(products_api::get_products_a_to_z(config).await?)
    }

    #[allow(missing_docs)]
    pub async fn get_product_header(
        &self,
        request: &ProductHeaderRequest,
    ) -> Result<Value, ApiError> {
        let config = self.client.internal.get_api_configuration()?;
        Ok(products_api::get_product_header(config, request).await?)
    }

    /// Download groups related to a product version, filtered by download group type.
    pub async fn get_related_dlg_list(
        &self,
        request: &RelatedDlgListRequest,
    ) -> Result<Value, ApiError> {
        let config = self.client.internal.get_api_configuration()?;
        Ok(products_api::get_related_dlg_list(config, request).await?)
    }

    #[allow(missing_docs)]
    pub async fn get_dlg_header(
        &self,
        request: &DownloadGroupRequest,
    ) -> Result<DlgHeaderResponse, ApiError> {
        let config = self.client.internal.get_api_configuration()?;
        Ok(download_group_api::get_dlg_header(config, request).await?)
    }

    /// Files of a download group and whether the account may download them.
    pub async fn get_dlg_details(
        &self,
        request: &DownloadGroupRequest,
    ) -> Result<DlgDetailsResponse, ApiError> {
        let config = self.client.internal.get_api_configuration()?;
        Ok(download_group_api::get_dlg_details(config, request).await?)
    }

    /// Accepts the EULA of a download group on behalf of the account.
    pub async fn eula_accept(&self, request: &DownloadGroupRequest) -> Result<Value, ApiError> {
        let config = self.client.internal.get_api_configuration()?;
        Ok(download_group_api::eula_accept(config, request).await?)
    }

    #[allow(missing_docs)]
    pub async fn get_my_licensed_products(&self) -> Result<Value, ApiError> {
        let config = self.client.internal.get_api_configuration()?;
        Ok(products_api::get_my_licensed_products(config).await?)
    }

    /// Issues a signed, short-lived download URL for one file.
    pub async fn get_download(
        &self,
        request: &DownloadRequest,
    ) -> Result<DownloadResponse, ApiError> {
        let config = self.client.internal.get_api_configuration()?;
        Ok(download_group_api::download(config, request).await?)
    }
}

/// Extension trait giving [`Client`] access to the catalog operations.
pub trait CatalogClientExt {
    /// Catalog and download group operations.
    fn catalog(&self) -> CatalogClient;
}

impl CatalogClientExt for Client {
    fn catalog(&self) -> CatalogClient {
        CatalogClient::new(self.clone())
    }
}
