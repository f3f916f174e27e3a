use protobuf::{ChartRequest, ChartResponse, Chunk, DatasetInfo, DatasetRequest, SummaryResponse, UploadResponse};
use tonic::Request;

use crate::client::AidsClient;
use crate::error::ClientError;

/// Remote calls exposed by the dataset service.
///
/// `AidsClient` forwards each method to the matching RPC. The store and the
/// free functions in `ops` only see this trait.
#[cfg_attr(not(target_arch = "wasm32"), tonic::async_trait)]
#[cfg_attr(target_arch = "wasm32", tonic::async_trait(?Send))]
pub trait DatasetService: Send + Sync {
    async fn list_saved_datasets(&self)
        -> Result<Vec<DatasetInfo>, ClientError>;

    async fn delete_dataset(&self, request: DatasetRequest)
        -> Result<(), ClientError>;

    /// First chunk of the download stream, `None` if the stream was empty.
    async fn download_dataset(&self, request: DatasetRequest)
        -> Result<Option<Chunk>, ClientError>;

    async fn get_chart(&self, request: ChartRequest)
        -> Result<ChartResponse, ClientError>;

    async fn get_dataset_summary(&self, request: DatasetRequest)
        -> Result<SummaryResponse, ClientError>;

    async fn upload_csv(&self, chunks: Vec<Chunk>)
        -> Result<UploadResponse, ClientError>;
}

#[cfg_attr(not(target_arch = "wasm32"), tonic::async_trait)]
#[cfg_attr(target_arch = "wasm32", tonic::async_trait(?Send))]
impl DatasetService for AidsClient {
    async fn list_saved_datasets(&self)
            -> Result<Vec<DatasetInfo>, ClientError> {
        log::debug!("ListSavedDatasets [base_url={}]", self.base_url());
        let reply = self.stub().list_saved_datasets(Request::new(())).await
            .map_err(ClientError::rpc("ListSavedDatasets"))?;
        Ok(reply.into_inner().datasets)
    }

    async fn delete_dataset(&self, request: DatasetRequest)
            -> Result<(), ClientError> {
        log::trace!("DeleteDataset: {:?}", request);
        self.stub().delete_dataset(Request::new(request)).await
            .map_err(ClientError::rpc("DeleteDataset"))?;
        Ok(())
    }

    async fn download_dataset(&self, request: DatasetRequest)
            -> Result<Option<Chunk>, ClientError> {
        log::trace!("DownloadDataset: {:?}", request);
        let mut stream = self.stub()
            .download_dataset(Request::new(request)).await
            .map_err(ClientError::rpc("DownloadDataset"))?.into_inner();

        // later chunks are left on the stream
        stream.message().await.map_err(ClientError::rpc("DownloadDataset"))
    }

    async fn get_chart(&self, request: ChartRequest)
            -> Result<ChartResponse, ClientError> {
        log::trace!("GetChart: {:?}", request);
        let reply = self.stub().get_chart(Request::new(request)).await
            .map_err(ClientError::rpc("GetChart"))?;
        Ok(reply.into_inner())
    }

    async fn get_dataset_summary(&self, request: DatasetRequest)
            -> Result<SummaryResponse, ClientError> {
        log::trace!("GetDatasetSummary: {:?}", request);
        let reply = self.stub()
            .get_dataset_summary(Request::new(request)).await
            .map_err(ClientError::rpc("GetDatasetSummary"))?;
        Ok(reply.into_inner())
    }

    async fn upload_csv(&self, chunks: Vec<Chunk>)
            -> Result<UploadResponse, ClientError> {
        log::debug!("UploadCsv [chunks={}]", chunks.len());
        let reply = self.stub()
            .upload_csv(tokio_stream::iter(chunks)).await
            .map_err(ClientError::rpc("UploadCsv"))?;
        Ok(reply.into_inner())
    }
}
