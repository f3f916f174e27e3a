mod aids;

pub use aids::{ChartRequest, ChartResponse, Chunk, DatasetInfo, DatasetListResponse, DatasetRequest, SummaryResponse, UploadResponse};
pub use aids::aids_service_client::AidsServiceClient;
