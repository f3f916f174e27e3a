//! Client for the AIDS dataset service.
//!
//! `connect` builds a gRPC-Web client from a `ClientConfig`. The handle is
//! passed explicitly to a `DatasetStore`, which keeps an observable list of
//! saved datasets, or to the single-call operations in `ops`.

mod client;
mod config;
mod error;
pub mod ops;
mod service;
mod store;
#[cfg(all(test, not(target_arch = "wasm32")))]
mod testing;

pub use client::{connect, AidsClient, Transport};
pub use config::{default_base_url, ClientConfig, LOCAL_BASE_URL, MAX_DECODING_MESSAGE_SIZE};
pub use error::{ClientError, TonicStatusError};
pub use service::DatasetService;
pub use store::DatasetStore;

pub use protobuf::{ChartRequest, ChartResponse, Chunk, DatasetInfo, DatasetListResponse, DatasetRequest, SummaryResponse, UploadResponse};
