use protobuf::{ChartRequest, ChartResponse, Chunk, DatasetRequest, SummaryResponse, UploadResponse};

use crate::error::ClientError;
use crate::service::DatasetService;

/// Payload bytes carried by each uploaded chunk.
pub const UPLOAD_CHUNK_SIZE: usize = 64 * 1024;

pub async fn delete_dataset<S>(service: &S, id: i32)
        -> Result<(), ClientError> where S: DatasetService + ?Sized {
    service.delete_dataset(DatasetRequest { id: id }).await
}

/// Fetches the first chunk of a dataset. Any further chunks the service
/// streams are not read.
pub async fn download_dataset<S>(service: &S, id: i32)
        -> Result<Chunk, ClientError> where S: DatasetService + ?Sized {
    match service.download_dataset(DatasetRequest { id: id }).await? {
        Some(chunk) => Ok(chunk),
        None => Err(ClientError::MissingChunk(id)),
    }
}

pub async fn get_chart<S>(service: &S, id: i32, x_axis: &str, y_axis: &str)
        -> Result<ChartResponse, ClientError>
        where S: DatasetService + ?Sized {
    // axis names are passed through unchecked
    let request = ChartRequest {
        id: id,
        x_axis: x_axis.to_string(),
        y_axis: y_axis.to_string(),
    };

    service.get_chart(request).await
}

pub async fn get_dataset_summary<S>(service: &S, id: i32)
        -> Result<SummaryResponse, ClientError>
        where S: DatasetService + ?Sized {
    service.get_dataset_summary(DatasetRequest { id: id }).await
}

pub async fn upload_csv<S>(service: &S, file_name: &str, content: &[u8])
        -> Result<UploadResponse, ClientError>
        where S: DatasetService + ?Sized {
    service.upload_csv(split_chunks(file_name, content)).await
}

/// Reads `path` and uploads it under its file name.
#[cfg(not(target_arch = "wasm32"))]
pub async fn upload_csv_file<S, P>(service: &S, path: P)
        -> Result<UploadResponse, ClientError>
        where S: DatasetService + ?Sized, P: AsRef<std::path::Path> {
    let path = path.as_ref();
    let file_name = match path.file_name().and_then(|name| name.to_str()) {
        Some(file_name) => file_name.to_string(),
        None => return Err(ClientError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("path '{}' has no file name", path.display())))),
    };

    let content = tokio::fs::read(path).await?;
    upload_csv(service, &file_name, &content).await
}

/// Splits `content` into upload chunks. Only the first chunk names the
/// file, and an empty payload still yields one chunk carrying the name.
pub fn split_chunks(file_name: &str, content: &[u8]) -> Vec<Chunk> {
    let mut chunks: Vec<Chunk> = content.chunks(UPLOAD_CHUNK_SIZE)
        .map(|content| Chunk {
            file_name: String::new(),
            content: content.to_vec(),
        })
        .collect();

    match chunks.first_mut() {
        Some(chunk) => chunk.file_name = file_name.to_string(),
        None => chunks.push(Chunk {
            file_name: file_name.to_string(),
            content: Vec::new(),
        }),
    }

    chunks
}
