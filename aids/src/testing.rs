use protobuf::{ChartRequest, ChartResponse, Chunk, DatasetInfo, DatasetRequest, SummaryResponse, UploadResponse};
use tokio::sync::oneshot;
use tonic::{Code, Status};

use crate::error::ClientError;
use crate::service::DatasetService;

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::Poll;

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    List,
    Delete(DatasetRequest),
    Download(DatasetRequest),
    Chart(ChartRequest),
    Summary(DatasetRequest),
    Upload(Vec<Chunk>),
}

/// In-memory `DatasetService` that records each call.
#[derive(Default)]
pub struct FakeService {
    calls: Mutex<Vec<Call>>,
    chart: Mutex<ChartResponse>,
    chunks: Mutex<Vec<Chunk>>,
    datasets: Mutex<Vec<DatasetInfo>>,
    failure: Mutex<Option<Code>>,
    list_gates: Mutex<VecDeque<oneshot::Receiver<Vec<DatasetInfo>>>>,
    summary: Mutex<SummaryResponse>,
}

impl FakeService {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn list_calls(&self) -> usize {
        self.calls().iter().filter(|call| **call == Call::List).count()
    }

    pub fn fail_with(&self, code: Code) {
        *self.failure.lock().unwrap() = Some(code);
    }

    pub fn set_chart(&self, chart: ChartResponse) {
        *self.chart.lock().unwrap() = chart;
    }

    pub fn set_chunks(&self, chunks: Vec<Chunk>) {
        *self.chunks.lock().unwrap() = chunks;
    }

    pub fn set_datasets(&self, datasets: Vec<DatasetInfo>) {
        *self.datasets.lock().unwrap() = datasets;
    }

    pub fn set_summary(&self, summary: SummaryResponse) {
        *self.summary.lock().unwrap() = summary;
    }

    /// Makes the next ungated list call wait for the returned sender.
    pub fn gate_list(&self) -> oneshot::Sender<Vec<DatasetInfo>> {
        let (tx, rx) = oneshot::channel();
        self.list_gates.lock().unwrap().push_back(rx);
        tx
    }

    fn record(&self, call: Call) -> Result<(), ClientError> {
        self.calls.lock().unwrap().push(call);
        match *self.failure.lock().unwrap() {
            Some(code) => Err(Status::new(code, "fake failure").into()),
            None => Ok(()),
        }
    }
}

#[tonic::async_trait]
impl DatasetService for FakeService {
    async fn list_saved_datasets(&self)
            -> Result<Vec<DatasetInfo>, ClientError> {
        self.record(Call::List)?;

        let gate = self.list_gates.lock().unwrap().pop_front();
        match gate {
            Some(gate) => gate.await
                .map_err(|_| ClientError::from(
                    Status::new(Code::Cancelled, "gate dropped"))),
            None => Ok(self.datasets.lock().unwrap().clone()),
        }
    }

    async fn delete_dataset(&self, request: DatasetRequest)
            -> Result<(), ClientError> {
        self.record(Call::Delete(request))
    }

    async fn download_dataset(&self, request: DatasetRequest)
            -> Result<Option<Chunk>, ClientError> {
        self.record(Call::Download(request))?;
        Ok(self.chunks.lock().unwrap().first().cloned())
    }

    async fn get_chart(&self, request: ChartRequest)
            -> Result<ChartResponse, ClientError> {
        self.record(Call::Chart(request))?;
        Ok(self.chart.lock().unwrap().clone())
    }

    async fn get_dataset_summary(&self, request: DatasetRequest)
            -> Result<SummaryResponse, ClientError> {
        self.record(Call::Summary(request))?;
        Ok(self.summary.lock().unwrap().clone())
    }

    async fn upload_csv(&self, chunks: Vec<Chunk>)
            -> Result<UploadResponse, ClientError> {
        let file_name = chunks.first()
            .map(|chunk| chunk.file_name.clone()).unwrap_or_default();
        self.record(Call::Upload(chunks))?;

        Ok(UploadResponse {
            id: 1,
            message: format!("File '{}' uploaded successfully.", file_name),
        })
    }
}

pub fn dataset(id: i32, name: &str) -> DatasetInfo {
    DatasetInfo {
        id: id,
        name: name.to_string(),
        created_at: "2024-05-01 12:00:00".to_string(),
    }
}

/// Polls `future` a single time so it can park on whatever it awaits.
pub async fn poll_once<F: Future + Unpin>(future: &mut F) {
    std::future::poll_fn(|cx| {
        let _ = Pin::new(&mut *future).poll(cx);
        Poll::Ready(())
    }).await
}

/// Reply written by a `Loopback` server: a gRPC-Web body holding
/// `messages` followed by a trailer frame with `status`.
pub struct Reply {
    pub messages: Vec<Vec<u8>>,
    pub status: Code,
}

impl Reply {
    pub fn ok(messages: Vec<Vec<u8>>) -> Reply {
        Reply {
            messages: messages,
            status: Code::Ok,
        }
    }

    fn encode(&self) -> Vec<u8> {
        let mut body = Vec::new();
        for message in self.messages.iter() {
            body.extend_from_slice(&frame(0x00, message));
        }

        let trailer = format!("grpc-status:{}\r\n", self.status as i32);
        body.extend_from_slice(&frame(0x80, trailer.as_bytes()));

        let mut response = format!("HTTP/1.1 200 OK\r\n\
            content-type: application/grpc-web+proto\r\n\
            content-length: {}\r\n\r\n", body.len()).into_bytes();
        response.extend_from_slice(&body);
        response
    }
}

/// Request captured by a `Loopback` server.
#[derive(Debug)]
pub struct Captured {
    pub head: String,
    pub body: Vec<u8>,
}

impl Captured {
    /// Message payloads of the gRPC-Web frames in the request body.
    pub fn messages(&self) -> Vec<Vec<u8>> {
        let mut messages = Vec::new();
        let mut rest = self.body.as_slice();
        while rest.len() >= 5 {
            let mut length = [0u8; 4];
            length.copy_from_slice(&rest[1..5]);
            let length = u32::from_be_bytes(length) as usize;

            messages.push(rest[5..5 + length].to_vec());
            rest = &rest[5 + length..];
        }

        messages
    }
}

/// Minimal HTTP/1.1 gRPC-Web responder answering each request in turn
/// with the next queued reply.
pub struct Loopback {
    pub base_url: String,
    requests: tokio::sync::mpsc::UnboundedReceiver<Captured>,
}

impl Loopback {
    pub async fn start(replies: Vec<Reply>) -> Loopback {
        use tokio::io::AsyncWriteExt;

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await
            .unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();

        // each connection gets its own task, sharing the reply queue
        let replies = Arc::new(Mutex::new(VecDeque::from(replies)));
        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let (replies, tx) = (replies.clone(), tx.clone());
                tokio::spawn(async move {
                    while let Some(captured) = read_request(&mut socket).await {
                        let reply = replies.lock().unwrap().pop_front();
                        let reply = match reply {
                            Some(reply) => reply,
                            None => return,
                        };

                        let _ = tx.send(captured);
                        if socket.write_all(&reply.encode()).await.is_err() {
                            return;
                        }
                    }
                });
            }
        });

        Loopback {
            base_url: base_url,
            requests: rx,
        }
    }

    pub async fn next_request(&mut self) -> Captured {
        self.requests.recv().await.unwrap()
    }
}

fn frame(flag: u8, payload: &[u8]) -> Vec<u8> {
    let mut frame = vec![flag];
    frame.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    frame.extend_from_slice(payload);
    frame
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|window| window == needle)
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> Option<Captured> {
    use tokio::io::AsyncReadExt;

    let mut buf = Vec::new();
    let mut read_buf = [0u8; 4096];
    loop {
        if let Some(end) = find(&buf, b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..end]).to_string();
            if let Some(body) = parse_body(&head, &buf[end + 4..]) {
                return Some(Captured {
                    head: head,
                    body: body,
                });
            }
        }

        let count = socket.read(&mut read_buf).await.ok()?;
        if count == 0 {
            return None;
        }
        buf.extend_from_slice(&read_buf[..count]);
    }
}

// returns None until the whole body has arrived
fn parse_body(head: &str, mut rest: &[u8]) -> Option<Vec<u8>> {
    let head = head.to_ascii_lowercase();
    if head.contains("transfer-encoding: chunked") {
        let mut body = Vec::new();
        loop {
            let line_end = find(rest, b"\r\n")?;
            let size = std::str::from_utf8(&rest[..line_end]).ok()?;
            let size = usize::from_str_radix(size.trim(), 16).ok()?;

            let start = line_end + 2;
            if rest.len() < start + size + 2 {
                return None;
            } else if size == 0 {
                return Some(body);
            }

            body.extend_from_slice(&rest[start..start + size]);
            rest = &rest[start + size + 2..];
        }
    }

    let length = head.lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|value| value.trim().parse::<usize>().ok())
        .unwrap_or(0);
    match rest.len() >= length {
        true => Some(rest[..length].to_vec()),
        false => None,
    }
}
