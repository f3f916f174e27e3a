use protobuf::AidsServiceClient;

use crate::config::ClientConfig;
use crate::error::ClientError;

/// gRPC-Web transport used on native targets.
#[cfg(not(target_arch = "wasm32"))]
pub type Transport = tonic_web::GrpcWebClientService<
    hyper_util::client::legacy::Client<
        hyper_util::client::legacy::connect::HttpConnector,
        tonic_web::GrpcWebCall<tonic::body::BoxBody>,
    >,
>;

/// gRPC-Web transport used in the browser.
#[cfg(target_arch = "wasm32")]
pub type Transport = tonic_web_wasm_client::Client;

/// Handle to a dataset service, cheap to clone and share between callers.
#[derive(Clone)]
pub struct AidsClient {
    base_url: String,
    inner: AidsServiceClient<Transport>,
}

impl AidsClient {
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn stub(&self) -> AidsServiceClient<Transport> {
        self.inner.clone()
    }
}

impl std::fmt::Debug for AidsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AidsClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Builds the transport for `config` and a typed client over it.
///
/// Nothing is sent until the first call, so this only fails on a base
/// url the transport cannot use. On native targets that means anything
/// other than an absolute `http://` url, since the transport has no tls.
pub fn connect(config: &ClientConfig) -> Result<AidsClient, ClientError> {
    if config.base_url.is_empty() {
        return Err(ClientError::InvalidBaseUrl(config.base_url.clone()));
    }

    log::debug!("initializing aids client [base_url={}]", config.base_url);
    let inner = stub(&config.base_url)?
        .max_decoding_message_size(config.max_decoding_message_size);

    Ok(AidsClient {
        base_url: config.base_url.clone(),
        inner: inner,
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn stub(base_url: &str) -> Result<AidsServiceClient<Transport>, ClientError> {
    use hyper_util::client::legacy::Client;
    use hyper_util::rt::TokioExecutor;
    use tonic::codegen::http::uri::{Scheme, Uri};
    use tonic_web::GrpcWebClientLayer;
    use tower::Layer as _;

    let origin = match base_url.parse::<Uri>() {
        Ok(uri) if uri.scheme() == Some(&Scheme::HTTP)
            && uri.authority().is_some() => uri,
        _ => return Err(ClientError::InvalidBaseUrl(base_url.to_string())),
    };

    let http = Client::builder(TokioExecutor::new()).build_http();
    let transport = GrpcWebClientLayer::new().layer(http);

    Ok(AidsServiceClient::with_origin(transport, origin))
}

#[cfg(target_arch = "wasm32")]
fn stub(base_url: &str) -> Result<AidsServiceClient<Transport>, ClientError> {
    let transport = tonic_web_wasm_client::Client::new(base_url.to_string());
    Ok(AidsServiceClient::new(transport))
}
