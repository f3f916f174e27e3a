use protobuf::DatasetInfo;
use tokio::sync::watch;

use crate::service::DatasetService;

use std::sync::Arc;

/// Observable list of the datasets saved on the service.
///
/// Every refresh replaces the whole list. Overlapping refreshes are not
/// ordered: whichever reply resolves last is the one kept, even if its
/// request was issued first.
pub struct DatasetStore {
    datasets: watch::Sender<Vec<DatasetInfo>>,
    service: Arc<dyn DatasetService>,
}

impl DatasetStore {
    pub fn new(service: Arc<dyn DatasetService>) -> DatasetStore {
        let (datasets, _) = watch::channel(Vec::new());
        DatasetStore {
            datasets: datasets,
            service: service,
        }
    }

    /// Current list of datasets.
    pub fn datasets(&self) -> Vec<DatasetInfo> {
        self.datasets.borrow().clone()
    }

    /// Receiver notified each time the list is replaced.
    pub fn subscribe(&self) -> watch::Receiver<Vec<DatasetInfo>> {
        self.datasets.subscribe()
    }

    /// Reloads the list from the service. Errors are logged and the
    /// previous list is kept.
    pub async fn fetch_datasets(&self) {
        match self.service.list_saved_datasets().await {
            Ok(datasets) => {
                log::debug!("replacing dataset list [count={}]",
                    datasets.len());
                self.datasets.send_replace(datasets);
            },
            Err(e) => log::error!("error fetching datasets for store: {}", e),
        }
    }
}
