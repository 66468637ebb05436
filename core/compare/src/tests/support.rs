//! テスト用ヘルパー

use crate::adapter::stubs::{RecordingCompareBar, RecordingSelectionStore, StubCatalog};
use crate::domain::{ComparisonRecord, ItemId};
use crate::ports::outbound::{CatalogLookup, CompareBar, SelectionStore};
use crate::usecase::{CompareDeps, ComparisonSession};
use common::adapter::NoopLog;
use common::error::Error;
use common::ports::outbound::{Log, LogRecord};
use std::sync::{Arc, Mutex};

/// 主要フィールド入りのレコードを作る
pub fn sample_record(id: &str, image: &str) -> ComparisonRecord {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "image_url": image,
        "item": "官帽椅",
        "size": ["40cm", "Seat"],
        "area": "10㎡",
        "price": 100,
        "second_scene": ["客厅", "书房"],
        "category": "椅类",
        "second_material": "大红酸枝",
        "stove": "蒸汽烘干",
        "outside_sand": "2000目",
        "inside_sand": "600目",
        "carve": "手工雕刻",
        "paint": "生漆",
        "decoration": "铜活",
        "tenon": "格肩榫"
    }))
    .unwrap()
}

/// 記録つきコラボレーターで組んだセッションと、その記録への参照
pub struct Harness {
    pub session: ComparisonSession,
    pub store: Arc<RecordingSelectionStore>,
    pub bar: Arc<RecordingCompareBar>,
}

pub fn harness(
    first: Option<&str>,
    second: Option<&str>,
    catalog: StubCatalog,
) -> Harness {
    let store = Arc::new(RecordingSelectionStore::new(
        first.map(ItemId::new),
        second.map(ItemId::new),
    ));
    let bar = Arc::new(RecordingCompareBar::new());
    let session = ComparisonSession::new(CompareDeps {
        selection: Arc::clone(&store) as Arc<dyn SelectionStore>,
        catalog: Arc::new(catalog) as Arc<dyn CatalogLookup>,
        bar: Arc::clone(&bar) as Arc<dyn CompareBar>,
        log: Arc::new(NoopLog),
    });
    Harness {
        session,
        store,
        bar,
    }
}

/// テスト用: 受け取ったレコードを溜め込む Log
#[derive(Default)]
pub struct CollectingLog {
    pub records: Mutex<Vec<LogRecord>>,
}

impl Log for CollectingLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}
