use std::fs;

use chrono::NaiveDate;
use pocket_core::{storage::LedgerStorage, time::FixedClock, LedgerBook, TransactionDraft};
use pocket_domain::{Ledger, Transaction, TransactionKind};
use pocket_storage_json::{
    load_ledger_from_path, save_ledger_to_path, FileBackend, JsonLedgerStorage, KeyValueBackend,
    MemoryBackend, DEFAULT_LEDGER_KEY,
};
use tempfile::tempdir;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn sample_ledger() -> Ledger {
    Ledger::from_transactions(vec![
        Transaction::new(2, TransactionKind::Expense, 200_000.0, "Food", "Cash", d(2024, 5, 2))
            .with_description("groceries"),
        Transaction::new(1, TransactionKind::Income, 5_000_000.0, "Salary", "Checking", d(2024, 5, 1)),
    ])
}

#[test]
fn file_storage_round_trips_ledger() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonLedgerStorage::new(FileBackend::new(dir.path().join("data")).expect("backend"));

    assert!(storage.load_ledger().expect("load empty").is_none());

    let ledger = sample_ledger();
    storage.save_ledger(&ledger).expect("save ledger");
    let loaded = storage.load_ledger().expect("load ledger").expect("ledger stored");
    assert_eq!(loaded, ledger);

    let path = storage.backend().path_for(DEFAULT_LEDGER_KEY);
    assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("transactions.json"));
    assert!(!path.with_extension("json.tmp").exists());
}

#[test]
fn stored_layout_is_a_plain_array_with_original_field_names() {
    let backend = MemoryBackend::new();
    let storage = JsonLedgerStorage::new(backend);
    storage.save_ledger(&sample_ledger()).expect("save");

    let raw = storage
        .backend()
        .get(DEFAULT_LEDGER_KEY)
        .expect("get")
        .expect("value stored");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
    let records = value.as_array().expect("array");
    assert_eq!(records.len(), 2);
    let mut keys: Vec<_> = records[0].as_object().unwrap().keys().cloned().collect();
    keys.sort();
    assert_eq!(
        keys,
        vec!["account", "amount", "category", "date", "description", "id", "type"]
    );
}

#[test]
fn malformed_file_loads_as_empty_ledger() {
    let dir = tempdir().expect("tempdir");
    let backend = FileBackend::new(dir.path().to_path_buf()).expect("backend");
    fs::write(backend.path_for(DEFAULT_LEDGER_KEY), "{not json").expect("write garbage");
    let storage = JsonLedgerStorage::new(backend);

    assert!(storage.load_ledger().is_err());
    let ledger = LedgerBook::load(&storage);
    assert!(ledger.is_empty());
}

#[test]
fn browser_export_is_readable() {
    let backend = MemoryBackend::new();
    backend
        .set(
            "transactions",
            r#"[{"id":1714608000001,"type":"expense","amount":15000.5,"category":"Transportasi",
                "account":"Tunai","description":"ojek","date":"2024-05-02"},
               {"id":1714521600000,"type":"income","amount":5000000,"category":"Gaji",
                "account":"Rekening","description":"","date":"2024-05-01"}]"#,
        )
        .expect("seed");
    let storage = JsonLedgerStorage::new(backend);
    let ledger = LedgerBook::load(&storage);
    assert_eq!(ledger.len(), 2);
    assert_eq!(ledger.transactions()[0].description, "ojek");
}

#[test]
fn book_appends_survive_reopen() {
    let dir = tempdir().expect("tempdir");
    let clock = FixedClock::on_date(d(2024, 5, 15));
    let open = || {
        let backend = FileBackend::new(dir.path().to_path_buf()).expect("backend");
        LedgerBook::open(Box::new(JsonLedgerStorage::new(backend)), Box::new(clock))
    };

    let mut book = open();
    for (amount, category) in [(10.0, "Food"), (25.0, "Bills")] {
        let receipt = book
            .record(TransactionDraft {
                kind: Some(TransactionKind::Expense),
                amount: Some(amount),
                category: category.into(),
                account: "Cash".into(),
                description: String::new(),
                date: Some(d(2024, 5, 3)),
            })
            .expect("valid draft");
        assert!(receipt.is_persisted());
    }
    let written = book.ledger().clone();
    drop(book);

    let mut reopened = open();
    assert_eq!(reopened.ledger(), &written);
    let next = reopened.next_id();
    assert!(written.iter().all(|txn| txn.id < next));
}

#[test]
fn custom_key_is_used() {
    let dir = tempdir().expect("tempdir");
    let backend = FileBackend::new(dir.path().to_path_buf()).expect("backend");
    let storage = JsonLedgerStorage::with_key(backend, "household");
    storage.save_ledger(&sample_ledger()).expect("save");
    assert!(dir.path().join("household.json").exists());
    assert_eq!(storage.key(), "household");
}

#[test]
fn export_writes_pretty_json_that_loads_back() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("export.json");
    let ledger = sample_ledger();
    save_ledger_to_path(&ledger, &path).expect("export");
    let text = fs::read_to_string(&path).expect("read export");
    assert!(text.contains('\n'));
    assert_eq!(load_ledger_from_path(&path).expect("load export"), ledger);
}

/// Deterministic amounts in `[0, 1e7)` with full 53-bit mantissas.
fn generated_amounts(count: usize) -> Vec<f64> {
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    (0..count)
        .map(|_| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            (state >> 11) as f64 / (1u64 << 53) as f64 * 1e7
        })
        .collect()
}

#[test]
fn every_amount_survives_save_and_load_bit_for_bit() {
    let storage = JsonLedgerStorage::new(MemoryBackend::new());
    let mut amounts = generated_amounts(20_000);
    amounts.extend([7_372_376.617_515_271_5, 0.1 + 0.2, f64::MIN_POSITIVE, 1e7 - 1e-9, 0.0]);

    for (batch, chunk) in amounts.chunks(500).enumerate() {
        let ledger = Ledger::from_transactions(
            chunk
                .iter()
                .enumerate()
                .map(|(idx, amount)| {
                    let id = (batch * 500 + idx) as i64 + 1;
                    Transaction::new(id, TransactionKind::Income, *amount, "Gift", "Cash", d(2024, 5, 1))
                })
                .collect(),
        );
        storage.save_ledger(&ledger).expect("save");
        let loaded = storage.load_ledger().expect("load").expect("ledger stored");
        for (written, read) in ledger.iter().zip(loaded.iter()) {
            assert_eq!(
                written.amount.to_bits(),
                read.amount.to_bits(),
                "{} came back as {}",
                written.amount,
                read.amount
            );
        }
        assert_eq!(loaded, ledger);
    }
}

#[test]
fn unreadable_file_is_kept_aside_before_the_next_append() {
    let dir = tempdir().expect("tempdir");
    let original = r#"[{"id":2,"type":"expense","amount":null,"category":"Makanan","account":"Tunai","description":"","date":"2024-05-02"},{"id":1,"type":"income","amount":5000000,"category":"Gaji","account":"Rekening","description":"","date":"2024-05-01"}]"#;
    let ledger_path = dir.path().join("transactions.json");
    fs::write(&ledger_path, original).expect("seed");

    let backend = FileBackend::new(dir.path().to_path_buf()).expect("backend");
    let mut book = LedgerBook::open(
        Box::new(JsonLedgerStorage::new(backend)),
        Box::new(FixedClock::on_date(d(2024, 5, 15))),
    );
    assert!(book.ledger().is_empty());
    let kept = book.set_aside().expect("unreadable file moved aside").to_string();

    let receipt = book
        .record(TransactionDraft {
            kind: Some(TransactionKind::Expense),
            amount: Some(12.0),
            category: "Food".into(),
            account: "Cash".into(),
            description: String::new(),
            date: Some(d(2024, 5, 3)),
        })
        .expect("valid draft");
    assert!(receipt.is_persisted());

    assert_eq!(fs::read_to_string(&kept).expect("kept copy"), original);
    assert!(kept.contains("transactions.json.corrupt-"));
    let current = load_ledger_from_path(&ledger_path).expect("new ledger");
    assert_eq!(current.len(), 1);
}

#[test]
fn set_aside_without_stored_value_is_a_no_op() {
    let dir = tempdir().expect("tempdir");
    let backend = FileBackend::new(dir.path().to_path_buf()).expect("backend");
    assert!(backend.set_aside(DEFAULT_LEDGER_KEY, "corrupt-x").expect("set aside").is_none());

    let memory = MemoryBackend::new();
    memory.set("transactions", "{oops").expect("seed");
    let moved = memory.set_aside("transactions", "corrupt-x").expect("set aside");
    assert_eq!(moved.as_deref(), Some("transactions.corrupt-x"));
    assert!(memory.get("transactions").expect("get").is_none());
    assert_eq!(memory.get("transactions.corrupt-x").expect("get").as_deref(), Some("{oops"));
}
