use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use stockroom_cli::demo;
use stockroom_inventory::Inventory;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

/// Log sink shared between the subscriber and the test.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn demonstration_prints_expected_lines_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");

    let mut out = Vec::new();
    let inventory = demo::run(&path, &mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Warning: item 'orange' not found.\n\
         Apple stock: 7\n\
         Low items: banana\n\
         Items Report\n\
         apple -> 7\n\
         banana -> 2\n"
    );

    let (on_disk, _) = Inventory::from_path(&path);
    assert_eq!(on_disk, inventory);
    assert_eq!(on_disk.get_quantity("apple"), 7);
}

#[test]
fn demonstration_overwrites_stale_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");
    std::fs::write(&path, r#"{"stale": 40}"#).unwrap();

    let mut out = Vec::new();
    let inventory = demo::run(&path, &mut out).unwrap();

    assert!(!inventory.contains("stale"));
    assert_eq!(inventory.len(), 2);
}

#[test]
fn unwritable_path_is_an_error_not_an_input_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("inventory.json");

    let mut out = Vec::new();
    let err = demo::run(&path, &mut out).unwrap_err();

    assert!(err.to_string().contains("failed to save inventory"));
    assert!(!String::from_utf8(out).unwrap().contains("Input error"));
}

#[test]
fn missing_item_warns_once_on_stdout_and_not_in_default_logs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");

    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("warn"))
        .with_writer(logs.clone())
        .finish();

    let mut out = Vec::new();
    tracing::subscriber::with_default(subscriber, || demo::run(&path, &mut out)).unwrap();

    let stdout = String::from_utf8(out).unwrap();
    assert_eq!(stdout.matches("not found").count(), 1);
    assert_eq!(logs.contents(), "");
}
