//! End-to-end behavior of the files module against the mock client.

use std::cell::Cell;
use std::rc::Rc;

use files_core::{
    Action, ClientError, Dispatched, FavoriteOutcome, FileEntry, FilesModule, MockClient,
    ReportSink, SelectedFiles, SharedStore, StoreError, StoreHandle,
};

#[derive(Default)]
struct CountingSink(Cell<usize>);

impl ReportSink for CountingSink {
    fn report(&self, _error: &StoreError) {
        self.0.set(self.0.get() + 1);
    }
}

type Module = FilesModule<SharedStore, Rc<MockClient>, Rc<CountingSink>>;

fn setup() -> (Module, Rc<MockClient>, Rc<CountingSink>) {
    let client = Rc::new(MockClient::new());
    let sink = Rc::new(CountingSink::default());
    let module = FilesModule::with_sink(SharedStore::default(), client.clone(), sink.clone());
    (module, client, sink)
}

fn paths(selected: SelectedFiles<'_>) -> Vec<String> {
    selected.as_slice().iter().map(|f| f.path.clone()).collect()
}

#[tokio::test]
async fn load_leaves_selection_alone() {
    let (module, _, _) = setup();
    module.add_file_selection(FileEntry::new("/picked"));

    let files = vec![
        FileEntry::new("/a").with_meta("size", 10),
        FileEntry::new("/b").with_meta("type", "folder"),
    ];
    module
        .dispatch(Action::LoadFiles(files.clone()))
        .await
        .unwrap();

    module.store().with(|s| assert_eq!(s.files(), files.as_slice()));
    assert_eq!(module.selected_files(paths), vec!["/picked"]);
}

#[tokio::test]
async fn removal_is_asymmetric() {
    let (module, _, _) = setup();
    let a = FileEntry::new("/a");
    let b = FileEntry::new("/b");
    let c = FileEntry::new("/c");

    module.add_file_selection(a.clone());
    module.remove_file_selection(b.clone());
    assert!(module.selected_files(|s| s.is_empty()));

    for entry in [&a, &b, &c] {
        module.add_file_selection(entry.clone());
    }
    module.remove_file_selection(b);
    assert_eq!(module.selected_files(paths), vec!["/a", "/c"]);

    module.reset_file_selection();
    module.reset_file_selection();
    assert!(module.selected_files(|s| s == SelectedFiles::Empty));
}

#[tokio::test]
async fn favorite_round_trip() {
    let (module, client, sink) = setup();
    let entry = FileEntry::new("/a.txt");
    module.load_files(vec![entry.clone(), FileEntry::new("/b.txt")]);

    let outcome = module
        .dispatch(Action::MarkFavorite(entry.clone()))
        .await
        .unwrap();
    assert_eq!(
        outcome,
        Dispatched::Favorite(FavoriteOutcome::Applied { starred: true })
    );

    // The UI re-reads the entry from the store before toggling again.
    let current = module
        .store()
        .with(|s| s.find("/a.txt").cloned())
        .unwrap();
    assert!(current.starred);
    module.mark_favorite(&current).await.unwrap();

    assert_eq!(
        client.calls(),
        vec![("/a.txt".to_string(), true), ("/a.txt".to_string(), false)]
    );
    module.store().with(|s| {
        assert!(!s.find("/a.txt").unwrap().starred);
        assert!(!s.find("/b.txt").unwrap().starred);
    });
    assert_eq!(sink.0.get(), 0);
}

#[tokio::test]
async fn failed_favorite_is_reported_and_returned() {
    let (module, client, sink) = setup();
    let entry = FileEntry::new("/locked.txt");
    module.load_files(vec![entry.clone(), FileEntry::new("/other.txt")]);
    client.fail_path("/locked.txt", ClientError::Status(423));

    let err = module.mark_favorite(&entry).await.unwrap_err();
    assert_eq!(err.path(), "/locked.txt");
    assert_eq!(sink.0.get(), 1);
    module
        .store()
        .with(|s| assert!(s.files().iter().all(|f| !f.starred)));

    // Other paths are unaffected by the scripted failure.
    let other = FileEntry::new("/other.txt");
    module.mark_favorite(&other).await.unwrap();
    assert_eq!(sink.0.get(), 1);

    // Recovery on retry by the caller.
    client.heal();
    let outcome = module.mark_favorite(&entry).await.unwrap();
    assert_eq!(outcome, FavoriteOutcome::Applied { starred: true });
    assert_eq!(sink.0.get(), 1);
}

#[tokio::test]
async fn favorite_of_unlisted_entry_reaches_selection() {
    let (module, client, _) = setup();
    let entry = FileEntry::new("/elsewhere.txt");
    module.add_file_selection(entry.clone());

    module.mark_favorite(&entry).await.unwrap();

    assert_eq!(client.calls(), vec![("/elsewhere.txt".to_string(), true)]);
    module.selected_files(|s| assert!(s.as_slice()[0].starred));
    module.store().with(|s| assert!(s.files().is_empty()));
}
