mod support;

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parkit_dashboard_lib::format::CaptionStyle;
use parkit_dashboard_lib::gallery::EMPTY_GALLERY_TEXT;
use parkit_dashboard_lib::{
    Control, ControlState, Cursor, DeleteOutcome, Field, GalleryConfig, GallerySession,
    MemorySink,
};
use support::{FakeTransport, DELETE, LIST};

const FIRST: &str = "gallery/graph-2024-04-17-09-00-00.png";
const SECOND: &str = "gallery/graph-2024-04-18-12-15-30.png";
const THIRD: &str = "gallery/graph-2024-04-19-13-30-35.png";

type Session<C> = GallerySession<FakeTransport, MemorySink, C>;

fn config(download_dir: PathBuf) -> GalleryConfig {
    GalleryConfig {
        list_path: LIST.into(),
        delete_path: DELETE.into(),
        caption_style: CaptionStyle::TwelveHour,
        download_dir,
    }
}

fn three_graphs() -> Arc<FakeTransport> {
    let transport = Arc::new(FakeTransport::new());
    transport.respond(LIST, serde_json::json!([FIRST, SECOND, THIRD]).to_string());
    transport.respond(DELETE, r#"{"success":true}"#);
    transport
}

fn approve(_: &str) -> bool {
    true
}

async fn loaded<C: parkit_dashboard_lib::Confirm>(
    transport: &Arc<FakeTransport>,
    confirm: C,
) -> Session<C> {
    let mut session = GallerySession::new(
        Arc::clone(transport),
        config(PathBuf::from("downloads")),
        MemorySink::new(),
        confirm,
    );
    session.load().await;
    session
}

fn nav(session: &Session<impl parkit_dashboard_lib::Confirm>) -> (Option<ControlState>, Option<ControlState>) {
    (
        session.sink().control(Control::PreviousButton),
        session.sink().control(Control::NextButton),
    )
}

#[tokio::test]
async fn empty_list_enters_terminal_state_once() {
    let transport = Arc::new(FakeTransport::new());
    transport.respond(LIST, "[]");
    let mut session = loaded(&transport, approve).await;

    assert_eq!(session.cursor(), Cursor::Empty);
    assert_eq!(session.sink().control(Control::GalleryNav), Some(ControlState::Removed));
    assert_eq!(session.sink().control(Control::GalleryFrame), Some(ControlState::Removed));
    assert_eq!(session.sink().text(Field::GalleryPlaceholder), Some(EMPTY_GALLERY_TEXT));

    let writes = session.sink().writes();
    session.load().await;
    assert_eq!(session.cursor(), Cursor::Empty);
    assert_eq!(session.sink().writes(), writes);
    assert_eq!(transport.requests_to(LIST), 1);
}

#[tokio::test]
async fn first_graph_is_shown_with_caption() {
    let transport = three_graphs();
    let session = loaded(&transport, approve).await;

    assert_eq!(session.cursor(), Cursor::At(0));
    assert_eq!(session.sink().text(Field::GalleryImage), Some(FIRST));
    assert_eq!(
        session.sink().text(Field::GalleryCaption),
        Some("Graph generated: Wednesday, April 17, 2024 at 9:00:00 AM")
    );
    assert_eq!(nav(&session), (Some(ControlState::Hidden), Some(ControlState::Shown)));
}

#[tokio::test]
async fn navigation_stops_at_both_ends() {
    let transport = three_graphs();
    let mut session = loaded(&transport, approve).await;

    session.previous();
    assert_eq!(session.cursor(), Cursor::At(0));

    session.next();
    assert_eq!(session.cursor(), Cursor::At(1));
    assert_eq!(nav(&session), (Some(ControlState::Shown), Some(ControlState::Shown)));

    session.next();
    assert_eq!(session.cursor(), Cursor::At(2));
    assert_eq!(nav(&session), (Some(ControlState::Shown), Some(ControlState::Hidden)));

    let writes = session.sink().writes();
    session.next();
    assert_eq!(session.cursor(), Cursor::At(2));
    assert_eq!(session.sink().writes(), writes);
    assert_eq!(session.sink().text(Field::GalleryImage), Some(THIRD));
}

#[tokio::test]
async fn deleting_last_of_three_shows_the_new_last() {
    let transport = three_graphs();
    let mut session = loaded(&transport, approve).await;
    session.show(2);

    assert_eq!(session.delete_current().await, DeleteOutcome::Deleted);
    assert_eq!(session.cursor(), Cursor::At(1));
    assert_eq!(session.items().len(), 2);
    assert_eq!(session.sink().text(Field::GalleryImage), Some(SECOND));
    assert_eq!(nav(&session), (Some(ControlState::Shown), Some(ControlState::Hidden)));

    let posts = transport.posts();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].0, DELETE);
    assert_eq!(posts[0].1, vec![("file".to_string(), THIRD.to_string())]);
}

#[tokio::test]
async fn deleting_first_shows_the_new_first() {
    let transport = three_graphs();
    let mut session = loaded(&transport, approve).await;

    assert_eq!(session.delete_current().await, DeleteOutcome::Deleted);
    assert_eq!(session.cursor(), Cursor::At(0));
    assert_eq!(session.sink().text(Field::GalleryImage), Some(SECOND));
}

#[tokio::test]
async fn cancelled_delete_sends_nothing() {
    let transport = three_graphs();
    let asked = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&asked);
    let mut session = loaded(&transport, move |_: &str| {
        counter.fetch_add(1, Ordering::SeqCst);
        false
    })
    .await;

    assert_eq!(session.delete_current().await, DeleteOutcome::Cancelled);
    assert_eq!(asked.load(Ordering::SeqCst), 1);
    assert!(transport.posts().is_empty());
    assert_eq!(session.items().len(), 3);
    assert_eq!(session.cursor(), Cursor::At(0));
}

#[tokio::test]
async fn rejected_or_failed_delete_leaves_session_unchanged() {
    let transport = three_graphs();
    let mut session = loaded(&transport, approve).await;
    session.next();

    transport.respond(DELETE, r#"{"error":"File does not exist"}"#);
    assert_eq!(
        session.delete_current().await,
        DeleteOutcome::Rejected("File does not exist".into())
    );

    transport.fail(DELETE, "connection reset");
    assert_eq!(session.delete_current().await, DeleteOutcome::Failed);

    transport.respond(DELETE, "not json");
    assert_eq!(session.delete_current().await, DeleteOutcome::Failed);

    assert_eq!(session.items().len(), 3);
    assert_eq!(session.cursor(), Cursor::At(1));
    assert_eq!(session.sink().text(Field::GalleryImage), Some(SECOND));
}

#[tokio::test]
async fn deleting_every_graph_ends_in_empty_state() {
    let transport = Arc::new(FakeTransport::new());
    transport.respond(LIST, serde_json::json!([FIRST]).to_string());
    transport.respond(DELETE, r#"{"success":true}"#);
    let mut session = loaded(&transport, approve).await;

    assert_eq!(session.delete_current().await, DeleteOutcome::Deleted);
    assert_eq!(session.cursor(), Cursor::Empty);
    assert_eq!(session.sink().text(Field::GalleryPlaceholder), Some(EMPTY_GALLERY_TEXT));

    assert_eq!(session.delete_current().await, DeleteOutcome::NothingSelected);
    assert_eq!(transport.posts().len(), 1);
}

#[tokio::test]
async fn failed_list_load_stays_unloaded() {
    let transport = Arc::new(FakeTransport::new());
    transport.fail(LIST, "dns failure");
    let mut session = loaded(&transport, approve).await;

    assert_eq!(session.cursor(), Cursor::Unloaded);
    assert_eq!(session.sink().writes(), 0);
    assert_eq!(session.delete_current().await, DeleteOutcome::NothingSelected);

    transport.respond(LIST, serde_json::json!([SECOND]).to_string());
    session.load().await;
    assert_eq!(session.cursor(), Cursor::At(0));
}

#[tokio::test]
async fn save_writes_current_graph_to_download_dir() {
    let dir = tempfile::tempdir().unwrap();
    let transport = three_graphs();
    transport.respond(FIRST, vec![0x89, b'P', b'N', b'G']);

    let mut session = GallerySession::new(
        Arc::clone(&transport),
        config(dir.path().join("saved")),
        MemorySink::new(),
        approve,
    );
    session.load().await;

    let saved = session.save_current().await.unwrap();
    assert_eq!(saved, dir.path().join("saved").join("graph-2024-04-17-09-00-00.png"));
    assert_eq!(std::fs::read(&saved).unwrap(), vec![0x89, b'P', b'N', b'G']);

    session.next();
    assert_eq!(session.save_current().await, None);
}
