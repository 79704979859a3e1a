use super::*;
use crate::app::Controller;
use crate::domain::{DraftPatch, ShelfsyncError};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// In-process stand-in for the lending service, on an ephemeral port.
#[derive(Clone)]
struct ServiceState {
    books: Arc<Mutex<Vec<Book>>>,
    next_id: Arc<Mutex<i64>>,
}

async fn list_books(State(state): State<ServiceState>) -> Json<Vec<Book>> {
    Json(state.books.lock().unwrap().clone())
}

async fn create_book(State(state): State<ServiceState>, Json(book): Json<Book>) -> StatusCode {
    let mut next_id = state.next_id.lock().unwrap();
    let mut stored = book;
    stored.id = Some(*next_id);
    *next_id += 1;
    state.books.lock().unwrap().push(stored);
    StatusCode::CREATED
}

async fn update_book(State(state): State<ServiceState>, Json(book): Json<Book>) -> StatusCode {
    let mut books = state.books.lock().unwrap();
    if let Some(slot) = books.iter_mut().find(|b| b.id == book.id) {
        *slot = book;
    }
    StatusCode::OK
}

async fn delete_book(State(state): State<ServiceState>, Path(id): Path<i64>) -> StatusCode {
    state.books.lock().unwrap().retain(|b| b.id != Some(id));
    StatusCode::OK
}

async fn spawn_service(initial: Vec<Book>) -> String {
    let next_id = initial.iter().filter_map(|b| b.id).max().unwrap_or(0) + 1;
    let state = ServiceState {
        books: Arc::new(Mutex::new(initial)),
        next_id: Arc::new(Mutex::new(next_id)),
    };
    let app = Router::new()
        .route("/books", get(list_books))
        .route("/create-book", post(create_book))
        .route("/books/update_book", put(update_book))
        .route("/books/:id", delete(delete_book))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    format!("http://{addr}")
}

async fn spawn_failing_service() -> String {
    let app = Router::new().route(
        "/books",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    format!("http://{addr}")
}

fn sample_book(id: Option<i64>, title: &str) -> Book {
    Book {
        id,
        title: title.to_string(),
        author: "codingwithDipika".to_string(),
        description: "A very nice book".to_string(),
        rating: 5,
        published_date: 2012,
    }
}

#[tokio::test]
async fn list_fetches_the_collection() {
    let base = spawn_service(vec![
        sample_book(Some(1), "Computer Science Pro"),
        sample_book(Some(2), "Be fast with FastAPI"),
    ])
    .await;
    let store = HttpRecordStore::new(base);

    let books = store.list().await.expect("list");
    assert_eq!(books.len(), 2);
    assert_eq!(books[0].title, "Computer Science Pro");
    assert_eq!(books[1].id, Some(2));
}

#[tokio::test]
async fn create_submits_a_draft_and_the_service_assigns_the_id() {
    let base = spawn_service(vec![]).await;
    let store = HttpRecordStore::new(base);

    store
        .create(&sample_book(None, "Master Endpoints"))
        .await
        .expect("create");

    let books = store.list().await.expect("list");
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].id, Some(1));
    assert_eq!(books[0].title, "Master Endpoints");
}

#[tokio::test]
async fn update_replaces_the_matching_record() {
    let base = spawn_service(vec![sample_book(Some(1), "HP1"), sample_book(Some(2), "HP2")]).await;
    let store = HttpRecordStore::new(base);

    let mut revised = sample_book(Some(2), "HP2 (revised)");
    revised.rating = 3;
    store.update(&revised).await.expect("update");

    let books = store.list().await.expect("list");
    assert_eq!(books.len(), 2);
    assert_eq!(books[0].title, "HP1");
    assert_eq!(books[1].title, "HP2 (revised)");
    assert_eq!(books[1].rating, 3);
}

#[tokio::test]
async fn delete_removes_the_matching_record() {
    let base = spawn_service(vec![sample_book(Some(1), "HP1"), sample_book(Some(2), "HP2")]).await;
    let store = HttpRecordStore::new(base);

    store.delete(1).await.expect("delete");

    let books = store.list().await.expect("list");
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].id, Some(2));
}

#[tokio::test]
async fn server_failure_maps_to_a_transport_error() {
    let base = spawn_failing_service().await;
    let store = HttpRecordStore::new(base);

    let err = store.list().await.expect_err("5xx should fail");
    assert!(matches!(err, ShelfsyncError::Transport(_)));
}

#[tokio::test]
async fn unreachable_service_maps_to_a_transport_error() {
    // Bind and immediately drop a listener so the port is very likely free.
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let store = HttpRecordStore::new(format!("http://{addr}"));
    let err = store.list().await.expect_err("connection should fail");
    assert!(matches!(err, ShelfsyncError::Transport(_)));
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_tolerated() {
    let base = spawn_service(vec![sample_book(Some(1), "HP1")]).await;
    let store = HttpRecordStore::new(format!("{base}/"));

    assert_eq!(store.base_url(), base);
    let books = store.list().await.expect("list");
    assert_eq!(books.len(), 1);
}

#[tokio::test]
async fn controller_workflow_end_to_end_over_http() {
    let base = spawn_service(vec![sample_book(Some(1), "HP1")]).await;
    let mut controller = Controller::new(HttpRecordStore::new(base));

    controller.refresh().await.expect("initial refresh");
    assert_eq!(controller.view().books.len(), 1);

    controller.begin_create().expect("open create modal");
    controller
        .edit_field(DraftPatch {
            title: Some("Dune".to_string()),
            author: Some("Herbert".to_string()),
            description: Some("Desert planet".to_string()),
            rating: Some("5".to_string()),
            published_date: Some("1965".to_string()),
        })
        .expect("patch draft");
    controller.confirm_create().await.expect("confirm create");

    let view = controller.view();
    assert_eq!(view.books.len(), 2);
    let dune = view.books.iter().find(|b| b.title == "Dune").expect("created");
    assert_eq!(dune.id, Some(2));
    assert_eq!(dune.published_date, 1965);

    controller.delete_record(1).await.expect("delete");
    let view = controller.view();
    assert_eq!(view.books.len(), 1);
    assert_eq!(view.books[0].title, "Dune");
}
