use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rtracker::api::ApiClient;
use rtracker::api::auth::Credentials;
use rtracker::core::month::{Direction, MonthView, load_month};
use rtracker::core::relay::{Intent, MutationRelay, Refresh};
use rtracker::errors::AppError;
use rtracker::models::event::NewEvent;
use rtracker::models::habit::NewHabit;
use rtracker::models::habit_log::HabitLog;
use rtracker::models::project::ProjectPayload;
use rtracker::models::task::TaskPayload;
use rtracker::session::Session;
use serde_json::{Value, json};
use wiremock::matchers::{any, body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;
use common::{TOKEN, config_for, data, event_json, habit_json, session};

fn jan(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
}

fn client(server: &MockServer) -> ApiClient {
    ApiClient::new(&config_for(&server.uri())).unwrap()
}

async fn mount_month(server: &MockServer, habits: Value, events: Value) {
    Mock::given(method("GET"))
        .and(path("/api/v1/habits"))
        .respond_with(ResponseTemplate::new(200).set_body_json(data(habits)))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(data(events)))
        .mount(server)
        .await;
}

#[tokio::test]
async fn list_habits_sends_token_and_paging() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/habits"))
        .and(header("authorization", format!("Bearer {TOKEN}").as_str()))
        .and(query_param("pageNumber", "1"))
        .and(query_param("pageSize", "10000"))
        .and(query_param("date", "2024-01-01T00:00:00.000Z"))
        .respond_with(ResponseTemplate::new(200).set_body_json(data(json!([
            habit_json("h1", "Read", json!({ "6": true }))
        ]))))
        .expect(1)
        .mount(&server)
        .await;

    let habits = client(&server)
        .list_habits(&session(), jan(1))
        .await
        .unwrap();
    assert_eq!(habits.len(), 1);
    assert_eq!(habits[0].name, "Read");
    assert!(habits[0].is_checked(6));
}

#[tokio::test]
async fn error_body_message_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/habits/h1"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "message": "Habit not found" })))
        .mount(&server)
        .await;

    let err = client(&server)
        .delete_habit(&session(), "h1")
        .await
        .unwrap_err();
    match err {
        AppError::Api { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Habit not found");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn missing_message_falls_back_to_action_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/habit-log/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let log = HabitLog {
        habit_id: "h1".into(),
        date: jan(6),
        is_checked: true,
    };
    let err = client(&server)
        .update_log(&session(), &log)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Update log failed (HTTP 500)");
}

#[tokio::test]
async fn anonymous_session_never_reaches_the_server() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(data(json!([]))))
        .expect(0)
        .mount(&server)
        .await;

    let err = client(&server)
        .list_events(&Session::anonymous(), jan(1))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Unauthorized));
}

#[tokio::test]
async fn placeholder_habit_is_never_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let log = HabitLog {
        habit_id: "new".into(),
        date: jan(6),
        is_checked: true,
    };
    let err = client(&server)
        .update_log(&session(), &log)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::SentinelHabit));
}

#[tokio::test]
async fn login_returns_an_authenticated_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .and(body_json(json!({ "email": "ada@example.test", "password": "pw" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tokens": "abc",
            "data": { "_id": "u1", "name": "Ada", "email": "ada@example.test", "role": "admin" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let session = client(&server)
        .login(&Credentials {
            email: "ada@example.test".into(),
            password: "pw".into(),
        })
        .await
        .unwrap();
    assert_eq!(session.token().unwrap(), "abc");
    assert_eq!(session.user().unwrap().name, "Ada");
}

#[tokio::test]
async fn login_failure_uses_default_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({})))
        .mount(&server)
        .await;

    let err = client(&server)
        .login(&Credentials {
            email: "ada@example.test".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Login failed (HTTP 401)");
}

#[tokio::test]
async fn event_body_omits_absent_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/events"))
        .and(body_json(json!({
            "name": "Trip",
            "startDate": "2024-01-05",
            "endDate": "2024-01-07",
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(data(json!({}))))
        .expect(1)
        .mount(&server)
        .await;

    let event = NewEvent {
        name: "Trip".into(),
        start_date: jan(5),
        end_date: jan(7),
        color: None,
        note: None,
        disabled_habit_ids: None,
    };
    client(&server)
        .create_event(&session(), &event)
        .await
        .unwrap();
}

#[tokio::test]
async fn blank_ids_never_reach_the_server() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(data(json!({}))))
        .expect(0)
        .mount(&server)
        .await;

    let api = client(&server);
    let session = session();
    let rename = ProjectPayload {
        name: Some("Renamed".into()),
        description: None,
    };

    let results = vec![
        api.delete_task(&session, "").await,
        api.update_task(&session, " ", &TaskPayload::default()).await,
        api.delete_project(&session, "").await,
        api.update_project(&session, "", &rename).await,
        api.get_project(&session, "").await.map(|_| ()),
        api.delete_user(&session, "").await,
        api.delete_event(&session, "").await,
    ];
    for result in results {
        assert!(matches!(result, Err(AppError::EmptyValue(_))));
    }
}

#[tokio::test]
async fn task_title_is_required() {
    let server = MockServer::start().await;
    let err = client(&server)
        .create_task(&session(), &TaskPayload::default())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::EmptyValue(_)));
}

#[tokio::test]
async fn month_view_builds_grid_from_both_endpoints() {
    let server = MockServer::start().await;
    mount_month(
        &server,
        json!([habit_json("h1", "Read", json!({ "6": true }))]),
        json!([event_json(
            "e1",
            "Trip",
            &["2024-01-05T00:00:00.000Z", "2024-01-06T00:00:00.000Z"],
            &["h1"]
        )]),
    )
    .await;

    let api = client(&server);
    let mut view = MonthView::new(jan(17));
    assert!(view.refresh(&api, &session()).await.unwrap());
    assert!(view.is_loaded());

    let grid = view.grid();
    assert_eq!(grid.columns.len(), 31);
    assert_eq!(grid.rows.len(), 2);
    assert!(grid.rows[1].is_sentinel);

    let cell = grid.cell("h1", 6).unwrap();
    assert!(cell.checked);
    assert!(cell.disabled);
    assert_eq!(cell.event_id.as_deref(), Some("e1"));
    assert_eq!(grid.toggle("h1", 6), None);
    assert!(grid.toggle("h1", 7).is_some());
}

#[tokio::test]
async fn stale_fetch_is_discarded() {
    let server = MockServer::start().await;
    mount_month(&server, json!([habit_json("h1", "Read", json!({}))]), json!([])).await;
    let api = client(&server);
    let session = session();

    let mut view = MonthView::new(jan(17));
    let january = view.begin_fetch();
    let february = view.shift(Direction::Next);

    let late = load_month(&api, &session, january.month).await.unwrap();
    let fresh = load_month(&api, &session, february.month).await.unwrap();

    assert!(view.commit(february, fresh));
    assert!(!view.commit(january, late));
    assert_eq!(view.title(), "February 2024");
    assert!(view.is_loaded());
}

#[tokio::test]
async fn relay_reloads_after_acknowledged_toggle() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/habit-log/"))
        .and(body_json(json!({ "habitId": "h1", "date": "2024-01-07", "isChecked": true })))
        .respond_with(ResponseTemplate::new(200).set_body_json(data(json!({}))))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/habits"))
        .respond_with(ResponseTemplate::new(200).set_body_json(data(json!([
            habit_json("h1", "Read", json!({}))
        ]))))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(data(json!([]))))
        .expect(2)
        .mount(&server)
        .await;

    let api = client(&server);
    let session = session();
    let mut view = MonthView::new(jan(1));
    view.refresh(&api, &session).await.unwrap();

    let intent = view.grid().toggle("h1", 7).unwrap();
    let relay = MutationRelay::new(&api, &session);
    assert!(relay.submit_and_reload(&intent, &mut view).await.unwrap());
}

#[tokio::test]
async fn relay_reports_what_to_refresh() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/habits"))
        .and(body_json(json!({ "name": "Stretch" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(data(json!({}))))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server);
    let session = session();
    let relay = MutationRelay::new(&api, &session);
    let refresh = relay
        .submit(&Intent::CreateHabit(NewHabit::named("Stretch")))
        .await
        .unwrap();
    assert_eq!(refresh, Refresh::Habits);
}
