//! Tests for the Flick server client library.
//!
//! These tests use mock servers to verify accessor behavior without
//! requiring a real backend.

use flick_server_client::{
    AuthOutcome, FlickServerClient, NewAccount, ProfileUpdate, ServerClientError, ServerConfig,
};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn mock_movie(id: &str, title: &str, release_date: &str) -> serde_json::Value {
    serde_json::json!({
        "_id": id,
        "title": title,
        "originalTitle": null,
        "posterPath": format!("/{id}.jpg"),
        "overview": "A film.",
        "releaseDate": release_date,
        "runtime": 114,
        "genres": ["Action"],
        "rate": 7.8,
        "downloadLink": null
    })
}

fn mock_user(mylist: &[&str]) -> serde_json::Value {
    serde_json::json!({
        "_id": "u1",
        "username": "ana",
        "firstName": "Ana",
        "lastName": "Lovelace",
        "age": 30,
        "gender": "Female",
        "email": "ana@example.com",
        "avatar": null,
        "mylist": mylist
    })
}

async fn client_for(server: &MockServer) -> FlickServerClient {
    FlickServerClient::new(ServerConfig::new(server.uri())).expect("valid mock server url")
}

// =============================================================================
// Client Creation Tests
// =============================================================================

mod client_creation {
    use super::*;

    #[test]
    fn test_valid_urls_accepted() {
        assert!(FlickServerClient::new(ServerConfig::new("https://example.com")).is_ok());
        assert!(FlickServerClient::new(ServerConfig::new("http://localhost:3000")).is_ok());
    }

    #[test]
    fn test_empty_url_rejected() {
        let result = FlickServerClient::new(ServerConfig::new(""));
        match result.unwrap_err() {
            ServerClientError::InvalidUrl(msg) => assert!(msg.contains("empty")),
            e => panic!("Expected InvalidUrl error, got: {e:?}"),
        }
    }

    #[test]
    fn test_url_without_scheme_rejected() {
        let result = FlickServerClient::new(ServerConfig::new("example.com"));
        assert!(matches!(
            result.unwrap_err(),
            ServerClientError::InvalidUrl(_)
        ));
    }

    #[test]
    fn test_trailing_slashes_stripped() {
        let client =
            FlickServerClient::new(ServerConfig::new("https://example.com///")).unwrap();
        assert!(!client.base_url().ends_with('/'));
    }
}

// =============================================================================
// Catalog Tests
// =============================================================================

mod catalog {
    use super::*;

    #[tokio::test]
    async fn test_list_all_movies() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/getMovies"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                mock_movie("m1", "Heat", "1995-12-15"),
                mock_movie("m2", "Ronin", "1998-09-25"),
            ])))
            .mount(&server)
            .await;

        let movies = client_for(&server).await.catalog().list_movies(None).await.unwrap();
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].id, "m1");
        assert_eq!(movies[0].title.as_deref(), Some("Heat"));
        assert_eq!(movies[0].runtime, Some(114));
    }

    #[tokio::test]
    async fn test_list_movies_by_genre_uses_genre_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/getMovies/28"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([mock_movie("m1", "Heat", "1995-12-15")])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let movies = client_for(&server)
            .await
            .catalog()
            .list_movies(Some("28"))
            .await
            .unwrap();
        assert_eq!(movies.len(), 1);
    }

    #[tokio::test]
    async fn test_search_percent_encodes_the_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/searchMovies/star%20wars"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let movies = client_for(&server)
            .await
            .catalog()
            .search_movies("star wars")
            .await
            .unwrap();
        assert!(movies.is_empty());
    }

    #[tokio::test]
    async fn test_similar_movies() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/getSimilarMovies/m1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([mock_movie("m9", "Thief", "1981-03-27")])),
            )
            .mount(&server)
            .await;

        let movies = client_for(&server)
            .await
            .catalog()
            .similar_movies("m1")
            .await
            .unwrap();
        assert_eq!(movies[0].id, "m9");
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/getMovies"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .await
            .catalog()
            .list_movies(None)
            .await
            .unwrap_err();
        assert!(matches!(err, ServerClientError::ParseError(_)));
    }
}

// =============================================================================
// My-List Tests
// =============================================================================

mod my_list {
    use super::*;

    #[tokio::test]
    async fn test_add_returns_echoed_user() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/add-to-mylist/m1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"user": mock_user(&["m1"])})),
            )
            .mount(&server)
            .await;

        let user = client_for(&server).await.my_list().add("m1").await.unwrap();
        assert_eq!(user.mylist, vec!["m1".to_string()]);
    }

    #[tokio::test]
    async fn test_remove_returns_echoed_user() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/remove-from-mylist/m1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"user": mock_user(&[])})),
            )
            .mount(&server)
            .await;

        let user = client_for(&server).await.my_list().remove("m1").await.unwrap();
        assert!(user.mylist.is_empty());
    }

    #[tokio::test]
    async fn test_movies_unwraps_the_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/mylist"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "moviesInMyList": [mock_movie("m1", "Heat", "1995-12-15")]
            })))
            .mount(&server)
            .await;

        let movies = client_for(&server).await.my_list().movies().await.unwrap();
        assert_eq!(movies.len(), 1);
    }

    #[tokio::test]
    async fn test_ids_and_membership_check() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/mylistid"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"mylist": ["m1", "m2"]})),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/check-in-mylist/m2"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"isInList": true})),
            )
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        assert_eq!(client.my_list().ids().await.unwrap().len(), 2);
        assert!(client.my_list().contains("m2").await.unwrap());
    }

    #[tokio::test]
    async fn test_server_fault_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/add-to-mylist/m1"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = client_for(&server).await.my_list().add("m1").await.unwrap_err();
        match err {
            ServerClientError::ServerError { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            e => panic!("Expected ServerError, got: {e:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_session_is_auth_required() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/mylist"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let err = client_for(&server).await.my_list().movies().await.unwrap_err();
        assert!(matches!(err, ServerClientError::AuthRequired));
    }
}

// =============================================================================
// Watched-List Tests
// =============================================================================

mod watched {
    use super::*;

    #[tokio::test]
    async fn test_mark_sends_watched_time_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/update-watched-time/m1"))
            .and(body_json(serde_json::json!({"watchedTime": 0.0})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server).await.watched().mark("m1", 0.0).await.unwrap();
    }

    #[tokio::test]
    async fn test_unmark_echoes_the_movie_id_in_the_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/remove-watched-movie/m1"))
            .and(body_json(serde_json::json!({"movieID": "m1"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server).await.watched().unmark("m1").await.unwrap();
    }

    #[tokio::test]
    async fn test_watchtime_value() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/watched-time/m1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"watchtime": 42.5})),
            )
            .mount(&server)
            .await;

        let watchtime = client_for(&server).await.watched().watchtime("m1").await.unwrap();
        assert_eq!(watchtime, 42.5);
    }

    #[tokio::test]
    async fn test_watched_movies_entries() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/watched-movies"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "watchedMovies": [
                    {"movie": mock_movie("m1", "Heat", "1995-12-15"), "watchedTime": 600.0}
                ]
            })))
            .mount(&server)
            .await;

        let entries = client_for(&server).await.watched().movies().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].movie.id, "m1");
        assert_eq!(entries[0].watched_time, 600.0);
    }

    #[tokio::test]
    async fn test_watched_membership_check() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/is-in-watched-list/m1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"isInWatchedMovies": false})),
            )
            .mount(&server)
            .await;

        assert!(!client_for(&server).await.watched().contains("m1").await.unwrap());
    }
}

// =============================================================================
// Auth & Profile Tests
// =============================================================================

mod auth {
    use super::*;

    #[tokio::test]
    async fn test_login_success_grants_user() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .and(body_json(serde_json::json!({
                "username": "ana",
                "password": "hunter2"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "user": mock_user(&["m1"])
            })))
            .mount(&server)
            .await;

        let outcome = client_for(&server)
            .await
            .auth()
            .login("ana", "hunter2")
            .await
            .unwrap();
        match outcome {
            AuthOutcome::Granted(user) => assert_eq!(user.username, "ana"),
            AuthOutcome::Rejected { .. } => panic!("expected login to be granted"),
        }
    }

    #[tokio::test]
    async fn test_login_bad_credentials_is_rejected_not_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"success": false})),
            )
            .mount(&server)
            .await;

        let outcome = client_for(&server)
            .await
            .auth()
            .login("ana", "wrong")
            .await
            .unwrap();
        assert!(matches!(outcome, AuthOutcome::Rejected { message: None }));
    }

    #[tokio::test]
    async fn test_login_server_fault_stays_in_the_error_channel() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(ResponseTemplate::new(500).set_body_string("db down"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .await
            .auth()
            .login("ana", "hunter2")
            .await
            .unwrap_err();
        assert!(matches!(err, ServerClientError::ServerError { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_session_cookie_rides_along_on_later_requests() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("set-cookie", "connect.sid=abc123; Path=/; HttpOnly")
                    .set_body_json(serde_json::json!({
                        "success": true,
                        "user": mock_user(&[])
                    })),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/mylistid"))
            .and(header("cookie", "connect.sid=abc123"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"mylist": []})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        client.auth().login("ana", "hunter2").await.unwrap();
        client.my_list().ids().await.unwrap();
    }

    #[tokio::test]
    async fn test_register_duplicate_username_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/register"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": false,
                "error": "Username already taken"
            })))
            .mount(&server)
            .await;

        let account = NewAccount {
            first_name: "Ana".to_string(),
            last_name: "Lovelace".to_string(),
            age: 30,
            gender: flick_core::Gender::Female,
            email: "ana@example.com".to_string(),
            username: "ana".to_string(),
            password: "hunter2".to_string(),
        };
        let outcome = client_for(&server).await.auth().register(&account).await.unwrap();
        match outcome {
            AuthOutcome::Rejected { message } => {
                assert_eq!(message.as_deref(), Some("Username already taken"));
            }
            AuthOutcome::Granted(_) => panic!("expected registration to be rejected"),
        }
    }

    #[tokio::test]
    async fn test_check_session_both_ways() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/check-auth"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "authenticated": true,
                "user": mock_user(&[])
            })))
            .mount(&server)
            .await;

        let check = client_for(&server).await.auth().check_session().await.unwrap();
        assert!(check.authenticated);
        assert!(check.user.is_some());

        let anon = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/check-auth"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"authenticated": false})),
            )
            .mount(&anon)
            .await;

        let check = client_for(&anon).await.auth().check_session().await.unwrap();
        assert!(!check.authenticated);
        assert!(check.user.is_none());
    }

    #[tokio::test]
    async fn test_logout_ack() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/logout"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
            .mount(&server)
            .await;

        client_for(&server).await.auth().logout().await.unwrap();
    }

    #[tokio::test]
    async fn test_profile_update_rejection_carries_the_message() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/profile"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": false,
                "error": "Email already in use"
            })))
            .mount(&server)
            .await;

        let update = ProfileUpdate {
            first_name: "Ana".to_string(),
            last_name: "Lovelace".to_string(),
            age: 31,
            gender: flick_core::Gender::Female,
            email: "taken@example.com".to_string(),
        };
        let outcome = client_for(&server).await.profile().update(&update).await.unwrap();
        match outcome {
            AuthOutcome::Rejected { message } => {
                assert_eq!(message.as_deref(), Some("Email already in use"));
            }
            AuthOutcome::Granted(_) => panic!("expected profile update to be rejected"),
        }
    }

    #[tokio::test]
    async fn test_unreachable_server() {
        let client =
            FlickServerClient::new(ServerConfig::new("http://127.0.0.1:9")).unwrap();
        let err = client.auth().check_session().await.unwrap_err();
        match err {
            ServerClientError::ServerUnreachable(_) | ServerClientError::Request(_) => {}
            e => panic!("Expected ServerUnreachable or Request error, got: {e:?}"),
        }
    }
}
