mod common;

use axum::http::StatusCode;
use common::{authed, login_token, read_json, test_app};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn lists_seeded_records_and_derived_views() {
    let (app, _) = test_app();
    let token = login_token(&app, "prof", "senha").await;

    let response = app
        .clone()
        .oneshot(authed("GET", "/alunos", &token, None))
        .await
        .expect("list");
    assert_eq!(response.status(), StatusCode::OK);
    let records = read_json(response).await;
    assert_eq!(records.as_array().unwrap().len(), 20);
    assert_eq!(records[1]["nome"], "Maria");
    assert_eq!(records[1]["ra"], "67890");

    let response = app
        .clone()
        .oneshot(authed("GET", "/alunos/medias", &token, None))
        .await
        .expect("medias");
    assert_eq!(response.status(), StatusCode::OK);
    let averages = read_json(response).await;
    assert_eq!(averages[0], json!({ "nome": "João", "media": "7.50" }));
    assert!(averages
        .as_array()
        .unwrap()
        .contains(&json!({ "nome": "Maria", "media": "5.75" })));

    let response = app
        .oneshot(authed("GET", "/alunos/aprovados", &token, None))
        .await
        .expect("aprovados");
    assert_eq!(response.status(), StatusCode::OK);
    let statuses = read_json(response).await;
    let statuses = statuses.as_array().unwrap();
    assert!(statuses.contains(&json!({ "nome": "Maria", "status": "Reprovado" })));
    assert!(statuses.contains(&json!({ "nome": "João", "status": "Aprovado" })));
}

#[tokio::test]
async fn get_by_id_and_not_found() {
    let (app, _) = test_app();
    let token = login_token(&app, "prof", "senha").await;

    let response = app
        .clone()
        .oneshot(authed("GET", "/alunos/3", &token, None))
        .await
        .expect("get");
    assert_eq!(response.status(), StatusCode::OK);
    let record = read_json(response).await;
    assert_eq!(record["nome"], "Pedro");
    assert_eq!(record["nota1"], 9.0);

    for path in ["/alunos/999", "/alunos/abc"] {
        let response = app
            .clone()
            .oneshot(authed("GET", path, &token, None))
            .await
            .expect("missing");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            read_json(response).await,
            json!({ "message": "Aluno não encontrado!" })
        );
    }
}

#[tokio::test]
async fn create_validates_presence_and_allows_duplicate_ids() {
    let (app, state) = test_app();
    let token = login_token(&app, "prof", "senha").await;

    let incomplete = json!({ "id": 21, "nome": "Rita", "nota1": 7.0, "nota2": 8.0 });
    let response = app
        .clone()
        .oneshot(authed("POST", "/alunos", &token, Some(incomplete)))
        .await
        .expect("incomplete");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        read_json(response).await,
        json!({ "message": "Dados incompletos!" })
    );

    let non_numeric = json!({ "id": 21, "nome": "Rita", "ra": "1", "nota1": "dez", "nota2": 8.0 });
    let response = app
        .clone()
        .oneshot(authed("POST", "/alunos", &token, Some(non_numeric)))
        .await
        .expect("non numeric");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(state.students.len(), 20);

    let duplicate = json!({ "id": 1, "nome": "Outro João", "ra": "00001", "nota1": 6.0, "nota2": 6.0 });
    let response = app
        .clone()
        .oneshot(authed("POST", "/alunos", &token, Some(duplicate)))
        .await
        .expect("create");
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        read_json(response).await,
        json!({ "message": "Aluno cadastrado com sucesso!" })
    );

    let sharing_id = state
        .students
        .list_all()
        .into_iter()
        .filter(|r| r.id == 1)
        .count();
    assert_eq!(sharing_id, 2);

    let response = app
        .oneshot(authed("GET", "/alunos/aprovados", &token, None))
        .await
        .expect("aprovados");
    let statuses = read_json(response).await;
    // Exactly 6.0 passes
    assert_eq!(
        statuses[20],
        json!({ "nome": "Outro João", "status": "Aprovado" })
    );
}

#[tokio::test]
async fn partial_update_touches_only_given_fields() {
    let (app, state) = test_app();
    let token = login_token(&app, "prof", "senha").await;

    let response = app
        .clone()
        .oneshot(authed("PUT", "/alunos/2", &token, Some(json!({ "nota1": 9.0 }))))
        .await
        .expect("update");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        read_json(response).await,
        json!({ "message": "Aluno atualizado com sucesso!" })
    );

    let maria = state.students.get_by_id(2).unwrap();
    assert_eq!(maria.nome, "Maria");
    assert_eq!(maria.ra, "67890");
    assert_eq!(maria.nota1, 9.0);
    assert_eq!(maria.nota2, 5.5);

    let response = app
        .oneshot(authed("PUT", "/alunos/999", &token, Some(json!({ "nome": "X" }))))
        .await
        .expect("missing");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_removes_first_match_and_404s_otherwise() {
    let (app, state) = test_app();
    let token = login_token(&app, "prof", "senha").await;

    let response = app
        .clone()
        .oneshot(authed("DELETE", "/alunos/999", &token, None))
        .await
        .expect("missing");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(state.students.len(), 20);

    let response = app
        .clone()
        .oneshot(authed("DELETE", "/alunos/4", &token, None))
        .await
        .expect("delete");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        read_json(response).await,
        json!({ "message": "Aluno deletado com sucesso!" })
    );
    assert_eq!(state.students.len(), 19);

    let response = app
        .oneshot(authed("GET", "/alunos/4", &token, None))
        .await
        .expect("gone");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn apps_do_not_share_state() {
    let (first, first_state) = test_app();
    let (_second, second_state) = test_app();
    let token = login_token(&first, "prof", "senha").await;

    first
        .oneshot(authed("DELETE", "/alunos/1", &token, None))
        .await
        .expect("delete");

    assert_eq!(first_state.students.len(), 19);
    assert_eq!(second_state.students.len(), 20);
    assert!(second_state.auth.user_store.is_empty());
}
