//! End-to-end tests for the GraphQL API against an in-memory database.

use async_graphql::{Request, Response, Value as GqlValue};
use staff_server::db::repository::UserRepository;
use staff_server::{Config, DbService, JwtConfig, ServerState, ServiceSchema, build_schema};

async fn test_state() -> ServerState {
    let db = DbService::new_in_memory().await.expect("in-memory db");
    let config = Config {
        http_port: 0,
        database_path: String::new(),
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            expiration_minutes: 60,
        },
    };
    ServerState::new(config, db.db)
}

async fn test_schema() -> (ServiceSchema, ServerState) {
    let state = test_state().await;
    (build_schema(state.clone()), state)
}

async fn execute(schema: &ServiceSchema, query: &str) -> Response {
    schema.execute(Request::new(query)).await
}

fn data(resp: &Response) -> serde_json::Value {
    assert!(resp.errors.is_empty(), "unexpected errors: {:?}", resp.errors);
    resp.data.clone().into_json().expect("json data")
}

fn error_code(resp: &Response) -> String {
    let err = resp.errors.first().expect("expected an error");
    match err.extensions.as_ref().and_then(|e| e.get("code")) {
        Some(GqlValue::String(code)) => code.clone(),
        other => panic!("missing error code on {:?}: {:?}", err.message, other),
    }
}

fn add_employee_mutation(first: &str, email: &str, designation: &str, department: &str) -> String {
    format!(
        r#"mutation {{
            addEmployee(
                first_name: "{first}",
                last_name: "Stone",
                email: "{email}",
                gender: Male,
                designation: "{designation}",
                salary: 1200,
                date_of_joining: "2021-03-04",
                department: "{department}"
            ) {{ id first_name email salary department employee_photo date_of_joining }}
        }}"#
    )
}

// ── Authentication ──────────────────────────────────────────────────

#[tokio::test]
async fn signup_returns_a_decodable_token() {
    let (schema, state) = test_schema().await;

    let resp = execute(
        &schema,
        r#"mutation { signup(username: "alice", email: "alice@x.com", password: "pw123") {
            token user { id username email }
        } }"#,
    )
    .await;

    let data = data(&resp);
    assert_eq!(data["signup"]["user"]["username"], "alice");
    assert_eq!(data["signup"]["user"]["email"], "alice@x.com");

    let token = data["signup"]["token"].as_str().expect("token");
    let claims = state.get_jwt_service().validate_token(token).expect("claims");
    assert_eq!(claims.username, "alice");
    assert_eq!(claims.email, "alice@x.com");
    assert_eq!(claims.sub, data["signup"]["user"]["id"].as_str().unwrap());
}

#[tokio::test]
async fn signup_duplicate_username_or_email_is_rejected() {
    let (schema, state) = test_schema().await;

    let signup = r#"mutation { signup(username: "alice", email: "alice@x.com", password: "pw") { token } }"#;
    assert!(execute(&schema, signup).await.errors.is_empty());

    // Same username, different email
    let resp = execute(
        &schema,
        r#"mutation { signup(username: "alice", email: "other@x.com", password: "pw") { token } }"#,
    )
    .await;
    assert_eq!(error_code(&resp), "BAD_USER_INPUT");

    // Same email, different username
    let resp = execute(
        &schema,
        r#"mutation { signup(username: "bob", email: "alice@x.com", password: "pw") { token } }"#,
    )
    .await;
    assert_eq!(error_code(&resp), "BAD_USER_INPUT");

    // No second record was created
    let repo = UserRepository::new(state.get_db());
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn login_by_username_or_email() {
    let (schema, _state) = test_schema().await;

    execute(
        &schema,
        r#"mutation { signup(username: "bob", email: "bob@x.com", password: "pw123") { token } }"#,
    )
    .await;

    let resp = execute(
        &schema,
        r#"query { login(username: "bob", password: "pw123") { token user { email } } }"#,
    )
    .await;
    assert_eq!(data(&resp)["login"]["user"]["email"], "bob@x.com");

    let resp = execute(
        &schema,
        r#"query { login(email: "bob@x.com", password: "pw123") { user { username } } }"#,
    )
    .await;
    assert_eq!(data(&resp)["login"]["user"]["username"], "bob");
}

#[tokio::test]
async fn login_failures_are_distinguishable() {
    let (schema, _state) = test_schema().await;

    execute(
        &schema,
        r#"mutation { signup(username: "bob", email: "bob@x.com", password: "pw123") { token } }"#,
    )
    .await;

    // Wrong password
    let resp = execute(
        &schema,
        r#"query { login(username: "bob", password: "nope") { token } }"#,
    )
    .await;
    assert_eq!(error_code(&resp), "UNAUTHENTICATED");

    // Unknown user
    let resp = execute(
        &schema,
        r#"query { login(username: "ghost", password: "pw123") { token } }"#,
    )
    .await;
    assert_eq!(error_code(&resp), "NOT_FOUND");

    // Neither username nor email supplied resolves to no user
    let resp = execute(&schema, r#"query { login(password: "pw123") { token } }"#).await;
    assert_eq!(error_code(&resp), "NOT_FOUND");
}

// ── Employee CRUD ───────────────────────────────────────────────────

#[tokio::test]
async fn add_employee_then_fetch_by_id() {
    let (schema, _state) = test_schema().await;

    let resp = execute(
        &schema,
        &add_employee_mutation("Bob", "bob@corp.com", "Engineer", "Eng"),
    )
    .await;
    let created = data(&resp);
    assert_eq!(created["addEmployee"]["salary"], 1200.0);
    assert_eq!(created["addEmployee"]["employee_photo"], "");
    assert_eq!(created["addEmployee"]["date_of_joining"], "2021-03-04");

    let id = created["addEmployee"]["id"].as_str().unwrap().to_string();
    let resp = execute(
        &schema,
        &format!(r#"query {{ getEmployeeById(id: "{id}") {{ email first_name }} }}"#),
    )
    .await;
    let fetched = data(&resp);
    assert_eq!(fetched["getEmployeeById"]["email"], "bob@corp.com");
    assert_eq!(fetched["getEmployeeById"]["first_name"], "Bob");
}

#[tokio::test]
async fn get_employee_by_id_unknown_is_not_found() {
    let (schema, _state) = test_schema().await;
    let resp = execute(
        &schema,
        r#"query { getEmployeeById(id: "employee:missing") { id } }"#,
    )
    .await;
    assert_eq!(error_code(&resp), "NOT_FOUND");
}

#[tokio::test]
async fn duplicate_email_is_rejected_and_nothing_is_created() {
    let (schema, _state) = test_schema().await;

    execute(
        &schema,
        &add_employee_mutation("Bob", "bob@corp.com", "Engineer", "Eng"),
    )
    .await;

    let resp = execute(
        &schema,
        &add_employee_mutation("Robert", "bob@corp.com", "Manager", "Sales"),
    )
    .await;
    assert_eq!(error_code(&resp), "BAD_USER_INPUT");

    let resp = execute(&schema, r#"query { getAllEmployees { email } }"#).await;
    let all = data(&resp);
    assert_eq!(all["getAllEmployees"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn salary_below_minimum_is_rejected_on_create_and_update() {
    let (schema, _state) = test_schema().await;

    let resp = execute(
        &schema,
        r#"mutation {
            addEmployee(
                first_name: "Low", last_name: "Pay", email: "low@corp.com",
                gender: Other, designation: "Intern", salary: 999,
                date_of_joining: "2024-06-01", department: "Eng"
            ) { id }
        }"#,
    )
    .await;
    assert_eq!(error_code(&resp), "BAD_USER_INPUT");

    // Create a valid one, then push the salary under the floor
    let resp = execute(
        &schema,
        &add_employee_mutation("Bob", "bob@corp.com", "Engineer", "Eng"),
    )
    .await;
    let id = data(&resp)["addEmployee"]["id"].as_str().unwrap().to_string();

    let resp = execute(
        &schema,
        &format!(r#"mutation {{ updateEmployee(id: "{id}", salary: 500) {{ id }} }}"#),
    )
    .await;
    assert_eq!(error_code(&resp), "BAD_USER_INPUT");
}

#[tokio::test]
async fn gender_outside_the_enumeration_is_rejected() {
    let (schema, _state) = test_schema().await;

    let resp = execute(
        &schema,
        r#"mutation {
            addEmployee(
                first_name: "X", last_name: "Y", email: "x@corp.com",
                gender: Robot, designation: "Engineer", salary: 1500,
                date_of_joining: "2024-06-01", department: "Eng"
            ) { id }
        }"#,
    )
    .await;
    assert!(!resp.errors.is_empty());
}

#[tokio::test]
async fn filter_requires_at_least_one_criterion() {
    let (schema, _state) = test_schema().await;
    let resp = execute(&schema, r#"query { getEmployeesByFilter { id } }"#).await;
    assert_eq!(error_code(&resp), "BAD_USER_INPUT");
}

#[tokio::test]
async fn filter_matches_on_the_supplied_fields() {
    let (schema, _state) = test_schema().await;

    execute(
        &schema,
        &add_employee_mutation("Eve", "eve@corp.com", "Engineer", "Eng"),
    )
    .await;
    execute(
        &schema,
        &add_employee_mutation("Sam", "sam@corp.com", "Manager", "Sales"),
    )
    .await;
    execute(
        &schema,
        &add_employee_mutation("Kim", "kim@corp.com", "Manager", "Eng"),
    )
    .await;

    // Department only: both Eng employees, regardless of designation
    let resp = execute(
        &schema,
        r#"query { getEmployeesByFilter(department: "Eng") { email } }"#,
    )
    .await;
    let hits = data(&resp);
    let emails: Vec<&str> = hits["getEmployeesByFilter"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["email"].as_str().unwrap())
        .collect();
    assert_eq!(emails.len(), 2);
    assert!(emails.contains(&"eve@corp.com"));
    assert!(emails.contains(&"kim@corp.com"));

    // Both filters: logical AND
    let resp = execute(
        &schema,
        r#"query { getEmployeesByFilter(designation: "Manager", department: "Eng") { email } }"#,
    )
    .await;
    let hits = data(&resp);
    let hits = hits["getEmployeesByFilter"].as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["email"], "kim@corp.com");
}

#[tokio::test]
async fn all_employees_are_ordered_most_recent_first() {
    let (schema, _state) = test_schema().await;

    execute(
        &schema,
        &add_employee_mutation("First", "first@corp.com", "Engineer", "Eng"),
    )
    .await;
    // created_at has millisecond resolution
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    execute(
        &schema,
        &add_employee_mutation("Second", "second@corp.com", "Engineer", "Eng"),
    )
    .await;

    let resp = execute(&schema, r#"query { getAllEmployees { first_name } }"#).await;
    let all = data(&resp);
    let names: Vec<&str> = all["getAllEmployees"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["first_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Second", "First"]);
}

#[tokio::test]
async fn update_applies_only_the_supplied_fields() {
    let (schema, _state) = test_schema().await;

    let resp = execute(
        &schema,
        &add_employee_mutation("Bob", "bob@corp.com", "Engineer", "Eng"),
    )
    .await;
    let id = data(&resp)["addEmployee"]["id"].as_str().unwrap().to_string();

    let resp = execute(
        &schema,
        &format!(
            r#"mutation {{ updateEmployee(id: "{id}", salary: 2000, date_of_joining: "2022-01-10") {{
                first_name email salary date_of_joining department
            }} }}"#
        ),
    )
    .await;
    let updated = data(&resp);
    assert_eq!(updated["updateEmployee"]["salary"], 2000.0);
    assert_eq!(updated["updateEmployee"]["date_of_joining"], "2022-01-10");
    // untouched fields survive the merge
    assert_eq!(updated["updateEmployee"]["first_name"], "Bob");
    assert_eq!(updated["updateEmployee"]["email"], "bob@corp.com");
    assert_eq!(updated["updateEmployee"]["department"], "Eng");
}

#[tokio::test]
async fn update_rejects_a_malformed_date() {
    let (schema, _state) = test_schema().await;

    let resp = execute(
        &schema,
        &add_employee_mutation("Bob", "bob@corp.com", "Engineer", "Eng"),
    )
    .await;
    let id = data(&resp)["addEmployee"]["id"].as_str().unwrap().to_string();

    let resp = execute(
        &schema,
        &format!(r#"mutation {{ updateEmployee(id: "{id}", date_of_joining: "01/10/2022") {{ id }} }}"#),
    )
    .await;
    assert_eq!(error_code(&resp), "BAD_USER_INPUT");
}

#[tokio::test]
async fn update_unknown_id_is_not_found() {
    let (schema, _state) = test_schema().await;
    let resp = execute(
        &schema,
        r#"mutation { updateEmployee(id: "employee:missing", salary: 2000) { id } }"#,
    )
    .await;
    assert_eq!(error_code(&resp), "NOT_FOUND");
}

#[tokio::test]
async fn update_email_collision_leaves_the_record_unchanged() {
    let (schema, _state) = test_schema().await;

    execute(
        &schema,
        &add_employee_mutation("Eve", "eve@corp.com", "Engineer", "Eng"),
    )
    .await;
    let resp = execute(
        &schema,
        &add_employee_mutation("Bob", "bob@corp.com", "Engineer", "Eng"),
    )
    .await;
    let bob_id = data(&resp)["addEmployee"]["id"].as_str().unwrap().to_string();

    let resp = execute(
        &schema,
        &format!(r#"mutation {{ updateEmployee(id: "{bob_id}", email: "eve@corp.com") {{ id }} }}"#),
    )
    .await;
    assert_eq!(error_code(&resp), "BAD_USER_INPUT");

    let resp = execute(
        &schema,
        &format!(r#"query {{ getEmployeeById(id: "{bob_id}") {{ email }} }}"#),
    )
    .await;
    assert_eq!(data(&resp)["getEmployeeById"]["email"], "bob@corp.com");
}

#[tokio::test]
async fn delete_is_observable_and_not_repeatable() {
    let (schema, _state) = test_schema().await;

    let resp = execute(
        &schema,
        &add_employee_mutation("Bob", "bob@corp.com", "Engineer", "Eng"),
    )
    .await;
    let id = data(&resp)["addEmployee"]["id"].as_str().unwrap().to_string();

    let delete = format!(r#"mutation {{ deleteEmployee(id: "{id}") }}"#);

    let resp = execute(&schema, &delete).await;
    assert_eq!(data(&resp)["deleteEmployee"], true);

    let resp = execute(
        &schema,
        &format!(r#"query {{ getEmployeeById(id: "{id}") {{ id }} }}"#),
    )
    .await;
    assert_eq!(error_code(&resp), "NOT_FOUND");

    let resp = execute(&schema, &delete).await;
    assert_eq!(error_code(&resp), "NOT_FOUND");
}
