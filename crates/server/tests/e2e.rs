use std::net::SocketAddr;

use axum::Router;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use server::routes;
use server::state::ServerState;

fn cors() -> CorsLayer { CorsLayer::very_permissive() }

struct TestApp {
    base_url: String,
    client: reqwest::Client,
}

impl TestApp {
    fn url(&self, path: &str) -> String { format!("{}{}", self.base_url, path) }

    async fn create_airline(&self, name: &str) -> anyhow::Result<Value> {
        let res = self
            .client
            .post(self.url("/airlines"))
            .json(&json!({
                "name": name,
                "description": "regional carrier",
                "foundationDate": "1999-03-01",
                "webPage": "https://www.example.com"
            }))
            .send()
            .await?;
        assert_eq!(res.status(), HttpStatusCode::CREATED);
        Ok(res.json().await?)
    }

    async fn create_airport(&self, code: &str) -> anyhow::Result<Value> {
        let res = self
            .client
            .post(self.url("/airports"))
            .json(&json!({"name": format!("airport {code}"), "code": code, "country": "Colombia", "city": "Cali"}))
            .send()
            .await?;
        assert_eq!(res.status(), HttpStatusCode::CREATED);
        Ok(res.json().await?)
    }
}

async fn start_server() -> anyhow::Result<TestApp> {
    let app: Router = routes::build_router(ServerState::in_memory(), cors());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url, client: reqwest::Client::new() })
}

fn id_of(v: &Value) -> String { v["id"].as_str().unwrap_or_default().to_string() }

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = app.client.get(app.url("/health")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_openapi_document_is_served() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = app.client.get(app.url("/api-docs/openapi.json")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert!(body["paths"]["/airlines/{id}/airports/{airport_id}"].is_object());
    Ok(())
}

#[tokio::test]
async fn e2e_airline_crud() -> anyhow::Result<()> {
    let app = start_server().await?;
    let created = app.create_airline("Avianca").await?;
    assert_eq!(created["name"], "Avianca");
    assert_eq!(created["foundationDate"], "1999-03-01");
    assert_eq!(created["airports"], json!([]));
    let id = id_of(&created);

    let res = app
        .client
        .put(app.url(&format!("/airlines/{id}")))
        .json(&json!({
            "name": "Avianca Holdings",
            "description": "flag carrier",
            "foundationDate": "1919-12-05",
            "webPage": "https://www.avianca.com"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let res = app.client.get(app.url(&format!("/airlines/{id}"))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["name"], "Avianca Holdings");

    let res = app.client.delete(app.url(&format!("/airlines/{id}"))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);

    let res = app.client.get(app.url(&format!("/airlines/{id}"))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let body = res.json::<Value>().await?;
    assert_eq!(body["statusCode"], 404);
    assert_eq!(body["message"], "The aerolinea with the given id was not found");
    Ok(())
}

#[tokio::test]
async fn e2e_airline_update_rejects_future_date() -> anyhow::Result<()> {
    let app = start_server().await?;
    let id = id_of(&app.create_airline("Satena").await?);
    let res = app
        .client
        .put(app.url(&format!("/airlines/{id}")))
        .json(&json!({
            "name": "Satena",
            "description": "regional carrier",
            "foundationDate": "2999-01-01",
            "webPage": "https://www.satena.com"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert_eq!(body["message"], "The aerolinea foundation date should be in the past");
    Ok(())
}

#[tokio::test]
async fn e2e_invalid_bodies_are_bad_requests() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = app
        .client
        .post(app.url("/airlines"))
        .json(&json!({"name": "NoSite", "description": "d", "foundationDate": "2000-01-01", "webPage": "not a url"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert_eq!(body["message"], "webPage must be a URL address");

    let res = app
        .client
        .post(app.url("/airports"))
        .json(&json!({"name": "Short", "code": "BO", "country": "Colombia", "city": "Bogota"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert_eq!(body["message"], "The aeropuerto code should have 3 characters");

    let res = app
        .client
        .post(app.url("/airports"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn e2e_unparsable_ids_are_not_found() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = app.client.get(app.url("/airports/not-a-uuid")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let body = res.json::<Value>().await?;
    assert_eq!(body["message"], "The aeropuerto with the given id was not found");
    Ok(())
}

#[tokio::test]
async fn e2e_association_flow() -> anyhow::Result<()> {
    let app = start_server().await?;
    let airline = id_of(&app.create_airline("LATAM").await?);
    let bog = id_of(&app.create_airport("BOG").await?);
    let mde = id_of(&app.create_airport("MDE").await?);

    let res = app.client.post(app.url(&format!("/airlines/{airline}/airports/{bog}"))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let body = res.json::<Value>().await?;
    assert_eq!(body["airports"].as_array().map(Vec::len), Some(1));

    // the reverse view reads the same relation
    let res = app.client.get(app.url(&format!("/airports/{bog}"))).send().await?;
    let body = res.json::<Value>().await?;
    assert_eq!(body["airlines"][0]["id"], airline.as_str());

    let res = app.client.get(app.url(&format!("/airlines/{airline}/airports/{mde}"))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::PRECONDITION_FAILED);
    let body = res.json::<Value>().await?;
    assert_eq!(body["statusCode"], 412);
    assert_eq!(body["message"], "The aeropuerto with the given id is not associated to the aerolinea");

    let res = app
        .client
        .put(app.url(&format!("/airlines/{airline}/airports")))
        .json(&json!([{"id": mde}]))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["airports"][0]["id"], mde.as_str());
    assert_eq!(body["airports"].as_array().map(Vec::len), Some(1));

    let res = app.client.get(app.url(&format!("/airlines/{airline}/airports"))).send().await?;
    let body = res.json::<Value>().await?;
    assert_eq!(body.as_array().map(Vec::len), Some(1));

    let res = app
        .client
        .put(app.url(&format!("/airlines/{airline}/airports")))
        .json(&json!([{"id": Uuid::new_v4()}]))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);

    let res = app.client.delete(app.url(&format!("/airlines/{airline}/airports/{mde}"))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);
    let res = app.client.delete(app.url(&format!("/airlines/{airline}/airports/{mde}"))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::PRECONDITION_FAILED);
    Ok(())
}
