//! HTTP contract tests for the product endpoints, against a wiremock server.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use beauty_api::{ApiClient, ApiConfig, ApiError, ProductBackend};
use beauty_core::{ProductPayload, ProductStatus};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(ApiConfig::new(server.uri()).timeout(Duration::from_secs(2))).unwrap()
}

fn labial_json(cod: i64) -> serde_json::Value {
    json!({
        "cod": cod,
        "nombre": "Labial",
        "categoria": "labios",
        "descripcion": "rojo pasion",
        "precio_de_compra": 2.5,
        "precio_de_venta": 3.5,
        "stock": 100,
        "proveedor": "Proveedor XYZ",
        "estado": "Activo"
    })
}

fn labial_payload() -> ProductPayload {
    ProductPayload {
        name: "Labial".into(),
        category: "labios".into(),
        description: "rojo pasion".into(),
        purchase_price: 2.5,
        sale_price: 3.5,
        stock: 100,
        supplier: "Proveedor XYZ".into(),
        status: ProductStatus::Active,
    }
}

#[tokio::test]
async fn test_list_products() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/productos"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([labial_json(1), labial_json(2)])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let products = client_for(&server).products().list().await.unwrap();

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].name, "Labial");
    assert_eq!(products[1].cod, 2);
}

#[tokio::test]
async fn test_list_non_array_body_is_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/productos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"mensaje": "nada"})))
        .mount(&server)
        .await;

    let products = client_for(&server).products().list().await.unwrap();
    assert!(products.is_empty());
}

#[tokio::test]
async fn test_list_server_error_without_detail() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/productos"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let err = client_for(&server).products().list().await.unwrap_err();
    assert!(matches!(
        err,
        ApiError::Status {
            status: 500,
            detail: None
        }
    ));
}

#[tokio::test]
async fn test_get_not_found_carries_detail() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/productos/9"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({"detail": "Producto con ID 9 no encontrado"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).products().get(9).await.unwrap_err();

    assert!(err.is_not_found());
    assert!(matches!(err, ApiError::NotFound { cod: 9, .. }));
    assert_eq!(err.user_message(), "Producto con ID 9 no encontrado");
}

#[tokio::test]
async fn test_create_posts_payload_and_returns_record() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/productos"))
        .and(body_json(json!({
            "nombre": "Labial",
            "categoria": "labios",
            "descripcion": "rojo pasion",
            "precio_de_compra": 2.5,
            "precio_de_venta": 3.5,
            "stock": 100,
            "proveedor": "Proveedor XYZ",
            "estado": "Activo"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(labial_json(41)))
        .expect(1)
        .mount(&server)
        .await;

    let created = client_for(&server)
        .products()
        .create(&labial_payload())
        .await
        .unwrap();

    assert_eq!(created.cod, 41);
    assert_eq!(created.sale_price, 3.5);
}

#[tokio::test]
async fn test_create_validation_error_joins_messages() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/productos"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "detail": [
                {"loc": ["body", "nombre"], "msg": "El campo no puede estar vacío", "type": "value_error"},
                {"loc": ["body", "stock"], "msg": "Input should be greater than or equal to 0", "type": "greater_than_equal"}
            ]
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .products()
        .create(&labial_payload())
        .await
        .unwrap_err();

    assert_eq!(
        err.user_message(),
        "El campo no puede estar vacío; Input should be greater than or equal to 0"
    );
}

#[tokio::test]
async fn test_update_and_delete_through_backend_trait() {
    let server = MockServer::start().await;

    let mut updated = labial_json(5);
    updated["stock"] = json!(7);

    Mock::given(method("PUT"))
        .and(path("/productos/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(updated))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/productos/5"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"mensaje": "Producto eliminado", "id_producto": 5})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let backend = client_for(&server).products();
    let mut payload = labial_payload();
    payload.stock = 7;

    let product = backend.update_product(5, &payload).await.unwrap();
    assert_eq!(product.stock, 7);

    backend.delete_product(5).await.unwrap();
}

#[tokio::test]
async fn test_ping() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "pong"})))
        .mount(&server)
        .await;

    client_for(&server).ping().await.unwrap();
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    // Port 9 (discard) is essentially never listening locally.
    let client = ApiClient::new(
        ApiConfig::new("http://127.0.0.1:9").connect_timeout(Duration::from_millis(500)),
    )
    .unwrap();

    let err = client.products().list().await.unwrap_err();
    assert!(err.is_transport(), "unexpected error: {err:?}");
}

#[tokio::test]
async fn test_malformed_record_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/productos/3"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).products().get(3).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}
