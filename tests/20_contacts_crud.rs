//! Live CRUD, ownership-isolation, and pagination behavior. These tests need
//! a reachable Postgres; they skip themselves when DATABASE_URL is unset.

mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

fn contact_body(first_name: &str) -> Value {
    json!({
        "firstName": first_name,
        "lastName": "Doe",
        "email": "jane@example.com",
        "address": "1 Main St",
        "phone": "5551234",
        "mobile": "5554321",
        "picture": "https://example.com/jane.png"
    })
}

async fn create_contact(base_url: &str, auth: &str, first_name: &str) -> Result<Value> {
    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/v1/contacts", base_url))
        .header("Authorization", auth)
        .json(&contact_body(first_name))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED, "create failed: {}", res.status());

    let body = res.json::<Value>().await?;
    Ok(body["result"][0].clone())
}

#[tokio::test]
async fn create_read_update_delete_round_trip() -> Result<()> {
    if !common::database_available() {
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let auth = common::bearer_for(&common::fresh_user_id());

    // Create
    let created = create_contact(&server.base_url, &auth, "Jane").await?;
    let id = created["id"].as_str().expect("created contact has an id").to_string();
    assert_eq!(created["firstName"], "Jane");
    assert_eq!(created["email"], "jane@example.com");
    assert!(created.get("ownerId").is_none(), "ownerId leaked: {}", created);
    assert!(created.get("updatedAt").is_none(), "updatedAt leaked: {}", created);

    // Read
    let res = client
        .get(format!("{}/v1/contacts/{}", server.base_url, id))
        .header("Authorization", &auth)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["result"][0]["id"], json!(id));

    // Patch one field; the rest must be preserved
    let res = client
        .patch(format!("{}/v1/contacts/{}", server.base_url, id))
        .header("Authorization", &auth)
        .json(&json!({ "firstName": "Janet" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    let updated = &body["result"][0];
    assert_eq!(updated["id"], json!(id), "patch must not change the id");
    assert_eq!(updated["firstName"], "Janet");
    assert_eq!(updated["lastName"], "Doe");
    assert_eq!(updated["email"], "jane@example.com");
    assert_eq!(updated["phone"], "5551234");

    // Delete: 200 with an empty result array
    let res = client
        .delete(format!("{}/v1/contacts/{}", server.base_url, id))
        .header("Authorization", &auth)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["result"], json!([]));

    // Gone afterwards
    let res = client
        .get(format!("{}/v1/contacts/{}", server.base_url, id))
        .header("Authorization", &auth)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn foreign_contacts_are_indistinguishable_from_missing_ones() -> Result<()> {
    if !common::database_available() {
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let auth_a = common::bearer_for(&common::fresh_user_id());
    let auth_b = common::bearer_for(&common::fresh_user_id());

    let created = create_contact(&server.base_url, &auth_a, "Jane").await?;
    let id = created["id"].as_str().unwrap().to_string();

    // User B reading A's contact: same 404 as a nonexistent id
    let res = client
        .get(format!("{}/v1/contacts/{}", server.base_url, id))
        .header("Authorization", &auth_b)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let foreign = res.json::<Value>().await?;

    let res = client
        .get(format!("{}/v1/contacts/56c787ccc67fc16ccc1a5e92", server.base_url))
        .header("Authorization", &auth_b)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let missing = res.json::<Value>().await?;

    assert_eq!(foreign["message"], "Contact does not exist");
    assert_eq!(foreign["message"], missing["message"]);
    assert_eq!(foreign["code"], missing["code"]);

    // B cannot mutate or delete A's contact either
    let res = client
        .patch(format!("{}/v1/contacts/{}", server.base_url, id))
        .header("Authorization", &auth_b)
        .json(&json!({ "firstName": "Hijacked" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client
        .delete(format!("{}/v1/contacts/{}", server.base_url, id))
        .header("Authorization", &auth_b)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // A still sees it untouched
    let res = client
        .get(format!("{}/v1/contacts/{}", server.base_url, id))
        .header("Authorization", &auth_a)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["result"][0]["firstName"], "Jane");

    Ok(())
}

#[tokio::test]
async fn create_ignores_owner_fields_in_the_payload() -> Result<()> {
    if !common::database_available() {
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let user_a = common::fresh_user_id();
    let auth_a = common::bearer_for(&user_a);
    let auth_b = common::bearer_for(&common::fresh_user_id());

    // Payload claims someone else's ownership; it must be dropped
    let mut body = contact_body("Jane");
    body["ownerId"] = json!("ffffffffffffffffffffffff");
    body["userId"] = json!("ffffffffffffffffffffffff");

    let res = client
        .post(format!("{}/v1/contacts", server.base_url))
        .header("Authorization", &auth_a)
        .json(&body)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created = res.json::<Value>().await?;
    let id = created["result"][0]["id"].as_str().unwrap().to_string();

    // Only the caller can see it
    let res = client
        .get(format!("{}/v1/contacts/{}", server.base_url, id))
        .header("Authorization", &auth_a)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .get(format!("{}/v1/contacts/{}", server.base_url, id))
        .header("Authorization", &auth_b)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn listing_is_owner_scoped_and_paginated() -> Result<()> {
    if !common::database_available() {
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let auth = common::bearer_for(&common::fresh_user_id());
    let other_auth = common::bearer_for(&common::fresh_user_id());

    // Five contacts for the caller, one for somebody else
    let mut ids = Vec::new();
    for i in 0..5 {
        let created = create_contact(&server.base_url, &auth, &format!("Contact{}", i)).await?;
        ids.push(created["id"].as_str().unwrap().to_string());
        // Keep createdAt ordering unambiguous
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    }
    create_contact(&server.base_url, &other_auth, "Foreign").await?;

    let list = |page: i64, per_page: i64| {
        let client = client.clone();
        let auth = auth.clone();
        let url = format!(
            "{}/v1/contacts?page={}&perPage={}",
            server.base_url, page, per_page
        );
        async move {
            let res = client.get(url).header("Authorization", &auth).send().await?;
            assert_eq!(res.status(), StatusCode::OK);
            let body = res.json::<Value>().await?;
            anyhow::Ok(body["result"][0].clone())
        }
    };

    // total is the full count on every page
    let page1 = list(1, 2).await?;
    assert_eq!(page1["total"], 5);
    assert_eq!(page1["contacts"].as_array().unwrap().len(), 2);
    // Most recently created first
    assert_eq!(page1["contacts"][0]["id"], json!(ids[4].clone()));
    assert_eq!(page1["contacts"][1]["id"], json!(ids[3].clone()));

    let page3 = list(3, 2).await?;
    assert_eq!(page3["total"], 5);
    assert_eq!(page3["contacts"].as_array().unwrap().len(), 1);
    assert_eq!(page3["contacts"][0]["id"], json!(ids[0].clone()));

    let page4 = list(4, 2).await?;
    assert_eq!(page4["total"], 5);
    assert_eq!(page4["contacts"].as_array().unwrap().len(), 0);

    // A page number far past the end is an empty page, not an error
    let far = list(i64::MAX, 2).await?;
    assert_eq!(far["total"], 5);
    assert_eq!(far["contacts"].as_array().unwrap().len(), 0);

    // No foreign contacts anywhere in the full listing
    let all = list(1, 100).await?;
    assert_eq!(all["total"], 5);
    for contact in all["contacts"].as_array().unwrap() {
        assert_ne!(contact["firstName"], "Foreign");
    }

    Ok(())
}

#[tokio::test]
async fn profile_of_an_unknown_user_is_a_404() -> Result<()> {
    if !common::database_available() {
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    // Valid token, but no such user row
    let auth = common::bearer_for(&common::fresh_user_id());
    let res = client
        .get(format!("{}/v1/users/profile", server.base_url))
        .header("Authorization", &auth)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let body = res.json::<Value>().await?;
    assert_eq!(body["message"], "User does not exist");

    Ok(())
}
