//! Tests against the real sentence-embedding model.
//!
//! Ignored by default: the first run downloads `all-MiniLM-L6-v2` from the
//! Hugging Face hub (or set `RIDDLE_MODEL_PATH` to a local copy).
//! Run with `cargo test --test integration_real -- --ignored`.

mod common;

use common::harness::{TestServerConfig, spawn_real_server};
use common::http_client::TestClient;

#[tokio::test]
#[ignore = "requires the pretrained model (network or RIDDLE_MODEL_PATH)"]
async fn test_real_identical_words_score_near_hundred() {
    let server = spawn_real_server(TestServerConfig::default())
        .await
        .expect("Failed to spawn real server");
    let client = TestClient::new(server.url());

    for word in ["cat", "riddle", "mountain"] {
        let pct = client
            .similarity(word, word)
            .await
            .expect("score")
            .similarity_percentage;
        assert!(pct >= 99.0, "{word}/{word} = {pct}");
    }
}

#[tokio::test]
#[ignore = "requires the pretrained model (network or RIDDLE_MODEL_PATH)"]
async fn test_real_related_words_outscore_unrelated_words() {
    let server = spawn_real_server(TestServerConfig::default())
        .await
        .expect("Failed to spawn real server");
    let client = TestClient::new(server.url());

    let cat_cat = client.similarity("cat", "cat").await.expect("score");
    let cat_kitten = client.similarity("cat", "kitten").await.expect("score");
    let cat_dog = client.similarity("cat", "dog").await.expect("score");
    let cat_tax = client.similarity("cat", "taxation").await.expect("score");

    let dog = cat_dog.similarity_percentage;
    assert!((0.0..=100.0).contains(&dog));
    assert!(cat_cat.similarity_percentage >= dog);
    assert!(cat_kitten.similarity_percentage > cat_tax.similarity_percentage);
}

#[tokio::test]
#[ignore = "requires the pretrained model (network or RIDDLE_MODEL_PATH)"]
async fn test_real_scores_are_symmetric() {
    let server = spawn_real_server(TestServerConfig::default())
        .await
        .expect("Failed to spawn real server");
    let client = TestClient::new(server.url());

    let ab = client.similarity("ocean", "sea").await.expect("score");
    let ba = client.similarity("sea", "ocean").await.expect("score");
    assert_eq!(ab.similarity_percentage, ba.similarity_percentage);
}
