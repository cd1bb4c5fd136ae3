use doc_store::{CollectionActor, Document, StoreError};
use serde::{Deserialize, Serialize};

// --- Test Documents ---

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct Sku {
    code: String,
    stock: i32,
}

#[derive(Debug, Default)]
struct SkuUpdate {
    code: Option<String>,
    stock: Option<i32>,
}

#[derive(Debug, thiserror::Error)]
#[error("negative stock: {0}")]
struct NegativeStock(i32);

impl Document for Sku {
    type Key = String;
    type Update = SkuUpdate;
    type Error = NegativeStock;
    const COLLECTION: &'static str = "skus";

    fn key(&self) -> &String {
        &self.code
    }

    fn apply(&mut self, update: SkuUpdate) -> Result<(), NegativeStock> {
        if let Some(code) = update.code {
            self.code = code;
        }
        if let Some(stock) = update.stock {
            self.stock = stock;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), NegativeStock> {
        if self.stock < 0 {
            return Err(NegativeStock(self.stock));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct Ticket {
    number: u32,
    title: String,
}

#[derive(Debug, thiserror::Error)]
#[error("ticket error")]
struct TicketError;

impl Document for Ticket {
    type Key = u32;
    type Update = ();
    type Error = TicketError;
    const COLLECTION: &'static str = "tickets";

    fn key(&self) -> &u32 {
        &self.number
    }

    fn apply(&mut self, _update: ()) -> Result<(), TicketError> {
        Ok(())
    }

    fn next_key(max: Option<&u32>) -> Option<u32> {
        Some(max.map_or(1, |max| max + 1))
    }

    fn set_key(&mut self, key: u32) {
        self.number = key;
    }
}

fn sku(code: &str, stock: i32) -> Sku {
    Sku {
        code: code.to_string(),
        stock,
    }
}

fn ticket(title: &str) -> Ticket {
    Ticket {
        number: 0,
        title: title.to_string(),
    }
}

// --- Tests ---

#[tokio::test]
async fn test_collection_full_lifecycle() {
    let (actor, client) = CollectionActor::<Sku>::in_memory(10);
    tokio::spawn(actor.run());

    // 1. Insert keeps insertion order
    client.insert_one(sku("B", 1)).await.unwrap();
    client.insert_one(sku("A", 2)).await.unwrap();
    let all = client.find_all().await.unwrap();
    assert_eq!(all, vec![sku("B", 1), sku("A", 2)]);

    // 2. Exact-match lookup
    assert_eq!(client.find_one("A".into()).await.unwrap(), Some(sku("A", 2)));
    assert_eq!(client.find_one("Z".into()).await.unwrap(), None);

    // 3. Field-level update
    let update = SkuUpdate {
        stock: Some(9),
        ..Default::default()
    };
    let updated = client.update_one("B".into(), update).await.unwrap();
    assert_eq!(updated, Some(sku("B", 9)));

    // 4. Update with no match
    let missing = client
        .update_one("Z".into(), SkuUpdate::default())
        .await
        .unwrap();
    assert!(missing.is_none());

    // 5. Delete
    assert!(client.delete_one("B".into()).await.unwrap());
    assert!(!client.delete_one("B".into()).await.unwrap());
    assert_eq!(client.find_all().await.unwrap(), vec![sku("A", 2)]);
}

#[tokio::test]
async fn test_duplicate_keys_are_rejected() {
    let (actor, client) = CollectionActor::<Sku>::in_memory(10);
    tokio::spawn(actor.run());

    client.insert_one(sku("A", 1)).await.unwrap();
    client.insert_one(sku("B", 2)).await.unwrap();

    let err = client.insert_one(sku("A", 5)).await.unwrap_err();
    assert!(matches!(err, StoreError::DuplicateKey(ref key) if key == "A"));

    // Renaming B onto A leaves both documents untouched
    let rename = SkuUpdate {
        code: Some("A".into()),
        stock: Some(100),
    };
    let err = client.update_one("B".into(), rename).await.unwrap_err();
    assert!(matches!(err, StoreError::DuplicateKey(_)));
    assert_eq!(
        client.find_all().await.unwrap(),
        vec![sku("A", 1), sku("B", 2)]
    );

    // Renaming to a fresh key moves the document in place
    let rename = SkuUpdate {
        code: Some("C".into()),
        ..Default::default()
    };
    client.update_one("B".into(), rename).await.unwrap();
    assert_eq!(
        client.find_all().await.unwrap(),
        vec![sku("A", 1), sku("C", 2)]
    );
}

#[tokio::test]
async fn test_validation_failures_leave_documents_unchanged() {
    let (actor, client) = CollectionActor::<Sku>::in_memory(10);
    tokio::spawn(actor.run());

    let err = client.insert_one(sku("A", -1)).await.unwrap_err();
    assert!(matches!(err, StoreError::Document(_)));
    assert!(client.find_all().await.unwrap().is_empty());

    client.insert_one(sku("A", 1)).await.unwrap();
    let bad = SkuUpdate {
        stock: Some(-4),
        ..Default::default()
    };
    let err = client.update_one("A".into(), bad).await.unwrap_err();
    assert!(err.to_string().contains("negative stock: -4"));
    assert_eq!(client.find_one("A".into()).await.unwrap(), Some(sku("A", 1)));
}

#[tokio::test]
async fn test_insert_next_assigns_successor_keys() {
    let (actor, client) = CollectionActor::<Ticket>::in_memory(10);
    tokio::spawn(actor.run());

    assert!(client.find_max().await.unwrap().is_none());

    let first = client.insert_next(ticket("first")).await.unwrap();
    assert_eq!(first.number, 1);

    client
        .insert_one(Ticket {
            number: 7,
            title: "imported".into(),
        })
        .await
        .unwrap();
    let next = client.insert_next(ticket("after import")).await.unwrap();
    assert_eq!(next.number, 8);

    let max = client.find_max().await.unwrap().unwrap();
    assert_eq!(max.number, 8);
}

#[tokio::test]
async fn test_concurrent_insert_next_never_reuses_keys() {
    let (actor, client) = CollectionActor::<Ticket>::in_memory(32);
    tokio::spawn(actor.run());

    let mut handles = vec![];
    for i in 0..20 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client.insert_next(ticket(&format!("t{i}"))).await
        }));
    }

    let mut numbers = vec![];
    for handle in handles {
        numbers.push(handle.await.unwrap().unwrap().number);
    }
    numbers.sort_unstable();
    assert_eq!(numbers, (1..=20).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_collections_without_key_generation_refuse_insert_next() {
    let (actor, client) = CollectionActor::<Sku>::in_memory(10);
    tokio::spawn(actor.run());

    let err = client.insert_next(sku("A", 1)).await.unwrap_err();
    assert!(matches!(err, StoreError::KeysNotGenerated("skus")));
}

#[tokio::test]
async fn test_persistent_collection_survives_restart() {
    let dir = std::env::temp_dir().join(format!("doc-store-test-{}", uuid::Uuid::new_v4()));

    {
        let (actor, client) = CollectionActor::<Sku>::open(10, &dir).unwrap();
        let handle = tokio::spawn(actor.run());
        client.insert_one(sku("A", 1)).await.unwrap();
        client.insert_one(sku("B", 2)).await.unwrap();
        client.delete_one("A".into()).await.unwrap();
        drop(client);
        handle.await.unwrap();
    }

    assert!(dir.join("skus.json").exists());

    let (actor, client) = CollectionActor::<Sku>::open(10, &dir).unwrap();
    tokio::spawn(actor.run());
    assert_eq!(client.find_all().await.unwrap(), vec![sku("B", 2)]);

    std::fs::remove_dir_all(dir).unwrap();
}

#[tokio::test]
async fn test_closed_collection_reports_error() {
    let (actor, client) = CollectionActor::<Sku>::in_memory(10);
    drop(actor);

    let err = client.find_all().await.unwrap_err();
    assert!(matches!(err, StoreError::CollectionClosed));
}
