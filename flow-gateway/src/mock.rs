//! In-memory gateway for testing.

use async_trait::async_trait;
use flow_model::{Entity, EntityId, EntityKind};
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::time::Duration;
use tokio::sync::Mutex;

use crate::error::{GatewayError, Result};
use crate::traits::RemoteGateway;

/// A call received by [`MockGateway`].
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayCall {
    List(EntityKind),
    Create(EntityKind, Value),
}

impl GatewayCall {
    pub fn kind(&self) -> EntityKind {
        match self {
            GatewayCall::List(kind) | GatewayCall::Create(kind, _) => *kind,
        }
    }
}

#[derive(Debug)]
struct MockState {
    records: HashMap<EntityKind, Vec<Value>>,
    next_id: EntityId,
    failing_lists: HashSet<EntityKind>,
    failing_creates: HashSet<EntityKind>,
    calls: Vec<GatewayCall>,
}

/// Mock remote store.
///
/// Holds records per kind, assigns ids from a counter on create and records
/// every call it receives. Lists and creates can be made to fail per kind.
///
/// A create is committed as soon as it arrives; any delay applies to the
/// answer. A list waits out its delay before reading the records.
pub struct MockGateway {
    name: String,
    delay: Option<Duration>,
    create_delay: Option<Duration>,
    state: Mutex<MockState>,
}

impl MockGateway {
    /// Create an empty mock store. Ids start at 1.
    pub fn new() -> Self {
        Self {
            name: "mock-gateway".to_string(),
            delay: None,
            create_delay: None,
            state: Mutex::new(MockState {
                records: HashMap::new(),
                next_id: 1,
                failing_lists: HashSet::new(),
                failing_creates: HashSet::new(),
                calls: Vec::new(),
            }),
        }
    }

    /// Seed the store with entities of one kind.
    ///
    /// # Panics
    ///
    /// Panics if an entity does not serialize to JSON.
    pub fn with_entities<T: Entity>(mut self, entities: &[T]) -> Self {
        let values = entities
            .iter()
            .map(|e| serde_json::to_value(e).expect("seed entity serializes"));
        self.state
            .get_mut()
            .records
            .entry(T::KIND)
            .or_default()
            .extend(values);
        self
    }

    /// Seed the store with raw JSON records of one kind.
    pub fn with_records(mut self, kind: EntityKind, records: Vec<Value>) -> Self {
        self.state.get_mut().records.entry(kind).or_default().extend(records);
        self
    }

    /// Set the id the next create will assign.
    pub fn with_next_id(mut self, id: EntityId) -> Self {
        self.state.get_mut().next_id = id;
        self
    }

    /// Make every list of `kind` fail.
    pub fn failing_list(mut self, kind: EntityKind) -> Self {
        self.state.get_mut().failing_lists.insert(kind);
        self
    }

    /// Make every create of `kind` fail.
    pub fn failing_create(mut self, kind: EntityKind) -> Self {
        self.state.get_mut().failing_creates.insert(kind);
        self
    }

    /// Wait this long before answering each call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Answer creates this long after they are committed, overriding
    /// [`MockGateway::with_delay`] for creates.
    pub fn with_create_delay(mut self, delay: Duration) -> Self {
        self.create_delay = Some(delay);
        self
    }

    /// Switch list failures for `kind` on or off.
    pub async fn set_list_failure(&self, kind: EntityKind, failing: bool) {
        let mut state = self.state.lock().await;
        if failing {
            state.failing_lists.insert(kind);
        } else {
            state.failing_lists.remove(&kind);
        }
    }

    /// Switch create failures for `kind` on or off.
    pub async fn set_create_failure(&self, kind: EntityKind, failing: bool) {
        let mut state = self.state.lock().await;
        if failing {
            state.failing_creates.insert(kind);
        } else {
            state.failing_creates.remove(&kind);
        }
    }

    /// Every call received so far, in arrival order.
    pub async fn calls(&self) -> Vec<GatewayCall> {
        self.state.lock().await.calls.clone()
    }

    /// Number of create calls received for `kind`, failed ones included.
    pub async fn create_count(&self, kind: EntityKind) -> usize {
        self.state
            .lock()
            .await
            .calls
            .iter()
            .filter(|call| matches!(call, GatewayCall::Create(k, _) if *k == kind))
            .count()
    }

    /// Records currently held for `kind`.
    pub async fn records(&self, kind: EntityKind) -> Vec<Value> {
        self.state
            .lock()
            .await
            .records
            .get(&kind)
            .cloned()
            .unwrap_or_default()
    }

    async fn pause(&self) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RemoteGateway for MockGateway {
    fn id(&self) -> &str {
        &self.name
    }

    async fn list(&self, kind: EntityKind) -> Result<Value> {
        self.state.lock().await.calls.push(GatewayCall::List(kind));
        self.pause().await;

        let state = self.state.lock().await;
        if state.failing_lists.contains(&kind) {
            return Err(GatewayError::Unavailable(format!("list {} disabled", kind)));
        }

        let records = state.records.get(&kind).cloned().unwrap_or_default();
        Ok(Value::Array(records))
    }

    async fn create(&self, kind: EntityKind, fields: Value) -> Result<Value> {
        let created = {
            let mut state = self.state.lock().await;
            state.calls.push(GatewayCall::Create(kind, fields.clone()));

            if state.failing_creates.contains(&kind) {
                return Err(GatewayError::Unavailable(format!("create {} disabled", kind)));
            }

            let Value::Object(mut record) = fields else {
                return Err(GatewayError::Server {
                    status: 422,
                    message: "body must be a JSON object".to_string(),
                });
            };

            let id = state.next_id;
            state.next_id += 1;
            record.insert("id".to_string(), Value::from(id));

            let created = Value::Object(record);
            state.records.entry(kind).or_default().push(created.clone());
            created
        };

        // Committed; the answer may still be in flight
        match self.create_delay {
            Some(delay) => tokio::time::sleep(delay).await,
            None => self.pause().await,
        }
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flow_model::Client;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_mock_assigns_ids() {
        let gateway = MockGateway::new().with_next_id(7);

        let created = gateway
            .create(EntityKind::Clients, json!({"name": "Acme", "contact": "a@acme.com"}))
            .await
            .unwrap();
        assert_eq!(created, json!({"id": 7, "name": "Acme", "contact": "a@acme.com"}));

        let next = gateway
            .create(EntityKind::Clients, json!({"name": "Globex", "contact": null}))
            .await
            .unwrap();
        assert_eq!(next["id"], 8);

        let listed = gateway.list(EntityKind::Clients).await.unwrap();
        assert_eq!(listed.as_array().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn test_mock_seeded_entities() {
        let gateway = MockGateway::new().with_entities(&[Client {
            id: 1,
            name: "Acme".into(),
            contact: None,
            notes: None,
        }]);

        let listed = gateway.list(EntityKind::Clients).await.unwrap();
        assert_eq!(listed[0]["name"], "Acme");
        assert_eq!(gateway.list(EntityKind::Tasks).await.unwrap(), json!([]));
    }

    #[tokio::test]
    async fn test_mock_failures() {
        let gateway = MockGateway::new()
            .failing_list(EntityKind::Projects)
            .failing_create(EntityKind::Tasks);

        assert!(gateway.list(EntityKind::Projects).await.is_err());
        assert!(gateway.list(EntityKind::Clients).await.is_ok());
        assert!(gateway
            .create(EntityKind::Tasks, json!({"title": "x"}))
            .await
            .is_err());
        assert!(gateway.records(EntityKind::Tasks).await.is_empty());
        assert_eq!(gateway.create_count(EntityKind::Tasks).await, 1);

        gateway.set_list_failure(EntityKind::Projects, false).await;
        assert!(gateway.list(EntityKind::Projects).await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_records_calls() {
        let gateway = MockGateway::new();
        gateway.list(EntityKind::Tasks).await.unwrap();
        gateway
            .create(EntityKind::Projects, json!({"name": "Portal"}))
            .await
            .unwrap();

        let calls = gateway.calls().await;
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], GatewayCall::List(EntityKind::Tasks));
        assert_eq!(calls[1].kind(), EntityKind::Projects);
    }

    #[tokio::test]
    async fn test_create_commits_before_answering() {
        let gateway = Arc::new(
            MockGateway::new()
                .with_next_id(3)
                .with_create_delay(Duration::from_millis(50)),
        );

        let pending = {
            let gateway = gateway.clone();
            tokio::spawn(async move {
                gateway
                    .create(EntityKind::Clients, json!({"name": "Acme"}))
                    .await
            })
        };
        tokio::time::sleep(Duration::from_millis(10)).await;

        let listed = gateway.list(EntityKind::Clients).await.unwrap();
        assert_eq!(listed, json!([{"id": 3, "name": "Acme"}]));
        assert!(!pending.is_finished());

        assert_eq!(pending.await.unwrap().unwrap()["id"], 3);
    }
}
