//! Entity store
//!
//! The three collections are only ever changed here: replaced wholesale by a
//! load, or appended to after the remote store confirms a create. Nothing is
//! inserted ahead of confirmation and nothing is edited or removed. A create
//! whose entity a concurrent load already delivered is confirmed without a
//! second append.
//!
//! Each mutation bumps a revision counter published on a `watch` channel, so
//! a front end can re-derive its board from a fresh [`Snapshot`].

use crate::error::{FlowError, Result};
use crate::snapshot::Snapshot;
use flow_gateway::{GatewayError, RemoteGateway};
use flow_model::{
    Client, CreateRequest, Entity, EntityId, EntityKind, NewClient, NewProject, NewTask, Priority,
    Project, Task, TaskStatus,
};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

#[derive(Debug, Default)]
struct Collections {
    clients: Vec<Client>,
    projects: Vec<Project>,
    tasks: Vec<Task>,
}

/// Entities with a slot in [`Collections`]
trait Stored: Entity {
    fn slot(collections: &mut Collections) -> &mut Vec<Self>;
}

impl Stored for Client {
    fn slot(collections: &mut Collections) -> &mut Vec<Self> {
        &mut collections.clients
    }
}

impl Stored for Project {
    fn slot(collections: &mut Collections) -> &mut Vec<Self> {
        &mut collections.projects
    }
}

impl Stored for Task {
    fn slot(collections: &mut Collections) -> &mut Vec<Self> {
        &mut collections.tasks
    }
}

/// Per-kind result of [`EntityStore::load_all`]: number of entities loaded,
/// or why that kind was not loaded.
#[derive(Debug)]
pub struct LoadReport {
    pub clients: Result<usize>,
    pub projects: Result<usize>,
    pub tasks: Result<usize>,
}

impl LoadReport {
    /// Outcome for one kind
    pub fn outcome(&self, kind: EntityKind) -> &Result<usize> {
        match kind {
            EntityKind::Clients => &self.clients,
            EntityKind::Projects => &self.projects,
            EntityKind::Tasks => &self.tasks,
        }
    }

    /// Whether every kind loaded
    pub fn is_complete(&self) -> bool {
        self.failures().next().is_none()
    }

    /// Kinds that failed, with their errors
    pub fn failures(&self) -> impl Iterator<Item = (EntityKind, &FlowError)> + '_ {
        EntityKind::ALL
            .into_iter()
            .filter_map(move |kind| self.outcome(kind).as_ref().err().map(|e| (kind, e)))
    }
}

/// Handles to the three load tasks started by [`EntityStore::spawn_load_all`].
///
/// Each task populates its own collection as soon as it finishes; awaiting
/// the handles is only needed to learn the outcome.
pub struct LoadHandles {
    pub clients: JoinHandle<Result<usize>>,
    pub projects: JoinHandle<Result<usize>>,
    pub tasks: JoinHandle<Result<usize>>,
}

impl LoadHandles {
    /// Wait for all three loads and collect their outcomes
    pub async fn join(self) -> LoadReport {
        let (clients, projects, tasks) = futures::join!(self.clients, self.projects, self.tasks);
        LoadReport {
            clients: clients.unwrap_or_else(|e| Err(e.into())),
            projects: projects.unwrap_or_else(|e| Err(e.into())),
            tasks: tasks.unwrap_or_else(|e| Err(e.into())),
        }
    }
}

/// In-memory clients, projects and tasks, synchronized with a remote store.
///
/// Cheap to clone; clones share the same collections.
#[derive(Clone)]
pub struct EntityStore {
    gateway: Arc<dyn RemoteGateway>,
    collections: Arc<RwLock<Collections>>,
    revision: Arc<watch::Sender<u64>>,
}

impl EntityStore {
    /// Create an empty store backed by `gateway`
    pub fn new(gateway: Arc<dyn RemoteGateway>) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            gateway,
            collections: Arc::new(RwLock::new(Collections::default())),
            revision: Arc::new(revision),
        }
    }

    // ==================== Loading ====================

    /// Load all three collections.
    ///
    /// The loads run concurrently and independently: each replaces its own
    /// collection the moment it succeeds, so readers may observe some kinds
    /// loaded and others still empty. A failed kind keeps whatever it held.
    pub async fn load_all(&self) -> LoadReport {
        let (clients, projects, tasks) =
            futures::join!(self.load_clients(), self.load_projects(), self.load_tasks());
        LoadReport {
            clients,
            projects,
            tasks,
        }
    }

    /// Start the three loads as background tasks and return immediately.
    pub fn spawn_load_all(&self) -> LoadHandles {
        let clients = self.clone();
        let projects = self.clone();
        let tasks = self.clone();
        LoadHandles {
            clients: tokio::spawn(async move { clients.load_clients().await }),
            projects: tokio::spawn(async move { projects.load_projects().await }),
            tasks: tokio::spawn(async move { tasks.load_tasks().await }),
        }
    }

    /// Replace the client collection with the store's
    pub async fn load_clients(&self) -> Result<usize> {
        self.load::<Client>().await
    }

    /// Replace the project collection with the store's
    pub async fn load_projects(&self) -> Result<usize> {
        self.load::<Project>().await
    }

    /// Replace the task collection with the store's
    pub async fn load_tasks(&self) -> Result<usize> {
        self.load::<Task>().await
    }

    async fn load<T: Stored>(&self) -> Result<usize> {
        let kind = T::KIND;
        let entities: Vec<T> = match self.fetch(kind).await {
            Ok(entities) => entities,
            Err(e) => {
                error!(
                    %kind,
                    backend = self.gateway.id(),
                    error = %e,
                    "failed to load collection"
                );
                return Err(e.into());
            }
        };

        let entities = keep_first_by_id(kind, entities);
        let count = entities.len();
        *T::slot(&mut *self.collections.write().await) = entities;
        self.bump();

        info!(%kind, count, backend = self.gateway.id(), "collection loaded");
        Ok(count)
    }

    async fn fetch<T: Entity>(
        &self,
        kind: EntityKind,
    ) -> std::result::Result<Vec<T>, GatewayError> {
        let body = self.gateway.list(kind).await?;
        serde_json::from_value(body)
            .map_err(|e| GatewayError::InvalidResponse(format!("{} list: {}", kind, e)))
    }

    // ==================== Creating ====================

    /// Create a client. A blank `name` is declined without a network call;
    /// an empty `contact` is sent as absent.
    pub async fn create_client(&self, name: &str, contact: Option<&str>) -> Result<Client> {
        self.create(NewClient::new(name, contact.map(str::to_string))).await
    }

    /// Create a project with status `ACTIVE`. A blank `name` is declined
    /// without a network call; an empty `project_type` is sent as absent.
    pub async fn create_project(
        &self,
        name: &str,
        project_type: Option<&str>,
        client_id: Option<EntityId>,
    ) -> Result<Project> {
        self.create(NewProject::new(name, project_type.map(str::to_string), client_id)).await
    }

    /// Create a task. A blank `title` or missing `project_id` is declined
    /// without a network call.
    pub async fn create_task(
        &self,
        title: &str,
        project_id: Option<EntityId>,
        status: TaskStatus,
        priority: Priority,
    ) -> Result<Task> {
        self.create(NewTask::new(title, project_id, status, priority)).await
    }

    async fn create<R>(&self, request: R) -> Result<R::Output>
    where
        R: CreateRequest,
        R::Output: Stored,
    {
        let kind = <R::Output as Entity>::KIND;

        if let Err(e) = request.validate() {
            debug!(%kind, error = %e, "create declined");
            return Err(e.into());
        }

        let created = match self.submit::<R>(kind, &request).await {
            Ok(entity) => entity,
            Err(e) => {
                error!(
                    %kind,
                    backend = self.gateway.id(),
                    error = %e,
                    "failed to create entity"
                );
                return Err(e.into());
            }
        };

        let appended = {
            let mut collections = self.collections.write().await;
            let slot = <R::Output as Stored>::slot(&mut collections);
            match slot.iter().position(|held| held.id() == created.id()) {
                Some(index) => {
                    if slot[index] != created {
                        warn!(
                            %kind,
                            id = created.id(),
                            "created entity differs from loaded copy, keeping loaded"
                        );
                    }
                    false
                }
                None => {
                    slot.push(created.clone());
                    true
                }
            }
        };
        if appended {
            self.bump();
        }

        info!(
            %kind,
            id = created.id(),
            backend = self.gateway.id(),
            appended,
            "entity created"
        );
        Ok(created)
    }

    async fn submit<R: CreateRequest>(
        &self,
        kind: EntityKind,
        request: &R,
    ) -> std::result::Result<R::Output, GatewayError> {
        let fields = request.to_json()?;
        let body = self.gateway.create(kind, fields).await?;
        serde_json::from_value(body)
            .map_err(|e| GatewayError::InvalidResponse(format!("{} create: {}", kind, e)))
    }

    // ==================== Reading ====================

    /// Copy of the current collections
    pub async fn snapshot(&self) -> Snapshot {
        let collections = self.collections.read().await;
        Snapshot {
            clients: collections.clients.clone(),
            projects: collections.projects.clone(),
            tasks: collections.tasks.clone(),
        }
    }

    /// Current client collection
    pub async fn clients(&self) -> Vec<Client> {
        self.collections.read().await.clients.clone()
    }

    /// Current project collection
    pub async fn projects(&self) -> Vec<Project> {
        self.collections.read().await.projects.clone()
    }

    /// Current task collection
    pub async fn tasks(&self) -> Vec<Task> {
        self.collections.read().await.tasks.clone()
    }

    /// Number of changes applied to the collections so far
    pub fn revision(&self) -> u64 {
        *self.revision.borrow()
    }

    /// Receiver that is notified after every collection change
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    fn bump(&self) {
        self.revision.send_modify(|revision| *revision += 1);
    }
}

/// Drop later entries that repeat an id, keeping load order.
fn keep_first_by_id<T: Entity>(kind: EntityKind, entities: Vec<T>) -> Vec<T> {
    let mut seen = HashSet::with_capacity(entities.len());
    entities
        .into_iter()
        .filter(|entity| {
            let fresh = seen.insert(entity.id());
            if !fresh {
                warn!(%kind, id = entity.id(), "duplicate id in list, keeping first");
            }
            fresh
        })
        .collect()
}
