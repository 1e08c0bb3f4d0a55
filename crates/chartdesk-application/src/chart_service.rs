//! Chart use cases consumed by the views.
//!
//! Wraps the chart repository with session scoping and draft validation:
//! list/create/delete act as the signed-in user, while the detail fetch is
//! deliberately ownership-unchecked (public-read model; row visibility is
//! the remote service's responsibility).

use crate::session_store::SessionStore;
use chartdesk_core::chart::{Chart, ChartDraft, ChartExport, ChartRepository, export_file_name};
use chartdesk_core::error::{ChartdeskError, Result};
use chrono::Utc;
use std::sync::Arc;

pub struct ChartService {
    repository: Arc<dyn ChartRepository>,
    session: Arc<SessionStore>,
}

impl ChartService {
    pub fn new(repository: Arc<dyn ChartRepository>, session: Arc<SessionStore>) -> Self {
        Self {
            repository,
            session,
        }
    }

    fn owner_id(&self) -> Result<String> {
        self.session
            .current()
            .map(|session| session.user.id)
            .ok_or(ChartdeskError::NotAuthenticated)
    }

    /// Lists the acting user's charts, newest first.
    pub async fn list(&self) -> Result<Vec<Chart>> {
        let owner_id = self.owner_id()?;
        self.repository.list_by_owner(&owner_id).await
    }

    /// Fetches a chart by id; `None` is the not-found outcome.
    pub async fn get(&self, chart_id: &str) -> Result<Option<Chart>> {
        self.repository.find_by_id(chart_id).await
    }

    /// Validates and saves a draft, returning the stored chart.
    ///
    /// A draft failing validation (empty title) never reaches the
    /// repository.
    pub async fn create(&self, draft: ChartDraft) -> Result<Chart> {
        let owner_id = self.owner_id()?;
        let new_chart = draft.into_new_chart(owner_id, Utc::now())?;
        let chart = self.repository.insert(&new_chart).await?;
        tracing::info!("[Chart] Created chart {} ({})", chart.id, chart.title);
        Ok(chart)
    }

    /// Deletes a chart by id. Deleting a missing id is a benign no-op.
    pub async fn delete(&self, chart_id: &str) -> Result<()> {
        self.owner_id()?;
        self.repository.delete(chart_id).await?;
        tracing::info!("[Chart] Deleted chart {chart_id}");
        Ok(())
    }

    /// Builds the export payload for a chart.
    pub async fn export(&self, chart_id: &str) -> Result<ChartExport> {
        let chart = self
            .get(chart_id)
            .await?
            .ok_or_else(|| ChartdeskError::not_found("chart", chart_id))?;
        Ok(ChartExport {
            file_name: export_file_name(&chart.title),
            json: chart.to_export_json()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chartdesk_core::auth::{AuthService, AuthSession, UserIdentity};
    use chartdesk_core::chart::{NewChart, PositionDraft};
    use chartdesk_infrastructure::paths::ChartdeskPaths;
    use chartdesk_infrastructure::storage::SessionTokenStorage;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicU32, Ordering};
    use tempfile::TempDir;

    /// In-memory repository tracking how often insert was attempted.
    #[derive(Default)]
    struct InMemoryChartRepository {
        charts: Mutex<Vec<Chart>>,
        next_id: AtomicU32,
        insert_calls: AtomicU32,
    }

    impl InMemoryChartRepository {
        fn seed(&self, chart: Chart) {
            self.charts.lock().unwrap().push(chart);
        }

        fn insert_calls(&self) -> u32 {
            self.insert_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ChartRepository for InMemoryChartRepository {
        async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Chart>> {
            let mut charts: Vec<Chart> = self
                .charts
                .lock()
                .unwrap()
                .iter()
                .filter(|c| c.owner_id == owner_id)
                .cloned()
                .collect();
            charts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(charts)
        }

        async fn find_by_id(&self, chart_id: &str) -> Result<Option<Chart>> {
            Ok(self
                .charts
                .lock()
                .unwrap()
                .iter()
                .find(|c| c.id == chart_id)
                .cloned())
        }

        async fn insert(&self, chart: &NewChart) -> Result<Chart> {
            self.insert_calls.fetch_add(1, Ordering::SeqCst);
            let id = format!("chart-{}", self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
            let stored = Chart {
                id,
                owner_id: chart.owner_id.clone(),
                title: chart.title.clone(),
                description: chart.description.clone(),
                positions: chart.positions.clone(),
                created_at: chart.created_at,
            };
            self.seed(stored.clone());
            Ok(stored)
        }

        async fn delete(&self, chart_id: &str) -> Result<()> {
            self.charts.lock().unwrap().retain(|c| c.id != chart_id);
            Ok(())
        }
    }

    /// Auth service that accepts any credentials.
    struct PermissiveAuth;

    #[async_trait]
    impl AuthService for PermissiveAuth {
        async fn login(&self, email: &str, _password: &str) -> Result<AuthSession> {
            Ok(AuthSession {
                user: UserIdentity {
                    id: format!("owner-{email}"),
                    email: email.to_string(),
                },
                access_token: format!("tok-{email}"),
            })
        }

        async fn current_user(&self, _access_token: &str) -> Result<Option<UserIdentity>> {
            Ok(None)
        }

        async fn logout(&self, _access_token: &str) -> Result<()> {
            Ok(())
        }
    }

    struct Fixture {
        service: ChartService,
        session: Arc<SessionStore>,
        repository: Arc<InMemoryChartRepository>,
        _tmp: TempDir,
    }

    fn fixture() -> Fixture {
        let tmp = TempDir::new().unwrap();
        let paths = ChartdeskPaths::new(Some(tmp.path()));
        let storage = Arc::new(SessionTokenStorage::new(&paths).unwrap());
        let session = Arc::new(SessionStore::new(Arc::new(PermissiveAuth), storage));
        let repository = Arc::new(InMemoryChartRepository::default());
        let service = ChartService::new(
            Arc::clone(&repository) as Arc<dyn ChartRepository>,
            Arc::clone(&session),
        );
        Fixture {
            service,
            session,
            repository,
            _tmp: tmp,
        }
    }

    fn chart_owned_by(id: &str, owner: &str, title: &str) -> Chart {
        Chart {
            id: id.to_string(),
            owner_id: owner.to_string(),
            title: title.to_string(),
            description: String::new(),
            positions: Vec::new(),
            created_at: Utc::now(),
        }
    }

    fn org_chart_draft() -> ChartDraft {
        ChartDraft {
            title: "Org Chart".to_string(),
            description: String::new(),
            positions: vec![PositionDraft {
                local_id: 1,
                title: "CEO".to_string(),
                name: "Ann".to_string(),
                responsibilities: String::new(),
                kpis: String::new(),
            }],
        }
    }

    #[tokio::test]
    async fn test_list_requires_session() {
        let fx = fixture();
        let err = fx.service.list().await.unwrap_err();
        assert!(matches!(err, ChartdeskError::NotAuthenticated));
    }

    #[tokio::test]
    async fn test_list_only_returns_acting_owners_charts() {
        let fx = fixture();
        fx.session.login("ann@example.com", "pw").await.unwrap();
        let owner = fx.session.current().unwrap().user.id;

        fx.repository.seed(chart_owned_by("c1", &owner, "Mine"));
        fx.repository.seed(chart_owned_by("c2", "owner-bob", "Theirs"));

        let charts = fx.service.list().await.unwrap();
        assert_eq!(charts.len(), 1);
        assert_eq!(charts[0].title, "Mine");
    }

    #[tokio::test]
    async fn test_create_org_chart_scenario() {
        let fx = fixture();
        fx.session.login("ann@example.com", "pw").await.unwrap();

        let chart = fx.service.create(org_chart_draft()).await.unwrap();
        assert!(!chart.id.is_empty());
        assert_eq!(chart.title, "Org Chart");
        assert_eq!(chart.positions.len(), 1);
        assert_eq!(chart.positions[0].title, "CEO");
        assert_eq!(chart.positions[0].name, "Ann");

        // The detail fetch finds it by the assigned id
        let fetched = fx.service.get(&chart.id).await.unwrap().unwrap();
        assert_eq!(fetched, chart);
    }

    #[tokio::test]
    async fn test_create_with_empty_title_never_reaches_repository() {
        let fx = fixture();
        fx.session.login("ann@example.com", "pw").await.unwrap();

        let mut draft = org_chart_draft();
        draft.title = "   ".to_string();
        let err = fx.service.create(draft).await.unwrap_err();
        assert!(err.is_validation());
        assert_eq!(fx.repository.insert_calls(), 0);
    }

    #[tokio::test]
    async fn test_delete_missing_id_is_benign() {
        let fx = fixture();
        fx.session.login("ann@example.com", "pw").await.unwrap();
        let owner = fx.session.current().unwrap().user.id;
        fx.repository.seed(chart_owned_by("c1", &owner, "Keep"));

        fx.service.delete("no-such-id").await.unwrap();
        // The surviving list is intact
        let charts = fx.service.list().await.unwrap();
        assert_eq!(charts.len(), 1);
        assert_eq!(charts[0].id, "c1");
    }

    #[tokio::test]
    async fn test_get_is_public_read() {
        let fx = fixture();
        fx.repository
            .seed(chart_owned_by("c9", "owner-bob", "Shared"));
        // No session required for the detail fetch
        let chart = fx.service.get("c9").await.unwrap().unwrap();
        assert_eq!(chart.title, "Shared");
    }

    #[tokio::test]
    async fn test_export_round_trip_and_not_found() {
        let fx = fixture();
        fx.session.login("ann@example.com", "pw").await.unwrap();
        let chart = fx.service.create(org_chart_draft()).await.unwrap();

        let export = fx.service.export(&chart.id).await.unwrap();
        assert_eq!(export.file_name, "Org_Chart_chart.json");
        let parsed = Chart::from_export_json(&export.json).unwrap();
        assert_eq!(parsed.title, chart.title);
        assert_eq!(parsed.positions, chart.positions);

        let err = fx.service.export("missing").await.unwrap_err();
        assert!(err.is_not_found());
    }
}
