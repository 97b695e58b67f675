use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use bevy::prelude::*;
use bevy::tasks::futures_lite::future;

use super::config::ApiConfig;
use super::error::FetchError;
use super::model::{ContentKind, ContentList, PortfolioContent};
use super::source::{ContentSource, HttpContentSource};
use crate::activity::ActivityLog;

/// Result of one list request, handed from the fetch task to the frame loop.
#[derive(Debug)]
pub struct FetchOutcome {
    pub kind: ContentKind,
    pub result: Result<ContentList, FetchError>,
}

impl FetchOutcome {
    pub fn failed(kind: ContentKind, error: FetchError) -> Self {
        Self {
            kind,
            result: Err(error),
        }
    }
}

/// Written when a row's list has been replaced and its cards must be rebuilt.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentUpdated {
    pub kind: ContentKind,
}

/// Thread-safe hand-off between fetch tasks and [`drain_fetch_outcomes`].
#[derive(Resource, Clone, Default)]
pub struct FetchQueue(Arc<Mutex<Vec<FetchOutcome>>>);

impl FetchQueue {
    // Poisoning leaves the Vec intact; queued outcomes must still be drained.
    fn lock(&self) -> MutexGuard<'_, Vec<FetchOutcome>> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn push(&self, outcome: FetchOutcome) {
        self.lock().push(outcome);
    }

    pub fn take(&self) -> Vec<FetchOutcome> {
        std::mem::take(&mut *self.lock())
    }
}

/// Request and decode one list. Never retries.
pub async fn fetch_kind<S>(source: &S, kind: ContentKind) -> FetchOutcome
where
    S: ContentSource + ?Sized,
{
    let result = match source.get(kind.path()).await {
        Ok(body) => ContentList::decode(kind, &body),
        Err(error) => Err(error),
    };
    FetchOutcome { kind, result }
}

/// Run all three requests concurrently. Each outcome is queued as soon as it
/// resolves, so one slow or failing list does not hold back the others.
pub async fn fetch_all<S>(source: &S, queue: &FetchQueue)
where
    S: ContentSource + ?Sized,
{
    let fetch_into = move |kind: ContentKind| async move {
        queue.push(fetch_kind(source, kind).await);
    };

    future::zip(
        future::zip(
            fetch_into(ContentKind::Projects),
            fetch_into(ContentKind::WorkHistory),
        ),
        fetch_into(ContentKind::Certifications),
    )
    .await;
}

/// Append the "Fetching ..." lines, one per list, in request order.
pub fn log_fetch_kickoff(log: &mut ActivityLog) {
    for kind in ContentKind::ALL {
        log.push(format!("Fetching {}", kind.log_name()));
    }
}

/// Fold one outcome into the content lists and activity log.
/// Returns the kind whose list was replaced, if any.
pub fn apply_outcome(
    outcome: FetchOutcome,
    content: &mut PortfolioContent,
    log: &mut ActivityLog,
) -> Option<ContentKind> {
    let kind = outcome.kind;
    match outcome.result {
        Ok(list) => {
            log.push(format!("GET Request: {} fetched successfully", kind.title()));
            content.replace(list);
            Some(kind)
        }
        Err(error) => {
            warn!("Content fetch for {} failed: {}", kind.path(), error);
            log.push(format!("Error fetching {}: {}", kind.log_name(), error));
            None
        }
    }
}

/// Start the three list requests on a background thread with its own runtime.
#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_fetches<S>(source: S, queue: FetchQueue)
where
    S: ContentSource + Send + Sync + 'static,
{
    let fallback = queue.clone();
    let spawned = std::thread::Builder::new()
        .name("content-fetch".into())
        .spawn(move || {
            match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime.block_on(fetch_all(&source, &queue)),
                Err(e) => fail_all(&queue, &format!("runtime unavailable: {e}")),
            }
        });

    if let Err(e) = spawned {
        fail_all(&fallback, &format!("fetch thread unavailable: {e}"));
    }
}

/// Start the three list requests on the browser's event loop.
#[cfg(target_arch = "wasm32")]
pub fn spawn_fetches<S>(source: S, queue: FetchQueue)
where
    S: ContentSource + 'static,
{
    wasm_bindgen_futures::spawn_local(async move {
        fetch_all(&source, &queue).await;
    });
}

fn fail_all(queue: &FetchQueue, reason: &str) {
    for kind in ContentKind::ALL {
        queue.push(FetchOutcome::failed(
            kind,
            FetchError::Transport(reason.to_string()),
        ));
    }
}

/// Log the kickoff and start fetching from the configured content service.
pub fn start_content_fetch(
    config: Res<ApiConfig>,
    queue: Res<FetchQueue>,
    mut log: ResMut<ActivityLog>,
) {
    log_fetch_kickoff(&mut log);

    match HttpContentSource::new(config.clone()) {
        Ok(source) => spawn_fetches(source, queue.clone()),
        Err(error) => fail_all(&queue, &error.to_string()),
    }
}

/// Apply whatever fetches completed since the previous frame.
pub fn drain_fetch_outcomes(
    queue: Res<FetchQueue>,
    mut content: ResMut<PortfolioContent>,
    mut log: ResMut<ActivityLog>,
    mut updates: EventWriter<ContentUpdated>,
) {
    for outcome in queue.take() {
        if let Some(kind) = apply_outcome(outcome, &mut content, &mut log) {
            updates.write(ContentUpdated { kind });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use bevy::tasks::block_on;
    use constants::api::CERTIFICATIONS_PATH;

    const PROJECTS: &str = r#"[
        {"id":"1","name":"Portfolio","url":"https://one.test","imageUrl":"https://one.test/a.png"},
        {"id":"2","name":"Engine","url":"https://two.test","imageUrl":"https://two.test/b.png"}
    ]"#;
    const WORK_HISTORY: &str = r#"[
        {"id":"w1","companyName":"Acme","role":"Engineer","skills":["Rust"],
         "url":"https://acme.test","logoUrl":null}
    ]"#;
    const CERTIFICATIONS: &str = r#"[
        {"id":1,"name":"CKA","issuer":"CNCF","url":"https://cert.test",
         "imageUrl":"https://cert.test/c.png"}
    ]"#;

    /// Serves canned bodies, rejecting the listed paths.
    struct FakeSource {
        rejected: Vec<&'static str>,
    }

    #[async_trait]
    impl ContentSource for FakeSource {
        async fn get(&self, path: &str) -> Result<String, FetchError> {
            if self.rejected.contains(&path) {
                return Err(FetchError::Transport("connection refused".into()));
            }
            Ok(match path {
                "/projects" => PROJECTS,
                "/workhistory" => WORK_HISTORY,
                "/certifications" => CERTIFICATIONS,
                _ => return Err(FetchError::Status(404)),
            }
            .to_string())
        }
    }

    struct StatusSource(u16);

    #[async_trait]
    impl ContentSource for StatusSource {
        async fn get(&self, _path: &str) -> Result<String, FetchError> {
            Err(FetchError::Status(self.0))
        }
    }

    struct BodySource(&'static str);

    #[async_trait]
    impl ContentSource for BodySource {
        async fn get(&self, _path: &str) -> Result<String, FetchError> {
            Ok(self.0.to_string())
        }
    }

    fn run(source: &dyn ContentSource) -> (PortfolioContent, ActivityLog, Vec<ContentKind>) {
        let queue = FetchQueue::default();
        block_on(fetch_all(source, &queue));

        let mut content = PortfolioContent::default();
        let mut log = ActivityLog::default();
        let updated = queue
            .take()
            .into_iter()
            .filter_map(|outcome| apply_outcome(outcome, &mut content, &mut log))
            .collect();
        (content, log, updated)
    }

    #[test]
    fn all_lists_populate() {
        let (content, log, mut updated) = run(&FakeSource { rejected: vec![] });
        assert_eq!(content.projects.len(), 2);
        assert_eq!(content.work_history.len(), 1);
        assert_eq!(content.certifications.len(), 1);

        updated.sort_by_key(|kind| kind.path());
        assert_eq!(updated.len(), 3);
        assert!(
            log.entries()
                .iter()
                .any(|e| e.message == "GET Request: Work History fetched successfully")
        );
    }

    #[test]
    fn certification_failure_is_isolated() {
        let (content, log, updated) = run(&FakeSource {
            rejected: vec![CERTIFICATIONS_PATH],
        });

        assert_eq!(content.projects.len(), 2);
        assert_eq!(content.work_history.len(), 1);
        assert!(content.certifications.is_empty());
        assert!(!updated.contains(&ContentKind::Certifications));

        let mentions: Vec<_> = log
            .entries()
            .iter()
            .filter(|e| e.message.contains("certifications"))
            .collect();
        assert_eq!(mentions.len(), 1);
        assert_eq!(
            mentions[0].message,
            "Error fetching certifications: network error: connection refused"
        );
    }

    #[test]
    fn non_success_status_is_reported() {
        let (content, log, updated) = run(&StatusSource(503));
        assert!(updated.is_empty());
        assert!(content.projects.is_empty());
        assert_eq!(log.len(), 3);
        assert!(log.entries().iter().any(
            |e| e.message == "Error fetching work history: request failed with status code 503"
        ));
    }

    #[test]
    fn malformed_body_keeps_previous_list() {
        let mut content = PortfolioContent::default();
        let mut log = ActivityLog::default();
        let first = block_on(fetch_kind(
            &FakeSource { rejected: vec![] },
            ContentKind::Projects,
        ));
        apply_outcome(first, &mut content, &mut log);
        assert_eq!(content.projects.len(), 2);

        let broken = block_on(fetch_kind(&BodySource("{\"oops\":"), ContentKind::Projects));
        assert!(matches!(broken.result, Err(FetchError::Decode(_))));
        assert_eq!(apply_outcome(broken, &mut content, &mut log), None);
        assert_eq!(content.projects.len(), 2);
        assert!(
            log.entries()[1]
                .message
                .starts_with("Error fetching projects: malformed response")
        );
    }

    #[test]
    fn poisoned_queue_still_delivers_outcomes() {
        let queue = FetchQueue::default();
        queue.push(FetchOutcome::failed(ContentKind::Projects, FetchError::Status(500)));

        let held = queue.clone();
        let crashed = std::thread::spawn(move || {
            let _guard = held.0.lock().unwrap();
            panic!("fetch task crashed while holding the queue");
        })
        .join();
        assert!(crashed.is_err());
        assert!(queue.0.is_poisoned());

        queue.push(FetchOutcome::failed(
            ContentKind::Certifications,
            FetchError::Transport("reset".into()),
        ));
        let kinds: Vec<_> = queue.take().into_iter().map(|o| o.kind).collect();
        assert_eq!(kinds, [ContentKind::Projects, ContentKind::Certifications]);
        assert!(queue.take().is_empty());
    }

    #[test]
    fn kickoff_lines_are_ordered() {
        let mut log = ActivityLog::default();
        log_fetch_kickoff(&mut log);
        let messages: Vec<_> = log.entries().iter().map(|e| e.message.as_str()).collect();
        assert_eq!(
            messages,
            [
                "Fetching projects",
                "Fetching work history",
                "Fetching certifications"
            ]
        );
    }

    #[test]
    fn drain_system_emits_updates() {
        let mut app = App::new();
        app.init_resource::<FetchQueue>()
            .init_resource::<PortfolioContent>()
            .init_resource::<ActivityLog>()
            .add_event::<ContentUpdated>()
            .add_systems(Update, drain_fetch_outcomes);

        let queue = app.world().resource::<FetchQueue>().clone();
        block_on(fetch_all(&FakeSource { rejected: vec!["/projects"] }, &queue));
        app.update();

        let events = app.world().resource::<Events<ContentUpdated>>();
        let mut reader = events.get_cursor();
        let kinds: Vec<_> = reader.read(events).map(|e| e.kind).collect();
        assert_eq!(kinds.len(), 2);
        assert!(!kinds.contains(&ContentKind::Projects));
        assert!(queue.take().is_empty());
    }
}
