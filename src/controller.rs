//! View Controller
//!
//! Tab switching, loading and error display on top of the shared `AppState`.
//! All operations run on the UI thread; the only suspension point is the
//! data source's fetch.

use std::sync::Arc;

use crate::api::DataSource;
use crate::error::FetchFailure;
use crate::models::{ItemCollection, Tab};
use crate::store::{AppState, StateHandle};

pub struct ViewController<H, S> {
    state: H,
    source: Arc<S>,
}

impl<H: Clone, S> Clone for ViewController<H, S> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            source: Arc::clone(&self.source),
        }
    }
}

impl<H, S> ViewController<H, S>
where
    H: StateHandle + Clone,
    S: DataSource,
{
    pub fn new(state: H, source: S) -> Self {
        Self {
            state,
            source: Arc::new(source),
        }
    }

    pub fn state(&self) -> &H {
        &self.state
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Show the default tab
    pub async fn initialize(&self) {
        log::info!("Initializing with the {} tab", Tab::default());
        self.load(Tab::default()).await;
    }

    /// Empty the content area, then load `tab`
    pub async fn switch_tab(&self, tab: Tab) {
        log::info!("Switching to the {} tab", tab);
        self.state.update_state(AppState::clear_content);
        self.load(tab).await;
    }

    /// Reload whatever tab is current
    pub async fn refresh(&self) {
        let tab = self.state.read_state(|s| s.current_tab).unwrap_or_default();
        self.load(tab).await;
    }

    /// Fetch `tab` and show its cards, or an error panel on failure.
    ///
    /// A response superseded by a newer load of the same tab is dropped.
    pub async fn load(&self, tab: Tab) {
        let Some(ticket) = self.state.update_state(|s| s.begin_load(tab)) else {
            return;
        };

        let outcome = self.fetch(tab).await;
        self.state.update_state(|s| s.finish_load(ticket, outcome));
    }

    /// Fetch `tab` without touching its stored collection.
    ///
    /// Failures are shown in the error panel and come back as an empty collection.
    /// `load` does not go through here: it shares `fetch` but hands the raw
    /// outcome to `AppState::finish_load`, so a failure whose ticket went stale
    /// never reaches the error panel.
    pub async fn fetch_data(&self, tab: Tab) -> ItemCollection {
        match self.fetch(tab).await {
            Ok(items) => items,
            Err(err) => {
                self.show_error(&err.to_string());
                ItemCollection::empty(tab)
            }
        }
    }

    pub fn show_error(&self, message: &str) {
        self.state.update_state(|s| s.show_error(message));
    }

    /// Loading indicator, request, parse and failure logging shared by
    /// `load` and `fetch_data`
    async fn fetch(&self, tab: Tab) -> Result<ItemCollection, FetchFailure> {
        let _loading = LoadingGuard::acquire(self.state.clone());
        let outcome = match self.source.fetch(tab).await {
            Ok(body) => ItemCollection::from_json(tab, &body),
            Err(err) => Err(err),
        };
        if let Err(err) = &outcome {
            log::error!("Fetch error: {}", err);
        }
        outcome
    }
}

/// Keeps the loading indicator up until dropped
struct LoadingGuard<H: StateHandle> {
    state: H,
}

impl<H: StateHandle> LoadingGuard<H> {
    fn acquire(state: H) -> Self {
        state.update_state(AppState::enter_loading);
        Self { state }
    }
}

impl<H: StateHandle> Drop for LoadingGuard<H> {
    fn drop(&mut self) {
        self.state.update_state(AppState::leave_loading);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Phase;
    use futures::channel::oneshot;
    use futures::executor::{block_on, LocalPool};
    use futures::task::LocalSpawnExt;
    use serde_json::json;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    type Shared = Rc<RefCell<AppState>>;
    type Reply = Result<String, FetchFailure>;

    enum Scripted {
        Now(Reply),
        Gated(oneshot::Receiver<Reply>),
    }

    /// Replays canned responses in order and records what the page looked like
    /// at each request.
    struct ScriptedSource {
        replies: RefCell<VecDeque<Scripted>>,
        probe: Shared,
        requested: RefCell<Vec<Tab>>,
        loading_seen: RefCell<Vec<bool>>,
    }

    impl DataSource for ScriptedSource {
        async fn fetch(&self, tab: Tab) -> Result<String, FetchFailure> {
            self.requested.borrow_mut().push(tab);
            self.loading_seen.borrow_mut().push(self.probe.borrow().is_loading());

            let next = self.replies.borrow_mut().pop_front();
            match next {
                Some(Scripted::Now(reply)) => reply,
                Some(Scripted::Gated(rx)) => rx
                    .await
                    .unwrap_or_else(|_| Err(FetchFailure::Transport("gate dropped".to_string()))),
                None => Err(FetchFailure::Transport("no scripted reply".to_string())),
            }
        }
    }

    fn controller(replies: Vec<Scripted>) -> ViewController<Shared, ScriptedSource> {
        let state: Shared = Rc::new(RefCell::new(AppState::new()));
        let source = ScriptedSource {
            replies: RefCell::new(replies.into()),
            probe: state.clone(),
            requested: RefCell::new(Vec::new()),
            loading_seen: RefCell::new(Vec::new()),
        };
        ViewController::new(state, source)
    }

    fn ok(body: String) -> Scripted {
        Scripted::Now(Ok(body))
    }

    fn gate() -> (oneshot::Sender<Reply>, Scripted) {
        let (tx, rx) = oneshot::channel();
        (tx, Scripted::Gated(rx))
    }

    fn posts_json(prefix: &str, n: u32) -> String {
        json!((1..=n)
            .map(|i| json!({ "userId": 1, "id": i, "title": format!("{prefix} {i}"), "body": "body" }))
            .collect::<Vec<_>>())
        .to_string()
    }

    fn users_json(n: u32) -> String {
        json!((1..=n)
            .map(|i| json!({
                "id": i,
                "name": format!("User {i}"),
                "username": format!("user{i}"),
                "email": format!("user{i}@example.com"),
                "phone": "555-0100",
                "address": { "street": "Main", "city": format!("City {i}") },
                "company": { "name": "Acme" }
            }))
            .collect::<Vec<_>>())
        .to_string()
    }

    fn todos_json(n: u32) -> String {
        json!((1..=n)
            .map(|i| json!({ "userId": 2, "id": i, "title": format!("todo {i}"), "completed": i % 2 == 0 }))
            .collect::<Vec<_>>())
        .to_string()
    }

    fn snapshot(c: &ViewController<Shared, ScriptedSource>) -> AppState {
        c.state().borrow().clone()
    }

    fn active_tabs(state: &AppState) -> Vec<Tab> {
        Tab::ALL.into_iter().filter(|tab| state.is_active(*tab)).collect()
    }

    fn card_count(state: &AppState, class: &str) -> usize {
        state.content.matches(&format!(r#"class="card {class}""#)).count()
    }

    #[test]
    fn test_initialize_shows_nine_posts() {
        let c = controller(vec![ok(posts_json("post", 12))]);
        block_on(c.initialize());

        let state = snapshot(&c);
        assert_eq!(state.current_tab, Tab::Posts);
        assert_eq!(active_tabs(&state), vec![Tab::Posts]);
        assert_eq!(card_count(&state, "post-card"), 9);
        assert_eq!(state.phase(), Phase::Idle(Tab::Posts));
        assert_eq!(*c.source().requested.borrow(), vec![Tab::Posts]);

        let ItemCollection::Posts(posts) = state.items(Tab::Posts) else {
            panic!("expected posts");
        };
        let ids: Vec<u32> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, (1..=9).collect::<Vec<_>>());
    }

    #[test]
    fn test_switch_tab_clears_content_while_in_flight() {
        let (release_users, users_reply) = gate();
        let c = controller(vec![ok(posts_json("post", 9)), users_reply]);
        block_on(c.initialize());

        let mut pool = LocalPool::new();
        let task = c.clone();
        pool.spawner()
            .spawn_local(async move { task.switch_tab(Tab::Users).await })
            .unwrap();
        pool.run_until_stalled();

        let mid = snapshot(&c);
        assert!(mid.content.is_empty());
        assert_eq!(mid.phase(), Phase::Loading(Tab::Users));
        assert_eq!(active_tabs(&mid), vec![Tab::Users]);

        release_users.send(Ok(users_json(10))).unwrap();
        pool.run_until_stalled();

        let done = snapshot(&c);
        assert_eq!(card_count(&done, "user-card"), 9);
        assert!(done.content.contains("<strong>@user1</strong>"));
        assert!(done.content.contains("🌍 City 9"));
        assert!(!done.is_active(Tab::Posts));
        assert_eq!(done.items(Tab::Users).len(), 9);
        assert_eq!(done.items(Tab::Posts).len(), 9);
        assert!(!done.is_loading());
    }

    #[test]
    fn test_http_404_shows_error_panel_and_empties_tab() {
        let c = controller(vec![
            ok(posts_json("post", 9)),
            Scripted::Now(Err(FetchFailure::Status {
                status: 404,
                status_text: "Not Found".to_string(),
            })),
        ]);
        block_on(c.initialize());
        block_on(c.refresh());

        let state = snapshot(&c);
        assert!(state.items(Tab::Posts).is_empty());
        assert!(state.content.contains("HTTP 404: Not Found"));
        assert!(state.content.contains("Try Again"));
        assert_eq!(card_count(&state, "post-card"), 0);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_loading_indicator_brackets_fetch_on_both_paths() {
        let c = controller(vec![
            ok(todos_json(3)),
            Scripted::Now(Err(FetchFailure::Transport("Failed to fetch".to_string()))),
        ]);

        block_on(c.switch_tab(Tab::Todos));
        assert!(!c.state().borrow().is_loading());

        block_on(c.refresh());
        assert!(!c.state().borrow().is_loading());
        assert!(c.state().borrow().content.contains("Failed to fetch"));

        assert_eq!(*c.source().loading_seen.borrow(), vec![true, true]);
    }

    #[test]
    fn test_malformed_body_is_reported() {
        let c = controller(vec![ok("{not json".to_string())]);
        block_on(c.load(Tab::Users));

        let state = snapshot(&c);
        assert!(state.items(Tab::Users).is_empty());
        assert!(state.content.contains("Error loading data"));
        assert!(!state.is_loading());
    }

    #[test]
    fn test_stale_response_never_overwrites_newer_one() {
        let (release_first, first) = gate();
        let (release_second, second) = gate();
        let c = controller(vec![first, second]);

        let mut pool = LocalPool::new();
        for _ in 0..2 {
            let task = c.clone();
            pool.spawner()
                .spawn_local(async move { task.load(Tab::Posts).await })
                .unwrap();
            pool.run_until_stalled();
        }
        assert!(c.state().borrow().is_loading());

        release_second.send(Ok(posts_json("fresh", 2))).unwrap();
        pool.run_until_stalled();
        assert!(c.state().borrow().is_loading());

        release_first.send(Ok(posts_json("stale", 9))).unwrap();
        pool.run_until_stalled();

        let state = snapshot(&c);
        assert!(!state.is_loading());
        assert_eq!(state.items(Tab::Posts).len(), 2);
        assert!(state.content.contains("fresh 1"));
        assert!(!state.content.contains("stale"));
    }

    #[test]
    fn test_late_response_for_previous_tab_is_cached_not_shown() {
        let (release_users, users_reply) = gate();
        let c = controller(vec![users_reply, ok(todos_json(4))]);

        let mut pool = LocalPool::new();
        let to_users = c.clone();
        pool.spawner()
            .spawn_local(async move { to_users.switch_tab(Tab::Users).await })
            .unwrap();
        pool.run_until_stalled();
        let to_todos = c.clone();
        pool.spawner()
            .spawn_local(async move { to_todos.switch_tab(Tab::Todos).await })
            .unwrap();
        pool.run_until_stalled();

        release_users.send(Ok(users_json(9))).unwrap();
        pool.run_until_stalled();

        let state = snapshot(&c);
        assert_eq!(active_tabs(&state), vec![Tab::Todos]);
        assert_eq!(card_count(&state, "todo-card"), 4);
        assert_eq!(card_count(&state, "user-card"), 0);
        assert_eq!(state.items(Tab::Users).len(), 9);
    }

    #[test]
    fn test_refresh_reloads_current_tab() {
        let c = controller(vec![ok(todos_json(1)), ok(todos_json(2))]);
        block_on(c.switch_tab(Tab::Todos));
        block_on(c.refresh());

        assert_eq!(*c.source().requested.borrow(), vec![Tab::Todos, Tab::Todos]);
        assert_eq!(c.state().borrow().items(Tab::Todos).len(), 2);
    }

    #[test]
    fn test_fetch_data_truncates_without_storing() {
        let c = controller(vec![ok(todos_json(20))]);
        let items = block_on(c.fetch_data(Tab::Todos));

        assert_eq!(items.len(), 9);
        assert_eq!(items.tab(), Tab::Todos);
        assert!(c.state().borrow().items(Tab::Todos).is_empty());
        assert!(!c.state().borrow().is_loading());
    }

    #[test]
    fn test_fetch_data_failure_returns_empty_and_shows_error() {
        let c = controller(vec![Scripted::Now(Err(FetchFailure::Status {
            status: 500,
            status_text: "Internal Server Error".to_string(),
        }))]);
        let items = block_on(c.fetch_data(Tab::Users));

        assert_eq!(items, ItemCollection::empty(Tab::Users));
        assert!(c.state().borrow().content.contains("HTTP 500: Internal Server Error"));
        assert!(!c.state().borrow().is_loading());
    }

    #[test]
    fn test_load_and_fetch_data_report_failures_alike() {
        let not_found = || {
            Scripted::Now(Err(FetchFailure::Status {
                status: 404,
                status_text: "Not Found".to_string(),
            }))
        };
        let c = controller(vec![not_found(), not_found()]);

        block_on(c.fetch_data(Tab::Users));
        let from_fetch_data = snapshot(&c).content;

        c.state().borrow_mut().clear_content();
        block_on(c.load(Tab::Users));
        let from_load = snapshot(&c).content;

        assert_eq!(from_fetch_data, from_load);
        assert!(from_load.contains("HTTP 404: Not Found"));
        assert!(!c.state().borrow().is_loading());
    }

    #[test]
    fn test_show_error_replaces_cards() {
        let c = controller(vec![ok(posts_json("post", 3))]);
        block_on(c.initialize());
        c.show_error("Something broke");

        let state = snapshot(&c);
        assert_eq!(card_count(&state, "post-card"), 0);
        assert!(state.content.contains("<p>Something broke</p>"));
    }
}
