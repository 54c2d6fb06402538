use postview_api::client::Client;
use postview_types::{comment::Comment, post::Post};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info};

use super::{
    error::Error,
    form::CommentForm,
    state::{CommentsState, Notice},
};

/// Result of a background request, applied by [`PostDetails`] on the owner's task.
#[derive(Debug)]
pub enum Event {
    CommentsLoaded {
        generation: u64,
        result: Result<Vec<Comment>, Error>,
    },
    CommentDeleted {
        id: i32,
        result: Result<(), Error>,
    },
    CommentCreated {
        post_id: i32,
        result: Result<Comment, Error>,
    },
}

/// Details of the selected post and its comments.
///
/// Requests run on spawned tokio tasks, so the mutating operations must be
/// called from within a runtime. Their results are only applied while the
/// owner drives the view with [`PostDetails::next_event`],
/// [`PostDetails::settle`] or [`PostDetails::try_apply_ready`].
///
/// Only the latest comment fetch counts: selecting another post kills the
/// running fetch and any result that was already on its way is dropped.
pub struct PostDetails {
    http: Arc<Client>,
    post: Option<Post>,
    comments: CommentsState,
    created_while_loading: Vec<Comment>,
    notice: Option<Notice>,
    form: Option<CommentForm>,

    generation: u64,
    pending: usize,
    kill_switch: Option<oneshot::Sender<()>>,
    events_tx: mpsc::Sender<Event>,
    events_rx: mpsc::Receiver<Event>,
}

impl PostDetails {
    const EVENT_BUFFER: usize = 100;

    pub fn new(http: Arc<Client>) -> Self {
        let (events_tx, events_rx) = mpsc::channel(Self::EVENT_BUFFER);
        PostDetails {
            http,
            post: None,
            comments: CommentsState::Idle,
            created_while_loading: vec![],
            notice: None,
            form: None,
            generation: 0,
            pending: 0,
            kill_switch: None,
            events_tx,
            events_rx,
        }
    }

    pub fn post(&self) -> Option<&Post> {
        self.post.as_ref()
    }

    pub fn comments(&self) -> &CommentsState {
        &self.comments
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    /// Whether the "Something went wrong" banner is up.
    pub fn has_error(&self) -> bool {
        self.comments.is_failed() || self.notice.is_some()
    }

    pub fn form(&self) -> Option<&CommentForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut CommentForm> {
        self.form.as_mut()
    }

    pub fn is_form_visible(&self) -> bool {
        self.form.is_some()
    }

    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Switches to `post` and fetches its comments. `None` stops any running
    /// fetch and returns the list to [`CommentsState::Idle`].
    pub fn select_post(&mut self, post: Option<Post>) {
        self.generation += 1;
        self.kill_fetch();
        self.notice = None;
        self.created_while_loading.clear();
        self.post = post;
        match self.post.as_ref().map(Post::post_id) {
            Some(post_id) => {
                debug!("Fetching comments of post {} (generation {})", post_id, self.generation);
                self.comments = CommentsState::Loading;
                self.kill_switch = Some(self.start_fetch(post_id));
            }
            None => {
                debug!("No post selected (generation {})", self.generation);
                self.comments = CommentsState::Idle;
            }
        }
    }

    pub fn delete_comment(&mut self, id: i32) {
        self.notice = None;
        debug!("Deleting comment {}", id);
        let http = self.http.clone();
        self.spawn(async move {
            let result = http.delete_comment(id).await.map_err(Error::from);
            Event::CommentDeleted { id, result }
        });
    }

    pub fn open_form(&mut self) {
        if self.form.is_none() {
            self.form = Some(CommentForm::new());
        }
    }

    /// Validates the open form and sends it. Returns whether a request went out;
    /// validation failures are left on the form.
    pub fn submit_comment(&mut self) -> bool {
        let Some(post_id) = self.post.as_ref().map(Post::post_id) else {
            error!("Cannot submit a comment without a selected post");
            return false;
        };
        let Some(form) = self.form.as_mut() else {
            return false;
        };
        if form.is_submitting() {
            debug!("Comment for post {} is already being submitted", post_id);
            return false;
        }
        let Some(new_comment) = form.prepare(post_id) else {
            debug!("Comment form is invalid: {:?}", form.errors());
            return false;
        };
        form.set_submitting(true);
        self.notice = None;
        let http = self.http.clone();
        self.spawn(async move {
            let result = http.create_comment(&new_comment).await.map_err(Error::from);
            Event::CommentCreated { post_id, result }
        });
        true
    }

    /// Waits for one outstanding request and applies its result.
    /// Returns false without waiting when nothing is outstanding.
    pub async fn next_event(&mut self) -> bool {
        if self.pending == 0 {
            return false;
        }
        match self.events_rx.recv().await {
            Some(event) => {
                self.apply(event);
                true
            }
            None => false,
        }
    }

    /// Applies results until no request is outstanding.
    pub async fn settle(&mut self) {
        while self.next_event().await {}
    }

    /// Applies the results that have already arrived. Returns how many.
    pub fn try_apply_ready(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply(event);
            applied += 1;
        }
        applied
    }

    fn apply(&mut self, event: Event) {
        self.pending = self.pending.saturating_sub(1);
        match event {
            Event::CommentsLoaded { generation, result } => {
                if generation != self.generation {
                    debug!(
                        "Discarding comments of generation {}, current is {}",
                        generation, self.generation
                    );
                    return;
                }
                self.kill_switch = None;
                match result {
                    Ok(comments) => {
                        debug!(
                            "Loaded {} comments, {} created meanwhile",
                            comments.len(),
                            self.created_while_loading.len()
                        );
                        let created = std::mem::take(&mut self.created_while_loading);
                        self.comments = CommentsState::loaded_with(comments, created);
                    }
                    Err(e) => {
                        error!("Error fetching comments: {}", e);
                        self.created_while_loading.clear();
                        self.comments = CommentsState::Failed;
                    }
                }
            }
            Event::CommentDeleted { id, result } => match result {
                Ok(()) => {
                    self.created_while_loading.retain(|c| c.comment_id() != id);
                    if !self.comments.remove(id) {
                        debug!("Deleted comment {} was not in the list", id);
                    }
                }
                Err(e) => {
                    error!("Error deleting comment {}: {}", id, e);
                    self.notice = Some(Notice::DeleteFailed(id));
                }
            },
            Event::CommentCreated { post_id, result } => {
                if let Some(form) = self.form.as_mut() {
                    form.set_submitting(false);
                }
                if self.post.as_ref().map(Post::post_id) != Some(post_id) {
                    debug!("Discarding comment created for post {}", post_id);
                    return;
                }
                match result {
                    Ok(comment) => {
                        debug!("Created comment {}", comment.comment_id());
                        if self.comments.is_loading() {
                            self.created_while_loading.push(comment);
                        } else {
                            self.comments.append(comment);
                        }
                        if let Some(form) = self.form.as_mut() {
                            form.reset_body();
                        }
                    }
                    Err(e) => {
                        error!("Error creating comment for post {}: {}", post_id, e);
                        self.notice = Some(Notice::CreateFailed);
                    }
                }
            }
        }
    }

    fn spawn<F>(&mut self, request: F)
    where
        F: std::future::Future<Output = Event> + Send + 'static,
    {
        self.pending += 1;
        let events_tx = self.events_tx.clone();
        tokio::spawn(async move {
            let event = request.await;
            if let Err(e) = events_tx.send(event).await {
                debug!("View dropped before result arrived: {:?}", e.0);
            }
        });
    }

    fn start_fetch(&mut self, post_id: i32) -> oneshot::Sender<()> {
        let (kill_tx, kill_rx) = oneshot::channel();
        let http = self.http.clone();
        let generation = self.generation;
        self.spawn(async move {
            let result = tokio::select! {
                result = http.get_comments(post_id) => result.map_err(Error::from),
                _ = kill_rx => {
                    info!("Fetch of comments for post {} cancelled", post_id);
                    Err(Error::Cancelled)
                }
            };
            Event::CommentsLoaded { generation, result }
        });
        kill_tx
    }

    fn kill_fetch(&mut self) {
        if let Some(kill_switch) = self.kill_switch.take() {
            let _ = kill_switch.send(());
        }
    }
}
