use actor_framework::{ActorEntity, FrameworkError, ResourceActor};
use async_trait::async_trait;
use std::sync::atomic::{AtomicU32, Ordering};

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Note {
    id: u32,
    title: String,
    body: String,
}

#[derive(Debug)]
struct NoteCreate {
    title: String,
    body: String,
}

#[derive(Debug)]
struct NoteUpdate {
    title: Option<String>,
    body: Option<String>,
}

#[derive(Debug, thiserror::Error, PartialEq)]
#[error("title longer than {0} characters")]
struct TitleTooLong(usize);

/// Maximum title length, injected through `run()`.
type NoteContext = usize;

#[async_trait]
impl ActorEntity for Note {
    type Id = u32;
    type Create = NoteCreate;
    type Update = NoteUpdate;
    type Context = NoteContext;
    type Error = TitleTooLong;

    fn id(&self) -> &u32 {
        &self.id
    }

    fn from_create_params(id: u32, params: NoteCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            title: params.title,
            body: params.body,
        })
    }

    async fn on_create(&mut self, max_title: &usize) -> Result<(), Self::Error> {
        check_title(&self.title, *max_title)
    }

    async fn on_replace(&mut self, params: NoteCreate, max_title: &usize) -> Result<(), Self::Error> {
        check_title(&params.title, *max_title)?;
        self.title = params.title;
        self.body = params.body;
        Ok(())
    }

    async fn on_update(&mut self, update: NoteUpdate, max_title: &usize) -> Result<(), Self::Error> {
        // Body is applied first; a rejected title must still leave the stored record as it was.
        if let Some(body) = update.body {
            self.body = body;
        }
        if let Some(title) = update.title {
            check_title(&title, *max_title)?;
            self.title = title;
        }
        Ok(())
    }
}

fn check_title(title: &str, max: usize) -> Result<(), TitleTooLong> {
    if title.chars().count() > max {
        return Err(TitleTooLong(max));
    }
    Ok(())
}

fn note(id: u32, title: &str, body: &str) -> Note {
    Note {
        id,
        title: title.to_string(),
        body: body.to_string(),
    }
}

fn spawn_notes() -> (actor_framework::ResourceClient<Note>, tokio::task::JoinHandle<()>) {
    let counter = AtomicU32::new(100);
    let (actor, client) =
        ResourceActor::<Note>::new(10, move || counter.fetch_add(1, Ordering::SeqCst));
    let actor = actor.with_records(vec![note(1, "first", "a"), note(2, "second", "b")]);
    let handle = tokio::spawn(actor.run(8));
    (client, handle)
}

// --- Tests ---

#[tokio::test]
async fn test_seeded_actor_lists_in_insertion_order() {
    let (client, _handle) = spawn_notes();

    let created = client
        .create(NoteCreate {
            title: "third".into(),
            body: "c".into(),
        })
        .await
        .unwrap();
    assert_eq!(created.id, 100);

    let ids: Vec<u32> = client.list().await.unwrap().iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![1, 2, 100]);
}

#[tokio::test]
async fn test_create_rejected_by_hook_is_not_stored() {
    let (client, _handle) = spawn_notes();

    let result = client
        .create(NoteCreate {
            title: "far too long a title".into(),
            body: String::new(),
        })
        .await;

    match result {
        Err(FrameworkError::EntityError(e)) => {
            assert_eq!(e.downcast_ref::<TitleTooLong>(), Some(&TitleTooLong(8)));
        }
        other => panic!("Expected EntityError, got {:?}", other),
    }
    assert_eq!(client.list().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_replace_keeps_identity() {
    let (client, _handle) = spawn_notes();

    let replaced = client
        .replace(
            1,
            NoteCreate {
                title: "renamed".into(),
                body: "z".into(),
            },
        )
        .await
        .unwrap();

    assert_eq!(replaced, note(1, "renamed", "z"));
    assert_eq!(client.get(1).await.unwrap(), Some(note(1, "renamed", "z")));
}

#[tokio::test]
async fn test_rejected_update_leaves_record_untouched() {
    let (client, _handle) = spawn_notes();

    let result = client
        .update(
            2,
            NoteUpdate {
                title: Some("way beyond eight".into()),
                body: Some("changed".into()),
            },
        )
        .await;
    assert!(matches!(result, Err(FrameworkError::EntityError(_))));
    assert_eq!(client.get(2).await.unwrap(), Some(note(2, "second", "b")));

    let merged = client
        .update(
            2,
            NoteUpdate {
                title: None,
                body: Some("changed".into()),
            },
        )
        .await
        .unwrap();
    assert_eq!(merged, note(2, "second", "changed"));
}

#[tokio::test]
async fn test_missing_ids_report_not_found() {
    let (client, _handle) = spawn_notes();

    assert!(client.get(42).await.unwrap().is_none());
    assert!(matches!(
        client.delete(42).await,
        Err(FrameworkError::NotFound(id)) if id == "42"
    ));
    assert!(matches!(
        client
            .update(42, NoteUpdate { title: None, body: None })
            .await,
        Err(FrameworkError::NotFound(_))
    ));
    assert_eq!(client.list().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_delete_then_clear() {
    let (client, handle) = spawn_notes();

    let deleted = client.delete(1).await.unwrap();
    assert_eq!(deleted, note(1, "first", "a"));
    assert_eq!(client.list().await.unwrap(), vec![note(2, "second", "b")]);

    assert_eq!(client.clear().await.unwrap(), 1);
    assert!(client.list().await.unwrap().is_empty());

    // Dropping the last client ends the actor loop.
    drop(client);
    handle.await.unwrap();
}
