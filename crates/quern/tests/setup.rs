use pretty_assertions::assert_eq;
use quern::{ConnectionConfig, Db, Driver, Model, PoolConfig};

#[derive(Debug, Clone, PartialEq, Model)]
struct Note {
    id: Option<i64>,
    body: String,
}

#[derive(Debug, Model)]
struct Keyless {
    code: String,
    body: String,
}

#[tokio::test]
async fn first_field_must_be_id() {
    let err = Db::builder()
        .register::<Keyless>()
        .connect("main", "memory")
        .build()
        .await
        .unwrap_err();

    assert!(err.is_model_definition());
    assert_eq!(
        err.to_string(),
        "invalid model `Keyless`: the first field should be `id`, found `code`"
    );
}

#[tokio::test]
async fn connection_is_required() {
    let err = Db::builder().register::<Note>().build().await.unwrap_err();
    assert_eq!(err.to_string(), "no database connection configured");
}

#[tokio::test]
async fn duplicate_connection_name() {
    let err = Db::builder()
        .connect("main", "memory")
        .connect("main", "memory")
        .build()
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "database `main` is already configured");
}

#[tokio::test]
async fn connection_strings() {
    for url in ["memory", "sqlite::memory:", "sqlite+rusqlite://:memory:"] {
        let db = Db::builder()
            .register::<Note>()
            .connect("main", url)
            .build()
            .await
            .unwrap();
        db.create_tables().await.unwrap();
    }

    for url in ["mysql://localhost/app", "no-scheme"] {
        let err = Db::builder()
            .connect("main", url)
            .build()
            .await
            .unwrap_err();
        assert!(err.is_invalid_connection_url(), "{url}: {err}");
    }
}

#[tokio::test]
async fn named_connections_are_independent() {
    let db = Db::builder()
        .register::<Note>()
        .connect("main", "memory")
        .connect("backup", "memory")
        .build()
        .await
        .unwrap();
    assert_eq!(db.name(), "main");

    let backup = db.using("backup").unwrap();
    assert_eq!(backup.name(), "backup");

    db.create_tables().await.unwrap();
    backup.create_tables().await.unwrap();

    backup
        .insert(Note {
            id: None,
            body: "kept elsewhere".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(db.fetchall(Note::all()).await.unwrap(), vec![]);
    assert_eq!(backup.fetchall(Note::all()).await.unwrap().len(), 1);

    let err = db.using("archive").unwrap_err();
    assert_eq!(err.to_string(), "database `archive` is not configured");
}

#[tokio::test]
async fn close_then_reuse() {
    let db = Db::builder()
        .register::<Note>()
        .connect("main", "memory")
        .build()
        .await
        .unwrap();

    db.create_tables().await.unwrap();
    db.close().await.unwrap();

    // The in-memory database is gone; the next statement opens a fresh one.
    db.create_tables().await.unwrap();
    assert_eq!(db.fetchall(Note::all()).await.unwrap(), vec![]);
}

#[test]
fn config_from_json() {
    let pool: PoolConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(pool, PoolConfig { max_size: 5, min_idle: 1 });

    let pool: PoolConfig = serde_json::from_str(r#"{"max_size": 20}"#).unwrap();
    assert_eq!(pool, PoolConfig { max_size: 20, min_idle: 1 });

    let conn: ConnectionConfig = serde_json::from_str(r#"{"url": "memory"}"#).unwrap();
    assert_eq!(conn, ConnectionConfig::new("main", "memory"));
}

#[tokio::test]
async fn connection_from_config() {
    let config: ConnectionConfig =
        serde_json::from_str(r#"{"name": "replica", "url": "sqlite::memory:"}"#).unwrap();

    let db = Db::builder()
        .register::<Note>()
        .connection(config)
        .pool(PoolConfig::new())
        .build()
        .await
        .unwrap();

    assert_eq!(db.name(), "replica");
    assert_eq!(db.driver().flavor(), quern_core::Flavor::Sqlite);
}
