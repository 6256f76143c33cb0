use quern_core::{stmt::Value, Driver};
use quern_driver_sqlite::Sqlite;

use pretty_assertions::assert_eq;

async fn people() -> Sqlite {
    let driver = Sqlite::in_memory();
    driver
        .execute(
            "CREATE TABLE IF NOT EXISTS \"person\" (id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL, name TEXT UNIQUE, meta BLOB)",
            &[],
        )
        .await
        .unwrap();
    driver
}

#[test]
fn connection_strings() {
    assert!(Sqlite::new("sqlite::memory:").unwrap().is_in_memory());
    assert!(Sqlite::new("sqlite://").unwrap().is_in_memory());
    assert!(!Sqlite::new("sqlite://data/app.db").unwrap().is_in_memory());
    assert!(!Sqlite::new("sqlite:app.db").unwrap().is_in_memory());

    let err = Sqlite::new("postgresql://localhost/db").unwrap_err();
    assert!(err.is_invalid_connection_url());
}

#[tokio::test]
async fn insert_returns_increasing_ids() {
    let driver = people().await;
    let sql = "INSERT INTO \"person\" (name, meta) VALUES (?, ?)";

    let first = driver
        .execute_insert(sql, &["ann".into(), Value::Blob(b"{}".to_vec())])
        .await
        .unwrap();
    let second = driver
        .execute_insert(sql, &["bob".into(), Value::Null])
        .await
        .unwrap();

    assert!(first > 0);
    assert_eq!(second, first + 1);
}

#[tokio::test]
async fn rows_keep_storage_classes() {
    let driver = people().await;
    driver
        .execute_insert(
            "INSERT INTO \"person\" (name, meta) VALUES (?, ?)",
            &["ann".into(), Value::Blob(vec![1, 2])],
        )
        .await
        .unwrap();

    let row = driver
        .fetch_one("SELECT * FROM \"person\" WHERE person.name = ?", &["ann".into()])
        .await
        .unwrap()
        .unwrap();

    assert_eq!(
        row.fields,
        vec![Value::Integer(1), Value::from("ann"), Value::Blob(vec![1, 2])]
    );

    let none = driver
        .fetch_one("SELECT * FROM \"person\" WHERE person.name = ?", &["zed".into()])
        .await
        .unwrap();
    assert!(none.is_none());
}

#[tokio::test]
async fn execute_reports_affected_rows() {
    let driver = people().await;
    for name in ["a", "b", "c"] {
        driver
            .execute_insert("INSERT INTO \"person\" (name, meta) VALUES (?, NULL)", &[name.into()])
            .await
            .unwrap();
    }

    let count = driver
        .execute("DELETE FROM \"person\" WHERE person.name != ?", &["a".into()])
        .await
        .unwrap();
    assert_eq!(count, 2);

    let rows = driver.fetch_all("SELECT * FROM \"person\"", &[]).await.unwrap();
    assert_eq!(rows.len(), 1);
}

#[tokio::test]
async fn unique_violation_names_the_column() {
    let driver = people().await;
    let sql = "INSERT INTO \"person\" (name, meta) VALUES (?, NULL)";

    driver.execute_insert(sql, &["ann".into()]).await.unwrap();
    let err = driver.execute_insert(sql, &["ann".into()]).await.unwrap_err();

    assert!(err.is_unique_required());
    assert!(err.is_db());
    assert_eq!(err.unique_field(), Some("name"));
    assert_eq!(err.db_query(), Some(sql));
    assert_eq!(err.db_args(), Some(&[Value::from("ann")][..]));
    assert_eq!(err.to_string(), "value for field `name` must be unique");
}

#[tokio::test]
async fn bad_sql_is_a_db_error() {
    let driver = Sqlite::in_memory();

    let err = driver.fetch_all("SELECT * FROM missing", &[]).await.unwrap_err();
    assert!(err.is_db());
    assert!(!err.is_unique_required());
    assert_eq!(err.db_query(), Some("SELECT * FROM missing"));
}

#[tokio::test]
async fn close_then_reopen_lazily() {
    let path = std::env::temp_dir().join(format!("quern-sqlite-{}.db", std::process::id()));
    let _ = std::fs::remove_file(&path);

    let driver = Sqlite::open(&path);
    driver.open().await.unwrap();
    driver
        .execute("CREATE TABLE t (id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL)", &[])
        .await
        .unwrap();
    driver.close().await.unwrap();
    driver.close().await.unwrap();

    let id = driver
        .execute_insert("INSERT INTO t DEFAULT VALUES", &[])
        .await
        .unwrap();
    assert_eq!(id, 1);

    driver.close().await.unwrap();
    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn connect_failure_carries_the_statement() {
    let driver = Sqlite::new("sqlite:/quern-missing-dir/nested/app.db").unwrap();

    let err = driver
        .execute("SELECT ?", &[Value::Integer(1)])
        .await
        .unwrap_err();

    assert!(err.is_db());
    assert_eq!(err.db_query(), Some("SELECT ?"));
    assert_eq!(err.db_args(), Some(&[Value::Integer(1)][..]));

    let err = driver.open().await.unwrap_err();
    assert!(err.is_connection_pool());
}
