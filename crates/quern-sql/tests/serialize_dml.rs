use quern_core::schema::{Field, ModelSignature};
use quern_core::stmt::{BinaryOp, Join, JoinKind, Value};
use quern_sql::{
    stmt::{Assignment, Projection, Select},
    Serializer, Statement,
};

use pretty_assertions::assert_eq;

fn field(name: &'static str) -> Field {
    user().field(name).unwrap().clone()
}

fn user() -> ModelSignature {
    ModelSignature::prepare(
        "User",
        vec![
            Field::of::<Option<i64>>("User", "id"),
            Field::of::<String>("User", "name"),
            Field::of::<i64>("User", "age"),
            Field::of::<Option<String>>("User", "email"),
        ],
    )
    .unwrap()
}

fn assign(column: &str, value: impl Into<Value>) -> Assignment {
    Assignment {
        column: column.to_string(),
        value: value.into(),
    }
}

#[test]
fn insert_sqlite() {
    let stmt = Statement::insert(
        &user(),
        vec!["A".into(), Value::Integer(21), Value::Null],
    )
    .unwrap();

    let mut params = vec![];
    let sql = Serializer::sqlite().serialize(&stmt, &mut params);

    assert_eq!(
        sql,
        "INSERT INTO \"user\" (name, age, email) VALUES (?, ?, ?)"
    );
    assert_eq!(params, vec![Value::from("A"), Value::Integer(21), Value::Null]);
}

#[test]
fn insert_postgresql_returns_id() {
    let stmt = Statement::insert(&user(), vec!["A".into(), Value::Integer(21), Value::Null]).unwrap();

    let mut params = vec![];
    let sql = Serializer::postgresql().serialize(&stmt, &mut params);

    assert_eq!(
        sql,
        "INSERT INTO \"user\" (name, age, email) VALUES ($1, $2, $3) RETURNING id"
    );
}

#[test]
fn insert_identity_only_uses_default_values() {
    let tag = ModelSignature::prepare("Tag", vec![Field::of::<i64>("Tag", "id")]).unwrap();
    let stmt = Statement::insert(&tag, vec![]).unwrap();

    let mut params = vec![];
    assert_eq!(
        Serializer::sqlite().serialize(&stmt, &mut params),
        "INSERT INTO \"tag\" DEFAULT VALUES"
    );
    assert_eq!(
        Serializer::postgresql().serialize(&stmt, &mut params),
        "INSERT INTO \"tag\" DEFAULT VALUES RETURNING id"
    );
}

#[test]
fn insert_arity_is_checked() {
    let err = Statement::insert(&user(), vec!["A".into()]).unwrap_err();
    assert!(err.is_invalid_statement());
}

#[test]
fn select_plain() {
    let mut params = vec![];
    let sql = Serializer::sqlite().serialize(&Statement::select(&user()), &mut params);

    assert_eq!(sql, "SELECT * FROM \"user\"");
    assert!(params.is_empty());
}

#[test]
fn select_with_every_clause() {
    let mut select = Select::new(&user());
    select.filter = Some(field("age").compare(BinaryOp::Ge, 18i64).unwrap());
    select.order_by = Some(field("name").column());
    select.desc = true;
    select.limit = Some(10);
    select.offset = 20;

    let mut params = vec![];
    let sql = Serializer::postgresql().serialize(&select.into(), &mut params);

    assert_eq!(
        sql,
        "SELECT * FROM \"user\" WHERE user.age >= $1 ORDER BY name DESC LIMIT 10 OFFSET 20"
    );
    assert_eq!(params, vec![Value::Integer(18)]);
}

#[test]
fn select_zero_offset_is_omitted() {
    let mut select = Select::new(&user());
    select.limit = Some(1);

    let mut params = vec![];
    assert_eq!(
        Serializer::sqlite().serialize(&select.into(), &mut params),
        "SELECT * FROM \"user\" LIMIT 1"
    );
}

#[test]
fn select_offset_without_limit() {
    let mut select = Select::new(&user());
    select.offset = 5;
    let stmt: Statement = select.into();

    let mut params = vec![];
    assert_eq!(
        Serializer::sqlite().serialize(&stmt, &mut params),
        "SELECT * FROM \"user\" LIMIT -1 OFFSET 5"
    );
    assert_eq!(
        Serializer::postgresql().serialize(&stmt, &mut params),
        "SELECT * FROM \"user\" OFFSET 5"
    );
}

#[test]
fn select_with_join() {
    let booking = ModelSignature::prepare(
        "Booking",
        vec![
            Field::of::<Option<i64>>("Booking", "id"),
            Field::of::<i64>("Booking", "user_id"),
        ],
    )
    .unwrap();

    let mut select = Select::new(&booking);
    select.joins.push(Join::new(
        JoinKind::Left,
        "User",
        booking.field("user_id").unwrap().column(),
        field("id").column(),
    ));
    select.filter = Some(field("name").compare(BinaryOp::Eq, "bob").unwrap());
    select.order_by = Some(field("age").column());

    let mut params = vec![];
    let sql = Serializer::postgresql().serialize(&select.clone().into(), &mut params);
    assert_eq!(
        sql,
        "SELECT * FROM \"booking\" LEFT JOIN \"user\" ON booking.user_id=user.id \
         WHERE user.name = $1 ORDER BY user.age"
    );

    select.projection = Projection::Table;
    select.filter = None;
    select.order_by = None;
    let sql = Serializer::sqlite().serialize(&select.into(), &mut params);
    assert_eq!(
        sql,
        "SELECT \"booking\".* FROM \"booking\" LEFT JOIN \"user\" ON booking.user_id=user.id"
    );
}

#[test]
fn update_without_filter() {
    let stmt = Statement::update(&user(), vec![assign("age", 30i64)], None).unwrap();

    let mut params = vec![];
    assert_eq!(
        Serializer::sqlite().serialize(&stmt, &mut params),
        "UPDATE \"user\" SET age=?"
    );
    assert_eq!(params, vec![Value::Integer(30)]);
}

#[test]
fn update_requires_assignments() {
    let err = Statement::update(&user(), vec![], None).unwrap_err();
    assert!(err.is_invalid_statement());
}

#[test]
fn delete() {
    let filter = field("email").is_null().unwrap();
    let stmt = Statement::delete(&user(), Some(filter));

    let mut params = vec![];
    assert_eq!(
        Serializer::postgresql().serialize(&stmt, &mut params),
        "DELETE FROM \"user\" WHERE user.email IS NULL"
    );
    assert!(params.is_empty());

    assert_eq!(
        Serializer::sqlite().serialize(&Statement::delete(&user(), None), &mut params),
        "DELETE FROM \"user\""
    );
}
