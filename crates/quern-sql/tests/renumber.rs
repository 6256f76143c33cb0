use quern_core::schema::{Field, ModelSignature};
use quern_core::stmt::{BinaryOp, Value};
use quern_sql::{stmt::Assignment, Serializer, Statement};

use pretty_assertions::assert_eq;

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

fn field(name: &str) -> Field {
    user().field(name).unwrap().clone()
}

#[test]
fn update_set_values_come_before_where_values() {
    let assignments = vec![
        Assignment {
            column: "name".into(),
            value: "B".into(),
        },
        Assignment {
            column: "age".into(),
            value: Value::Integer(22),
        },
        Assignment {
            column: "email".into(),
            value: "b@x".into(),
        },
    ];
    let filter = field("age")
        .in_list([1i64, 2])
        .unwrap();

    let stmt = Statement::update(&user(), assignments, Some(filter)).unwrap();

    let mut params = vec![];
    let sql = Serializer::postgresql().serialize(&stmt, &mut params);

    assert_eq!(
        sql,
        "UPDATE \"user\" SET name=$1, age=$2, email=$3 WHERE user.age IN ($4, $5)"
    );
    assert_eq!(
        params,
        vec![
            Value::from("B"),
            Value::Integer(22),
            Value::from("b@x"),
            Value::Integer(1),
            Value::Integer(2),
        ]
    );

    let mut params = vec![];
    let sql = Serializer::sqlite().serialize(&stmt, &mut params);
    assert_eq!(
        sql,
        "UPDATE \"user\" SET name=?, age=?, email=? WHERE user.age IN (?, ?)"
    );
    assert_eq!(params.len(), 5);
}

#[test]
fn composed_predicates_number_left_to_right() {
    let filter = field("name")
        .compare(BinaryOp::Eq, "A")
        .unwrap()
        .or(field("age").compare(BinaryOp::Gt, 40i64).unwrap())
        .and(field("email").compare(BinaryOp::Ne, Some("x".to_string())).unwrap());

    let stmt = Statement::delete(&user(), Some(filter));

    let mut params = vec![];
    let sql = Serializer::postgresql().serialize(&stmt, &mut params);

    assert_eq!(
        sql,
        "DELETE FROM \"user\" WHERE ((user.name = $1 OR user.age > $2) AND user.email != $3)"
    );
    assert_eq!(
        params,
        vec![Value::from("A"), Value::Integer(40), Value::from("x")]
    );
}

#[test]
fn markers_inside_quotes_are_kept() {
    let pg = Serializer::postgresql();

    assert_eq!(
        pg.paste_placeholders("SELECT '?' AS q, \"a?b\" FROM t WHERE x = ? AND y = ?"),
        "SELECT '?' AS q, \"a?b\" FROM t WHERE x = $1 AND y = $2"
    );
    assert_eq!(
        Serializer::sqlite().paste_placeholders("x = ? AND y = '?'"),
        "x = ? AND y = '?'"
    );
}

#[test]
fn placeholder_syntax() {
    assert_eq!(Serializer::sqlite().placeholder(3), "?");
    assert_eq!(Serializer::postgresql().placeholder(3), "$3");
}
