use chrono::{DateTime, Duration, NaiveDate, Utc};
use pretty_assertions::assert_eq;
use quern::{
    stmt::{Json, Primitive, Type, Value},
    Db, Enum, Model,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum)]
enum Role {
    Admin = 1,
    Member = 2,
}

#[derive(Debug, Clone, PartialEq, Model)]
struct Account {
    id: Option<i64>,
    role: Role,
    tags: Json<Vec<String>>,
    score: Option<f64>,
    active: bool,
}

#[derive(Debug, Clone, PartialEq, Model)]
struct Event {
    id: Option<i64>,
    at: DateTime<Utc>,
}

async fn setup() -> Db {
    let db = Db::builder()
        .register::<Account>()
        .register::<Event>()
        .connect("main", "memory")
        .build()
        .await
        .unwrap();
    db.create_tables().await.unwrap();
    db
}

#[test]
fn enum_primitive() {
    assert_eq!(Role::ty(), Type::Enum("Role"));

    let stored = Role::Member.adapt().unwrap();
    assert_eq!(stored, Json(2_i64).adapt().unwrap());
    assert_eq!(Role::convert(stored).unwrap(), Role::Member);
    assert_eq!(Role::convert(Value::Integer(1)).unwrap(), Role::Admin);

    let err = Role::convert(Value::Integer(7)).unwrap_err();
    assert!(err.is_type_conversion());
}

#[tokio::test]
async fn mixed_field_types_round_trip() {
    let db = setup().await;

    let admin = db
        .insert(Account {
            id: None,
            role: Role::Admin,
            tags: Json(vec!["ops".to_string(), "oncall".to_string()]),
            score: Some(4.5),
            active: true,
        })
        .await
        .unwrap();

    let member = db
        .insert(Account {
            id: None,
            role: Role::Member,
            tags: Json(vec![]),
            score: None,
            active: false,
        })
        .await
        .unwrap();

    let fields = Account::fields();

    let admins = db
        .fetchall(Account::filter(fields.role().eq(Role::Admin).unwrap()))
        .await
        .unwrap();
    assert_eq!(admins, vec![admin.clone()]);

    let unscored = db
        .fetchall(Account::filter(fields.score().is_null().unwrap()))
        .await
        .unwrap();
    assert_eq!(unscored, vec![member.clone()]);

    let inactive = db
        .fetchone(Account::filter(fields.active().eq(false).unwrap()))
        .await
        .unwrap();
    assert_eq!(inactive, Some(member));

    let high = db
        .fetchall(Account::filter(fields.score().gt(4.0).unwrap()))
        .await
        .unwrap();
    assert_eq!(high, vec![admin]);
}

#[test]
fn unsupported_operators() {
    let fields = Account::fields();

    let err = fields.role().lt(Role::Member).unwrap_err();
    assert!(err.is_operator());

    let err = fields.active().ge(true).unwrap_err();
    assert!(err.is_operator());

    let err = fields.score().eq("high").unwrap_err();
    assert!(err.is_operator());
}

#[tokio::test]
async fn utc_timestamps_compare_in_time_order() {
    let db = setup().await;

    let noon = NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .unwrap()
        .and_utc();

    for at in [
        noon,
        noon + Duration::milliseconds(500),
        noon - Duration::microseconds(1),
    ] {
        db.insert(Event { id: None, at }).await.unwrap();
    }

    let at = Event::fields().at();
    let times = |events: Vec<Event>| events.into_iter().map(|e| e.at).collect::<Vec<_>>();

    let after = db.fetchall(Event::filter(at.gt(noon).unwrap())).await.unwrap();
    assert_eq!(times(after), vec![noon + Duration::milliseconds(500)]);

    let before = db.fetchall(Event::filter(at.lt(noon).unwrap())).await.unwrap();
    assert_eq!(times(before), vec![noon - Duration::microseconds(1)]);

    let sorted = db.fetchall(Event::all().order_by(&at)).await.unwrap();
    assert_eq!(
        times(sorted),
        vec![
            noon - Duration::microseconds(1),
            noon,
            noon + Duration::milliseconds(500),
        ]
    );
}
