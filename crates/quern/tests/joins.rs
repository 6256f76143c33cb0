use chrono::{NaiveDate, NaiveTime};
use pretty_assertions::assert_eq;
use quern::{group_by, group_joined, Db, Join, Model};

#[derive(Debug, Clone, PartialEq, Model)]
struct Slot {
    id: Option<i64>,
    date: NaiveDate,
    time: NaiveTime,
    occupied: bool,
}

#[derive(Debug, Clone, PartialEq, Model)]
struct Booking {
    id: Option<i64>,
    slot_id: Option<i64>,
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
}

fn at(h: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, 0, 0).unwrap()
}

/// Four slots over two days; the two morning slots are booked.
async fn setup() -> (Db, Vec<Slot>) {
    let db = Db::builder()
        .register::<Slot>()
        .register::<Booking>()
        .connect("main", "memory")
        .build()
        .await
        .unwrap();
    db.create_tables().await.unwrap();

    let mut slots = vec![];
    for (d, h) in [(1, 9), (1, 14), (2, 9), (2, 14)] {
        let slot = Slot {
            id: None,
            date: day(d),
            time: at(h),
            occupied: h == 9,
        };
        slots.push(db.insert(slot).await.unwrap());
    }

    for slot in slots.iter().filter(|slot| slot.occupied) {
        db.insert(Booking {
            id: None,
            slot_id: slot.id,
        })
        .await
        .unwrap();
    }

    (db, slots)
}

fn by_slot() -> Join<Booking> {
    Join::left(&Slot::fields().id(), &Booking::fields().slot_id())
}

#[tokio::test]
async fn temporal_fields_round_trip() {
    let (db, slots) = setup().await;

    let stored = db.fetchall(Slot::all()).await.unwrap();
    assert_eq!(stored, slots);

    let first_day = db
        .fetchall(Slot::filter(Slot::fields().date().eq(day(1)).unwrap()))
        .await
        .unwrap();
    assert_eq!(first_day, slots[..2].to_vec());
}

#[tokio::test]
async fn inner_join_filtered_by_date() {
    let (db, slots) = setup().await;

    let query = Slot::filter(Slot::fields().date().eq(day(2)).unwrap()).join(Join::<Booking>::inner(
        &Slot::fields().id(),
        &Booking::fields().slot_id(),
    ));

    let booked = db.fetchall(query).await.unwrap();
    assert_eq!(booked, vec![slots[2].clone()]);
}

#[tokio::test]
async fn left_join_finds_free_slots() {
    let (db, slots) = setup().await;

    let query = Slot::filter(Booking::fields().id().is_null().unwrap())
        .join(by_slot())
        .order_by(&Slot::fields().id());

    let free = db.fetchall(query).await.unwrap();
    assert_eq!(free, vec![slots[1].clone(), slots[3].clone()]);
}

#[tokio::test]
async fn joined_pairs() {
    let (db, slots) = setup().await;

    let rows = db
        .fetchall_joined::<Slot, Booking>(Slot::all().join(by_slot()).order_by(&Slot::fields().id()))
        .await
        .unwrap();

    assert_eq!(rows.len(), 4);

    let (slot, booking) = &rows[0];
    assert_eq!(slot.as_ref(), Some(&slots[0]));
    assert_eq!(booking.as_ref().map(|b| b.slot_id), Some(slots[0].id));

    let (slot, booking) = &rows[1];
    assert_eq!(slot.as_ref(), Some(&slots[1]));
    assert_eq!(booking, &None);
}

#[tokio::test]
async fn joined_model_must_be_registered() {
    #[derive(Debug, Model)]
    struct Stray {
        id: Option<i64>,
    }

    let (db, _) = setup().await;
    let err = db
        .fetchall_joined::<Slot, Stray>(Slot::all())
        .await
        .unwrap_err();
    assert!(err.is_model_definition());
}

#[tokio::test]
async fn group_slots_by_date() {
    let (db, slots) = setup().await;

    let all = db
        .fetchall(Slot::all().order_by(&Slot::fields().id()))
        .await
        .unwrap();
    let groups = group_by(&Slot::fields().date(), all).unwrap();

    assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec![day(1), day(2)]);
    assert_eq!(groups[&day(1)], slots[..2].to_vec());
    assert_eq!(groups[&day(2)], slots[2..].to_vec());
}

#[tokio::test]
async fn group_joined_pairs_by_either_side() {
    let (db, slots) = setup().await;

    let rows = db
        .fetchall_joined::<Slot, Booking>(Slot::all().join(by_slot()).order_by(&Slot::fields().id()))
        .await
        .unwrap();

    let by_date = group_joined(&Slot::fields().date(), rows.clone()).unwrap();
    assert_eq!(
        by_date.keys().collect::<Vec<_>>(),
        vec![&Some(day(1)), &Some(day(2))]
    );
    assert_eq!(by_date[&Some(day(2))].len(), 2);

    // Unbooked slots have no booking side and group under `None`.
    let by_booked_slot = group_joined(&Booking::fields().slot_id(), rows).unwrap();
    assert_eq!(
        by_booked_slot.keys().collect::<Vec<_>>(),
        vec![&Some(slots[0].id), &None, &Some(slots[2].id)]
    );
    assert_eq!(by_booked_slot[&None].len(), 2);
}

#[test]
fn group_joined_rejects_foreign_fields() {
    #[derive(Debug, Model)]
    struct Room {
        id: Option<i64>,
    }

    let err = group_joined(&Room::fields().id(), Vec::<(Option<Slot>, Option<Booking>)>::new())
        .unwrap_err();
    assert!(err.is_operator());
}

#[test]
fn join_renders_on_clause() {
    assert_eq!(
        by_slot().to_string(),
        "LEFT JOIN \"booking\" ON slot.id=booking.slot_id"
    );
}
