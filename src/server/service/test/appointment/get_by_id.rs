use super::*;

/// Tests that a second read is served from the cache.
///
/// Writes directly through the repository so the cache is bypassed; the service keeps
/// returning the cached copy.
///
/// Expected: Ok with the originally cached fields
#[tokio::test]
async fn serves_repeat_reads_from_cache() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = cache();

    let entity = factory::appointment::AppointmentFactory::new(db)
        .patient_name("Alice")
        .build()
        .await?;

    let service = AppointmentService::new(db, &cache);
    let first = service.get_by_id(entity.id).await?;

    let mut changed = params("Changed", "Dr. Jones");
    changed.procedure = "Filling".to_string();
    AppointmentRepository::new(db)
        .update(UpdateAppointmentParams {
            id: entity.id,
            patient_name: changed.patient_name,
            date: changed.date,
            dentist: changed.dentist,
            procedure: changed.procedure,
        })
        .await?;

    let second = service.get_by_id(entity.id).await?;

    assert_eq!(first, second);
    assert_eq!(second.unwrap().patient_name, "Alice");

    Ok(())
}

/// Tests that distinct ids are cached independently.
///
/// Expected: each id returns its own appointment
#[tokio::test]
async fn caches_ids_independently() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = cache();

    let service = AppointmentService::new(db, &cache);
    let alice = service.create(params("Alice", "Dr. Smith")).await?;
    let bob = service.create(params("Bob", "Dr. Smith")).await?;

    assert_eq!(service.get_by_id(alice.id).await?, Some(alice.clone()));
    assert_eq!(service.get_by_id(bob.id).await?, Some(bob.clone()));
    assert_eq!(service.get_by_id(alice.id).await?, Some(alice));

    Ok(())
}

/// Tests that a missing id is not cached.
///
/// Expected: Ok(None), and no cache entry stored
#[tokio::test]
async fn does_not_cache_missing_appointment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = cache();

    let service = AppointmentService::new(db, &cache);
    let result = service.get_by_id(404).await?;

    assert!(result.is_none());
    assert_eq!(cache.len().await, 0);

    Ok(())
}
