use super::*;

/// Tests that a created appointment can be fetched by its assigned id.
///
/// Expected: Ok with identical fields
#[tokio::test]
async fn created_appointment_is_fetchable() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = cache();

    let service = AppointmentService::new(db, &cache);
    let created = service.create(params("Alice", "Dr. Smith")).await?;
    let fetched = service.get_by_id(created.id).await?;

    assert_eq!(fetched, Some(created));

    Ok(())
}

/// Tests that creating an appointment drops a cached listing.
///
/// Expected: the listing fetched after the create includes the new appointment
#[tokio::test]
async fn create_invalidates_cached_listing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = cache();

    let service = AppointmentService::new(db, &cache);
    assert!(service.get_all().await?.is_empty());

    let created = service.create(params("Alice", "Dr. Smith")).await?;

    assert_eq!(service.get_all().await?, vec![created]);

    Ok(())
}
