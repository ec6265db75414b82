use super::*;

/// Tests that listings by patient name are cached per name.
///
/// Expected: each name returns only its own appointments
#[tokio::test]
async fn caches_patient_listings_per_name() -> Result<(), AppError> {
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

    assert_eq!(service.get_by_patient_name("Alice").await?, vec![alice]);
    assert_eq!(service.get_by_patient_name("Bob").await?, vec![bob]);
    assert!(service.get_by_patient_name("Carol").await?.is_empty());

    Ok(())
}

/// Tests that listings by dentist are keyed apart from patient listings.
///
/// Expected: a dentist query never returns a cached patient query with the same text
#[tokio::test]
async fn keys_dentist_listings_apart_from_patient_listings() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = cache();

    let service = AppointmentService::new(db, &cache);
    let by_dentist = service.create(params("Alice", "Smith")).await?;
    let by_patient = service.create(params("Smith", "Dr. Jones")).await?;

    assert_eq!(service.get_by_patient_name("Smith").await?, vec![by_patient]);
    assert_eq!(service.get_by_dentist("Smith").await?, vec![by_dentist]);

    Ok(())
}

/// Tests that get_all returns appointments in insertion order.
///
/// Expected: Ok with appointments in creation order
#[tokio::test]
async fn get_all_preserves_insertion_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = cache();

    let service = AppointmentService::new(db, &cache);
    let first = service.create(params("Alice", "Dr. Smith")).await?;
    let second = service.create(params("Bob", "Dr. Jones")).await?;
    let third = service.create(params("Carol", "Dr. Smith")).await?;

    assert_eq!(service.get_all().await?, vec![first, second, third]);

    Ok(())
}
