
/// Join-table behaviour and eager loading
pub mod integration_tests {
    use crate::db::connect_memory;
    use crate::{client, client_service, service};
    use anyhow::Result;

    fn client_fields(email: &str) -> client::ClientFields {
        client::ClientFields { name: "Ana".into(), email: email.into(), phone: None, address: None }
    }

    fn service_fields(name: &str, price: i32) -> service::ServiceFields {
        service::ServiceFields { name: name.into(), description: None, price }
    }

    #[tokio::test]
    async fn test_attach_is_idempotent_and_detach_reports_removal() -> Result<()> {
        let db = connect_memory().await?;
        let c = client::create(&db, client_fields("ana@x.com")).await?;
        let s = service::create(&db, service_fields("Haircut", 20)).await?;

        assert!(client_service::attach(&db, c.id, s.id).await?);
        assert!(!client_service::attach(&db, c.id, s.id).await?);

        let loaded = client::find_with_services(&db, c.id).await?.unwrap();
        assert_eq!(loaded.services.len(), 1);
        assert_eq!(loaded.services[0].id, s.id);

        assert!(client_service::detach(&db, c.id, s.id).await?);
        assert!(!client_service::detach(&db, c.id, s.id).await?);

        let loaded = client::find_with_services(&db, c.id).await?.unwrap();
        assert!(loaded.services.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_pair_maps_to_unique_violation() -> Result<()> {
        use sea_orm::{EntityTrait, Set};

        let db = connect_memory().await?;
        let c = client::create(&db, client_fields("pair@x.com")).await?;
        let s = service::create(&db, service_fields("Haircut", 20)).await?;
        let row = || client_service::ActiveModel {
            client_id: Set(c.id),
            service_id: Set(s.id),
            created_at: Set(chrono::Utc::now().into()),
        };

        client_service::Entity::insert(row()).exec_without_returning(&db).await?;
        let second = client_service::Entity::insert(row())
            .exec_without_returning(&db)
            .await
            .map_err(crate::errors::ModelError::db);
        assert!(matches!(second, Err(crate::errors::ModelError::UniqueViolation(_))));

        // a pair inserted behind attach's back is still a no-op for attach
        assert!(!client_service::attach(&db, c.id, s.id).await?);
        Ok(())
    }

    #[tokio::test]
    async fn test_all_with_services_groups_per_client() -> Result<()> {
        let db = connect_memory().await?;
        let a = client::create(&db, client_fields("a@x.com")).await?;
        let b = client::create(&db, client_fields("b@x.com")).await?;
        let s1 = service::create(&db, service_fields("Cut", 10)).await?;
        let s2 = service::create(&db, service_fields("Shave", 5)).await?;

        client_service::attach(&db, a.id, s1.id).await?;
        client_service::attach(&db, a.id, s2.id).await?;

        let all = client::all_with_services(&db).await?;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].client.id, a.id);
        assert_eq!(all[0].services.iter().map(|s| s.id).collect::<Vec<_>>(), vec![s1.id, s2.id]);
        assert_eq!(all[1].client.id, b.id);
        assert!(all[1].services.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_client_with_services_serializes_flat() -> Result<()> {
        let db = connect_memory().await?;
        let c = client::create(&db, client_fields("flat@x.com")).await?;
        let loaded = client::find_with_services(&db, c.id).await?.unwrap();
        let v = serde_json::to_value(&loaded)?;
        assert_eq!(v["email"], "flat@x.com");
        assert!(v["services"].as_array().unwrap().is_empty());
        Ok(())
    }
}
