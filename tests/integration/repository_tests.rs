//! Equipment repository tests

use chrono::NaiveDate;
use equipment_tracker::{
    error::AppError,
    models::{
        equipment::{ALL_KITS, ALL_OWNERS, ALL_TYPES, NONE_TAG},
        DistinctColumn, EquipmentFilter, EquipmentForm, EquipmentStatus, PurchasedFilter,
        ShippingUpdate,
    },
};
use rust_decimal::Decimal;

use crate::common::{fields, form, kit_form, repository};

fn names(rows: &[equipment_tracker::models::EquipmentShort]) -> Vec<&str> {
    rows.iter().map(|r| r.name.as_deref().unwrap_or("")).collect()
}

#[tokio::test]
async fn test_list_without_filters_is_ordered_by_name() {
    let repo = repository().await;
    for name in ["Zoom H6", "Aputure 300d", "Manfrotto Tripod"] {
        repo.equipment.create(&fields(form(name))).await.unwrap();
    }

    let rows = repo.equipment.list(&EquipmentFilter::default()).await.unwrap();
    assert_eq!(names(&rows), vec!["Aputure 300d", "Manfrotto Tripod", "Zoom H6"]);
}

#[tokio::test]
async fn test_all_kits_is_no_kit_filter() {
    let repo = repository().await;
    repo.equipment.create(&fields(kit_form("Lav Mic", "Interview Kit"))).await.unwrap();
    repo.equipment.create(&fields(kit_form("Gimbal", "B-Roll Kit"))).await.unwrap();
    repo.equipment.create(&fields(form("Laptop"))).await.unwrap();

    let everything = repo.equipment.list(&EquipmentFilter::default()).await.unwrap();
    let all_kits = repo.equipment.list(&EquipmentFilter::kit(ALL_KITS)).await.unwrap();
    assert_eq!(everything, all_kits);
    assert_eq!(all_kits.len(), 3);

    let interview = repo
        .equipment
        .list(&EquipmentFilter::kit("Interview Kit"))
        .await
        .unwrap();
    assert_eq!(names(&interview), vec!["Lav Mic"]);

    // Unset kits are stored as the literal "None" tag
    let untagged = repo.equipment.list(&EquipmentFilter::kit(NONE_TAG)).await.unwrap();
    assert_eq!(names(&untagged), vec!["Laptop"]);
}

#[tokio::test]
async fn test_filters_are_anded() {
    let repo = repository().await;
    let camera = |name: &str, owner: &str, not_purchased: bool| EquipmentForm {
        equipment_type: Some("Camera".into()),
        owner: Some(owner.into()),
        not_purchased,
        ..form(name)
    };
    repo.equipment.create(&fields(camera("FX3", "Dana", false))).await.unwrap();
    repo.equipment.create(&fields(camera("FX6", "Dana", true))).await.unwrap();
    repo.equipment.create(&fields(camera("C70", "Lee", false))).await.unwrap();
    repo.equipment
        .create(&fields(EquipmentForm {
            equipment_type: Some("Light".into()),
            owner: Some("Dana".into()),
            ..form("Nanlite")
        }))
        .await
        .unwrap();

    let filter = EquipmentFilter {
        equipment_type: Some("Camera".into()),
        owner: Some("Dana".into()),
        ..Default::default()
    };
    let rows = repo.equipment.list(&filter).await.unwrap();
    assert_eq!(names(&rows), vec!["FX3", "FX6"]);

    let purchased = EquipmentFilter {
        purchased: PurchasedFilter::Purchased,
        ..filter.clone()
    };
    assert_eq!(names(&repo.equipment.list(&purchased).await.unwrap()), vec!["FX3"]);

    let not_purchased = EquipmentFilter {
        purchased: PurchasedFilter::NotPurchased,
        ..filter
    };
    assert_eq!(names(&repo.equipment.list(&not_purchased).await.unwrap()), vec!["FX6"]);

    let placeholders = EquipmentFilter {
        kit_name: Some(ALL_KITS.into()),
        equipment_type: Some(ALL_TYPES.into()),
        owner: Some(ALL_OWNERS.into()),
        purchased: PurchasedFilter::All,
    };
    assert_eq!(repo.equipment.list(&placeholders).await.unwrap().len(), 4);
}

#[tokio::test]
async fn test_create_then_fetch_round_trip() {
    let repo = repository().await;
    let data = fields(EquipmentForm {
        name: Some("Sony FX6".into()),
        equipment_type: Some("Camera".into()),
        brand: Some("Sony".into()),
        model: Some("FX6".into()),
        model_number: Some("ILME-FX6V".into()),
        description: Some("Full-frame cinema camera".into()),
        serial_number: Some("SN123".into()),
        kit_name: Some("A Cam".into()),
        owner: Some("Studio".into()),
        status: Some(EquipmentStatus::CheckedOut),
        not_purchased: false,
        purchase_company: Some("B&H".into()),
        date_of_purchase: NaiveDate::from_ymd_opt(2023, 4, 12),
        cost: Some("5998.00".into()),
        website_url: Some("https://example.com/fx6".into()),
        date_insured: NaiveDate::from_ymd_opt(2023, 5, 1),
        weight: Some("2.50".into()),
    });

    let id = repo.equipment.create(&data).await.unwrap();
    let item = repo.equipment.get_by_id(id).await.unwrap().unwrap();

    assert_eq!(item.id, id);
    assert_eq!(item.name, data.name);
    assert_eq!(item.equipment_type.as_deref(), Some("Camera"));
    assert_eq!(item.brand, data.brand);
    assert_eq!(item.model, data.model);
    assert_eq!(item.model_number, data.model_number);
    assert_eq!(item.description, data.description);
    assert_eq!(item.serial_number, data.serial_number);
    assert_eq!(item.kit_name.as_deref(), Some("A Cam"));
    assert_eq!(item.owner, data.owner);
    assert_eq!(item.status, Some(EquipmentStatus::CheckedOut));
    assert!(!item.not_purchased);
    assert_eq!(item.purchase_company, data.purchase_company);
    assert_eq!(item.date_of_purchase, data.date_of_purchase);
    assert_eq!(item.cost, Decimal::new(5998, 0));
    assert_eq!(item.website_url, data.website_url);
    assert!(item.is_insured());
    assert_eq!(item.weight, Decimal::new(25, 1));
    assert_eq!(item.box_number, None);
}

#[tokio::test]
async fn test_get_missing_id_is_none() {
    let repo = repository().await;
    assert!(repo.equipment.get_by_id(404).await.unwrap().is_none());
}

#[tokio::test]
async fn test_update_overwrites_fields_but_not_shipping() {
    let repo = repository().await;
    let id = repo
        .equipment
        .create(&fields(EquipmentForm {
            brand: Some("Canon".into()),
            cost: Some("100".into()),
            ..kit_form("C70", "B Cam")
        }))
        .await
        .unwrap();
    let shipping = ShippingUpdate {
        carrier: Some(Some("FedEx".into())),
        box_number: Some(Some("7".into())),
        ..Default::default()
    };
    repo.equipment.update_shipping(id, &shipping).await.unwrap();

    let affected = repo.equipment.update(id, &fields(form("C70 Mk II"))).await.unwrap();
    assert_eq!(affected, 1);

    let item = repo.equipment.get_by_id(id).await.unwrap().unwrap();
    assert_eq!(item.name.as_deref(), Some("C70 Mk II"));
    assert_eq!(item.brand, None);
    assert_eq!(item.kit_name.as_deref(), Some(NONE_TAG));
    assert_eq!(item.cost, Decimal::ZERO);
    assert_eq!(item.carrier.as_deref(), Some("FedEx"));
    assert_eq!(item.box_number.as_deref(), Some("7"));
}

#[tokio::test]
async fn test_update_missing_id_affects_nothing() {
    let repo = repository().await;
    assert_eq!(repo.equipment.update(99, &fields(form("Ghost"))).await.unwrap(), 0);
}

#[tokio::test]
async fn test_delete() {
    let repo = repository().await;
    let id = repo.equipment.create(&fields(form("Slider"))).await.unwrap();

    assert_eq!(repo.equipment.delete(id + 100).await.unwrap(), 0);
    assert_eq!(repo.equipment.delete(id).await.unwrap(), 1);
    assert!(repo.equipment.get_by_id(id).await.unwrap().is_none());
    assert_eq!(repo.equipment.delete(id).await.unwrap(), 0);
}

#[tokio::test]
async fn test_shipping_update_touches_only_supplied_columns() {
    let repo = repository().await;
    let id = repo.equipment.create(&fields(form("Monitor"))).await.unwrap();
    let first = ShippingUpdate {
        carrier: Some(Some("UPS".into())),
        tracking_number: Some(Some("1Z999".into())),
        shipping_city: Some(Some("Denver".into())),
        ..Default::default()
    };
    repo.equipment.update_shipping(id, &first).await.unwrap();

    let second = ShippingUpdate {
        tracking_number: Some(None),
        shipped_date: Some(NaiveDate::from_ymd_opt(2024, 6, 3)),
        shipping_status: Some(Some("In Transit".into())),
        ..Default::default()
    };
    assert_eq!(repo.equipment.update_shipping(id, &second).await.unwrap(), 1);

    let item = repo.equipment.get_by_id(id).await.unwrap().unwrap();
    assert_eq!(item.carrier.as_deref(), Some("UPS"));
    assert_eq!(item.tracking_number, None);
    assert_eq!(item.shipping_city.as_deref(), Some("Denver"));
    assert_eq!(item.shipped_date, NaiveDate::from_ymd_opt(2024, 6, 3));
    assert_eq!(item.shipping_status.as_deref(), Some("In Transit"));
    assert_eq!(item.name.as_deref(), Some("Monitor"));
}

#[tokio::test]
async fn test_empty_shipping_update_is_rejected() {
    let repo = repository().await;
    let id = repo.equipment.create(&fields(form("Monitor"))).await.unwrap();

    let err = repo
        .equipment
        .update_shipping(id, &ShippingUpdate::default())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn test_distinct_values() {
    let repo = repository().await;
    repo.equipment.create(&fields(kit_form("Lav A", "Interview Kit"))).await.unwrap();
    repo.equipment.create(&fields(kit_form("Lav B", "Interview Kit"))).await.unwrap();
    repo.equipment.create(&fields(kit_form("Gimbal", "B-Roll Kit"))).await.unwrap();
    repo.equipment
        .create(&fields(EquipmentForm {
            owner: Some("Dana".into()),
            ..form("Laptop")
        }))
        .await
        .unwrap();

    let kits = repo.equipment.distinct_values(DistinctColumn::KitName).await.unwrap();
    assert_eq!(kits, vec!["B-Roll Kit", "Interview Kit", NONE_TAG]);

    let owners = repo.equipment.distinct_values(DistinctColumn::Owner).await.unwrap();
    assert_eq!(owners, vec!["Dana"]);

    let types = repo.equipment.distinct_values(DistinctColumn::Type).await.unwrap();
    assert_eq!(types, vec![NONE_TAG]);
}

#[tokio::test]
async fn test_boxes_and_box_contents() {
    let repo = repository().await;
    let pack = |name: &str, weight: &str, box_number: &str| {
        let repo = repo.clone();
        let name = name.to_string();
        let weight = weight.to_string();
        let box_number = box_number.to_string();
        async move {
            let id = repo
                .equipment
                .create(&fields(EquipmentForm {
                    weight: Some(weight),
                    ..kit_form(&name, "Lighting Kit")
                }))
                .await
                .unwrap();
            let update = ShippingUpdate {
                box_number: Some(Some(box_number)),
                ..Default::default()
            };
            repo.equipment.update_shipping(id, &update).await.unwrap();
        }
    };
    pack("Stand", "3.5", "2").await;
    pack("Light", "1.25", "2").await;
    pack("Softbox", "0.75", "1").await;
    repo.equipment.create(&fields(form("Unpacked"))).await.unwrap();

    assert_eq!(repo.equipment.boxes().await.unwrap(), vec!["1", "2"]);

    let items = repo.equipment.items_in_box("2").await.unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].name.as_deref(), Some("Light"));
    assert_eq!(items[0].weight, Decimal::new(125, 2));
    assert_eq!(items[0].kit_name.as_deref(), Some("Lighting Kit"));
    assert_eq!(items[1].weight, Decimal::new(35, 1));

    assert!(repo.equipment.items_in_box("99").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_rename_by_name_renames_every_match() {
    let repo = repository().await;
    let first = repo.equipment.create(&fields(form("Camera A"))).await.unwrap();
    let second = repo.equipment.create(&fields(form("Camera A"))).await.unwrap();
    let other = repo.equipment.create(&fields(form("Camera C"))).await.unwrap();

    let renamed = repo.equipment.rename_by_name("Camera A", "Camera B").await.unwrap();
    assert_eq!(renamed, 2);

    for id in [first, second] {
        let item = repo.equipment.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(item.name.as_deref(), Some("Camera B"));
    }
    let item = repo.equipment.get_by_id(other).await.unwrap().unwrap();
    assert_eq!(item.name.as_deref(), Some("Camera C"));
}

#[tokio::test]
async fn test_ping() {
    let repo = repository().await;
    repo.ping().await.unwrap();
}
